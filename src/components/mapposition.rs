use bevy_ecs::prelude::Component;

/// Top-left position in logical screen pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Integer pixel position, truncated toward zero.
    pub fn pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_truncates() {
        assert_eq!(MapPosition::new(100.99, 5.5).pixel(), (100, 5));
        assert_eq!(MapPosition::new(0.999, 0.0).pixel(), (0, 0));
        assert_eq!(MapPosition::new(-0.5, -1.5).pixel(), (0, -1));
    }
}
