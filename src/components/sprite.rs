use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;
use crate::resources::backbuffer::Blit;

/// A textured rectangle cut from an atlas.
///
/// `tex_key` refers to a texture owned by the
/// [`TextureStore`](crate::resources::texturestore::TextureStore); the sprite
/// never loads or frees it. Size and source rectangle are fixed at creation.
/// `active` gates both update and draw.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: Option<String>,
    pub width: i32,
    pub height: i32,
    pub source_x: i32,
    pub source_y: i32,
    pub active: bool,
}

impl Sprite {
    pub fn new(
        width: i32,
        height: i32,
        tex_key: impl Into<String>,
        source_x: i32,
        source_y: i32,
    ) -> Self {
        Self {
            tex_key: Some(tex_key.into()),
            width,
            height,
            source_x,
            source_y,
            active: true,
        }
    }

    /// Reset geometry and atlas rectangle and mark the sprite active.
    ///
    /// With `tex_key == None` the current texture is kept, so a sprite can be
    /// reshaped without touching its skin.
    ///
    /// Position is not part of the sprite: it lives in the entity's
    /// [`MapPosition`], which callers set alongside this call to move the
    /// sprite as well.
    pub fn init(
        &mut self,
        width: i32,
        height: i32,
        tex_key: Option<&str>,
        source_x: i32,
        source_y: i32,
    ) {
        self.active = true;
        self.width = width;
        self.height = height;
        if let Some(key) = tex_key {
            self.tex_key = Some(key.to_string());
        }
        self.source_x = source_x;
        self.source_y = source_y;
    }

    /// The backbuffer copy for this sprite at `pos`, or `None` when inactive
    /// or without a texture.
    pub fn blit(&self, pos: &MapPosition) -> Option<Blit> {
        if !self.active {
            return None;
        }
        let tex_key = self.tex_key.as_ref()?;
        let (dest_x, dest_y) = pos.pixel();
        Some(Blit {
            tex_key: tex_key.clone(),
            source_x: self.source_x,
            source_y: self.source_y,
            width: self.width,
            height: self.height,
            dest_x,
            dest_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sprite_is_active() {
        let s = Sprite::new(24, 16, "sprites", 48, 16);
        assert!(s.active);
        assert_eq!(s.tex_key.as_deref(), Some("sprites"));
    }

    #[test]
    fn test_init_without_texture_keeps_previous() {
        let mut s = Sprite::new(24, 16, "sprites", 48, 16);
        s.active = false;
        s.init(32, 32, None, 0, 64);
        assert!(s.active);
        assert_eq!((s.width, s.height), (32, 32));
        assert_eq!((s.source_x, s.source_y), (0, 64));
        assert_eq!(s.tex_key.as_deref(), Some("sprites"));

        s.init(32, 32, Some("other"), 0, 64);
        assert_eq!(s.tex_key.as_deref(), Some("other"));
    }

    #[test]
    fn test_blit_truncates_position() {
        let s = Sprite::new(24, 16, "sprites", 48, 16);
        let blit = s.blit(&MapPosition::new(100.9, 57.2)).unwrap();
        assert_eq!((blit.dest_x, blit.dest_y), (100, 57));
        assert_eq!((blit.source_x, blit.source_y), (48, 16));
        assert_eq!((blit.width, blit.height), (24, 16));
    }

    #[test]
    fn test_inactive_sprite_does_not_draw() {
        let mut s = Sprite::new(24, 16, "sprites", 48, 16);
        s.active = false;
        assert!(s.blit(&MapPosition::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_sprite_without_texture_does_not_draw() {
        let mut s = Sprite::new(24, 16, "sprites", 48, 16);
        s.tex_key = None;
        assert!(s.blit(&MapPosition::new(0.0, 0.0)).is_none());
    }
}
