//! Offscreen backbuffer draw list.
//!
//! Every draw call of a frame targets the [`Backbuffer`], never the window.
//! The draw systems record a clear colour and a sequence of atlas blits here;
//! the present system then replays them into the
//! [`RenderTarget`](crate::resources::rendertarget::RenderTarget) inside a
//! scoped texture mode, composites the result to the window once, and
//! presents.
//!
//! Keeping the frame as data is what lets the whole update/draw pass run and
//! be inspected without a window.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Rectangle, Vector2};

/// One copy of an atlas sub-rectangle onto the backbuffer at 1:1 scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blit {
    /// Texture key in the [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub tex_key: String,
    pub source_x: i32,
    pub source_y: i32,
    pub width: i32,
    pub height: i32,
    /// Destination in backbuffer pixels, top-left origin.
    pub dest_x: i32,
    pub dest_y: i32,
}

impl Blit {
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: self.source_x as f32,
            y: self.source_y as f32,
            width: self.width as f32,
            height: self.height as f32,
        }
    }

    pub fn dest_pos(&self) -> Vector2 {
        Vector2 {
            x: self.dest_x as f32,
            y: self.dest_y as f32,
        }
    }
}

/// Draw commands recorded against the logical-resolution surface.
#[derive(Resource, Debug, Clone)]
pub struct Backbuffer {
    /// Logical width in pixels.
    pub width: i32,
    /// Logical height in pixels.
    pub height: i32,
    clear_color: Option<Color>,
    draw_color: Color,
    blits: Vec<Blit>,
}

impl Backbuffer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            clear_color: None,
            draw_color: Color::WHITE,
            blits: Vec::new(),
        }
    }

    /// Start a new frame filled with `(r, g, b)`.
    ///
    /// The fill colour carries alpha 0. Afterwards the draw colour is reset to
    /// opaque white, which is the tint used for every blit.
    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        self.clear_color = Some(Color::new(r, g, b, 0));
        self.draw_color = Color::WHITE;
        self.blits.clear();
    }

    /// Copy the atlas rectangle described by `blit` onto the backbuffer,
    /// tinted with the current draw colour when replayed.
    pub fn draw_subimage(&mut self, blit: Blit) {
        self.blits.push(blit);
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    /// Blits recorded since the last clear, in draw order.
    pub fn blits(&self) -> &[Blit] {
        &self.blits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blit(tex_key: &str, x: i32, y: i32, w: i32, h: i32, sx: i32, sy: i32) -> Blit {
        Blit {
            tex_key: tex_key.to_string(),
            source_x: sx,
            source_y: sy,
            width: w,
            height: h,
            dest_x: x,
            dest_y: y,
        }
    }

    #[test]
    fn test_new_backbuffer_is_empty() {
        let bb = Backbuffer::new(368, 240);
        assert_eq!(bb.width, 368);
        assert_eq!(bb.height, 240);
        assert!(bb.clear_color().is_none());
        assert!(bb.blits().is_empty());
    }

    #[test]
    fn test_clear_uses_transparent_alpha_and_resets_draw_color() {
        let mut bb = Backbuffer::new(368, 240);
        bb.clear(0, 0, 100);
        let c = bb.clear_color().unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0, 0, 100, 0));
        let d = bb.draw_color();
        assert_eq!((d.r, d.g, d.b, d.a), (255, 255, 255, 255));
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut bb = Backbuffer::new(368, 240);
        bb.clear(0, 0, 0);
        bb.draw_subimage(blit("tiles", 0, 0, 16, 16, 32, 0));
        assert_eq!(bb.blits().len(), 1);
        bb.clear(0, 0, 0);
        assert!(bb.blits().is_empty());
    }

    #[test]
    fn test_draw_subimage_records_rectangles() {
        let mut bb = Backbuffer::new(368, 240);
        bb.draw_subimage(blit("sprites", 100, 101, 24, 16, 48, 16));
        let blit = &bb.blits()[0];
        assert_eq!(blit.tex_key, "sprites");
        let src = blit.source_rect();
        assert_eq!((src.x, src.y, src.width, src.height), (48.0, 16.0, 24.0, 16.0));
        let dest = blit.dest_pos();
        assert_eq!((dest.x, dest.y), (100.0, 101.0));
    }
}
