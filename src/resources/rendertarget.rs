//! Render target resource for fixed-resolution rendering.
//!
//! Holds the GPU side of the backbuffer: a framebuffer texture at the game's
//! logical resolution which is stretched by an integer factor onto the
//! window once per frame.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::error::EngineError;

/// Texture filtering mode for scaling the render target.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum RenderFilter {
    /// Point/nearest-neighbor filtering - sharp pixels, no blur.
    #[default]
    Nearest,
    /// Bilinear filtering - smooth scaling with interpolation.
    Bilinear,
}

impl RenderFilter {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nearest" | "point" => Some(RenderFilter::Nearest),
            "bilinear" | "linear" => Some(RenderFilter::Bilinear),
            _ => None,
        }
    }
}

/// Offscreen framebuffer at logical resolution.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Logical width in pixels.
    pub game_width: u32,
    /// Logical height in pixels.
    pub game_height: u32,
    /// Integer upscale factor applied when compositing to the window.
    pub scale: u32,
    /// Current texture filtering mode.
    pub filter: RenderFilter,
}

impl RenderTarget {
    /// Create a render target at the given logical resolution.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
        scale: u32,
    ) -> Result<Self, EngineError> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| EngineError::Init(format!("Failed to create render texture: {}", e)))?;

        let mut target = Self {
            texture,
            game_width: width,
            game_height: height,
            scale,
            filter: RenderFilter::default(),
        };
        target.apply_filter();

        Ok(target)
    }

    /// Set the texture filtering mode.
    pub fn set_filter(&mut self, filter: RenderFilter) {
        self.filter = filter;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let filter_value = match self.filter {
            RenderFilter::Nearest => TextureFilter::TEXTURE_FILTER_POINT as i32,
            RenderFilter::Bilinear => TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
        };
        unsafe {
            ffi::SetTextureFilter(self.texture.texture, filter_value);
        }
    }

    /// Source rectangle covering the whole texture.
    ///
    /// Negative height flips the Y axis, compensating for OpenGL's inverted
    /// texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Destination on the window: origin, stretched by `scale`.
    pub fn window_rect(&self) -> Rectangle {
        window_rect(self.game_width, self.game_height, self.scale)
    }
}

/// Window-space rectangle for a `width`×`height` surface scaled by `scale`.
pub fn window_rect(width: u32, height: u32, scale: u32) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: (width * scale) as f32,
        height: (height * scale) as f32,
    }
}
