//! Scrolling tilemap resource.
//!
//! A fixed-size grid backed by a square-tile atlas. The map keeps a
//! continuous (float) scroll position; rendering shifts the visible columns
//! by the sub-tile remainder of that position ("soft scroll") so the
//! background slides smoothly between tile boundaries.
//!
//! Cells carry no tile identity yet: every visible cell draws
//! [`FILL_TILE`] from the atlas.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{debug, info};

use crate::error::EngineError;
use crate::resources::backbuffer::Blit;

/// Edge length of a tile in pixels.
pub const TILE_SIZE: i32 = 16;
/// Atlas dimensions in pixels.
pub const TILESHEET_WIDTH: i32 = 256;
pub const TILESHEET_HEIGHT: i32 = 256;
/// Atlas index drawn in every visible cell.
pub const FILL_TILE: usize = 2;
/// Default auto-scroll rate in pixels per second.
pub const DEFAULT_SCROLL_SPEED: f32 = 15.0;

/// What happens when the scroll position reaches the end of the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// Keep `x` in `[0, world_width)` by wrapping around.
    #[default]
    Wrap,
    /// Reverse direction at either end.
    PingPong,
    /// Stop at the end of the world.
    Clamp,
}

impl ScrollMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "wrap" => Some(ScrollMode::Wrap),
            "pingpong" | "ping-pong" | "ping_pong" => Some(ScrollMode::PingPong),
            "clamp" => Some(ScrollMode::Clamp),
            _ => None,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Tilemap {
    /// Scroll position in pixels.
    pub x: f32,
    pub y: f32,
    /// Grid size in tiles.
    pub width: i32,
    pub height: i32,
    /// Atlas texture key.
    pub tex_key: String,
    pub tilesize: i32,
    pub tilesheet_width: i32,
    pub tilesheet_height: i32,
    pub scroll_mode: ScrollMode,
    pub scroll_speed: f32,
    /// +1.0 or -1.0; only flips in [`ScrollMode::PingPong`].
    scroll_dir: f32,
    /// Atlas index -> (source_x, source_y), row-major.
    postab: Vec<(i32, i32)>,
}

impl Tilemap {
    /// Create a `width`×`height` map over the atlas `tex_key`, scrolled to
    /// the origin.
    pub fn new(width: i32, height: i32, tex_key: impl Into<String>) -> Self {
        let tilesize = TILE_SIZE;
        let tilesheet_width = TILESHEET_WIDTH;
        let tilesheet_height = TILESHEET_HEIGHT;

        let cols = tilesheet_width / tilesize;
        let rows = tilesheet_height / tilesize;
        let mut postab = Vec::with_capacity((cols * rows) as usize);
        for ty in 0..rows {
            for tx in 0..cols {
                postab.push((tx * tilesize, ty * tilesize));
            }
        }

        Tilemap {
            x: 0.0,
            y: 0.0,
            width,
            height,
            tex_key: tex_key.into(),
            tilesize,
            tilesheet_width,
            tilesheet_height,
            scroll_mode: ScrollMode::default(),
            scroll_speed: DEFAULT_SCROLL_SPEED,
            scroll_dir: 1.0,
            postab,
        }
    }

    pub fn with_scroll(mut self, mode: ScrollMode, speed: f32) -> Self {
        self.scroll_mode = mode;
        self.scroll_speed = speed;
        self
    }

    /// Level loading stub. Reports success without reading `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        info!(
            "Level loading not implemented, skipping {}",
            path.as_ref().display()
        );
        Ok(())
    }

    /// Number of entries in the atlas lookup table.
    pub fn tile_count(&self) -> usize {
        self.postab.len()
    }

    /// Atlas pixel offset of tile `index`.
    pub fn lookup(&self, index: usize) -> Option<(i32, i32)> {
        self.postab.get(index).copied()
    }

    /// World width in pixels.
    pub fn world_width(&self) -> f32 {
        (self.width * self.tilesize) as f32
    }

    /// Sub-tile horizontal offset in `[0, tilesize)`.
    pub fn soft_scroll_x(&self) -> i32 {
        (self.x.floor() as i32).rem_euclid(self.tilesize)
    }

    /// Advance the auto-scroll by `delta` seconds.
    pub fn scroll_update(&mut self, delta: f32) {
        let world = self.world_width();
        let step = self.scroll_speed * delta;
        if world <= 0.0 {
            self.x += step;
            return;
        }
        match self.scroll_mode {
            ScrollMode::Wrap => {
                self.x = (self.x + step).rem_euclid(world);
                // rem_euclid can round up to `world` for tiny negatives.
                if self.x >= world {
                    self.x = 0.0;
                }
            }
            ScrollMode::Clamp => {
                self.x = (self.x + step).clamp(0.0, world);
            }
            ScrollMode::PingPong => {
                // Fold the travelled distance into a 2*world period so large
                // deltas bounce the right number of times.
                let period = 2.0 * world;
                let mut travelled = if self.scroll_dir > 0.0 {
                    self.x
                } else {
                    period - self.x
                };
                travelled = (travelled + step).rem_euclid(period);
                if travelled <= world {
                    self.x = travelled;
                    self.scroll_dir = 1.0;
                } else {
                    self.x = period - travelled;
                    self.scroll_dir = -1.0;
                }
            }
        }
        debug!("tilemap scroll x={:.2} dir={}", self.x, self.scroll_dir);
    }

    /// Current scroll direction, `1.0` (right) or `-1.0` (left).
    pub fn scroll_dir(&self) -> f32 {
        self.scroll_dir
    }

    /// Blits covering a `screen_w`×`screen_h` view.
    ///
    /// Rows `0..screen_h/ts`, columns `0..=screen_w/ts` (one extra column
    /// covers the partially scrolled edge), each shifted left by
    /// [`soft_scroll_x`](Self::soft_scroll_x).
    pub fn visible_tiles(&self, screen_w: i32, screen_h: i32) -> Vec<Blit> {
        let ts = self.tilesize;
        let soft = self.soft_scroll_x();
        let Some((source_x, source_y)) = self.lookup(FILL_TILE) else {
            return Vec::new();
        };

        let rows = screen_h / ts;
        let cols = screen_w / ts + 1;
        let mut blits = Vec::with_capacity((rows.max(0) * cols.max(0)) as usize);
        for ty in 0..rows {
            for tx in 0..cols {
                blits.push(Blit {
                    tex_key: self.tex_key.clone(),
                    source_x,
                    source_y,
                    width: ts,
                    height: ts,
                    dest_x: tx * ts - soft,
                    dest_y: ty * ts,
                });
            }
        }
        blits
    }
}
