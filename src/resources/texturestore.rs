//! Loaded textures keyed by name.
//!
//! The store owns every texture; sprites and the tilemap only hold the key.
//! Textures are loaded once before the main loop and released together on
//! shutdown.
use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{error, info};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::EngineError;

/// Pixels of this colour become fully transparent on load.
pub const COLOR_KEY: Color = Color {
    r: 255,
    g: 0,
    b: 255,
    a: 255,
};

/// Replace every [`COLOR_KEY`] pixel of `image` with transparent black.
pub fn apply_color_key(image: &mut Image) {
    image.color_replace(COLOR_KEY, Color::BLANK);
}

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    /// Load the image at `path`, apply the colour key and store it as `key`.
    pub fn load_image(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<(), EngineError> {
        let path = path.as_ref();
        let asset_error = |reason: String| {
            error!("error on image loading: {}: {}", path.display(), reason);
            EngineError::AssetLoad {
                path: path.to_path_buf(),
                reason,
            }
        };

        let path_str = path
            .to_str()
            .ok_or_else(|| asset_error("path is not valid UTF-8".into()))?;
        let mut image = Image::load_image(path_str).map_err(|e| asset_error(e.to_string()))?;
        apply_color_key(&mut image);
        let texture = rl
            .load_texture_from_image(th, &image)
            .map_err(|e| asset_error(e.to_string()))?;

        let key = key.into();
        info!(
            "Loaded {} as '{}' ({}x{})",
            path.display(),
            key,
            texture.width,
            texture.height
        );
        self.map.insert(key, texture);
        Ok(())
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    /// Release all textures.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
