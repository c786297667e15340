//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Every value
//! has a default, so a missing file or key still yields a playable setup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 368
//! height = 240
//! scale = 3
//! filter = nearest
//!
//! [window]
//! title = game
//! vsync = true
//! target_fps = 0
//!
//! [background]
//! r = 0
//! g = 0
//! b = 100
//!
//! [assets]
//! spritesheet = data/spritesheet1.bmp
//! tilesheet = data/tilesheet1.bmp
//! level = level1.tmx
//!
//! [tilemap]
//! width = 40
//! height = 14
//! scroll_mode = wrap
//! scroll_speed = 15
//!
//! [input]
//! back = escape
//! fire1 = d
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::events::input::InputAction;
use crate::resources::keymap::{KeyMap, parse_key_name};
use crate::resources::rendertarget::RenderFilter;
use crate::resources::tilemap::{DEFAULT_SCROLL_SPEED, ScrollMode};

const DEFAULT_RENDER_WIDTH: u32 = 368;
const DEFAULT_RENDER_HEIGHT: u32 = 240;
const DEFAULT_SCALE: u32 = 3;
const DEFAULT_TITLE: &str = "game";
const DEFAULT_TARGET_FPS: u32 = 0;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CLEAR_COLOR: (u8, u8, u8) = (0, 0, 100);
const DEFAULT_SPRITESHEET: &str = "data/spritesheet1.bmp";
const DEFAULT_TILESHEET: &str = "data/tilesheet1.bmp";
const DEFAULT_LEVEL: &str = "level1.tmx";
const DEFAULT_TILEMAP_WIDTH: i32 = 40;
const DEFAULT_TILEMAP_HEIGHT: i32 = 14;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Logical render width in pixels.
    pub render_width: u32,
    /// Logical render height in pixels.
    pub render_height: u32,
    /// Integer window upscale factor.
    pub scale: u32,
    pub filter: RenderFilter,
    pub title: String,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Frame cap; 0 leaves pacing to vsync.
    pub target_fps: u32,
    /// Backbuffer clear colour (r, g, b).
    pub clear_color: (u8, u8, u8),
    pub spritesheet_path: PathBuf,
    pub tilesheet_path: PathBuf,
    pub level_path: PathBuf,
    /// Tilemap size in tiles.
    pub tilemap_width: i32,
    pub tilemap_height: i32,
    pub scroll_mode: ScrollMode,
    pub scroll_speed: f32,
    pub keymap: KeyMap,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            scale: DEFAULT_SCALE,
            filter: RenderFilter::default(),
            title: DEFAULT_TITLE.to_string(),
            vsync: DEFAULT_VSYNC,
            target_fps: DEFAULT_TARGET_FPS,
            clear_color: DEFAULT_CLEAR_COLOR,
            spritesheet_path: PathBuf::from(DEFAULT_SPRITESHEET),
            tilesheet_path: PathBuf::from(DEFAULT_TILESHEET),
            level_path: PathBuf::from(DEFAULT_LEVEL),
            tilemap_width: DEFAULT_TILEMAP_WIDTH,
            tilemap_height: DEFAULT_TILEMAP_HEIGHT,
            scroll_mode: ScrollMode::default(),
            scroll_speed: DEFAULT_SCROLL_SPEED,
            keymap: KeyMap::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [render] section
        // raylib takes dimensions as i32
        if let Some(width) = read_uint::<i32>(config, "render", "width") {
            self.render_width = width as u32;
        }
        if let Some(height) = read_uint::<i32>(config, "render", "height") {
            self.render_height = height as u32;
        }
        if let Some(scale) = read_uint::<u32>(config, "render", "scale") {
            if scale >= 1 {
                self.scale = scale;
            } else {
                warn!("Ignoring render scale 0");
            }
        }
        if let Some(name) = config.get("render", "filter") {
            match RenderFilter::parse(&name) {
                Some(filter) => self.filter = filter,
                None => warn!("Unknown render filter '{}'", name),
            }
        }

        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = read_uint::<u32>(config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [background] section
        let channel = |key: &str, current: u8| -> u8 {
            read_uint::<u8>(config, "background", key).unwrap_or(current)
        };
        self.clear_color = (
            channel("r", self.clear_color.0),
            channel("g", self.clear_color.1),
            channel("b", self.clear_color.2),
        );

        // [assets] section
        if let Some(path) = config.get("assets", "spritesheet") {
            self.spritesheet_path = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "tilesheet") {
            self.tilesheet_path = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "level") {
            self.level_path = PathBuf::from(path);
        }

        // [tilemap] section
        if let Some(width) = read_uint::<i32>(config, "tilemap", "width") {
            self.tilemap_width = width;
        }
        if let Some(height) = read_uint::<i32>(config, "tilemap", "height") {
            self.tilemap_height = height;
        }
        if let Some(name) = config.get("tilemap", "scroll_mode") {
            match ScrollMode::parse(&name) {
                Some(mode) => self.scroll_mode = mode,
                None => warn!("Unknown scroll mode '{}'", name),
            }
        }
        if let Some(speed) = config.getfloat("tilemap", "scroll_speed").ok().flatten() {
            self.scroll_speed = speed as f32;
        }

        // [input] section
        for action in InputAction::ALL {
            if let Some(name) = config.get("input", action.config_name()) {
                match parse_key_name(&name) {
                    Some(key) => self.keymap.rebind(action, key),
                    None => warn!("Unknown key '{}' for action '{}'", name, action.config_name()),
                }
            }
        }

        info!(
            "Loaded config: {}x{} render, scale {}, vsync={}, tilemap {}x{} ({:?})",
            self.render_width,
            self.render_height,
            self.scale,
            self.vsync,
            self.tilemap_width,
            self.tilemap_height,
            self.scroll_mode
        );
    }

    /// Window size in pixels (logical resolution times scale), or `None` if
    /// it does not fit raylib's `i32` dimensions.
    pub fn window_size(&self) -> Option<(i32, i32)> {
        let width = self.render_width.checked_mul(self.scale)?;
        let height = self.render_height.checked_mul(self.scale)?;
        Some((i32::try_from(width).ok()?, i32::try_from(height).ok()?))
    }
}

/// Read an unsigned key and narrow it to `T`. Out-of-range values are logged
/// and ignored.
fn read_uint<T: TryFrom<u64>>(config: &Ini, section: &str, key: &str) -> Option<T> {
    let raw = config.getuint(section, key).ok().flatten()?;
    match T::try_from(raw) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring out of range [{}] {} = {}", section, key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::KeyboardKey;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!((config.render_width, config.render_height), (368, 240));
        assert_eq!(config.scale, 3);
        assert_eq!(config.window_size(), Some((1104, 720)));
        assert_eq!(config.clear_color, (0, 0, 100));
        assert_eq!(config.scroll_mode, ScrollMode::Wrap);
        assert_eq!(config.scroll_speed, 15.0);
        assert_eq!((config.tilemap_width, config.tilemap_height), (40, 14));
        assert_eq!(config.spritesheet_path, PathBuf::from("data/spritesheet1.bmp"));
    }

    #[test]
    fn test_load_overrides_only_present_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[render]\nscale = 2\n\n[tilemap]\nscroll_mode = pingpong\nscroll_speed = 30.5\n\n[background]\nb = 40\n",
            )
            .unwrap();
        assert_eq!(config.scale, 2);
        assert_eq!(config.render_width, 368);
        assert_eq!(config.scroll_mode, ScrollMode::PingPong);
        assert_eq!(config.scroll_speed, 30.5);
        assert_eq!(config.clear_color, (0, 0, 40));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[render]\nscale = 0\nfilter = blurry\n\n[tilemap]\nscroll_mode = sideways\n")
            .unwrap();
        assert_eq!(config.scale, 3);
        assert_eq!(config.filter, RenderFilter::Nearest);
        assert_eq!(config.scroll_mode, ScrollMode::Wrap);
    }

    #[test]
    fn test_input_section_rebinds_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[input]\nfire1 = space\nstart = enter\nback = nonsense\n")
            .unwrap();
        let map = &config.keymap;
        assert_eq!(
            map.action_for(KeyboardKey::KEY_SPACE as i32),
            Some(InputAction::Fire1)
        );
        assert_eq!(map.action_for(KeyboardKey::KEY_D as i32), None);
        assert_eq!(
            map.action_for(KeyboardKey::KEY_ENTER as i32),
            Some(InputAction::Start)
        );
        // Unknown key name leaves the default binding in place.
        assert_eq!(
            map.action_for(KeyboardKey::KEY_ESCAPE as i32),
            Some(InputAction::Back)
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.scale, 3);
    }

    #[test]
    fn test_out_of_range_values_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[render]\nwidth = 4294967664\nscale = 8589934595\n\n[window]\ntarget_fps = 4294967356\n\n[background]\nr = 300\n\n[tilemap]\nheight = 2147483648\n",
            )
            .unwrap();
        assert_eq!(config.render_width, 368);
        assert_eq!(config.scale, 3);
        assert_eq!(config.target_fps, 0);
        assert_eq!(config.clear_color, (0, 0, 100));
        assert_eq!(config.tilemap_height, 14);
    }

    #[test]
    fn test_window_size_overflow_is_none() {
        let config = GameConfig {
            render_width: 1 << 20,
            scale: 1 << 12,
            ..GameConfig::new()
        };
        assert_eq!(config.window_size(), None);

        let config = GameConfig {
            render_width: u32::MAX,
            scale: 2,
            ..GameConfig::new()
        };
        assert_eq!(config.window_size(), None);
    }
}
