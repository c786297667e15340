//! Softscroll main entry point.
//!
//! A minimal 2D game runtime written in Rust using:
//! - **raylib** for windowing, input polling and texture loading
//! - **bevy_ecs** to hold game state and order the per-frame systems
//!
//! The executable opens a 368×240 logical screen scaled 3×, auto-scrolls a
//! tiled background and lets the arrow keys move a ship. Escape quits.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if absent), open the window and render target
//! 2. Preload the sprite and tile atlases from `data/`
//! 3. Spawn the player and build the tilemap
//! 4. Each frame: tick clock, poll keys, update, draw to backbuffer, present
//! 5. Release textures, render target and window
//!
//! # Exit codes
//!
//! `0` on normal termination, `1` if the window or render target could not be
//! created, `2` if an image asset failed to load.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use softscroll::game;
use softscroll::resources::gameconfig::GameConfig;

/// Softscroll 2D
#[derive(Parser)]
#[command(
    version,
    about = "Minimal soft-scrolling 2D game runtime. Arrow keys move, D/F fire, Escape quits."
)]
struct Cli {}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _cli = Cli::parse();

    let mut config = GameConfig::new();
    if let Err(e) = config.load_from_file() {
        info!("{}, using defaults", e);
    }

    match game::start(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
