//! Game setup and the frame loop.
//!
//! Startup goes `open_window` → [`init_world`] → [`preload`] →
//! [`enter_running`], then [`run`] steps a [`GameLoop`] until the back action
//! (or the window manager) ends the game, and [`shutdown`] releases textures,
//! the render target and finally the window.
//!
//! A frame is, in order: clock tick, input poll, input apply, tilemap scroll,
//! sprite update, backbuffer clear, tilemap draw, sprite draw, back-action
//! check, composite and present. Every frame performs exactly one such cycle
//! with the measured delta; there is no fixed-timestep accumulator.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::{RaylibHandle, RaylibThread};

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::error::EngineError;
use crate::resources::backbuffer::Backbuffer;
use crate::resources::clock::{Clock, TimeSource};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;
use crate::resources::keymap::KeyEvents;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::Tilemap;
use crate::resources::worldtime::WorldTime;
use crate::systems::gamestate::{check_back_action, state_is_running};
use crate::systems::input::{poll_keyboard, update_input_state};
use crate::systems::inputcontroller::input_controller;
use crate::systems::render::{clear_backbuffer, draw_sprites, draw_tilemap, present_frame};
use crate::systems::scroll::tilemap_scroll;
use crate::systems::time::tick_clock;

/// Texture key of the sprite atlas.
pub const SPRITESHEET: &str = "spritesheet";
/// Texture key of the tile atlas.
pub const TILESHEET: &str = "tilesheet";

const PLAYER_START_X: f32 = 100.0;
const PLAYER_START_Y: f32 = 100.0;
const PLAYER_WIDTH: i32 = 24;
const PLAYER_HEIGHT: i32 = 16;
const PLAYER_SOURCE_X: i32 = 48;
const PLAYER_SOURCE_Y: i32 = 16;
const PLAYER_SPEED: f32 = 60.0;

/// Build a world holding every windowless resource, with the clock started
/// at `now_ms`.
pub fn init_world(config: &GameConfig, now_ms: u64) -> World {
    let mut world = World::new();

    let mut input = InputState::default();
    input.reset();

    world.insert_resource(Clock::new(now_ms));
    world.insert_resource(WorldTime::default());
    world.insert_resource(input);
    world.insert_resource(config.keymap.clone());
    world.insert_resource(KeyEvents::default());
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(Backbuffer::new(
        config.render_width as i32,
        config.render_height as i32,
    ));
    world.insert_resource(GameState::new());
    world.insert_resource(config.clone());
    world
}

/// Open the window and create the offscreen render target.
pub fn open_window(
    config: &GameConfig,
) -> Result<(RaylibHandle, RaylibThread, RenderTarget), EngineError> {
    let (window_w, window_h) = config.window_size().ok_or_else(|| {
        EngineError::Init(format!(
            "window size {}x{} x{} is out of range",
            config.render_width, config.render_height, config.scale
        ))
    })?;

    let mut builder = raylib::init();
    builder
        .size(window_w, window_h)
        .title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    if !rl.is_window_ready() {
        return Err(EngineError::Init("window is not ready".into()));
    }
    // Back is handled as a regular action, not by raylib.
    rl.set_exit_key(None);
    if config.target_fps > 0 {
        rl.set_target_fps(config.target_fps);
    }

    let mut render_target = RenderTarget::new(
        &mut rl,
        &thread,
        config.render_width,
        config.render_height,
        config.scale,
    )?;
    render_target.set_filter(config.filter);

    info!(
        "Window {}x{} (logical {}x{} x{})",
        window_w, window_h, config.render_width, config.render_height, config.scale
    );
    Ok((rl, thread, render_target))
}

/// Load the sprite and tile atlases.
pub fn preload(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
) -> Result<TextureStore, EngineError> {
    let mut textures = TextureStore::new();
    textures.load_image(rl, th, SPRITESHEET, &config.spritesheet_path)?;
    textures.load_image(rl, th, TILESHEET, &config.tilesheet_path)?;
    Ok(textures)
}

/// Spawn an active sprite with its top-left corner at `(x, y)`.
#[allow(clippy::too_many_arguments)]
pub fn spawn_sprite(
    world: &mut World,
    x: f32,
    y: f32,
    width: i32,
    height: i32,
    tex_key: &str,
    source_x: i32,
    source_y: i32,
) -> Entity {
    world
        .spawn((
            MapPosition::new(x, y),
            Sprite::new(width, height, tex_key, source_x, source_y),
        ))
        .id()
}

/// Spawn the keyboard-driven player ship.
pub fn spawn_player(world: &mut World) -> Entity {
    let player = spawn_sprite(
        world,
        PLAYER_START_X,
        PLAYER_START_Y,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        SPRITESHEET,
        PLAYER_SOURCE_X,
        PLAYER_SOURCE_Y,
    );
    world.entity_mut(player).insert((
        RigidBody::new(PLAYER_SPEED, PLAYER_SPEED),
        InputControlled,
        ZIndex(0),
    ));
    player
}

/// Create the player and the tilemap, load the level and start running.
pub fn enter_running(world: &mut World) -> Result<Entity, EngineError> {
    let config = world.resource::<GameConfig>().clone();

    let player = spawn_player(world);

    let mut tilemap = Tilemap::new(config.tilemap_width, config.tilemap_height, TILESHEET)
        .with_scroll(config.scroll_mode, config.scroll_speed);
    tilemap.load(&config.level_path)?;
    world.insert_resource(tilemap);

    world.resource_mut::<GameState>().set(GameStates::Running);
    Ok(player)
}

/// Per-frame schedules.
///
/// `poll` and `present` talk to raylib and are absent in headless mode; the
/// `frame` schedule runs the same either way.
pub struct GameLoop {
    poll: Option<Schedule>,
    frame: Schedule,
    present: Option<Schedule>,
}

impl GameLoop {
    /// Update and draw into the backbuffer only. No window required.
    pub fn headless() -> Self {
        Self {
            poll: None,
            frame: frame_schedule(),
            present: None,
        }
    }

    /// Full loop: needs `RaylibHandle`, `RaylibThread`, `RenderTarget` and
    /// `TextureStore` in the world.
    pub fn windowed() -> Self {
        let mut poll = Schedule::default();
        poll.add_systems(poll_keyboard);
        let mut present = Schedule::default();
        present.add_systems(present_frame);
        Self {
            poll: Some(poll),
            frame: frame_schedule(),
            present: Some(present),
        }
    }

    /// Run one frame at time `now_ms`. Returns the raw delta in seconds.
    pub fn step(&mut self, world: &mut World, now_ms: u64) -> f32 {
        let dt = tick_clock(world, now_ms);
        if let Some(poll) = self.poll.as_mut() {
            poll.run(world);
        }
        self.frame.run(world);
        if let Some(present) = self.present.as_mut() {
            present.run(world);
        }
        dt
    }
}

/// Update and draw systems, strictly ordered.
pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_input_state,
            tilemap_scroll,
            input_controller,
            clear_backbuffer,
            draw_tilemap,
            draw_sprites,
            check_back_action,
        )
            .chain()
            .run_if(state_is_running),
    );
    schedule
}

/// Step frames until the game leaves the running state or the window is
/// asked to close.
pub fn run(world: &mut World) {
    let mut game_loop = GameLoop::windowed();
    while world.resource::<GameState>().is_running() {
        let (close_requested, now_ms) = {
            let rl = world.non_send_resource::<RaylibHandle>();
            (rl.window_should_close(), rl.now_millis())
        };
        if close_requested {
            info!("Window close requested");
            world.resource_mut::<GameState>().set(GameStates::Terminated);
            break;
        }
        game_loop.step(world, now_ms);
    }
}

/// Release textures, then the render target, then the window.
pub fn shutdown(world: &mut World) {
    if let Some(mut textures) = world.remove_resource::<TextureStore>() {
        textures.clear();
    }
    drop(world.remove_non_send_resource::<RenderTarget>());
    drop(world.remove_non_send_resource::<RaylibThread>());
    if world.remove_non_send_resource::<RaylibHandle>().is_none() {
        warn!("Shutdown without an open window");
    }
    info!("Shutdown complete");
}

/// Bring the game up, run it to completion and tear it down.
pub fn start(config: GameConfig) -> Result<(), EngineError> {
    let (mut rl, thread, render_target) = open_window(&config)?;
    let mut world = init_world(&config, rl.now_millis());

    let textures = match preload(&mut rl, &thread, &config) {
        Ok(textures) => textures,
        Err(e) => {
            drop(render_target);
            drop(thread);
            drop(rl);
            return Err(e);
        }
    };

    world.insert_resource(textures);
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let result = enter_running(&mut world).map(|_| run(&mut world));
    shutdown(&mut world);
    result
}
