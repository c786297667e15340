//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: input state, timing, the
//! tilemap, the backbuffer draw list, rendering handles and asset stores.
//!
//! Overview
//! - `backbuffer` – draw calls recorded against the offscreen surface
//! - `clock` – millisecond frame clock producing the per-frame delta
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – `Uninitialized -> Running -> Terminated`
//! - `input` – logical action state fed by key edges
//! - `keymap` – key code to action bindings and the pending edge queue
//! - `rendertarget` – GPU framebuffer at logical resolution (non-send)
//! - `screensize` – logical resolution in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilemap` – scrolling tile grid and its atlas lookup table
//! - `worldtime` – simulation time and delta
pub mod backbuffer;
pub mod clock;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod keymap;
pub mod rendertarget;
pub mod screensize;
pub mod texturestore;
pub mod tilemap;
pub mod worldtime;
