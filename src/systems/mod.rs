//! Engine systems.
//!
//! Submodules overview
//! - [`gamestate`] – back-action termination and the running-state condition
//! - [`input`] – poll raylib key edges and apply them to [`crate::resources::input::InputState`]
//! - [`inputcontroller`] – move input-controlled sprites and clamp them to the screen
//! - [`render`] – record the frame into the backbuffer and present it with raylib
//! - [`scroll`] – advance the tilemap auto-scroll
//! - [`time`] – tick the frame clock and update simulation time

pub mod gamestate;
pub mod input;
pub mod inputcontroller;
pub mod render;
pub mod scroll;
pub mod time;
