//! Softscroll library.
//!
//! A small 2D runtime: a variable-timestep frame loop, a soft-scrolling
//! tilemap, sprite compositing into an offscreen backbuffer, and event-driven
//! keyboard state. Exposed as a library so the windowless parts can be driven
//! from integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
