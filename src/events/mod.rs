//! Event types exchanged between the platform layer and the engine.
//!
//! Submodules:
//! - [`input`] – logical input actions and raw key edges
pub mod input;
