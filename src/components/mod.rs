//! ECS components for entities.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – marker for entities driven by directional input
//! - [`mapposition`] – top-left position in logical pixels
//! - [`rigidbody`] – per-axis speed in pixels per second
//! - [`sprite`] – atlas rectangle drawn at the entity's position
//! - [`zindex`] – draw order hint for sprites

pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
