use bevy_ecs::prelude::Component;

/// Marks an entity as moved by the directional input actions.
///
/// The [`input_controller`](crate::systems::inputcontroller::input_controller)
/// system moves such entities by their
/// [`RigidBody`](crate::components::rigidbody::RigidBody) speed and keeps them
/// inside the playfield.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InputControlled;
