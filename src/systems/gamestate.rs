//! Game state systems.
use bevy_ecs::prelude::*;

use crate::events::input::InputAction;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;

/// Run condition: true while the game is in [`GameStates::Running`].
pub fn state_is_running(state: Res<GameState>) -> bool {
    state.is_running()
}

/// Terminate the game once the back action is held. Runs after drawing, so
/// the frame in which back is pressed is still presented.
pub fn check_back_action(input: Res<InputState>, mut state: ResMut<GameState>) {
    if input.is_down(InputAction::Back) && state.is_running() {
        state.set(GameStates::Terminated);
    }
}
