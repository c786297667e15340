//! High-level game state resource.
//!
//! The loop only ever moves forward: `Uninitialized -> Running -> Terminated`.
//! There is no pause state.

use bevy_ecs::prelude::Resource;
use log::info;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Uninitialized,
    Running,
    Terminated,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            current: GameStates::Uninitialized,
        }
    }

    pub fn get(&self) -> GameStates {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.current == GameStates::Running
    }

    /// Move to `next`. Transitions backwards are ignored.
    pub fn set(&mut self, next: GameStates) {
        let allowed = matches!(
            (self.current, next),
            (GameStates::Uninitialized, GameStates::Running)
                | (GameStates::Uninitialized, GameStates::Terminated)
                | (GameStates::Running, GameStates::Terminated)
        );
        if allowed {
            info!("Game state {:?} -> {:?}", self.current, next);
            self.current = next;
        }
    }
}
