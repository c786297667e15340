//! Engine error kinds.
//!
//! Every failure the engine can report happens before the main loop starts:
//! bringing up the window/render target, or preloading image assets. Nothing
//! fails mid-frame, so there is no retry policy anywhere.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Windowing or graphics subsystem bring-up failed.
    #[error("initialization failed: {0}")]
    Init(String),
    /// An image asset could not be loaded or decoded.
    #[error("failed to load image {path}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },
}

impl EngineError {
    /// Process exit code reported for this error.
    ///
    /// Normal termination exits with 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            EngineError::Init(_) => 1,
            EngineError::AssetLoad { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let init = EngineError::Init("no display".into());
        let asset = EngineError::AssetLoad {
            path: PathBuf::from("data/spritesheet1.bmp"),
            reason: "file not found".into(),
        };
        assert_ne!(init.exit_code(), 0);
        assert_ne!(asset.exit_code(), 0);
        assert_ne!(init.exit_code(), asset.exit_code());
    }

    #[test]
    fn test_asset_error_message_names_path() {
        let err = EngineError::AssetLoad {
            path: PathBuf::from("data/tilesheet1.bmp"),
            reason: "bad header".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/tilesheet1.bmp"));
        assert!(msg.contains("bad header"));
    }
}
