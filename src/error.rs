//! Engine error type.
//!
//! Only resource acquisition and setup can fail. Steady-state queries such as a
//! missing component or an unsupported collision pairing are answered with
//! `None`/`false` and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load texture {path:?}: {reason}")]
    TextureLoad { path: PathBuf, reason: String },

    #[error("invalid sprite sheet {path:?}: {source}")]
    SpriteSheet {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite sheet {path:?} references frame {frame} but only has {frame_count}")]
    InvalidFrame {
        path: PathBuf,
        frame: usize,
        frame_count: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no game state registered at index {0}")]
    UnknownState(usize),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let texture = EngineError::TextureLoad {
            path: PathBuf::from("ship.png"),
            reason: "not found".into(),
        };
        assert_eq!(texture.to_string(), "failed to load texture \"ship.png\": not found");

        let frame = EngineError::InvalidFrame {
            path: PathBuf::from("ship.json"),
            frame: 4,
            frame_count: 2,
        };
        assert!(frame.to_string().contains("frame 4 but only has 2"));

        assert_eq!(
            EngineError::UnknownState(9).to_string(),
            "no game state registered at index 9"
        );
    }
}
