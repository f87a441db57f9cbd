//! Versioned save format
//!
//! Games serialize to a JSON envelope carrying a format version next to
//! the state. Loading tolerates newer versions on a best-effort basis
//! (warn, then deserialize whatever fields still line up) so an older
//! build can at least inspect a newer save.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::LOG_RETENTION;
use crate::core::Result;
use crate::state::GameState;

/// Current save format version. Bump on breaking state changes.
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveGame {
    pub version: u32,
    pub state: GameState,
}

/// Serialize a game to the versioned envelope. The log is truncated to
/// the newest entries so saves stay bounded over long games.
pub fn serialize_state(state: &GameState) -> Result<String> {
    let mut state = state.clone();
    if state.log.len() > LOG_RETENTION {
        state.log = state.log.split_off(state.log.len() - LOG_RETENTION);
    }
    let save = SaveGame {
        version: SAVE_VERSION,
        state,
    };
    Ok(serde_json::to_string_pretty(&save)?)
}

/// Deserialize a saved game, accepting newer versions best-effort.
pub fn deserialize_state(data: &str) -> Result<GameState> {
    let save: SaveGame = serde_json::from_str(data)?;
    if save.version > SAVE_VERSION {
        warn!(
            save_version = save.version,
            supported = SAVE_VERSION,
            "save was written by a newer build; loading best-effort"
        );
    }
    Ok(save.state)
}
