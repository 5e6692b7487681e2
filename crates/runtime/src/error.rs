//! Runtime error types.

use game_core::{BattleError, LookupError};

use crate::repository::RepositoryError;

/// Errors that abort a session.
///
/// User-input problems never appear here: dialogues and numeric prompts
/// recover locally by re-prompting. What remains is broken content
/// references, battle failures, and persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("battle failed: {0}")]
    Battle(#[from] BattleError),

    #[error("save repository failed: {0}")]
    Repository(#[from] RepositoryError),
}
