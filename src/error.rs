//! the failure taxonomy for the movement core
use crate::board::TileKind;
use thiserror::Error;

/// Every failure in the core is synchronous and fatal to the call that
/// produced it; nothing retries internally. Validation fails fast at its
/// own boundary with a fixed message per condition, and the head-move
/// orchestrator is the only place that catches and re-wraps (as
/// [EngineError::MoveDeterminationFailed], keeping the original cause).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// a required input was malformed or semantically empty
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// a board search matched nothing
    #[error("no tile on the board matches {0:?}")]
    NoMatchingTile(TileKind),

    /// validation rejected every candidate move
    #[error("all candidate moves are invalid")]
    AllMovesInvalid,

    /// a binary choice was asked of fewer than two candidates
    #[error("expected at least two candidate moves, got {0}")]
    InsufficientCandidates(usize),

    /// head-move resolution failed downstream
    #[error("could not determine the next head move: {source}")]
    MoveDeterminationFailed {
        /// the failure that sank the resolution
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// wraps a downstream failure in the head-move orchestrator's error
    pub fn move_determination_failed(source: EngineError) -> EngineError {
        EngineError::MoveDeterminationFailed {
            source: Box::new(source),
        }
    }
}
