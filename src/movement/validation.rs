//! move validation against the field: boundary and reversal checks
use crate::board::{GameField, Tile};
use crate::error::EngineError;
use crate::movement::NextMove;
use crate::types::WormPart;

/// true if the move's destination falls outside the field
pub fn is_boundary_collision(next_move: &NextMove, field: &GameField) -> bool {
    !field.board_size.contains(next_move.coordinate)
}

/// true iff the tile is the body segment directly behind the head.
///
/// this deliberately guards only against an instant 180 degree turn onto
/// the neck (sequence key 1); crossing any other stretch of the body is
/// allowed
pub fn is_reversing_direction(tile: &Tile) -> bool {
    matches!(
        tile,
        Tile::Worm {
            part: WormPart::Body,
            key,
            ..
        } if key.as_usize() == 1
    )
}

/// composite validity: on the board, and not reversing onto the neck
pub fn is_valid_move(next_move: &NextMove, field: &GameField) -> bool {
    if is_boundary_collision(next_move, field) {
        return false;
    }
    match field.tile_at(next_move.coordinate) {
        Some(tile) => !is_reversing_direction(tile),
        None => false,
    }
}

/// keeps the candidates that pass [is_valid_move], preserving input order.
///
/// this is a binary-choice helper for the fallback path, so fewer than two
/// candidates is a caller bug rather than an empty result
pub fn filter_valid_moves(
    candidates: &[NextMove],
    field: &GameField,
) -> Result<Vec<NextMove>, EngineError> {
    if candidates.len() < 2 {
        return Err(EngineError::InsufficientCandidates(candidates.len()));
    }
    Ok(candidates
        .iter()
        .copied()
        .filter(|candidate| is_valid_move(candidate, field))
        .collect())
}
