//! the movement planner: unit stepping, perpendicular escapes, and the
//! per-tick head move
pub mod validation;

use crate::board::GameField;
use crate::error::EngineError;
use crate::types::{Coordinate, Direction, WormSegment};
use rand::Rng;
use serde::Serialize;
use tracing::{instrument, trace};

/// a candidate or committed transition for one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextMove {
    #[allow(missing_docs)]
    pub direction: Direction,
    /// where the segment lands if the move commits
    pub coordinate: Coordinate,
}

impl NextMove {
    /// one unit step from a coordinate along a heading
    pub fn step(from: Coordinate, direction: Direction) -> NextMove {
        NextMove {
            direction,
            coordinate: from.add_vec(direction.to_vector()),
        }
    }
}

/// the two perpendicular escapes for a heading, in coin-flipped order.
/// a horizontal heading offers up/down, a vertical one offers left/right
pub fn randomized_perpendicular_options<R: Rng>(
    direction: Direction,
    rng: &mut R,
) -> [Direction; 2] {
    let [first, second] = direction.perpendicular();
    if rng.gen::<bool>() {
        [first, second]
    } else {
        [second, first]
    }
}

/// builds both perpendicular candidates and returns the first that
/// validates. the randomness of the escape is entirely the coin flip over
/// the candidate order
pub fn randomized_fallback_move<R: Rng>(
    field: &GameField,
    from: Coordinate,
    direction: Direction,
    rng: &mut R,
) -> Result<NextMove, EngineError> {
    let options = randomized_perpendicular_options(direction, rng);
    let candidates = [
        NextMove::step(from, options[0]),
        NextMove::step(from, options[1]),
    ];
    let survivors = validation::filter_valid_moves(&candidates, field)?;
    survivors.first().copied().ok_or(EngineError::AllMovesInvalid)
}

/// resolves the head's move for this tick.
///
/// user input wins when its move validates; otherwise the head keeps its
/// default heading, escaping perpendicular when the default runs off the
/// board. failures inside the escape path come back wrapped as
/// [EngineError::MoveDeterminationFailed] with the cause preserved
#[instrument(level = "trace", skip_all)]
pub fn determine_head_move<R: Rng>(
    field: &GameField,
    segments: &[WormSegment],
    default_direction: Direction,
    input_direction: Option<Direction>,
    rng: &mut R,
) -> Result<NextMove, EngineError> {
    let head = segments.first().ok_or(EngineError::InvalidArgument(
        "the creature needs at least one segment",
    ))?;

    if let Some(direction) = input_direction {
        let requested = NextMove::step(head.location, direction);
        if validation::is_valid_move(&requested, field) {
            return Ok(requested);
        }
    }

    let ahead = NextMove::step(head.location, default_direction);
    if validation::is_boundary_collision(&ahead, field) {
        trace!(heading = %default_direction, "default heading runs off the board, escaping perpendicular");
        return randomized_fallback_move(field, head.location, default_direction, rng)
            .map_err(EngineError::move_determination_failed);
    }
    Ok(ahead)
}
