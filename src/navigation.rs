//! the worm path: per-segment directions propagated head to tail
use crate::error::EngineError;
use crate::types::{Direction, WormSegment};
use serde::Serialize;
use std::collections::VecDeque;

/// an ordered sequence of directions, one entry per creature segment.
///
/// entry `i` is the direction segment `i` moves this tick. each tick the
/// head's new direction is pushed on the front and the oldest entry drops
/// off the back, so every segment inherits the direction the segment ahead
/// of it moved last tick. the ring is owned here and rotated behind
/// `&mut self`, never shared as a live array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WormPath {
    directions: VecDeque<Direction>,
}

impl WormPath {
    /// a path for a creature of the given length, every entry equal to the
    /// initial heading
    pub fn new(creature_length: usize, initial_direction: Direction) -> Result<WormPath, EngineError> {
        if creature_length == 0 {
            return Err(EngineError::InvalidArgument(
                "the path needs at least one segment",
            ));
        }
        Ok(WormPath {
            directions: std::iter::repeat(initial_direction)
                .take(creature_length)
                .collect(),
        })
    }

    /// the direction the given segment moves this tick
    pub fn direction_for(&self, segment: &WormSegment) -> Result<Direction, EngineError> {
        self.directions
            .get(segment.key.as_usize())
            .copied()
            .ok_or(EngineError::InvalidArgument(
                "segment key is outside the path",
            ))
    }

    /// the head's direction this tick
    pub fn head_direction(&self) -> Direction {
        *self.directions.front().expect("a path is never empty")
    }

    /// the tail's direction this tick
    pub fn tail_direction(&self) -> Direction {
        *self.directions.back().expect("a path is never empty")
    }

    /// number of entries, always the creature's segment count
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// a path always covers at least the head
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// rotates for the next tick: the new head direction goes in front and
    /// the oldest tail entry drops off. length is preserved
    pub fn advance(&mut self, new_head_direction: Direction) {
        self.directions.push_front(new_head_direction);
        self.directions.pop_back();
    }

    /// grows the path for a longer creature by repeating the tail
    /// direction. a target no longer than the current path changes nothing
    pub fn extend_to(&mut self, new_length: usize) -> Result<(), EngineError> {
        if new_length == 0 {
            return Err(EngineError::InvalidArgument(
                "the path needs at least one segment",
            ));
        }
        let tail = self.tail_direction();
        while self.directions.len() < new_length {
            self.directions.push_back(tail);
        }
        Ok(())
    }
}
