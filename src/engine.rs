//! the tick reducer: one frame of sandworm movement at a time
use crate::board::{GameField, GroundTexture, Tile, TileKind};
use crate::error::EngineError;
use crate::movement::{self, NextMove};
use crate::navigation::WormPath;
use crate::types::{Coordinate, Direction, SegmentKey, TickInstruments, WormPart, WormSegment};
use fxhash::FxHashSet;
use rand::Rng;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, instrument, trace};

/// drops the worm has to eat before the level steps up
pub const DROPS_PER_LEVEL: u32 = 5;

/// The complete game state. Score, level and the live drops live here
/// rather than in any ambient context; a tick consumes the state by value
/// and hands back the next one, so no caller can observe a half-updated
/// board.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    field: GameField,
    segments: Vec<WormSegment>,
    path: WormPath,
    drops: FxHashSet<Coordinate>,
    score: u32,
    level: u32,
}

impl GameState {
    /// assembles a state from its parts. the path must already cover every
    /// segment
    pub fn assemble(
        field: GameField,
        segments: Vec<WormSegment>,
        path: WormPath,
        drops: FxHashSet<Coordinate>,
    ) -> Result<GameState, EngineError> {
        if segments.is_empty() {
            return Err(EngineError::InvalidArgument(
                "the creature needs at least one segment",
            ));
        }
        if path.len() != segments.len() {
            return Err(EngineError::InvalidArgument(
                "the path must cover every segment",
            ));
        }
        Ok(GameState {
            field,
            segments,
            path,
            drops,
            score: 0,
            level: 1,
        })
    }

    /// the board and its extent, for rendering
    pub fn field(&self) -> &GameField {
        &self.field
    }

    /// the creature's segments head first, for HUD consumers
    pub fn segments(&self) -> &[WormSegment] {
        &self.segments
    }

    /// the head segment
    pub fn head(&self) -> &WormSegment {
        self.segments.first().expect("a creature is never empty")
    }

    #[allow(missing_docs)]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[allow(missing_docs)]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// whether a live drop sits at the coordinate. consumers test the
    /// committed head coordinate after a tick
    pub fn drop_at(&self, coordinate: Coordinate) -> bool {
        self.drops.contains(&coordinate)
    }

    /// Advances the game by one frame: resolve the head move (latest input
    /// first, default heading otherwise, perpendicular escape at a wall),
    /// rotate the path, step every segment along its path direction, and
    /// rewrite the board. The cell the tail vacated is found
    /// direction-aware, one step opposite the tail's recorded movement
    /// direction, and restored to sand before the segment tiles land.
    ///
    /// An error is fatal for the frame; the state is consumed either way.
    #[instrument(level = "trace", skip_all)]
    pub fn tick<R: Rng, T: TickInstruments>(
        mut self,
        input_direction: Option<Direction>,
        rng: &mut R,
        instruments: &T,
    ) -> Result<GameState, EngineError> {
        let start = Instant::now();

        let head_move = movement::determine_head_move(
            &self.field,
            &self.segments,
            self.path.head_direction(),
            input_direction,
            rng,
        )?;
        self.path.advance(head_move.direction);

        // after the rotation, entry i is the direction segment i moves now
        let mut moved = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let direction = self.path.direction_for(segment)?;
            let next = NextMove::step(segment.location, direction);
            moved.push(WormSegment {
                location: next.coordinate,
                ..*segment
            });
        }

        let tail = moved.last().expect("a creature is never empty");
        let vacated = tail
            .location
            .add_vec(self.path.tail_direction().opposite().to_vector());
        self.field
            .tile_grid
            .place_tile(Tile::ground(GroundTexture::Sand, vacated))?;
        for segment in &moved {
            self.field
                .tile_grid
                .place_tile(Tile::worm(segment.part, segment.key, segment.location))?;
        }
        self.segments = moved;

        instruments.observe_tick(start.elapsed());
        Ok(self)
    }

    /// eats the drop at the coordinate, scoring it and stepping the level
    /// every [DROPS_PER_LEVEL] drops
    pub fn consume_drop(&mut self, coordinate: Coordinate) -> Result<(), EngineError> {
        if !self.drops.remove(&coordinate) {
            return Err(EngineError::InvalidArgument(
                "no drop lives at that coordinate",
            ));
        }
        self.score += 1;
        if self.score % DROPS_PER_LEVEL == 0 {
            self.level += 1;
            debug!(level = self.level, "level up");
        }
        trace!(score = self.score, ?coordinate, "drop consumed");
        Ok(())
    }

    /// appends one segment behind the tail, one step opposite the tail's
    /// path direction, and grows the path to match
    pub fn grow_tail(&mut self) -> Result<(), EngineError> {
        let tail = *self.segments.last().expect("a creature is never empty");
        let location = tail
            .location
            .add_vec(self.path.tail_direction().opposite().to_vector());
        if !self.field.board_size.contains(location) {
            return Err(EngineError::InvalidArgument(
                "the growth cell falls off the board",
            ));
        }
        // the old tail becomes plain body, unless the creature is only a head
        if tail.key.as_usize() > 0 {
            let old_tail = self.segments.last_mut().expect("a creature is never empty");
            old_tail.part = WormPart::Body;
            self.field.tile_grid.place_tile(Tile::worm(
                old_tail.part,
                old_tail.key,
                old_tail.location,
            ))?;
        }
        let grown = WormSegment {
            key: SegmentKey(self.segments.len() as u16),
            part: WormPart::Tail,
            location,
        };
        self.field
            .tile_grid
            .place_tile(Tile::worm(grown.part, grown.key, grown.location))?;
        self.segments.push(grown);
        self.path.extend_to(self.segments.len())?;
        Ok(())
    }

    /// places a new drop on a uniformly random sand tile
    pub fn spawn_drop<R: Rng>(&mut self, rng: &mut R) -> Result<Coordinate, EngineError> {
        let location = self
            .field
            .tile_grid
            .random_tile_of_kind(TileKind::Sand, rng)?
            .location();
        self.field
            .tile_grid
            .place_tile(Tile::ground(GroundTexture::Food, location))?;
        self.drops.insert(location);
        trace!(?location, "drop placed");
        Ok(location)
    }
}
