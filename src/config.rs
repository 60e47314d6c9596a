//! starting configuration: device presets and initial game state assembly
use crate::board::{GameField, GroundTexture, Tile};
use crate::engine::GameState;
use crate::error::EngineError;
use crate::navigation::WormPath;
use crate::types::{Coordinate, Dimension, Direction, SegmentKey, WormPart, WormSegment};
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

/// the device classes a board is sized for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[allow(missing_docs)]
    Mobile,
    #[allow(missing_docs)]
    Tablet,
    #[allow(missing_docs)]
    Desktop,
}

impl DeviceClass {
    /// the board extent this device class plays on
    pub fn board_size(&self) -> Dimension {
        match self {
            DeviceClass::Mobile => Dimension {
                rows: 10,
                columns: 15,
            },
            DeviceClass::Tablet => Dimension {
                rows: 11,
                columns: 20,
            },
            DeviceClass::Desktop => Dimension {
                rows: 15,
                columns: 30,
            },
        }
    }
}

/// everything the setup layer provides to start a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[allow(missing_docs)]
    pub device: DeviceClass,
    /// starting segment count, head included
    pub worm_length: usize,
    /// the head's starting cell
    pub start: Coordinate,
    /// the creature's starting heading
    pub heading: Direction,
    /// drops already on the board when the game starts
    #[serde(default)]
    pub initial_drops: Vec<Coordinate>,
}

impl GameConfig {
    /// assembles the starting state: a sand board, the creature laid out
    /// trailing away from its heading, a path covering every segment, and
    /// the initial drops placed
    pub fn build_state(&self) -> Result<GameState, EngineError> {
        let size = self.device.board_size();
        if self.worm_length == 0 {
            return Err(EngineError::InvalidArgument(
                "the creature needs at least one segment",
            ));
        }
        if self.worm_length > size.total_tiles()? {
            return Err(EngineError::InvalidArgument(
                "the creature does not fit the board",
            ));
        }
        let mut field = GameField::build(size)?;

        // segments trail head-first away from the heading
        let step = self.heading.opposite().to_vector();
        let segments: Vec<WormSegment> = itertools::iterate(self.start, |cell| cell.add_vec(step))
            .take(self.worm_length)
            .enumerate()
            .map(|(index, location)| WormSegment {
                key: SegmentKey(index as u16),
                part: part_for(index, self.worm_length),
                location,
            })
            .collect();
        if segments.iter().any(|segment| !size.contains(segment.location)) {
            return Err(EngineError::InvalidArgument(
                "the starting layout falls off the board",
            ));
        }
        for segment in &segments {
            field
                .tile_grid
                .place_tile(Tile::worm(segment.part, segment.key, segment.location))?;
        }

        let mut drops = FxHashSet::default();
        for &location in &self.initial_drops {
            field
                .tile_grid
                .place_tile(Tile::ground(GroundTexture::Food, location))?;
            drops.insert(location);
        }

        let path = WormPath::new(self.worm_length, self.heading)?;
        GameState::assemble(field, segments, path, drops)
    }
}

fn part_for(index: usize, length: usize) -> WormPart {
    if index == 0 {
        WormPart::Head
    } else if index + 1 == length {
        WormPart::Tail
    } else {
        WormPart::Body
    }
}
