//! the sand grid: tiles, the board, and the field handed to consumers
use crate::error::EngineError;
use crate::types::{Coordinate, Dimension, SegmentKey, WormPart};
use rand::prelude::IteratorRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// ground textures a walkable tile can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroundTexture {
    #[allow(missing_docs)]
    Sand,
    #[allow(missing_docs)]
    Food,
}

/// flat query key covering both ground and creature tiles, used when
/// searching the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TileKind {
    #[allow(missing_docs)]
    Sand,
    #[allow(missing_docs)]
    Food,
    #[allow(missing_docs)]
    Head,
    #[allow(missing_docs)]
    Body,
    #[allow(missing_docs)]
    Tail,
}

/// one cell of the board. ground and creature cells carry different data,
/// so consumers pattern-match instead of poking at a shared shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tile {
    /// walkable ground
    Ground {
        #[allow(missing_docs)]
        texture: GroundTexture,
        /// the tile's own cell, always equal to its indices in the grid
        location: Coordinate,
    },
    /// a creature segment parked on the grid
    Worm {
        #[allow(missing_docs)]
        part: WormPart,
        /// the segment's sequence key, 0 is the head
        key: SegmentKey,
        /// the tile's own cell, always equal to its indices in the grid
        location: Coordinate,
    },
}

impl Tile {
    /// makes a ground tile
    pub fn ground(texture: GroundTexture, location: Coordinate) -> Tile {
        Tile::Ground { texture, location }
    }

    /// makes a creature tile
    pub fn worm(part: WormPart, key: SegmentKey, location: Coordinate) -> Tile {
        Tile::Worm {
            part,
            key,
            location,
        }
    }

    /// the cell this tile sits on
    pub fn location(&self) -> Coordinate {
        match self {
            Tile::Ground { location, .. } => *location,
            Tile::Worm { location, .. } => *location,
        }
    }

    /// the flat query key for this tile
    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Ground {
                texture: GroundTexture::Sand,
                ..
            } => TileKind::Sand,
            Tile::Ground {
                texture: GroundTexture::Food,
                ..
            } => TileKind::Food,
            Tile::Worm {
                part: WormPart::Head,
                ..
            } => TileKind::Head,
            Tile::Worm {
                part: WormPart::Body,
                ..
            } => TileKind::Body,
            Tile::Worm {
                part: WormPart::Tail,
                ..
            } => TileKind::Tail,
        }
    }
}

/// the sand grid, row-major. every cell holds exactly one tile whose
/// recorded location matches its indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: Vec<Vec<Tile>>,
}

impl Board {
    /// builds a board of the given extent, fully filled with sand
    pub fn build(size: Dimension) -> Result<Board, EngineError> {
        if size.rows == 0 || size.columns == 0 {
            return Err(EngineError::InvalidArgument(
                "board dimensions must be positive",
            ));
        }
        let rows = (0..size.rows as i32)
            .map(|row| {
                (0..size.columns as i32)
                    .map(|column| Tile::ground(GroundTexture::Sand, Coordinate { row, column }))
                    .collect()
            })
            .collect();
        Ok(Board { rows })
    }

    /// the extent of this board
    pub fn size(&self) -> Dimension {
        Dimension {
            rows: self.rows.len() as u32,
            columns: self.rows.first().map(Vec::len).unwrap_or(0) as u32,
        }
    }

    /// coordinate-indexed lookup, None off the board
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<&Tile> {
        if coordinate.row < 0 || coordinate.column < 0 {
            return None;
        }
        self.rows
            .get(coordinate.row as usize)?
            .get(coordinate.column as usize)
    }

    /// writes a tile over whatever holds its cell, returning the placed tile
    pub fn place_tile(&mut self, tile: Tile) -> Result<&Tile, EngineError> {
        let location = tile.location();
        if location.row < 0 || location.column < 0 {
            return Err(EngineError::InvalidArgument(
                "tile coordinates are off the board",
            ));
        }
        let slot = self
            .rows
            .get_mut(location.row as usize)
            .and_then(|row| row.get_mut(location.column as usize))
            .ok_or(EngineError::InvalidArgument(
                "tile coordinates are off the board",
            ))?;
        *slot = tile;
        Ok(&*slot)
    }

    /// every tile in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// scans the whole grid and picks uniformly among tiles of the given kind
    pub fn random_tile_of_kind<R: Rng>(
        &self,
        kind: TileKind,
        rng: &mut R,
    ) -> Result<&Tile, EngineError> {
        self.tiles()
            .filter(|tile| tile.kind() == kind)
            .choose(rng)
            .ok_or(EngineError::NoMatchingTile(kind))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.rows.iter() {
            for tile in row.iter() {
                let glyph = match tile.kind() {
                    TileKind::Sand => '.',
                    TileKind::Food => 'f',
                    TileKind::Head => 'H',
                    TileKind::Body => 's',
                    TileKind::Tail => 't',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// a board together with its declared extent. the dimensions always match
/// the actual grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameField {
    #[allow(missing_docs)]
    pub tile_grid: Board,
    #[allow(missing_docs)]
    pub board_size: Dimension,
}

impl GameField {
    /// builds a field of the given extent
    pub fn build(size: Dimension) -> Result<GameField, EngineError> {
        Ok(GameField {
            tile_grid: Board::build(size)?,
            board_size: size,
        })
    }

    /// coordinate-indexed lookup, None off the board
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<&Tile> {
        self.tile_grid.tile_at(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn small_board() -> Board {
        Board::build(Dimension {
            rows: 3,
            columns: 4,
        })
        .unwrap()
    }

    #[test]
    fn test_build_fills_with_located_sand() {
        let board = small_board();
        assert_eq!(
            Dimension {
                rows: 3,
                columns: 4
            },
            board.size()
        );
        for (row, column) in (0..3).cartesian_product(0..4) {
            let coordinate = Coordinate { row, column };
            let tile = board.tile_at(coordinate).unwrap();
            assert_eq!(TileKind::Sand, tile.kind());
            assert_eq!(coordinate, tile.location());
        }
    }

    #[test]
    fn test_build_rejects_flat_boards() {
        for size in [
            Dimension {
                rows: 0,
                columns: 4,
            },
            Dimension {
                rows: 3,
                columns: 0,
            },
        ] {
            assert_eq!(
                Err(EngineError::InvalidArgument(
                    "board dimensions must be positive"
                )),
                Board::build(size)
            );
        }
    }

    #[test]
    fn test_place_tile_replaces_the_cell() {
        let mut board = small_board();
        let target = Coordinate { row: 1, column: 2 };
        let placed = board
            .place_tile(Tile::ground(GroundTexture::Food, target))
            .unwrap();
        assert_eq!(TileKind::Food, placed.kind());
        assert_eq!(TileKind::Food, board.tile_at(target).unwrap().kind());
    }

    #[test]
    fn test_place_tile_rejects_off_board_cells() {
        let mut board = small_board();
        let off = Coordinate { row: 3, column: 0 };
        assert!(board
            .place_tile(Tile::ground(GroundTexture::Food, off))
            .is_err());
        let negative = Coordinate {
            row: -1,
            column: 0,
        };
        assert!(board
            .place_tile(Tile::ground(GroundTexture::Food, negative))
            .is_err());
    }

    #[test]
    fn test_random_tile_finds_the_only_match() {
        let mut board = small_board();
        let target = Coordinate { row: 2, column: 3 };
        board
            .place_tile(Tile::ground(GroundTexture::Food, target))
            .unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let found = board.random_tile_of_kind(TileKind::Food, &mut rng).unwrap();
        assert_eq!(target, found.location());
    }

    #[test]
    fn test_random_tile_with_no_match_fails() {
        let board = small_board();
        let mut rng = SmallRng::seed_from_u64(11);
        assert_eq!(
            Err(EngineError::NoMatchingTile(TileKind::Head)),
            board
                .random_tile_of_kind(TileKind::Head, &mut rng)
                .map(|tile| *tile)
        );
    }

    #[test]
    fn test_display_renders_the_grid() {
        let mut board = small_board();
        board
            .place_tile(Tile::worm(
                WormPart::Head,
                SegmentKey(0),
                Coordinate { row: 0, column: 1 },
            ))
            .unwrap();
        board
            .place_tile(Tile::ground(
                GroundTexture::Food,
                Coordinate { row: 2, column: 0 },
            ))
            .unwrap();
        let rendered = format!("{}", board);
        assert_eq!("\n. H . . \n. . . . \nf . . . \n", rendered);
    }
}
