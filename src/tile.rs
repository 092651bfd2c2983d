use crate::grid::Grid;
use std::fmt;

/// Tile type codes, matching the tile order of the level editor's sprite sheet
pub const CODE_GROUND: i64 = 1;
pub const CODE_GOAL: i64 = 2;
pub const CODE_START: i64 = 3;
pub const CODE_BLOCK: i64 = 4;

/// Classification of a single tile
///
/// Codes outside the named set are kept verbatim in `Other` so nothing from the
/// source document is lost. They never match a named-type query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Ground,
    Goal,
    Start,
    Block,
    Other(i64),
}

impl TileType {
    pub fn from_code(code: i64) -> Self {
        match code {
            CODE_GROUND => TileType::Ground,
            CODE_GOAL => TileType::Goal,
            CODE_START => TileType::Start,
            CODE_BLOCK => TileType::Block,
            other => TileType::Other(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            TileType::Ground => CODE_GROUND,
            TileType::Goal => CODE_GOAL,
            TileType::Start => CODE_START,
            TileType::Block => CODE_BLOCK,
            TileType::Other(code) => *code,
        }
    }

    /// Human readable name, `None` for unrecognized codes
    pub fn name(&self) -> Option<&'static str> {
        match self {
            TileType::Ground => Some("Ground"),
            TileType::Goal => Some("Goal"),
            TileType::Start => Some("Start"),
            TileType::Block => Some("Block"),
            TileType::Other(_) => None,
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Unknown({})", self.code()),
        }
    }
}

/// A single grid cell
///
/// `x` is the row (flat index divided by width) and `y` the column (remainder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub tile_type: TileType,
}

impl Tile {
    pub fn new(x: i32, y: i32, tile_type: TileType) -> Self {
        Tile { x, y, tile_type }
    }

    /// Only ground can be walked on
    pub fn is_walkable(&self) -> bool {
        self.tile_type == TileType::Ground
    }

    /// Manhattan distance to another tile
    pub fn distance(&self, other: &Tile) -> i64 {
        calc_distance(self, other)
    }

    /// Walkable orthogonal neighbours of this tile within `grid`
    pub fn walkable_neighbours<'a>(&self, grid: &'a Grid) -> Vec<&'a Tile> {
        grid.walkable_neighbours(self)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({},{})", self.tile_type, self.x, self.y)
    }
}

/// Manhattan distance between two tiles
///
/// Admissible heuristic for a search restricted to 4-directional movement.
/// Computed in `i64` so tiles at opposite ends of the `i32` range don't overflow.
pub fn calc_distance(from: &Tile, to: &Tile) -> i64 {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    dx.abs() + dy.abs()
}
