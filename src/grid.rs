use crate::tile::{Tile, TileType};
use std::collections::HashMap;

/// Largest bounding box (rows * columns) `render_ascii` will draw
pub const MAX_RENDER_CELLS: i64 = 1_000_000;

/// Orthogonal neighbour offsets, in the order neighbours are reported.
/// Paths cannot be diagonal.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Sparse two dimensional map of tiles: row `x` -> column `y` -> tile
///
/// A missing key means there is no tile at that coordinate. The grid owns every
/// tile; queries hand out borrows tied to the grid's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: HashMap<i32, HashMap<i32, Tile>>,
    len: usize,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Grid::default()
    }

    /// Insert a tile at its own coordinates
    ///
    /// A later tile at the same coordinates replaces the earlier one
    /// (last write wins).
    pub fn add_tile(&mut self, tile: Tile) {
        let row = self.rows.entry(tile.x).or_default();
        if row.insert(tile.y, tile).is_none() {
            self.len += 1;
        }
    }

    /// Tile stored at (x, y), if any
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.rows.get(&x).and_then(|row| row.get(&y))
    }

    /// Number of stored tiles
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ground tiles directly above, left, right and below `tile`, in that order
    ///
    /// Coordinates without a tile are skipped, so edge tiles simply get fewer
    /// neighbours. Offsets past the `i32` range are skipped the same way.
    pub fn walkable_neighbours(&self, tile: &Tile) -> Vec<&Tile> {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = tile.x.checked_add(dx)?;
                let y = tile.y.checked_add(dy)?;
                self.get_tile(x, y)
            })
            .filter(|neighbour| neighbour.is_walkable())
            .collect()
    }

    /// All tiles in row-major order (by `x`, then `y`)
    pub fn tiles(&self) -> Vec<&Tile> {
        let mut tiles: Vec<&Tile> = self.rows.values().flat_map(|row| row.values()).collect();
        tiles.sort_by_key(|t| (t.x, t.y));
        tiles
    }

    /// First tile of the given type in row-major order
    ///
    /// Maps are expected to hold a single start and goal; when several tiles
    /// share a type the one with the smallest (x, y) wins.
    pub fn find_tile_of_type(&self, tile_type: TileType) -> Option<&Tile> {
        self.rows
            .values()
            .flat_map(|row| row.values())
            .filter(|t| t.tile_type == tile_type)
            .min_by_key(|t| (t.x, t.y))
    }

    /// Number of tiles of the given type
    pub fn count_of_type(&self, tile_type: TileType) -> usize {
        self.rows
            .values()
            .flat_map(|row| row.values())
            .filter(|t| t.tile_type == tile_type)
            .count()
    }

    pub fn start_tile(&self) -> Option<&Tile> {
        self.find_tile_of_type(TileType::Start)
    }

    pub fn goal_tile(&self) -> Option<&Tile> {
        self.find_tile_of_type(TileType::Goal)
    }

    /// Render the grid as text, one line per row `x`
    /// Legend: `.` ground, `G` goal, `S` start, `#` block, `?` unknown, ` ` no tile
    ///
    /// The whole bounding box is drawn, so very sparse grids get large. Returns
    /// `None` when the box holds more than `MAX_RENDER_CELLS` cells.
    pub fn render_ascii(&self) -> Option<String> {
        let tiles = self.tiles();
        let (Some(first), Some(last)) = (tiles.first(), tiles.last()) else {
            return Some(String::new());
        };
        let min_y = tiles.iter().map(|t| t.y).min().unwrap_or(0);
        let max_y = tiles.iter().map(|t| t.y).max().unwrap_or(0);

        let height = i64::from(last.x) - i64::from(first.x) + 1;
        let width = i64::from(max_y) - i64::from(min_y) + 1;
        if height.saturating_mul(width) > MAX_RENDER_CELLS {
            return None;
        }

        let mut lines = Vec::new();
        for x in first.x..=last.x {
            let mut line = String::new();
            for y in min_y..=max_y {
                let symbol = match self.get_tile(x, y).map(|t| t.tile_type) {
                    Some(TileType::Ground) => '.',
                    Some(TileType::Goal) => 'G',
                    Some(TileType::Start) => 'S',
                    Some(TileType::Block) => '#',
                    Some(TileType::Other(_)) => '?',
                    None => ' ',
                };
                line.push(symbol);
            }
            lines.push(line);
        }
        Some(lines.join("\n"))
    }
}
