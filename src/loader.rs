use crate::error::{MapError, Result};
use crate::grid::Grid;
use crate::tile::{Tile, TileType};
use log::debug;
use serde::Deserialize;
use serde_json::Number;
use std::fs;
use std::path::Path;

/// Level document as exported by the Tiled map editor
///
/// Only `width` and the first layer's `data` are used. Other fields are ignored.
/// Numbers are kept as written; integral floats such as `5.0` are accepted.
#[derive(Debug, Deserialize)]
pub struct MapDocument {
    pub width: Number,
    /// Kept raw so that layers after the first (object layers, etc.) never
    /// have to match the tile layer shape
    pub layers: Vec<serde_json::Value>,
}

/// Tile layer: flattened tile type codes, row after row
#[derive(Debug, Deserialize)]
pub struct MapLayer {
    pub data: Vec<Number>,
}

/// Integer value of a JSON number, accepting floats with no fractional part
fn integral_value(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    // 2^63 itself is not representable as i64, hence the strict upper bound
    let value = number.as_f64()?;
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn invalid_number(field: &'static str, number: &Number) -> MapError {
    MapError::InvalidNumber {
        field,
        value: number.to_string(),
    }
}

fn parse_width(number: &Number) -> Result<u32> {
    integral_value(number)
        .and_then(|w| u32::try_from(w).ok())
        .ok_or_else(|| invalid_number("width", number))
}

fn parse_codes(numbers: &[Number]) -> Result<Vec<i64>> {
    numbers
        .iter()
        .map(|n| integral_value(n).ok_or_else(|| invalid_number("tile code", n)))
        .collect()
}

/// Convert a flat tile index into (x, y)
///
/// `x` is the quotient and `y` the remainder of dividing by `width`.
/// Returns `None` for a zero width or coordinates that do not fit in `i32`.
pub fn calc_tile_coords(index: usize, width: u32) -> Option<(i32, i32)> {
    let width = width as usize;
    let x = index.checked_div(width)?;
    let y = index % width;
    Some((i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

/// Parse a map document and build its grid
///
/// Any problem with the document fails the whole load; a partially built grid
/// is never returned.
pub fn parse_map(bytes: &[u8]) -> Result<Grid> {
    let document: MapDocument = serde_json::from_slice(bytes)?;
    let width = parse_width(&document.width)?;
    let layer_count = document.layers.len();

    // Only the first layer is used, the rest are ignored
    let first_layer = document.layers.into_iter().next().ok_or(MapError::MissingLayer)?;
    let layer: MapLayer = serde_json::from_value(first_layer)?;
    if layer_count > 1 {
        debug!("Ignoring {} extra map layer(s)", layer_count - 1);
    }

    build_grid(width, &parse_codes(&layer.data)?)
}

/// Read a map file from disk and build its grid
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = parse_map(&bytes)?;
    debug!("Loaded map {} with {} tiles", path.display(), grid.len());
    Ok(grid)
}

/// Place one tile per code, deriving coordinates from its flat index
pub fn build_grid(width: u32, codes: &[i64]) -> Result<Grid> {
    if width == 0 && !codes.is_empty() {
        return Err(MapError::InvalidWidth {
            width,
            tiles: codes.len(),
        });
    }

    let mut grid = Grid::new();
    for (index, &code) in codes.iter().enumerate() {
        let (x, y) = calc_tile_coords(index, width).ok_or(MapError::MapTooLarge { index })?;
        grid.add_tile(Tile::new(x, y, TileType::from_code(code)));
    }

    Ok(grid)
}
