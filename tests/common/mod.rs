use tilegraph::{Grid, Tile, TileType};

/// Build a grid from text rows, one string per `x`, one char per `y`
/// Legend: `.` ground, `G` goal, `S` start, `#` block, ` ` no tile, digit = raw code
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let mut grid = Grid::new();
    for (x, row) in rows.iter().enumerate() {
        for (y, ch) in row.chars().enumerate() {
            let tile_type = match ch {
                '.' => TileType::Ground,
                'G' => TileType::Goal,
                'S' => TileType::Start,
                '#' => TileType::Block,
                ' ' => continue,
                d if d.is_ascii_digit() => TileType::from_code(d.to_digit(10).unwrap() as i64),
                other => panic!("unknown tile symbol '{}'", other),
            };
            grid.add_tile(Tile::new(x as i32, y as i32, tile_type));
        }
    }
    grid
}

/// Minimal map document with a single tile layer
pub fn map_json(width: u32, data: &[i64]) -> String {
    serde_json::json!({
        "width": width,
        "layers": [ { "data": data } ]
    })
    .to_string()
}

pub fn coords(tiles: &[&Tile]) -> Vec<(i32, i32)> {
    tiles.iter().map(|t| (t.x, t.y)).collect()
}
