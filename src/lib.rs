pub mod config;
pub mod error;
pub mod grid;
pub mod loader;
pub mod tile;

pub use error::MapError;
pub use grid::Grid;
pub use loader::{load_map, parse_map};
pub use tile::{calc_distance, Tile, TileType};
