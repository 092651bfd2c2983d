use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while turning a map document into a `Grid`
#[derive(Error, Debug)]
pub enum MapError {
    #[error("failed to read map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed map document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be an integer in range, got {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("map document has no layers")]
    MissingLayer,

    #[error("invalid map width {width} for {tiles} tiles")]
    InvalidWidth { width: u32, tiles: usize },

    #[error("tile index {index} does not fit in grid coordinates")]
    MapTooLarge { index: usize },
}

pub type Result<T> = std::result::Result<T, MapError>;
