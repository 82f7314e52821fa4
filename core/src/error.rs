use crate::types::ZoneCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid coordinates: ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Space is already occupied: ({x}, {y}) is {zone}")]
    OccupiedCell { x: usize, y: usize, zone: ZoneCode },

    #[error("Cannot place an empty zone at ({x}, {y})")]
    InvalidZone { x: usize, y: usize },

    #[error("No saved game found at {path}")]
    SnapshotNotFound { path: String },

    #[error("Saved game at {path} is corrupt: {reason}")]
    SnapshotCorrupt { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
