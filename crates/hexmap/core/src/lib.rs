//! Hex-grid terrain map logic shared by every editor host.
//!
//! `hexmap-core` defines the geometry of the fixed rectangular hex grid, the
//! placed-tile state, the clamped cursor and the fog-of-war classification.
//! Everything here is synchronous and free of I/O; hosts feed commands into
//! [`engine::EditorEngine`] and read geometry back for drawing.
pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod fog;
pub mod hex;
#[cfg(feature = "serde")]
pub mod persist;
pub mod state;
pub mod terrain;

pub use config::MapConfig;
pub use cursor::{CursorController, Direction};
pub use engine::{CellView, CommandOutcome, EditorCommand, EditorEngine};
pub use error::{EditorError, ErrorKind, ErrorSeverity, MapError};
pub use fog::{FogOfWar, Visibility, VisibilityMap, visibility_of};
pub use hex::{
    Cube, GridBounds, HexCoordinate, HexLayout, Point, distance, neighbors_in_range, rectangle,
};
#[cfg(feature = "serde")]
pub use persist::{TileRecord, export, from_json, import, to_json};
pub use state::{MapState, Tile, TileChange};
pub use terrain::TerrainType;
