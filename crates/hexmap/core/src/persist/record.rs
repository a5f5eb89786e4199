use serde::{Deserialize, Serialize};

use crate::state::Tile;

/// One entry of the persisted tile list.
///
/// `terrain` is kept as a string so that loading can report unknown names
/// as [`MapError::UnknownTerrain`](crate::MapError::UnknownTerrain) instead
/// of a generic shape error. Older save files call the label `text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub x: i32,
    pub y: i32,
    pub terrain: String,
    #[serde(alias = "text")]
    pub label: String,
}

impl TileRecord {
    pub fn new(x: i32, y: i32, terrain: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            terrain: terrain.into(),
            label: label.into(),
        }
    }
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        Self {
            x: tile.coordinate.x,
            y: tile.coordinate.y,
            terrain: tile.terrain.to_string(),
            label: tile.label.clone(),
        }
    }
}
