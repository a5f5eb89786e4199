use crate::hex::HexCoordinate;
use crate::terrain::TerrainType;

/// A placed map cell.
///
/// Sprites are looked up from `terrain` at draw time and never stored here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub coordinate: HexCoordinate,
    pub terrain: TerrainType,
    pub label: String,
}

impl Tile {
    /// Creates a tile with an empty label.
    pub fn new(coordinate: HexCoordinate, terrain: TerrainType) -> Self {
        Self {
            coordinate,
            terrain,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Result of [`MapState::toggle`](super::MapState::toggle).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileChange {
    /// No tile existed; this one was inserted.
    Added(Tile),
    /// A tile existed and was removed.
    Removed(Tile),
}

impl TileChange {
    pub fn tile(&self) -> &Tile {
        match self {
            Self::Added(tile) | Self::Removed(tile) => tile,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}
