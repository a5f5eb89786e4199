//! Event types for different topics.

use hexmap_core::{HexCoordinate, TerrainType, TileChange};

/// Changes to the placed tiles.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A tile was added or removed.
    TileChanged(TileChange),

    /// The whole map was replaced by a load.
    Loaded { name: Option<String>, tiles: usize },

    /// Placement terrain changed.
    TerrainSelected(TerrainType),
}

/// Changes that affect what is drawn but not the saved map.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    CursorMoved { position: HexCoordinate },

    FogToggled { enabled: bool },

    /// Fog classification was recomputed.
    VisibilityRecomputed { generation: u64, hidden: usize },
}

/// Save and load results.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Saved { name: String, tiles: usize },

    SaveFailed { name: String, error: String },

    /// A load was rejected; the map is unchanged.
    LoadFailed { name: String, error: String },
}
