use crate::cursor::Direction;
use crate::fog::Visibility;
use crate::hex::HexCoordinate;
use crate::state::{MapState, TileChange};
use crate::terrain::TerrainType;

/// A single user intent applied by [`EditorEngine::apply`](super::EditorEngine::apply).
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    /// Toggle the selected terrain at a cell.
    Place(HexCoordinate),
    /// Toggle the selected terrain at the cell drawn under a canvas pixel.
    PlaceAtPixel { x: f64, y: f64 },
    /// Step the cursor.
    Move(Direction),
    /// Change the terrain used by subsequent placements.
    SelectTerrain(TerrainType),
    /// Turn fog of war on or off.
    SetFog(bool),
    /// Replace every tile with a freshly loaded map.
    Load(MapState),
}

/// What changed as a result of a command.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// A tile was added or removed.
    Tile(TileChange),
    /// The cursor moved (or stayed put at an edge). `refreshed` reports
    /// whether visibility was recomputed.
    Cursor {
        position: HexCoordinate,
        refreshed: bool,
    },
    TerrainSelected(TerrainType),
    Fog {
        enabled: bool,
        refreshed: bool,
    },
    /// The map was replaced; carries the new tile count.
    Loaded(usize),
    /// The command addressed nothing on the grid.
    Ignored,
}

impl CommandOutcome {
    /// Whether the host needs to redraw the map area.
    pub fn needs_redraw(&self) -> bool {
        match self {
            Self::Tile(_) | Self::Loaded(_) => true,
            Self::Cursor { refreshed, .. } | Self::Fog { refreshed, .. } => *refreshed,
            Self::TerrainSelected(_) | Self::Ignored => false,
        }
    }
}

/// A cell as a renderer should draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub coordinate: HexCoordinate,
    pub terrain: Option<TerrainType>,
    pub visibility: Visibility,
}
