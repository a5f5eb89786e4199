use hexmap_core::{Direction, TerrainType};

/// Device-independent editor input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Directional key press.
    Move(Direction),
    /// Click at a canvas pixel.
    Click { x: f64, y: f64 },
    /// Toggle the selected terrain at the cursor.
    PlaceAtCursor,
    SelectTerrain(TerrainType),
    SetFog(bool),
    Save { name: String },
    Load { name: String },
}

impl InputEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Move(_) => InputKind::Move,
            Self::Click { .. } => InputKind::Click,
            Self::PlaceAtCursor => InputKind::PlaceAtCursor,
            Self::SelectTerrain(_) => InputKind::SelectTerrain,
            Self::SetFog(_) => InputKind::SetFog,
            Self::Save { .. } => InputKind::Save,
            Self::Load { .. } => InputKind::Load,
        }
    }
}

/// Routing key of an [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum InputKind {
    Move,
    Click,
    PlaceAtCursor,
    SelectTerrain,
    SetFog,
    Save,
    Load,
}
