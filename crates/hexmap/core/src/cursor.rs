//! Clamped editor cursor.

use crate::hex::{GridBounds, HexCoordinate};
use crate::state::{MapState, Tile};

/// Logical movement direction delivered by the input layer.
///
/// Movement is axis-aligned in offset space: Up/Down step the row,
/// Left/Right step the column.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "up", serialize = "ArrowUp")]
    Up,
    #[strum(to_string = "down", serialize = "ArrowDown")]
    Down,
    #[strum(to_string = "left", serialize = "ArrowLeft")]
    Left,
    #[strum(to_string = "right", serialize = "ArrowRight")]
    Right,
}

impl Direction {
    /// Offset-space step `(dx, dy)`; rows grow downwards.
    pub const fn to_delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Cursor position that always lies inside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorController {
    position: HexCoordinate,
    bounds: GridBounds,
}

impl CursorController {
    /// Creates a cursor at `(0, 0)`.
    pub fn new(bounds: GridBounds) -> Self {
        Self::at(HexCoordinate::ORIGIN, bounds)
    }

    /// Creates a cursor at `position`, clamped into `bounds`.
    pub fn at(position: HexCoordinate, bounds: GridBounds) -> Self {
        assert!(
            bounds.columns > 0 && bounds.rows > 0,
            "cursor needs a non-empty grid"
        );
        Self {
            position: bounds.clamp(position),
            bounds,
        }
    }

    /// Steps one cell in `direction`, saturating at the grid edge.
    pub fn move_cursor(&mut self, direction: Direction) -> HexCoordinate {
        let (dx, dy) = direction.to_delta();
        let target = HexCoordinate::new(
            self.position.x.saturating_add(dx),
            self.position.y.saturating_add(dy),
        );
        self.position = self.bounds.clamp(target);
        self.position
    }

    pub fn current(&self) -> HexCoordinate {
        self.position
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Tile under the cursor, if any.
    pub fn info_at<'a>(&self, map: &'a MapState) -> Option<&'a Tile> {
        map.get(self.position)
    }
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new(GridBounds::STANDARD)
    }
}
