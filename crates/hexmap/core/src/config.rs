use crate::hex::GridBounds;

/// Grid dimensions and geometry constants.
///
/// The editor works on a single fixed rectangle; the constants are exposed so
/// hosts can size canvases without constructing a config.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig {
    /// Number of hex columns (offset `x` range is `0..columns`).
    pub columns: i32,
    /// Number of hex rows (offset `y` range is `0..rows`).
    pub rows: i32,
    /// Hex radius in pixels (center to corner).
    pub hex_size: f64,
    /// Hex distance around the cursor that stays visible under fog of war.
    pub fog_radius: u32,
    /// Clicks to the right of this pixel column are ignored by the editor.
    pub canvas_width: f64,
}

impl MapConfig {
    pub const COLUMNS: i32 = 20;
    pub const ROWS: i32 = 20;
    pub const HEX_SIZE: f64 = 30.0;
    pub const FOG_RADIUS: u32 = 2;
    pub const CANVAS_WIDTH: f64 = 1200.0;

    pub fn new() -> Self {
        Self {
            columns: Self::COLUMNS,
            rows: Self::ROWS,
            hex_size: Self::HEX_SIZE,
            fog_radius: Self::FOG_RADIUS,
            canvas_width: Self::CANVAS_WIDTH,
        }
    }

    /// Total number of cells in the rectangle.
    pub fn cell_count(&self) -> usize {
        GridBounds::from(self).cell_count()
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}
