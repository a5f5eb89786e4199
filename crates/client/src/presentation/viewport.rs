//! Mapping between terminal cells and canvas pixels.
//!
//! The map canvas spans the whole grid in editor pixels with the origin at
//! the top-left, rows growing downwards. Ratatui's canvas puts the origin at
//! the bottom-left, so drawing flips `y` through [`MapViewport::canvas_y`].

use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapViewport {
    area: Rect,
    width: f64,
    height: f64,
}

impl MapViewport {
    /// `area` is the inner map area in terminal cells; `width` and `height`
    /// are the pixel extent of the grid drawn into it.
    pub fn new(area: Rect, width: f64, height: f64) -> Self {
        Self {
            area,
            width,
            height,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixel at the middle of terminal cell `(column, row)`, or `None` when
    /// the cell lies outside the map area.
    pub fn cell_to_pixel(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if self.area.width == 0 || self.area.height == 0 {
            return None;
        }
        let inside_x = column.checked_sub(self.area.x).filter(|dx| *dx < self.area.width)?;
        let inside_y = row.checked_sub(self.area.y).filter(|dy| *dy < self.area.height)?;

        let x = (f64::from(inside_x) + 0.5) * self.width / f64::from(self.area.width);
        let y = (f64::from(inside_y) + 0.5) * self.height / f64::from(self.area.height);
        Some((x, y))
    }

    /// Canvas `y` for an editor pixel `y`.
    pub fn canvas_y(&self, y: f64) -> f64 {
        self.height - y
    }
}
