use super::coord::{Cube, GridBounds, HexCoordinate};

/// Minimum number of steps between two cells.
///
/// Symmetric, and zero iff `a == b`.
pub fn distance(a: HexCoordinate, b: HexCoordinate) -> u32 {
    a.to_cube().distance(b.to_cube())
}

/// Every cell within `k` steps of `center` (including `center`) that lies
/// inside the standard 20×20 grid.
pub fn neighbors_in_range(center: HexCoordinate, k: u32) -> Vec<HexCoordinate> {
    GridBounds::STANDARD.neighbors_in_range(center, k)
}

/// Every offset coordinate of a `width × height` rectangle, row by row.
pub fn rectangle(width: i32, height: i32) -> Vec<HexCoordinate> {
    let mut cells = Vec::with_capacity(GridBounds::new(width, height).cell_count());
    for y in 0..height {
        for x in 0..width {
            cells.push(HexCoordinate::new(x, y));
        }
    }
    cells
}

impl GridBounds {
    /// Cells within `k` steps of `center`, clipped to these bounds.
    ///
    /// `center` must lie inside the bounds.
    pub fn neighbors_in_range(&self, center: HexCoordinate, k: u32) -> Vec<HexCoordinate> {
        debug_assert!(
            self.contains(center),
            "range center {center} outside {}x{} grid",
            self.columns,
            self.rows
        );

        let k = k.min(i32::MAX as u32) as i32;
        let origin = center.to_cube();
        let mut cells = Vec::new();
        for dq in -k..=k {
            for dr in (-k).max(-dq - k)..=k.min(-dq + k) {
                let coord = HexCoordinate::from_cube(origin + Cube::new(dq, dr));
                if self.contains(coord) {
                    cells.push(coord);
                }
            }
        }
        cells
    }

    /// Every cell inside the bounds.
    pub fn cells(&self) -> Vec<HexCoordinate> {
        rectangle(self.columns, self.rows)
    }
}
