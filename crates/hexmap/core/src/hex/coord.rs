use std::fmt;

use crate::config::MapConfig;

/// Offset coordinate of a cell in the rectangular layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoordinate {
    pub x: i32,
    pub y: i32,
}

impl HexCoordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to cube coordinates (odd-r layout).
    pub const fn to_cube(self) -> Cube {
        let q = self.x - (self.y - (self.y & 1)) / 2;
        let r = self.y;
        Cube::new(q, r)
    }

    pub const fn from_cube(cube: Cube) -> Self {
        let x = cube.q + (cube.r - (cube.r & 1)) / 2;
        Self { x, y: cube.r }
    }

    /// The six adjacent cells, unclipped, starting east and turning counter-clockwise.
    pub fn neighbors(self) -> [HexCoordinate; 6] {
        let cube = self.to_cube();
        Cube::DIRECTIONS.map(|direction| Self::from_cube(cube + direction))
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for HexCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Cube coordinate. The third axis is implicit: `s = -q - r`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cube {
    pub q: i32,
    pub r: i32,
}

impl Cube {
    pub const DIRECTIONS: [Cube; 6] = [
        Cube { q: 1, r: 0 },
        Cube { q: 1, r: -1 },
        Cube { q: 0, r: -1 },
        Cube { q: -1, r: 0 },
        Cube { q: -1, r: 1 },
        Cube { q: 0, r: 1 },
    ];

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Cube distance: `max(|dq|, |dr|, |ds|)`.
    pub fn distance(self, other: Cube) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Rounds a fractional cube position to the nearest cell.
    ///
    /// The component with the largest rounding error is recomputed from the
    /// other two so that `q + r + s == 0` still holds. Returns `None` when
    /// the position is not finite, or when the cell or its offset column
    /// does not fit in `i32`.
    pub fn round(q: f64, r: f64) -> Option<Cube> {
        let s = -q - r;
        if !(q.is_finite() && r.is_finite() && s.is_finite()) {
            return None;
        }

        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        }

        let range = f64::from(i32::MIN)..=f64::from(i32::MAX);
        if !range.contains(&rq) || !range.contains(&rr) {
            return None;
        }

        let cube = Cube::new(rq as i32, rr as i32);
        cube.offset_column()?;
        Some(cube)
    }

    /// Offset `x` of this cell, or `None` if it leaves the `i32` range.
    fn offset_column(self) -> Option<i32> {
        let q = i64::from(self.q);
        let r = i64::from(self.r);
        i32::try_from(q + (r - (r & 1)) / 2).ok()
    }
}

impl std::ops::Add for Cube {
    type Output = Cube;

    #[inline]
    fn add(self, other: Cube) -> Cube {
        Cube::new(self.q + other.q, self.r + other.r)
    }
}

impl std::ops::Sub for Cube {
    type Output = Cube;

    #[inline]
    fn sub(self, other: Cube) -> Cube {
        Cube::new(self.q - other.q, self.r - other.r)
    }
}

/// Valid coordinate range `[0, columns) × [0, rows)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub columns: i32,
    pub rows: i32,
}

impl GridBounds {
    /// The 20×20 editor grid.
    pub const STANDARD: Self = Self::new(MapConfig::COLUMNS, MapConfig::ROWS);

    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    /// Number of cells inside the bounds. Negative extents count as empty
    /// and the product saturates instead of wrapping.
    pub fn cell_count(&self) -> usize {
        let columns = usize::try_from(self.columns).unwrap_or(0);
        let rows = usize::try_from(self.rows).unwrap_or(0);
        columns.saturating_mul(rows)
    }

    pub const fn contains(&self, coord: HexCoordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.columns && coord.y < self.rows
    }

    /// Saturates each component into range. Bounds must be non-empty.
    pub fn clamp(&self, coord: HexCoordinate) -> HexCoordinate {
        HexCoordinate::new(
            coord.x.clamp(0, self.columns - 1),
            coord.y.clamp(0, self.rows - 1),
        )
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<&MapConfig> for GridBounds {
    fn from(config: &MapConfig) -> Self {
        Self::new(config.columns, config.rows)
    }
}
