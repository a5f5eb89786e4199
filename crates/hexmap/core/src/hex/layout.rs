use crate::config::MapConfig;
use crate::error::MapError;

use super::coord::{Cube, HexCoordinate};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Pixel position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Pixel projection for pointy-top hexes of a given size.
///
/// `size` is the center-to-corner radius. A hex is `sqrt(3) * size` wide and
/// `2 * size` tall; rows are `1.5 * size` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    size: f64,
}

impl HexLayout {
    /// 30-pixel hexes used by the editor.
    pub const STANDARD: Self = Self {
        size: MapConfig::HEX_SIZE,
    };

    pub fn new(size: f64) -> Self {
        debug_assert!(size.is_finite() && size > 0.0, "hex size must be positive");
        Self { size }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn hex_width(&self) -> f64 {
        SQRT_3 * self.size
    }

    pub fn hex_height(&self) -> f64 {
        2.0 * self.size
    }

    /// Top-left anchor of the hex bounding box.
    pub fn hex_to_point(&self, coord: HexCoordinate) -> Point {
        let cube = coord.to_cube();
        let q = f64::from(cube.q);
        let r = f64::from(cube.r);
        Point::new(
            self.size * SQRT_3 * (q + r / 2.0),
            self.size * 1.5 * r,
        )
    }

    /// Inverse of [`hex_to_point`](Self::hex_to_point).
    ///
    /// Returns the cell whose anchor is nearest to `(px, py)` in hex space.
    /// There is no bounds check; pixels far outside the grid still map to
    /// the mathematically nearest cell.
    pub fn point_to_hex(&self, px: f64, py: f64) -> Result<HexCoordinate, MapError> {
        let q = (SQRT_3 / 3.0 * px - py / 3.0) / self.size;
        let r = (2.0 / 3.0 * py) / self.size;
        Cube::round(q, r)
            .map(HexCoordinate::from_cube)
            .ok_or(MapError::InvalidCoordinate { x: px, y: py })
    }

    /// Hit test for a drawn pixel: the cell whose polygon contains `(px, py)`.
    pub fn pixel_to_hex(&self, px: f64, py: f64) -> Result<HexCoordinate, MapError> {
        let half = self.half_extent();
        self.point_to_hex(px - half.x, py - half.y)
    }

    /// Pixel center of the hex.
    pub fn center(&self, coord: HexCoordinate) -> Point {
        self.hex_to_point(coord) + self.half_extent()
    }

    /// Polygon vertices offset to the anchor, clockwise in screen space
    /// starting at the upper-right corner. Callers close the path themselves.
    pub fn corners(&self, coord: HexCoordinate) -> [Point; 6] {
        let anchor = self.hex_to_point(coord);
        let width = self.hex_width();
        let height = self.hex_height();
        [
            Point::new(width, height * 0.25),
            Point::new(width, height * 0.75),
            Point::new(width * 0.5, height),
            Point::new(0.0, height * 0.75),
            Point::new(0.0, height * 0.25),
            Point::new(width * 0.5, 0.0),
        ]
        .map(|corner| corner + anchor)
    }

    /// Pixel extent needed to draw a `columns × rows` grid.
    pub fn canvas_size(&self, columns: i32, rows: i32) -> Point {
        if columns <= 0 || rows <= 0 {
            return Point::default();
        }
        let shove = if rows > 1 { 0.5 } else { 0.0 };
        Point::new(
            self.hex_width() * (f64::from(columns) + shove),
            self.size * 1.5 * f64::from(rows - 1) + self.hex_height(),
        )
    }

    fn half_extent(&self) -> Point {
        Point::new(self.hex_width() / 2.0, self.hex_height() / 2.0)
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<&MapConfig> for HexLayout {
    fn from(config: &MapConfig) -> Self {
        Self::new(config.hex_size)
    }
}
