//! Hex grid geometry.
//!
//! # Coordinate systems
//!
//! Cells are addressed by **offset coordinates** `(x, y)`: `x` is the column
//! and `y` the row of a rectangular layout. Hexes are **pointy-top** and the
//! layout is **odd-r**: every odd row is shoved right by half a hex.
//!
//! Distance and range queries run on **cube coordinates** `(q, r, s)` with
//! `q + r + s == 0`:
//!
//! ```text
//! q = x - (y - (y & 1)) / 2
//! r = y
//! s = -q - r
//! ```
//!
//! Pixel placement follows the usual axial projection; the point returned by
//! [`HexLayout::hex_to_point`] is the top-left corner of the hex bounding box,
//! and [`HexLayout::corners`] is expressed relative to that same anchor.
mod coord;
mod layout;
mod range;

pub use coord::{Cube, GridBounds, HexCoordinate};
pub use layout::{HexLayout, Point};
pub use range::{distance, neighbors_in_range, rectangle};
