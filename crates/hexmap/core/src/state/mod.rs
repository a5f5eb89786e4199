//! Placed-tile state.
//!
//! [`MapState`] maps each coordinate to at most one [`Tile`]. Lookups are
//! keyed, iteration follows insertion order so saves are reproducible.
mod tile;

pub use tile::{Tile, TileChange};

use indexmap::IndexMap;

use crate::hex::HexCoordinate;
use crate::terrain::TerrainType;

/// Collection of placed tiles keyed by coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapState {
    tiles: IndexMap<HexCoordinate, Tile>,
}

impl MapState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tile with `terrain` if the cell is empty, otherwise removes the
    /// existing tile whatever its terrain. Never edits a tile in place.
    pub fn toggle(&mut self, coord: HexCoordinate, terrain: TerrainType) -> TileChange {
        match self.tiles.shift_remove(&coord) {
            Some(existing) => TileChange::Removed(existing),
            None => {
                let tile = Tile::new(coord, terrain);
                self.tiles.insert(coord, tile.clone());
                TileChange::Added(tile)
            }
        }
    }

    pub fn get(&self, coord: HexCoordinate) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn contains(&self, coord: HexCoordinate) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Tiles in insertion order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Tile> + '_ {
        self.tiles.values()
    }

    /// Discards every tile and installs `tiles`.
    ///
    /// When the input repeats a coordinate the last record wins; the tile
    /// keeps the position of the first occurrence in iteration order.
    pub fn replace_all(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        *self = tiles.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl FromIterator<Tile> for MapState {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut tiles = IndexMap::new();
        for tile in iter {
            tiles.insert(tile.coordinate, tile);
        }
        Self { tiles }
    }
}
