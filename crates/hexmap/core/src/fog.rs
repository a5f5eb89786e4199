//! Fog-of-war classification.
//!
//! Each cell is either the cursor, visible, or hidden. With fog disabled
//! every non-cursor cell is visible; with fog enabled only cells within
//! `fog_radius` hex steps of the cursor are. The classification is a pure
//! function of `(cursor, fog_enabled, radius)`, so [`FogOfWar`] only
//! recomputes it when one of those inputs changes.

use crate::hex::{GridBounds, HexCoordinate, distance};

/// How a renderer should treat a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Visibility {
    /// The cell under the cursor; drawn with a highlight.
    Cursor,
    /// Drawn normally.
    #[default]
    Visible,
    /// Occluded.
    Hidden,
}

impl Visibility {
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Classifies a single cell.
pub fn visibility_of(
    coord: HexCoordinate,
    cursor: HexCoordinate,
    fog_enabled: bool,
    radius: u32,
) -> Visibility {
    if coord == cursor {
        Visibility::Cursor
    } else if !fog_enabled || distance(coord, cursor) <= radius {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Classification of every cell in a grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMap {
    bounds: GridBounds,
    cells: Vec<Visibility>,
}

impl VisibilityMap {
    pub fn compute(
        bounds: GridBounds,
        cursor: HexCoordinate,
        fog_enabled: bool,
        radius: u32,
    ) -> Self {
        let cells = bounds
            .cells()
            .into_iter()
            .map(|coord| visibility_of(coord, cursor, fog_enabled, radius))
            .collect();
        Self { bounds, cells }
    }

    /// Classification of `coord`; cells outside the grid are hidden.
    pub fn get(&self, coord: HexCoordinate) -> Visibility {
        if !self.bounds.contains(coord) {
            return Visibility::Hidden;
        }
        let index = coord.y as usize * self.bounds.columns as usize + coord.x as usize;
        self.cells[index]
    }

    /// Every cell with its classification, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (HexCoordinate, Visibility)> + '_ {
        let columns = self.bounds.columns.max(1) as usize;
        self.cells.iter().enumerate().map(move |(index, visibility)| {
            let coord = HexCoordinate::new((index % columns) as i32, (index / columns) as i32);
            (coord, *visibility)
        })
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|v| v.is_hidden()).count()
    }
}

/// Cached visibility that is recomputed only when its inputs change.
#[derive(Clone, Debug)]
pub struct FogOfWar {
    radius: u32,
    cursor: HexCoordinate,
    fog_enabled: bool,
    map: VisibilityMap,
    generation: u64,
}

impl FogOfWar {
    pub fn new(bounds: GridBounds, radius: u32, cursor: HexCoordinate, fog_enabled: bool) -> Self {
        Self {
            radius,
            cursor,
            fog_enabled,
            map: VisibilityMap::compute(bounds, cursor, fog_enabled, radius),
            generation: 0,
        }
    }

    /// Recomputes the map if `cursor` or `fog_enabled` differ from the last
    /// computation. Returns `true` when a recomputation happened.
    pub fn refresh(&mut self, cursor: HexCoordinate, fog_enabled: bool) -> bool {
        if cursor == self.cursor && fog_enabled == self.fog_enabled {
            return false;
        }
        self.cursor = cursor;
        self.fog_enabled = fog_enabled;
        self.map = VisibilityMap::compute(self.map.bounds, cursor, fog_enabled, self.radius);
        self.generation += 1;
        true
    }

    pub fn visibility(&self, coord: HexCoordinate) -> Visibility {
        self.map.get(coord)
    }

    pub fn map(&self) -> &VisibilityMap {
        &self.map
    }

    /// Cells currently occluded.
    pub fn hidden(&self) -> impl Iterator<Item = HexCoordinate> + '_ {
        self.map
            .iter()
            .filter(|(_, visibility)| visibility.is_hidden())
            .map(|(coord, _)| coord)
    }

    /// Number of recomputations since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn fog_enabled(&self) -> bool {
        self.fog_enabled
    }
}
