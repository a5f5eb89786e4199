//! Terrain classification for placed tiles.

/// Closed set of terrain kinds a tile can carry.
///
/// The string form (`Display` / `FromStr`) is the exact variant name and is
/// the value written to save files. Parsing is case-sensitive so a save file
/// either names a known terrain or is rejected.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainType {
    #[default]
    Water,
    Desert,
    Wood,
    Clay,
    Sheep,
    Ore,
    Wheat,
}

impl TerrainType {
    /// Every terrain in declaration order.
    pub fn all() -> impl Iterator<Item = TerrainType> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Cycles to the next terrain, wrapping after the last one.
    pub fn next(self) -> Self {
        let mut iter = Self::all().skip_while(|t| *t != self).skip(1);
        iter.next().unwrap_or(TerrainType::Water)
    }

    /// Cycles to the previous terrain, wrapping before the first one.
    pub fn prev(self) -> Self {
        Self::all()
            .take_while(|t| *t != self)
            .last()
            .unwrap_or(TerrainType::Wheat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::EnumCount;

    #[test]
    fn parses_exact_names() {
        for terrain in TerrainType::all() {
            assert_eq!(TerrainType::from_str(terrain.as_ref()), Ok(terrain));
        }
        assert_eq!(TerrainType::from_str("Wood"), Ok(TerrainType::Wood));
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        assert!(TerrainType::from_str("Lava").is_err());
        assert!(TerrainType::from_str("wood").is_err());
        assert!(TerrainType::from_str("").is_err());
    }

    #[test]
    fn closed_set_has_seven_members() {
        assert_eq!(TerrainType::COUNT, 7);
        assert_eq!(TerrainType::all().count(), 7);
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(TerrainType::Water.next(), TerrainType::Desert);
        assert_eq!(TerrainType::Wheat.next(), TerrainType::Water);
        assert_eq!(TerrainType::Water.prev(), TerrainType::Wheat);
        assert_eq!(TerrainType::Desert.prev(), TerrainType::Water);
    }
}
