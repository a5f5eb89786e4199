//! Save format for placed tiles.
//!
//! A map is persisted as a bare JSON array of `{x, y, terrain, label}`
//! objects in [`MapState`] iteration order. There is no header or version
//! field. Loading is all-or-nothing: the first bad record aborts the load
//! and no partially built state escapes.
mod record;

pub use record::TileRecord;

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::MapError;
use crate::hex::{GridBounds, HexCoordinate};
use crate::state::{MapState, Tile};
use crate::terrain::TerrainType;

/// Record list for `map`, in insertion order.
pub fn export(map: &MapState) -> Vec<TileRecord> {
    map.all().map(TileRecord::from).collect()
}

/// Builds a map from `records`, validating every record against the
/// standard grid.
pub fn import(records: impl IntoIterator<Item = TileRecord>) -> Result<MapState, MapError> {
    import_within(records, GridBounds::STANDARD)
}

/// Like [`import`] with explicit grid bounds.
pub fn import_within(
    records: impl IntoIterator<Item = TileRecord>,
    bounds: GridBounds,
) -> Result<MapState, MapError> {
    let tiles = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| into_tile(index, record, bounds))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tiles.into_iter().collect())
}

/// Serializes `map` as compact JSON. Record fields are written in
/// `x, y, terrain, label` order.
pub fn to_json(map: &MapState) -> Result<String, MapError> {
    serde_json::to_string(&export(map)).map_err(|err| MapError::EncodeFailure(err.to_string()))
}

/// Parses a saved map.
///
/// Text that is not JSON yields [`MapError::ParseFailure`]. JSON of the
/// wrong shape yields [`MapError::MalformedRecord`] naming the first bad
/// record; a top-level value that is not an array is reported as record 0.
pub fn from_json(text: &str) -> Result<MapState, MapError> {
    from_json_within(text, GridBounds::STANDARD)
}

/// Like [`from_json`] with explicit grid bounds.
pub fn from_json_within(text: &str, bounds: GridBounds) -> Result<MapState, MapError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| MapError::ParseFailure(err.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(MapError::malformed(
                0,
                format!("expected an array of tile records, found {}", kind_of(&other)),
            ));
        }
    };

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            TileRecord::deserialize(item).map_err(|err| MapError::malformed(index, err.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    import_within(records, bounds)
}

fn into_tile(index: usize, record: TileRecord, bounds: GridBounds) -> Result<Tile, MapError> {
    let terrain = TerrainType::from_str(&record.terrain).map_err(|_| MapError::UnknownTerrain {
        index,
        terrain: record.terrain.clone(),
    })?;

    let coordinate = HexCoordinate::new(record.x, record.y);
    if !bounds.contains(coordinate) {
        return Err(MapError::malformed(
            index,
            format!(
                "coordinate {coordinate} outside {}x{} grid",
                bounds.columns, bounds.rows
            ),
        ));
    }

    Ok(Tile::new(coordinate, terrain).with_label(record.label))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
