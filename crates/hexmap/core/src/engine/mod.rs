//! Single control flow for editor commands.
//!
//! [`EditorEngine`] owns the map, the cursor, the fog flag and the cached
//! visibility. Hosts translate input into [`EditorCommand`]s, apply them one
//! at a time and redraw from the engine's read accessors. Visibility is
//! recomputed exactly when the cursor position or the fog flag changes.
mod command;

pub use command::{CellView, CommandOutcome, EditorCommand};

use crate::config::MapConfig;
use crate::cursor::CursorController;
use crate::error::MapError;
use crate::fog::{FogOfWar, Visibility};
use crate::hex::{GridBounds, HexCoordinate, HexLayout};
use crate::state::{MapState, Tile};
use crate::terrain::TerrainType;

#[derive(Clone, Debug)]
pub struct EditorEngine {
    config: MapConfig,
    bounds: GridBounds,
    layout: HexLayout,
    map: MapState,
    cursor: CursorController,
    fog_enabled: bool,
    selected_terrain: TerrainType,
    fog: FogOfWar,
}

impl EditorEngine {
    pub fn new(config: MapConfig) -> Self {
        let bounds = GridBounds::from(&config);
        let layout = HexLayout::from(&config);
        let cursor = CursorController::new(bounds);
        let fog = FogOfWar::new(bounds, config.fog_radius, cursor.current(), false);
        Self {
            config,
            bounds,
            layout,
            map: MapState::new(),
            cursor,
            fog_enabled: false,
            selected_terrain: TerrainType::default(),
            fog,
        }
    }

    /// Applies one command.
    ///
    /// Errors leave every piece of engine state as it was.
    pub fn apply(&mut self, command: EditorCommand) -> Result<CommandOutcome, MapError> {
        let outcome = match command {
            EditorCommand::Place(coord) => self.place(coord),
            EditorCommand::PlaceAtPixel { x, y } => self.place_at_pixel(x, y)?,
            EditorCommand::Move(direction) => {
                let position = self.cursor.move_cursor(direction);
                let refreshed = self.fog.refresh(position, self.fog_enabled);
                CommandOutcome::Cursor {
                    position,
                    refreshed,
                }
            }
            EditorCommand::SelectTerrain(terrain) => {
                self.selected_terrain = terrain;
                CommandOutcome::TerrainSelected(terrain)
            }
            EditorCommand::SetFog(enabled) => {
                self.fog_enabled = enabled;
                let refreshed = self.fog.refresh(self.cursor.current(), enabled);
                CommandOutcome::Fog { enabled, refreshed }
            }
            EditorCommand::Load(map) => {
                self.check_within_bounds(&map)?;
                self.map = map;
                CommandOutcome::Loaded(self.map.len())
            }
        };
        Ok(outcome)
    }

    fn place(&mut self, coord: HexCoordinate) -> CommandOutcome {
        if !self.bounds.contains(coord) {
            return CommandOutcome::Ignored;
        }
        CommandOutcome::Tile(self.map.toggle(coord, self.selected_terrain))
    }

    /// Fails on the first tile that lies outside the grid.
    fn check_within_bounds(&self, map: &MapState) -> Result<(), MapError> {
        let outside = map
            .all()
            .enumerate()
            .find(|(_, tile)| !self.bounds.contains(tile.coordinate));
        match outside {
            Some((index, tile)) => Err(MapError::malformed(
                index,
                format!(
                    "coordinate {} outside {}x{} grid",
                    tile.coordinate, self.bounds.columns, self.bounds.rows
                ),
            )),
            None => Ok(()),
        }
    }

    fn place_at_pixel(&mut self, x: f64, y: f64) -> Result<CommandOutcome, MapError> {
        if x > self.config.canvas_width {
            return Ok(CommandOutcome::Ignored);
        }
        let coord = self.layout.pixel_to_hex(x, y)?;
        Ok(self.place(coord))
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn cursor(&self) -> HexCoordinate {
        self.cursor.current()
    }

    pub fn fog_enabled(&self) -> bool {
        self.fog_enabled
    }

    pub fn selected_terrain(&self) -> TerrainType {
        self.selected_terrain
    }

    pub fn fog(&self) -> &FogOfWar {
        &self.fog
    }

    pub fn visibility(&self, coord: HexCoordinate) -> Visibility {
        self.fog.visibility(coord)
    }

    /// Tile under the cursor, if any.
    pub fn tile_under_cursor(&self) -> Option<&Tile> {
        self.cursor.info_at(&self.map)
    }

    /// Readout for the cell under the cursor.
    pub fn info_text(&self) -> String {
        match self.tile_under_cursor() {
            Some(tile) if tile.label.is_empty() => format!("Terrain tile of type {}", tile.terrain),
            Some(tile) => format!("Terrain tile of type {} ({})", tile.terrain, tile.label),
            None => "No tile here".to_string(),
        }
    }

    /// Every grid cell with what should be drawn there, row by row.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.fog.map().iter().map(|(coordinate, visibility)| CellView {
            coordinate,
            terrain: self.map.get(coordinate).map(|tile| tile.terrain),
            visibility,
        })
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Direction;
    use crate::state::TileChange;

    #[test]
    fn end_to_end_editing_session() {
        let mut engine = EditorEngine::default();
        assert_eq!(engine.cursor(), HexCoordinate::ORIGIN);

        for direction in [
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Right,
        ] {
            engine.apply(EditorCommand::Move(direction)).unwrap();
        }
        let cursor = engine.cursor();
        assert_eq!(cursor, HexCoordinate::new(3, 2));
        assert!(engine.tile_under_cursor().is_none());
        assert_eq!(engine.info_text(), "No tile here");

        engine
            .apply(EditorCommand::SelectTerrain(TerrainType::Wood))
            .unwrap();
        let placed = engine.apply(EditorCommand::Place(cursor)).unwrap();
        assert_eq!(
            placed,
            CommandOutcome::Tile(TileChange::Added(Tile::new(cursor, TerrainType::Wood)))
        );
        assert_eq!(engine.info_text(), "Terrain tile of type Wood");

        engine
            .apply(EditorCommand::SelectTerrain(TerrainType::Sheep))
            .unwrap();
        let removed = engine.apply(EditorCommand::Place(cursor)).unwrap();
        assert!(matches!(removed, CommandOutcome::Tile(TileChange::Removed(_))));

        assert!(engine.map().is_empty());
        #[cfg(feature = "serde")]
        assert!(crate::persist::export(engine.map()).is_empty());
    }

    #[test]
    fn default_terrain_is_water() {
        let mut engine = EditorEngine::default();
        engine
            .apply(EditorCommand::Place(HexCoordinate::new(1, 1)))
            .unwrap();
        assert_eq!(
            engine.map().get(HexCoordinate::new(1, 1)).map(|t| t.terrain),
            Some(TerrainType::Water)
        );
    }

    #[test]
    fn visibility_recomputes_only_on_move_and_fog_toggle() {
        let mut engine = EditorEngine::default();
        let start = engine.fog().generation();

        engine
            .apply(EditorCommand::Place(HexCoordinate::new(4, 4)))
            .unwrap();
        engine
            .apply(EditorCommand::SelectTerrain(TerrainType::Ore))
            .unwrap();
        assert_eq!(engine.fog().generation(), start);

        let outcome = engine.apply(EditorCommand::SetFog(true)).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Fog {
                enabled: true,
                refreshed: true
            }
        );
        assert_eq!(engine.fog().generation(), start + 1);

        engine.apply(EditorCommand::Move(Direction::Right)).unwrap();
        assert_eq!(engine.fog().generation(), start + 2);

        // Blocked at the top edge: position unchanged, nothing to recompute.
        let outcome = engine.apply(EditorCommand::Move(Direction::Up)).unwrap();
        assert!(!outcome.needs_redraw());
        assert_eq!(engine.fog().generation(), start + 2);
    }

    #[test]
    fn fog_hides_cells_beyond_radius() {
        let mut engine = EditorEngine::default();
        engine.apply(EditorCommand::SetFog(true)).unwrap();
        assert_eq!(engine.visibility(HexCoordinate::ORIGIN), Visibility::Cursor);
        assert_eq!(
            engine.visibility(HexCoordinate::new(2, 0)),
            Visibility::Visible
        );
        assert_eq!(
            engine.visibility(HexCoordinate::new(3, 0)),
            Visibility::Hidden
        );
        assert_eq!(engine.cells().count(), 400);
    }

    #[test]
    fn pixel_placement_hits_the_drawn_cell() {
        let mut engine = EditorEngine::default();
        let target = HexCoordinate::new(6, 3);
        let center = engine.layout().center(target);

        let outcome = engine
            .apply(EditorCommand::PlaceAtPixel {
                x: center.x,
                y: center.y,
            })
            .unwrap();
        assert!(matches!(outcome, CommandOutcome::Tile(TileChange::Added(_))));
        assert!(engine.map().contains(target));
    }

    #[test]
    fn pixel_placement_outside_the_grid_is_ignored() {
        let mut engine = EditorEngine::default();
        for (x, y) in [(1250.0, 40.0), (-400.0, 30.0), (30.0, 5000.0)] {
            let outcome = engine.apply(EditorCommand::PlaceAtPixel { x, y }).unwrap();
            assert_eq!(outcome, CommandOutcome::Ignored);
        }
        assert!(engine.map().is_empty());
    }

    #[test]
    fn non_finite_pixels_are_rejected_without_side_effects() {
        let mut engine = EditorEngine::default();
        let err = engine
            .apply(EditorCommand::PlaceAtPixel {
                x: f64::NAN,
                y: 10.0,
            })
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidCoordinate);
        assert!(engine.map().is_empty());
    }

    #[test]
    fn huge_pixels_fail_or_are_ignored_without_panicking() {
        let mut engine = EditorEngine::default();

        // Right of the canvas: dropped before any conversion.
        let outcome = engine
            .apply(EditorCommand::PlaceAtPixel { x: 1.6e11, y: 9.0e10 })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Ignored);

        // Left of the canvas, far enough that the offset column overflows.
        let err = engine
            .apply(EditorCommand::PlaceAtPixel {
                x: -1.2e11,
                y: -9.0e10,
            })
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidCoordinate);
        assert!(engine.map().is_empty());
    }

    #[test]
    fn load_replaces_tiles_but_keeps_cursor() {
        let mut engine = EditorEngine::default();
        engine.apply(EditorCommand::Move(Direction::Down)).unwrap();
        engine
            .apply(EditorCommand::Place(HexCoordinate::new(9, 9)))
            .unwrap();

        let loaded: MapState = [Tile::new(HexCoordinate::new(0, 1), TerrainType::Clay)]
            .into_iter()
            .collect();
        let outcome = engine.apply(EditorCommand::Load(loaded)).unwrap();
        assert_eq!(outcome, CommandOutcome::Loaded(1));
        assert!(!engine.map().contains(HexCoordinate::new(9, 9)));
        assert_eq!(engine.cursor(), HexCoordinate::new(0, 1));
        assert_eq!(engine.info_text(), "Terrain tile of type Clay");
    }

    #[test]
    fn load_rejects_tiles_outside_the_grid() {
        let mut engine = EditorEngine::default();
        engine
            .apply(EditorCommand::Place(HexCoordinate::new(2, 2)))
            .unwrap();

        let loaded: MapState = [
            Tile::new(HexCoordinate::new(0, 0), TerrainType::Clay),
            Tile::new(HexCoordinate::new(25, 3), TerrainType::Ore),
        ]
        .into_iter()
        .collect();
        let err = engine.apply(EditorCommand::Load(loaded)).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedRecord);
        assert!(err.to_string().contains("(25, 3)"), "{err}");

        assert_eq!(engine.map().len(), 1);
        assert!(engine.map().contains(HexCoordinate::new(2, 2)));
    }

    #[test]
    fn labelled_tiles_show_their_label() {
        let mut engine = EditorEngine::default();
        let loaded: MapState = [Tile::new(HexCoordinate::ORIGIN, TerrainType::Ore).with_label("mine")]
            .into_iter()
            .collect();
        engine.apply(EditorCommand::Load(loaded)).unwrap();
        assert_eq!(engine.info_text(), "Terrain tile of type Ore (mine)");
    }
}
