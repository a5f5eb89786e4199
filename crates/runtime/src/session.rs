//! Editor session: the engine plus its host collaborators.

use std::sync::Arc;

use hexmap_core::persist;
use hexmap_core::{CommandOutcome, EditorCommand, EditorEngine, MapConfig, MapState};
use tracing::{debug, info, trace, warn};

use crate::config::RuntimeConfig;
use crate::dispatch::{Flow, HandlerRegistry, InputEvent, InputKind};
use crate::error::{Result, RuntimeError};
use crate::events::{EventBus, MapEvent, SessionEvent, ViewEvent};
use crate::repository::MapRepository;
use crate::textures::{TextureAtlas, TextureProvider, resolve_textures};

/// A running editor.
///
/// Holds a fully resolved [`TextureAtlas`]; there is no way to obtain a
/// session, and therefore to edit or draw, before every terrain texture
/// has resolved. Every state change is announced on the [`EventBus`].
pub struct EditorSession<T> {
    engine: EditorEngine,
    textures: TextureAtlas<T>,
    bus: EventBus,
    repository: Arc<dyn MapRepository>,
}

impl<T> EditorSession<T> {
    pub fn new(
        config: MapConfig,
        textures: TextureAtlas<T>,
        bus: EventBus,
        repository: Arc<dyn MapRepository>,
    ) -> Self {
        Self {
            engine: EditorEngine::new(config),
            textures,
            bus,
            repository,
        }
    }

    /// Resolves textures from `provider` and starts a session.
    ///
    /// Fails if any terrain texture is missing or exceeds the configured
    /// timeout.
    pub async fn start<P>(
        config: &RuntimeConfig,
        provider: Arc<P>,
        bus: EventBus,
        repository: Arc<dyn MapRepository>,
    ) -> Result<Self>
    where
        P: TextureProvider<Texture = T> + ?Sized + 'static,
    {
        let textures = resolve_textures(provider, config.texture_timeout).await?;
        info!("Editor session started");
        Ok(Self::new(config.map.clone(), textures, bus, repository))
    }

    /// Applies a command and publishes what changed.
    pub fn apply(&mut self, command: EditorCommand) -> Result<CommandOutcome> {
        let outcome = self.engine.apply(command)?;
        self.publish_outcome(&outcome, None);
        Ok(outcome)
    }

    /// Serializes the map and stores it under `name`. Returns the number of
    /// tiles written.
    pub fn save(&mut self, name: &str) -> Result<usize> {
        let tiles = self.engine.map().len();
        let stored = persist::to_json(self.engine.map())
            .map_err(RuntimeError::from)
            .and_then(|contents| Ok(self.repository.save(name, &contents)?));

        if let Err(err) = stored {
            warn!(map = name, error = %err, "save failed");
            self.bus.publish(SessionEvent::SaveFailed {
                name: name.to_string(),
                error: err.to_string(),
            });
            return Err(err);
        }

        info!(map = name, tiles, "map saved");
        self.bus.publish(SessionEvent::Saved {
            name: name.to_string(),
            tiles,
        });
        Ok(tiles)
    }

    /// Replaces the map with the one stored under `name`.
    ///
    /// On any failure the current map is left untouched.
    pub fn load(&mut self, name: &str) -> Result<usize> {
        match self.read_map(name) {
            Ok(map) => {
                let outcome = self.engine.apply(EditorCommand::Load(map))?;
                self.publish_outcome(&outcome, Some(name));
                info!(map = name, tiles = self.engine.map().len(), "map loaded");
                Ok(self.engine.map().len())
            }
            Err(err) => {
                warn!(map = name, error = %err, "load rejected");
                self.bus.publish(SessionEvent::LoadFailed {
                    name: name.to_string(),
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Names of the maps the repository holds, sorted.
    pub fn saved_maps(&self) -> Result<Vec<String>> {
        Ok(self.repository.list()?)
    }

    /// Whether saving under `name` would replace an existing map.
    pub fn has_saved(&self, name: &str) -> bool {
        self.repository.exists(name)
    }

    fn read_map(&self, name: &str) -> Result<MapState> {
        let text = self.repository.load(name)?;
        let map = persist::from_json_within(&text, self.engine.bounds())?;
        Ok(map)
    }

    fn publish_outcome(&self, outcome: &CommandOutcome, loaded_name: Option<&str>) {
        match outcome {
            CommandOutcome::Tile(change) => {
                debug!(tile = %change.tile().coordinate, added = change.is_added(), "tile toggled");
                self.bus.publish(MapEvent::TileChanged(change.clone()));
            }
            CommandOutcome::Cursor {
                position,
                refreshed,
            } => {
                if *refreshed {
                    self.bus.publish(ViewEvent::CursorMoved {
                        position: *position,
                    });
                    self.publish_visibility();
                }
            }
            CommandOutcome::TerrainSelected(terrain) => {
                self.bus.publish(MapEvent::TerrainSelected(*terrain));
            }
            CommandOutcome::Fog { enabled, refreshed } => {
                self.bus.publish(ViewEvent::FogToggled { enabled: *enabled });
                if *refreshed {
                    self.publish_visibility();
                }
            }
            CommandOutcome::Loaded(tiles) => {
                self.bus.publish(MapEvent::Loaded {
                    name: loaded_name.map(str::to_string),
                    tiles: *tiles,
                });
            }
            CommandOutcome::Ignored => trace!("command ignored"),
        }
    }

    fn publish_visibility(&self) {
        let fog = self.engine.fog();
        self.bus.publish(ViewEvent::VisibilityRecomputed {
            generation: fog.generation(),
            hidden: fog.hidden().count(),
        });
    }

    pub fn engine(&self) -> &EditorEngine {
        &self.engine
    }

    pub fn textures(&self) -> &TextureAtlas<T> {
        &self.textures
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}

impl<T> EditorSession<T>
where
    T: Send + Sync + 'static,
{
    /// Registry wiring every input kind to the matching session operation.
    pub fn default_handlers() -> HandlerRegistry<Self> {
        let mut registry = HandlerRegistry::new();

        registry.register(InputKind::Move, "editor.move", 0, |session: &mut Self, event| {
            if let InputEvent::Move(direction) = event {
                session.apply(EditorCommand::Move(*direction))?;
            }
            Ok(Flow::Continue)
        });

        registry.register(InputKind::Click, "editor.click", 0, |session: &mut Self, event| {
            if let InputEvent::Click { x, y } = event {
                session.apply(EditorCommand::PlaceAtPixel { x: *x, y: *y })?;
            }
            Ok(Flow::Continue)
        });

        registry.register(
            InputKind::PlaceAtCursor,
            "editor.place",
            0,
            |session: &mut Self, _| {
                let cursor = session.engine.cursor();
                session.apply(EditorCommand::Place(cursor))?;
                Ok(Flow::Continue)
            },
        );

        registry.register(
            InputKind::SelectTerrain,
            "editor.select_terrain",
            0,
            |session: &mut Self, event| {
                if let InputEvent::SelectTerrain(terrain) = event {
                    session.apply(EditorCommand::SelectTerrain(*terrain))?;
                }
                Ok(Flow::Continue)
            },
        );

        registry.register(InputKind::SetFog, "editor.fog", 0, |session: &mut Self, event| {
            if let InputEvent::SetFog(enabled) = event {
                session.apply(EditorCommand::SetFog(*enabled))?;
            }
            Ok(Flow::Continue)
        });

        registry.register(InputKind::Save, "editor.save", 0, |session: &mut Self, event| {
            if let InputEvent::Save { name } = event {
                session.save(name)?;
            }
            Ok(Flow::Continue)
        });

        registry.register(InputKind::Load, "editor.load", 0, |session: &mut Self, event| {
            if let InputEvent::Load { name } = event {
                session.load(name)?;
            }
            Ok(Flow::Continue)
        });

        registry
    }
}
