//! Terrain texture resolution.
//!
//! A host supplies a [`TextureProvider`]; [`resolve_textures`] asks it for
//! every terrain concurrently and either returns a complete
//! [`TextureAtlas`] or fails. Each request is bounded by a timeout so a
//! provider that never answers cannot stall startup.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hexmap_core::TerrainType;
use strum::EnumCount;
use thiserror::Error;
use tokio::task::JoinSet;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("no texture available for {terrain}")]
    Missing { terrain: TerrainType },

    #[error("texture for {terrain} not resolved within {timeout:?}")]
    Timeout {
        terrain: TerrainType,
        timeout: Duration,
    },

    #[error("failed to load texture for {terrain}: {reason}")]
    Load {
        terrain: TerrainType,
        reason: String,
    },

    #[error("texture task failed")]
    Join(#[source] tokio::task::JoinError),
}

/// Source of per-terrain textures.
#[async_trait]
pub trait TextureProvider: Send + Sync {
    type Texture: Clone + Send + Sync + 'static;

    async fn load(&self, terrain: TerrainType) -> Result<Self::Texture, TextureError>;
}

/// One resolved texture per terrain.
///
/// Only constructible with every terrain present, so lookups cannot miss.
#[derive(Clone, Debug)]
pub struct TextureAtlas<T> {
    textures: Vec<T>,
}

impl<T> TextureAtlas<T> {
    /// Builds an atlas, failing with the first terrain that has no entry.
    pub fn from_map(mut textures: HashMap<TerrainType, T>) -> Result<Self, TextureError> {
        let textures = TerrainType::all()
            .map(|terrain| {
                textures
                    .remove(&terrain)
                    .ok_or(TextureError::Missing { terrain })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { textures })
    }

    pub fn get(&self, terrain: TerrainType) -> &T {
        &self.textures[terrain as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TerrainType, &T)> {
        TerrainType::all().zip(self.textures.iter())
    }
}

/// Resolves a texture for every terrain, each bounded by `timeout`.
pub async fn resolve_textures<P>(
    provider: Arc<P>,
    timeout: Duration,
) -> Result<TextureAtlas<P::Texture>, TextureError>
where
    P: TextureProvider + ?Sized + 'static,
{
    let mut tasks = JoinSet::new();
    for terrain in TerrainType::all() {
        let provider = Arc::clone(&provider);
        tasks.spawn(async move {
            let result = match tokio::time::timeout(timeout, provider.load(terrain)).await {
                Ok(result) => result,
                Err(_) => Err(TextureError::Timeout { terrain, timeout }),
            };
            (terrain, result)
        });
    }

    let mut textures = HashMap::with_capacity(TerrainType::COUNT);
    while let Some(joined) = tasks.join_next().await {
        let (terrain, result) = joined.map_err(TextureError::Join)?;
        match result {
            Ok(texture) => {
                tracing::trace!(%terrain, "texture resolved");
                textures.insert(terrain, texture);
            }
            Err(err) => {
                // Dropping the set aborts the requests still in flight.
                tracing::warn!(%terrain, error = %err, "texture resolution failed");
                return Err(err);
            }
        }
    }

    tracing::debug!(count = textures.len(), "all terrain textures resolved");
    TextureAtlas::from_map(textures)
}

/// Provider backed by a fixed table, answering immediately.
#[derive(Clone, Debug)]
pub struct MemoryTextureProvider<T> {
    textures: HashMap<TerrainType, T>,
}

impl<T> MemoryTextureProvider<T> {
    pub fn new(textures: HashMap<TerrainType, T>) -> Self {
        Self { textures }
    }

    /// A provider with an entry for every terrain produced by `make`.
    pub fn from_fn(make: impl Fn(TerrainType) -> T) -> Self {
        Self::new(TerrainType::all().map(|t| (t, make(t))).collect())
    }

    pub fn without(mut self, terrain: TerrainType) -> Self {
        self.textures.remove(&terrain);
        self
    }
}

#[async_trait]
impl<T> TextureProvider for MemoryTextureProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Texture = T;

    async fn load(&self, terrain: TerrainType) -> Result<T, TextureError> {
        self.textures
            .get(&terrain)
            .cloned()
            .ok_or(TextureError::Missing { terrain })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_every_terrain() {
        let provider = Arc::new(MemoryTextureProvider::from_fn(|t| t.to_string()));
        let atlas = resolve_textures(provider, Duration::from_secs(1))
            .await
            .unwrap();

        for terrain in TerrainType::all() {
            assert_eq!(atlas.get(terrain), &terrain.to_string());
        }
        assert_eq!(atlas.iter().count(), TerrainType::COUNT);
    }

    #[tokio::test]
    async fn missing_texture_fails() {
        let provider = Arc::new(MemoryTextureProvider::from_fn(|_| 0u8).without(TerrainType::Sheep));
        let err = resolve_textures(provider, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TextureError::Missing {
                terrain: TerrainType::Sheep
            }
        ));
    }

    #[test]
    fn atlas_requires_every_terrain() {
        let mut textures: HashMap<_, _> = TerrainType::all().map(|t| (t, ())).collect();
        textures.remove(&TerrainType::Water);
        assert!(matches!(
            TextureAtlas::from_map(textures),
            Err(TextureError::Missing {
                terrain: TerrainType::Water
            })
        ));
    }
}
