use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hexmap_core::TerrainType;
use hexmap_runtime::{
    EditorSession, EventBus, InMemoryMapRepository, RuntimeConfig, RuntimeError, TextureError,
    TextureProvider, resolve_textures,
};

/// Answers instantly except for one terrain, which never arrives in time.
struct StalledProvider {
    stalled: TerrainType,
}

#[async_trait]
impl TextureProvider for StalledProvider {
    type Texture = &'static str;

    async fn load(&self, terrain: TerrainType) -> Result<&'static str, TextureError> {
        if terrain == self.stalled {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        Ok("sprite")
    }
}

struct BrokenProvider;

#[async_trait]
impl TextureProvider for BrokenProvider {
    type Texture = ();

    async fn load(&self, terrain: TerrainType) -> Result<(), TextureError> {
        Err(TextureError::Load {
            terrain,
            reason: "corrupt image".into(),
        })
    }
}

#[tokio::test]
async fn slow_texture_times_out_instead_of_hanging() {
    let provider = Arc::new(StalledProvider {
        stalled: TerrainType::Clay,
    });
    let err = resolve_textures(provider, Duration::from_millis(50))
        .await
        .unwrap_err();

    match err {
        TextureError::Timeout { terrain, timeout } => {
            assert_eq!(terrain, TerrainType::Clay);
            assert_eq!(timeout, Duration::from_millis(50));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn session_cannot_start_without_textures() {
    let mut config = RuntimeConfig::default();
    config.texture_timeout = Duration::from_millis(50);

    let result = EditorSession::start(
        &config,
        Arc::new(BrokenProvider),
        EventBus::new(),
        Arc::new(InMemoryMapRepository::new()),
    )
    .await;

    assert!(matches!(
        result,
        Err(RuntimeError::Texture(TextureError::Load { .. }))
    ));
}

#[tokio::test]
async fn providers_can_be_shared_as_trait_objects() {
    let provider: Arc<dyn TextureProvider<Texture = &'static str>> = Arc::new(StalledProvider {
        stalled: TerrainType::Water,
    });
    let err = resolve_textures(provider, Duration::from_millis(20))
        .await
        .unwrap_err();
    assert!(matches!(err, TextureError::Timeout { .. }));
}
