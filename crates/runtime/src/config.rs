//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use hexmap_core::MapConfig;

/// Configuration for an editor session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub map: MapConfig,
    /// Directory that saved maps are written to and loaded from.
    pub save_dir: PathBuf,
    /// Append `.json` to save names that lack it.
    pub append_json_extension: bool,
    /// Upper bound on resolving a single terrain texture.
    pub texture_timeout: Duration,
    /// Per-topic capacity of the event bus.
    pub event_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TEXTURE_TIMEOUT_MS: u64 = 5_000;
    pub const DEFAULT_EVENT_CAPACITY: usize = 100;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HEXMAP_SAVE_DIR` - Directory for saved maps (default: platform data dir)
    /// - `HEXMAP_APPEND_JSON_EXTENSION` - Append `.json` to save names (default: false)
    /// - `HEXMAP_TEXTURE_TIMEOUT_MS` - Per-texture resolution timeout (default: 5000)
    /// - `HEXMAP_EVENT_CAPACITY` - Event bus capacity per topic (default: 100)
    /// - `HEXMAP_FOG_RADIUS` - Visible hex distance under fog (default: 2)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("HEXMAP_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Some(append) = read_env::<bool>("HEXMAP_APPEND_JSON_EXTENSION") {
            config.append_json_extension = append;
        }

        if let Some(ms) = read_env::<u64>("HEXMAP_TEXTURE_TIMEOUT_MS") {
            config.texture_timeout = Duration::from_millis(ms.max(1));
        }

        if let Some(capacity) = read_env::<usize>("HEXMAP_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        if let Some(radius) = read_env::<u32>("HEXMAP_FOG_RADIUS") {
            config.map.fog_radius = radius;
        }

        config
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            save_dir: default_save_dir(),
            append_json_extension: false,
            texture_timeout: Duration::from_millis(Self::DEFAULT_TEXTURE_TIMEOUT_MS),
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Platform data directory for saved maps.
///
/// - Linux: `~/.local/share/hexmap/maps`
/// - macOS: `~/Library/Application Support/hexmap/maps`
/// - Windows: `%APPDATA%\hexmap\maps`
/// - Fallback: `./maps`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hexmap")
        .map(|dirs| dirs.data_dir().join("maps"))
        .unwrap_or_else(|| PathBuf::from("./maps"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
