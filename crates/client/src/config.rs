//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Name of the log subdirectory; defaults to a timestamp.
    pub session_id: Option<String>,
    /// Root directory for log files; defaults to the platform cache dir.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HEXMAP_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 7)
    /// - `HEXMAP_MESSAGE_CAPACITY` - Messages kept in the log (default: 64)
    /// - `HEXMAP_SESSION_ID` - Log session name (default: `session_<unix time>`)
    /// - `HEXMAP_LOG_DIR` - Log root directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("HEXMAP_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        if let Some(capacity) = read_env::<usize>("HEXMAP_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }

        config.session_id = env::var("HEXMAP_SESSION_ID").ok();
        config.log_dir = env::var("HEXMAP_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    pub message_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 7,
            message_capacity: 64,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
