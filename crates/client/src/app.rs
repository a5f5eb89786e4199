//! Glue code tying the editor session and terminal UI together.
use std::sync::Arc;

use anyhow::{Context, Result};

use hexmap_runtime::{EditorSession, EventBus, FileMapRepository, RuntimeConfig};

use crate::config::CliConfig;
use crate::event_loop::EventLoop;
use crate::message::MessageLog;
use crate::presentation::{GlyphTexture, RatatuiTheme, terminal};

pub struct CliApp {
    cli_config: CliConfig,
    session: EditorSession<GlyphTexture>,
}

pub struct CliAppBuilder {
    runtime_config: RuntimeConfig,
    cli_config: CliConfig,
}

impl CliAppBuilder {
    pub fn new(runtime_config: RuntimeConfig, cli_config: CliConfig) -> Self {
        Self {
            runtime_config,
            cli_config,
        }
    }

    /// Opens the save directory, resolves terrain textures and starts the
    /// session. Nothing is drawn until this succeeds.
    pub async fn build(self) -> Result<CliApp> {
        let config = self.runtime_config;

        let repository = FileMapRepository::new(&config.save_dir)
            .with_context(|| format!("failed to open save directory {}", config.save_dir.display()))?
            .with_json_extension(config.append_json_extension);
        let bus = EventBus::with_capacity(config.event_capacity);

        let session = EditorSession::start(&config, Arc::new(RatatuiTheme), bus, Arc::new(repository))
            .await
            .context("failed to start editor session")?;

        Ok(CliApp {
            cli_config: self.cli_config,
            session,
        })
    }
}

impl CliApp {
    pub fn builder(runtime_config: RuntimeConfig, cli_config: CliConfig) -> CliAppBuilder {
        CliAppBuilder::new(runtime_config, cli_config)
    }

    pub fn session(&self) -> &EditorSession<GlyphTexture> {
        &self.session
    }

    pub fn into_session(self) -> EditorSession<GlyphTexture> {
        self.session
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!("Terminal editor starting...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let CliApp {
            cli_config,
            session,
        } = self;

        let mut messages = MessageLog::new(cli_config.ui.message_capacity);
        messages.info("Welcome to the hex map editor. Press s to save, o to load.");

        let event_loop = EventLoop::new(session, messages, &cli_config);
        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("Terminal editor exiting");

        Ok(())
    }
}
