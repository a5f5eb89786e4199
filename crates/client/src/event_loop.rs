//! Event loop orchestrating bus events, user input and rendering.
//!
//! Input is polled on a frame tick and routed through the session's handler
//! registry; everything the session changes comes back as bus events, which
//! become messages and mark the screen dirty.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::{
    sync::broadcast::error::RecvError,
    time::{self, Duration},
};

use hexmap_core::TileChange;
use hexmap_runtime::{
    EditorSession, Event, HandlerRegistry, InputEvent, MapEvent, SessionEvent, Topic, ViewEvent,
};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction},
    message::MessageLog,
    presentation::{GlyphTexture, MapViewport, RenderContext, terminal::Tui, ui},
    state::{AppState, PromptKind, PromptState},
};

const FRAME_INTERVAL_MS: u64 = 16;

type Session = EditorSession<GlyphTexture>;

pub(crate) struct EventLoop {
    session: Session,
    registry: HandlerRegistry<Session>,
    input: InputHandler,
    app_state: AppState,
    messages: MessageLog,
    viewport: MapViewport,
    message_panel_height: u16,
    dirty: bool,
}

impl EventLoop {
    pub(crate) fn new(session: Session, messages: MessageLog, config: &CliConfig) -> Self {
        Self {
            session,
            registry: Session::default_handlers(),
            input: InputHandler::new(),
            app_state: AppState::new(),
            messages,
            viewport: MapViewport::default(),
            message_panel_height: config.ui.message_panel_height,
            dirty: true,
        }
    }

    pub(crate) async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let bus = self.session.bus().clone();
        let mut map_rx = bus.subscribe(Topic::Map);
        let mut view_rx = bus.subscribe(Topic::View);
        let mut session_rx = bus.subscribe(Topic::Session);

        let mut frame = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frame.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            if self.dirty {
                self.render(terminal)?;
            }

            let quit = tokio::select! {
                result = map_rx.recv() => self.handle_bus_event(result),
                result = view_rx.recv() => self.handle_bus_event(result),
                result = session_rx.recv() => self.handle_bus_event(result),
                _ = frame.tick() => self.handle_input_tick()?,
            };

            if quit {
                tracing::info!("Quit requested");
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            session: &self.session,
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.message_panel_height,
        };
        self.viewport = ui::render(terminal, &ctx)?;
        self.dirty = false;
        Ok(())
    }

    /// Turns a bus event into a message. Returns `true` when the bus is gone.
    fn handle_bus_event(&mut self, result: Result<Event, RecvError>) -> bool {
        match result {
            Ok(event) => {
                self.record(&event);
                self.dirty = true;
                false
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                true
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                self.dirty = true;
                false
            }
        }
    }

    fn record(&mut self, event: &Event) {
        match event {
            Event::Map(MapEvent::TileChanged(TileChange::Added(tile))) => {
                self.messages
                    .info(format!("Placed {} at {}", tile.terrain, tile.coordinate));
            }
            Event::Map(MapEvent::TileChanged(TileChange::Removed(tile))) => {
                self.messages
                    .info(format!("Removed {} at {}", tile.terrain, tile.coordinate));
            }
            Event::Map(MapEvent::Loaded { name, tiles }) => {
                let name = name.as_deref().unwrap_or("map");
                self.messages.info(format!("Loaded '{name}' ({tiles} tiles)"));
            }
            Event::Map(MapEvent::TerrainSelected(terrain)) => {
                self.messages.info(format!("Placing {terrain}"));
            }
            Event::View(ViewEvent::FogToggled { enabled }) => {
                let state = if *enabled { "on" } else { "off" };
                self.messages.info(format!("Fog of war {state}"));
            }
            Event::View(ViewEvent::CursorMoved { .. }) => {}
            Event::View(ViewEvent::VisibilityRecomputed { generation, hidden }) => {
                tracing::trace!(generation, hidden, "visibility recomputed");
            }
            Event::Session(SessionEvent::Saved { name, tiles }) => {
                self.messages.info(format!("Saved '{name}' ({tiles} tiles)"));
            }
            Event::Session(SessionEvent::SaveFailed { name, error }) => {
                self.messages.error(format!("Could not save '{name}': {error}"));
            }
            Event::Session(SessionEvent::LoadFailed { name, error }) => {
                self.messages.error(format!("Could not load '{name}': {error}"));
            }
        }
    }

    /// Polls the terminal once. Returns `true` when the user quits.
    fn handle_input_tick(&mut self) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        let action = match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => self.key_action(key),
            TermEvent::Mouse(mouse) => {
                self.input
                    .handle_mouse(mouse, &self.app_state.mode, &self.viewport)
            }
            TermEvent::Resize(_, _) => {
                self.dirty = true;
                KeyAction::None
            }
            _ => KeyAction::None,
        };

        self.apply_action(action)
    }

    fn key_action(&self, key: KeyEvent) -> KeyAction {
        self.input.handle_key(key, &self.app_state.mode)
    }

    fn apply_action(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Dispatch(event) => self.dispatch(event),
            KeyAction::CycleTerrain(step) => {
                let current = self.session.engine().selected_terrain();
                let terrain = if step < 0 {
                    current.prev()
                } else {
                    current.next()
                };
                self.dispatch(InputEvent::SelectTerrain(terrain));
            }
            KeyAction::ToggleFog => {
                let enabled = !self.session.engine().fog_enabled();
                self.dispatch(InputEvent::SetFog(enabled));
            }
            KeyAction::OpenPrompt(kind) => self.open_prompt(kind),
            KeyAction::PromptInput(ch) => {
                if let Some(prompt) = self.app_state.prompt_mut() {
                    prompt.push(ch);
                    self.dirty = true;
                }
            }
            KeyAction::PromptBackspace => {
                if let Some(prompt) = self.app_state.prompt_mut() {
                    prompt.pop();
                    self.dirty = true;
                }
            }
            KeyAction::PromptCancel => {
                self.app_state.close_prompt();
                self.dirty = true;
            }
            KeyAction::PromptSubmit => self.submit_prompt(),
            KeyAction::None => {}
        }
        Ok(false)
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        let mut prompt = PromptState::new(kind);
        if kind == PromptKind::Load {
            match self.session.saved_maps() {
                Ok(names) if names.is_empty() => self.messages.warn("No saved maps yet"),
                Ok(names) => prompt = prompt.with_suggestions(names),
                Err(err) => {
                    tracing::warn!(error = %err, "could not list saved maps");
                    self.messages.error(format!("Could not list saved maps: {err}"));
                }
            }
        }
        self.app_state.open_prompt(prompt);
        self.dirty = true;
    }

    fn submit_prompt(&mut self) {
        self.dirty = true;
        let Some(prompt) = self.app_state.close_prompt() else {
            return;
        };

        let name = prompt.buffer.trim().to_string();
        if name.is_empty() {
            self.messages.warn("No map name entered");
            return;
        }

        if prompt.kind == PromptKind::Save && self.session.has_saved(&name) {
            self.messages.warn(format!("Replacing saved map '{name}'"));
        }

        let event = match prompt.kind {
            PromptKind::Save => InputEvent::Save { name },
            PromptKind::Load => InputEvent::Load { name },
        };
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: InputEvent) {
        match self.registry.dispatch(&mut self.session, &event) {
            Ok(handled) => {
                if handled == 0 {
                    tracing::debug!(kind = %event.kind(), "no handler for input");
                }
            }
            Err(err) => {
                tracing::error!(kind = %event.kind(), error = %err, "input dispatch failed");
                self.messages.error(err.to_string());
            }
        }
        self.dirty = true;
    }
}
