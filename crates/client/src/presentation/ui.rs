//! Main render entry point composing every widget.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use hexmap_runtime::EditorSession;

use crate::message::MessageLog;
use crate::presentation::{
    terminal::Tui,
    theme::{GlyphTexture, RatatuiTheme},
    viewport::MapViewport,
    widgets,
};
use crate::state::{AppMode, AppState};

/// Width of the info panel beside the map, in terminal cells.
const INFO_PANEL_WIDTH: u16 = 34;

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub session: &'a EditorSession<GlyphTexture>,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Draws the editor and returns the viewport the map was drawn into, so
/// mouse clicks can be mapped back to canvas pixels.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<MapViewport> {
    let theme = RatatuiTheme;
    let mut viewport = MapViewport::default();

    terminal.draw(|frame| {
        viewport = render_editor(frame, ctx, &theme);

        if let AppMode::Prompt(prompt) = &ctx.app_state.mode {
            let area = centered_rect(50, 20, frame.area());
            widgets::prompt::render(frame, area, prompt, &theme);
        }
    })?;

    Ok(viewport)
}

fn render_editor(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) -> MapViewport {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                           // Map + info
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(3),                        // Footer
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(rows[0]);

    let viewport = widgets::map::render(frame, columns[0], ctx.session, theme);
    widgets::info::render(frame, columns[1], ctx.session.engine(), ctx.session.textures(), theme);

    let recent: Vec<_> = ctx
        .messages
        .recent(ctx.message_panel_height.saturating_sub(2) as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, rows[1], &recent, theme);

    widgets::footer::render(frame, rows[2], ctx.app_state);

    viewport
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Min(3),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
