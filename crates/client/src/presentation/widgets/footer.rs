//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let text = match &app_state.mode {
        AppMode::Normal => Line::from(vec![
            Span::raw("[hjkl/Arrows] Move | "),
            Span::raw("[Space/Enter/Click] Place | "),
            Span::raw("[1-7/Tab] Terrain | "),
            Span::raw("[f] Fog | "),
            Span::raw("[s] Save | "),
            Span::raw("[o] Load | "),
            Span::raw("[q] Quit"),
        ]),
        AppMode::Prompt(_) => Line::from(vec![
            Span::raw("[Enter] Confirm | "),
            Span::raw("[Backspace] Delete | "),
            Span::raw("[ESC] Cancel"),
        ]),
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
