//! Modal prompt for entering a map name.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::PromptState;

pub fn render(frame: &mut Frame, area: Rect, prompt: &PromptState, theme: &RatatuiTheme) {
    let mut lines = vec![Line::from(vec![
        Span::raw(prompt.buffer.as_str()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ])];
    let dim = Style::default().add_modifier(Modifier::DIM);
    lines.extend(prompt.matching().map(|name| Line::styled(format!("  {name}"), dim)));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", prompt.kind.title()))
            .title_style(theme.title()),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
