//! Info panel: cursor readout, placement terrain and fog state.

use hexmap_core::{EditorEngine, TerrainType};
use hexmap_runtime::TextureAtlas;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::{GlyphTexture, RatatuiTheme};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    engine: &EditorEngine,
    textures: &TextureAtlas<GlyphTexture>,
    theme: &RatatuiTheme,
) {
    let cursor = engine.cursor();
    let fog = engine.fog();
    let fog_text = if engine.fog_enabled() {
        format!("on (radius {}, {} hidden)", fog.radius(), fog.hidden().count())
    } else {
        "off".to_string()
    };

    let mut lines = vec![
        Line::from(vec![Span::styled("Cursor  ", theme.title()), Span::raw(cursor.to_string())]),
        Line::from(engine.info_text()),
        Line::from(""),
        Line::from(vec![Span::styled("Fog     ", theme.title()), Span::raw(fog_text)]),
        Line::from(vec![
            Span::styled("Tiles   ", theme.title()),
            Span::raw(engine.map().len().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Terrain", theme.title())),
    ];
    lines.extend(terrain_lines(engine.selected_terrain(), textures));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Info "));
    frame.render_widget(paragraph, area);
}

/// Palette with the selected terrain marked.
fn terrain_lines(
    selected: TerrainType,
    textures: &TextureAtlas<GlyphTexture>,
) -> impl Iterator<Item = Line<'static>> + '_ {
    textures.iter().enumerate().map(move |(index, (terrain, texture))| {
        let marker = if terrain == selected { "> " } else { "  " };
        let label_style = if terrain == selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{marker}{} ", index + 1)),
            Span::styled(texture.glyph, texture.style),
            Span::styled(format!(" {terrain}"), label_style),
        ])
    })
}
