//! Map widget drawing the hex grid on a canvas.
//!
//! Every cell gets its outline coloured by visibility; placed tiles get the
//! terrain glyph at their centre. Hidden cells show a shade instead of their
//! content.

use hexmap_core::{CellView, HexLayout, Visibility};
use hexmap_runtime::{EditorSession, TextureAtlas};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Context, Line as CanvasLine},
    },
};

use crate::presentation::{
    theme::{GlyphTexture, RatatuiTheme},
    viewport::MapViewport,
};

const HIDDEN_GLYPH: &str = "░";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &EditorSession<GlyphTexture>,
    theme: &RatatuiTheme,
) -> MapViewport {
    let engine = session.engine();
    let bounds = engine.bounds();
    let layout = *engine.layout();
    let extent = layout.canvas_size(bounds.columns, bounds.rows);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Map ")
        .title_style(theme.title());
    let viewport = MapViewport::new(block.inner(area), extent.x, extent.y);

    let cells: Vec<CellView> = engine.cells().collect();
    let textures = session.textures();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, extent.x])
        .y_bounds([0.0, extent.y])
        .paint(|ctx| {
            for cell in &cells {
                draw_outline(ctx, &layout, &viewport, cell, theme);
            }
            ctx.layer();
            for cell in &cells {
                draw_content(ctx, &layout, &viewport, cell, textures, theme);
            }
        });

    frame.render_widget(canvas, area);
    viewport
}

fn draw_outline(
    ctx: &mut Context,
    layout: &HexLayout,
    viewport: &MapViewport,
    cell: &CellView,
    theme: &RatatuiTheme,
) {
    let color = theme.outline(cell.visibility);
    let corners = layout.corners(cell.coordinate);
    for (index, from) in corners.iter().enumerate() {
        let to = corners[(index + 1) % corners.len()];
        ctx.draw(&CanvasLine::new(
            from.x,
            viewport.canvas_y(from.y),
            to.x,
            viewport.canvas_y(to.y),
            color,
        ));
    }
}

fn draw_content(
    ctx: &mut Context,
    layout: &HexLayout,
    viewport: &MapViewport,
    cell: &CellView,
    textures: &TextureAtlas<GlyphTexture>,
    theme: &RatatuiTheme,
) {
    let center = layout.center(cell.coordinate);
    let (glyph, style) = match (cell.visibility, cell.terrain) {
        (Visibility::Hidden, _) => (HIDDEN_GLYPH, theme.emphasize(Style::default(), Visibility::Hidden)),
        (visibility, Some(terrain)) => {
            let texture = textures.get(terrain);
            (texture.glyph, theme.emphasize(texture.style, visibility))
        }
        (Visibility::Cursor, None) => ("+", theme.emphasize(Style::default(), Visibility::Cursor)),
        (Visibility::Visible, None) => return,
    };
    ctx.print(center.x, viewport.canvas_y(center.y), Span::styled(glyph, style));
}
