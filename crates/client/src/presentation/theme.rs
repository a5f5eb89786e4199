//! Ratatui styling for the editor.
//!
//! Terrain "textures" in the terminal are a glyph plus a style. The theme
//! serves them through [`TextureProvider`] so the session resolves them the
//! same way it would resolve image assets in a graphical host.

use async_trait::async_trait;
use hexmap_core::{TerrainType, Visibility};
use hexmap_runtime::{TextureError, TextureProvider};
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Glyph and colour drawn in the middle of a placed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphTexture {
    pub glyph: &'static str,
    pub style: Style,
}

impl GlyphTexture {
    const fn new(glyph: &'static str, color: Color) -> Self {
        Self {
            glyph,
            style: Style::new().fg(color),
        }
    }
}

/// Consistent colour scheme for the terminal UI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn terrain(&self, terrain: TerrainType) -> GlyphTexture {
        match terrain {
            TerrainType::Water => GlyphTexture::new("~", Color::Blue),
            TerrainType::Desert => GlyphTexture::new(":", Color::Yellow),
            TerrainType::Wood => GlyphTexture::new("♣", Color::Green),
            TerrainType::Clay => GlyphTexture::new("▒", Color::LightRed),
            TerrainType::Sheep => GlyphTexture::new("\"", Color::LightGreen),
            TerrainType::Ore => GlyphTexture::new("▲", Color::Gray),
            TerrainType::Wheat => GlyphTexture::new("≡", Color::LightYellow),
        }
    }

    /// Outline colour of a hex cell.
    pub fn outline(&self, visibility: Visibility) -> Color {
        match visibility {
            Visibility::Cursor => Color::Magenta,
            Visibility::Visible => Color::Gray,
            Visibility::Hidden => Color::DarkGray,
        }
    }

    /// Style applied on top of a tile glyph.
    pub fn emphasize(&self, style: Style, visibility: Visibility) -> Style {
        match visibility {
            Visibility::Cursor => style.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            Visibility::Visible => style,
            Visibility::Hidden => Style::new().fg(Color::Black).bg(Color::DarkGray),
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}

#[async_trait]
impl TextureProvider for RatatuiTheme {
    type Texture = GlyphTexture;

    async fn load(&self, terrain: TerrainType) -> Result<GlyphTexture, TextureError> {
        Ok(self.terrain(terrain))
    }
}
