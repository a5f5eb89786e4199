//! Presentation layer: terminal lifecycle, styling and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod viewport;
pub mod widgets;

pub use theme::{GlyphTexture, RatatuiTheme};
pub use ui::RenderContext;
pub use viewport::MapViewport;
