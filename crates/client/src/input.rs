//! Input processing for the terminal client.
//!
//! This module owns the keyboard and mouse mapping so the rest of the
//! application deals only in editor input events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hexmap_core::{Direction, TerrainType};
use hexmap_runtime::InputEvent;

use crate::presentation::viewport::MapViewport;
use crate::state::{AppMode, PromptKind};

/// High-level outcome of processing a terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Hand the event to the session's handler registry.
    Dispatch(InputEvent),
    /// Select the next (`1`) or previous (`-1`) terrain.
    CycleTerrain(i8),
    ToggleFog,
    OpenPrompt(PromptKind),
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
    /// No meaningful command was produced.
    None,
}

/// Translates crossterm events into [`KeyAction`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        match mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Prompt(_) => self.handle_prompt_key(key),
        }
    }

    fn handle_normal_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => movement(Direction::Up),
            KeyCode::Down => movement(Direction::Down),
            KeyCode::Left => movement(Direction::Left),
            KeyCode::Right => movement(Direction::Right),
            KeyCode::Enter => KeyAction::Dispatch(InputEvent::PlaceAtCursor),
            KeyCode::Tab => KeyAction::CycleTerrain(1),
            KeyCode::BackTab => KeyAction::CycleTerrain(-1),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        if let Some(terrain) = raw.to_digit(10).and_then(terrain_for_digit) {
            return KeyAction::Dispatch(InputEvent::SelectTerrain(terrain));
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'k' => movement(Direction::Up),
            'j' => movement(Direction::Down),
            'h' => movement(Direction::Left),
            'l' => movement(Direction::Right),
            ' ' => KeyAction::Dispatch(InputEvent::PlaceAtCursor),
            ']' => KeyAction::CycleTerrain(1),
            '[' => KeyAction::CycleTerrain(-1),
            'f' => KeyAction::ToggleFog,
            's' => KeyAction::OpenPrompt(PromptKind::Save),
            'o' => KeyAction::OpenPrompt(PromptKind::Load),
            _ => KeyAction::None,
        }
    }

    fn handle_prompt_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::PromptSubmit,
            KeyCode::Esc => KeyAction::PromptCancel,
            KeyCode::Backspace => KeyAction::PromptBackspace,
            KeyCode::Char(ch) => KeyAction::PromptInput(ch),
            _ => KeyAction::None,
        }
    }

    /// Converts a left click inside the map into a canvas-pixel click.
    pub fn handle_mouse(&self, mouse: MouseEvent, mode: &AppMode, viewport: &MapViewport) -> KeyAction {
        if *mode != AppMode::Normal {
            return KeyAction::None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => viewport
                .cell_to_pixel(mouse.column, mouse.row)
                .map(|(x, y)| KeyAction::Dispatch(InputEvent::Click { x, y }))
                .unwrap_or(KeyAction::None),
            _ => KeyAction::None,
        }
    }
}

fn movement(direction: Direction) -> KeyAction {
    KeyAction::Dispatch(InputEvent::Move(direction))
}

/// Digits `1..=7` pick terrains in declaration order.
fn terrain_for_digit(digit: u32) -> Option<TerrainType> {
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;
    TerrainType::all().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PromptState;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), &mode),
            KeyAction::Dispatch(InputEvent::Move(Direction::Up))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('L')), &mode),
            KeyAction::Dispatch(InputEvent::Move(Direction::Right))
        );
    }

    #[test]
    fn digits_select_terrain() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), &mode),
            KeyAction::Dispatch(InputEvent::SelectTerrain(TerrainType::Water))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('7')), &mode),
            KeyAction::Dispatch(InputEvent::SelectTerrain(TerrainType::Wheat))
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('0')), &mode), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('8')), &mode), KeyAction::None);
    }

    #[test]
    fn prompt_mode_captures_letters() {
        let handler = InputHandler::new();
        let mode = AppMode::Prompt(PromptState::new(PromptKind::Save));
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), &mode),
            KeyAction::PromptInput('q')
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &mode),
            KeyAction::PromptSubmit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &mode),
            KeyAction::PromptCancel
        );
    }

    #[test]
    fn save_and_load_open_prompts() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('s')), &mode),
            KeyAction::OpenPrompt(PromptKind::Save)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('o')), &mode),
            KeyAction::OpenPrompt(PromptKind::Load)
        );
    }

    #[test]
    fn clicks_outside_the_map_are_ignored() {
        let handler = InputHandler::new();
        let viewport = MapViewport::new(Rect::new(10, 5, 40, 20), 100.0, 50.0);
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        };

        assert_eq!(handler.handle_mouse(click(0, 0), &AppMode::Normal, &viewport), KeyAction::None);
        assert!(matches!(
            handler.handle_mouse(click(10, 5), &AppMode::Normal, &viewport),
            KeyAction::Dispatch(InputEvent::Click { .. })
        ));
    }
}
