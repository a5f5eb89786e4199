//! Terminal ownership for the editor screen.
//!
//! The editor takes over the terminal with raw mode, the alternate screen and
//! mouse capture (map clicks place tiles). [`restore`] undoes all of it and is
//! safe to call any number of times; it runs on normal exit, from
//! [`TerminalGuard`] when the app unwinds with an error, and from a panic hook
//! so the panic message lands on the user's shell rather than the map canvas.
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Set while raw mode is on.
static ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// Switches the terminal into editor mode and returns a cleared drawing
/// surface.
///
/// A failure partway through rolls back whatever was already switched on.
pub fn init() -> Result<Tui> {
    install_panic_hook();

    enable_raw_mode().context("failed to enable raw mode")?;
    ACTIVE.store(true, Ordering::SeqCst);

    match enter_screen() {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            if let Err(rollback) = restore() {
                tracing::warn!(error = %rollback, "terminal rollback failed");
            }
            Err(err)
        }
    }
}

fn enter_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
        .context("failed to enter the alternate screen")?;

    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
    terminal.clear().context("failed to clear terminal")?;
    Ok(terminal)
}

/// Leaves editor mode. A no-op when the terminal is not in editor mode.
///
/// Raw mode is switched off even if leaving the alternate screen fails.
pub fn restore() -> Result<()> {
    if !ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }

    let left = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, cursor::Show);
    disable_raw_mode().context("failed to disable raw mode")?;
    left.context("failed to leave the alternate screen")?;
    Ok(())
}

/// Chains a hook that restores the terminal before the previous hook prints
/// the panic. Installed once per process.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            previous(info);
        }));
    });
}

/// Restores the terminal when dropped.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_outside_editor_mode_leaves_the_terminal_alone() {
        assert!(!ACTIVE.load(Ordering::SeqCst));
        restore().unwrap();
        restore().unwrap();
        drop(TerminalGuard);
        assert!(!ACTIVE.load(Ordering::SeqCst));
    }
}
