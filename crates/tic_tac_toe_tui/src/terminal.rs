//! Raw-mode terminal setup and teardown.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, warn};

/// The terminal type driven by the game loop.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs a restore action when dropped, unless disarmed first.
pub struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Keeps the current state; the restore action never runs.
    pub fn disarm(mut self) {
        self.restore = None;
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Enables raw mode and enters the alternate screen.
///
/// If any step after enabling raw mode fails, the terminal is put back the
/// way it was before the error is returned.
///
/// # Errors
///
/// Returns the I/O error from the failing setup step.
pub fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(|| {
        warn!("Terminal setup failed, restoring");
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    });

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    guard.disarm();
    debug!("Terminal ready");
    Ok(terminal)
}

/// Leaves raw mode and the alternate screen, and shows the cursor.
///
/// # Errors
///
/// Returns the first I/O error hit while restoring.
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fallible_setup(restored: &Cell<u32>, fail: bool) -> io::Result<()> {
        let guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        if fail {
            return Err(io::Error::other("no tty"));
        }
        guard.disarm();
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_error() {
        let restored = Cell::new(0);
        assert!(fallible_setup(&restored, true).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_disarmed_guard_keeps_state() {
        let restored = Cell::new(0);
        assert!(fallible_setup(&restored, false).is_ok());
        assert_eq!(restored.get(), 0);
    }
}
