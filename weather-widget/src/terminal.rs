//! Terminal mode setup with teardown on drop

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Runs its restore hook once when dropped, including while a panic unwinds
pub struct TerminalGuard {
    restore: Option<Box<dyn FnOnce()>>,
}

impl TerminalGuard {
    /// Raw mode and the alternate screen, undone when the guard drops
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // armed before the next step so a failure there still leaves raw mode
        let guard = Self::with_restore(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    pub fn with_restore(restore: impl FnOnce() + 'static) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    // may run mid-panic; nothing useful to do with errors here
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
