/*
[INPUT]:  Crossterm stdout, terminal raw mode, ratatui backend
[OUTPUT]: TerminalGuard managing alternate screen lifecycle
[POS]:    TUI terminal lifecycle guard
[UPDATE]: When changing terminal setup or teardown
*/

use std::io;
use std::panic;

use anyhow::Result;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

pub(super) struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    pub(super) fn new() -> Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    pub(super) fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    if let Err(err) = stdout.execute(LeaveAlternateScreen) {
        debug!(error = %err, "failed to leave alternate screen");
    }
    if let Err(err) = terminal::disable_raw_mode() {
        debug!(error = %err, "failed to disable raw mode");
    }
}

/// Leave the alternate screen before the panic message is printed
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.show_cursor() {
            debug!(error = %err, "failed to show cursor");
        }
        restore_terminal();
    }
}
