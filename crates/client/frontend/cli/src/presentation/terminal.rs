//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Any failure after raw mode is enabled restores the terminal before the
/// error is returned.
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    or_rollback(execute!(stdout, EnterAlternateScreen), restore_quietly)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_rollback(Terminal::new(backend), restore_quietly)?;
    or_rollback(terminal.hide_cursor(), restore_quietly)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

fn restore_quietly() {
    let _ = restore();
}

/// Runs `rollback` when `result` is an error, then passes the error on.
fn or_rollback<T, E>(result: std::result::Result<T, E>, rollback: impl FnOnce()) -> Result<T>
where
    E: Into<anyhow::Error>,
{
    result.map_err(|err| {
        rollback();
        err.into()
    })
}

/// Restores the terminal when dropped, including on early returns and panics
/// that unwind.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_step_rolls_back_once() {
        let rollbacks = Cell::new(0);

        let result: Result<()> = or_rollback(
            Err(io::Error::other("cursor unavailable")),
            || rollbacks.set(rollbacks.get() + 1),
        );

        assert_eq!(result.unwrap_err().to_string(), "cursor unavailable");
        assert_eq!(rollbacks.get(), 1);
    }

    #[test]
    fn successful_step_keeps_terminal() {
        let rollbacks = Cell::new(0);

        let value = or_rollback(Ok::<_, io::Error>(7), || rollbacks.set(rollbacks.get() + 1));

        assert_eq!(value.unwrap(), 7);
        assert_eq!(rollbacks.get(), 0);
    }
}
