//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and enable mouse capture for clicks.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode. Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Best-effort restore on stdout, used from the panic hook.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
