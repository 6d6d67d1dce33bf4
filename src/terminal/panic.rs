//! Panic hook that restores the terminal before the message is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Call this early in `main()`, after `color_eyre::install()` and before
/// creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
