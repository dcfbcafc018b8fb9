//! Panic hook that restores the terminal before printing the report.
//!
//! Without this, a panic inside the alternate screen leaves the shell in
//! raw mode with the report invisible.

use super::setup::emergency_restore;

/// Install a panic hook that restores the terminal, then delegates to the
/// previously installed hook (color-eyre's, when set up first).
pub fn setup_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
