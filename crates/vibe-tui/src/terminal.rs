//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use tracing::debug;

/// Enter the alternate screen in raw mode, arranging for a panic to
/// leave the shell usable
pub fn init() -> DefaultTerminal {
    install_panic_hook();
    let term = ratatui::init();
    debug!("Terminal initialized");
    term
}

pub fn restore() {
    ratatui::restore();
    debug!("Terminal restored");
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}
