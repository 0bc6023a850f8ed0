use tracing::error;

use crate::ui::tui::Tui;

/// Gives the terminal back before the previously installed hook reports the panic.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = Tui::restore();
        error!("{panic_info}");
        hook(panic_info);
    }));
}
