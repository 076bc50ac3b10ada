pub mod banner;
pub mod line;
pub mod tui;

pub use line::LineConsole;
pub use tui::TuiConsole;

/// Prints the welcome banner (unless disabled) and applies the prompt theme.
/// Call once at startup, before the first prompt.
pub fn init_ui(show_banner: bool) {
    if show_banner {
        banner::print_welcome();
    }
    tui::apply_theme();
}
