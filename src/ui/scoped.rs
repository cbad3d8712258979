//! Progress line around a blocking operation

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Line printed before the work starts
pub fn render_started(description: &str, ui: &UiContext) -> String {
    format!(
        "{} {}...",
        Icon::Progress.colored(ui.color, ui.unicode),
        description
    )
}

/// Line printed once the work is done
pub fn render_finished(description: &str, ok: bool, ui: &UiContext) -> String {
    let icon = if ok { Icon::Success } else { Icon::Error };
    format!("{} {}", icon.colored(ui.color, ui.unicode), description)
}

/// Run `work`, bracketed by progress lines on stderr.
///
/// The result is passed through untouched; callers still report errors.
pub fn run_scoped<T, E>(
    ui: &UiContext,
    description: &str,
    work: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    eprintln!("{}", render_started(description, ui));
    let result = work();
    eprintln!("{}", render_finished(description, result.is_ok(), ui));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;

    fn plain() -> UiContext {
        UiContext {
            verbose: 0,
            caps: TerminalCapabilities {
                is_interactive: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
            color: false,
            unicode: false,
        }
    }

    #[test]
    fn renders_ascii_progress() {
        assert_eq!(render_started("Stopping services", &plain()), "[..] Stopping services...");
        assert_eq!(
            render_finished("Stopping services", false, &plain()),
            "[FAIL] Stopping services"
        );
    }

    #[test]
    fn passes_result_through() {
        let ok: Result<u8, String> = run_scoped(&plain(), "work", || Ok(7));
        assert_eq!(ok, Ok(7));
        let err: Result<u8, String> = run_scoped(&plain(), "work", || Err("boom".into()));
        assert_eq!(err, Err("boom".to_string()));
    }
}
