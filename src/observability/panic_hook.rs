//! Custom panic hook for structured crash reports.
//!
//! A crash report says what the calculator was doing: which command was
//! running, which input was being applied, and how many updates had gone
//! through, plus the panic message and location.

use super::context::{get_current_context, get_updates_applied, CommandContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BORDER: &str =
    "══════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook.
///
/// Call early in `main()`, before any command runs.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    print_header();
    print_panic_details(info);
    print_context_section(&context, get_updates_applied());
    print_backtrace_section();
}

fn print_header() {
    let platform = std::env::consts::OS;
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    eprintln!("╔{BORDER}╗");
    eprintln!("║                         COPILOT-ROI CRASH REPORT                             ║");
    eprintln!("╠{BORDER}╣");
    eprintln!("║  Version: {:<67} ║", VERSION);
    eprintln!("║  Platform: {:<66} ║", platform);
    eprintln!("║  Time: {:<70} ║", timestamp);
    eprintln!("╠{BORDER}╣");
}

fn print_panic_details(info: &PanicHookInfo<'_>) {
    let message = extract_panic_message(info);
    eprintln!("║  PANIC: {:<68} ║", truncate(&message, 68));

    if let Some(location) = info.location() {
        let loc_str = format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
        eprintln!("║  Location: {:<66} ║", truncate(&loc_str, 66));
    }
}

fn print_context_section(context: &CommandContext, updates: usize) {
    eprintln!("╠{BORDER}╣");
    eprintln!("║  OPERATION CONTEXT:                                                          ║");
    eprintln!(
        "║    Command: {:<64} ║",
        context.command.unwrap_or("(not set)")
    );
    if let Some(field) = context.current_field {
        eprintln!("║    Input: {:<66} ║", field.name());
    }
    if updates > 0 {
        eprintln!("║    Updates applied: {:<56} ║", updates);
    }
}

fn print_backtrace_section() {
    eprintln!("╠{BORDER}╣");

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("║  STACK TRACE:                                                                ║");
        eprintln!("╚{BORDER}╝");
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("║  Run with RUST_BACKTRACE=1 for stack trace                                   ║");
        eprintln!("╚{BORDER}╝");
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("this is a long message", 10), "this is...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("× × × × × ×", 5), "× ...");
    }
}
