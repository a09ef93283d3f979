//! Logging setup and crash reports.
//!
//! Logs go to stderr so stdout stays clean for reports and JSON. `RUST_LOG`
//! wins over the `-v` count when set. Library code logs through `tracing`;
//! `log` records (from the config loader) are bridged into the same
//! subscriber.
//!
//! ```ignore
//! use copilot_roi::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, increment_updates, set_command, set_current_field, CommandContext,
    ContextGuard,
};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbosity > 1)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(verbosity_filter(0), "warn");
        assert_eq!(verbosity_filter(1), "info");
        assert_eq!(verbosity_filter(2), "debug");
        assert_eq!(verbosity_filter(9), "trace");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(0);
        init_tracing(3);
    }
}
