//! Tracing setup

use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is not set
#[must_use]
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "nonwordle=warn",
        1 => "nonwordle=info",
        2 => "nonwordle=debug",
        _ => "nonwordle=trace",
    }
}

/// Install the global subscriber
///
/// Logs go to `log_file` when given (the TUI owns the terminal), otherwise
/// to stderr. `RUST_LOG` overrides the verbosity.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_tracing(
    verbosity: u8,
    log_file: Option<File>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let to_stderr = log_file.is_none();
    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });
    let stderr_layer = to_stderr.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_filter(0), "nonwordle=warn");
        assert_eq!(default_filter(2), "nonwordle=debug");
        assert_eq!(default_filter(9), "nonwordle=trace");
    }
}
