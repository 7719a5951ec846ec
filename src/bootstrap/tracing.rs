//! Tracing configuration for clipstash
//!
//! Logs go to stderr so stdout stays reserved for the JSON result.
//! `RUST_LOG` overrides the verbosity flags.

use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Default filter for a `-v` count.
fn build_filter_directives(verbosity: u8) -> String {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
    .to_string()
}

/// Install the global subscriber. Call once, before any logging.
pub fn init_tracing_subscriber(verbosity: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(verbosity)));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(verbosity >= 2)
        .with_line_number(verbosity >= 2)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(build_filter_directives(0), "warn");
        assert_eq!(build_filter_directives(1), "info");
        assert_eq!(build_filter_directives(2), "debug");
        assert_eq!(build_filter_directives(9), "trace");
    }
}
