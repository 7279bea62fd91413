//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `ZONING_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "zoning=info";

/// Initialize the tracing/logging system.
///
/// Reads `ZONING_LOG` for per-crate log levels.
/// Format: `ZONING_LOG=zoning_prediction=debug,zoning_data=warn`
///
/// Idempotent; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ZONING_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // try_init: a host may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_safe() {
        init_tracing_with_filter("zoning=debug");
        init_tracing();
        init_tracing();
    }
}
