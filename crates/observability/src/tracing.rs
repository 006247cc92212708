//! Process-wide JSON logging for the parts and orders service.
//!
//! Events are written to stdout as one JSON object per line, with a system
//! timestamp and without the module target. Verbosity comes from `RUST_LOG`;
//! when it is unset or does not parse, [`DEFAULT_FILTER`] applies, which keeps
//! domain events at `info` and the per-request spans from `tower_http` at
//! `debug`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// `RUST_LOG` if it parses, [`DEFAULT_FILTER`] otherwise.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops), so tests and
/// the binary can both call it.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        ::tracing::info!(part_id = 1, "still logging");
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn fallback_filter_keeps_request_spans() {
        let rendered = EnvFilter::new(DEFAULT_FILTER).to_string();
        assert!(rendered.contains("tower_http=debug"), "{rendered}");
    }
}
