//! JSON trace output for debugging alignment decisions.
//!
//! Only active with the `trace` feature; otherwise `init_tracing` does
//! nothing and every span in the library compiles away.

use std::path::Path;

/// File written inside the trace directory.
pub const TRACE_FILE: &str = "litxap-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "litxap=debug,litxap_core=debug,litxap_line=debug";

#[cfg(feature = "trace")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Send spans and events to `log_dir/litxap-trace.jsonl`. `RUST_LOG`
/// overrides the default filter. Later calls are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Flushes on drop; the subscriber lives until exit.
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}
