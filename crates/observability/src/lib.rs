//! Tracing and logging setup shared by the MyMedicine binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// The output format comes from `LOG_FORMAT` (`json` or `pretty`), the filter
/// from `RUST_LOG`. Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let format: LogFormat = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();

    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use tracing::LogFormat;
