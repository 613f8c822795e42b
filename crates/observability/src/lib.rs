//! Tracing/logging setup shared by binaries and test harnesses.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    crate::tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
