//! Shared tracing/logging setup.

/// Initialize observability for the process.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formatter).
pub mod tracing;
