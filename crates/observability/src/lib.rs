//! Logging setup for the parts and orders service binaries.

/// Initialize process-wide JSON logging. See [`tracing::init`].
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
