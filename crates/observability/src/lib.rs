//! Tracing/logging setup shared by the site and its tests.

/// Initialize page-wide (or process-wide, natively) tracing at `info`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize tracing with an explicit default level filter (e.g. `"debug"`,
/// `"aokhay_site=trace,info"`).
pub fn init_with_level(level: &str) {
    tracing::init(level);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Browser console writer.
#[cfg(target_arch = "wasm32")]
pub mod console;
