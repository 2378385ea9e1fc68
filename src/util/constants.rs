// WellScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "WellScope";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "WellScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend access
// =============================================================================

/// Default backend base address when neither --api-url nor config.toml
/// provides one. Matches the backend's development default.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Per-request timeout applied to every backend call, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Upload
// =============================================================================

/// File extensions accepted by the LAS file picker.
pub const LAS_EXTENSIONS: &[&str] = &["las", "LAS"];

/// Maximum LAS file size accepted for upload, in bytes. Larger files are
/// rejected client-side before any bytes hit the wire.
pub const MAX_UPLOAD_BYTES: u64 = 256 * 1024 * 1024; // 256 MB

// =============================================================================
// Per-frame UI message budgets
// =============================================================================

/// Maximum number of background-worker events processed by the UI update
/// loop per frame. Any remaining events are left in the channel and
/// processed on subsequent frames, preventing a burst from stalling the
/// render loop.
pub const MAX_EVENTS_PER_FRAME: usize = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
