//! Crate-wide constants.
//!
//! Centralizes defaults and magic numbers used by the tracker and its
//! rendering layer.

// ============================================================================
// Transition
// ============================================================================

/// Duration of the eased transition applied to programmatic moves
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Easing function name used by the eased transition
pub const DEFAULT_EASING: &str = "ease-in-out";

// ============================================================================
// Input Model Detection
// ============================================================================

/// User-agent fragments that select touch-style input (matched case-insensitively)
pub const TOUCH_USER_AGENT_MARKERS: &[&str] = &["android", "webos", "iphone", "ipod", "blackberry"];

// ============================================================================
// Geometry
// ============================================================================

/// Scale factor turning a fraction of the parent height into a percentage
pub const PERCENT_SCALE: f64 = 100.0;

// ============================================================================
// Profiling
// ============================================================================

/// Handler time above which a timed scope logs a warning, in milliseconds
pub const SLOW_HANDLER_MS: f64 = 4.0;

// ============================================================================
// Logging
// ============================================================================

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "dragger=info";
