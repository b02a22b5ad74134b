//! Default gesture thresholds.
//!
//! All values are tick-counter units. The counter advances by the millisecond
//! delta handed to `tick`, so these read as milliseconds when the host feeds
//! real elapsed time.

// =============================================================================
// Debounce
// =============================================================================

/// Debounce window: a raw level must hold this long before a press or a
/// release is confirmed. Also the heartbeat spacing while pressing.
pub const SHORT_ACTIVE_MS: u32 = 20;

// =============================================================================
// Long Press
// =============================================================================

/// Hold duration (from the first raw press) that declares a long press.
pub const LONG_ACTIVE_MS: u32 = 1300;

/// Repeat period of long-press notifications once the long threshold is crossed.
pub const LONG_PEER_MS: u32 = 100;

// =============================================================================
// Reserved
// =============================================================================

/// Double-click window. Carried in [`super::Timing`] but not used by any transition.
pub const DOUBLE_CLICK_ACTIVE_MS: u32 = 300;
