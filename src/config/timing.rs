//! Runtime timing thresholds for the button state machines.

use super::defaults::{DOUBLE_CLICK_ACTIVE_MS, LONG_ACTIVE_MS, LONG_PEER_MS, SHORT_ACTIVE_MS};
use crate::error::{Error, Result};

/// Threshold set shared by every button of a manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Debounce window for both press and release confirmation.
    pub short_active: u32,
    /// Hold duration that turns a press into a long press.
    pub long_active: u32,
    /// Interval between long-press repeat notifications.
    pub long_peer: u32,
    /// Reserved double-click window (no transition uses it).
    pub double_click_active: u32,
}

impl Timing {
    /// Default thresholds from [`super::defaults`].
    pub const DEFAULT: Self = Self::new(SHORT_ACTIVE_MS, LONG_ACTIVE_MS, LONG_PEER_MS);

    /// Create a timing set. The double-click window keeps its default.
    pub const fn new(
        short_active: u32,
        long_active: u32,
        long_peer: u32,
    ) -> Self {
        Self {
            short_active,
            long_active,
            long_peer,
            double_click_active: DOUBLE_CLICK_ACTIVE_MS,
        }
    }

    /// Replace the reserved double-click window.
    #[must_use]
    pub const fn with_double_click(
        mut self,
        double_click_active: u32,
    ) -> Self {
        self.double_click_active = double_click_active;
        self
    }

    /// Check that the thresholds describe a usable state machine.
    ///
    /// The debounce window and the repeat period must be non-zero and the long
    /// press threshold must lie beyond the debounce window.
    pub const fn validate(&self) -> Result<()> {
        if self.short_active == 0 || self.long_peer == 0 || self.long_active <= self.short_active {
            Err(Error::BadParameter)
        } else {
            Ok(())
        }
    }

    /// Ticks a raw press must be observed before it is confirmed.
    ///
    /// Press confirmation compares `start + short > now + 1`, which lands one
    /// tick earlier than release confirmation.
    #[inline]
    pub(crate) const fn press_confirm(&self) -> u32 { self.short_active.saturating_sub(1) }

    /// Heartbeat fires once strictly more than this many ticks have passed.
    #[inline]
    pub(crate) const fn heartbeat_after(&self) -> u32 { self.short_active.saturating_add(1) }
}

impl Default for Timing {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Unit Tests
// =============================================================================
