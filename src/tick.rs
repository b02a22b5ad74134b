//! Tick counter arithmetic.
//!
//! # Overflow Handling
//!
//! The tick counter is a 32-bit value advanced by the elapsed milliseconds of
//! every `tick` call, so it wraps roughly every 49.7 days of uptime.
//!
//! Every duration check goes through [`elapsed`], which uses `wrapping_sub` and
//! therefore stays correct across a single wrap. A timer whose start lies more
//! than one full wrap in the past aliases to a shorter distance; nothing guards
//! against that.

/// Value of the process-wide tick counter.
pub type Tick = u32;

/// Ticks passed from `start` to `now`, tolerating one counter wrap.
#[inline]
pub const fn elapsed(
    start: Tick,
    now: Tick,
) -> u32 {
    now.wrapping_sub(start)
}

/// Whether at least `duration` ticks separate `start` and `now`.
///
/// Wrap-safe form of `start + duration <= now`.
#[inline]
pub const fn has_elapsed(
    start: Tick,
    now: Tick,
    duration: u32,
) -> bool {
    elapsed(start, now) >= duration
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_normal() {
        assert_eq!(elapsed(100, 200), 100);
        assert_eq!(elapsed(0, 1000), 1000);
        assert_eq!(elapsed(500, 500), 0);
    }

    #[test]
    fn test_elapsed_wrap() {
        // Wrap from near max to near zero
        assert_eq!(elapsed(u32::MAX - 100, 100), 201);
        assert_eq!(elapsed(u32::MAX, 0), 1);
    }

    #[test]
    fn test_has_elapsed_boundary() {
        assert!(!has_elapsed(10, 29, 20));
        assert!(has_elapsed(10, 30, 20));
        assert!(has_elapsed(10, 31, 20));
    }

    #[test]
    fn test_has_elapsed_across_wrap() {
        let start = u32::MAX - 5;
        assert!(!has_elapsed(start, 10, 20));
        assert!(has_elapsed(start, 14, 20));
    }

    #[test]
    fn test_multi_wrap_aliases() {
        // A gap of one full wrap plus 5 reads as 5
        let start: Tick = 1000;
        let now = start.wrapping_add(u32::MAX).wrapping_add(6);
        assert_eq!(elapsed(start, now), 5);
        assert!(!has_elapsed(start, now, 20));
    }
}
