//! Async polling loop for embassy executors.
//!
//! Spawn a task that owns the manager and hands it to [`run`]:
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn buttons_task(mut pin: Input<'static>) {
//!     let mut read = move || pin.is_low();
//!     let mut manager: ButtonManager<'_, 1, 0> = ButtonManager::new();
//!     if manager.add_button(&mut read, Some(on_event)).is_ok() {
//!         driver::run(&mut manager, Duration::from_millis(10)).await;
//!     }
//! }
//! ```

use embassy_time::{Duration, Instant, Ticker};

use crate::manager::ButtonManager;

/// Tick `manager` every `period` forever.
///
/// The elapsed time is measured against [`Instant::now`], so a late wakeup
/// advances the tick counter by the real time that passed. Sub-millisecond
/// remainders carry over to the next period.
pub async fn run<const BUTTONS: usize, const GROUPS: usize>(
    manager: &mut ButtonManager<'_, BUTTONS, GROUPS>,
    period: Duration,
) -> ! {
    let mut ticker = Ticker::every(period);
    let mut last = Instant::now();

    loop {
        ticker.next().await;

        let (elapsed_ms, consumed) = whole_millis(Instant::now() - last);
        last += consumed;
        manager.tick(elapsed_ms);
    }
}

/// Whole milliseconds in `elapsed` (saturated to `u32`) and the duration they cover.
fn whole_millis(elapsed: Duration) -> (u32, Duration) {
    let ms = elapsed.as_millis();
    (u32::try_from(ms).unwrap_or(u32::MAX), Duration::from_millis(ms))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_millis_drops_remainder() {
        let (ms, consumed) = whole_millis(Duration::from_micros(10_750));
        assert_eq!(ms, 10);
        assert_eq!(consumed, Duration::from_millis(10));
    }

    #[test]
    fn test_whole_millis_below_one_ms() {
        let (ms, consumed) = whole_millis(Duration::from_micros(400));
        assert_eq!(ms, 0);
        assert_eq!(consumed, Duration::from_ticks(0));
    }

    #[test]
    fn test_whole_millis_saturates() {
        let (ms, _) = whole_millis(Duration::from_secs(5_000_000));
        assert_eq!(ms, u32::MAX);
    }
}
