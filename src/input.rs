//! Raw button sampling.
//!
//! The manager only needs one capability from the hardware side: "is the
//! contact closed right now". [`RawInput`] expresses it. Any `FnMut() -> bool`
//! closure qualifies, and [`PinInput`] adapts an `embedded-hal` input pin.

use embedded_hal::digital::InputPin;

/// Source of raw (undebounced) button samples.
///
/// Called up to twice per tick per button. Must be cheap and must not block.
pub trait RawInput {
    /// Returns `true` while the contact reads as pressed.
    fn is_pressed(&mut self) -> bool;
}

impl<F> RawInput for F
where
    F: FnMut() -> bool,
{
    #[inline]
    fn is_pressed(&mut self) -> bool { self() }
}

/// Pin level that means "pressed".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Button pulls the pin to ground (internal pull-up). Reads LOW when pressed.
    #[default]
    Low,
    /// Button pulls the pin to VCC (internal pull-down). Reads HIGH when pressed.
    High,
}

/// [`RawInput`] over an `embedded-hal` digital input.
///
/// A pin read error counts as "released", so a faulty pin reads as an idle
/// button instead of stalling the tick loop.
pub struct PinInput<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> PinInput<P> {
    /// Wrap a pin with the given active level.
    pub const fn new(
        pin: P,
        active: ActiveLevel,
    ) -> Self {
        Self { pin, active }
    }

    /// Button wired to ground (the usual pull-up wiring).
    pub const fn active_low(pin: P) -> Self { Self::new(pin, ActiveLevel::Low) }

    /// Button wired to VCC.
    pub const fn active_high(pin: P) -> Self { Self::new(pin, ActiveLevel::High) }

    /// Configured active level.
    #[inline]
    pub const fn active_level(&self) -> ActiveLevel { self.active }

    /// Give the pin back.
    pub fn into_inner(self) -> P { self.pin }
}

impl<P: InputPin> RawInput for PinInput<P> {
    fn is_pressed(&mut self) -> bool {
        let level = match self.active {
            ActiveLevel::Low => self.pin.is_low(),
            ActiveLevel::High => self.pin.is_high(),
        };
        level.unwrap_or(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
