//! Button debounce and gesture state machine.
//!
//! Each tick samples the raw input once (twice when confirming a press) and
//! advances the button through
//! `Releasing → Pressing → LongPressing → Clicked | Pressed → Releasing`.
//!
//! # Timing
//!
//! - A raw press is confirmed after `short_active - 1` ticks of continuous press.
//! - A raw release is confirmed after `short_active` ticks of continuous release.
//! - While `Pressing`, a heartbeat `Pressing` event fires once more than
//!   `short_active + 1` ticks passed since the previous one.
//! - `LongPressing` starts `long_active` ticks after the first raw press and
//!   repeats every `long_peer` ticks from that threshold. Slots missed by a
//!   late poll collapse into a single repeat.
//!
//! A flip of the raw level clears the timer of the opposite edge, so a bounce
//! shorter than the debounce window never confirms a transition.

use crate::config::Timing;
use crate::event::{ButtonState, Event, EventCallback};
use crate::input::RawInput;
use crate::registry::{ButtonId, Link, Linked};
use crate::tick::{self, Tick};

/// One physical button tracked by the manager.
pub struct Button<'a> {
    id: ButtonId,
    input: &'a mut dyn RawInput,
    callback: Option<EventCallback>,

    /// First tick the raw input read pressed (debounce and long-press origin).
    press_start: Option<Tick>,
    /// Last heartbeat, or the last long-press repeat slot.
    last_pulse: Tick,
    /// First tick the raw input read released while pressed.
    release_start: Option<Tick>,

    state: ButtonState,
    /// Latched by a completed press cycle, consumed by [`Button::take_was_pressed`].
    previous: Option<ButtonState>,
    /// Set by a mutually exclusive group: the machine runs, events are dropped.
    suppressed: bool,

    link: Link,
}

impl<'a> Button<'a> {
    pub(crate) fn new(
        id: ButtonId,
        input: &'a mut dyn RawInput,
        callback: Option<EventCallback>,
    ) -> Self {
        Self {
            id,
            input,
            callback,
            press_start: None,
            last_pulse: 0,
            release_start: None,
            state: ButtonState::Releasing,
            previous: None,
            suppressed: false,
            link: Link::default(),
        }
    }

    /// Handle of this button.
    #[inline]
    pub const fn id(&self) -> ButtonId { self.id }

    /// Current debounced state.
    #[inline]
    pub const fn state(&self) -> ButtonState { self.state }

    /// Held and confirmed (`Pressing` or `LongPressing`).
    #[inline]
    pub const fn is_pressing(&self) -> bool { self.state.is_pressing() }

    /// Idle and released.
    #[inline]
    pub const fn is_releasing(&self) -> bool { matches!(self.state, ButtonState::Releasing) }

    /// Events are currently blocked by a group.
    #[inline]
    pub const fn is_suppressed(&self) -> bool { self.suppressed }

    #[inline]
    pub(crate) const fn callback(&self) -> Option<EventCallback> { self.callback }

    /// Returns true once per completed press cycle (click or long press).
    pub fn take_was_pressed(&mut self) -> bool {
        if self.previous == Some(ButtonState::Pressed) {
            self.previous = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_callback(
        &mut self,
        callback: Option<EventCallback>,
    ) {
        self.callback = callback;
    }

    pub(crate) fn set_suppressed(
        &mut self,
        suppressed: bool,
    ) {
        self.suppressed = suppressed;
    }

    /// Advance the state machine by one tick.
    pub(crate) fn process(
        &mut self,
        now: Tick,
        timing: &Timing,
    ) {
        let next = match self.state {
            ButtonState::Releasing => self.on_releasing(now, timing),
            ButtonState::Pressing => self.on_pressing(now, timing),
            ButtonState::LongPressing => self.on_long_pressing(now, timing),
            ButtonState::Clicked | ButtonState::Pressed => self.on_settled(now),
            // Never a resting state
            ButtonState::DoubleClicked | ButtonState::LongPressedRepeat => ButtonState::Releasing,
        };

        if next != self.state {
            trace!("button {} {} -> {}", self.id, self.state, next);
        }
        self.state = next;
    }

    fn on_releasing(
        &mut self,
        now: Tick,
        timing: &Timing,
    ) -> ButtonState {
        if !self.input.is_pressed() {
            self.press_start = None;
            return ButtonState::Releasing;
        }

        let start = *self.press_start.get_or_insert(now);
        if !tick::has_elapsed(start, now, timing.press_confirm()) {
            return ButtonState::Releasing;
        }

        // Confirm on a second sample
        if !self.input.is_pressed() {
            self.press_start = None;
            return ButtonState::Releasing;
        }

        self.release_start = None;
        self.last_pulse = now;
        self.emit(ButtonState::Pressing, now);
        ButtonState::Pressing
    }

    fn on_pressing(
        &mut self,
        now: Tick,
        timing: &Timing,
    ) -> ButtonState {
        if let Some(next) = self.debounce_release(now, timing, ButtonState::Clicked) {
            return next;
        }

        let start = *self.press_start.get_or_insert(now);
        if tick::has_elapsed(start, now, timing.long_active) {
            self.release_start = None;
            // Repeats are counted from the threshold, not from this tick
            self.last_pulse = start.wrapping_add(timing.long_active);
            self.emit(ButtonState::LongPressing, now);
            return ButtonState::LongPressing;
        }

        if tick::elapsed(self.last_pulse, now) > timing.heartbeat_after() {
            self.last_pulse = now;
            self.emit(ButtonState::Pressing, now);
        }
        ButtonState::Pressing
    }

    fn on_long_pressing(
        &mut self,
        now: Tick,
        timing: &Timing,
    ) -> ButtonState {
        if let Some(next) = self.debounce_release(now, timing, ButtonState::Pressed) {
            return next;
        }

        let since = tick::elapsed(self.last_pulse, now);
        if since >= timing.long_peer {
            // Skip to the latest slot; a late poll reports one repeat, not a burst
            self.last_pulse = now.wrapping_sub(since % timing.long_peer);
            self.emit(ButtonState::LongPressedRepeat, now);
        }
        ButtonState::LongPressing
    }

    fn on_settled(
        &mut self,
        now: Tick,
    ) -> ButtonState {
        self.release_start = None;
        self.press_start = None;
        // Latched for both a click and a long press
        self.previous = Some(ButtonState::Pressed);
        self.emit(ButtonState::Releasing, now);
        ButtonState::Releasing
    }

    /// Release debounce shared by `Pressing` and `LongPressing`.
    ///
    /// Returns `Some(settled)` once the release is confirmed.
    fn debounce_release(
        &mut self,
        now: Tick,
        timing: &Timing,
        settled: ButtonState,
    ) -> Option<ButtonState> {
        if self.input.is_pressed() {
            self.release_start = None;
            return None;
        }

        match self.release_start {
            None => {
                self.release_start = Some(now);
                None
            }
            Some(start) if tick::has_elapsed(start, now, timing.short_active) => {
                self.release_start = None;
                self.emit(settled, now);
                Some(settled)
            }
            Some(_) => None,
        }
    }

    fn emit(
        &self,
        state: ButtonState,
        now: Tick,
    ) {
        if self.suppressed {
            return;
        }
        if let Some(callback) = self.callback {
            callback(Event::button(self.id, state, now));
        }
    }
}

impl Linked for Button<'_> {
    #[inline]
    fn link(&self) -> &Link { &self.link }

    #[inline]
    fn link_mut(&mut self) -> &mut Link { &mut self.link }
}

// =============================================================================
// Unit Tests
// =============================================================================
