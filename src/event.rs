//! Gesture states and the events carrying them to callbacks.

use crate::registry::{ButtonId, GroupId};
use crate::tick::Tick;

/// Gesture state of a button or a group.
///
/// Buttons rest in `Releasing`, confirm a press as `Pressing`, escalate to
/// `LongPressing`, and report the end of a press as `Clicked` (short) or
/// `Pressed` (after a long press) for exactly one tick.
/// `LongPressedRepeat` is only ever an event, never a resting state.
/// `DoubleClicked` is reserved: no transition produces it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Debounced press, held shorter than the long threshold (also the heartbeat).
    Pressing,
    /// Released after a long press.
    Pressed,
    /// Idle, debounced released.
    #[default]
    Releasing,
    /// Released after a short press.
    Clicked,
    /// Reserved, never produced.
    DoubleClicked,
    /// Held past the long threshold.
    LongPressing,
    /// Periodic notification while a long press continues.
    LongPressedRepeat,
}

impl ButtonState {
    /// Whether the state counts as held (`Pressing` or `LongPressing`).
    #[inline]
    pub const fn is_pressing(self) -> bool { matches!(self, Self::Pressing | Self::LongPressing) }
}

/// Entity an event originates from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Source {
    Button(ButtonId),
    Group(GroupId),
}

/// A state notification delivered to an [`EventCallback`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    /// Button or group that changed.
    pub source: Source,
    /// New state (or heartbeat / repeat notification).
    pub state: ButtonState,
    /// Tick counter value of the `tick` call that produced the event.
    pub tick: Tick,
}

impl Event {
    pub(crate) const fn button(
        id: ButtonId,
        state: ButtonState,
        tick: Tick,
    ) -> Self {
        Self {
            source: Source::Button(id),
            state,
            tick,
        }
    }

    pub(crate) const fn group(
        id: GroupId,
        state: ButtonState,
        tick: Tick,
    ) -> Self {
        Self {
            source: Source::Group(id),
            state,
            tick,
        }
    }

    /// Originating button, if the event came from a button.
    #[inline]
    pub const fn button_id(&self) -> Option<ButtonId> {
        match self.source {
            Source::Button(id) => Some(id),
            Source::Group(_) => None,
        }
    }

    /// Originating group, if the event came from a group.
    #[inline]
    pub const fn group_id(&self) -> Option<GroupId> {
        match self.source {
            Source::Group(id) => Some(id),
            Source::Button(_) => None,
        }
    }
}

/// Event handler invoked synchronously from within `tick`.
///
/// Handlers should be short and must not block.
pub type EventCallback = fn(Event);

// =============================================================================
// Unit Tests
// =============================================================================
