//! Button groups: combined gestures over several buttons.
//!
//! Every tick a group re-processes its members in order, counts how many are
//! pressing and derives its own state from that count alone:
//!
//! | previous group state | members pressing | new group state |
//! |----------------------|------------------|-----------------|
//! | any                  | all              | `Pressing`      |
//! | `Pressing`           | none             | `Clicked`       |
//! | `Clicked`            | none             | `Releasing`     |
//! | otherwise            |                  | unchanged       |
//!
//! The group callback fires on every tick one of these rules matches, so all
//! members held together report `Pressing` once per tick. The group property
//! is re-applied to the members when the derived state is `Pressing` or
//! `Releasing`. A group without a callback still derives its state and applies
//! its property; it only stays silent.

use crate::button::Button;
use crate::config::Timing;
use crate::event::{ButtonState, Event, EventCallback};
use crate::registry::{GroupId, Linked, List};
use crate::tick::Tick;

/// How a group treats its members while the combined gesture is active.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupProperty {
    /// Members keep reporting their own events.
    #[default]
    Parallel,
    /// Members are silenced while the group is `Pressing`.
    MutuallyExclusive,
}

/// A set of buttons reporting a combined gesture.
pub struct Group {
    id: GroupId,
    callback: Option<EventCallback>,
    state: ButtonState,
    property: GroupProperty,
    pub(crate) members: List,
}

impl Group {
    pub(crate) const fn new(
        id: GroupId,
        callback: Option<EventCallback>,
    ) -> Self {
        Self {
            id,
            callback,
            state: ButtonState::Releasing,
            property: GroupProperty::Parallel,
            members: List::new(),
        }
    }

    /// Handle of this group.
    #[inline]
    pub const fn id(&self) -> GroupId { self.id }

    /// Last derived group state.
    #[inline]
    pub const fn state(&self) -> ButtonState { self.state }

    /// Current member policy.
    #[inline]
    pub const fn property(&self) -> GroupProperty { self.property }

    /// Number of member buttons.
    #[inline]
    pub const fn len(&self) -> usize { self.members.len() }

    /// Group has no members.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.members.len() == 0 }

    #[inline]
    pub(crate) const fn callback(&self) -> Option<EventCallback> { self.callback }

    /// Change the member policy and apply it right away.
    pub(crate) fn set_property(
        &mut self,
        property: GroupProperty,
        buttons: &mut [Button<'_>],
    ) {
        self.property = property;
        self.apply_property(buttons);
    }

    /// Process all members, then derive and report the group state.
    pub(crate) fn process(
        &mut self,
        buttons: &mut [Button<'_>],
        now: Tick,
        timing: &Timing,
    ) {
        let mut total = 0;
        let mut pressing = 0;
        let mut cursor = self.members.head();
        while let Some(id) = cursor {
            let button = &mut buttons[id.index()];
            cursor = button.link().next();
            button.process(now, timing);

            total += 1;
            if button.is_pressing() {
                pressing += 1;
            }
        }

        let Some(next) = derive_state(self.state, pressing, total) else {
            return;
        };

        if next != self.state {
            debug!("group {} -> {}", self.id, next);
        }
        self.state = next;
        if next != ButtonState::Clicked {
            self.apply_property(buttons);
        }

        // Reported on every tick a rule matched, so a held combo repeats `Pressing`
        if let Some(callback) = self.callback {
            callback(Event::group(self.id, next, now));
        }
    }

    /// Push the group policy down to the members.
    ///
    /// Members of a parallel group are never suppressed.
    fn apply_property(
        &self,
        buttons: &mut [Button<'_>],
    ) {
        let suppress = match self.property {
            GroupProperty::Parallel => false,
            GroupProperty::MutuallyExclusive => self.state == ButtonState::Pressing,
        };

        let mut cursor = self.members.head();
        while let Some(id) = cursor {
            let button = &mut buttons[id.index()];
            cursor = button.link().next();
            button.set_suppressed(suppress);
        }
    }
}

/// Group state for `pressing` of `total` members, or `None` when nothing changes.
///
/// An empty group never derives a state.
pub(crate) const fn derive_state(
    previous: ButtonState,
    pressing: usize,
    total: usize,
) -> Option<ButtonState> {
    if total == 0 {
        return None;
    }
    if pressing == total {
        return Some(ButtonState::Pressing);
    }
    if pressing != 0 {
        return None;
    }
    match previous {
        ButtonState::Pressing => Some(ButtonState::Clicked),
        ButtonState::Clicked => Some(ButtonState::Releasing),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_never_derives() {
        assert_eq!(derive_state(ButtonState::Releasing, 0, 0), None);
        assert_eq!(derive_state(ButtonState::Pressing, 0, 0), None);
    }

    #[test]
    fn test_all_pressing() {
        assert_eq!(derive_state(ButtonState::Releasing, 2, 2), Some(ButtonState::Pressing));
        assert_eq!(derive_state(ButtonState::Clicked, 3, 3), Some(ButtonState::Pressing));
        assert_eq!(derive_state(ButtonState::Pressing, 1, 1), Some(ButtonState::Pressing));
    }

    #[test]
    fn test_partial_overlap_is_silent() {
        assert_eq!(derive_state(ButtonState::Releasing, 1, 2), None);
        assert_eq!(derive_state(ButtonState::Pressing, 1, 2), None);
        assert_eq!(derive_state(ButtonState::Clicked, 2, 3), None);
    }

    #[test]
    fn test_release_sequence() {
        assert_eq!(derive_state(ButtonState::Pressing, 0, 2), Some(ButtonState::Clicked));
        assert_eq!(derive_state(ButtonState::Clicked, 0, 2), Some(ButtonState::Releasing));
        assert_eq!(derive_state(ButtonState::Releasing, 0, 2), None);
    }

    #[test]
    fn test_new_group_defaults() {
        let group = Group::new(GroupId::new(0), None);
        assert_eq!(group.state(), ButtonState::Releasing);
        assert_eq!(group.property(), GroupProperty::Parallel);
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
    }

    #[test]
    fn test_default_property() {
        assert_eq!(GroupProperty::default(), GroupProperty::Parallel);
    }
}
