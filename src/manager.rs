//! Tick driver, registries and dispatch.
//!
//! [`ButtonManager`] owns the tick counter, the button and group arenas, and
//! the free-standing button list. Each [`ButtonManager::tick`] call:
//!
//! 1. advances the counter by the elapsed milliseconds (wrapping),
//! 2. processes every free-standing button in registration order,
//! 3. processes every group in registration order, each group re-processing
//!    its own members.
//!
//! Callbacks run inline on the caller's stack. A button is linked into at most
//! one list, so no button is processed twice in a tick.

use heapless::Vec;

use crate::button::Button;
use crate::config::Timing;
use crate::error::{Error, Result};
use crate::event::{ButtonState, EventCallback};
use crate::group::{Group, GroupProperty};
use crate::input::RawInput;
use crate::registry::{ButtonId, GroupId, Linked, List, Owner};
use crate::tick::Tick;

/// Polling button manager with room for `BUTTONS` buttons and `GROUPS` groups.
pub struct ButtonManager<'a, const BUTTONS: usize, const GROUPS: usize> {
    timing: Timing,
    ticks: Tick,
    buttons: Vec<Button<'a>, BUTTONS>,
    groups: Vec<Group, GROUPS>,
    standalone: List,
}

impl<'a, const BUTTONS: usize, const GROUPS: usize> ButtonManager<'a, BUTTONS, GROUPS> {
    /// Create a manager with the default thresholds.
    pub const fn new() -> Self { Self::build(Timing::DEFAULT) }

    /// Create a manager with custom thresholds.
    ///
    /// # Errors
    ///
    /// [`Error::BadParameter`] if `timing` fails [`Timing::validate`].
    pub fn with_timing(timing: Timing) -> Result<Self> {
        if let Err(err) = timing.validate() {
            warn!("rejected timing {}", timing);
            return Err(err);
        }
        Ok(Self::build(timing))
    }

    const fn build(timing: Timing) -> Self {
        Self {
            timing,
            ticks: 0,
            buttons: Vec::new(),
            groups: Vec::new(),
            standalone: List::new(),
        }
    }

    /// Thresholds in use.
    #[inline]
    pub const fn timing(&self) -> &Timing { &self.timing }

    /// Current tick counter value.
    #[inline]
    pub const fn ticks(&self) -> Tick { self.ticks }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Create a button sampled through `input`.
    ///
    /// The button is not processed until it is registered with
    /// [`register_button`](Self::register_button) or added to a group.
    ///
    /// # Errors
    ///
    /// [`Error::Full`] if all `BUTTONS` slots are taken.
    pub fn create_button(
        &mut self,
        input: &'a mut dyn RawInput,
        callback: Option<EventCallback>,
    ) -> Result<ButtonId> {
        let id = ButtonId::new(self.buttons.len());
        if self.buttons.push(Button::new(id, input, callback)).is_err() {
            warn!("button storage full ({})", BUTTONS);
            return Err(Error::Full);
        }
        debug!("button {} created", id);
        Ok(id)
    }

    /// Create a button and register it as free-standing in one step.
    ///
    /// # Errors
    ///
    /// [`Error::Full`] if all `BUTTONS` slots are taken.
    pub fn add_button(
        &mut self,
        input: &'a mut dyn RawInput,
        callback: Option<EventCallback>,
    ) -> Result<ButtonId> {
        let id = self.create_button(input, callback)?;
        self.register_button(id)?;
        Ok(id)
    }

    /// Register a button in the free-standing list.
    ///
    /// A button that currently belongs to a group leaves that group.
    /// Registering an already free-standing button does nothing.
    ///
    /// # Errors
    ///
    /// [`Error::BadParameter`] for an unknown handle.
    pub fn register_button(
        &mut self,
        id: ButtonId,
    ) -> Result<()> {
        let index = self.button_index(id)?;
        let owner = self.buttons[index].link().owner();
        if owner == Owner::Standalone {
            return Ok(());
        }

        self.detach(id, owner);
        self.standalone.push_back(&mut self.buttons, id, Owner::Standalone);
        self.buttons[index].set_suppressed(false);
        debug!("button {} registered", id);
        Ok(())
    }

    /// Register a new group.
    ///
    /// Without a callback the group still tracks its state and applies its
    /// property (mutual exclusion included); it just reports nothing.
    ///
    /// # Errors
    ///
    /// [`Error::Full`] if all `GROUPS` slots are taken.
    pub fn register_group(
        &mut self,
        callback: Option<EventCallback>,
    ) -> Result<GroupId> {
        let id = GroupId::new(self.groups.len());
        if self.groups.push(Group::new(id, callback)).is_err() {
            warn!("group storage full ({})", GROUPS);
            return Err(Error::Full);
        }
        debug!("group {} registered", id);
        Ok(id)
    }

    /// Move a button into a group.
    ///
    /// The button leaves whichever list held it before. If it has no event
    /// callback of its own it takes the group's callback now; later changes
    /// are not propagated.
    ///
    /// # Errors
    ///
    /// [`Error::BadParameter`] for an unknown group or button handle.
    pub fn add_button_to_group(
        &mut self,
        group: GroupId,
        button: ButtonId,
    ) -> Result<()> {
        let group_index = self.group_index(group)?;
        let button_index = self.button_index(button)?;

        let owner = self.buttons[button_index].link().owner();
        if owner != Owner::Group(group) {
            self.detach(button, owner);
            self.groups[group_index].members.push_back(&mut self.buttons, button, Owner::Group(group));
            self.buttons[button_index].set_suppressed(false);
            debug!("button {} joined group {}", button, group);
        }

        if self.buttons[button_index].callback().is_none() {
            let inherited = self.groups[group_index].callback();
            self.buttons[button_index].set_callback(inherited);
        }
        Ok(())
    }

    /// Set the member policy of a group. `None` selects [`GroupProperty::Parallel`].
    ///
    /// # Errors
    ///
    /// [`Error::BadParameter`] for an unknown group handle.
    pub fn set_group_property(
        &mut self,
        group: GroupId,
        property: Option<GroupProperty>,
    ) -> Result<()> {
        let index = self.group_index(group)?;
        let property = property.unwrap_or_default();
        self.groups[index].set_property(property, &mut self.buttons);
        debug!("group {} property {}", group, property);
        Ok(())
    }

    // =========================================================================
    // Processing
    // =========================================================================

    /// Advance the tick counter by `elapsed_ms` and process every button and group.
    ///
    /// Recommended cadence is 1-10 ms. Event callbacks fire before this returns.
    pub fn tick(
        &mut self,
        elapsed_ms: u32,
    ) {
        self.ticks = self.ticks.wrapping_add(elapsed_ms);
        let now = self.ticks;

        let mut cursor = self.standalone.head();
        while let Some(id) = cursor {
            let button = &mut self.buttons[id.index()];
            cursor = button.link().next();
            button.process(now, &self.timing);
        }

        for group in self.groups.iter_mut() {
            group.process(&mut self.buttons, now, &self.timing);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Button is held (`Pressing` or `LongPressing`). `false` for unknown handles.
    pub fn is_pressing(
        &self,
        id: ButtonId,
    ) -> bool {
        self.button(id).is_some_and(Button::is_pressing)
    }

    /// Button is idle (`Releasing`). `false` for unknown handles.
    pub fn is_releasing(
        &self,
        id: ButtonId,
    ) -> bool {
        self.button(id).is_some_and(Button::is_releasing)
    }

    /// Returns true once per completed press cycle, then false until the next one.
    pub fn was_pressed(
        &mut self,
        id: ButtonId,
    ) -> bool {
        self.buttons.get_mut(id.index()).is_some_and(Button::take_was_pressed)
    }

    /// Current state of a button.
    pub fn button_state(
        &self,
        id: ButtonId,
    ) -> Option<ButtonState> {
        self.button(id).map(Button::state)
    }

    /// Current derived state of a group.
    pub fn group_state(
        &self,
        id: GroupId,
    ) -> Option<ButtonState> {
        self.group(id).map(Group::state)
    }

    /// Button record, if the handle is known.
    pub fn button(
        &self,
        id: ButtonId,
    ) -> Option<&Button<'a>> {
        self.buttons.get(id.index())
    }

    /// Group record, if the handle is known.
    pub fn group(
        &self,
        id: GroupId,
    ) -> Option<&Group> {
        self.groups.get(id.index())
    }

    /// Free-standing buttons in processing order.
    pub fn standalone_buttons(&self) -> impl Iterator<Item = ButtonId> + '_ { self.standalone.iter(&self.buttons) }

    /// Members of a group in processing order. Empty for unknown handles.
    pub fn group_members(
        &self,
        id: GroupId,
    ) -> impl Iterator<Item = ButtonId> + '_ {
        self.groups
            .get(id.index())
            .into_iter()
            .flat_map(|group| group.members.iter(&self.buttons))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn button_index(
        &self,
        id: ButtonId,
    ) -> Result<usize> {
        if id.index() < self.buttons.len() {
            Ok(id.index())
        } else {
            warn!("unknown button {}", id);
            Err(Error::BadParameter)
        }
    }

    fn group_index(
        &self,
        id: GroupId,
    ) -> Result<usize> {
        if id.index() < self.groups.len() {
            Ok(id.index())
        } else {
            warn!("unknown group {}", id);
            Err(Error::BadParameter)
        }
    }

    /// Unlink a button from the list named by `owner`.
    fn detach(
        &mut self,
        id: ButtonId,
        owner: Owner,
    ) {
        match owner {
            Owner::Unlinked => {}
            Owner::Standalone => self.standalone.unlink(&mut self.buttons, id),
            Owner::Group(group) => self.groups[group.index()].members.unlink(&mut self.buttons, id),
        }
    }
}

impl<const BUTTONS: usize, const GROUPS: usize> Default for ButtonManager<'_, BUTTONS, GROUPS> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
