//! Button manager library - polling debounce and gesture detection for MCU buttons.
//!
//! Buttons are sampled through a caller-supplied [`RawInput`] on every call to
//! [`ButtonManager::tick`]. Each button runs a small state machine that turns the
//! noisy raw level into gesture events (press, heartbeat, click, long press,
//! long press repeat, release). Buttons can be composed into groups that report
//! a combined gesture and optionally silence their members while it is active.
//!
//! ```ignore
//! use button_manager::{ButtonManager, ButtonState, Event, GroupProperty};
//!
//! fn on_event(event: Event) {
//!     if event.state == ButtonState::Clicked {
//!         // ...
//!     }
//! }
//!
//! let mut read_a = || pin_a.is_low().unwrap_or(false);
//! let mut read_b = || pin_b.is_low().unwrap_or(false);
//!
//! let mut manager: ButtonManager<'_, 4, 1> = ButtonManager::new();
//! let a = manager.create_button(&mut read_a, Some(on_event))?;
//! let b = manager.create_button(&mut read_b, Some(on_event))?;
//! let combo = manager.register_group(Some(on_event))?;
//! manager.add_button_to_group(combo, a)?;
//! manager.add_button_to_group(combo, b)?;
//! manager.set_group_property(combo, Some(GroupProperty::MutuallyExclusive))?;
//!
//! loop {
//!     manager.tick(10);
//!     delay.delay_ms(10);
//! }
//! ```
//!
//! # Testing
//!
//! The state machines need no hardware: tests feed closures as raw inputs and
//! record events into an [`EventJournal`]. The embassy driver tests need its
//! feature:
//! ```bash
//! cargo test
//! cargo test --features embassy
//! ```
//!
//! Only test builds link `std`; the library itself is always `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]

// Must come first so the logging macros are visible to every module below
mod fmt;

pub mod button;
pub mod config;
pub mod error;
pub mod event;
pub mod group;
pub mod input;
pub mod journal;
pub mod manager;
pub mod registry;
pub mod tick;

#[cfg(feature = "embassy")]
pub mod driver;

// Re-export at top level
pub use config::Timing;
pub use error::{Error, Result};
pub use event::{ButtonState, Event, EventCallback, Source};
pub use group::GroupProperty;
pub use input::{ActiveLevel, PinInput, RawInput};
pub use journal::EventJournal;
pub use manager::ButtonManager;
pub use registry::{ButtonId, GroupId};
pub use tick::Tick;
