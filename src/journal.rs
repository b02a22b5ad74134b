//! Event journal for on-device diagnostics.
//!
//! A fixed-capacity circular buffer of the most recent [`Event`]s. Event
//! callbacks push into it; a debug screen or a log task reads it back oldest
//! first. When full, the oldest event is dropped.
//!
//! # Usage
//!
//! ```ignore
//! use core::cell::RefCell;
//! use critical_section::Mutex;
//!
//! static JOURNAL: Mutex<RefCell<EventJournal<16>>> = Mutex::new(RefCell::new(EventJournal::new()));
//!
//! fn on_event(event: Event) {
//!     critical_section::with(|cs| JOURNAL.borrow_ref_mut(cs).push(event));
//! }
//! ```

use crate::event::Event;

/// Circular buffer holding the last `N` events.
pub struct EventJournal<const N: usize> {
    entries: [Option<Event>; N],
    head: usize, // Next write position
    count: usize,
}

impl<const N: usize> EventJournal<N> {
    /// Create a new empty journal.
    pub const fn new() -> Self {
        const { assert!(N > 0, "journal capacity must be non-zero") };
        Self {
            entries: [None; N],
            head: 0,
            count: 0,
        }
    }

    /// Record an event. Oldest event is dropped if the journal is full.
    pub fn push(
        &mut self,
        event: Event,
    ) {
        self.entries[self.head] = Some(event);
        self.head = (self.head + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Number of recorded events.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if the journal is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Maximum number of events kept.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Most recently recorded event.
    pub fn latest(&self) -> Option<&Event> {
        if self.count == 0 {
            return None;
        }
        self.entries[(self.head + N - 1) % N].as_ref()
    }

    /// Drop all events.
    pub fn clear(&mut self) {
        self.entries = [None; N];
        self.head = 0;
        self.count = 0;
    }

    /// Iterate over events from oldest to newest.
    pub fn iter(&self) -> JournalIter<'_, N> {
        let start = if self.count < N { 0 } else { self.head };
        JournalIter {
            journal: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl<const N: usize> Default for EventJournal<N> {
    fn default() -> Self { Self::new() }
}

/// Iterator over journal events (oldest to newest).
pub struct JournalIter<'a, const N: usize> {
    journal: &'a EventJournal<N>,
    pos: usize,
    remaining: usize,
}

impl<'a, const N: usize> Iterator for JournalIter<'a, N> {
    type Item = &'a Event;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let event = self.journal.entries[self.pos].as_ref();
        self.pos = (self.pos + 1) % N;
        self.remaining -= 1;
        event
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ButtonState;
    use crate::registry::ButtonId;

    fn event(tick: u32) -> Event { Event::button(ButtonId::new(0), ButtonState::Pressing, tick) }

    fn ticks<const N: usize>(journal: &EventJournal<N>) -> std::vec::Vec<u32> {
        journal.iter().map(|event| event.tick).collect()
    }

    #[test]
    fn test_new_journal() {
        let journal: EventJournal<4> = EventJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert_eq!(journal.capacity(), 4);
        assert!(journal.latest().is_none());
        assert_eq!(journal.iter().count(), 0);
    }

    #[test]
    fn test_push_in_order() {
        let mut journal: EventJournal<4> = EventJournal::new();
        journal.push(event(10));
        journal.push(event(20));
        assert_eq!(journal.len(), 2);
        assert_eq!(ticks(&journal), [10, 20]);
        assert_eq!(journal.latest().map(|e| e.tick), Some(20));
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut journal: EventJournal<3> = EventJournal::new();
        for tick in 1..=5 {
            journal.push(event(tick));
        }
        assert_eq!(journal.len(), 3);
        assert_eq!(ticks(&journal), [3, 4, 5]);
        assert_eq!(journal.latest().map(|e| e.tick), Some(5));
    }

    #[test]
    fn test_clear() {
        let mut journal: EventJournal<3> = EventJournal::default();
        journal.push(event(1));
        journal.push(event(2));
        journal.clear();
        assert!(journal.is_empty());
        journal.push(event(9));
        assert_eq!(ticks(&journal), [9]);
    }
}
