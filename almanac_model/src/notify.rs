// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The date-changed notification channel.
//!
//! Listeners are plain closures returning `Result<(), ListenerError>`. The
//! channel calls every listener in subscription order, logs each failure, and
//! reports the tally as a [`Delivery`]. A failing listener does not stop the
//! remaining ones from running and never turns into an error for the caller
//! that triggered the change.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use almanac_grid::Day;

/// Payload delivered to date-changed listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateChanged {
    /// The newly selected date.
    pub date: Day,
    /// The date selected before this change.
    pub previous: Day,
    /// Whether the viewed month changed (and the grid was rebuilt).
    pub month_changed: bool,
}

/// Failure reported by a listener.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    /// Creates an error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message passed to [`ListenerError::new`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// A boxed date-changed listener.
pub type Listener = Box<dyn FnMut(&DateChanged) -> Result<(), ListenerError>>;

/// Outcome of one notification round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Listeners that returned `Ok`.
    pub delivered: usize,
    /// Listeners that returned `Err`; each failure was logged.
    pub failed: usize,
}

impl Delivery {
    /// Returns `true` if no listener failed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Ordered set of date-changed listeners.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Listeners {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener; it runs after all listeners subscribed before it.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&DateChanged) -> Result<(), ListenerError> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of subscribed listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls every listener with `event`.
    pub fn emit(&mut self, event: &DateChanged) -> Delivery {
        let mut delivery = Delivery::default();
        for (id, listener) in &mut self.entries {
            match listener(event) {
                Ok(()) => delivery.delivered += 1,
                Err(err) => {
                    delivery.failed += 1;
                    tracing::warn!(
                        listener = id.0,
                        date = %event.date,
                        %err,
                        "date-changed listener failed"
                    );
                }
            }
        }
        delivery
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    fn event() -> DateChanged {
        let day = Day::from_ymd(2024, 3, 9).unwrap();
        DateChanged {
            date: day,
            previous: day,
            month_changed: false,
        }
    }

    #[test]
    fn failures_are_counted_and_do_not_stop_later_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let log = Rc::clone(&seen);
        listeners.subscribe(move |_| {
            log.borrow_mut().push(1);
            Err(ListenerError::new("title bar gone"))
        });
        let log = Rc::clone(&seen);
        listeners.subscribe(move |_| {
            log.borrow_mut().push(2);
            Ok(())
        });

        let delivery = listeners.emit(&event());
        assert_eq!(
            delivery,
            Delivery {
                delivered: 1,
                failed: 1
            }
        );
        assert!(!delivery.is_clean());
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let mut listeners = Listeners::new();
        let a = listeners.subscribe(|_| Ok(()));
        let b = listeners.subscribe(|_| Ok(()));
        assert_ne!(a, b);

        assert!(listeners.unsubscribe(a));
        assert!(!listeners.unsubscribe(a));
        assert_eq!(listeners.len(), 1);
        assert_eq!(listeners.emit(&event()).delivered, 1);

        assert!(listeners.unsubscribe(b));
        assert!(listeners.is_empty());
        assert_eq!(listeners.emit(&event()), Delivery::default());
    }
}
