//! Event Module
//!
//! Explicit subscription table instead of ad-hoc callback wiring: handlers
//! register per event kind and `dispatch` runs them in registration order.
//! This keeps page behaviors testable without a live rendering surface.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Page events the glue layer reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A priced card was clicked; navigates to its trade page
    CardClicked(String),
    /// The quantity input changed (typed or stepped)
    QuantityChanged(u32),
    /// A form was submitted, by name
    FormSubmitted(String),
    /// The tab was hidden or shown
    VisibilityChanged { hidden: bool },
    /// Page teardown
    PageUnload,
}

/// Hashable discriminant for subscription keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CardClicked,
    QuantityChanged,
    FormSubmitted,
    VisibilityChanged,
    PageUnload,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::CardClicked(_) => EventKind::CardClicked,
            Event::QuantityChanged(_) => EventKind::QuantityChanged,
            Event::FormSubmitted(_) => EventKind::FormSubmitted,
            Event::VisibilityChanged { .. } => EventKind::VisibilityChanged,
            Event::PageUnload => EventKind::PageUnload,
        }
    }
}

type Handler = Box<dyn FnMut(&Event) + Send>;

/// Subscription table: event kind -> handlers
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&Event) + Send + 'static) {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Run every handler registered for this event's kind, in registration
    /// order. Returns how many handlers ran.
    pub fn dispatch(&mut self, event: &Event) -> usize {
        match self.handlers.get_mut(&event.kind()) {
            Some(handlers) => {
                for handler in handlers.iter_mut() {
                    handler(event);
                }
                handlers.len()
            }
            None => 0,
        }
    }
}

/// Wall-clock gate for noisy input events
///
/// `allow` answers whether an event at `now` should pass, swallowing events
/// that arrive within the window of the last allowed one.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window: Duration,
    last_allowed: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_allowed: None,
        }
    }

    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last_allowed {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_allowed = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_dispatch_matches_kind() {
        let mut dispatcher = Dispatcher::new();
        let clicks = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&clicks);
        dispatcher.subscribe(EventKind::CardClicked, move |event| {
            if let Event::CardClicked(symbol) = event {
                assert_eq!(symbol, "AAPL");
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(dispatcher.dispatch(&Event::CardClicked("AAPL".into())), 1);
        assert_eq!(dispatcher.dispatch(&Event::PageUnload), 0);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut dispatcher = Dispatcher::new();
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = Arc::clone(&order);
            dispatcher.subscribe(EventKind::QuantityChanged, move |_| {
                order.lock().unwrap().push(tag);
            });
        }

        dispatcher.dispatch(&Event::QuantityChanged(2));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_debouncer_swallows_rapid_events() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();

        assert!(debouncer.allow(start));
        assert!(!debouncer.allow(start + Duration::from_millis(50)));
        assert!(debouncer.allow(start + Duration::from_millis(150)));
    }
}
