//! Quantity stepper buttons

use crate::events::Event;

/// Increment/decrement control next to a quantity input
///
/// Decrement floors at 1. Every mutation yields a [`Event::QuantityChanged`]
/// so dependent calculations (the trade total) re-run.
#[derive(Debug, Clone, Copy)]
pub struct QuantityStepper {
    value: u32,
}

impl QuantityStepper {
    pub fn new(value: u32) -> Self {
        Self { value: value.max(1) }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) -> Event {
        self.value += 1;
        Event::QuantityChanged(self.value)
    }

    /// At the floor the value is untouched and no event fires
    pub fn decrement(&mut self) -> Option<Event> {
        if self.value > 1 {
            self.value -= 1;
            Some(Event::QuantityChanged(self.value))
        } else {
            None
        }
    }
}
