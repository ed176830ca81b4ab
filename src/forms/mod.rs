//! Form & Input Helpers
//!
//! Non-core page behaviors: required-field validation, the trade form's
//! running total with its large-trade confirmation gate, and the quantity
//! stepper buttons. None of these share state with the sync loop.

mod stepper;
mod trade;
mod validate;

pub use stepper::QuantityStepper;
pub use trade::TradeForm;
pub use validate::{guard_submission, validate_required};
