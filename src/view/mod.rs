//! View Module
//!
//! Typed state for the rendered page plus the pure render passes that map a
//! price snapshot onto it. Rendering never touches a surface directly; it
//! emits a [`Patch`] list that the controller applies to both the view state
//! and whatever surface is attached.

mod page;
mod patch;
pub mod render;

pub use page::{PageView, PortfolioRow, Route, StockCard};
pub use patch::{ChangeClass, FlashDirection, Patch};
