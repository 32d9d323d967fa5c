//! Core value types shared by the formatter and its callers.

mod display_unit;
mod granularity;
mod reminder;
mod theme;

pub use display_unit::*;
pub use granularity::*;
pub use reminder::*;
pub use theme::*;
