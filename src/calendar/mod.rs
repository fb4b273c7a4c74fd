//! Calendar feed integration: fetching the external iCalendar document and
//! expanding it into concrete occurrences for display.

mod expand;
mod fetch;

pub use expand::*;
pub use fetch::*;
