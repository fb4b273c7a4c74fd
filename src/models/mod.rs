//! Data models for the potluck group application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod calendar;
mod event;
mod recipe;
mod rsvp;
mod shared_content;

pub use calendar::*;
pub use event::*;
pub use recipe::*;
pub use rsvp::*;
pub use shared_content::*;
