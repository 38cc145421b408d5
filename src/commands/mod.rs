//! Outward Calls
//!
//! Everything that leaves the page: the joke HTTP request and handing off
//! a submitted contact message.

mod joke;
mod submission;

pub use joke::HttpJokeSource;
pub use submission::report_submission;
