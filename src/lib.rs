//! Test assertions that quote the asserting source line on failure.
//!
//! ```
//! let t = unitest::TestContext::new();
//! let queue = vec![1];
//! unitest::pass(&t, !queue.is_empty());
//! unitest::equal(&t, queue, vec![1]);
//! ```
//!
//! A failing [`pass`] or [`not_error`] re-reads the line it was called from
//! and, if the whole call sits on that one line, prints the asserted
//! expression:
//!
//! ```text
//!     [NOT PASS] queue.rs:4: !queue.is_empty()
//! ```
//!
//! Calls split over several lines, imported with `use`, or made through a
//! renamed crate still fail the test but print nothing.

mod assert;
mod context;
mod location;
mod report;
mod source;
pub mod testing;

pub use assert::{check, equal, not_equal, not_error, pass, Fallible};
pub use context::TestContext;
pub use location::CallSite;
