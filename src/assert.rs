//! Assertion functions.
//!
//! Each assertion returns normally when it holds. When it doesn't, it writes a
//! diagnostic through the [`TestContext`] and panics, stopping the current
//! test. All of them are `#[track_caller]`, so the reported location is the
//! line in the test that called them.

use std::fmt::{Debug, Display};

use crate::context::TestContext;
use crate::location::CallSite;
use crate::report::{self, Title};
use crate::source::{self, CallPattern};

/// A value that may carry an error.
pub trait Fallible {
    /// The error's message, or `None` on success.
    fn error_message(&self) -> Option<String>;
}

impl<T, E: Display> Fallible for Result<T, E> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().err().map(ToString::to_string)
    }
}

impl<T, E: Display> Fallible for &Result<T, E> {
    fn error_message(&self) -> Option<String> {
        (**self).error_message()
    }
}

impl<E: Display> Fallible for Option<E> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().map(ToString::to_string)
    }
}

/// Asserts that `condition` holds.
///
/// On failure, and when the call fits on one line as
/// `unitest::pass(t, <expr>);`, the text of `<expr>` is quoted:
///
/// ```text
///     [NOT PASS] disk.rs:12: queue.len() > 0
/// ```
#[track_caller]
pub fn pass(t: &TestContext, condition: bool) -> bool {
    if condition {
        return true;
    }
    fail(t, CallSite::caller(), Title::NotPass, CallPattern::Pass, "")
}

/// Asserts that `err` carries no error.
///
/// Accepts a `Result` (by value or reference) or an `Option` of an error. The
/// error's message is appended to the quoted call:
///
/// ```text
///     [ERROR] disk.rs:20: &fs::write(&path, data): No space left on device
/// ```
#[track_caller]
pub fn not_error(t: &TestContext, err: impl Fallible) -> bool {
    match err.error_message() {
        None => true,
        Some(message) => fail(
            t,
            CallSite::caller(),
            Title::Error,
            CallPattern::NotError,
            &message,
        ),
    }
}

/// Asserts that `actual` and `expected` are structurally equal.
#[track_caller]
pub fn equal<A, E>(t: &TestContext, actual: A, expected: E)
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    if actual != expected {
        let site = CallSite::caller();
        t.emit(&report::comparison(&site, &expected, &actual, false, t.color()));
        t.fail_now(format_args!("{site}: values are not equal"));
    }
}

/// Asserts that `actual` and `expected` are not structurally equal.
#[track_caller]
pub fn not_equal<A, E>(t: &TestContext, actual: A, expected: E)
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    if actual == expected {
        let site = CallSite::caller();
        t.emit(&report::comparison(&site, &expected, &actual, true, t.color()));
        t.fail_now(format_args!("{site}: values are equal"));
    }
}

/// Asserts that `condition` holds, reporting `message` otherwise.
///
/// For call sites that don't fit on one line, or when the asserted
/// expression alone doesn't say enough.
#[track_caller]
pub fn check(t: &TestContext, condition: bool, message: impl Display) {
    if !condition {
        let site = CallSite::caller();
        let message = message.to_string();
        t.emit(&report::message(&site, &message, t.color()));
        t.fail_now(format_args!("{site}: {message}"));
    }
}

#[track_caller]
fn fail(t: &TestContext, site: CallSite, title: Title, pattern: CallPattern, detail: &str) -> ! {
    let description = source::describe(&site, pattern);
    if let Some(description) = &description {
        t.emit(&report::failure_line(title, &site, description, detail));
    }
    t.fail_now(format_args!(
        "{}",
        report::halt_message(title, &site, description.as_deref(), detail)
    ))
}
