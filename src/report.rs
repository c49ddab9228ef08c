//! Diagnostic formatting.

use std::fmt::Debug;

use crate::location::CallSite;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[39m";

/// The label a failure report is tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Title {
    NotPass,
    Error,
}

impl Title {
    pub fn as_str(self) -> &'static str {
        match self {
            Title::NotPass => "[NOT PASS]",
            Title::Error => "[ERROR]",
        }
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `\t<TITLE> <file>:<line>: <description>[: <detail>]\n`
pub fn failure_line(title: Title, site: &CallSite, description: &str, detail: &str) -> String {
    format!("\t{}\n", summary(title, site, description, detail))
}

/// The message a failed assertion panics with.
///
/// Unlike the diagnostic line this is never suppressed; a generic label
/// stands in when no description could be recovered.
pub fn halt_message(
    title: Title,
    site: &CallSite,
    description: Option<&str>,
    detail: &str,
) -> String {
    summary(title, site, description.unwrap_or("assertion failed"), detail)
}

fn summary(title: Title, site: &CallSite, description: &str, detail: &str) -> String {
    if detail.is_empty() {
        format!("{title} {site}: {description}")
    } else {
        format!("{title} {site}: {description}: {detail}")
    }
}

/// The `exp`/`got` block written by the equality assertions.
pub fn comparison<A, E>(
    site: &CallSite,
    expected: &E,
    actual: &A,
    negated: bool,
    color: bool,
) -> String
where
    A: Debug + ?Sized,
    E: Debug + ?Sized,
{
    let (exp, got) = if negated {
        ("nexp: ", "got:  ")
    } else {
        ("exp: ", "got: ")
    };
    paint(
        &format!("\n\t{site}:\n\n\t{exp}{expected:#?}\n\n\t{got}{actual:#?}\n\n"),
        color,
    )
}

/// `\n\t<file>:<line>: <message>\n\n`
pub fn message(site: &CallSite, message: &str, color: bool) -> String {
    paint(&format!("\n\t{site}: {message}\n\n"), color)
}

fn paint(text: &str, color: bool) -> String {
    if color {
        format!("{RED}{text}{RESET}")
    } else {
        text.to_owned()
    }
}
