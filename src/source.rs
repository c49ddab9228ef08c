use anyhow::{Context as _, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::location::CallSite;

lazy_static! {
    static ref PASS_CALL: Regex =
        Regex::new(r"^\s*unitest::pass\s*\(\s*[^,]+\s*,\s*(.+?)\s*\)\s*;?\s*$").unwrap();
    static ref NOT_ERROR_CALL: Regex =
        Regex::new(r"^\s*unitest::not_error\s*\(\s*[^,]+\s*,\s*(.+?)\s*\)\s*;?\s*$").unwrap();
}

/// The single-line call shapes a description can be recovered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallPattern {
    /// `unitest::pass(t, <description>)`
    Pass,
    /// `unitest::not_error(t, <description>)`
    NotError,
}

impl CallPattern {
    fn regex(self) -> &'static Regex {
        match self {
            CallPattern::Pass => &PASS_CALL,
            CallPattern::NotError => &NOT_ERROR_CALL,
        }
    }

    /// Returns the text of the second argument if `line` is a complete call.
    pub fn extract(self, line: &str) -> Option<&str> {
        self.regex()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Reads the line at `site` from disk.
///
/// The file is read fresh on every call.
pub fn read_line(site: &CallSite) -> Result<String> {
    let path = site
        .source_path()
        .with_context(|| format!("source file {} not found", site.file()))?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    let index = (site.line() as usize)
        .checked_sub(1)
        .context("line numbers start at 1")?;
    text.split('\n')
        .nth(index)
        .map(|line| line.trim_end_matches('\r').to_owned())
        .with_context(|| format!("{} has no line {}", path.display(), site.line()))
}

/// Recovers the description the test author wrote at `site`.
///
/// Failures are logged and swallowed.
pub fn describe(site: &CallSite, pattern: CallPattern) -> Option<String> {
    let line = match read_line(site) {
        Ok(line) => line,
        Err(err) => {
            tracing::debug!("Couldn't read assertion source at {site}: {err:#}");
            return None;
        }
    };
    let description = pattern.extract(&line).map(str::to_owned);
    if description.is_none() {
        tracing::debug!(
            "Assertion at {site} doesn't match the {pattern:?} call shape: {line:?}"
        );
    }
    description
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn pass_pattern() {
        for (line, expected) in [
            ("unitest::pass(&t, x > 0);", Some("x > 0")),
            ("    unitest::pass(&t, x > 0)", Some("x > 0")),
            ("\tunitest::pass ( &t ,  1 == 2 )  ;  ", Some("1 == 2")),
            ("unitest::pass(&t, v.contains(&(1, 2)));", Some("v.contains(&(1, 2))")),
            (r#"unitest::pass(&t, "one equals two");"#, Some(r#""one equals two""#)),
            ("unitest::pass(", None),
            ("unitest::pass(&t);", None),
            ("pass(&t, x > 0);", None),
            ("ut::pass(&t, x > 0);", None),
            ("unitest::not_error(&t, x);", None),
            ("let ok = unitest::pass(&t, x > 0);", None),
        ] {
            assert_eq!(CallPattern::Pass.extract(line), expected, "{line:?}");
        }
    }

    #[test]
    fn not_error_pattern() {
        assert_eq!(
            CallPattern::NotError.extract(r#"  unitest::not_error(&t, "writing file");"#),
            Some(r#""writing file""#)
        );
        assert_eq!(
            CallPattern::NotError.extract("unitest::not_error(&t, &std::fs::write(p, b));"),
            Some("&std::fs::write(p, b)")
        );
        assert_eq!(CallPattern::NotError.extract("unitest::pass(&t, x);"), None);
    }

    #[test]
    fn read_line_is_one_based() {
        let mut file = tempfile::NamedTempFile::with_suffix(".rs").unwrap();
        file.write_all(b"first\r\nsecond\nthird").unwrap();
        let path: &'static str =
            Box::leak(file.path().to_str().unwrap().to_owned().into_boxed_str());

        assert_eq!(read_line(&CallSite::new(path, 1)).unwrap(), "first");
        assert_eq!(read_line(&CallSite::new(path, 2)).unwrap(), "second");
        assert_eq!(read_line(&CallSite::new(path, 3)).unwrap(), "third");
        assert!(read_line(&CallSite::new(path, 4)).is_err());
        assert!(read_line(&CallSite::new(path, 0)).is_err());
    }

    #[test]
    fn describe_swallows_missing_source() {
        let site = CallSite::new("/nonexistent/unitest/source.rs", 3);
        assert_eq!(describe(&site, CallPattern::Pass), None);
    }

    #[test]
    fn describe_reads_the_call() {
        let mut file = tempfile::NamedTempFile::with_suffix(".rs").unwrap();
        writeln!(file, "fn it() {{").unwrap();
        writeln!(file, "    unitest::not_error(&t, open(path));").unwrap();
        writeln!(file, "}}").unwrap();
        let path: &'static str =
            Box::leak(file.path().to_str().unwrap().to_owned().into_boxed_str());

        let site = CallSite::new(path, 2);
        assert_eq!(
            describe(&site, CallPattern::NotError).as_deref(),
            Some("open(path)")
        );
        assert_eq!(describe(&site, CallPattern::Pass), None);
    }
}
