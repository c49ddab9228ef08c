use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// The place in test source where an assertion was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Captures the call site of the outermost `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The file path as recorded by the compiler.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The final path segment of [`CallSite::file`].
    pub fn file_name(&self) -> &'static str {
        basename(self.file)
    }

    /// Finds the source file on disk.
    ///
    /// The compiler records paths relative to the directory it was invoked
    /// from, which for workspace members is the workspace root rather than the
    /// package being tested. The recorded path is tried first, then relative
    /// to `CARGO_MANIFEST_DIR` and each of its ancestors.
    pub fn source_path(&self) -> Option<PathBuf> {
        let recorded = Path::new(self.file);
        if recorded.is_absolute() || recorded.is_file() {
            return Some(recorded.to_path_buf());
        }
        let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR")?;
        Path::new(&manifest_dir)
            .ancestors()
            .map(|dir| dir.join(recorded))
            .find(|candidate| candidate.is_file())
    }
}

impl From<&Location<'static>> for CallSite {
    fn from(location: &Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

/// Strips everything up to the last `/` or `\`.
///
/// Both separators are honoured regardless of host platform, so a path
/// recorded on Windows renders the same on Unix.
pub fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}
