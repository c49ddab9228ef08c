use std::ffi::OsString;
use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// The handle every assertion takes.
///
/// It decides where diagnostics go and whether they are coloured. Failing an
/// assertion panics the current thread, which is how libtest marks a test as
/// failed and stops it.
pub struct TestContext {
    sink: Sink,
    color: bool,
}

enum Sink {
    /// `eprint!`, so libtest captures the output per test.
    Stderr,
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl TestContext {
    /// Creates a context that writes to stderr.
    ///
    /// Colour is on unless `NO_COLOR` is set to a non-empty value.
    pub fn new() -> Self {
        Self {
            sink: Sink::Stderr,
            color: color_enabled(std::env::var_os("NO_COLOR")),
        }
    }

    /// Sends diagnostics to `writer` instead of stderr.
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Sink::Writer(Mutex::new(Box::new(writer)));
        self
    }

    /// Forces ANSI colour on or off, ignoring `NO_COLOR`.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether comparison blocks are wrapped in ANSI red.
    pub fn color(&self) -> bool {
        self.color
    }

    pub(crate) fn emit(&self, text: &str) {
        match &self.sink {
            Sink::Stderr => eprint!("{text}"),
            Sink::Writer(writer) => {
                let mut writer = match writer.lock() {
                    Ok(writer) => writer,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let written = writer
                    .write_all(text.as_bytes())
                    .and_then(|_| writer.flush());
                if let Err(err) = written {
                    tracing::debug!("Couldn't write assertion diagnostic: {err}");
                }
            }
        }
    }

    /// Stops the current test.
    #[track_caller]
    pub(crate) fn fail_now(&self, message: fmt::Arguments<'_>) -> ! {
        panic!("{message}")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = match self.sink {
            Sink::Stderr => "stderr",
            Sink::Writer(_) => "writer",
        };
        f.debug_struct("TestContext")
            .field("sink", &sink)
            .field("color", &self.color)
            .finish()
    }
}

fn color_enabled(no_color: Option<OsString>) -> bool {
    no_color.is_none_or(|value| value.is_empty())
}
