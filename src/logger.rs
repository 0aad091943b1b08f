use core::fmt;

use no_std_io::{Result, Write};

use crate::format::{write_formatted, Arg};
use crate::level::{SeverityLevel, Tier, DEFAULT_LEVEL};

/// Severity-gated logger writing to a caller supplied sink.
///
/// A new logger is silent and has no sink; nothing is written until
/// [`Logger::initialize`] is called. To keep ownership of the device, pass
/// `&mut device` as the sink.
///
/// Every emitted message ends with a newline, and error messages start with
/// `"Error: "`. Sink failures are ignored and may leave a partial message.
#[derive(Debug)]
pub struct Logger<S> {
    level: SeverityLevel,
    sink: Option<S>,
}

impl<S> Logger<S> {
    pub const fn new() -> Logger<S> {
        Logger {
            level: SeverityLevel::Silent,
            sink: None,
        }
    }

    /// A logger at [`DEFAULT_LEVEL`] writing to `sink`.
    pub fn with_sink(sink: S) -> Logger<S> {
        Logger {
            level: DEFAULT_LEVEL,
            sink: Some(sink),
        }
    }

    /// Replace both the level and the sink. The previous sink is dropped.
    pub fn initialize(&mut self, level: SeverityLevel, sink: S) {
        self.level = level;
        self.sink = Some(sink);
    }

    pub fn level(&self) -> SeverityLevel {
        self.level
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Whether a message of `tier` would reach the sink.
    pub fn is_enabled(&self, tier: Tier) -> bool {
        self.sink.is_some() && tier.is_enabled_at(self.level)
    }
}

impl<S> Default for Logger<S> {
    fn default() -> Logger<S> {
        Logger::new()
    }
}

impl<S> Logger<S>
where
    S: Write,
{
    /// Emitted at every level except `Silent`.
    pub fn error(&mut self, format: &str, args: &[Arg]) {
        self.emit(Tier::Error, format, args)
    }

    pub fn info(&mut self, format: &str, args: &[Arg]) {
        self.emit(Tier::Info, format, args)
    }

    pub fn debug(&mut self, format: &str, args: &[Arg]) {
        self.emit(Tier::Debug, format, args)
    }

    pub fn verbose(&mut self, format: &str, args: &[Arg]) {
        self.emit(Tier::Verbose, format, args)
    }

    /// Format `format` with `args` and write it if `tier` is enabled.
    ///
    /// See [`crate::format`] for the placeholders.
    pub fn emit(&mut self, tier: Tier, format: &str, args: &[Arg]) {
        if !tier.is_enabled_at(self.level) {
            return;
        }

        if let Some(sink) = self.sink.as_mut() {
            write_message(sink, tier, |sink| write_formatted(sink, format, args)).ok();
        }
    }

    /// Same gate and framing as [`Logger::emit`] for a message already built
    /// with `format_args!`.
    pub fn emit_fmt(&mut self, tier: Tier, args: fmt::Arguments) {
        if !tier.is_enabled_at(self.level) {
            return;
        }

        if let Some(sink) = self.sink.as_mut() {
            write_message(sink, tier, |sink| {
                fmt::write(&mut FmtAdapter(sink), args).map_err(|_| ())
            })
            .ok();
        }
    }
}

fn write_message<S, F>(sink: &mut S, tier: Tier, body: F) -> Result<()>
where
    S: Write + ?Sized,
    F: FnOnce(&mut S) -> Result<()>,
{
    let prefix = tier.prefix();
    if !prefix.is_empty() {
        sink.write_str(prefix)?;
    }

    body(sink)?;

    sink.write_byte(b'\n')
}

/// Lets `core::fmt` machinery write into a sink.
struct FmtAdapter<'a, S: ?Sized>(&'a mut S);

impl<'a, S> fmt::Write for FmtAdapter<'a, S>
where
    S: Write + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s).map_err(|_| fmt::Error)
    }
}
