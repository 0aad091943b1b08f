//! Bridge to the `log` crate, so `log::info!` and friends from the program
//! and its dependencies go to the same sink.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::{Mutex, MutexGuard};

use no_std_io::Write;

use crate::level::{SeverityLevel, Tier, STATIC_MAX_LEVEL};
use crate::logger::Logger;

/// A [`Logger`] behind a spin lock, usable as the global `log` logger.
///
/// `log` records are mapped to tiers with `Tier::from(record.level())` and
/// written with the usual framing.
pub struct SharedLogger<S> {
    inner: Mutex<Logger<S>>,
}

impl<S> SharedLogger<S> {
    pub const fn new() -> SharedLogger<S> {
        SharedLogger {
            inner: Mutex::new(Logger::new()),
        }
    }

    pub fn initialize(&self, level: SeverityLevel, sink: S) {
        self.inner.lock().initialize(level, sink);
    }

    /// Direct access, e.g. for printf-style calls.
    ///
    /// While the guard is held, `log` records for this logger are dropped,
    /// and another `lock` on the same core spins forever.
    pub fn lock(&self) -> MutexGuard<Logger<S>> {
        self.inner.lock()
    }
}

impl<S> Default for SharedLogger<S> {
    fn default() -> SharedLogger<S> {
        SharedLogger::new()
    }
}

impl<S> Log for SharedLogger<S>
where
    S: Write + Send,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner
            .try_lock()
            .map_or(false, |logger| logger.is_enabled(Tier::from(metadata.level())))
    }

    /// Records arriving while the logger is locked, e.g. from an interrupt
    /// handler, are dropped.
    fn log(&self, record: &Record) {
        if let Some(mut logger) = self.inner.try_lock() {
            logger.emit_fmt(Tier::from(record.level()), *record.args());
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the global `log` logger.
///
/// The `log` max level is set to the compile-time ceiling; the runtime level
/// stays with `logger` and can be changed by re-initializing it.
pub fn init<S>(logger: &'static SharedLogger<S>) -> Result<(), SetLoggerError>
where
    S: Write + Send + 'static,
{
    log::set_logger(logger).map(|()| log::set_max_level(LevelFilter::from(STATIC_MAX_LEVEL)))
}

#[cfg(test)]
mod tests {

    use super::*;
    use log::Level;

    use crate::sink::BufferSink;

    #[derive(Default)]
    struct Collect {
        bytes: Vec<u8>,
    }

    impl Write for Collect {
        fn write_byte(&mut self, byte: u8) -> no_std_io::Result<()> {
            self.bytes.push(byte);
            Ok(())
        }
    }

    static GLOBAL: SharedLogger<Collect> = SharedLogger::new();

    fn text(logger: &SharedLogger<Collect>) -> String {
        logger
            .lock()
            .sink()
            .map(|c| String::from_utf8(c.bytes.clone()).unwrap())
            .unwrap_or_default()
    }

    #[test]
    fn test_records_use_tier_framing() {
        let mut storage = [0u8; 64];
        let shared = SharedLogger::new();
        shared.initialize(SeverityLevel::Info, BufferSink::new(&mut storage));

        shared.log(&Record::builder().level(Level::Error).args(format_args!("disk {}", "full")).build());
        shared.log(&Record::builder().level(Level::Warn).args(format_args!("low {}", 3)).build());
        shared.log(&Record::builder().level(Level::Debug).args(format_args!("hidden")).build());

        assert_eq!(
            Some("Error: disk full\nlow 3\n"),
            shared.lock().sink().map(|s| s.as_str())
        );
    }

    #[test]
    fn test_enabled_follows_level() {
        if !crate::level::ceiling_allows(SeverityLevel::Verbose) {
            return;
        }

        let shared: SharedLogger<Collect> = SharedLogger::new();
        let error = Metadata::builder().level(Level::Error).build();
        let trace = Metadata::builder().level(Level::Trace).build();

        assert!(!shared.enabled(&error));

        shared.initialize(SeverityLevel::Debug, Collect::default());
        assert!(shared.enabled(&error));
        assert!(!shared.enabled(&trace));

        shared.initialize(SeverityLevel::Verbose, Collect::default());
        assert!(shared.enabled(&trace));
    }

    #[test]
    fn test_records_dropped_while_locked() {
        let shared = SharedLogger::new();
        shared.initialize(SeverityLevel::Verbose, Collect::default());
        let info = Metadata::builder().level(Level::Info).build();

        {
            let mut guard = shared.lock();
            guard.info("held", &[]);

            shared.log(&Record::builder().level(Level::Info).args(format_args!("dropped")).build());
            assert!(!shared.enabled(&info));
        }

        shared.log(&Record::builder().level(Level::Info).args(format_args!("after")).build());

        assert!(shared.enabled(&info));
        assert_eq!("held\nafter\n", text(&shared));
    }

    #[test]
    fn test_global_logger() {
        init(&GLOBAL).unwrap();
        GLOBAL.initialize(SeverityLevel::Info, Collect::default());

        log::info!("started {}", 1);
        log::debug!("not shown");
        GLOBAL.lock().error("code %x", &[0x1fu8.into()]);

        assert_eq!("started 1\nError: code 1f\n", text(&GLOBAL));
        assert_eq!(LevelFilter::from(STATIC_MAX_LEVEL), log::max_level());
        assert!(init(&GLOBAL).is_err());
    }
}
