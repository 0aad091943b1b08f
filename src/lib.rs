//! Leveled logging for small embedded programs.
//!
//! A [`Logger`] holds a [`SeverityLevel`] and a sink implementing
//! [`no_std_io::Write`]. Each of the four tiers (error, info, debug,
//! verbose) formats a printf-style template and writes it, newline
//! terminated, when the level lets it through.
//!
//! ```
//! use logging::sink::BufferSink;
//! use logging::{log_error, log_info, Logger, SeverityLevel};
//!
//! let mut storage = [0u8; 64];
//! let mut logger = Logger::new();
//! logger.initialize(SeverityLevel::Info, BufferSink::new(&mut storage));
//!
//! log_info!(logger, "%d apples, %s left", 3, "none");
//! log_error!(logger, "disk full");
//!
//! assert_eq!(
//!     Some("3 apples, none left\nError: disk full\n"),
//!     logger.sink().map(|s| s.as_str())
//! );
//! ```
#![cfg_attr(not(test), no_std)]

extern crate bitfield;
extern crate log;
extern crate no_std_io;
extern crate spin;
extern crate volatile;

pub mod facade;
pub mod format;
mod level;
mod logger;
pub mod serial;
pub mod sink;
mod strings;

use core::fmt;

pub use self::facade::SharedLogger;
pub use self::format::Arg;
pub use self::level::{SeverityLevel, Tier, DEFAULT_LEVEL, STATIC_MAX_LEVEL};
pub use self::logger::Logger;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A raw level above `Verbose`
    UnknownLevel(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnknownLevel(value) => write!(f, "unknown severity level {}", value),
        }
    }
}

/// Emit at `tier`, boxing each argument with [`Arg::from`].
#[macro_export]
macro_rules! log_emit {
    ($logger:expr, $tier:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.emit($tier, $format, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)*) => { $crate::log_emit!($logger, $crate::Tier::Error, $($rest)*) }
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)*) => { $crate::log_emit!($logger, $crate::Tier::Info, $($rest)*) }
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($rest:tt)*) => { $crate::log_emit!($logger, $crate::Tier::Debug, $($rest)*) }
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($rest:tt)*) => { $crate::log_emit!($logger, $crate::Tier::Verbose, $($rest)*) }
}
