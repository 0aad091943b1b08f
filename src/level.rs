use core::convert::TryFrom;
use core::fmt;

use log::{Level, LevelFilter};

use crate::Error;

/// Threshold configured on a logger.
///
/// Ordered: a tier is emitted when it is less than or equal to the level,
/// except that errors are emitted at every level but `Silent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SeverityLevel {
    Silent = 0,
    Errors = 1,
    Info = 2,
    Debug = 3,
    Verbose = 4,
}

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: SeverityLevel = SeverityLevel::Debug;

/// Highest level that can ever be emitted by this build.
pub const STATIC_MAX_LEVEL: SeverityLevel = if cfg!(feature = "max_level_off") {
    SeverityLevel::Silent
} else if cfg!(feature = "max_level_errors") {
    SeverityLevel::Errors
} else if cfg!(feature = "max_level_info") {
    SeverityLevel::Info
} else if cfg!(feature = "max_level_debug") {
    SeverityLevel::Debug
} else {
    SeverityLevel::Verbose
};

impl SeverityLevel {
    /// Anything above `Verbose` behaves as `Verbose`.
    pub const fn from_raw(value: u8) -> SeverityLevel {
        match value {
            0 => SeverityLevel::Silent,
            1 => SeverityLevel::Errors,
            2 => SeverityLevel::Info,
            3 => SeverityLevel::Debug,
            _ => SeverityLevel::Verbose,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            SeverityLevel::Silent => "SILENT",
            SeverityLevel::Errors => "ERRORS",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::Verbose => "VERBOSE",
        }
    }
}

impl Default for SeverityLevel {
    fn default() -> SeverityLevel {
        SeverityLevel::Silent
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            0..=4 => Ok(SeverityLevel::from_raw(value)),
            _ => Err(Error::UnknownLevel(value)),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<SeverityLevel> for LevelFilter {
    fn from(level: SeverityLevel) -> LevelFilter {
        match level {
            SeverityLevel::Silent => LevelFilter::Off,
            SeverityLevel::Errors => LevelFilter::Error,
            SeverityLevel::Info => LevelFilter::Info,
            SeverityLevel::Debug => LevelFilter::Debug,
            SeverityLevel::Verbose => LevelFilter::Trace,
        }
    }
}

impl From<LevelFilter> for SeverityLevel {
    fn from(filter: LevelFilter) -> SeverityLevel {
        match filter {
            LevelFilter::Off => SeverityLevel::Silent,
            LevelFilter::Error => SeverityLevel::Errors,
            LevelFilter::Warn | LevelFilter::Info => SeverityLevel::Info,
            LevelFilter::Debug => SeverityLevel::Debug,
            LevelFilter::Trace => SeverityLevel::Verbose,
        }
    }
}

/// Importance of a single log call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    Error = 1,
    Info = 2,
    Debug = 3,
    Verbose = 4,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Error, Tier::Info, Tier::Debug, Tier::Verbose];

    #[inline]
    pub fn is_enabled_at(self, level: SeverityLevel) -> bool {
        let level = level.min(STATIC_MAX_LEVEL);

        match self {
            Tier::Error => level != SeverityLevel::Silent,
            tier => level.as_raw() >= tier as u8,
        }
    }

    /// Text written in front of every message of this tier.
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Tier::Error => "Error: ",
            _ => "",
        }
    }
}

impl From<Level> for Tier {
    fn from(level: Level) -> Tier {
        match level {
            Level::Error => Tier::Error,
            Level::Warn | Level::Info => Tier::Info,
            Level::Debug => Tier::Debug,
            Level::Trace => Tier::Verbose,
        }
    }
}

/// Whether the compile-time ceiling lets `level` through, for tests that
/// need output at that level.
#[cfg(test)]
pub(crate) fn ceiling_allows(level: SeverityLevel) -> bool {
    level <= STATIC_MAX_LEVEL
}
