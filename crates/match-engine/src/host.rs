use std::fmt;

/// Severity of a diagnostic message emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callbacks the engine may invoke on its embedder.
///
/// Messages are passed as raw bytes; decoding and rendering are up to the host.
/// The engine calls [`Host::debug_enabled`] before building any message, so a host returning `false`
/// costs one call per diagnostic site and nothing else.
pub trait Host {
    fn debug_enabled(&self) -> bool;

    /// Receives a UTF-8 encoded text message.
    fn log_string(&self, level: Level, message: &[u8]);

    /// Receives a raw byte dump.
    fn log_bytes(&self, level: Level, bytes: &[u8]);
}

/// Host that discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHost;

impl Host for NoHost {
    #[inline]
    fn debug_enabled(&self) -> bool {
        false
    }

    #[inline]
    fn log_string(&self, _: Level, _: &[u8]) {}

    #[inline]
    fn log_bytes(&self, _: Level, _: &[u8]) {}
}

// ---

macro_rules! emit {
    ($host:expr, $level:expr, $($arg:tt)+) => {
        if $host.debug_enabled() {
            $host.log_string($level, format!($($arg)+).as_bytes());
        }
    };
}

pub(crate) use emit;
