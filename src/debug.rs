//! Diagnostics emitted by the match engine.
//!
//! Every context owns a [`DebugChannel`] that the engine calls back into. When the context was
//! created without debugging, the channel reports itself disabled and the engine skips building
//! messages entirely; the channel also drops anything it receives without decoding it.

// std imports
use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

// third-party imports
use match_engine::{Host, Level};
use owo_colors::{OwoColorize, Style};

// ---

/// Receiver of decoded engine diagnostics.
pub trait DebugSink: Send + Sync {
    fn record(&self, record: &Record<'_>);
}

// ---

/// A single decoded diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub context: u64,
    pub level: Level,
    pub payload: Payload<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Payload::Text(text) => write!(f, "[context {} {}]: {}", self.context, self.level, text),
            Payload::Bytes(bytes) => {
                write!(f, "[context {} BYTES]: ", self.context)?;
                for (i, b) in bytes.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", b)?;
                }
                f.write_str(" (ASCII: '")?;
                for &b in bytes {
                    let ch = if (32..127).contains(&b) { b as char } else { '.' };
                    write!(f, "{}", ch)?;
                }
                f.write_str("')")
            }
        }
    }
}

/// Returns the style used to render records of the given level.
pub fn level_style(level: Level) -> Style {
    match level {
        Level::Error => Style::new().bright_red().bold(),
        Level::Warn => Style::new().yellow(),
        Level::Info => Style::new().green(),
        Level::Debug => Style::new().cyan(),
        Level::Trace => Style::new().dimmed(),
    }
}

// ---

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub const TARGET: &'static str = "wsmatch::engine";
}

impl DebugSink for LogSink {
    fn record(&self, record: &Record<'_>) {
        let level = match record.level {
            Level::Error => log::Level::Error,
            Level::Warn => log::Level::Warn,
            Level::Info => log::Level::Info,
            Level::Debug => log::Level::Debug,
            Level::Trace => log::Level::Trace,
        };
        log::log!(target: Self::TARGET, level, "{}", record);
    }
}

// ---

/// Renders diagnostics as lines to a writer, styled by level.
pub struct StyledSink<W> {
    out: Mutex<W>,
    color: bool,
}

impl<W: Write + Send> StyledSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> DebugSink for StyledSink<W> {
    fn record(&self, record: &Record<'_>) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if self.color {
            writeln!(out, "{}", record.style(level_style(record.level))).ok();
        } else {
            writeln!(out, "{}", record).ok();
        }
    }
}

// ---

/// Engine callback endpoint bound to one context.
#[derive(Clone)]
pub struct DebugChannel {
    context: u64,
    enabled: bool,
    sink: Arc<dyn DebugSink>,
}

impl DebugChannel {
    pub fn new(context: u64, enabled: bool, sink: Arc<dyn DebugSink>) -> Self {
        Self { context, enabled, sink }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn deliver(&self, level: Level, payload: Payload<'_>) {
        self.sink.record(&Record {
            context: self.context,
            level,
            payload,
        });
    }
}

impl Host for DebugChannel {
    #[inline]
    fn debug_enabled(&self) -> bool {
        self.enabled
    }

    fn log_string(&self, level: Level, message: &[u8]) {
        if !self.enabled {
            return;
        }
        let text: Cow<'_, str> = String::from_utf8_lossy(message);
        self.deliver(level, Payload::Text(&text));
    }

    fn log_bytes(&self, level: Level, bytes: &[u8]) {
        if !self.enabled {
            return;
        }
        self.deliver(level, Payload::Bytes(bytes));
    }
}

impl fmt::Debug for DebugChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugChannel")
            .field("context", &self.context)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
