//! Reusable accelerated matching sessions.
//!
//! A [`MatchContext`] marshals a rule set into its own arena once and then evaluates any number of
//! inputs against it in the match engine. Only the input is re-encoded per call.
//!
//! ```
//! use wsmatch::MatchContext;
//!
//! let mut ctx = MatchContext::create(["eslint-*", "!eslint-plugin-*"], false)?;
//! assert!(ctx.matches("eslint-config-foo")?);
//! assert!(!ctx.matches("eslint-plugin-foo")?);
//! ctx.dispose();
//! # Ok::<(), wsmatch::error::Error>(())
//! ```

// std imports
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

// third-party imports
use match_engine::{Instance, Limits, MatcherId, Module};

// local imports
use crate::arena::{MemoryArena, TableLayout};
use crate::debug::{DebugChannel, DebugSink, LogSink};
use crate::error::{Error, Result, Subject};

// ---

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

// ---

/// Options for creating a [`MatchContext`].
#[derive(Clone)]
pub struct ContextOptions {
    debug: bool,
    module: Arc<Module>,
    sink: Arc<dyn DebugSink>,
}

impl ContextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables engine diagnostics.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Uses an engine module compiled for the given limits instead of the shared default one.
    pub fn limits(mut self, limits: Limits) -> Self {
        if *self.module.limits() != limits {
            self.module = Arc::new(Module::new(limits));
        }
        self
    }

    /// Uses the given engine module.
    pub fn module(mut self, module: Arc<Module>) -> Self {
        self.module = module;
        self
    }

    /// Sets the receiver of engine diagnostics.
    pub fn sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            debug: false,
            module: Module::shared(),
            sink: Arc::new(LogSink),
        }
    }
}

// ---

/// Accelerated matching session bound to one rule set.
///
/// The context must be released with [`MatchContext::dispose`] when no longer needed.
/// Dispose is idempotent; any other call after it fails with [`Error::UseAfterDispose`].
#[derive(Debug)]
pub struct MatchContext {
    id: u64,
    state: Option<Session>,
}

#[derive(Debug)]
struct Session {
    arena: MemoryArena,
    layout: TableLayout,
    instance: Instance,
    matcher: MatcherId,
    channel: DebugChannel,
}

impl MatchContext {
    /// Creates a context for `patterns` with default options.
    pub fn create<I>(patterns: I, debug: bool) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_options(patterns, ContextOptions::default().debug(debug))
    }

    /// Creates a context for `patterns`.
    pub fn with_options<I>(patterns: I, options: ContextOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let id = NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed);
        let patterns: Vec<I::Item> = patterns.into_iter().collect();
        let session = Session::initialize(id, &patterns, options)?;
        log::debug!("context {} created with {} patterns", id, patterns.len());

        Ok(Self {
            id,
            state: Some(session),
        })
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Evaluates `input` against the rule set of this context.
    pub fn matches(&mut self, input: &str) -> Result<bool> {
        self.state.as_mut().ok_or(Error::UseAfterDispose)?.matches(input)
    }

    /// Returns the current arena size in bytes.
    pub fn capacity(&self) -> Result<usize> {
        Ok(self.state.as_ref().ok_or(Error::UseAfterDispose)?.arena.capacity())
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.state.is_none()
    }

    /// Releases engine-side matcher state and the arena.
    pub fn dispose(&mut self) {
        if let Some(mut session) = self.state.take() {
            session.instance.dispose_matcher(session.matcher, &session.channel);
            session.arena.release();
            log::debug!("context {} disposed", self.id);
        }
    }
}

impl Session {
    fn initialize<S: AsRef<str>>(id: u64, patterns: &[S], options: ContextOptions) -> Result<Self> {
        let limits = *options.module.limits();
        let guard_size = u32::try_from(limits.guard_size).map_err(|_| Error::InvalidPatternSize {
            subject: Subject::PatternTable,
            len: limits.guard_size,
            limit: u32::MAX as usize,
        })?;

        let mut arena = MemoryArena::new(limits.page_size, guard_size)?;
        let channel = DebugChannel::new(id, options.debug, options.sink);
        let mut instance = options.module.instantiate();

        let encoded: Vec<&[u8]> = patterns.iter().map(|p| p.as_ref().as_bytes()).collect();
        for (index, bytes) in encoded.iter().enumerate() {
            if bytes.len() > limits.max_encoded_size {
                return Err(Error::InvalidPatternSize {
                    subject: Subject::Pattern(index),
                    len: bytes.len(),
                    limit: limits.max_encoded_size,
                });
            }
        }

        let layout = TableLayout::plan(arena.guard(), encoded.iter().map(|bytes| bytes.len()))?;
        arena.reserve(layout.table_end())?;

        let table = arena.view_mut(layout.patterns());
        let mut cursor = 0;
        for bytes in &encoded {
            table[cursor..cursor + bytes.len()].copy_from_slice(bytes);
            table[cursor + bytes.len()] = 0;
            cursor += bytes.len() + 1;
        }

        let lengths = arena.view_mut(layout.lengths());
        for (slot, bytes) in lengths.chunks_exact_mut(4).zip(&encoded) {
            slot.copy_from_slice(&(bytes.len() as u32).to_le_bytes());
        }

        let matcher = instance.init_matcher(
            arena.bytes(),
            layout.patterns().offset(),
            layout.lengths().offset(),
            layout.count(),
            &channel,
        )?;

        Ok(Self {
            arena,
            layout,
            instance,
            matcher,
            channel,
        })
    }

    fn matches(&mut self, input: &str) -> Result<bool> {
        let bytes = input.as_bytes();
        let limit = self.instance.module().limits().max_encoded_size;
        if bytes.len() > limit {
            return Err(Error::InvalidPatternSize {
                subject: Subject::Input,
                len: bytes.len(),
                limit,
            });
        }

        let region = self.layout.input(bytes.len())?;
        self.arena.reserve(region.end())?;
        self.arena.view_mut(region).copy_from_slice(bytes);

        Ok(self.instance.match_pattern(
            self.arena.bytes(),
            self.matcher,
            region.offset(),
            region.len(),
            &self.channel,
        )?)
    }
}
