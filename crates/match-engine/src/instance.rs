// std imports
use std::fmt;
use std::sync::Arc;

// local imports
use crate::host::{Host, Level, emit};
use crate::matcher::{self, NEGATION};
use crate::module::Module;
use crate::{Fault, Result};

// ---

/// Opaque identifier of a matcher registered in an [`Instance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatcherId(u32);

impl fmt::Display for MatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---

/// Per-embedder engine state.
///
/// An instance keeps the location of every registered pattern table. Tables are read from the
/// memory passed to each call, so the memory may be relocated between calls as long as the offsets
/// stay valid.
#[derive(Debug)]
pub struct Instance {
    module: Arc<Module>,
    matchers: Vec<Option<Matcher>>,
}

impl Instance {
    pub(crate) fn new(module: Arc<Module>) -> Self {
        Self {
            module,
            matchers: Vec::new(),
        }
    }

    #[inline]
    pub fn module(&self) -> &Arc<Module> {
        &self.module
    }

    /// Returns the number of live matchers.
    pub fn live_matchers(&self) -> usize {
        self.matchers.iter().filter(|m| m.is_some()).count()
    }

    /// Registers the pattern table found at `patterns`/`lengths` and returns its matcher id.
    pub fn init_matcher(
        &mut self,
        memory: &[u8],
        patterns: u32,
        lengths: u32,
        count: u32,
        host: &dyn Host,
    ) -> Result<MatcherId> {
        let limit = self.module.limits().max_patterns;
        if count > limit {
            return Err(Fault::TableTooLarge { count, limit });
        }

        let table = slice(memory, lengths, count.checked_mul(4).ok_or(Fault::TableTooLarge { count, limit })?)?;
        let mut rules = Vec::with_capacity(count as usize);
        let mut cursor = patterns;

        for (index, chunk) in table.chunks_exact(4).enumerate() {
            let len = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let stored = slice(memory, cursor, len.saturating_add(1))?;
            let (body, terminator) = stored.split_at(len as usize);
            if terminator != [0] {
                return Err(Fault::Unterminated { index: index as u32 });
            }
            if host.debug_enabled() {
                host.log_bytes(Level::Trace, body);
            }

            let next = cursor
                .checked_add(len)
                .and_then(|end| end.checked_add(1))
                .ok_or(Fault::OutOfBounds { offset: cursor, len, size: memory.len() })?;
            let negated = body.first() == Some(&NEGATION);
            let skip = u32::from(negated);
            rules.push(Rule {
                negated,
                offset: cursor + skip,
                len: len - skip,
            });
            cursor = next;
        }

        let id = MatcherId(self.matchers.len() as u32);
        self.matchers.push(Some(Matcher { rules }));
        emit!(host, Level::Debug, "matcher {id} registered with {count} patterns at offset {patterns}");

        Ok(id)
    }

    /// Evaluates the input at `input` against the rules of matcher `id`.
    ///
    /// The last matching rule decides the verdict, so the rules are scanned from the end and the scan
    /// stops at the first hit.
    pub fn match_pattern(&self, memory: &[u8], id: MatcherId, input: u32, input_len: u32, host: &dyn Host) -> Result<bool> {
        let matcher = self.matcher(id)?;
        let input = slice(memory, input, input_len)?;

        for (index, rule) in matcher.rules.iter().enumerate().rev() {
            let body = slice(memory, rule.offset, rule.len)?;
            if matcher::matches(body, input) {
                emit!(host, Level::Debug, "matcher {id}: rule {index} matched, negated={}", rule.negated);
                return Ok(!rule.negated);
            }
        }

        emit!(host, Level::Debug, "matcher {id}: no rule matched {input_len} input bytes");
        Ok(false)
    }

    /// Releases the state of matcher `id`. Returns `false` if it was already released.
    pub fn dispose_matcher(&mut self, id: MatcherId, host: &dyn Host) -> bool {
        let released = self
            .matchers
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .is_some();
        if released {
            emit!(host, Level::Debug, "matcher {id} disposed");
        }
        released
    }

    fn matcher(&self, id: MatcherId) -> Result<&Matcher> {
        self.matchers
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(Fault::UnknownMatcher(id))
    }
}

// ---

#[derive(Debug)]
struct Matcher {
    rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    negated: bool,
    offset: u32,
    len: u32,
}

// ---

fn slice(memory: &[u8], offset: u32, len: u32) -> Result<&[u8]> {
    let fault = || Fault::OutOfBounds {
        offset,
        len,
        size: memory.len(),
    };
    let start = offset as usize;
    let end = start.checked_add(len as usize).ok_or_else(fault)?;
    memory.get(start..end).ok_or_else(fault)
}
