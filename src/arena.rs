//! Growable linear memory shared with the match engine.
//!
//! The arena is a single zero-initialized buffer split into three regions:
//!
//! ```text
//! 0            guard        lengths         input
//! | guard      | patterns   | length table  | query string ...
//! ```
//!
//! Regions are addressed by offset only. The buffer may move when it grows, so byte views are
//! always borrowed from the arena on demand and never kept across a call to [`MemoryArena::reserve`].

// std imports
use std::fmt;

// local imports
use crate::error::{Error, Result, Subject};

// ---

const LENGTH_SIZE: u32 = size_of::<u32>() as u32;
const INPUT_ALIGN: u32 = 8;

// ---

/// Offset-based handle to a range of arena bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    offset: u32,
    len: u32,
}

impl Region {
    pub fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first offset past the region.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset as usize + self.len as usize
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.offset, self.end())
    }
}

// ---

/// Owned, grow-only byte buffer with a reserved guard region at its start.
#[derive(Debug)]
pub struct MemoryArena {
    buf: Vec<u8>,
    page_size: usize,
    guard: Region,
}

impl MemoryArena {
    /// Allocates the smallest arena covering the guard region.
    pub fn new(page_size: usize, guard_size: u32) -> Result<Self> {
        let mut arena = Self {
            buf: Vec::new(),
            page_size: page_size.max(1),
            guard: Region::new(0, guard_size),
        };
        arena.reserve(arena.guard.end().max(1))?;
        Ok(arena)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn guard(&self) -> Region {
        self.guard
    }

    /// Makes sure bytes `[0, end)` are addressable.
    ///
    /// The new capacity is the smallest page multiple covering `end`. Either the arena grows
    /// completely or it is left untouched and an error is returned. Returns `true` if the buffer grew,
    /// in which case it may have moved.
    pub fn reserve(&mut self, end: usize) -> Result<bool> {
        if end <= self.buf.len() {
            return Ok(false);
        }

        let requested = end
            .div_ceil(self.page_size)
            .checked_mul(self.page_size)
            .ok_or(Error::ArenaGrowth { requested: end })?;
        self.buf
            .try_reserve_exact(requested - self.buf.len())
            .map_err(|_| Error::ArenaGrowth { requested })?;

        log::debug!("arena grown from {} to {} bytes", self.buf.len(), requested);
        self.buf.resize(requested, 0);
        Ok(true)
    }

    /// Returns the whole addressable memory.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Borrows the bytes of `region`.
    ///
    /// # Panics
    ///
    /// Panics if the region has not been reserved.
    #[inline]
    pub fn view(&self, region: Region) -> &[u8] {
        &self.buf[region.offset as usize..region.end()]
    }

    /// Mutably borrows the bytes of `region`.
    ///
    /// # Panics
    ///
    /// Panics if the region has not been reserved.
    #[inline]
    pub fn view_mut(&mut self, region: Region) -> &mut [u8] {
        &mut self.buf[region.offset as usize..region.end()]
    }

    /// Releases the buffer. The arena is unusable afterwards.
    pub fn release(&mut self) {
        self.buf = Vec::new();
    }
}

// ---

/// Placement of a pattern table and the input region inside an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    patterns: Region,
    lengths: Region,
    count: u32,
    input: u32,
}

impl TableLayout {
    /// Plans a table for patterns of the given encoded lengths, placed right after `guard`.
    ///
    /// Every pattern is followed by a NUL terminator, the length table is 4-byte aligned and
    /// the input region starts 8-byte aligned after it.
    pub fn plan(guard: Region, sizes: impl ExactSizeIterator<Item = usize>) -> Result<Self> {
        let too_large = |len: usize| Error::InvalidPatternSize {
            subject: Subject::PatternTable,
            len,
            limit: u32::MAX as usize,
        };

        let count = sizes.len();
        let patterns_size = sizes.map(|len| len + 1).sum::<usize>();
        let count32 = u32::try_from(count).map_err(|_| too_large(count))?;
        let start = u32::try_from(guard.end()).map_err(|_| too_large(guard.end()))?;

        let plan = || {
            let patterns = Region::new(start, u32::try_from(patterns_size).ok()?);
            let lengths_at = align_up(patterns.offset.checked_add(patterns.len)?, LENGTH_SIZE)?;
            let lengths = Region::new(lengths_at, count32.checked_mul(LENGTH_SIZE)?);
            let input = align_up(lengths.offset.checked_add(lengths.len)?, INPUT_ALIGN)?;
            Some(Self {
                patterns,
                lengths,
                count: count32,
                input,
            })
        };

        plan().ok_or_else(|| too_large(patterns_size))
    }

    #[inline]
    pub fn patterns(&self) -> Region {
        self.patterns
    }

    #[inline]
    pub fn lengths(&self) -> Region {
        self.lengths
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the offset where the input region starts, which is also the size of the table.
    #[inline]
    pub fn table_end(&self) -> usize {
        self.input as usize
    }

    /// Returns the input region for an input of `len` encoded bytes.
    pub fn input(&self, len: usize) -> Result<Region> {
        u32::try_from(len)
            .ok()
            .filter(|len| self.input.checked_add(*len).is_some())
            .map(|len| Region::new(self.input, len))
            .ok_or(Error::InvalidPatternSize {
                subject: Subject::Input,
                len,
                limit: (u32::MAX - self.input) as usize,
            })
    }
}

fn align_up(value: u32, align: u32) -> Option<u32> {
    Some(value.checked_add(align - 1)? / align * align)
}
