// std imports
use std::sync::Arc;

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::instance::Instance;

// ---

/// Page granularity of linear memory, in bytes.
pub const PAGE_SIZE: usize = 64 * 1024;

/// Bytes reserved at the start of linear memory before any table data.
pub const GUARD_SIZE: usize = 1024;

/// Hard ceiling for a single encoded pattern or input, in bytes.
pub const MAX_ENCODED_SIZE: usize = 256 * 1024 * 1024;

/// Maximum number of patterns in a single table.
pub const MAX_PATTERNS: u32 = 1 << 20;

static SHARED: Lazy<Arc<Module>> = Lazy::new(|| Arc::new(Module::new(Limits::default())));

// ---

/// Memory contract the engine is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub page_size: usize,
    pub guard_size: usize,
    pub max_encoded_size: usize,
    pub max_patterns: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            guard_size: GUARD_SIZE,
            max_encoded_size: MAX_ENCODED_SIZE,
            max_patterns: MAX_PATTERNS,
        }
    }
}

// ---

/// Compiled engine module.
///
/// A module is immutable once created and can be shared by any number of instances.
#[derive(Debug)]
pub struct Module {
    limits: Limits,
}

impl Module {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Returns the process-wide module compiled with default limits.
    pub fn shared() -> Arc<Self> {
        SHARED.clone()
    }

    #[inline]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Creates a new instance with empty matcher state.
    pub fn instantiate(self: &Arc<Self>) -> Instance {
        Instance::new(self.clone())
    }
}
