//! Reuse of expensive-to-create instances.
//!
//! ```rust
//! use tessera_kernel::pool::Pool;
//!
//! let mut buffers = Pool::builder().max_size(2).factory(|| Vec::<u8>::with_capacity(1024)).build()?;
//!
//! let mut buffer = buffers.fetch();
//! buffer.extend_from_slice(b"frame");
//! buffer.clear();
//! assert!(buffers.release(buffer));
//! assert_eq!(buffers.len(), 1);
//! # Ok::<(), tessera_kernel::pool::PoolError>(())
//! ```

mod builder;
mod error;

pub use builder::{DEFAULT_MAX_SIZE, NoFactory, PoolBuilder, WithFactory};
pub use error::{PoolError, PoolErrorExt};

use std::fmt;
use tracing::{debug, trace};

/// A bounded, single-threaded stack of idle instances.
///
/// Fetching pops the most recently released instance or asks the factory for a new one.
/// Released instances are not reset; callers clean them up before releasing.
pub struct Pool<T> {
    items: Vec<T>,
    max_size: usize,
    factory: Box<dyn FnMut() -> T>,
}

impl<T> Pool<T> {
    #[must_use = "Creates a new pool builder with default configuration"]
    pub fn builder() -> PoolBuilder<T> {
        PoolBuilder::new()
    }

    pub fn fetch(&mut self) -> T {
        if let Some(item) = self.items.pop() {
            return item;
        }
        trace!(max_size = self.max_size, "Pool is empty, creating a new instance");
        (self.factory)()
    }

    /// Fetches an instance and runs `init` on it before handing it out.
    pub fn fetch_with(&mut self, init: impl FnOnce(&mut T)) -> T {
        let mut item = self.fetch();
        init(&mut item);
        item
    }

    /// Returns `item` to the pool. A full pool drops it and returns `false`.
    pub fn release(&mut self, item: T) -> bool {
        if self.items.len() >= self.max_size {
            debug!(max_size = self.max_size, "Pool is full, discarding released instance");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Number of idle instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Idle instances, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool").field("idle", &self.items.len()).field("max_size", &self.max_size).finish_non_exhaustive()
    }
}
