//! Interning pool for row patterns.
//!
//! Masks that share a pool store each distinct row pattern exactly once, no
//! matter how many rows (or how many masks) use it. Reading from and adding to
//! the pool only requires a shared reference; patterns that are no longer used
//! by any mask are released by `collect_garbage()`.

use itertools::Itertools;
use parking_lot::Mutex;
use seahash::SeaHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use crate::runs::RunList;

/// Fast hasher used for row patterns.
pub type RowHasher = BuildHasherDefault<SeaHasher>;

type PatternShard = Mutex<HashSet<Arc<RunList>, RowHasher>>;
const SHARD_COUNT: usize = 16;

/// Set of canonical row patterns.
pub struct RowPool {
    /// The set is split into "shards" to reduce contention when many threads
    /// build masks at once. We use `Mutex` instead of `RwLock` because any
    /// reader could turn into a writer if the pattern it's looking for is not
    /// present.
    shards: Box<[PatternShard]>,
}
impl fmt::Debug for RowPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowPool({} patterns)", self.len())
    }
}
impl Default for RowPool {
    fn default() -> Self {
        Self {
            shards: std::iter::repeat_with(PatternShard::default)
                .take(SHARD_COUNT)
                .collect_vec()
                .into_boxed_slice(),
        }
    }
}
impl RowPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    fn shard(&self, runs: &RunList) -> &PatternShard {
        let mut hasher = SeaHasher::default();
        runs.hash(&mut hasher);
        &self.shards[hasher.finish() as usize % SHARD_COUNT]
    }

    /// Returns the canonical instance of a pattern, adding it to the pool if
    /// it is not already present.
    pub fn intern(&self, runs: RunList) -> Arc<RunList> {
        let mut shard = self.shard(&runs).lock();
        if let Some(existing) = shard.get(&runs) {
            return Arc::clone(existing);
        }
        let ret = Arc::new(runs);
        shard.insert(Arc::clone(&ret));
        ret
    }

    /// Returns `true` if `pattern` is the canonical instance held by this
    /// pool.
    pub fn owns(&self, pattern: &Arc<RunList>) -> bool {
        self.shard(pattern)
            .lock()
            .get(&**pattern)
            .map_or(false, |existing| Arc::ptr_eq(existing, pattern))
    }

    /// Returns the number of distinct patterns in the pool.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().len()).sum()
    }
    /// Returns `true` if the pool holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the total number of runs stored across all patterns.
    pub fn unique_runs(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.lock().iter().map(|p| p.len()).sum::<usize>())
            .sum()
    }

    /// Removes patterns that are not referenced by any mask and returns the
    /// number removed.
    pub fn collect_garbage(&self) -> usize {
        let mut removed = 0;
        for shard in self.shards.iter() {
            let mut shard = shard.lock();
            let before = shard.len();
            // The pool's own reference is the only one left.
            shard.retain(|p| Arc::strong_count(p) > 1);
            removed += before - shard.len();
        }
        log::debug!("Row pool GC removed {} patterns", removed);
        removed
    }
}

/// Reference-counted handle to a `RowPool` that can be shared between masks
/// and threads.
#[derive(Debug, Default, Clone)]
pub struct SharedRowPool(Arc<RowPool>);
impl SharedRowPool {
    /// Creates a handle to a new empty pool.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns `true` if both handles refer to the same pool.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Deref for SharedRowPool {
    type Target = RowPool;

    fn deref(&self) -> &RowPool {
        &self.0
    }
}
impl PartialEq for SharedRowPool {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
impl Eq for SharedRowPool {}
