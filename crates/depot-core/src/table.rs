//! Separate-chaining hash table with load-factor-driven growth.
//!
//! # Layout
//!
//! `buckets` is a `Vec` of chains; a key lives in chain
//! `hash(key) % buckets.len()`.  The table starts with
//! [`INITIAL_BUCKETS`] chains and doubles whenever inserting a new key would
//! push `(len + 1) / bucket_count` above the configured maximum load factor.
//! Growth rebuilds every chain under the new modulus, moving entries rather
//! than cloning them.
//!
//! There is no removal: the street graph is built once and only read
//! afterwards.
//!
//! # Hashing
//!
//! The hasher is a `BuildHasher` type parameter.  The default,
//! `rustc_hash::FxBuildHasher`, is unseeded, so bucket placement (and thus
//! [`KeyedTable::iter`] order) is reproducible between runs.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::{CoreError, CoreResult};

/// Bucket count of a fresh or [`reset`](KeyedTable::reset) table.
pub const INITIAL_BUCKETS: usize = 8;

/// Maximum load factor used by [`KeyedTable::new`].
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

/// A resizable hash map from `K` to `V` without deletion.
pub struct KeyedTable<K, V, S = FxBuildHasher> {
    buckets:         Vec<Vec<(K, V)>>,
    len:             usize,
    max_load_factor: f64,
    hasher:          S,
}

impl<K: Hash + Eq, V> KeyedTable<K, V, FxBuildHasher> {
    /// Empty table with the default maximum load factor of 0.5.
    pub fn new() -> Self {
        Self::build(DEFAULT_MAX_LOAD_FACTOR, FxBuildHasher)
    }

    /// Empty table that grows once `len / bucket_count` would exceed
    /// `max_load_factor`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidLoadFactor`] unless the factor is finite and
    /// strictly positive.
    pub fn with_max_load_factor(max_load_factor: f64) -> CoreResult<Self> {
        Self::with_load_factor_and_hasher(max_load_factor, FxBuildHasher)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyedTable<K, V, S> {
    /// Empty table using a caller-supplied hasher.
    pub fn with_load_factor_and_hasher(max_load_factor: f64, hasher: S) -> CoreResult<Self> {
        if !max_load_factor.is_finite() || max_load_factor <= 0.0 {
            return Err(CoreError::InvalidLoadFactor(max_load_factor));
        }
        Ok(Self::build(max_load_factor, hasher))
    }

    fn build(max_load_factor: f64, hasher: S) -> Self {
        Self {
            buckets: empty_buckets(INITIAL_BUCKETS),
            len: 0,
            max_load_factor,
            hasher,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The value stored for `key`, if any.  Cost is the length of one chain.
    pub fn find(&self, key: &K) -> Option<&V> {
        let b = self.bucket_of(key);
        self.buckets[b].iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutable access to the value stored for `key`, if any.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let b = self.bucket_of(key);
        self.buckets[b].iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `value` under `key`, replacing any previous value in place.
    ///
    /// Replacing never grows the table.  Inserting a new key first doubles the
    /// bucket count if the insert would breach the maximum load factor.
    pub fn associate(&mut self, key: K, value: V) {
        if let Some(slot) = self.find_mut(&key) {
            *slot = value;
            return;
        }

        if (self.len + 1) as f64 / self.buckets.len() as f64 > self.max_load_factor {
            self.grow(self.buckets.len() * 2);
        }

        let b = self.bucket_of(&key);
        self.buckets[b].push((key, value));
        self.len += 1;
    }

    /// Drop every entry and shrink back to [`INITIAL_BUCKETS`] chains.
    pub fn reset(&mut self) {
        self.buckets = empty_buckets(INITIAL_BUCKETS);
        self.len = 0;
    }

    /// Iterate over all entries in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn bucket_of(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    fn grow(&mut self, new_count: usize) {
        trace!(from = self.buckets.len(), to = new_count, len = self.len, "rehashing keyed table");

        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_count));
        for (key, value) in old.into_iter().flatten() {
            let b = self.bucket_of(&key);
            self.buckets[b].push((key, value));
        }
        debug_assert_eq!(self.buckets.iter().map(Vec::len).sum::<usize>(), self.len);
    }
}

impl<K: Hash + Eq, V> Default for KeyedTable<K, V, FxBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for KeyedTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}

fn empty_buckets<K, V>(n: usize) -> Vec<Vec<(K, V)>> {
    (0..n).map(|_| Vec::new()).collect()
}
