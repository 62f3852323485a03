//! Shared-instance pool: get-or-create semantics for discriminator-keyed
//! entities.
//!
//! For a fixed discriminator, every `acquire` returns the same `Arc` and the
//! creation side effect fires exactly once, no matter how many callers race
//! the first lookup.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use colored::Colorize;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::PoolError;

/// Builds a shared entity from its discriminator.
///
/// Implementations should produce an immutable-configuration value: the pool
/// hands out `Arc`s, so anything per-use (position, size, request data) must
/// be passed to the entity's methods instead of stored on it.
pub trait FromDiscriminator {
    fn from_discriminator(discriminator: &str) -> Self;
}

/// Receives one event per entity the pool creates.
pub trait CreationObserver: Send + Sync {
    fn entity_created(&self, discriminator: &str);
}

/// Default observer: prints the creation line to the console.
pub struct ConsoleObserver;

impl CreationObserver for ConsoleObserver {
    fn entity_created(&self, discriminator: &str) {
        println!("{} {}", "Creating entity:".green(), discriminator);
    }
}

/// Hit/miss counters, snapshotted by [`SharedPool::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub hits: usize,
    pub misses: usize,
}

/// A pool of shared entities keyed by a non-empty string discriminator.
///
/// Entities live for the pool's lifetime: there is no eviction, no TTL, and
/// no size bound.
pub struct SharedPool<T> {
    entries: DashMap<String, Arc<T>>,
    observer: Arc<dyn CreationObserver>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<T> SharedPool<T> {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(ConsoleObserver))
    }

    /// Creates a pool that reports creations to `observer`.
    pub fn with_observer(observer: Arc<dyn CreationObserver>) -> Self {
        SharedPool {
            entries: DashMap::new(),
            observer,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Number of distinct entities created so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.entries.contains_key(discriminator)
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<T: FromDiscriminator> SharedPool<T> {
    /// Returns the shared entity for `discriminator`, creating it on first use.
    ///
    /// The check-then-create sequence runs inside the map's per-key entry
    /// lock, so concurrent first acquisitions of one discriminator create
    /// exactly one entity and emit exactly one creation event.
    ///
    /// Fails with [`PoolError::InvalidDiscriminator`] if the key is empty or
    /// all whitespace.
    pub fn acquire(&self, discriminator: &str) -> Result<Arc<T>, PoolError> {
        if discriminator.trim().is_empty() {
            return Err(PoolError::InvalidDiscriminator);
        }

        match self.entries.entry(discriminator.to_string()) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(slot) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let entity = Arc::new(T::from_discriminator(discriminator));
                self.observer.entity_created(discriminator);
                slot.insert(Arc::clone(&entity));
                Ok(entity)
            }
        }
    }
}

impl<T> Default for SharedPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
