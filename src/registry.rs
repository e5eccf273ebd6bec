// src/registry.rs
//! Username registry.
//! Tracks claimed names with their owner ids and counts how often each name
//! has been checked for availability.

use crate::config::{normalize_shards, RegistryConfig};
use crate::suggest;
use dashmap::DashMap;
use tracing::{debug, trace};

/// Identifier of the account owning a taken username.
pub type OwnerId = i64;

/// Shared username store.
///
/// Every method takes `&self`; share one instance across threads with an
/// `Arc<Registry>`. The two maps are independent: registering a name does
/// not touch its attempt count, and checking a name does not claim it.
#[derive(Debug)]
pub struct Registry {
    /// Taken usernames and their owners.
    taken: DashMap<String, OwnerId>,
    /// Availability checks per username. Counts only ever grow.
    attempts: DashMap<String, u64>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with room for `capacity` names in each map.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(RegistryConfig::default().capacity(capacity))
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let shards = normalize_shards(config.shard_amount);
        debug!(
            capacity = config.initial_capacity,
            shards, "creating username registry"
        );
        Self {
            taken: DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards),
            attempts: DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards),
        }
    }

    /// Record an attempt on `username` and report whether it is free.
    ///
    /// The increment is exact under any number of concurrent callers. The
    /// availability answer is not ordered against a concurrent `register`
    /// of the same name and may reflect either side of that race.
    pub fn check_availability(&self, username: &str) -> bool {
        let count = self.bump_attempts(username);
        let available = !self.taken.contains_key(username);
        trace!(username, count, available, "availability check");
        available
    }

    /// Suggest up to `max_suggestions` free alternatives for `username`.
    ///
    /// Numeric suffixes come first in increasing order; the underscore-to-dot
    /// variant, when it fits, is last. Probing candidates does not count as
    /// an attempt. The suffix search has no upper limit, so keeping the
    /// request reasonable against a crowded suffix range is up to the caller.
    pub fn suggest_alternatives(&self, username: &str, max_suggestions: usize) -> Vec<String> {
        let out = suggest::collect(username, max_suggestions, |candidate| self.is_taken(candidate));
        trace!(username, requested = max_suggestions, found = out.len(), "suggested alternatives");
        out
    }

    /// The username with the highest attempt count, or `None` before the
    /// first availability check.
    ///
    /// Shards are scanned one after another, so the result reflects a
    /// per-shard snapshot. When several names share the maximum, which one
    /// is returned is unspecified and may change between calls.
    pub fn most_attempted(&self) -> Option<String> {
        let mut best: Option<(String, u64)> = None;
        for entry in self.attempts.iter() {
            let count = *entry.value();
            if best.as_ref().map_or(true, |(_, top)| count > *top) {
                best = Some((entry.key().clone(), count));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Claim `username` for `owner`.
    /// If the name is already taken, its owner is overwritten. Owner ids are
    /// not required to be unique.
    pub fn register(&self, username: impl Into<String>, owner: OwnerId) {
        let username = username.into();
        match self.taken.insert(username.clone(), owner) {
            Some(previous) if previous != owner => {
                debug!(%username, previous, owner, "username owner replaced");
            }
            Some(_) => {}
            None => debug!(%username, owner, "username registered"),
        }
    }

    /// Owner of `username`, if taken. Does not count as an attempt.
    pub fn owner_of(&self, username: &str) -> Option<OwnerId> {
        self.taken.get(username).map(|o| *o)
    }

    /// Whether `username` is taken. Does not count as an attempt.
    pub fn is_taken(&self, username: &str) -> bool {
        self.taken.contains_key(username)
    }

    /// Availability checks recorded for `username` so far.
    pub fn attempts(&self, username: &str) -> u64 {
        self.attempts.get(username).map_or(0, |c| *c)
    }

    /// Number of taken usernames.
    pub fn taken_len(&self) -> usize {
        self.taken.len()
    }

    /// Number of distinct usernames that have been checked.
    pub fn tracked_len(&self) -> usize {
        self.attempts.len()
    }

    // Both paths hold the shard write lock across read and increment.
    fn bump_attempts(&self, username: &str) -> u64 {
        if let Some(mut count) = self.attempts.get_mut(username) {
            *count += 1;
            return *count;
        }
        let mut count = self.attempts.entry(username.to_owned()).or_insert(0);
        *count += 1;
        *count
    }
}
