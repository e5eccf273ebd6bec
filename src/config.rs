// src/config.rs
//! Construction options for a [`Registry`](crate::Registry).

/// Sizing options applied to both internal maps when a registry is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Pre-allocated entries per map.
    pub initial_capacity: usize,
    /// Number of lock shards per map. Always a power of two greater than one
    /// once normalized.
    pub shard_amount: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            shard_amount: normalize_shards(num_cpus::get() * 4),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity hint.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the shard count. Values that are not a power of two greater than
    /// one are rounded up to the next one that is.
    pub fn shards(mut self, shards: usize) -> Self {
        self.shard_amount = normalize_shards(shards);
        self
    }
}

/// Dashmap panics on a shard amount that is 1 or not a power of two.
pub(crate) fn normalize_shards(requested: usize) -> usize {
    requested.max(2).checked_next_power_of_two().unwrap_or(1 << (usize::BITS - 1))
}
