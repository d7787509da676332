//! Bounded, TTL-evicting cache for advisor reports.
//!
//! Owned by whichever runtime serves requests; there is deliberately no
//! global instance.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::AdvisorConfig;
use crate::engine::AdvisorReport;

struct CacheEntry {
    report: AdvisorReport,
    inserted: Instant,
}

/// Fixed-capacity report cache keyed by user id. Entries expire after the
/// TTL; at capacity the oldest entry is evicted.
pub struct ReportCache {
    capacity: usize,
    ttl: Duration,
    entries: HashMap<Uuid, CacheEntry>,
}

impl ReportCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity: capacity.max(1),
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        )
    }

    /// Returns the cached report for the user if it has not expired.
    pub fn get(&self, user: Uuid) -> Option<&AdvisorReport> {
        self.entries
            .get(&user)
            .filter(|entry| entry.inserted.elapsed() < self.ttl)
            .map(|entry| &entry.report)
    }

    pub fn insert(&mut self, user: Uuid, report: AdvisorReport) {
        self.sweep();
        if !self.entries.contains_key(&user) && self.entries.len() >= self.capacity {
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted)
                .map(|(key, _)| *key)
            {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(
            user,
            CacheEntry {
                report,
                inserted: Instant::now(),
            },
        );
    }

    /// Drops expired entries.
    pub fn sweep(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.inserted.elapsed() < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
