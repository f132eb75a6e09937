//! Cache statistics tracking

use std::fmt;

/// Outcome the cache reports to its counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Hit,
    Miss,
    Insert,
    Eviction,
}

/// Statistics for cache performance tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    inserts: u64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, event: Event) {
        let counter = match event {
            Event::Hit => &mut self.hits,
            Event::Miss => &mut self.misses,
            Event::Insert => &mut self.inserts,
            Event::Eviction => &mut self.evictions,
        };
        *counter = counter.saturating_add(1);
    }

    /// Get total hits
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Get total misses
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Get total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Get total inserts
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Total lookups counted as either a hit or a miss
    pub fn requests(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// `misses / (hits + misses)`, or `None` before the first request
    pub fn miss_rate(&self) -> Option<f64> {
        let total = self.requests();
        if total == 0 {
            None
        } else {
            Some(self.misses as f64 / total as f64)
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hits: {}, Misses: {}, ", self.hits, self.misses)?;
        match self.miss_rate() {
            Some(rate) => write!(f, "Miss rate: {:.2}%", rate * 100.0),
            None => write!(f, "Miss rate: no requests yet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let mut stats = CacheStats::new();

        stats.record(Event::Hit);
        stats.record(Event::Hit);
        stats.record(Event::Miss);

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
        assert_eq!(stats.miss_rate(), Some(1.0 / 3.0));
    }

    #[test]
    fn test_stats_insert_and_eviction() {
        let mut stats = CacheStats::new();

        stats.record(Event::Insert);
        stats.record(Event::Insert);
        stats.record(Event::Eviction);

        assert_eq!(stats.inserts(), 2);
        assert_eq!(stats.evictions(), 1);
        assert_eq!(stats.requests(), 0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = CacheStats::new();

        stats.record(Event::Hit);
        stats.record(Event::Miss);
        stats.reset();

        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.hit_ratio(), 0.0);
        assert_eq!(stats.miss_rate(), None);
    }

    #[test]
    fn test_stats_requests_saturate() {
        let stats = CacheStats {
            hits: u64::MAX,
            misses: 2,
            ..CacheStats::default()
        };

        assert_eq!(stats.requests(), u64::MAX);
        assert!(stats.miss_rate().is_some());
    }

    #[test]
    fn test_stats_display() {
        let mut stats = CacheStats::new();
        assert_eq!(
            stats.to_string(),
            "Hits: 0, Misses: 0, Miss rate: no requests yet"
        );

        stats.record(Event::Hit);
        stats.record(Event::Miss);
        assert_eq!(stats.to_string(), "Hits: 1, Misses: 1, Miss rate: 50.00%");
    }
}
