//! Cache construction settings

use crate::error::{Error, Result};

/// Default capacity (number of entries)
pub const DEFAULT_CAPACITY: usize = 1024;

/// Environment variable read by [`CacheConfig::from_env`]
pub const CAPACITY_ENV: &str = "LRUKV_CAPACITY";

/// Settings for building an [`LruCache`](crate::LruCache)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries, also the initial bucket count
    pub capacity: usize,

    /// Count overwriting an existing key as a hit (`true`) or a miss
    pub count_update_as_hit: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            count_update_as_hit: true,
        }
    }
}

impl CacheConfig {
    /// Default settings with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Set how overwrites are counted
    pub fn count_update_as_hit(mut self, as_hit: bool) -> Self {
        self.count_update_as_hit = as_hit;
        self
    }

    /// Defaults, with the capacity taken from `LRUKV_CAPACITY` when set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(CAPACITY_ENV) {
            config.capacity = raw.trim().parse().map_err(|e| {
                Error::InvalidConfiguration(format!("{}={:?}: {}", CAPACITY_ENV, raw, e))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no cache can be built with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.count_update_as_hit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_zero_capacity() {
        let config = CacheConfig::with_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = CacheConfig::with_capacity(8).count_update_as_hit(false);
        assert_eq!(config.capacity, 8);
        assert!(!config.count_update_as_hit);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = CacheConfig::from_lookup(|_| Some(" 42 ".to_string())).unwrap();
        assert_eq!(config.capacity, 42);

        let config = CacheConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_config_from_lookup_invalid() {
        let err = CacheConfig::from_lookup(|_| Some("lots".to_string())).unwrap_err();
        assert!(err.to_string().contains(CAPACITY_ENV));

        assert!(CacheConfig::from_lookup(|_| Some("0".to_string())).is_err());
        assert!(CacheConfig::from_lookup(|_| Some("-3".to_string())).is_err());
    }
}
