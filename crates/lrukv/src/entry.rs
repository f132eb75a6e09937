//! Key/value entry stored in every cache node

use std::fmt;

use crate::error::Result;

/// A string key paired with a replaceable string value.
///
/// The key is fixed at construction; only the value can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueEntry {
    key: String,
    value: String,
}

impl KeyValueEntry {
    /// Copy `key` and `value` into a new entry.
    ///
    /// Fails with [`Error::Allocation`](crate::Error::Allocation) instead of
    /// aborting when either copy cannot be reserved.
    pub fn new(key: &str, value: &str) -> Result<Self> {
        Ok(Self {
            key: copy_str(key)?,
            value: copy_str(value)?,
        })
    }

    /// Entry key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Entry value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value in place.
    ///
    /// On allocation failure the previous value is kept.
    pub fn set_value(&mut self, value: &str) -> Result<()> {
        if self.value.capacity() >= value.len() {
            self.value.clear();
            self.value.push_str(value);
        } else {
            self.value = copy_str(value)?;
        }
        Ok(())
    }

    /// True when this entry is stored under `key`
    pub fn matches_key(&self, key: &str) -> bool {
        self.key == key
    }

    /// Consume the entry, returning `(key, value)`
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for KeyValueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key: {}, Value: {}", self.key, self.value)
    }
}

fn copy_str(s: &str) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())?;
    out.push_str(s);
    Ok(out)
}
