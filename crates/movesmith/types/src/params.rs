//! Caller-supplied generation parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Address used when the caller supplies none.
pub const DEFAULT_ADDRESS: &str = "0x1";

/// Parameter name to string value.
///
/// Well-known keys are `name` and `address`; archetypes may read extra keys.
/// A key that is absent or maps to an empty string counts as unset, so the
/// generator's default applies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationParameters(BTreeMap<String, String>);

impl GenerationParameters {
    /// Empty parameter set; every generator falls back to its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set the contract name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with("name", name)
    }

    /// Set the publishing address.
    pub fn with_address(self, address: impl Into<String>) -> Self {
        self.with("address", address)
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// The value for `key`, or `None` when absent or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// The value for `key`, or `default` when absent or empty.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// The contract address, defaulting to [`DEFAULT_ADDRESS`].
    pub fn address(&self) -> &str {
        self.get_or("address", DEFAULT_ADDRESS)
    }

    /// Number of raw entries, including empty ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries were supplied at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate raw entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GenerationParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for GenerationParameters {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}
