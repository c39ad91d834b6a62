use std::collections::HashMap;

/// The key-value metadata bundle declared by an application.
///
/// A bundle maps string keys to string values. Looking up a
/// [missing key](MetadataBundle::get) in a present bundle naturally yields
/// nothing; whether a bundle is declared *at all* is tracked one level up, on
/// [`ApplicationInfo`](crate::ApplicationInfo).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataBundle {
    entries: HashMap<String, String>,
}

impl MetadataBundle {
    /// Creates an empty [`MetadataBundle`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to this [`MetadataBundle`], consuming and returning it
    /// for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Looks up the value under the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Reports the number of entries in this [`MetadataBundle`].
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether this [`MetadataBundle`] holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MetadataBundle {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
