//! Item definition
//!
//! A single (key, value) record owned by a [`KvTable`](crate::KvTable).

/// One entry in a table: a non-empty key and an optional value.
///
/// Items handed out by lookup and positional access are clones of the
/// table-owned record; mutating the table afterwards does not affect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    key: String,
    value: Option<String>,
}

impl Item {
    /// Callers must have already rejected empty keys.
    pub(crate) fn new(key: &str, value: Option<&str>) -> Self {
        debug_assert!(!key.is_empty());
        Self {
            key: key.to_owned(),
            value: value.map(str::to_owned),
        }
    }

    /// The key as stored (original casing preserved).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value, if one is set.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Case-insensitive key match (ASCII case folding, like `strcasecmp`).
    pub(crate) fn matches(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }

    pub(crate) fn set_value(&mut self, value: Option<&str>) {
        self.value = value.map(str::to_owned);
    }

    /// Split an item into its parts, consuming it.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.key, self.value)
    }
}
