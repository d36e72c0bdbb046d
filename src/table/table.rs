//! KvTable implementation
//!
//! Vec-based ordered table with a Mutex for concurrency.

use parking_lot::Mutex;

use crate::error::{KvError, Result};

use super::{Item, PutOutcome};

/// A thread-safe, insertion-ordered table of (key, value) items.
///
/// ## Concurrency Model
///
/// One `parking_lot::Mutex` guards the item storage. Every operation —
/// reads included — acquires it for its full duration, so a lookup can never
/// race a concurrent insert's reallocation. The guard is an RAII type;
/// release happens on every exit path.
///
/// Results are owned clones. Nothing handed to a caller points into the
/// locked storage, so a value read under one lock acquisition stays valid
/// (and complete) no matter what other threads do afterwards.
pub struct KvTable {
    /// Diagnostic label, immutable after creation (not behind the lock)
    name: Option<String>,

    /// Item storage; insertion order is the only order
    items: Mutex<Vec<Item>>,
}

impl KvTable {
    /// Create a new, empty, unnamed table.
    pub fn new() -> Self {
        Self {
            name: None,
            items: Mutex::new(Vec::new()),
        }
    }

    /// Create a new, empty table with a diagnostic name.
    ///
    /// The name only appears in [`dump`](Self::dump) output; it has no
    /// effect on any other operation.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            items: Mutex::new(Vec::new()),
        }
    }

    /// The diagnostic name, if one was given at creation.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Insert a new item or update an existing one, silently ignoring an
    /// empty key.
    ///
    /// See [`try_put`](Self::try_put) for the variant that reports what
    /// happened. `put` exists for call sites that treat the table as
    /// fire-and-forget metadata storage and do not care.
    pub fn put(&self, key: &str, value: Option<&str>) {
        let _ = self.try_put(key, value);
    }

    /// Insert a new item or update an existing one.
    ///
    /// Key identity is case-insensitive: `try_put("Foo", ..)` followed by
    /// `try_put("fOO", ..)` updates the first item rather than adding a
    /// second. An update replaces the stored value outright; `None` clears
    /// it. The stored key keeps the casing it was first inserted with.
    ///
    /// The lookup and the mutation happen under a single lock acquisition,
    /// so concurrent callers can never create duplicate keys or observe a
    /// half-applied update.
    ///
    /// # Errors
    ///
    /// [`KvError::EmptyKey`] if `key` is empty; the table is unchanged.
    pub fn try_put(&self, key: &str, value: Option<&str>) -> Result<PutOutcome> {
        if key.is_empty() {
            return Err(KvError::EmptyKey);
        }

        let mut items = self.items.lock();

        match items.iter_mut().find(|item| item.matches(key)) {
            Some(item) => {
                item.set_value(value);
                Ok(PutOutcome::Updated)
            }
            None => {
                items.push(Item::new(key, value));
                Ok(PutOutcome::Inserted)
            }
        }
    }

    /// Find the item for `key` (case-insensitive), cloning it out.
    ///
    /// Returns `None` for an empty key or a key with no match. O(n) linear
    /// scan in insertion order.
    pub fn find(&self, key: &str) -> Option<Item> {
        if key.is_empty() {
            return None;
        }

        let items = self.items.lock();
        items.iter().find(|item| item.matches(key)).cloned()
    }

    /// Look up the value stored for `key`.
    ///
    /// `None` means the key is absent *or* present with no value; callers
    /// that need to tell those apart should use [`find`](Self::find).
    pub fn get_value(&self, key: &str) -> Option<String> {
        self.find(key)
            .and_then(|item| item.into_parts().1)
    }

    /// Number of items currently in the table.
    pub fn count(&self) -> usize {
        self.items.lock().len()
    }

    /// True if the table holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Positional access for external iteration: the item at `index` in
    /// insertion order, or `None` if `index >= count`.
    ///
    /// Out-of-range access is silent rather than an error; callers driving
    /// a loop should bound it with [`count`](Self::count). Note the index
    /// of an item never changes (there is no single-item removal), but an
    /// updated value is reflected.
    pub fn get_by_index(&self, index: usize) -> Option<Item> {
        let items = self.items.lock();
        items.get(index).cloned()
    }

    /// Snapshot of every item, in insertion order.
    ///
    /// Taken under one lock acquisition, so the snapshot is internally
    /// consistent even while other threads mutate the table.
    pub fn entries(&self) -> Vec<Item> {
        self.items.lock().clone()
    }

    /// Trace the table contents at debug level.
    ///
    /// Logs the table name (if set) and every item that has a value;
    /// valueless items are skipped. Purely diagnostic and best-effort:
    /// output goes to whatever `tracing` subscriber the host application
    /// installed, or nowhere.
    pub fn dump(&self) {
        if let Some(name) = &self.name {
            tracing::debug!("kvtable: name=[{}]", name);
        }

        for item in self.entries() {
            if let Some(value) = item.value() {
                tracing::debug!("\t[{}] = [{}]", item.key(), value);
            }
        }
    }

    /// Tear down the table held in `slot`, leaving `None` behind.
    ///
    /// Idempotent: a slot that is already `None` is a no-op, so calling
    /// this twice (or on a handle another path already destroyed) is safe.
    ///
    /// Items are released while holding the lock, the guard is dropped,
    /// and only then do the mutex, backing storage, and name go away —
    /// a lock is never destroyed while held.
    pub fn destroy(slot: &mut Option<KvTable>) {
        if let Some(table) = slot.take() {
            {
                let mut items = table.items.lock();
                items.clear();
            }
            drop(table);
        }
    }
}

impl Default for KvTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KvTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvTable")
            .field("name", &self.name)
            .field("count", &self.count())
            .finish()
    }
}
