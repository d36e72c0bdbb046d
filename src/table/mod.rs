//! Table Module
//!
//! The key-value table and its item records.
//!
//! ## Responsibilities
//! - Insert-or-update with case-insensitive key identity
//! - Linear lookup and positional access, insertion order preserved
//! - Serialize every operation behind one mutex per table
//! - Own all item storage; hand out clones, never internal references
//!
//! ## Data Structure Choice
//! A `Vec<Item>` behind a `parking_lot::Mutex`:
//! - Insertion order falls out of `Vec` for free
//! - Amortized doubling growth instead of reallocating per insert
//! - Linear scans are fine at the expected table sizes (tens of entries)

mod item;
mod table;

pub use item::Item;
pub use table::KvTable;

/// What a successful [`KvTable::try_put`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The key was new; an item was appended
    Inserted,

    /// The key already existed; its value was replaced
    Updated,
}
