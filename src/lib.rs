//! # kvtable
//!
//! A small thread-safe key-value table:
//! - String keys with case-insensitive identity
//! - Optional string values (a key may exist with no value)
//! - Insertion order preserved; positional access for external iteration
//! - One mutex per table, held for the full duration of every operation
//!
//! ## Design Overview
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │                 KvTable                     │
//! │  name:  Option<String>  (set at creation)  │
//! │  items: Mutex<Vec<Item>>                   │
//! │         └── Item { key, value: Option<_> } │
//! └────────────────────────────────────────────┘
//! ```
//!
//! Lookup is a linear scan: the table is meant for small metadata sets
//! (per-connection or per-session attributes), not as a general hash map.
//! Lookups return owned clones rather than references into the locked
//! storage, so callers never hold a view that a concurrent mutation could
//! invalidate.
//!
//! ## Example
//!
//! ```
//! use kvtable::KvTable;
//!
//! let table = KvTable::named("session");
//! table.put("user", Some("alice"));
//! table.put("port", Some("5004"));
//! table.put("user", Some("bob")); // updates in place
//!
//! assert_eq!(table.count(), 2);
//! assert_eq!(table.get_value("USER").as_deref(), Some("bob"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod table;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use table::{Item, KvTable, PutOutcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvtable
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
