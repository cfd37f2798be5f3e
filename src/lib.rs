//! word-freq-list: a sorted word-frequency list backed by a singly linked
//! chain whose links live in a generational arena.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep unique words with running counts in lexicographic order,
//!   while still exposing the raw positional primitives the ordered insert
//!   is built from.
//! - Layers:
//!   - WordEntry: owned text plus an occurrence count that starts at one and
//!     only grows.
//!   - WordList: singly linked chain of nodes stored in a `SlotMap`; links
//!     are arena keys, positions are `Slot`s.
//!
//! Slots instead of pointer-to-pointer
//! - A `Slot` names a link field: the list head or the `next` field of a
//!   node. Unordered insert, delete, and the sorted-insert cursor all rewrite
//!   "the link that points at me" through a slot, so removing the head and
//!   removing a mid-chain node are the same operation.
//! - Handles are generational keys. Once a node is deleted its handle never
//!   resolves again, even if the arena reuses the storage.
//!
//! Constraints
//! - Single-threaded operations; `&mut WordList` for every mutation. Share
//!   across threads only behind an external lock.
//! - Every node in the arena is reachable from the head; nodes are created
//!   only while being linked into a valid slot.
//! - Ordering is plain byte-wise `str` ordering, ascending.
//!
//! Insertion disciplines
//! - `insert_word_unordered(word, slot)`: new node in front of whatever the
//!   slot references. No search, no merge; duplicates are allowed.
//! - `insert_word_sorted(word)`: walk from the head while nodes compare
//!   `<=` the word; an equal node absorbs the occurrence, otherwise a new
//!   node is inserted at the first strictly greater position.
//!
//! Errors and release
//! - Deleting at a slot that holds no node is a no-op (`Ok(None)`).
//! - A `Slot::After` built from a deleted node's handle yields
//!   `WordListError::StaleHandle`.
//! - Handles are branded with their list; using one on another list (or on
//!   a clone) yields `WordListError::ForeignHandle`.
//! - Released entries are handed back by value; dropping the list drops all
//!   remaining nodes. Allocation failure aborts like any `std` collection.
//!
//! Notes and non-goals
//! - Not a general associative container: string keys only, no hashing,
//!   no range queries.
//! - Structural operations emit `log` records at trace level and stay silent
//!   unless the host installs a logger.

mod error;
mod word_entry;
pub mod word_list;
mod word_list_proptest;

// Public surface
pub use error::WordListError;
pub use word_entry::WordEntry;
pub use word_list::{NodeHandle, Slot, WordList};
