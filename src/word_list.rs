//! WordList: arena-backed singly linked chain of word entries with
//! slot-based relinking.

use crate::error::WordListError;
use crate::word_entry::WordEntry;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use log::trace;
use slotmap::{DefaultKey, Key, SlotMap};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, AtomicOrdering::Relaxed)
}

/// Stable identity of one node in a [`WordList`]. Goes stale once the node is
/// deleted; a stale handle never resolves to a later node (generational keys).
///
/// Handles are branded with the owning list. A handle from one list never
/// resolves in another, including a clone of its list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeHandle {
    owner: u64,
    key: DefaultKey,
}

impl NodeHandle {
    pub fn entry<'a>(&self, list: &'a WordList) -> Option<&'a WordEntry> {
        list.entry(*self)
    }

    pub fn next(&self, list: &WordList) -> Option<NodeHandle> {
        list.next(*self)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.key.data().as_ffi())
    }
}

/// A link field in the chain: either the list head or the `next` field of a
/// node. Every relinking operation goes through a slot, so head and
/// mid-chain positions share one code path.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Slot {
    Head,
    After(NodeHandle),
}

#[derive(Debug, Clone)]
struct Node {
    entry: WordEntry,
    next: Option<DefaultKey>,
}

/// Ordered word-frequency list.
///
/// Nodes live in a generational arena; links are arena keys. Every node in the
/// arena is reachable from `head`, so `len()` is the chain length.
#[derive(Debug)]
pub struct WordList {
    id: u64,
    head: Option<DefaultKey>,
    nodes: SlotMap<DefaultKey, Node>,
}

impl WordList {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list whose arena can hold `capacity` nodes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: next_list_id(),
            head: None,
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn handle(&self, key: DefaultKey) -> NodeHandle {
        NodeHandle {
            owner: self.id,
            key,
        }
    }

    fn owned_key(&self, handle: NodeHandle) -> Result<DefaultKey, WordListError> {
        if handle.owner == self.id {
            Ok(handle.key)
        } else {
            Err(WordListError::ForeignHandle)
        }
    }

    pub fn head(&self) -> Option<NodeHandle> {
        self.head.map(|k| self.handle(k))
    }

    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let k = self.owned_key(handle).ok()?;
        self.nodes
            .get(k)
            .and_then(|n| n.next)
            .map(|k| self.handle(k))
    }

    pub fn entry(&self, handle: NodeHandle) -> Option<&WordEntry> {
        let k = self.owned_key(handle).ok()?;
        self.nodes.get(k).map(|n| &n.entry)
    }

    /// Total arena occupancy; equals `len()` while no node is orphaned.
    #[cfg(any(test, feature = "bench_internal"))]
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    fn link(&self, slot: Slot) -> Result<Option<DefaultKey>, WordListError> {
        match slot {
            Slot::Head => Ok(self.head),
            Slot::After(h) => self
                .nodes
                .get(self.owned_key(h)?)
                .map(|n| n.next)
                .ok_or(WordListError::StaleHandle),
        }
    }

    fn link_mut(&mut self, slot: Slot) -> Result<&mut Option<DefaultKey>, WordListError> {
        match slot {
            Slot::Head => Ok(&mut self.head),
            Slot::After(h) => {
                let k = self.owned_key(h)?;
                self.nodes
                    .get_mut(k)
                    .map(|n| &mut n.next)
                    .ok_or(WordListError::StaleHandle)
            }
        }
    }

    // Only called once the destination slot is known to be valid, so the new
    // node is always linked in right after.
    fn create_node(&mut self, word: &str, next: Option<DefaultKey>) -> DefaultKey {
        let k = self.nodes.insert(Node {
            entry: WordEntry::new(word),
            next,
        });
        trace!("created node {} for {:?}", self.handle(k), word);
        k
    }

    /// Insert `word` as a new node in front of whatever `slot` references.
    ///
    /// No search and no deduplication: the caller chooses the position.
    /// `Slot::Head` prepends; the slot after the last node appends.
    pub fn insert_word_unordered(
        &mut self,
        word: &str,
        slot: Slot,
    ) -> Result<NodeHandle, WordListError> {
        let next = self.link(slot)?;
        let k = self.create_node(word, next);
        *self.link_mut(slot)? = Some(k);
        Ok(self.handle(k))
    }

    /// Insert `word` at its lexicographic position, or bump the count of the
    /// existing node with the same text. Returns the node now holding `word`.
    pub fn insert_word_sorted(&mut self, word: &str) -> NodeHandle {
        let owner = self.id;
        let mut cursor = Slot::Head;
        let mut current = self.head;
        while let Some(k) = current {
            let node = self
                .nodes
                .get_mut(k)
                .expect("chain links must refer to live nodes");
            let handle = NodeHandle { owner, key: k };
            match node.entry.text().cmp(word) {
                Ordering::Greater => break,
                Ordering::Equal => {
                    node.entry.increment();
                    trace!(
                        "merged {:?} into node {}, occurrences now {}",
                        word,
                        handle,
                        node.entry.occurrences()
                    );
                    return handle;
                }
                Ordering::Less => {
                    cursor = Slot::After(handle);
                    current = node.next;
                }
            }
        }
        self.insert_word_unordered(word, cursor)
            .expect("cursor must be the head or the slot of a live node")
    }

    /// Unlink and release the node referenced by `slot`, rewriting the slot
    /// to the node's successor. Returns the released entry, or `None` when the
    /// slot holds no node.
    pub fn delete_node(&mut self, slot: Slot) -> Result<Option<WordEntry>, WordListError> {
        let Some(k) = self.link(slot)? else {
            return Ok(None);
        };
        let node = self
            .nodes
            .remove(k)
            .expect("chain links must refer to live nodes");
        *self.link_mut(slot)? = node.next;
        trace!("deleted node {} ({:?})", self.handle(k), node.entry.text());
        Ok(Some(node.entry))
    }

    /// Delete every node, head first. Safe on an empty list and when repeated.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        while let Ok(Some(_)) = self.delete_node(Slot::Head) {
            released += 1;
        }
        debug_assert!(self.nodes.is_empty());
        trace!("cleared list, released {} nodes", released);
    }

    /// The slot whose link references the node at 0-based `position`.
    /// `position == len()` yields the tail slot; anything past that is `None`.
    pub fn slot_at(&self, position: usize) -> Option<Slot> {
        if position == 0 {
            return Some(Slot::Head);
        }
        self.iter()
            .nth(position - 1)
            .map(|(h, _)| Slot::After(h))
    }

    /// First node, scanning from the head, whose text equals `word`.
    pub fn find(&self, word: &str) -> Option<NodeHandle> {
        self.iter()
            .find(|(_, e)| e.text() == word)
            .map(|(h, _)| h)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Occurrence count recorded for `word`, or 0 when absent.
    pub fn occurrences(&self, word: &str) -> usize {
        self.find(word)
            .and_then(|h| self.entry(h))
            .map_or(0, WordEntry::occurrences)
    }

    /// Head-to-tail traversal. Restartable; empty lists yield nothing.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            owner: self.id,
            nodes: &self.nodes,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Head-to-tail `(text, occurrences)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.iter().map(|(_, e)| (e.text(), e.occurrences()))
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}

// A clone is a distinct list: same contents, fresh brand, so handles from the
// original do not resolve in it.
impl Clone for WordList {
    fn clone(&self) -> Self {
        Self {
            id: next_list_id(),
            head: self.head,
            nodes: self.nodes.clone(),
        }
    }
}

/// Iterator over the chain in link order.
pub struct Iter<'a> {
    owner: u64,
    nodes: &'a SlotMap<DefaultKey, Node>,
    current: Option<DefaultKey>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeHandle, &'a WordEntry);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.current.take()?;
        let node = self.nodes.get(k)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        let handle = NodeHandle {
            owner: self.owner,
            key: k,
        };
        Some((handle, &node.entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a WordList {
    type Item = (NodeHandle, &'a WordEntry);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "The list is empty.");
        }
        for (i, (h, e)) in self.iter().enumerate() {
            write!(
                f,
                "Node [{}], addr [{}], data [{}], occurrences [{}], next [",
                i + 1,
                h,
                e.text(),
                e.occurrences()
            )?;
            match self.next(h) {
                Some(n) => write!(f, "{}", n)?,
                None => f.write_str("none")?,
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
