//! WordEntry: an owned word paired with its occurrence count.

use core::fmt;

/// A word and the number of times it was sorted-inserted.
///
/// Entries only come into existence together with a list node and always
/// start at one occurrence. The count never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    text: String,
    occurrences: usize,
}

impl WordEntry {
    /// Copy `word` into a fresh entry holding a single occurrence.
    pub fn new(word: &str) -> Self {
        Self {
            text: word.to_owned(),
            occurrences: 1,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Consume the entry, handing back the owned text buffer.
    pub fn into_text(self) -> String {
        self.text
    }

    // Overflow is not checked, matching the reference counts in `std::rc::Rc`.
    pub(crate) fn increment(&mut self) {
        self.occurrences += 1;
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.occurrences)
    }
}
