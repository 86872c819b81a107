//! Insertion-ordered keyed accumulation.
//!
//! Frequency tables and author groups break ties by first-seen order, so the
//! accumulator keeps entries in a `Vec` with a side index for lookup.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, inserting `make()` at the end if absent.
    pub fn entry_or_insert_with<F>(&mut self, key: &str, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = if let Some(&idx) = self.index.get(key) {
            idx
        } else {
            let idx = self.entries.len();
            self.index.insert(key.to_owned(), idx);
            self.entries.push((key.to_owned(), make()));
            idx
        };
        &mut self.entries[idx].1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

/// Occurrence counter keyed by term.
pub type Counter = OrderedMap<usize>;

impl Counter {
    pub fn bump(&mut self, key: &str) {
        *self.entry_or_insert_with(key, || 0) += 1;
    }

    /// The `n` highest counts, descending. Equal counts keep first-seen order.
    #[must_use]
    pub fn top(self, n: usize) -> Vec<(String, usize)> {
        top_by(self.into_entries(), n, |count| *count)
    }
}

/// Stable descending selection of the `n` entries with the largest `count`.
pub fn top_by<V, F>(mut entries: Vec<(String, V)>, n: usize, count: F) -> Vec<(String, V)>
where
    F: Fn(&V) -> usize,
{
    // `sort_by` is stable, which preserves insertion order among equal counts.
    entries.sort_by(|(_, a), (_, b)| count(b).cmp(&count(a)));
    entries.truncate(n);
    entries
}
