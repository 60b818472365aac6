//! Report model
//!
//! A report is an ordered list of entries of one kind. Insertion order only
//! matters for display; duplicates are allowed.

use chrono::NaiveDate;

use super::entry::{Entry, EntryKind};

/// An ordered collection of expenses or incomes
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    kind: EntryKind,
    entries: Vec<Entry>,
}

impl Report {
    /// Create an empty report meant to hold entries of `kind`
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// The kind of entry this report holds
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Append an entry
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the first entry equal to `entry`
    ///
    /// Returns `false` and leaves the report untouched if no such entry exists.
    pub fn delete_entry(&mut self, entry: &Entry) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the entry at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, entry: &Entry) -> bool {
        self.entries.contains(entry)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Mutable access to one entry; its setters still validate
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// All entries in insertion order
    pub fn all_entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Entries dated within `[start, end]`, inclusive, in insertion order
    pub fn entries_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Entry> {
        self.indexed_entries_in_range(start, end)
            .into_iter()
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Like [`Report::entries_in_range`], paired with each entry's position
    pub fn indexed_entries_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<(usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.date() >= start && e.date() <= end)
            .collect()
    }

    /// Total of all amounts; 0.0 for an empty report
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(Entry::amount).sum()
    }

    /// Total of the amounts dated within `[start, end]`
    pub fn sum_in_range(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        self.entries_in_range(start, end)
            .into_iter()
            .map(Entry::amount)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
