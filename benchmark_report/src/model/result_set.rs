//!
//! An ordered mapping from framework name to its measurements.
//!

use crate::model::record::Record;

///
/// An ordered mapping from framework name to its measurements.
///
/// Entries keep the order they were inserted in, which for parsed logs is
/// the order frameworks were benchmarked in. Names are unique: inserting
/// an existing name updates its record in place.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// The entries in insertion order.
    entries: Vec<(String, Record)>,
}

impl ResultSet {
    ///
    /// Creates an empty result set.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Inserts a record, updating in place if the name is already present.
    ///
    pub fn insert(&mut self, name: String, record: Record) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((name, record)),
        }
    }

    ///
    /// Returns the record for a framework name, if present.
    ///
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.entries
            .iter()
            .find_map(|(existing, record)| (existing == name).then_some(record))
    }

    ///
    /// Whether the set contains a framework name.
    ///
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    ///
    /// Iterates over the framework names in insertion order.
    ///
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    ///
    /// Iterates over the entries in insertion order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    ///
    /// The number of entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Whether the set has no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = (String, Record);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
