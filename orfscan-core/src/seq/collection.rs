use crate::error::{ScanError, ScanResult};
use crate::seq::record::SeqRecord;
use std::collections::HashMap;

/// Ordered, id-unique set of sequence records.
///
/// Records keep the order they were loaded in (file order for FASTA/CSV
/// input). Lookup by identifier goes through a hash index built once at
/// construction; the collection is never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeqCollection {
    records: Vec<SeqRecord>,
    index: HashMap<Box<str>, usize>,
}

impl SeqCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, failing on the first repeated identifier.
    pub fn from_records(records: Vec<SeqRecord>) -> ScanResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), i).is_some() {
                return Err(ScanError::DuplicateIdentifier {
                    id: record.id().to_string(),
                });
            }
        }
        log::debug!("built sequence collection with {} records", records.len());
        Ok(Self { records, index })
    }

    /// Build a collection from any `(identifier, sequence)` source.
    pub fn from_pairs<I, K, V>(pairs: I) -> ScanResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<Vec<u8>>,
    {
        let records = pairs
            .into_iter()
            .map(|(id, seq)| SeqRecord::new(id, seq))
            .collect();
        Self::from_records(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SeqRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeqRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&SeqRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn record(&self, id: &str) -> ScanResult<&SeqRecord> {
        self.get(id).ok_or_else(|| ScanError::InvalidIdentifier { id: id.to_string() })
    }

    pub fn into_records(self) -> Vec<SeqRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a SeqCollection {
    type Item = &'a SeqRecord;
    type IntoIter = std::slice::Iter<'a, SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub fn count_records(collection: &SeqCollection) -> usize {
    collection.len()
}
