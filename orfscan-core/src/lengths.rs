use crate::error::{ScanError, ScanResult};
use crate::seq::collection::SeqCollection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extreme {
    Longest,
    Shortest,
}

/// Sequence length per identifier, in collection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LengthMap {
    entries: Vec<(Box<str>, usize)>,
}

impl LengthMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id.as_ref() == id)
            .map(|&(_, len)| len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(id, len)| (id.as_ref(), *len))
    }
}

impl FromIterator<(Box<str>, usize)> for LengthMap {
    fn from_iter<T: IntoIterator<Item = (Box<str>, usize)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn lengths(collection: &SeqCollection) -> LengthMap {
    collection
        .iter()
        .map(|record| (record.id.clone(), record.len()))
        .collect()
}

pub fn extreme(lengths: &LengthMap, which: Extreme) -> ScanResult<usize> {
    let values = lengths.iter().map(|(_, len)| len);
    let value = match which {
        Extreme::Longest => values.max(),
        Extreme::Shortest => values.min(),
    };
    value.ok_or(ScanError::EmptyInput {
        what: "no sequence lengths to compare",
    })
}

/// Every identifier whose length equals the extreme value, in collection order.
pub fn extreme_ids(lengths: &LengthMap, which: Extreme) -> ScanResult<Vec<&str>> {
    let threshold = extreme(lengths, which)?;
    Ok(lengths
        .iter()
        .filter(|&(_, len)| len == threshold)
        .map(|(id, _)| id)
        .collect())
}
