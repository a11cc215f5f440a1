//! Loading a [`SeqCollection`] from FASTA or CSV input.
//!
//! Both loaders build records through [`SeqRecord::from_text`] and
//! [`SeqRecord::extend_residues`], so whitespace inside sequence text is
//! dropped the same way regardless of the source format.
//!
//! [`SeqRecord::from_text`]: crate::seq::SeqRecord::from_text
//! [`SeqRecord::extend_residues`]: crate::seq::SeqRecord::extend_residues

use crate::seq::collection::SeqCollection;

pub mod csv;
pub mod fasta;

/// What to do with a CSV row that cannot become a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowPolicy {
    #[default]
    Fail,
    Skip,
}

/// A CSV row left out of the collection under [`RowPolicy::Skip`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub id: Option<Box<str>>,
    pub column: Box<str>,
    pub reason: Box<str>,
}

/// A loaded collection plus the rows that were skipped on the way.
#[derive(Clone, Debug)]
pub struct LoadReport {
    pub collection: SeqCollection,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_collection(self) -> SeqCollection {
        self.collection
    }
}
