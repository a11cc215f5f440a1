use crate::error::{ScanError, ScanResult};
use crate::orf::codon::Frame;
use crate::orf::extract::{rank, GreedyCursor, Orf, OrfSelector};
use crate::seq::collection::SeqCollection;
use crate::seq::record::SeqRecord;
use memchr::memmem;
use std::cmp::Ordering;

/// Winner of a longest-ORF query over a collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LongestOrf {
    pub orf: Orf,
    pub id: Box<str>,
    pub frame: Frame,
}

impl LongestOrf {
    pub fn len(&self) -> usize {
        self.orf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orf.is_empty()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position of the ORF in its source record.
    pub fn start_offset(&self, collection: &SeqCollection) -> ScanResult<Option<usize>> {
        let record = collection.record(&self.id)?;
        Ok(start_offset(record.seq(), self.orf.as_bytes()))
    }

    fn cmp_candidate(&self, other: &Self) -> Ordering {
        self.orf
            .rank_cmp(&other.orf)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Longest-ORF queries, parameterised over the extraction rule.
#[derive(Clone, Debug, Default)]
pub struct OrfRanker<S = GreedyCursor> {
    selector: S,
}

impl<S: OrfSelector> OrfRanker<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn ranked(&self, seq: &[u8], frame: Frame) -> Option<Vec<Orf>> {
        rank(self.selector.select(seq, frame))
    }

    /// Greatest ORF of one sequence under the ranking order.
    pub fn best_in_sequence(&self, seq: &[u8], frame: Frame) -> Option<Orf> {
        self.selector
            .select(seq, frame)
            .into_iter()
            .max_by(Orf::rank_cmp)
    }

    pub fn longest_in_sequence(&self, seq: &[u8], frame: Frame) -> Option<usize> {
        self.best_in_sequence(seq, frame).map(|orf| orf.len())
    }

    pub fn longest_in_record(
        &self,
        collection: &SeqCollection,
        id: &str,
        frame: Frame,
    ) -> ScanResult<Option<usize>> {
        let record = collection.record(id)?;
        Ok(self.longest_in_sequence(record.seq(), frame))
    }

    fn best_over_collection(&self, collection: &SeqCollection, frame: Frame) -> Option<LongestOrf> {
        let bests: Vec<Option<Orf>> = par_map!(collection.records(), |record: &SeqRecord| {
            self.best_in_sequence(record.seq(), frame)
        });

        collection
            .iter()
            .zip(bests)
            .filter_map(|(record, best)| {
                best.map(|orf| LongestOrf {
                    orf,
                    id: record.id.clone(),
                    frame,
                })
            })
            .max_by(LongestOrf::cmp_candidate)
    }

    /// Longest ORF over every record in one frame.
    ///
    /// Equal lengths go to the greater ORF text, then to the greater identifier.
    pub fn longest_over_collection(
        &self,
        collection: &SeqCollection,
        frame: Frame,
    ) -> ScanResult<LongestOrf> {
        let best = self.best_over_collection(collection, frame);
        if let Some(best) = &best {
            log::debug!(
                "frame {frame}: longest orf has length {} in '{}'",
                best.len(),
                best.id
            );
        }
        best.ok_or(ScanError::EmptyInput {
            what: "no open reading frame in collection",
        })
    }

    /// Longest ORF over every record and all three forward frames.
    ///
    /// Frames are visited in order and a later frame only wins when strictly
    /// greater, so a tie keeps the lower frame.
    pub fn longest_over_frames(&self, collection: &SeqCollection) -> ScanResult<LongestOrf> {
        let mut best: Option<LongestOrf> = None;
        for frame in Frame::ALL {
            let Some(candidate) = self.best_over_collection(collection, frame) else {
                continue;
            };
            let replace = match &best {
                Some(current) => candidate.cmp_candidate(current) == Ordering::Greater,
                None => true,
            };
            if replace {
                best = Some(candidate);
            }
        }
        best.ok_or(ScanError::EmptyInput {
            what: "no open reading frame in collection",
        })
    }
}

pub fn longest_in_sequence(seq: &[u8], frame: Frame) -> Option<usize> {
    OrfRanker::<GreedyCursor>::default().longest_in_sequence(seq, frame)
}

pub fn longest_in_record(
    collection: &SeqCollection,
    id: &str,
    frame: Frame,
) -> ScanResult<Option<usize>> {
    OrfRanker::<GreedyCursor>::default().longest_in_record(collection, id, frame)
}

pub fn longest_over_collection(collection: &SeqCollection, frame: Frame) -> ScanResult<LongestOrf> {
    OrfRanker::<GreedyCursor>::default().longest_over_collection(collection, frame)
}

pub fn longest_over_frames(collection: &SeqCollection) -> ScanResult<LongestOrf> {
    OrfRanker::<GreedyCursor>::default().longest_over_frames(collection)
}

/// First index of `orf` in `seq` by plain substring search, or `None`.
pub fn start_offset(seq: &[u8], orf: &[u8]) -> Option<usize> {
    memmem::find(seq, orf)
}
