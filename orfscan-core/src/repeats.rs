//! Repeated k-mer counting.
//!
//! A k-mer only enters the collection-wide tally through a record in which it
//! occurs at least twice, and only that record's count is added. Counting is
//! split into three stages so each can be checked on its own:
//! [`local_tally`], [`retain_repeated`], and [`RepeatTally::merge`].

use crate::seq::collection::SeqCollection;
use std::collections::HashMap;

/// Window counts for a single sequence, borrowing the k-mers from it.
pub type LocalTally<'a> = HashMap<&'a [u8], usize>;

/// Count every length-`n` window of `seq`.
///
/// `n == 0` or `n > seq.len()` gives an empty tally.
pub fn local_tally(seq: &[u8], n: usize) -> LocalTally<'_> {
    let mut tally = LocalTally::new();
    if n == 0 {
        return tally;
    }
    for kmer in seq.windows(n) {
        *tally.entry(kmer).or_insert(0) += 1;
    }
    tally
}

/// Drop k-mers seen only once in their sequence.
pub fn retain_repeated(mut tally: LocalTally<'_>) -> LocalTally<'_> {
    tally.retain(|_, count| *count > 1);
    tally
}

/// Collection-wide k-mer counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepeatTally {
    k: usize,
    counts: HashMap<Box<[u8]>, usize>,
}

impl RepeatTally {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            counts: HashMap::new(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Add every entry of `local` to the running counts.
    pub fn merge(&mut self, local: &LocalTally<'_>) {
        for (&kmer, &count) in local {
            match self.counts.get_mut(kmer) {
                Some(total) => *total += count,
                None => {
                    self.counts.insert(kmer.into(), count);
                }
            }
        }
    }

    pub fn get(&self, kmer: &[u8]) -> Option<usize> {
        self.counts.get(kmer).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> {
        self.counts.iter().map(|(kmer, &count)| (kmer.as_ref(), count))
    }

    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Every k-mer at the maximum count, sorted by k-mer.
    pub fn most_frequent(&self) -> Vec<(&[u8], usize)> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };
        let mut top: Vec<(&[u8], usize)> = self
            .iter()
            .filter(|&(_, count)| count == max)
            .collect();
        top.sort_unstable_by(|a, b| a.0.cmp(b.0));
        top
    }
}

/// Repeated length-`n` substrings across `collection`.
pub fn repeats(collection: &SeqCollection, n: usize) -> RepeatTally {
    let locals: Vec<LocalTally<'_>> = par_map!(collection.records(), |record| {
        retain_repeated(local_tally(record.seq(), n))
    });

    let mut tally = RepeatTally::new(n);
    for local in &locals {
        tally.merge(local);
    }
    log::debug!(
        "k={n}: {} repeated k-mers across {} records",
        tally.len(),
        collection.len()
    );
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collection(pairs: &[(&str, &str)]) -> SeqCollection {
        SeqCollection::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn single_base_run() {
        let tally = repeats(&collection(&[("r1", "AAAA")]), 1);
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.get(b"A"), Some(4));
    }

    #[test]
    fn singletons_never_survive() {
        let tally = repeats(&collection(&[("r1", "AC"), ("r2", "GT")]), 1);
        assert!(tally.is_empty());
    }

    #[test]
    fn cross_record_totals_do_not_count() {
        // "AC" occurs once in each record: two in total, but never repeated.
        let tally = repeats(&collection(&[("r1", "AC"), ("r2", "AC")]), 2);
        assert!(tally.is_empty());
    }

    #[test]
    fn within_record_survival() {
        let tally = repeats(&collection(&[("r1", "ATAT")]), 2);
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.get(b"AT"), Some(2));
        assert_eq!(tally.get(b"TA"), None);
    }

    #[test]
    fn merge_sums_only_repeating_records() {
        let tally = repeats(
            &collection(&[("r1", "ATAT"), ("r2", "ATATAT"), ("r3", "ATG")]),
            2,
        );
        // r1 AT=2; r2 AT=3, TA=2; r3 AT=1 is dropped.
        assert_eq!(tally.get(b"AT"), Some(5));
        assert_eq!(tally.get(b"TA"), Some(2));
        assert_eq!(tally.get(b"TG"), None);
    }

    #[test]
    fn degenerate_lengths_yield_nothing() {
        let coll = collection(&[("r1", "AAAA"), ("r2", "AA")]);
        assert!(repeats(&coll, 0).is_empty());
        assert!(repeats(&coll, 5).is_empty());
        // k longer than r2 only drops r2's contribution.
        assert_eq!(repeats(&coll, 3).get(b"AAA"), Some(2));
        assert!(repeats(&SeqCollection::new(), 3).is_empty());
    }

    #[test]
    fn stages_are_independent() {
        let local = local_tally(b"ACACG", 2);
        assert_eq!(local.get(b"AC".as_slice()), Some(&2));
        assert_eq!(local.get(b"CA".as_slice()), Some(&1));
        assert_eq!(local.get(b"CG".as_slice()), Some(&1));

        let kept = retain_repeated(local);
        assert_eq!(kept.len(), 1);

        let mut tally = RepeatTally::new(2);
        tally.merge(&kept);
        tally.merge(&kept);
        assert_eq!(tally.get(b"AC"), Some(4));
        assert_eq!(tally.k(), 2);
    }

    #[test]
    fn case_is_significant() {
        let tally = repeats(&collection(&[("r1", "aaAA")]), 1);
        assert_eq!(tally.get(b"a"), Some(2));
        assert_eq!(tally.get(b"A"), Some(2));
    }

    #[test]
    fn most_frequent_reports_all_ties() {
        let tally = repeats(&collection(&[("r1", "CCAA"), ("r2", "GGGTT")]), 1);
        assert_eq!(tally.max_count(), Some(3));
        assert_eq!(tally.most_frequent(), vec![(b"G".as_slice(), 3)]);

        let tally = repeats(&collection(&[("r1", "TTAACC")]), 1);
        assert_eq!(
            tally.most_frequent(),
            vec![
                (b"A".as_slice(), 2),
                (b"C".as_slice(), 2),
                (b"T".as_slice(), 2)
            ]
        );
        assert!(RepeatTally::new(4).most_frequent().is_empty());
        assert_eq!(RepeatTally::new(4).max_count(), None);
    }

    proptest! {
        #[test]
        fn every_entry_repeats_somewhere(
            seqs in prop::collection::vec(
                prop::collection::vec(
                    prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                    0..40,
                ),
                0..5,
            ),
            n in 0usize..5,
        ) {
            let coll = SeqCollection::from_pairs(
                seqs.iter().enumerate().map(|(i, s)| (format!("r{i}"), s.clone())),
            ).unwrap();
            let tally = repeats(&coll, n);
            for (kmer, count) in tally.iter() {
                prop_assert_eq!(kmer.len(), n);
                let expected: usize = seqs
                    .iter()
                    .map(|s| s.windows(n).filter(|w| *w == kmer).count())
                    .filter(|&c| c > 1)
                    .sum();
                prop_assert_eq!(count, expected);
                prop_assert!(count >= 2);
            }
        }
    }
}
