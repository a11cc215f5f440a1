use super::*;
use crate::error::ScanError;
use crate::seq::collection::SeqCollection;
use proptest::prelude::*;

fn collection(pairs: &[(&str, &str)]) -> SeqCollection {
    SeqCollection::from_pairs(pairs.iter().copied()).unwrap()
}

// ─── longest within one sequence ────────────────────────────

#[test]
fn longest_in_sequence_matches_ranked_max() {
    let seq = b"CCCATGCCCTAGATGTAAATGTGAATGAAATAA";
    let ranked = ranked_orfs(seq, Frame::One).unwrap();
    assert_eq!(
        longest_in_sequence(seq, Frame::One),
        ranked.last().map(|o| o.len())
    );
    assert_eq!(longest_in_sequence(seq, Frame::One), Some(9));
}

#[test]
fn longest_in_sequence_none_without_orfs() {
    assert_eq!(longest_in_sequence(b"ATGCCCTAA", Frame::One), None);
    assert_eq!(longest_in_sequence(b"", Frame::Three), None);
}

#[test]
fn longest_in_record_by_id() {
    let coll = collection(&[("a", "CCCATGAAATAG"), ("b", "GGGGGG")]);
    assert_eq!(longest_in_record(&coll, "a", Frame::One).unwrap(), Some(9));
    assert_eq!(longest_in_record(&coll, "b", Frame::One).unwrap(), None);
    match longest_in_record(&coll, "c", Frame::One).unwrap_err() {
        ScanError::InvalidIdentifier { id } => assert_eq!(id, "c"),
        other => panic!("expected invalid identifier error, got {other:?}"),
    }
}

// ─── longest over a collection ──────────────────────────────

#[test]
fn longer_orf_wins_over_text() {
    let coll = collection(&[("a", "CCCATGTTTTTTTAA"), ("b", "CCCATGTGA")]);
    let best = longest_over_collection(&coll, Frame::One).unwrap();
    assert_eq!(best.len(), 12);
    assert_eq!(best.id(), "a");
    assert_eq!(best.frame, Frame::One);
}

#[test]
fn equal_length_greater_text_wins() {
    let coll = collection(&[("z", "CCCATGTAA"), ("a", "CCCATGTGA")]);
    let best = longest_over_collection(&coll, Frame::One).unwrap();
    assert_eq!(best.orf.as_bytes(), b"ATGTGA");
    assert_eq!(best.id(), "a");
}

#[test]
fn equal_text_greater_identifier_wins() {
    let coll = collection(&[("b", "CCCATGTAA"), ("c", "GGGATGTAA"), ("a", "TTTATGTAA")]);
    let best = longest_over_collection(&coll, Frame::One).unwrap();
    assert_eq!(best.orf.as_bytes(), b"ATGTAA");
    assert_eq!(best.id(), "c");
}

#[test]
fn record_best_is_greatest_text_among_its_longest() {
    let coll = collection(&[("only", "CCCATGTAAATGTGA")]);
    let best = longest_over_collection(&coll, Frame::One).unwrap();
    assert_eq!(best.orf.to_string(), "ATGTGA");
}

#[test]
fn no_orf_is_empty_input() {
    let coll = collection(&[("a", "AAAA"), ("b", "ATGTAA")]);
    assert!(matches!(
        longest_over_collection(&coll, Frame::One),
        Err(ScanError::EmptyInput { .. })
    ));
    assert!(matches!(
        longest_over_collection(&SeqCollection::new(), Frame::Two),
        Err(ScanError::EmptyInput { .. })
    ));
    assert!(matches!(
        longest_over_frames(&coll),
        Err(ScanError::EmptyInput { .. })
    ));
}

#[test]
fn longest_over_frames_finds_other_frame() {
    let coll = collection(&[("r1", "CATGAAACCCTAAG"), ("r2", "CCCATGTAA")]);
    let frame_one = longest_over_collection(&coll, Frame::One).unwrap();
    assert_eq!(frame_one.id(), "r2");

    let best = longest_over_frames(&coll).unwrap();
    assert_eq!(best.orf.as_bytes(), b"TGAAACCCTAAG");
    assert_eq!(best.id(), "r1");
    assert_eq!(best.frame, Frame::Two);
}

#[test]
fn clipped_frame_two_orf_loses_to_frame_one() {
    // Frame 2 yields "TGTAA", clipped at the end of the shifted sequence.
    let coll = collection(&[("x", "CCCATGTAAGATGTAA")]);
    let best = longest_over_frames(&coll).unwrap();
    assert_eq!(best.orf.as_bytes(), b"ATGTAA");
    assert_eq!(best.frame, Frame::One);
}

/// Every frame yields the whole sequence, so all frames tie.
struct WholeSequence;

impl OrfSelector for WholeSequence {
    fn select(&self, seq: &[u8], _frame: Frame) -> Vec<Orf> {
        vec![Orf::new(seq)]
    }
}

#[test]
fn longest_over_frames_tie_keeps_lower_frame() {
    let coll = collection(&[("x", "ATGAAATAA")]);
    let best = OrfRanker::new(WholeSequence)
        .longest_over_frames(&coll)
        .unwrap();
    assert_eq!(best.orf.as_bytes(), b"ATGAAATAA");
    assert_eq!(best.frame, Frame::One);
}

// ─── start offset ───────────────────────────────────────────

#[test]
fn start_offset_first_match() {
    assert_eq!(start_offset(b"GGATGTAAATGTAA", b"ATGTAA"), Some(2));
    assert_eq!(start_offset(b"GGATGTAAATGTAA", b"ATGTGA"), None);
    assert_eq!(start_offset(b"ACGT", b""), Some(0));
}

#[test]
fn start_offset_of_longest_orf() {
    let coll = collection(&[("r1", "CATGAAACCCTAAG"), ("r2", "CCCATGTAA")]);
    let best = longest_over_collection(&coll, Frame::Two).unwrap();
    assert_eq!(best.orf.as_bytes(), b"TGAAACCCTAAG");
    assert_eq!(best.start_offset(&coll).unwrap(), Some(2));

    let stray = LongestOrf {
        orf: Orf::new("ATGTAA"),
        id: "missing".into(),
        frame: Frame::One,
    };
    assert!(matches!(
        stray.start_offset(&coll),
        Err(ScanError::InvalidIdentifier { .. })
    ));
}

// ─── swapping the extraction rule ───────────────────────────

struct FirstStartOnly;

impl OrfSelector for FirstStartOnly {
    fn select(&self, seq: &[u8], frame: Frame) -> Vec<Orf> {
        let positions = CodonPositions::scan(seq, frame);
        positions
            .starts
            .first()
            .and_then(|&start| {
                positions
                    .stops
                    .iter()
                    .find(|&&stop| stop > start)
                    .map(|&stop| Orf::new(&seq[start..stop + 3]))
            })
            .into_iter()
            .collect()
    }
}

#[test]
fn ranker_uses_supplied_selector() {
    // The greedy rule skips the start at offset 0; this one does not.
    let seq = b"ATGCCCTAAATGAAATAG";
    let greedy = OrfRanker::<GreedyCursor>::default();
    let first = OrfRanker::new(FirstStartOnly);
    assert_eq!(greedy.longest_in_sequence(seq, Frame::One), Some(9));
    assert_eq!(first.longest_in_sequence(seq, Frame::One), Some(9));
    assert_eq!(
        first.ranked(seq, Frame::One).unwrap()[0].as_bytes(),
        b"ATGCCCTAA"
    );
}

// ─── properties ─────────────────────────────────────────────

fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
        0..max_len,
    )
}

proptest! {
    #[test]
    fn frame_one_orfs_run_start_to_stop(seq in dna(150)) {
        for orf in extract_orfs(&seq, Frame::One) {
            prop_assert_eq!(orf.len() % 3, 0);
            prop_assert!(orf.len() >= 6);
            prop_assert!(orf.as_bytes().starts_with(b"ATG"));
            let tail = &orf.as_bytes()[orf.len() - 3..];
            prop_assert!(STOP_CODONS.iter().any(|stop| *stop == tail));
        }
    }
}

proptest! {
    #[test]
    fn shifted_frames_cut_past_the_start_codon(seq in dna(150), frame in 2usize..=3) {
        let frame = Frame::new(frame).unwrap();
        let shift = frame.offset();
        let starts = CodonPositions::scan(&seq, frame).starts;
        for orf in extract_orfs(&seq, frame) {
            // Each ORF begins `shift` bases into some start codon.
            let found = starts
                .iter()
                .any(|&start| seq[start + shift..].starts_with(orf.as_bytes()));
            prop_assert!(found);
            prop_assert!(!orf.is_empty());
        }
    }
}

proptest! {
    #[test]
    fn longest_agrees_with_ranked(seq in dna(150), frame in 1usize..=3) {
        let frame = Frame::new(frame).unwrap();
        let expected = ranked_orfs(&seq, frame)
            .map(|ranked| ranked.iter().map(Orf::len).max().unwrap_or(0));
        prop_assert_eq!(longest_in_sequence(&seq, frame), expected);
    }
}

proptest! {
    #[test]
    fn start_offset_is_first_occurrence(seq in dna(60), needle in dna(5)) {
        match start_offset(&seq, &needle) {
            Some(i) => {
                prop_assert!(seq[i..].starts_with(&needle));
                for j in 0..i {
                    prop_assert!(!seq[j..].starts_with(&needle));
                }
            }
            None => {
                prop_assert!(seq.windows(needle.len().max(1)).all(|w| w != needle.as_slice()));
                prop_assert!(!needle.is_empty());
            }
        }
    }
}
