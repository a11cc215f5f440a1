use crate::orf::codon::{CodonPositions, Frame};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// An open reading frame as cut by an [`OrfSelector`]. Under [`GreedyCursor`]
/// a frame-1 ORF runs from a start codon through a stop codon, inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orf {
    seq: Vec<u8>,
}

impl Orf {
    pub fn new(seq: impl Into<Vec<u8>>) -> Self {
        Self { seq: seq.into() }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.seq
    }

    pub fn as_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.seq)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.seq
    }

    /// Ranking order: shorter first, equal lengths broken by byte-wise text order.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.as_bytes().cmp(other.as_bytes()))
    }
}

impl Ord for Orf {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_cmp(other)
    }
}

impl PartialOrd for Orf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Orf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str_lossy())
    }
}

/// Rule that turns one sequence and frame into its ORFs.
pub trait OrfSelector: Send + Sync {
    fn select(&self, seq: &[u8], frame: Frame) -> Vec<Orf>;
}

/// Greedy start-to-first-stop pairing with a fixed-step cursor.
///
/// Starts are visited in order. A start pairs with the first stop after it,
/// but only if it lies past the cursor; each accepted ORF moves the cursor
/// forward by one codon rather than to the consumed stop. A start at offset 0
/// therefore never pairs, and later starts may reuse a stop that an earlier
/// ORF already ended on.
///
/// Codon offsets are absolute positions in `seq`, but the ORF text is cut from
/// the frame-shifted sequence (`seq` minus its first `frame - 1` bases) with
/// those same offsets, unadjusted. In frames 2 and 3 the text therefore starts
/// one or two bases after the start codon, and an ORF that runs past the end
/// of the shifted sequence is clipped there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreedyCursor;

impl OrfSelector for GreedyCursor {
    fn select(&self, seq: &[u8], frame: Frame) -> Vec<Orf> {
        let CodonPositions { starts, stops } = CodonPositions::scan(seq, frame);
        let shifted = seq.get(frame.offset()..).unwrap_or_default();

        let mut boundary = 0usize;
        let mut orfs = Vec::new();
        for &start in &starts {
            let accepted = stops
                .iter()
                .find(|&&stop| start < stop && start > boundary);
            if let Some(&stop) = accepted {
                let end = (stop + 3).min(shifted.len());
                orfs.push(Orf::new(&shifted[start.min(end)..end]));
                boundary += 3;
            }
        }
        orfs
    }
}

/// ORFs of `seq` in `frame`, in start-offset order.
pub fn extract_orfs(seq: &[u8], frame: Frame) -> Vec<Orf> {
    GreedyCursor.select(seq, frame)
}

pub(crate) fn rank(mut orfs: Vec<Orf>) -> Option<Vec<Orf>> {
    if orfs.is_empty() {
        return None;
    }
    orfs.sort_by(Orf::rank_cmp);
    Some(orfs)
}

/// ORFs sorted ascending by length, then text; `None` when there are none.
pub fn ranked_orfs(seq: &[u8], frame: Frame) -> Option<Vec<Orf>> {
    rank(extract_orfs(seq, frame))
}
