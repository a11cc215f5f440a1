use crate::error::{ScanError, ScanResult};
use std::fmt;

pub const START_CODONS: &[&[u8]] = &[b"ATG"];
pub const STOP_CODONS: &[&[u8]] = &[b"TAA", b"TAG", b"TGA"];

/// One of the three forward reading frames, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frame {
    One,
    Two,
    Three,
}

impl Frame {
    pub const ALL: [Frame; 3] = [Frame::One, Frame::Two, Frame::Three];

    pub fn new(frame: usize) -> ScanResult<Self> {
        match frame {
            1 => Ok(Frame::One),
            2 => Ok(Frame::Two),
            3 => Ok(Frame::Three),
            _ => Err(ScanError::InvalidFrame { frame }),
        }
    }

    /// First base of the frame (0-based).
    pub fn offset(self) -> usize {
        match self {
            Frame::One => 0,
            Frame::Two => 1,
            Frame::Three => 2,
        }
    }

    pub fn number(self) -> usize {
        self.offset() + 1
    }
}

impl TryFrom<usize> for Frame {
    type Error = ScanError;

    fn try_from(frame: usize) -> ScanResult<Self> {
        Frame::new(frame)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Offsets of in-frame codons that match any entry in `codons`.
///
/// Offsets are absolute positions in `seq`. A trailing window shorter than
/// three bases never matches. Comparison is byte-exact, so lowercase input
/// does not match.
pub fn codon_positions(seq: &[u8], frame: Frame, codons: &[&[u8]]) -> Vec<usize> {
    (frame.offset()..seq.len())
        .step_by(3)
        .filter(|&i| {
            seq.get(i..i + 3)
                .is_some_and(|window| codons.iter().any(|c| *c == window))
        })
        .collect()
}

pub fn start_positions(seq: &[u8], frame: Frame) -> Vec<usize> {
    codon_positions(seq, frame, START_CODONS)
}

pub fn stop_positions(seq: &[u8], frame: Frame) -> Vec<usize> {
    codon_positions(seq, frame, STOP_CODONS)
}

/// Start and stop codon offsets of one sequence in one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodonPositions {
    pub starts: Vec<usize>,
    pub stops: Vec<usize>,
}

impl CodonPositions {
    pub fn scan(seq: &[u8], frame: Frame) -> Self {
        Self {
            starts: start_positions(seq, frame),
            stops: stop_positions(seq, frame),
        }
    }
}
