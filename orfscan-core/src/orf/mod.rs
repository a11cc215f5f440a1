//! Forward-strand open reading frames.
//!
//! `codon` finds in-frame start/stop codons, `extract` pairs them into ORFs,
//! and `rank` answers longest-ORF questions over sequences and collections.

pub mod codon;
pub mod extract;
pub mod rank;

pub use codon::{codon_positions, CodonPositions, Frame, START_CODONS, STOP_CODONS};
pub use extract::{extract_orfs, ranked_orfs, GreedyCursor, Orf, OrfSelector};
pub use rank::{
    longest_in_record, longest_in_sequence, longest_over_collection, longest_over_frames,
    start_offset, LongestOrf, OrfRanker,
};

#[cfg(test)]
mod tests;
