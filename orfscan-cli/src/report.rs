//! Plain `key<TAB>value` reports over a loaded collection.

use anyhow::Result;
use log::warn;
use orfscan_core::lengths::{extreme, extreme_ids, lengths, Extreme};
use orfscan_core::orf::{longest_in_record, longest_over_collection, longest_over_frames};
use orfscan_core::{repeats, Frame, LongestOrf, ScanError, ScanResult, SeqCollection};
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameChoice {
    Single(Frame),
    All,
}

impl FrameChoice {
    fn label(self) -> String {
        match self {
            FrameChoice::Single(frame) => frame.to_string(),
            FrameChoice::All => "all".to_string(),
        }
    }
}

pub fn write_lengths<W: Write>(out: &mut W, collection: &SeqCollection) -> Result<()> {
    let map = lengths(collection);
    writeln!(out, "records\t{}", collection.len())?;
    for (label, which) in [("longest", Extreme::Longest), ("shortest", Extreme::Shortest)] {
        writeln!(out, "{label}_length\t{}", extreme(&map, which)?)?;
        writeln!(out, "{label}_ids\t{}", extreme_ids(&map, which)?.join(","))?;
    }
    Ok(())
}

pub fn write_longest_orf<W: Write>(
    out: &mut W,
    collection: &SeqCollection,
    choice: FrameChoice,
) -> Result<()> {
    writeln!(out, "frame\t{}", choice.label())?;
    let found = match choice {
        FrameChoice::Single(frame) => longest_over_collection(collection, frame),
        FrameChoice::All => longest_over_frames(collection),
    };
    let Some(best) = empty_as_none(found)? else {
        writeln!(out, "longest_orf_length\tnone")?;
        return Ok(());
    };
    write_orf_details(out, collection, &best)
}

fn write_orf_details<W: Write>(
    out: &mut W,
    collection: &SeqCollection,
    best: &LongestOrf,
) -> Result<()> {
    let start = best
        .start_offset(collection)?
        .map_or_else(|| "-1".to_string(), |offset| offset.to_string());
    writeln!(out, "longest_orf_length\t{}", best.len())?;
    writeln!(out, "longest_orf_id\t{}", best.id())?;
    writeln!(out, "longest_orf_frame\t{}", best.frame)?;
    writeln!(out, "longest_orf_start\t{start}")?;
    writeln!(out, "longest_orf\t{}", best.orf)?;
    Ok(())
}

pub fn write_record_orf<W: Write>(
    out: &mut W,
    collection: &SeqCollection,
    id: &str,
    choice: FrameChoice,
) -> Result<()> {
    let frames: Vec<Frame> = match choice {
        FrameChoice::Single(frame) => vec![frame],
        FrameChoice::All => Frame::ALL.to_vec(),
    };
    let mut longest: Option<usize> = None;
    for frame in frames {
        let len = longest_in_record(collection, id, frame)?;
        longest = longest.max(len);
    }
    writeln!(out, "id\t{id}")?;
    writeln!(out, "frame\t{}", choice.label())?;
    match longest {
        Some(len) => writeln!(out, "longest_orf_length\t{len}")?,
        None => writeln!(out, "longest_orf_length\tnone")?,
    }
    Ok(())
}

pub fn write_repeats<W: Write>(out: &mut W, collection: &SeqCollection, k: usize) -> Result<()> {
    let tally = repeats(collection, k);
    let top = tally.most_frequent();
    writeln!(out, "k\t{k}")?;
    match tally.max_count() {
        Some(max) => writeln!(out, "max_count\t{max}")?,
        None => writeln!(out, "max_count\tnone")?,
    }
    writeln!(out, "max_count_kmers\t{}", top.len())?;
    let kmers: Vec<String> = top
        .iter()
        .map(|(kmer, _)| String::from_utf8_lossy(kmer).into_owned())
        .collect();
    writeln!(out, "max_kmers\t{}", kmers.join(","))?;
    Ok(())
}

/// Lengths, longest ORFs per frame and overall, an optional record ORF, then
/// one repeat block per `k`, separated by blank lines.
pub fn write_report<W: Write>(
    out: &mut W,
    collection: &SeqCollection,
    id: Option<&str>,
    kmers: &[usize],
) -> Result<()> {
    write_lengths(out, collection)?;
    for frame in Frame::ALL {
        writeln!(out)?;
        write_longest_orf(out, collection, FrameChoice::Single(frame))?;
    }
    writeln!(out)?;
    write_longest_orf(out, collection, FrameChoice::All)?;
    if let Some(id) = id {
        writeln!(out)?;
        write_record_orf(out, collection, id, FrameChoice::All)?;
    }
    for &k in kmers {
        writeln!(out)?;
        write_repeats(out, collection, k)?;
    }
    Ok(())
}

fn empty_as_none<T>(result: ScanResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err @ ScanError::EmptyInput { .. }) => {
            warn!("{err}");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
