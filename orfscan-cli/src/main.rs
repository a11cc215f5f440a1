//! # orfscan
//!
//! Reports sequence length extremes, longest forward open reading frames and
//! most repeated k-mers for a FASTA (or CSV) sequence collection.
//!
//! ```bash
//! orfscan lengths dna.fasta
//! orfscan orf dna.fasta --frame 3
//! orfscan orf dna.fasta --all-frames
//! orfscan orf dna.fasta --id 'gi|142022655|gb|EQ086233.1|16'
//! orfscan repeats dna.fasta -k 12
//! orfscan report dna.fasta -k 6 12 7
//! orfscan report table.csv -f csv --id-col name --seq-col sequence
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use log::{debug, info};
use orfscan_core::Frame;
use std::io::{self, BufWriter, Write};

mod cli;
mod load;
mod report;

use cli::{Args, Commands};
use load::load_collection;
use report::FrameChoice;

fn init_logging(level: log::Level) {
    Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .target(Target::Stderr)
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    let start = std::time::Instant::now();
    let args = Args::parse();

    init_logging(args.level);
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("failed to configure the thread pool")?;
    debug!("using {} threads", args.threads);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Commands::Lengths(input) => {
            let collection = load_collection(&input)?;
            report::write_lengths(&mut out, &collection)?;
        }
        Commands::Orf(orf) => {
            let choice = if orf.all_frames {
                FrameChoice::All
            } else {
                FrameChoice::Single(Frame::new(orf.frame)?)
            };
            let collection = load_collection(&orf.input)?;
            match orf.id.as_deref() {
                Some(id) => report::write_record_orf(&mut out, &collection, id, choice)?,
                None => report::write_longest_orf(&mut out, &collection, choice)?,
            }
        }
        Commands::Repeats(rep) => {
            let collection = load_collection(&rep.input)?;
            report::write_repeats(&mut out, &collection, rep.k)?;
        }
        Commands::Report(rep) => {
            let collection = load_collection(&rep.input)?;
            report::write_report(&mut out, &collection, rep.id.as_deref(), &rep.kmers)?;
        }
    }
    out.flush()?;

    info!("Elapsed time: {:.3?}", start.elapsed());
    Ok(())
}
