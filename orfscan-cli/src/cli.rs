use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "orfscan",
    about = "Length, ORF and repeat statistics for FASTA/CSV sequence collections",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 't',
        long = "threads",
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = num_cpus::get(),
        global = true
    )]
    pub threads: usize,

    #[arg(
        short = 'L',
        long = "level",
        help = "Logging level",
        value_name = "LEVEL",
        default_value_t = log::Level::Info,
        global = true
    )]
    pub level: log::Level,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record count and longest/shortest sequence lengths
    Lengths(InputArgs),

    /// Longest open reading frame in a frame, or across all forward frames
    Orf(OrfArgs),

    /// Most repeated k-mers
    Repeats(RepeatArgs),

    /// Every statistic in one run
    Report(ReportArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Fasta,
    Csv,
}

#[derive(Debug, ClapArgs)]
pub struct InputArgs {
    #[arg(help = "Path to the sequence file", value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(
        short = 'f',
        long = "format",
        help = "Input format",
        value_enum,
        default_value_t = InputFormat::Fasta
    )]
    pub format: InputFormat,

    #[arg(long = "id-col", help = "CSV identifier column", default_value = "id")]
    pub id_col: String,

    #[arg(long = "seq-col", help = "CSV sequence column", default_value = "seq")]
    pub seq_col: String,

    #[arg(long = "desc-col", help = "CSV description column")]
    pub desc_col: Option<String>,

    #[arg(
        long = "skip-invalid",
        help = "Skip CSV rows with missing fields or blank identifiers instead of failing"
    )]
    pub skip_invalid: bool,
}

#[derive(Debug, Parser)]
pub struct OrfArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(
        short = 'r',
        long = "frame",
        help = "Forward reading frame (1, 2 or 3)",
        value_name = "FRAME",
        default_value_t = 1,
        conflicts_with = "all_frames"
    )]
    pub frame: usize,

    #[arg(short = 'a', long = "all-frames", help = "Search all three forward frames")]
    pub all_frames: bool,

    #[arg(short = 'i', long = "id", help = "Restrict to one sequence identifier")]
    pub id: Option<String>,
}

#[derive(Debug, Parser)]
pub struct RepeatArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short = 'k', long = "kmer", help = "Repeat length", value_name = "K")]
    pub k: usize,
}

#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short = 'i', long = "id", help = "Also report the longest ORF of this identifier")]
    pub id: Option<String>,

    #[arg(
        short = 'k',
        long = "kmer",
        help = "Repeat lengths to report",
        value_name = "K",
        num_args = 1..,
        default_values_t = [6usize, 12, 7]
    )]
    pub kmers: Vec<usize>,
}
