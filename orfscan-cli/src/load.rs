use anyhow::{Context, Result};
use log::{info, warn};
use orfscan_core::io::csv::{read_csv_collection, ColumnSel, CsvLayout};
use orfscan_core::io::fasta::read_fasta_collection_from_path;
use orfscan_core::io::RowPolicy;
use orfscan_core::SeqCollection;

use crate::cli::{InputArgs, InputFormat};

fn csv_layout(args: &InputArgs) -> CsvLayout {
    let layout = CsvLayout::new(
        ColumnSel::Name(args.id_col.clone()),
        ColumnSel::Name(args.seq_col.clone()),
    );
    match &args.desc_col {
        Some(desc) => layout.with_desc(ColumnSel::Name(desc.clone())),
        None => layout,
    }
}

pub fn load_collection(args: &InputArgs) -> Result<SeqCollection> {
    let path = &args.input;
    let collection = match args.format {
        InputFormat::Fasta => read_fasta_collection_from_path(path)
            .with_context(|| format!("failed to load FASTA file {}", path.display()))?,
        InputFormat::Csv => {
            let policy = if args.skip_invalid {
                RowPolicy::Skip
            } else {
                RowPolicy::Fail
            };
            let report = read_csv_collection(path, &csv_layout(args), policy)
                .with_context(|| format!("failed to load CSV file {}", path.display()))?;
            if !report.is_clean() {
                warn!(
                    "skipped {} CSV rows in {}",
                    report.skipped.len(),
                    path.display()
                );
            }
            report.into_collection()
        }
    };

    info!(
        "loaded {} sequences from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}
