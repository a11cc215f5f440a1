//! Sequence collections from delimited tables with a header row.

use crate::error::{ScanError, ScanResult};
use crate::io::{LoadReport, RowPolicy, SkippedRow};
use crate::seq::collection::SeqCollection;
use crate::seq::record::SeqRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fmt;
use std::path::Path;

/// A column picked by header name or by 0-based position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnSel {
    Name(String),
    Index(usize),
}

impl ColumnSel {
    fn locate(&self, headers: &StringRecord, path: &str) -> ScanResult<usize> {
        match self {
            ColumnSel::Name(name) => headers.iter().position(|h| h == name).ok_or_else(|| {
                ScanError::CsvMissingColumn {
                    name: name.clone(),
                    headers: headers.iter().map(str::to_string).collect(),
                    path: path.to_string(),
                }
            }),
            ColumnSel::Index(index) if *index < headers.len() => Ok(*index),
            ColumnSel::Index(index) => Err(ScanError::CsvColumnIndexOutOfRange {
                index: *index,
                ncols: headers.len(),
                path: path.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColumnSel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSel::Name(name) => f.write_str(name),
            ColumnSel::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Which columns feed the identifier, sequence and description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvLayout {
    pub id: ColumnSel,
    pub seq: ColumnSel,
    pub desc: Option<ColumnSel>,
}

impl CsvLayout {
    pub fn new(id: ColumnSel, seq: ColumnSel) -> Self {
        Self { id, seq, desc: None }
    }

    pub fn with_desc(mut self, desc: ColumnSel) -> Self {
        self.desc = Some(desc);
        self
    }
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self::new(ColumnSel::Name("id".into()), ColumnSel::Name("seq".into()))
    }
}

/// Column positions of a layout within one file.
struct Positions {
    id: usize,
    seq: usize,
    desc: Option<usize>,
}

/// A row that could not become a record, with the column to blame.
struct BadRow<'r> {
    id: Option<&'r str>,
    column: &'r ColumnSel,
    error: ScanError,
}

fn row_to_record<'r>(
    row: &'r StringRecord,
    row_no: usize,
    at: &Positions,
    layout: &'r CsvLayout,
    path: &str,
) -> Result<SeqRecord, BadRow<'r>> {
    let id = row.get(at.id).map(str::trim);
    let bad = |column: &'r ColumnSel, error: ScanError| BadRow { id, column, error };

    let Some(id_text) = id else {
        return Err(bad(
            &layout.id,
            ScanError::CsvMissingField {
                row: row_no,
                column: layout.id.to_string(),
                path: path.to_string(),
            },
        ));
    };
    if id_text.is_empty() {
        return Err(bad(
            &layout.id,
            ScanError::CsvEmptyIdentifier {
                row: row_no,
                column: layout.id.to_string(),
                path: path.to_string(),
            },
        ));
    }
    let Some(seq_text) = row.get(at.seq) else {
        return Err(bad(
            &layout.seq,
            ScanError::CsvMissingField {
                row: row_no,
                column: layout.seq.to_string(),
                path: path.to_string(),
            },
        ));
    };

    let record = SeqRecord::from_text(id_text, seq_text);
    let desc = at
        .desc
        .and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|d| !d.is_empty());
    Ok(match desc {
        Some(desc) => record.with_desc(desc),
        None => record,
    })
}

/// Load a sequence collection from a CSV table with a header row.
///
/// Rows missing a selected field, or with a blank identifier, either abort the
/// load ([`RowPolicy::Fail`]) or are listed in [`LoadReport::skipped`]
/// ([`RowPolicy::Skip`]). A repeated identifier always aborts the load.
pub fn read_csv_collection(
    path: impl AsRef<Path>,
    layout: &CsvLayout,
    policy: RowPolicy,
) -> ScanResult<LoadReport> {
    let path = path.as_ref().display().to_string();
    log::debug!("reading csv collection from {path}");
    let parse_error = |source: csv::Error| ScanError::CsvParse {
        path: path.clone(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(&path)
        .map_err(parse_error)?;
    let headers = reader.headers().map_err(parse_error)?.clone();
    let at = Positions {
        id: layout.id.locate(&headers, &path)?,
        seq: layout.seq.locate(&headers, &path)?,
        desc: layout
            .desc
            .as_ref()
            .map(|sel| sel.locate(&headers, &path))
            .transpose()?,
    };

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut row = StringRecord::new();
    let mut row_no = 0;
    while reader.read_record(&mut row).map_err(parse_error)? {
        row_no += 1;
        match row_to_record(&row, row_no, &at, layout, &path) {
            Ok(record) => records.push(record),
            Err(bad) if policy == RowPolicy::Skip => {
                log::warn!("skipping csv row {row_no}: {}", bad.error);
                skipped.push(SkippedRow {
                    row: row_no,
                    id: bad.id.filter(|id| !id.is_empty()).map(Into::into),
                    column: bad.column.to_string().into(),
                    reason: bad.error.to_string().into(),
                });
            }
            Err(bad) => return Err(bad.error),
        }
    }

    let collection = SeqCollection::from_records(records)?;
    Ok(LoadReport {
        collection,
        skipped,
    })
}
