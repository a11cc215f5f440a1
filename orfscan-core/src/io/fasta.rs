//! Streaming FASTA reader.
//!
//! A header line is `>` followed by the identifier (its first whitespace
//! separated token) and an optional free-text description. Sequence lines
//! run until the next header and are joined with whitespace removed. Blank
//! lines before the first header are ignored; any other text there is a
//! format error.

use crate::error::{ScanError, ScanResult};
use crate::seq::collection::SeqCollection;
use crate::seq::record::SeqRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
struct Header {
    id: Box<str>,
    desc: Option<Box<str>>,
}

impl Header {
    /// Parse the text after `>`.
    fn parse(text: &str, line: usize) -> ScanResult<Self> {
        let text = text.trim();
        let (id, desc) = match text.split_once(char::is_whitespace) {
            Some((id, rest)) => (id, Some(rest.trim_start())),
            None => (text, None),
        };
        if id.is_empty() {
            return Err(ScanError::FastaFormat {
                msg: "empty header",
                line,
            });
        }
        Ok(Self {
            id: id.into(),
            desc: desc.filter(|d| !d.is_empty()).map(Into::into),
        })
    }

    fn into_record(self) -> SeqRecord {
        let record = SeqRecord::new(self.id, Vec::new());
        match self.desc {
            Some(desc) => record.with_desc(desc),
            None => record,
        }
    }
}

/// Iterator over the records of a FASTA stream, in file order.
pub struct FastaRecords<R> {
    lines: Lines<R>,
    line_no: usize,
    lookahead: Option<Header>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            lookahead: None,
        }
    }

    fn next_line(&mut self) -> Option<ScanResult<String>> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.map_err(ScanError::from))
    }

    /// Header of the first record, skipping leading blank lines.
    fn first_header(&mut self) -> Option<ScanResult<Header>> {
        loop {
            let line = match self.next_line()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            if let Some(text) = line.strip_prefix('>') {
                return Some(Header::parse(text, self.line_no));
            }
            if !line.trim().is_empty() {
                return Some(Err(ScanError::FastaFormat {
                    msg: "expected header line starting with '>'",
                    line: self.line_no,
                }));
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = ScanResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.lookahead.take() {
            Some(header) => header,
            None => match self.first_header()? {
                Ok(header) => header,
                Err(err) => return Some(Err(err)),
            },
        };

        let mut record = header.into_record();
        while let Some(line) = self.next_line() {
            let line = match line {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            if let Some(text) = line.strip_prefix('>') {
                match Header::parse(text, self.line_no) {
                    Ok(next) => self.lookahead = Some(next),
                    Err(err) => return Some(Err(err)),
                }
                break;
            }
            record.extend_residues(line.as_bytes());
        }
        Some(Ok(record))
    }
}

pub fn read_fasta_collection_from_reader<R: BufRead>(reader: R) -> ScanResult<SeqCollection> {
    let records = FastaRecords::new(reader).collect::<ScanResult<Vec<_>>>()?;
    SeqCollection::from_records(records)
}

pub fn read_fasta_collection_from_path(path: impl AsRef<Path>) -> ScanResult<SeqCollection> {
    let path = path.as_ref();
    log::debug!("reading fasta collection from {}", path.display());
    read_fasta_collection_from_reader(BufReader::new(File::open(path)?))
}

pub fn read_fasta_collection_from_bytes(data: &[u8]) -> ScanResult<SeqCollection> {
    read_fasta_collection_from_reader(data)
}
