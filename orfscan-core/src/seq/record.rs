#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: Vec<u8>,
}

impl SeqRecord {
    pub fn new(id: impl Into<Box<str>>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            desc: None,
            seq: seq.into(),
        }
    }

    /// Record from sequence text that may be wrapped or padded; ASCII
    /// whitespace is dropped and everything else is kept byte for byte.
    pub fn from_text(id: impl Into<Box<str>>, text: &str) -> Self {
        let mut record = Self::new(id, Vec::with_capacity(text.len()));
        record.extend_residues(text.as_bytes());
        record
    }

    /// Append `chunk` to the sequence, skipping ASCII whitespace.
    pub fn extend_residues(&mut self, chunk: &[u8]) {
        self.seq
            .extend(chunk.iter().copied().filter(|b| !b.is_ascii_whitespace()));
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn into_seq(self) -> Vec<u8> {
        self.seq
    }
}
