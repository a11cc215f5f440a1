pub mod collection;
pub mod record;

pub use collection::{count_records, SeqCollection};
pub use record::SeqRecord;
