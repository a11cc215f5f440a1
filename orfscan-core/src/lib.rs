#[macro_use]
mod par;

pub mod error;
pub mod io;
pub mod lengths;
pub mod orf;
pub mod repeats;
pub mod seq;

pub use error::{ScanError, ScanResult};
pub use lengths::{extreme, extreme_ids, lengths, Extreme, LengthMap};
pub use orf::{Frame, LongestOrf, Orf};
pub use repeats::{repeats, RepeatTally};
pub use seq::{SeqCollection, SeqRecord};
