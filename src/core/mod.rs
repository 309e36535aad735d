//! Core domain types
//!
//! Sequence extraction and the sequence index. Everything here works on
//! in-memory strings and cannot fail.

mod index;
mod sequence;

pub use index::SequenceIndex;
pub use sequence::{SEQUENCE_LEN, Sequences, is_sequence, sequences_from};
