//! Command implementations

pub mod inspect;
pub mod process;

pub use inspect::{InspectResult, SequenceReport, inspect_word, inspect_words};
pub use process::{ProcessConfig, ProcessOutcome, ProcessSummary, process_file};
