//! Terminal and file output
//!
//! Writers for the two result files and display utilities for CLI results.

pub mod display;
pub mod formatters;
pub mod writer;

pub use display::{print_inspect_result, print_process_summary};
pub use writer::{write_unique_sequence_files, write_unique_sequences};
