//! Word list input
//!
//! Reading word lists from files or any buffered reader into a sequence index.

pub mod loader;

pub use loader::{parse_file, parse_stream};
