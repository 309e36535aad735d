//! Uniquely
//!
//! Finds the four-letter sequences that occur in exactly one word of a word
//! list, and writes each one next to the word it came from.
//!
//! # Quick Start
//!
//! ```rust
//! use uniquely::core::SequenceIndex;
//!
//! let mut index = SequenceIndex::new();
//! for line in ["andy", "handy"] {
//!     index.ingest(line);
//! }
//!
//! // "andy" comes from both words, "hand" only from "handy"
//! let unique: Vec<&str> = index.unique_sequences().map(|(seq, _)| seq).collect();
//! assert_eq!(unique, ["hand"]);
//! ```

// Core domain types
pub mod core;

// Word list input
pub mod wordlists;

// Command implementations
pub mod commands;

// Result files and terminal output
pub mod output;
