//! Word inspection command
//!
//! Shows the sequences of a word and how many source words share each one.

use crate::core::{SequenceIndex, sequences_from};
use crate::wordlists::loader::parse_file;
use anyhow::{Context, Result, bail};
use std::path::Path;

/// One sequence of an inspected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    pub sequence: String,
    /// Number of source lines that produced this sequence
    pub sources: usize,
    /// First source word recorded for the sequence, if any
    pub first_source: Option<String>,
}

impl SequenceReport {
    /// Whether exactly one source word produced this sequence
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.sources == 1
    }
}

/// Result of inspecting a word
#[derive(Debug, Clone)]
pub struct InspectResult {
    pub word: String,
    pub sequences: Vec<SequenceReport>,
}

impl InspectResult {
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.sequences.iter().filter(|r| r.is_unique()).count()
    }
}

/// Inspect a word against an index
///
/// The word is trimmed like an input line. Sequences the index has never seen
/// are reported with zero sources.
///
/// # Examples
/// ```
/// use uniquely::commands::inspect_word;
/// use uniquely::core::SequenceIndex;
///
/// let mut index = SequenceIndex::new();
/// index.ingest("andy");
/// index.ingest("handy");
///
/// let result = inspect_word("handy", &index);
/// assert_eq!(result.sequences.len(), 2);
/// assert!(result.sequences[0].is_unique());
/// assert_eq!(result.sequences[1].sources, 2);
/// ```
#[must_use]
pub fn inspect_word(word: &str, index: &SequenceIndex) -> InspectResult {
    let word = word.trim();

    let sequences = sequences_from(word)
        .map(|sequence| {
            let sources = index.get(sequence).unwrap_or_default();
            SequenceReport {
                sequence: sequence.to_string(),
                sources: sources.len(),
                first_source: sources.first().cloned(),
            }
        })
        .collect();

    InspectResult {
        word: word.to_string(),
        sequences,
    }
}

/// Load the word list at `input_path` and inspect each word against it
///
/// # Errors
///
/// Returns an error if the word list does not exist or cannot be read.
pub fn inspect_words<S: AsRef<str>>(
    words: &[S],
    input_path: &Path,
) -> Result<Vec<InspectResult>> {
    let mut index = SequenceIndex::new();

    let found = parse_file(&mut index, input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    if !found {
        bail!("File {} does not exist", input_path.display());
    }

    Ok(words
        .iter()
        .map(|word| inspect_word(word.as_ref(), &index))
        .collect())
}
