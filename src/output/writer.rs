//! Output file writing
//!
//! Unique sequences and their source words go to two files written in
//! lockstep: line N of one pairs with line N of the other.

use crate::core::SequenceIndex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write each unique sequence to `sequences` and its source word to `words`
///
/// Entries come out in first-discovery order, one value per line. Returns the
/// number of lines written to each destination.
///
/// # Errors
///
/// Returns an I/O error if either destination fails to accept a write.
///
/// # Examples
/// ```
/// use uniquely::core::SequenceIndex;
/// use uniquely::output::write_unique_sequences;
///
/// let mut index = SequenceIndex::new();
/// index.ingest("andy");
/// index.ingest("handy");
///
/// let (mut sequences, mut words) = (Vec::new(), Vec::new());
/// let written = write_unique_sequences(&index, &mut sequences, &mut words).unwrap();
///
/// assert_eq!(written, 1);
/// assert_eq!(sequences, b"hand\n");
/// assert_eq!(words, b"handy\n");
/// ```
pub fn write_unique_sequences<S: Write, W: Write>(
    index: &SequenceIndex,
    mut sequences: S,
    mut words: W,
) -> io::Result<usize> {
    let mut written = 0;

    for (sequence, sources) in index.unique_sequences() {
        writeln!(sequences, "{sequence}")?;
        writeln!(words, "{}", sources[0])?;
        written += 1;
    }

    sequences.flush()?;
    words.flush()?;
    Ok(written)
}

/// Create both output files and write the unique sequences into them
///
/// Existing files are truncated.
///
/// # Errors
///
/// Returns an I/O error if either file cannot be created or written.
pub fn write_unique_sequence_files(
    index: &SequenceIndex,
    sequences_path: &Path,
    words_path: &Path,
) -> io::Result<usize> {
    let sequences = BufWriter::new(File::create(sequences_path)?);
    let words = BufWriter::new(File::create(words_path)?);

    write_unique_sequences(index, sequences, words)
}
