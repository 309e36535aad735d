//! Word list loading
//!
//! Streams a word list into a [`SequenceIndex`] one line at a time, so the
//! input never has to fit in memory.

use crate::core::SequenceIndex;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Feed every line of `reader` into `index`
///
/// Lines are processed in order. Bytes that are not valid UTF-8 are replaced,
/// which only means they cannot take part in a sequence. Returns the number
/// of lines read.
///
/// # Errors
///
/// Returns an I/O error if reading from `reader` fails.
///
/// # Examples
/// ```
/// use uniquely::core::SequenceIndex;
/// use uniquely::wordlists::loader::parse_stream;
///
/// let mut index = SequenceIndex::new();
/// let lines = parse_stream(&mut index, "words\ncount\n".as_bytes()).unwrap();
///
/// assert_eq!(lines, 2);
/// assert_eq!(index.len(), 4);
/// ```
pub fn parse_stream<R: BufRead>(index: &mut SequenceIndex, reader: R) -> io::Result<usize> {
    parse_stream_with_progress(index, reader, &ProgressBar::hidden())
}

/// Same as [`parse_stream`], ticking `progress` as lines are read
///
/// # Errors
///
/// Returns an I/O error if reading from `reader` fails.
pub fn parse_stream_with_progress<R: BufRead>(
    index: &mut SequenceIndex,
    mut reader: R,
    progress: &ProgressBar,
) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut lines = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        index.ingest(&String::from_utf8_lossy(&buf));
        lines += 1;

        if lines % 4096 == 0 {
            progress.set_position(lines as u64);
        }
    }

    progress.set_position(lines as u64);
    Ok(lines)
}

/// Feed the file at `path` into `index`
///
/// A missing file is an expected outcome rather than an error: a warning
/// naming the path is logged and `Ok(false)` is returned with the index left
/// untouched. Returns `Ok(true)` once the whole file has been read.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use uniquely::core::SequenceIndex;
/// use uniquely::wordlists::loader::parse_file;
///
/// let mut index = SequenceIndex::new();
/// if parse_file(&mut index, "dictionary.txt").unwrap() {
///     println!("{} distinct sequences", index.len());
/// }
/// ```
pub fn parse_file<P: AsRef<Path>>(index: &mut SequenceIndex, path: P) -> io::Result<bool> {
    parse_file_with_progress(index, path, &ProgressBar::hidden())
}

/// Same as [`parse_file`], ticking `progress` as lines are read
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be opened or read.
pub fn parse_file_with_progress<P: AsRef<Path>>(
    index: &mut SequenceIndex,
    path: P,
    progress: &ProgressBar,
) -> io::Result<bool> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::warn!("File {} does not exist", path.display());
        return Ok(false);
    }

    let file = File::open(path)?;
    let lines = parse_stream_with_progress(index, BufReader::new(file), progress)?;
    tracing::debug!(path = %path.display(), lines, "parsed word list");

    Ok(true)
}
