//! Sequence extraction
//!
//! A sequence is a run of exactly four ASCII letters taken from a source word.
//! Extraction slides a four-byte window across the word from left to right and
//! keeps every window made only of letters. Case is preserved.

use std::iter::FusedIterator;

/// Number of characters in a sequence
pub const SEQUENCE_LEN: usize = 4;

/// Check whether `text` is a valid sequence
///
/// # Examples
/// ```
/// use uniquely::core::is_sequence;
///
/// assert!(is_sequence("Word"));
/// assert!(!is_sequence("www1"));
/// assert!(!is_sequence("words"));
/// ```
#[inline]
#[must_use]
pub fn is_sequence(text: &str) -> bool {
    text.len() == SEQUENCE_LEN && text.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Derive the sequences of a word, left to right
///
/// The word is expected to be trimmed already. Overlapping windows are all
/// reported, so `"words"` yields `"word"` then `"ords"`. Words shorter than
/// four characters yield nothing.
///
/// # Examples
/// ```
/// use uniquely::core::sequences_from;
///
/// let found: Vec<&str> = sequences_from("numb3r1").collect();
/// assert_eq!(found, ["numb"]);
/// ```
#[must_use]
pub fn sequences_from(word: &str) -> Sequences<'_> {
    Sequences { word, offset: 0 }
}

/// Lazy iterator over the sequences of one word
///
/// A clone continues from the same position. Call [`sequences_from`] again
/// to start over.
#[derive(Debug, Clone)]
pub struct Sequences<'a> {
    word: &'a str,
    offset: usize,
}

impl<'a> Iterator for Sequences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.word.as_bytes();

        while self.offset + SEQUENCE_LEN <= bytes.len() {
            let start = self.offset;
            self.offset += 1;

            let window = &bytes[start..start + SEQUENCE_LEN];
            if window.iter().all(u8::is_ascii_alphabetic) {
                // All-ASCII window, so both ends sit on char boundaries
                return Some(&self.word[start..start + SEQUENCE_LEN]);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.word.len() + 1).saturating_sub(self.offset + SEQUENCE_LEN);
        (0, Some(remaining))
    }
}

impl FusedIterator for Sequences<'_> {}
