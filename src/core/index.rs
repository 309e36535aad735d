//! Sequence index
//!
//! Maps each sequence to the source words that produced it, in the order the
//! sequences were first discovered.

use super::sequence::sequences_from;
use rustc_hash::FxHashMap;

/// Mapping from sequence to the ordered list of its source words
///
/// Iteration follows first-discovery order of each sequence. Source lists keep
/// insertion order and are never deduplicated, so a word that appears on two
/// lines is recorded twice. Every sequence in the index has at least one
/// source word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceIndex {
    entries: Vec<(String, Vec<String>)>,
    positions: FxHashMap<String, usize>,
    words_read: usize,
}

impl SequenceIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `source` produced `sequence`
    ///
    /// The first time a sequence is seen it gets a fresh, empty source list;
    /// afterwards `source` is appended to the existing list.
    ///
    /// # Examples
    /// ```
    /// use uniquely::core::SequenceIndex;
    ///
    /// let mut index = SequenceIndex::new();
    /// index.add_sequence("andy", "dandy");
    /// index.add_sequence("andy", "handy");
    /// assert_eq!(index.get("andy"), Some(&["dandy".to_string(), "handy".to_string()][..]));
    /// ```
    pub fn add_sequence(&mut self, sequence: &str, source: &str) {
        if let Some(&pos) = self.positions.get(sequence) {
            self.entries[pos].1.push(source.to_string());
        } else {
            self.positions.insert(sequence.to_string(), self.entries.len());
            self.entries.push((sequence.to_string(), vec![source.to_string()]));
        }
    }

    /// Ingest one line of input
    ///
    /// Trims surrounding whitespace, then records every sequence of the
    /// trimmed word with that word as its source. Returns how many sequences
    /// were recorded.
    pub fn ingest(&mut self, line: &str) -> usize {
        let word = line.trim();
        let mut added = 0;

        for sequence in sequences_from(word) {
            self.add_sequence(sequence, word);
            added += 1;
        }

        self.words_read += 1;
        added
    }

    /// Entries whose sequence came from exactly one source word
    ///
    /// Keeps the same sequence → sources shape as [`SequenceIndex::iter`], in
    /// the same order. Reading does not change the index.
    ///
    /// # Examples
    /// ```
    /// use uniquely::core::SequenceIndex;
    ///
    /// let mut index = SequenceIndex::new();
    /// index.ingest("andy");
    /// index.ingest("handy");
    ///
    /// let unique: Vec<_> = index.unique_sequences().collect();
    /// assert_eq!(unique, [("hand", &["handy".to_string()][..])]);
    /// ```
    pub fn unique_sequences(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(_, sources)| sources.len() == 1)
    }

    /// Number of unique sequences
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.unique_sequences().count()
    }

    /// All entries in first-discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(sequence, sources)| (sequence.as_str(), sources.as_slice()))
    }

    /// Source words recorded for a sequence
    #[must_use]
    pub fn get(&self, sequence: &str) -> Option<&[String]> {
        self.positions
            .get(sequence)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, sequence: &str) -> bool {
        self.positions.contains_key(sequence)
    }

    /// Number of distinct sequences
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lines passed to [`SequenceIndex::ingest`]
    #[inline]
    #[must_use]
    pub const fn words_read(&self) -> usize {
        self.words_read
    }

    /// Total number of recorded (sequence, source) pairs
    #[must_use]
    pub fn occurrences(&self) -> usize {
        self.entries.iter().map(|(_, sources)| sources.len()).sum()
    }

    /// Drop every entry so the index can be reused
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
        self.words_read = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn new_index_is_empty() {
        let index = SequenceIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.unique_count(), 0);
        assert_eq!(index.words_read(), 0);
    }

    #[test]
    fn add_sequence_creates_entry() {
        let mut index = SequenceIndex::new();
        assert!(!index.contains("andy"));

        index.add_sequence("andy", "handy");

        assert!(index.contains("andy"));
        assert_eq!(index.get("andy").unwrap(), sources(&["handy"]));
    }

    #[test]
    fn add_sequence_appends_to_existing() {
        let mut index = SequenceIndex::new();
        index.add_sequence("andy", "dandy");
        index.add_sequence("andy", "handy");

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("andy").unwrap(), sources(&["dandy", "handy"]));
    }

    #[test]
    fn add_sequence_keeps_duplicate_sources() {
        let mut index = SequenceIndex::new();
        index.add_sequence("word", "words");
        index.add_sequence("word", "words");

        assert_eq!(index.get("word").unwrap(), sources(&["words", "words"]));
        assert_eq!(index.unique_count(), 0);
    }

    #[test]
    fn keys_do_not_share_source_lists() {
        let mut index = SequenceIndex::new();
        index.add_sequence("word", "words");
        index.add_sequence("ords", "swords");

        assert_eq!(index.get("word").unwrap(), sources(&["words"]));
        assert_eq!(index.get("ords").unwrap(), sources(&["swords"]));
    }

    #[test]
    fn sequences_are_case_sensitive() {
        let mut index = SequenceIndex::new();
        index.ingest("Word");
        index.ingest("word");

        assert_eq!(index.len(), 2);
        assert_eq!(index.unique_count(), 2);
    }

    #[test]
    fn unique_sequences_all_unique() {
        let mut index = SequenceIndex::new();
        index.add_sequence("word", "words");
        index.add_sequence("ords", "words");

        let unique: Vec<_> = index.unique_sequences().collect();
        let all: Vec<_> = index.iter().collect();
        assert_eq!(unique, all);
    }

    #[test]
    fn unique_sequences_filters_shared() {
        let mut index = SequenceIndex::new();
        index.add_sequence("andy", "handy");
        index.add_sequence("word", "words");
        index.add_sequence("ords", "words");
        index.add_sequence("andy", "dandy");

        let unique: Vec<_> = index.unique_sequences().collect();
        let words = sources(&["words"]);
        assert_eq!(
            unique,
            [("word", words.as_slice()), ("ords", words.as_slice())]
        );
    }

    #[test]
    fn unique_sequences_is_pure() {
        let mut index = SequenceIndex::new();
        index.ingest("andy");
        index.ingest("handy");
        let before = index.clone();

        let first: Vec<_> = index.unique_sequences().collect();
        let second: Vec<_> = index.unique_sequences().collect();

        assert_eq!(first, second);
        assert_eq!(index, before);
    }

    #[test]
    fn ingest_trims_and_records_sources() {
        let mut index = SequenceIndex::new();
        let added = index.ingest("  words\r\n");

        assert_eq!(added, 2);
        assert_eq!(index.words_read(), 1);
        assert_eq!(index.get("word").unwrap(), sources(&["words"]));
        assert_eq!(index.get("ords").unwrap(), sources(&["words"]));
    }

    #[test]
    fn ingest_shared_sequence_scenario() {
        let mut index = SequenceIndex::new();
        index.ingest("andy");
        index.ingest("handy");

        assert_eq!(index.get("andy").unwrap(), sources(&["andy", "handy"]));
        assert_eq!(index.get("hand").unwrap(), sources(&["handy"]));

        let unique: Vec<_> = index.unique_sequences().map(|(seq, _)| seq).collect();
        assert_eq!(unique, ["hand"]);
    }

    #[test]
    fn ingest_short_and_blank_lines() {
        let mut index = SequenceIndex::new();
        assert_eq!(index.ingest(""), 0);
        assert_eq!(index.ingest("is"), 0);

        assert!(index.is_empty());
        assert_eq!(index.words_read(), 2);
    }

    #[test]
    fn iteration_follows_discovery_order() {
        let mut index = SequenceIndex::new();
        index.ingest("words");
        index.ingest("count");
        index.ingest("sword");

        let order: Vec<_> = index.iter().map(|(seq, _)| seq).collect();
        assert_eq!(order, ["word", "ords", "coun", "ount", "swor"]);
    }

    #[test]
    fn occurrences_counts_every_pair() {
        let mut index = SequenceIndex::new();
        index.ingest("andy");
        index.ingest("handy");
        index.ingest("dandy");

        // andy x3, hand, dand
        assert_eq!(index.occurrences(), 5);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn clear_resets_everything() {
        let mut index = SequenceIndex::new();
        index.ingest("words");
        index.clear();

        assert!(index.is_empty());
        assert!(!index.contains("word"));
        assert_eq!(index.words_read(), 0);

        index.ingest("word");
        assert_eq!(index.get("word").unwrap(), sources(&["word"]));
    }
}
