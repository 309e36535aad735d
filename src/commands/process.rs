//! Word list processing command
//!
//! Reads the input word list, then writes every sequence unique to one source
//! word alongside that word.

use crate::core::SequenceIndex;
use crate::output::write_unique_sequence_files;
use crate::wordlists::loader::parse_file_with_progress;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Default input word list
pub const DEFAULT_INPUT_PATH: &str = "dictionary.txt";
/// Default destination for unique sequences
pub const DEFAULT_SEQUENCES_PATH: &str = "sequences.txt";
/// Default destination for the source words paired with each sequence
pub const DEFAULT_WORDS_PATH: &str = "words.txt";

/// Configuration for processing a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Word list to read, one word per line
    pub input_path: PathBuf,
    /// Receives the unique sequences, one per line
    pub sequences_path: PathBuf,
    /// Receives the source word of each unique sequence, line-aligned with
    /// `sequences_path`
    pub words_path: PathBuf,
    /// Show a spinner while the input is read
    pub show_progress: bool,
}

impl ProcessConfig {
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sequences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sequences_path = path.into();
        self
    }

    #[must_use]
    pub fn with_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_path = path.into();
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            sequences_path: PathBuf::from(DEFAULT_SEQUENCES_PATH),
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            show_progress: false,
        }
    }
}

/// Statistics from a completed run
#[derive(Debug, Clone)]
pub struct ProcessSummary {
    pub input_path: PathBuf,
    pub sequences_path: PathBuf,
    pub words_path: PathBuf,
    pub words_read: usize,
    pub distinct_sequences: usize,
    pub occurrences: usize,
    pub unique_sequences: usize,
    pub duration: Duration,
}

/// What happened when processing a word list
#[derive(Debug, Clone)]
pub enum ProcessOutcome {
    /// The input file does not exist; nothing was written
    MissingInput(PathBuf),
    /// Both output files were written
    Completed(ProcessSummary),
}

/// Process the configured word list
///
/// Output files are only created once the input has been read in full, so a
/// missing input leaves no trace on disk.
///
/// # Errors
///
/// Returns an error if the input exists but cannot be read, or if either
/// output file cannot be written.
pub fn process_file(config: &ProcessConfig) -> Result<ProcessOutcome> {
    let start = Instant::now();
    let mut index = SequenceIndex::new();

    let progress = if config.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {pos} lines ({per_sec})")
                .context("invalid progress template")?,
        );
        pb.set_message(format!("Reading {}", config.input_path.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let found = parse_file_with_progress(&mut index, &config.input_path, &progress)
        .with_context(|| format!("failed to read {}", config.input_path.display()))?;
    progress.finish_and_clear();

    if !found {
        return Ok(ProcessOutcome::MissingInput(config.input_path.clone()));
    }

    tracing::debug!(
        words = index.words_read(),
        sequences = index.len(),
        "index built"
    );

    let unique_sequences =
        write_unique_sequence_files(&index, &config.sequences_path, &config.words_path)
            .with_context(|| {
                format!(
                    "failed to write {} and {}",
                    config.sequences_path.display(),
                    config.words_path.display()
                )
            })?;

    tracing::info!(unique_sequences, "wrote unique sequences");

    Ok(ProcessOutcome::Completed(ProcessSummary {
        input_path: config.input_path.clone(),
        sequences_path: config.sequences_path.clone(),
        words_path: config.words_path.clone(),
        words_read: index.words_read(),
        distinct_sequences: index.len(),
        occurrences: index.occurrences(),
        unique_sequences,
        duration: start.elapsed(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> ProcessConfig {
        ProcessConfig::new(dir.join("dictionary.txt"))
            .with_sequences_path(dir.join("sequences.txt"))
            .with_words_path(dir.join("words.txt"))
    }

    #[test]
    fn defaults_match_documented_paths() {
        let config = ProcessConfig::default();
        assert_eq!(config.input_path, Path::new("dictionary.txt"));
        assert_eq!(config.sequences_path, Path::new("sequences.txt"));
        assert_eq!(config.words_path, Path::new("words.txt"));
        assert!(!config.show_progress);
    }

    #[test]
    fn paths_are_independently_overridable() {
        let config = ProcessConfig::new("in.txt").with_words_path("w.txt");
        assert_eq!(config.input_path, Path::new("in.txt"));
        assert_eq!(config.sequences_path, Path::new("sequences.txt"));
        assert_eq!(config.words_path, Path::new("w.txt"));
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());

        let outcome = process_file(&config).unwrap();

        assert!(matches!(outcome, ProcessOutcome::MissingInput(ref p) if p == &config.input_path));
        assert!(!config.sequences_path.exists());
        assert!(!config.words_path.exists());
    }

    #[test]
    fn writes_unique_sequences_and_sources() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input_path, "words\ncount\n").unwrap();

        let ProcessOutcome::Completed(summary) = process_file(&config).unwrap() else {
            panic!("expected completed run");
        };

        assert_eq!(summary.words_read, 2);
        assert_eq!(summary.distinct_sequences, 4);
        assert_eq!(summary.unique_sequences, 4);
        assert_eq!(
            fs::read_to_string(&config.sequences_path).unwrap(),
            "word\nords\ncoun\nount\n"
        );
        assert_eq!(
            fs::read_to_string(&config.words_path).unwrap(),
            "words\nwords\ncount\ncount\n"
        );
    }

    #[test]
    fn shared_sequences_are_left_out() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input_path, "andy\nhandy\n").unwrap();

        let ProcessOutcome::Completed(summary) = process_file(&config).unwrap() else {
            panic!("expected completed run");
        };

        assert_eq!(summary.distinct_sequences, 2);
        assert_eq!(summary.occurrences, 3);
        assert_eq!(summary.unique_sequences, 1);
        assert_eq!(fs::read_to_string(&config.sequences_path).unwrap(), "hand\n");
        assert_eq!(fs::read_to_string(&config.words_path).unwrap(), "handy\n");
    }

    #[test]
    fn repeated_word_is_not_unique() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input_path, "zebra\nzebra\n").unwrap();

        let ProcessOutcome::Completed(summary) = process_file(&config).unwrap() else {
            panic!("expected completed run");
        };

        assert_eq!(summary.unique_sequences, 0);
        assert_eq!(fs::read_to_string(&config.sequences_path).unwrap(), "");
        assert_eq!(fs::read_to_string(&config.words_path).unwrap(), "");
    }
}
