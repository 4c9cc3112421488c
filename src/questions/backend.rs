//! Backing resources for the question store.
//!
//! The store never touches files directly. It reads and writes whole tables
//! through a `QuestionBackend`, so the engine can run against a CSV file in
//! production and against memory in tests.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use super::codec;
use super::question::Question;
use crate::core::GameError;

/// Whole-table persistence for questions.
pub trait QuestionBackend {
    /// Read every persisted question, in stored order.
    ///
    /// # Errors
    ///
    /// `NotFound` if the resource is absent, `Format` if it is malformed.
    fn read(&mut self) -> Result<Vec<Question>, GameError>;

    /// Overwrite the resource with `questions`.
    ///
    /// # Errors
    ///
    /// `Io` on write failure. A failed write is not rolled back.
    fn write(&mut self, questions: &[Question]) -> Result<(), GameError>;
}

/// A CSV file on disk.
#[derive(Clone, Debug)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionBackend for CsvFile {
    fn read(&mut self) -> Result<Vec<Question>, GameError> {
        if !self.path.exists() {
            return Err(GameError::NotFound {
                path: self.path.clone(),
            });
        }

        let file = File::open(&self.path)?;
        codec::read_questions(BufReader::new(file))
    }

    fn write(&mut self, questions: &[Question]) -> Result<(), GameError> {
        let file = File::create(&self.path)?;
        codec::write_questions(BufWriter::new(file), questions)
    }
}

/// In-memory table. Counts writes so callers can check persistence happened.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    stored: Vec<Question>,
    writes: usize,
}

impl MemoryBackend {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            stored: questions,
            writes: 0,
        }
    }

    /// The last written table (or the initial one if never written).
    #[must_use]
    pub fn stored(&self) -> &[Question] {
        &self.stored
    }

    /// Number of successful `write` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl QuestionBackend for MemoryBackend {
    fn read(&mut self) -> Result<Vec<Question>, GameError> {
        Ok(self.stored.clone())
    }

    fn write(&mut self, questions: &[Question]) -> Result<(), GameError> {
        self.stored = questions.to_vec();
        self.writes += 1;
        Ok(())
    }
}
