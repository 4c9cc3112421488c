//! The question pool and its used flags.
//!
//! `QuestionStore` is the only writer of `used` and the only party that
//! talks to the backing resource. Every read accessor hands out copies.

use rustc_hash::FxHashMap;

use super::backend::QuestionBackend;
use super::question::{Question, QuestionId};
use crate::core::{GameError, GameRng};

/// Question pool backed by a [`QuestionBackend`].
///
/// ## Example
///
/// ```
/// use party_trivia::core::GameRng;
/// use party_trivia::questions::{MemoryBackend, Question, QuestionId, QuestionStore};
///
/// let backend = MemoryBackend::new(vec![
///     Question::new(QuestionId::new(1), "Ever sung in the shower?", 1, 1, true),
///     Question::new(QuestionId::new(2), "Ever missed a flight?", 1, 2, false),
/// ]);
/// let mut store = QuestionStore::open(backend).unwrap();
/// let mut rng = GameRng::new(42);
///
/// let q = store.draw_random_unused(&mut rng).unwrap();
/// assert!(store.mark_used(q.id));
/// assert_eq!(store.count_unused(), 1);
/// ```
#[derive(Debug)]
pub struct QuestionStore<B> {
    backend: B,
    questions: Vec<Question>,
    index: FxHashMap<QuestionId, usize>,
}

impl<B: QuestionBackend> QuestionStore<B> {
    /// Create a store and load it from `backend`.
    ///
    /// # Errors
    ///
    /// Propagates `NotFound`/`Format` from the backend, and returns `Format`
    /// if two rows share an id.
    pub fn open(backend: B) -> Result<Self, GameError> {
        let mut store = Self {
            backend,
            questions: Vec::new(),
            index: FxHashMap::default(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory pool with the persisted one.
    ///
    /// On error the previous in-memory pool is kept.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub fn load(&mut self) -> Result<(), GameError> {
        let questions = self.backend.read()?;

        let mut index = FxHashMap::default();
        for (pos, q) in questions.iter().enumerate() {
            if index.insert(q.id, pos).is_some() {
                return Err(GameError::Format(format!("duplicate question id {}", q.id.raw())));
            }
        }

        tracing::debug!(total = questions.len(), "loaded questions");
        self.questions = questions;
        self.index = index;
        Ok(())
    }

    /// Write the current pool, overwriting the backing resource.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the write fails.
    pub fn save(&mut self) -> Result<(), GameError> {
        self.backend.write(&self.questions)?;
        tracing::debug!(unused = self.count_unused(), "saved questions");
        Ok(())
    }

    /// Uniformly pick one unused question. `None` when the pool is exhausted.
    pub fn draw_random_unused(&self, rng: &mut GameRng) -> Option<Question> {
        let unused: Vec<&Question> = self.questions.iter().filter(|q| !q.used).collect();
        rng.choose(&unused).map(|q| (*q).clone())
    }

    /// Mark a question used. Returns whether the id exists; repeated calls
    /// are harmless.
    pub fn mark_used(&mut self, id: QuestionId) -> bool {
        match self.index.get(&id) {
            Some(&pos) => {
                self.questions[pos].used = true;
                true
            }
            None => false,
        }
    }

    /// Clear every used flag.
    pub fn reset_all(&mut self) {
        for q in &mut self.questions {
            q.used = false;
        }
    }

    #[must_use]
    pub fn count_unused(&self) -> usize {
        self.questions.iter().filter(|q| !q.used).count()
    }

    #[must_use]
    pub fn count_total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn get_by_id(&self, id: QuestionId) -> Option<Question> {
        self.index.get(&id).map(|&pos| self.questions[pos].clone())
    }

    #[must_use]
    pub fn list_all(&self) -> Vec<Question> {
        self.questions.clone()
    }

    #[must_use]
    pub fn list_unused(&self) -> Vec<Question> {
        self.questions.iter().filter(|q| !q.used).cloned().collect()
    }

    /// The backing resource.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::MemoryBackend;

    fn sample_store() -> QuestionStore<MemoryBackend> {
        let questions = vec![
            Question::new(QuestionId::new(1), "Q1?", 1, 1, true),
            Question::new(QuestionId::new(2), "Q2?", 1, 2, false),
            Question::new(QuestionId::new(3), "Q3?", 2, 1, true),
        ];
        QuestionStore::open(MemoryBackend::new(questions)).unwrap()
    }

    #[test]
    fn test_load_counts() {
        let store = sample_store();
        assert_eq!(store.count_total(), 3);
        assert_eq!(store.count_unused(), 3);
        assert_eq!(store.list_unused().len(), 3);
    }

    #[test]
    fn test_mark_used() {
        let mut store = sample_store();

        assert!(store.mark_used(QuestionId::new(1)));
        assert_eq!(store.count_unused(), 2);

        // Idempotent
        assert!(store.mark_used(QuestionId::new(1)));
        assert_eq!(store.count_unused(), 2);

        assert!(!store.mark_used(QuestionId::new(99)));
        assert_eq!(store.count_unused(), 2);
    }

    #[test]
    fn test_reset_all() {
        let mut store = sample_store();
        store.mark_used(QuestionId::new(1));
        store.mark_used(QuestionId::new(2));

        store.reset_all();
        assert_eq!(store.count_unused(), store.count_total());
    }

    #[test]
    fn test_draw_skips_used() {
        let mut store = sample_store();
        store.mark_used(QuestionId::new(1));
        store.mark_used(QuestionId::new(3));

        let mut rng = GameRng::new(42);
        for _ in 0..20 {
            let q = store.draw_random_unused(&mut rng).unwrap();
            assert_eq!(q.id, QuestionId::new(2));
        }
    }

    #[test]
    fn test_draw_exhausted_returns_none() {
        let mut store = sample_store();
        for id in 1..=3 {
            store.mark_used(QuestionId::new(id));
        }

        let mut rng = GameRng::new(42);
        assert!(store.draw_random_unused(&mut rng).is_none());
    }

    #[test]
    fn test_draw_does_not_mark_used() {
        let store = sample_store();
        let mut rng = GameRng::new(1);

        store.draw_random_unused(&mut rng).unwrap();
        assert_eq!(store.count_unused(), 3);
    }

    #[test]
    fn test_accessors_return_copies() {
        let mut store = sample_store();

        let mut copy = store.get_by_id(QuestionId::new(2)).unwrap();
        copy.used = true;
        copy.text.push_str(" edited");

        let mut all = store.list_all();
        all[0].used = true;

        assert_eq!(store.count_unused(), 3);
        assert_eq!(store.get_by_id(QuestionId::new(2)).unwrap().text, "Q2?");

        // And the reverse: store mutations don't reach earlier copies
        let before = store.get_by_id(QuestionId::new(3)).unwrap();
        store.mark_used(QuestionId::new(3));
        assert!(!before.used);
    }

    #[test]
    fn test_get_by_id_missing() {
        let store = sample_store();
        assert!(store.get_by_id(QuestionId::new(42)).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let questions = vec![
            Question::new(QuestionId::new(1), "Q1?", 1, 1, true),
            Question::new(QuestionId::new(1), "Q1 again?", 1, 1, false),
        ];
        let err = QuestionStore::open(MemoryBackend::new(questions)).unwrap_err();
        assert!(matches!(err, GameError::Format(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_save_writes_current_flags() {
        let mut store = sample_store();
        store.mark_used(QuestionId::new(3));
        store.save().unwrap();

        assert_eq!(store.backend().writes(), 1);
        let stored = store.backend().stored();
        assert!(stored.iter().find(|q| q.id == QuestionId::new(3)).unwrap().used);
        assert_eq!(stored.iter().filter(|q| q.used).count(), 1);
    }

    #[test]
    fn test_load_discards_unsaved_flags() {
        let mut store = sample_store();
        store.mark_used(QuestionId::new(1));

        store.load().unwrap();
        assert_eq!(store.count_unused(), 3);
    }
}
