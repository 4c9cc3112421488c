//! Question pool: records, CSV codec, backing resources, and the store.

pub mod backend;
pub mod codec;
pub mod question;
pub mod store;

pub use backend::{CsvFile, MemoryBackend, QuestionBackend};
pub use question::{Question, QuestionId};
pub use store::QuestionStore;
