//! Question store against real CSV files.

use std::fs;

use party_trivia::core::{GameConfig, GameError, GameRng, PlayerId};
use party_trivia::game::GameEngine;
use party_trivia::questions::{CsvFile, Question, QuestionId, QuestionStore};

const HEADER: &str = "id,question,category,difficulty,used,correct_answer\n";

fn write_file(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("questions.csv");
    fs::write(&path, format!("{HEADER}{body}")).unwrap();
    path
}

/// Test that save then load reproduces every field.
#[test]
fn test_round_trip_is_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "1,Plain question?,1,1,False,Yes\n\
         2,\"Quoted, with comma and \"\"quotes\"\"?\",2,3,True,No\n\
         -7,Negative id?,0,-1,False,No\n",
    );

    let mut store = QuestionStore::open(CsvFile::new(&path)).unwrap();
    let before = store.list_all();
    store.save().unwrap();
    store.load().unwrap();

    assert_eq!(store.list_all(), before);
    assert_eq!(before[1].text, "Quoted, with comma and \"quotes\"?");
    assert_eq!(before[2].id, QuestionId::new(-7));
    assert_eq!(before[2].difficulty, -1);
}

/// Test that saved used flags survive reopening the file.
#[test]
fn test_saved_flags_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "1,Q1?,1,1,False,Yes\n2,Q2?,1,1,False,No\n");

    let mut store = QuestionStore::open(CsvFile::new(&path)).unwrap();
    store.mark_used(QuestionId::new(2));
    store.save().unwrap();

    let reopened = QuestionStore::open(CsvFile::new(&path)).unwrap();
    assert_eq!(reopened.count_unused(), 1);
    assert!(reopened.get_by_id(QuestionId::new(2)).unwrap().used);

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, format!("{HEADER}1,Q1?,1,1,False,Yes\n2,Q2?,1,1,True,No\n"));
}

/// Test that a missing file is a fatal NotFound.
#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuestionStore::open(CsvFile::new(dir.path().join("missing.csv"))).unwrap_err();
    assert!(matches!(err, GameError::NotFound { .. }));
    assert!(err.is_fatal_at_launch());
}

/// Test that malformed rows are fatal Format errors.
#[test]
fn test_malformed_files_are_format_errors() {
    let cases = [
        "1,Q?,1,1,False\n",
        "1,Q?,one,1,False,Yes\n",
        "1,Q?,1,1,nope,Yes\n",
        "1,Q?,1,1,False,Yes\n1,Dup?,1,1,False,No\n",
    ];

    for body in cases {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, body);
        let err = QuestionStore::open(CsvFile::new(&path)).unwrap_err();
        assert!(matches!(err, GameError::Format(_)), "{body:?} gave {err:?}");
        assert!(err.is_fatal_at_launch());
    }
}

/// Test that a wrong header is a Format error.
#[test]
fn test_bad_header_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.csv");
    fs::write(&path, "id,question,category\n1,Q?,1\n").unwrap();

    let err = QuestionStore::open(CsvFile::new(&path)).unwrap_err();
    assert!(matches!(err, GameError::Format(_)));
}

/// Test that opening an engine resets used flags only in memory.
#[test]
fn test_engine_open_resets_flags_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "1,Q1?,1,1,True,Yes\n2,Q2?,1,1,True,No\n");

    let config = GameConfig::default().with_questions_path(&path).with_seed(3);
    let engine = GameEngine::open(&config).unwrap();
    assert_eq!(engine.questions().count_unused(), 2);

    // Nothing written until a question resolves
    assert!(fs::read_to_string(&path).unwrap().contains("True,Yes"));

    let config = config.with_reset_on_launch(false);
    let engine = GameEngine::open(&config).unwrap();
    assert_eq!(engine.questions().count_unused(), 0);
}

/// Test that each answer is written to disk.
#[test]
fn test_engine_persists_each_answer() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "1,Q1?,1,1,False,Yes\n2,Q2?,1,1,False,No\n3,Q3?,1,1,False,No\n");

    let config = GameConfig::default().with_questions_path(&path).with_seed(11);
    let mut engine = GameEngine::open(&config).unwrap();
    engine.initialize_players(&["Alice", "Bob"]);
    engine.start_game();

    let q = engine.draw_question().unwrap();
    engine.player_answers(PlayerId::new(0), false).unwrap();

    let on_disk = QuestionStore::open(CsvFile::new(&path)).unwrap();
    assert_eq!(on_disk.count_unused(), 2);
    assert!(on_disk.get_by_id(q.id).unwrap().used);
}

/// Test that seeded draws from a file repeat.
#[test]
fn test_draws_from_file_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let body: String = (1..=10).map(|i| format!("{i},Q{i}?,1,1,False,Yes\n")).collect();
    let path = write_file(&dir, &body);

    let store = QuestionStore::open(CsvFile::new(&path)).unwrap();
    let draw = |seed: u64| -> Vec<Question> {
        let mut rng = GameRng::new(seed);
        (0..5).filter_map(|_| store.draw_random_unused(&mut rng)).collect()
    };

    assert_eq!(draw(99), draw(99));
}
