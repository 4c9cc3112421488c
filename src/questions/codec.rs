//! CSV encoding of the question table.
//!
//! Fixed column order: `id, question, category, difficulty, used, correct_answer`.
//!
//! - `used` is written `True`/`False`, read as `true`/`false` in any case
//! - `correct_answer` is written `Yes`/`No`, read as `yes`/`no` in any case
//!
//! The header must match the column list exactly or the whole load fails.

use std::io::{Read, Write};

use csv::StringRecord;

use super::question::{Question, QuestionId};
use crate::core::GameError;

/// Expected header, in order.
pub const COLUMNS: [&str; 6] = [
    "id",
    "question",
    "category",
    "difficulty",
    "used",
    "correct_answer",
];

/// Parse a full question table.
///
/// # Errors
///
/// - `GameError::Format` if the header differs from [`COLUMNS`], a row has
///   the wrong number of fields, or a typed field fails to parse
/// - `GameError::Io` if the underlying reader fails
pub fn read_questions<R: Read>(reader: R) -> Result<Vec<Question>, GameError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(read_error)?;
    if !headers.iter().eq(COLUMNS.iter().copied()) {
        return Err(GameError::Format(format!(
            "header mismatch: expected [{}], found [{}]",
            COLUMNS.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut questions = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        questions.push(parse_record(&record)?);
    }

    Ok(questions)
}

/// Write a full question table, header first.
///
/// # Errors
///
/// Returns `GameError::Io` if anything fails to write.
pub fn write_questions<W: Write>(writer: W, questions: &[Question]) -> Result<(), GameError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(COLUMNS).map_err(write_error)?;
    for q in questions {
        writer
            .write_record([
                q.id.raw().to_string().as_str(),
                q.text.as_str(),
                q.category.to_string().as_str(),
                q.difficulty.to_string().as_str(),
                if q.used { "True" } else { "False" },
                if q.correct_answer { "Yes" } else { "No" },
            ])
            .map_err(write_error)?;
    }

    writer.flush()?;
    Ok(())
}

fn parse_record(record: &StringRecord) -> Result<Question, GameError> {
    let line = record.position().map_or(0, csv::Position::line);

    Ok(Question {
        id: QuestionId(parse_int(record, 0, line)?),
        text: record[1].to_string(),
        category: parse_int(record, 2, line)?,
        difficulty: parse_int(record, 3, line)?,
        used: parse_flag(record, 4, line, "true", "false")?,
        correct_answer: parse_flag(record, 5, line, "yes", "no")?,
    })
}

fn parse_int(record: &StringRecord, idx: usize, line: u64) -> Result<i64, GameError> {
    let raw = &record[idx];
    raw.trim().parse::<i64>().map_err(|_| {
        GameError::Format(format!(
            "line {line}: column '{}' expects an integer, got '{raw}'",
            COLUMNS[idx]
        ))
    })
}

fn parse_flag(
    record: &StringRecord,
    idx: usize,
    line: u64,
    truthy: &str,
    falsy: &str,
) -> Result<bool, GameError> {
    let raw = &record[idx];
    let token = raw.trim();
    if token.eq_ignore_ascii_case(truthy) {
        Ok(true)
    } else if token.eq_ignore_ascii_case(falsy) {
        Ok(false)
    } else {
        Err(GameError::Format(format!(
            "line {line}: column '{}' expects {truthy}/{falsy}, got '{raw}'",
            COLUMNS[idx]
        )))
    }
}

fn read_error(err: csv::Error) -> GameError {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(io) = err.into_kind() {
            return GameError::Io(io);
        }
        return GameError::Format("unreadable question data".to_string());
    }
    GameError::Format(err.to_string())
}

fn write_error(err: csv::Error) -> GameError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => GameError::Io(io),
        other => GameError::Io(std::io::Error::other(format!("{other:?}"))),
    }
}
