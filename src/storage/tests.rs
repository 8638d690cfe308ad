//! Tests for storage error classification.

use super::*;
use sqlx::sqlite::SqlitePoolOptions;
use std::error::Error;
use std::io;

fn io_cause(msg: &str) -> io::Error {
    io::Error::other(msg.to_string())
}

// ==================== Wrapper tests ====================

#[test]
fn test_record_exists_message() {
    let err = StorageError::new(ErrorCode::RecordExists, io_cause("duplicate key"));

    assert_eq!(err.code(), ErrorCode::RecordExists);
    assert!(err.to_string().contains("record already exists"));
    assert_eq!(err.to_string(), "Code <A012>: record already exists");
}

#[test]
fn test_message_matches_code_table() {
    for code in [
        ErrorCode::UnknownSql,
        ErrorCode::NoRecordFound,
        ErrorCode::RecordExists,
    ] {
        let err = StorageError::new(code, io_cause("boom"));
        assert_eq!(err.code(), code);
        assert_eq!(
            err.to_string(),
            format!("Code <{}>: {}", code, code.description())
        );
    }
}

#[test]
fn test_codes() {
    assert_eq!(ErrorCode::UnknownSql.as_str(), "A001");
    assert_eq!(ErrorCode::NoRecordFound.as_str(), "A011");
    assert_eq!(ErrorCode::RecordExists.as_str(), "A012");
}

#[test]
fn test_cause_is_original_error() {
    let err = StorageError::new(ErrorCode::RecordExists, io_cause("duplicate key"));

    let cause = err.cause().downcast_ref::<io::Error>().unwrap();
    assert_eq!(cause.kind(), io::ErrorKind::Other);
    assert_eq!(cause.to_string(), "duplicate key");

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "duplicate key");

    let inner = err.into_cause().downcast::<io::Error>().unwrap();
    assert_eq!(inner.to_string(), "duplicate key");
}

#[test]
fn test_wraps_string_cause() {
    let err = StorageError::new(ErrorCode::NoRecordFound, "user 42");
    assert_eq!(err.cause().to_string(), "user 42");
}

// ==================== sqlx classification tests ====================

#[test]
fn test_row_not_found_is_no_record() {
    let err = StorageError::from(sqlx::Error::RowNotFound);
    assert_eq!(err.code(), ErrorCode::NoRecordFound);
    assert!(matches!(
        err.cause().downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::RowNotFound)
    ));
}

#[test]
fn test_other_sqlx_error_is_unknown() {
    let err = StorageError::from(sqlx::Error::PoolTimedOut);
    assert_eq!(err.code(), ErrorCode::UnknownSql);
}

#[tokio::test]
async fn test_unique_violation_is_record_exists() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query("CREATE TABLE users (email TEXT NOT NULL UNIQUE)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO users (email) VALUES ('a@example.com')")
        .execute(&pool)
        .await
        .unwrap();

    let err: StorageError = sqlx::query("INSERT INTO users (email) VALUES ('a@example.com')")
        .execute(&pool)
        .await
        .err()
        .unwrap()
        .into();
    assert_eq!(err.code(), ErrorCode::RecordExists);

    let err: StorageError = sqlx::query("SELECT email FROM users WHERE email = 'b@example.com'")
        .fetch_one(&pool)
        .await
        .err()
        .unwrap()
        .into();
    assert_eq!(err.code(), ErrorCode::NoRecordFound);

    let err: StorageError = sqlx::query("SELECT * FROM missing_table")
        .fetch_all(&pool)
        .await
        .err()
        .unwrap()
        .into();
    assert_eq!(err.code(), ErrorCode::UnknownSql);
}
