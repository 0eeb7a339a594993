//! Unit tests for error.rs
//!
//! Tests Error variants, their API codes and trait implementations.

use crate::error::{Error, Result};
use crate::types::*;

// ============================================================================
// ERROR CODE TESTS
// ============================================================================

#[test]
fn test_error_codes_match_api_enumerants() {
    assert_eq!(Error::InvalidEnum.code(), GL_INVALID_ENUM);
    assert_eq!(Error::InvalidValue.code(), GL_INVALID_VALUE);
    assert_eq!(Error::InvalidOperation.code(), GL_INVALID_OPERATION);
    assert_eq!(Error::OutOfMemory.code(), GL_OUT_OF_MEMORY);
}

#[test]
fn test_error_codes_are_distinct_from_no_error() {
    for err in [Error::InvalidEnum, Error::InvalidValue, Error::InvalidOperation, Error::OutOfMemory] {
        assert_ne!(err.code(), GL_NO_ERROR);
    }
}

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_error_display() {
    assert_eq!(format!("{}", Error::InvalidEnum), "GL_INVALID_ENUM");
    assert_eq!(format!("{}", Error::InvalidValue), "GL_INVALID_VALUE");
    assert_eq!(format!("{}", Error::InvalidOperation), "GL_INVALID_OPERATION");
    assert_eq!(format!("{}", Error::OutOfMemory), "GL_OUT_OF_MEMORY");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidValue;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    assert!(format!("{:?}", Error::InvalidOperation).contains("InvalidOperation"));
}

#[test]
fn test_error_copy_and_eq() {
    let err1 = Error::InvalidEnum;
    let err2 = err1;
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidValue);
}

// ============================================================================
// RESULT / BAIL TESTS
// ============================================================================

fn reject_negative(value: i32) -> Result<i32> {
    if value < 0 {
        crate::gl_bail!(Error::InvalidValue, "negative value {}", value);
    }
    Ok(value)
}

#[test]
fn test_bail_returns_error() {
    assert_eq!(reject_negative(-1), Err(Error::InvalidValue));
}

#[test]
fn test_bail_passes_valid_input() {
    assert_eq!(reject_negative(4), Ok(4));
}

#[test]
fn test_result_with_question_mark() {
    fn chained() -> Result<i32> {
        let v = reject_negative(2)?;
        reject_negative(v - 5)
    }
    assert_eq!(chained(), Err(Error::InvalidValue));
}
