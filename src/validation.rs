//! Input validation for course catalogs and selections.
//!
//! Checks the integrity of the inputs the timetable engine consumes.
//! Detects:
//! - Duplicate course codes
//! - Selections referring to courses missing from the catalog
//! - Selection entries stored under a key other than their own code
//! - Period text no grammar rule recognizes
//!
//! The engine tolerates all of these (unknown selections are dropped,
//! unrecognized periods leave a course unscheduled); validation exists
//! so callers can surface them.

use std::collections::HashSet;
use thiserror::Error;

use crate::grammar::parse_period;
use crate::models::{Course, SelectedCourses};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same code.
    DuplicateCode,
    /// A selection references a course that doesn't exist.
    UnknownCourse,
    /// A selection entry's key differs from its code.
    MismatchedKey,
    /// A non-empty period string matches no grammar rule.
    UnrecognizedPeriod,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog and a selection.
///
/// Checks:
/// 1. No duplicate course codes
/// 2. Every selection refers to a catalog course
/// 3. Every selection is keyed by its own code
/// 4. Every non-empty period string is recognized
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(courses: &[Course], selected: &SelectedCourses) -> ValidationResult {
    let mut errors = Vec::new();

    let mut codes = HashSet::new();
    for course in courses {
        if !codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }

        if !course.period.trim().is_empty() && parse_period(&course.period).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnrecognizedPeriod,
                format!(
                    "Course '{}' has unrecognized period '{}'",
                    course.code, course.period
                ),
            ));
        }
    }

    for (key, entry) in selected.iter() {
        if key != entry.code {
            errors.push(ValidationError::new(
                ValidationErrorKind::MismatchedKey,
                format!("Selection key '{}' holds entry for '{}'", key, entry.code),
            ));
        }

        if !codes.contains(entry.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!("Selection references unknown course '{}'", entry.code),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
