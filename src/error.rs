//! Error types.
//!
//! The timetable engine itself is total; errors only surface at the
//! edges: parsing domain tokens and updating selections.

use thiserror::Error;

use crate::models::SelectionTag;

/// A token that does not name any value of a closed domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {domain} token: {token:?}")]
pub struct ParseTokenError {
    /// Domain being parsed ("semester", "day", ...).
    pub domain: &'static str,
    /// Offending input.
    pub token: String,
}

impl ParseTokenError {
    pub(crate) fn new(domain: &'static str, token: impl Into<String>) -> Self {
        Self {
            domain,
            token: token.into(),
        }
    }
}

/// Rejected selection update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// `ineligible` is assigned by the catalog, never chosen.
    #[error("tag {0} cannot be chosen for a course")]
    IneligibleTag(SelectionTag),
    /// The course is marked ineligible and is locked.
    #[error("course {0} is ineligible and cannot be re-tagged")]
    CourseIneligible(String),
}
