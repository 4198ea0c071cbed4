//! Selection state.
//!
//! The student's per-course status. The engine reads selections to
//! decide which courses are of interest and which are planned; it never
//! modifies them. [`SelectedCourses::with_tag`] produces an updated copy
//! for callers that change a selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::Course;
use crate::error::{ParseTokenError, SelectionError};

/// Selection status of a course.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SelectionTag {
    /// Already registered.
    Enrolled,
    /// Intended to take; participates in conflict detection.
    Planned,
    /// Under consideration.
    Considering,
    /// Decided against.
    Declined,
    /// Cannot be taken (set by the catalog side).
    Ineligible,
}

impl SelectionTag {
    /// All tags.
    pub const ALL: [SelectionTag; 5] = [
        SelectionTag::Enrolled,
        SelectionTag::Planned,
        SelectionTag::Considering,
        SelectionTag::Declined,
        SelectionTag::Ineligible,
    ];

    /// Lowercase tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enrolled => "enrolled",
            Self::Planned => "planned",
            Self::Considering => "considering",
            Self::Declined => "declined",
            Self::Ineligible => "ineligible",
        }
    }
}

impl fmt::Display for SelectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionTag {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| ParseTokenError::new("selection tag", s))
    }
}

/// One selection entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCourse {
    /// Course code the entry refers to.
    pub code: String,
    /// Current status.
    pub tag: SelectionTag,
}

impl SelectedCourse {
    /// Creates a selection entry.
    pub fn new(code: impl Into<String>, tag: SelectionTag) -> Self {
        Self {
            code: code.into(),
            tag,
        }
    }
}

/// Selection entries keyed by course code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedCourses {
    entries: BTreeMap<String, SelectedCourse>,
}

impl SelectedCourses {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an entry keyed by its own code.
    pub fn with(mut self, code: impl Into<String>, tag: SelectionTag) -> Self {
        self.insert(SelectedCourse::new(code, tag));
        self
    }

    /// Inserts an entry keyed by its own code, returning the previous one.
    pub fn insert(&mut self, entry: SelectedCourse) -> Option<SelectedCourse> {
        self.entries.insert(entry.code.clone(), entry)
    }

    /// Inserts an entry under an explicit key.
    ///
    /// The key normally equals `entry.code`; input validation reports
    /// entries where it does not.
    pub fn insert_keyed(
        &mut self,
        key: impl Into<String>,
        entry: SelectedCourse,
    ) -> Option<SelectedCourse> {
        self.entries.insert(key.into(), entry)
    }

    /// Entry for a course code.
    pub fn get(&self, code: &str) -> Option<&SelectedCourse> {
        self.entries.get(code)
    }

    /// Current tag for a course code, `None` when unselected.
    pub fn tag_of(&self, code: &str) -> Option<SelectionTag> {
        self.get(code).map(|entry| entry.tag)
    }

    /// Whether the course has any entry, whatever its tag.
    pub fn is_interested(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Iterates entries as `(key, entry)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SelectedCourse)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Entries carrying the given tag.
    pub fn with_status(&self, tag: SelectionTag) -> impl Iterator<Item = &SelectedCourse> {
        self.entries.values().filter(move |entry| entry.tag == tag)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy with `course` tagged `tag`.
    ///
    /// # Errors
    /// - [`SelectionError::IneligibleTag`] when `tag` is `Ineligible`.
    /// - [`SelectionError::CourseIneligible`] when the course is
    ///   currently ineligible.
    pub fn with_tag(&self, course: &Course, tag: SelectionTag) -> Result<Self, SelectionError> {
        if tag == SelectionTag::Ineligible {
            return Err(SelectionError::IneligibleTag(tag));
        }
        if self.tag_of(&course.code) == Some(SelectionTag::Ineligible) {
            return Err(SelectionError::CourseIneligible(course.code.clone()));
        }

        let mut next = self.clone();
        next.insert(SelectedCourse::new(course.code.clone(), tag));
        Ok(next)
    }
}

impl FromIterator<SelectedCourse> for SelectedCourses {
    fn from_iter<I: IntoIterator<Item = SelectedCourse>>(iter: I) -> Self {
        let mut selected = Self::new();
        for entry in iter {
            selected.insert(entry);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SelectedCourses {
        SelectedCourses::new()
            .with("A", SelectionTag::Planned)
            .with("B", SelectionTag::Considering)
            .with("X", SelectionTag::Ineligible)
    }

    #[test]
    fn test_lookup() {
        let s = sample();
        assert_eq!(s.len(), 3);
        assert_eq!(s.tag_of("A"), Some(SelectionTag::Planned));
        assert_eq!(s.tag_of("Z"), None);
        assert!(s.is_interested("B"));
        assert!(!s.is_interested("Z"));

        let planned: Vec<&str> = s
            .with_status(SelectionTag::Planned)
            .map(|e| e.code.as_str())
            .collect();
        assert_eq!(planned, vec!["A"]);
    }

    #[test]
    fn test_with_tag_returns_updated_copy() {
        let s = sample();
        let course = Course::new("B");
        let next = s.with_tag(&course, SelectionTag::Planned).unwrap();

        assert_eq!(next.tag_of("B"), Some(SelectionTag::Planned));
        assert_eq!(s.tag_of("B"), Some(SelectionTag::Considering)); // original untouched

        let added = s.with_tag(&Course::new("NEW"), SelectionTag::Enrolled).unwrap();
        assert_eq!(added.len(), 4);
    }

    #[test]
    fn test_with_tag_rejects_ineligible() {
        let s = sample();
        assert_eq!(
            s.with_tag(&Course::new("A"), SelectionTag::Ineligible),
            Err(SelectionError::IneligibleTag(SelectionTag::Ineligible))
        );
        assert_eq!(
            s.with_tag(&Course::new("X"), SelectionTag::Planned),
            Err(SelectionError::CourseIneligible("X".into()))
        );
    }

    #[test]
    fn test_tag_tokens() {
        assert_eq!("planned".parse::<SelectionTag>(), Ok(SelectionTag::Planned));
        assert_eq!(" Declined ".parse::<SelectionTag>(), Ok(SelectionTag::Declined));
        assert!("maybe".parse::<SelectionTag>().is_err());
        assert_eq!(SelectionTag::Considering.to_string(), "considering");
    }

    #[test]
    fn test_selection_json() {
        let json = r#"{
            "GB10234": { "code": "GB10234", "tag": "planned" },
            "FA01111": { "code": "FA01111", "tag": "enrolled" }
        }"#;
        let s: SelectedCourses = serde_json::from_str(json).unwrap();
        assert_eq!(s.tag_of("GB10234"), Some(SelectionTag::Planned));
        assert_eq!(s.tag_of("FA01111"), Some(SelectionTag::Enrolled));
    }
}
