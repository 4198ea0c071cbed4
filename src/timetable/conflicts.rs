//! Planned-course conflict detection.
//!
//! # Algorithm
//!
//! 1. Resolve the `planned` selection entries to catalog courses.
//! 2. Index every slot a planned course occupies: slot → planned courses.
//! 3. For each catalog course, look up each of its slots and collect the
//!    planned courses registered there, skipping the course itself.
//!
//! The index is rebuilt on every call from the current selection, so a
//! course that stopped being planned never contributes.
//!
//! # Properties
//! - A planned course never conflicts with itself.
//! - For planned P ≠ Q, P lists Q iff Q lists P.
//! - Non-planned courses get an entry whenever they overlap a planned one.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::slots::course_time_slots;
use crate::models::{Course, SelectedCourses, SelectionTag, TimeSlot};

/// Slot → planned courses occupying it.
///
/// Built per call and discarded afterwards.
#[derive(Debug, Default)]
pub struct PlannedSlotIndex<'a> {
    slots: HashMap<TimeSlot, BTreeMap<&'a str, &'a Course>>,
}

impl<'a> PlannedSlotIndex<'a> {
    /// Indexes the planned courses of `selected`.
    ///
    /// Planned entries whose code is not in `courses` are dropped.
    pub fn build(courses: &'a [Course], selected: &SelectedCourses) -> Self {
        let by_code: HashMap<&str, &Course> = courses
            .iter()
            .map(|course| (course.code.as_str(), course))
            .collect();

        let mut index = Self::default();
        for entry in selected.with_status(SelectionTag::Planned) {
            let Some(&course) = by_code.get(entry.code.as_str()) else {
                debug!(code = %entry.code, "planned course not in catalog, skipping");
                continue;
            };
            for slot in course_time_slots(course) {
                index
                    .slots
                    .entry(slot)
                    .or_default()
                    .insert(course.code.as_str(), course);
            }
        }
        index
    }

    /// Planned courses at a slot, ordered by code.
    pub fn planned_at(&self, slot: &TimeSlot) -> impl Iterator<Item = &'a Course> + '_ {
        self.slots
            .get(slot)
            .into_iter()
            .flat_map(|planned| planned.values().copied())
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no planned course occupies any slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Course code → planned courses it shares a slot with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictMap {
    entries: BTreeMap<String, Vec<Course>>,
}

impl ConflictMap {
    /// Conflicting planned courses for a code (empty when none).
    pub fn get(&self, code: &str) -> &[Course] {
        self.entries.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the course has any conflict.
    pub fn has_conflict(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Iterates `(code, conflicts)` in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Course])> {
        self.entries
            .iter()
            .map(|(code, list)| (code.as_str(), list.as_slice()))
    }

    /// Number of conflicting courses per code.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.entries
            .iter()
            .map(|(code, list)| (code.clone(), list.len()))
            .collect()
    }

    /// Number of courses with at least one conflict.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no course conflicts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds, for every course, the planned courses sharing a slot with it.
///
/// Only courses with at least one conflict get an entry. Each list is
/// de-duplicated and ordered by code.
pub fn planned_course_conflicts(courses: &[Course], selected: &SelectedCourses) -> ConflictMap {
    let index = PlannedSlotIndex::build(courses, selected);

    let mut found: BTreeMap<&str, BTreeMap<&str, &Course>> = BTreeMap::new();
    if !index.is_empty() {
        for course in courses {
            for slot in course_time_slots(course) {
                for planned in index.planned_at(&slot) {
                    if planned.code == course.code {
                        continue;
                    }
                    found
                        .entry(course.code.as_str())
                        .or_default()
                        .insert(planned.code.as_str(), planned);
                }
            }
        }
    }

    debug!(
        planned_slots = index.len(),
        conflicting = found.len(),
        "computed planned-course conflicts"
    );

    ConflictMap {
        entries: found
            .into_iter()
            .map(|(code, planned)| {
                (code.to_string(), planned.into_values().cloned().collect())
            })
            .collect(),
    }
}

/// Number of conflicting planned courses per course code.
pub fn planned_course_conflict_counts(
    courses: &[Course],
    selected: &SelectedCourses,
) -> BTreeMap<String, usize> {
    planned_course_conflicts(courses, selected).counts()
}
