//! Selection summary.
//!
//! Aggregates a selection into per-tag course counts and credit totals,
//! plus the conflict and unscheduled counts shown next to the timetable.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Courses per tag | Selected catalog courses carrying the tag |
//! | Credits per tag | Sum of their credits |
//! | Conflicting planned | Planned courses sharing a slot with another planned course |
//! | Unscheduled | Interested courses occupying no slot |

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::conflicts::planned_course_conflicts;
use super::slots::course_time_slots;
use crate::models::{Course, SelectedCourses, SelectionTag};

/// Course count and credit total for one tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TagTotals {
    pub courses: usize,
    pub credits: f64,
}

/// Aggregate figures for a selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Totals per tag. Tags with no course are absent.
    pub by_tag: BTreeMap<SelectionTag, TagTotals>,
    /// Planned courses in conflict with another planned course.
    pub conflicting_planned: usize,
    /// Interested courses with no slot.
    pub unscheduled: usize,
}

impl SelectionSummary {
    /// Computes the summary.
    ///
    /// Walks the catalog, so each interested course counts once however
    /// many selection entries point at it. Selection entries without a
    /// catalog course are ignored; a duplicated catalog code counts once.
    pub fn calculate(courses: &[Course], selected: &SelectedCourses) -> Self {
        let conflicts = planned_course_conflicts(courses, selected);
        let mut seen: HashSet<&str> = HashSet::new();
        let mut summary = Self::default();

        for course in courses {
            let Some(tag) = selected.tag_of(&course.code) else {
                continue;
            };
            if !seen.insert(course.code.as_str()) {
                continue;
            }

            let totals = summary.by_tag.entry(tag).or_default();
            totals.courses += 1;
            totals.credits += course.credit;

            if course_time_slots(course).is_empty() {
                summary.unscheduled += 1;
            }
            if tag == SelectionTag::Planned && conflicts.has_conflict(&course.code) {
                summary.conflicting_planned += 1;
            }
        }

        summary
    }

    /// Totals for a tag (zero when absent).
    pub fn totals(&self, tag: SelectionTag) -> TagTotals {
        self.by_tag.get(&tag).copied().unwrap_or_default()
    }

    /// Credits of planned courses.
    pub fn planned_credits(&self) -> f64 {
        self.totals(SelectionTag::Planned).credits
    }

    /// Credits of enrolled courses.
    pub fn enrolled_credits(&self) -> f64 {
        self.totals(SelectionTag::Enrolled).credits
    }

    /// Whether enrolled plus planned credits stay within `cap`.
    pub fn within_credit_cap(&self, cap: f64) -> bool {
        self.enrolled_credits() + self.planned_credits() <= cap
    }
}
