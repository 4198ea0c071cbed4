//! Timetable grouping.
//!
//! Places the courses a student is interested in onto six weekly grids,
//! one per term, and collects the ones that fit nowhere into `others`.
//!
//! # Invariants
//! - Every interested course appears in at least one grid cell or in
//!   `others`, never both.
//! - Within a cell (and in `others`) courses keep their input order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::slots::course_time_slots;
use crate::models::{Course, Day, Period, SelectedCourses, SelectionTag, Term};

/// A course annotated with its selection tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseViewItem {
    #[serde(flatten)]
    pub course: Course,
    /// `None` when the course has no selection entry.
    pub tag: Option<SelectionTag>,
}

impl CourseViewItem {
    /// Annotates a course with its current tag.
    pub fn new(course: &Course, selected: &SelectedCourses) -> Self {
        Self {
            course: course.clone(),
            tag: selected.tag_of(&course.code),
        }
    }

    /// Course code.
    pub fn code(&self) -> &str {
        &self.course.code
    }
}

/// Day × period grid for one term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableGrid {
    cells: [[Vec<CourseViewItem>; Period::COUNT]; 5],
}

impl TimetableGrid {
    /// Courses in a cell.
    pub fn cell(&self, day: Day, period: Period) -> &[CourseViewItem] {
        &self.cells[day.index()][period.index()]
    }

    fn push(&mut self, day: Day, period: Period, item: CourseViewItem) {
        self.cells[day.index()][period.index()].push(item);
    }

    /// Iterates non-empty cells in (day, period) order.
    pub fn occupied(&self) -> impl Iterator<Item = (Day, Period, &[CourseViewItem])> {
        Day::ALL.into_iter().flat_map(move |day| {
            Period::ALL.into_iter().filter_map(move |period| {
                let items = self.cell(day, period);
                (!items.is_empty()).then_some((day, period, items))
            })
        })
    }

    /// Whether no cell holds a course.
    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }
}

/// Interested courses laid out for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableView {
    grids: [TimetableGrid; 6],
    /// Interested courses with no slot in any term.
    pub others: Vec<CourseViewItem>,
}

impl TimetableView {
    /// Grid for a term.
    pub fn grid(&self, term: Term) -> &TimetableGrid {
        &self.grids[term.index()]
    }

    /// Grids in term order (spring A .. fall C).
    pub fn grids(&self) -> impl Iterator<Item = (Term, &TimetableGrid)> {
        Term::ALL.into_iter().zip(self.grids.iter())
    }

    /// Whether a course code appears in any grid cell.
    pub fn is_placed(&self, code: &str) -> bool {
        self.grids.iter().any(|grid| {
            grid.occupied()
                .any(|(_, _, items)| items.iter().any(|item| item.code() == code))
        })
    }
}

/// Groups interested courses into per-term grids.
///
/// A course is interested when it has any selection entry. Each such
/// course is placed in every cell it occupies, annotated with its tag;
/// courses placed nowhere go to [`TimetableView::others`].
pub fn group_for_timetable(courses: &[Course], selected: &SelectedCourses) -> TimetableView {
    let interested: Vec<&Course> = courses
        .iter()
        .filter(|course| selected.is_interested(&course.code))
        .collect();

    let mut view = TimetableView::default();
    let mut collected: HashSet<&str> = HashSet::new();

    for course in &interested {
        for slot in course_time_slots(course) {
            let item = CourseViewItem::new(course, selected);
            view.grids[slot.term().index()].push(slot.day, slot.period, item);
            collected.insert(course.code.as_str());
        }
    }

    view.others = interested
        .iter()
        .filter(|course| !collected.contains(course.code.as_str()))
        .map(|course| CourseViewItem::new(course, selected))
        .collect();

    debug!(
        interested = interested.len(),
        placed = collected.len(),
        others = view.others.len(),
        "grouped timetable"
    );

    view
}
