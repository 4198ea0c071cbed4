//! Timetable engine.
//!
//! Expands courses into atomic slots and builds the views that sit on
//! top of them: per-term grids, planned-course conflicts, and selection
//! summaries. Every function here is a pure function of its inputs.
//!
//! # Usage
//!
//! ```
//! use course_timetable::models::{
//!     Course, Day, Module, Period, SelectedCourses, SelectionTag, Semester, Term,
//! };
//! use course_timetable::timetable::{group_for_timetable, planned_course_conflicts};
//!
//! let courses = vec![
//!     Course::new("A").with_module("春A").with_period("月3"),
//!     Course::new("B").with_module("春A").with_period("月3,4"),
//! ];
//! let selected = SelectedCourses::new()
//!     .with("A", SelectionTag::Planned)
//!     .with("B", SelectionTag::Planned);
//!
//! let view = group_for_timetable(&courses, &selected);
//! let spring_a = Term::new(Semester::Spring, Module::A);
//! assert_eq!(view.grid(spring_a).cell(Day::Mon, Period::new(3).unwrap()).len(), 2);
//!
//! let conflicts = planned_course_conflicts(&courses, &selected);
//! assert_eq!(conflicts.get("A")[0].code, "B");
//! ```

mod conflicts;
mod grouping;
mod slots;
mod summary;

pub use conflicts::{
    planned_course_conflict_counts, planned_course_conflicts, ConflictMap, PlannedSlotIndex,
};
pub use grouping::{group_for_timetable, CourseViewItem, TimetableGrid, TimetableView};
pub use slots::{course_time_slots, is_in_module};
pub use summary::{SelectionSummary, TagTotals};
