//! Timetable domain models.
//!
//! Courses, selection state, and the fixed weekly slot domain.
//!
//! # Domain Mappings
//!
//! | course-timetable | Catalog term | Example |
//! |------------------|--------------|---------|
//! | Semester | 学期 | 春, 秋 |
//! | Module | モジュール | A, B, C |
//! | Day | 曜日 | 月 .. 金 |
//! | Period | 時限 | 1 .. 6 |

mod course;
mod selection;
mod slot;

pub use course::Course;
pub use selection::{SelectedCourse, SelectedCourses, SelectionTag};
pub use slot::{Day, Module, Period, Semester, Term, TimeSlot, WeekSlot};
