//! Course timetable engine.
//!
//! Turns catalog period text into atomic weekly slots and builds the
//! structures a course-planning front end displays: per-term timetable
//! grids and conflicts between planned courses.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `SelectedCourses`, `SelectionTag`,
//!   `Semester`, `Module`, `Day`, `Period`, `Term`, `TimeSlot`
//! - **`grammar`**: Period-string parser (`matches_slot`, `parse_period`)
//! - **`timetable`**: Slot enumeration, grouping, conflict detection, summaries
//! - **`validation`**: Input integrity checks (duplicate codes, dangling selections)
//!
//! # Architecture
//!
//! Everything is synchronous and side-effect free. Callers own the course
//! list and the selection and re-run the engine whenever either changes;
//! nothing is cached between calls. Logging goes through `tracing`; the
//! crate never installs a subscriber.

pub mod error;
pub mod grammar;
pub mod models;
pub mod timetable;
pub mod validation;

pub use error::{ParseTokenError, SelectionError};
