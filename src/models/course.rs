//! Course model.
//!
//! A course as supplied by the catalog. The engine only reads `code`,
//! `module` and `period`; the remaining fields travel with the course
//! into timetable views.

use serde::{Deserialize, Serialize};

/// A catalog course.
///
/// `module` and `period` are raw catalog text. `module` names the
/// semester(s) and module(s) the course runs in (e.g. "春AB"), and
/// `period` the weekly slots (e.g. "月3", "火・金3,4"). Neither is
/// validated on construction: text the grammar does not recognize
/// leaves the course unscheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course code.
    pub code: String,
    /// Course title.
    pub name: String,
    /// Raw module string.
    pub module: String,
    /// Raw period string.
    pub period: String,
    /// Credits (may be fractional, e.g. 0.5).
    pub credit: f64,
    /// Recommended year(s), e.g. "1" or "2 - 4".
    pub standard_year: String,
}

impl Course {
    /// Creates a course with the given code and empty fields.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            module: String::new(),
            period: String::new(),
            credit: 0.0,
            standard_year: String::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the raw module string.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Sets the raw period string.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credit(mut self, credit: f64) -> Self {
        self.credit = credit;
        self
    }

    /// Sets the standard year.
    pub fn with_standard_year(mut self, year: impl Into<String>) -> Self {
        self.standard_year = year.into();
        self
    }
}
