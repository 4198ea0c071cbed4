//! Slot enumeration.
//!
//! Expands a course's module and period text into the atomic
//! [`TimeSlot`]s it occupies.

use tracing::trace;

use crate::grammar::parse_period;
use crate::models::{Course, Module, Semester, Term, TimeSlot};

/// Whether the course runs in the given semester and module.
///
/// True iff the course's module text contains both the semester token
/// and the module letter. A year-long "春秋ABC" course is in all six
/// terms; text such as "通年" is in none.
pub fn is_in_module(course: &Course, semester: Semester, module: Module) -> bool {
    Term::new(semester, module).is_named_by(&course.module)
}

/// Every slot the course occupies, ordered by semester, module, day, period.
///
/// Empty when the module text names no term or the period text is not
/// recognized; both mean "unscheduled".
pub fn course_time_slots(course: &Course) -> Vec<TimeSlot> {
    let Some(pattern) = parse_period(&course.period) else {
        trace!(code = %course.code, period = %course.period, "period text not recognized");
        return Vec::new();
    };

    TimeSlot::domain()
        .filter(|slot| slot.term().is_named_by(&course.module))
        .filter(|slot| pattern.contains(slot.week_slot()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period};

    fn slot(semester: Semester, module: Module, day: Day, n: u8) -> TimeSlot {
        TimeSlot {
            semester,
            module,
            day,
            period: Period::new(n).unwrap(),
        }
    }

    #[test]
    fn test_is_in_module() {
        let course = Course::new("C1").with_module("春AB");
        assert!(is_in_module(&course, Semester::Spring, Module::A));
        assert!(is_in_module(&course, Semester::Spring, Module::B));
        assert!(!is_in_module(&course, Semester::Spring, Module::C));
        assert!(!is_in_module(&course, Semester::Fall, Module::A));
    }

    #[test]
    fn test_single_term_slots() {
        let course = Course::new("C1").with_module("秋B").with_period("木3,4");
        assert_eq!(
            course_time_slots(&course),
            vec![
                slot(Semester::Fall, Module::B, Day::Thu, 3),
                slot(Semester::Fall, Module::B, Day::Thu, 4),
            ]
        );
    }

    #[test]
    fn test_multi_term_order() {
        let course = Course::new("C1")
            .with_module("春C秋A")
            .with_period("月1 水2");
        assert_eq!(
            course_time_slots(&course),
            vec![
                slot(Semester::Spring, Module::A, Day::Mon, 1),
                slot(Semester::Spring, Module::A, Day::Wed, 2),
                slot(Semester::Spring, Module::C, Day::Mon, 1),
                slot(Semester::Spring, Module::C, Day::Wed, 2),
                slot(Semester::Fall, Module::A, Day::Mon, 1),
                slot(Semester::Fall, Module::A, Day::Wed, 2),
                slot(Semester::Fall, Module::C, Day::Mon, 1),
                slot(Semester::Fall, Module::C, Day::Wed, 2),
            ]
        );
    }

    #[test]
    fn test_module_tokens_combine_across_semesters() {
        // Tokens are matched independently, so "春C秋A" also names 春A and 秋C.
        let course = Course::new("C1").with_module("春C秋A");
        assert!(is_in_module(&course, Semester::Spring, Module::A));
        assert!(is_in_module(&course, Semester::Spring, Module::C));
        assert!(is_in_module(&course, Semester::Fall, Module::A));
        assert!(is_in_module(&course, Semester::Fall, Module::C));
        assert!(!is_in_module(&course, Semester::Spring, Module::B));
        assert!(!is_in_module(&course, Semester::Fall, Module::B));
    }

    #[test]
    fn test_year_long_course_covers_all_terms() {
        let course = Course::new("C1").with_module("春秋ABC").with_period("金5");
        let slots = course_time_slots(&course);
        assert_eq!(slots.len(), Term::ALL.len());
        let terms: Vec<Term> = slots.iter().map(TimeSlot::term).collect();
        assert_eq!(terms, Term::ALL.to_vec());
    }

    #[test]
    fn test_unscheduled_courses() {
        let no_term = Course::new("C1").with_module("通年").with_period("月3");
        assert!(course_time_slots(&no_term).is_empty());

        let no_period = Course::new("C2").with_module("春A").with_period("随時");
        assert!(course_time_slots(&no_period).is_empty());

        let empty = Course::new("C3");
        assert!(course_time_slots(&empty).is_empty());
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let course = Course::new("C1")
            .with_module("春AB秋C")
            .with_period("火・金3,4");
        let first = course_time_slots(&course);
        let second = course_time_slots(&course);
        assert_eq!(first, second);
        // "春AB秋C" names all six terms; 火・金3,4 is four cells per term.
        assert_eq!(first.len(), Term::ALL.len() * 4);
    }
}
