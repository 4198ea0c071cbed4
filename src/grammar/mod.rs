//! Period-string grammar.
//!
//! Turns catalog period text ("月3", "火・金3,4", "月3-5 月3,4", ...) into
//! the set of weekly cells it names. Rules are tried in the fixed order
//! of [`GrammarRule::ORDER`]; the first rule whose anchored pattern
//! matches the whole string decides the result.
//!
//! Text no rule recognizes names no cells. That is the unscheduled
//! outcome, not an error: callers place such courses in an "others"
//! bucket and leave them out of conflict detection.
//!
//! # Usage
//!
//! ```
//! use course_timetable::grammar::{matches_slot, parse_period, GrammarRule};
//! use course_timetable::models::{Day, Period};
//!
//! let p3 = Period::new(3).unwrap();
//! assert!(matches_slot("火・金3,4", Day::Fri, p3));
//! assert!(!matches_slot("TBD", Day::Mon, p3));
//!
//! let pattern = parse_period("木3,4").unwrap();
//! assert_eq!(pattern.rule(), GrammarRule::Pair);
//! assert_eq!(pattern.len(), 2);
//! ```

mod rules;

pub use rules::GrammarRule;

use std::collections::BTreeSet;

use crate::models::{Day, Period, WeekSlot};

/// Weekly cells named by a period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPattern {
    rule: GrammarRule,
    cells: BTreeSet<WeekSlot>,
}

impl WeeklyPattern {
    /// Rule that recognized the text.
    pub fn rule(&self) -> GrammarRule {
        self.rule
    }

    /// Whether the pattern includes a cell.
    pub fn contains(&self, cell: WeekSlot) -> bool {
        self.cells.contains(&cell)
    }

    /// Cells in (day, period) order.
    pub fn cells(&self) -> impl Iterator<Item = WeekSlot> + '_ {
        self.cells.iter().copied()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no in-domain cell was named (e.g. "月7").
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parses period text with the first matching rule.
///
/// Returns `None` when no rule recognizes the text.
pub fn parse_period(text: &str) -> Option<WeeklyPattern> {
    GrammarRule::ORDER
        .into_iter()
        .find_map(|rule| rule.parse(text).map(|cells| WeeklyPattern { rule, cells }))
}

/// Whether period text names the given day and period.
///
/// Unrecognized text never matches.
pub fn matches_slot(text: &str, day: Day, period: Period) -> bool {
    parse_period(text).is_some_and(|pattern| pattern.contains(WeekSlot::new(day, period)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cell(day: Day, n: u8) -> WeekSlot {
        WeekSlot::new(day, Period::new(n).unwrap())
    }

    /// Every (day, period) pair the text matches, probing the whole week.
    fn probe(text: &str) -> Vec<WeekSlot> {
        WeekSlot::all()
            .filter(|c| matches_slot(text, c.day, c.period))
            .collect()
    }

    #[rstest]
    #[case("月3", vec![cell(Day::Mon, 3)])]
    #[case("木3,4", vec![cell(Day::Thu, 3), cell(Day::Thu, 4)])]
    #[case("月6-8", vec![cell(Day::Mon, 6)])]
    #[case(
        "火・金3,4",
        vec![cell(Day::Tue, 3), cell(Day::Tue, 4), cell(Day::Fri, 3), cell(Day::Fri, 4)]
    )]
    #[case(
        "水3,4,金5,6",
        vec![cell(Day::Wed, 3), cell(Day::Wed, 4), cell(Day::Fri, 5), cell(Day::Fri, 6)]
    )]
    #[case(
        "火1,2 金5,6",
        vec![cell(Day::Tue, 1), cell(Day::Tue, 2), cell(Day::Fri, 5), cell(Day::Fri, 6)]
    )]
    #[case("月3-5 月3,4", vec![cell(Day::Mon, 3), cell(Day::Mon, 4), cell(Day::Mon, 5)])]
    #[case("金3 金4", vec![cell(Day::Fri, 3), cell(Day::Fri, 4)])]
    #[case("月1 水2", vec![cell(Day::Mon, 1), cell(Day::Wed, 2)])]
    #[case("TBD", vec![])]
    #[case("", vec![])]
    #[case("随時", vec![])]
    #[case("土3", vec![])]
    #[case("月3,4,5", vec![])]
    fn test_period_text_matches(#[case] text: &str, #[case] expected: Vec<WeekSlot>) {
        assert_eq!(probe(text), expected);
    }

    #[rstest]
    #[case("月3", GrammarRule::Single)]
    #[case("木3,4", GrammarRule::Pair)]
    #[case("月6-8", GrammarRule::Range)]
    #[case("火・金3,4", GrammarRule::TwoDayPair)]
    #[case("水3,4,金5,6", GrammarRule::DualGroupComma)]
    #[case("火1,2 金5,6", GrammarRule::DualGroupSpace)]
    #[case("月3-5 月3,4", GrammarRule::RangePlusPair)]
    #[case("金3 金4", GrammarRule::DualSingle)]
    fn test_rule_selection(#[case] text: &str, #[case] rule: GrammarRule) {
        assert_eq!(parse_period(text).map(|p| p.rule()), Some(rule));
    }

    #[test]
    fn test_unrecognized_is_none() {
        assert!(parse_period("TBD").is_none());
        assert!(parse_period("応談").is_none());
    }

    #[test]
    fn test_recognized_but_out_of_domain() {
        let pattern = parse_period("月7").unwrap();
        assert!(pattern.is_empty());
        assert!(probe("月7").is_empty());
    }

    #[test]
    fn test_probe_agrees_with_cells() {
        for text in ["月3", "火・金3,4", "月3-5 月3,4", "水3,4,金5,6"] {
            let pattern = parse_period(text).unwrap();
            assert_eq!(pattern.cells().collect::<Vec<_>>(), probe(text));
        }
    }
}
