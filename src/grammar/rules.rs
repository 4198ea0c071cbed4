//! Period-string grammar rules.
//!
//! Each rule is an anchored pattern over the whole string. Day tokens are
//! one of 月火水木金 and period tokens a single ASCII digit. Digits outside
//! the period domain (0, 7-9) are accepted by the pattern but produce
//! no cell, so "月6-8" yields only Monday 6.

use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::models::{Day, Period, WeekSlot};

const D: &str = "([月火水木金])";
const P: &str = "([0-9])";

/// A supported period-string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarRule {
    /// `月3`
    Single,
    /// `木3,4`
    Pair,
    /// `月6-8` (inclusive)
    Range,
    /// `火・金3,4`
    TwoDayPair,
    /// `水3,4,金5,6`
    DualGroupComma,
    /// `火1,2 金5,6`
    DualGroupSpace,
    /// `月3-5 月3,4`
    RangePlusPair,
    /// `金3 金4`
    DualSingle,
}

impl GrammarRule {
    /// Rules in matching order.
    pub const ORDER: [GrammarRule; 8] = [
        GrammarRule::Single,
        GrammarRule::Pair,
        GrammarRule::Range,
        GrammarRule::TwoDayPair,
        GrammarRule::DualGroupComma,
        GrammarRule::DualGroupSpace,
        GrammarRule::RangePlusPair,
        GrammarRule::DualSingle,
    ];

    /// Short rule name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Pair => "pair",
            Self::Range => "range",
            Self::TwoDayPair => "two-day-pair",
            Self::DualGroupComma => "dual-group-comma",
            Self::DualGroupSpace => "dual-group-space",
            Self::RangePlusPair => "range-plus-pair",
            Self::DualSingle => "dual-single",
        }
    }

    fn source(self) -> String {
        let body = match self {
            Self::Single => format!("{D}{P}"),
            Self::Pair => format!("{D}{P},{P}"),
            Self::Range => format!("{D}{P}-{P}"),
            Self::TwoDayPair => format!("{D}・{D}{P},{P}"),
            Self::DualGroupComma => format!("{D}{P},{P},{D}{P},{P}"),
            Self::DualGroupSpace => format!("{D}{P},{P} {D}{P},{P}"),
            Self::RangePlusPair => format!("{D}{P}-{P} {D}{P},{P}"),
            Self::DualSingle => format!("{D}{P} {D}{P}"),
        };
        format!("^{body}$")
    }

    /// Compiles every rule's pattern, indexed like [`GrammarRule::ORDER`].
    fn compile_patterns() -> Result<Vec<Regex>, regex::Error> {
        Self::ORDER
            .iter()
            .map(|rule| Regex::new(&rule.source()))
            .collect()
    }

    /// The compiled pattern, or `None` if compilation failed.
    fn regex(self) -> Option<&'static Regex> {
        static COMPILED: OnceLock<Result<Vec<Regex>, regex::Error>> = OnceLock::new();
        COMPILED
            .get_or_init(Self::compile_patterns)
            .as_ref()
            .ok()?
            .get(self as usize)
    }

    /// Applies this rule to `text`.
    ///
    /// Returns `None` when the text does not have this rule's shape (or a
    /// range endpoint fails to parse), otherwise the cells it names.
    pub fn parse(self, text: &str) -> Option<BTreeSet<WeekSlot>> {
        let caps = self.regex()?.captures(text)?;
        let mut cells = BTreeSet::new();

        match self {
            Self::Single => {
                add(&mut cells, &[day(&caps, 1)?], [digit(&caps, 2)?]);
            }
            Self::Pair => {
                add(&mut cells, &[day(&caps, 1)?], [digit(&caps, 2)?, digit(&caps, 3)?]);
            }
            Self::Range => {
                add(&mut cells, &[day(&caps, 1)?], range(&caps, 2, 3)?);
            }
            Self::TwoDayPair => {
                let days = [day(&caps, 1)?, day(&caps, 2)?];
                add(&mut cells, &days, [digit(&caps, 3)?, digit(&caps, 4)?]);
            }
            Self::DualGroupComma | Self::DualGroupSpace => {
                add(&mut cells, &[day(&caps, 1)?], [digit(&caps, 2)?, digit(&caps, 3)?]);
                add(&mut cells, &[day(&caps, 4)?], [digit(&caps, 5)?, digit(&caps, 6)?]);
            }
            Self::RangePlusPair => {
                add(&mut cells, &[day(&caps, 1)?], range(&caps, 2, 3)?);
                add(&mut cells, &[day(&caps, 4)?], [digit(&caps, 5)?, digit(&caps, 6)?]);
            }
            Self::DualSingle => {
                add(&mut cells, &[day(&caps, 1)?], [digit(&caps, 2)?]);
                add(&mut cells, &[day(&caps, 3)?], [digit(&caps, 4)?]);
            }
        }

        Some(cells)
    }
}

fn day(caps: &Captures<'_>, group: usize) -> Option<Day> {
    caps.get(group)?.as_str().chars().next().and_then(Day::from_token)
}

fn digit(caps: &Captures<'_>, group: usize) -> Option<u8> {
    caps.get(group)?.as_str().parse().ok()
}

fn range(caps: &Captures<'_>, start: usize, end: usize) -> Option<std::ops::RangeInclusive<u8>> {
    Some(digit(caps, start)?..=digit(caps, end)?)
}

/// Adds every in-domain (day, period) combination.
fn add(cells: &mut BTreeSet<WeekSlot>, days: &[Day], numbers: impl IntoIterator<Item = u8>) {
    for period in numbers.into_iter().filter_map(Period::new) {
        for &day in days {
            cells.insert(WeekSlot::new(day, period));
        }
    }
}
