//! Weekly slot domain.
//!
//! The timetable is a fixed grid: 2 semesters × 3 modules × 5 weekdays
//! × 6 periods = 180 atomic slots. Every traversal of that grid goes
//! through [`Term::ALL`], [`WeekSlot::all`] or [`TimeSlot::domain`] so
//! the iteration order is defined in one place.
//!
//! # Tokens
//!
//! | Type | Tokens |
//! |------|--------|
//! | Semester | 春 (spring), 秋 (fall) |
//! | Module | A, B, C |
//! | Day | 月 火 水 木 金 |
//! | Period | 1-6 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseTokenError;

/// Academic semester.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    /// 春学期.
    Spring,
    /// 秋学期.
    Fall,
}

impl Semester {
    /// All semesters in timetable order.
    pub const ALL: [Semester; 2] = [Semester::Spring, Semester::Fall];

    /// Token used in module strings.
    pub fn token(self) -> char {
        match self {
            Self::Spring => '春',
            Self::Fall => '秋',
        }
    }
}

/// Module (sub-term) within a semester.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Module {
    A,
    B,
    C,
}

impl Module {
    /// All modules in timetable order.
    pub const ALL: [Module; 3] = [Module::A, Module::B, Module::C];

    /// Token used in module strings.
    pub fn token(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }
}

/// Weekday on which classes are held.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All weekdays, Monday first.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Single-character token used in period strings.
    pub fn token(self) -> char {
        match self {
            Self::Mon => '月',
            Self::Tue => '火',
            Self::Wed => '水',
            Self::Thu => '木',
            Self::Fri => '金',
        }
    }

    /// Looks up a day by its token.
    pub fn from_token(token: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.token() == token)
    }

    /// Zero-based column index (Mon = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Class period of the day (1-6).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

impl Period {
    /// Number of periods per day.
    pub const COUNT: usize = 6;

    /// All periods in order.
    pub const ALL: [Period; 6] = [
        Period(1),
        Period(2),
        Period(3),
        Period(4),
        Period(5),
        Period(6),
    ];

    /// Creates a period, or `None` outside 1-6.
    pub fn new(number: u8) -> Option<Self> {
        (1..=Self::COUNT as u8).contains(&number).then_some(Self(number))
    }

    /// Period number (1-based).
    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based row index.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Period {
    type Error = ParseTokenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| ParseTokenError::new("period", value.to_string()))
    }
}

impl From<Period> for u8 {
    fn from(period: Period) -> Self {
        period.0
    }
}

/// A (semester, module) pair; one of the six timetable buckets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Term {
    pub semester: Semester,
    pub module: Module,
}

impl Term {
    /// The six terms: spring A/B/C then fall A/B/C.
    pub const ALL: [Term; 6] = [
        Term::new(Semester::Spring, Module::A),
        Term::new(Semester::Spring, Module::B),
        Term::new(Semester::Spring, Module::C),
        Term::new(Semester::Fall, Module::A),
        Term::new(Semester::Fall, Module::B),
        Term::new(Semester::Fall, Module::C),
    ];

    /// Creates a term.
    pub const fn new(semester: Semester, module: Module) -> Self {
        Self { semester, module }
    }

    /// Position in [`Term::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self.semester as usize * Module::ALL.len() + self.module as usize
    }

    /// Whether a raw module string names this term.
    ///
    /// Loose substring test: both the semester token and the module
    /// letter must appear somewhere in the text.
    pub fn is_named_by(self, module_text: &str) -> bool {
        module_text.contains(self.semester.token()) && module_text.contains(self.module.token())
    }
}

/// A (day, period) cell of the weekly grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WeekSlot {
    pub day: Day,
    pub period: Period,
}

impl WeekSlot {
    /// Creates a week slot.
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }

    /// All 30 cells, day-major (Mon 1, Mon 2, ..., Fri 6).
    pub fn all() -> impl Iterator<Item = WeekSlot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Period::ALL.into_iter().map(move |period| WeekSlot { day, period }))
    }
}

/// Atomic scheduling unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeSlot {
    pub semester: Semester,
    pub module: Module,
    pub day: Day,
    pub period: Period,
}

impl TimeSlot {
    /// Total number of slots in the domain.
    pub const DOMAIN_SIZE: usize = 2 * 3 * 5 * 6;

    /// Combines a term with a weekly cell.
    pub fn new(term: Term, week: WeekSlot) -> Self {
        Self {
            semester: term.semester,
            module: term.module,
            day: week.day,
            period: week.period,
        }
    }

    /// Every slot, ordered by semester, module, day, period.
    pub fn domain() -> impl Iterator<Item = TimeSlot> {
        Term::ALL
            .into_iter()
            .flat_map(|term| WeekSlot::all().map(move |week| TimeSlot::new(term, week)))
    }

    /// The slot's term.
    pub fn term(&self) -> Term {
        Term::new(self.semester, self.module)
    }

    /// The slot's weekly cell.
    pub fn week_slot(&self) -> WeekSlot {
        WeekSlot::new(self.day, self.period)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.semester, self.module)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}{}", self.semester, self.module, self.day, self.period)
    }
}

/// Parses a string holding exactly one character.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl FromStr for Semester {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "春" | "spring" => Ok(Self::Spring),
            "秋" | "fall" => Ok(Self::Fall),
            _ => Err(ParseTokenError::new("semester", s)),
        }
    }
}

impl FromStr for Module {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        single_char(s)
            .and_then(|c| Self::ALL.into_iter().find(|m| m.token() == c))
            .ok_or_else(|| ParseTokenError::new("module", s))
    }
}

impl FromStr for Day {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        single_char(s)
            .and_then(Self::from_token)
            .ok_or_else(|| ParseTokenError::new("day", s))
    }
}

impl FromStr for Period {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseTokenError::new("period", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_size_and_order() {
        let slots: Vec<TimeSlot> = TimeSlot::domain().collect();
        assert_eq!(slots.len(), TimeSlot::DOMAIN_SIZE);

        let first = slots[0];
        assert_eq!(first.term(), Term::new(Semester::Spring, Module::A));
        assert_eq!(first.week_slot(), WeekSlot::new(Day::Mon, Period::ALL[0]));

        let last = slots[slots.len() - 1];
        assert_eq!(last.to_string(), "秋C-金6");

        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(sorted, slots); // domain order is the derived Ord
    }

    #[test]
    fn test_term_index_matches_all() {
        for (i, term) in Term::ALL.iter().enumerate() {
            assert_eq!(term.index(), i);
        }
    }

    #[test]
    fn test_term_is_named_by() {
        let spring_a = Term::new(Semester::Spring, Module::A);
        assert!(spring_a.is_named_by("春A"));
        assert!(spring_a.is_named_by("春ABC"));
        assert!(spring_a.is_named_by("秋A 春C")); // loose: tokens anywhere
        assert!(!spring_a.is_named_by("春BC"));
        assert!(!spring_a.is_named_by("秋A"));
        assert!(!spring_a.is_named_by("通年"));
    }

    #[test]
    fn test_period_bounds() {
        assert!(Period::new(0).is_none());
        assert_eq!(Period::new(1).map(Period::number), Some(1));
        assert_eq!(Period::new(6).map(Period::index), Some(5));
        assert!(Period::new(7).is_none());
    }

    #[test]
    fn test_token_parsing() {
        assert_eq!("春".parse::<Semester>(), Ok(Semester::Spring));
        assert_eq!("fall".parse::<Semester>(), Ok(Semester::Fall));
        assert_eq!("B".parse::<Module>(), Ok(Module::B));
        assert_eq!("木".parse::<Day>(), Ok(Day::Thu));
        assert_eq!("4".parse::<Period>().map(Period::number), Ok(4));

        let err = "土".parse::<Day>().unwrap_err();
        assert_eq!(err.domain, "day");
        assert!("AB".parse::<Module>().is_err());
        assert!("9".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_serde() {
        let json = serde_json::to_string(&Period::ALL[2]).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<Period>("8").is_err());

        let slot = TimeSlot::new(Term::ALL[4], WeekSlot::new(Day::Wed, Period::ALL[1]));
        let back: TimeSlot =
            serde_json::from_str(&serde_json::to_string(&slot).unwrap()).unwrap();
        assert_eq!(back, slot);
    }
}
