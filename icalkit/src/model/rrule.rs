//! Recurrence rule values (RFC 5545 §3.3.10).
//!
//! The `BYxxx` rule parts and their bitset representations are reused directly from
//! [`rfc5545_types::rrule`], since they carry no dependency on the ambiguous local/UTC time
//! format used elsewhere in this crate's data model. Only the `UNTIL` bound needs that
//! parameter, so [`RRule`] and [`RRuleBound`] are defined locally in terms of
//! [`DateTimeOrDate`](super::primitive::DateTimeOrDate).

use std::num::NonZero;

pub use rfc5545_types::rrule::{
    ByRuleBehavior, ByRuleName, Freq, Hour, HourSet, Interval, Minute, MinuteSet, MonthDay,
    MonthDaySet, MonthDaySetIndex, MonthSet, PartName, Second, SecondSet, WeekNoSet,
    WeekNoSetIndex, WeekdayNum, WeekdayNumSet, YearDayNum, weekday_num_set,
};

use super::primitive::{DateTimeOrDate, Weekday};
use super::string::Name;

/// When a recurrence rule terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RRuleBound {
    /// The rule recurs forever.
    Forever,
    /// The rule terminates on or before the given instant (`UNTIL`).
    Until(DateTimeOrDate),
    /// The rule terminates after the given number of occurrences (`COUNT`).
    Count(NonZero<u32>),
}

/// A recurrence rule (RFC 5545 §3.3.10).
#[derive(Debug, Clone, PartialEq)]
pub struct RRule {
    pub freq: Freq,
    pub interval: Interval,
    pub bound: RRuleBound,
    pub by_second: SecondSet,
    pub by_minute: MinuteSet,
    pub by_hour: HourSet,
    pub by_day: WeekdayNumSet,
    pub by_month_day: MonthDaySet,
    pub by_year_day: Vec<YearDayNum>,
    pub by_week_no: WeekNoSet,
    pub by_month: MonthSet,
    pub by_set_pos: Vec<YearDayNum>,
    pub week_start: Weekday,
    /// RFC 7529 `RSCALE`: the calendar system this rule is interpreted in. `None` means the
    /// default Gregorian calendar.
    pub rscale: Option<Box<Name>>,
}

impl Default for RRule {
    fn default() -> Self {
        Self {
            freq: Freq::Daily,
            interval: Interval::default(),
            bound: RRuleBound::Forever,
            by_second: SecondSet::default(),
            by_minute: MinuteSet::default(),
            by_hour: HourSet::default(),
            by_day: WeekdayNumSet::default(),
            by_month_day: MonthDaySet::default(),
            by_year_day: Vec::new(),
            by_week_no: WeekNoSet::default(),
            by_month: MonthSet::default(),
            by_set_pos: Vec::new(),
            week_start: Weekday::Monday,
            rscale: None,
        }
    }
}
