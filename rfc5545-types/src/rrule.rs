//! Recurrence rule types (RFC 5545 §3.3.10, §3.8.5.3).
//!
//! A [`RRule`] is built from a mandatory [`Freq`] plus a set of optional `BYxxx` rule parts,
//! each of which either *limits* the recurrence set generated by `FREQ`/`INTERVAL` or *expands*
//! it, according to the table in RFC 5545 page 44. [`ByRuleName::behavior_with`] encodes that
//! table directly.

use std::num::NonZero;

use calendar_types::primitive::Sign;
use calendar_types::time::{IsoWeek, Month, Weekday};

use crate::time::DateTimeOrDate;

/// The base frequency of a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Freq {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// The name of a `BYxxx` recurrence rule part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByRuleName {
    ByMonth,
    ByWeekNo,
    ByYearDay,
    ByMonthDay,
    ByDay,
    ByHour,
    ByMinute,
    BySecond,
    BySetPos,
}

/// How a `BYxxx` rule part behaves for a given [`Freq`], per RFC 5545 page 44.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByRuleBehavior {
    /// The rule part limits the recurrence set generated by `FREQ`/`INTERVAL`.
    Limit,
    /// The rule part expands the recurrence set generated by `FREQ`/`INTERVAL`.
    Expand,
    /// `BYDAY` with `FREQ=MONTHLY` when `BYMONTHDAY` is absent: expands.
    Note1,
    /// `BYDAY` with `FREQ=YEARLY` when `BYWEEKNO` is absent: expands, unless `BYMONTHDAY` or
    /// `BYYEARDAY` is also present, in which case it limits.
    Note2,
}

impl ByRuleName {
    /// Returns this rule part's behavior under `freq`, or `None` if the combination is invalid.
    pub const fn behavior_with(self, freq: Freq) -> Option<ByRuleBehavior> {
        use ByRuleBehavior::*;
        use Freq::*;

        match (self, freq) {
            (Self::ByMonth, Yearly) => Some(Expand),
            (Self::ByMonth, _) => Some(Limit),

            (Self::ByWeekNo, Yearly) => Some(Expand),
            (Self::ByWeekNo, _) => None,

            (Self::ByYearDay, Secondly | Minutely | Hourly) => Some(Limit),
            (Self::ByYearDay, Daily | Weekly | Monthly) => None,
            (Self::ByYearDay, Yearly) => Some(Expand),

            (Self::ByMonthDay, Weekly) => None,
            (Self::ByMonthDay, Monthly | Yearly) => Some(Expand),
            (Self::ByMonthDay, _) => Some(Limit),

            (Self::ByDay, Weekly) => Some(Expand),
            (Self::ByDay, Monthly) => Some(Note1),
            (Self::ByDay, Yearly) => Some(Note2),
            (Self::ByDay, _) => Some(Limit),

            (Self::ByHour, Secondly | Minutely | Hourly) => Some(Limit),
            (Self::ByHour, _) => Some(Expand),

            (Self::ByMinute, Secondly | Minutely) => Some(Limit),
            (Self::ByMinute, _) => Some(Expand),

            (Self::BySecond, Secondly) => Some(Limit),
            (Self::BySecond, _) => Some(Expand),

            (Self::BySetPos, _) => Some(Limit),
        }
    }
}

/// Which `BYxxx` part name a duplicate-part parse error refers to.
pub type PartName = ByRuleName;

// ============================================================================
// Hour / HourSet
// ============================================================================

/// An hour of the day, `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Hour {
    #[default]
    H0,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    H7,
    H8,
    H9,
    H10,
    H11,
    H12,
    H13,
    H14,
    H15,
    H16,
    H17,
    H18,
    H19,
    H20,
    H21,
    H22,
    H23,
}

impl Hour {
    pub const fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            0..=23 => Some(unsafe { std::mem::transmute::<u8, Self>(repr) }),
            _ => None,
        }
    }

    pub fn iter() -> impl ExactSizeIterator<Item = Self> {
        (0..=23).map(|n| Self::from_repr(n).unwrap())
    }
}

/// A bitset over every possible [`Hour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HourSet(u32);

impl HourSet {
    pub fn set(&mut self, hour: Hour) {
        self.0 |= 1 << (hour as u8);
    }

    pub fn get(&self, hour: Hour) -> bool {
        self.0 & (1 << (hour as u8)) != 0
    }
}

// ============================================================================
// Minute / MinuteSet
// ============================================================================

/// A minute of the hour, `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Minute {
    #[default]
    M0,
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M7,
    M8,
    M9,
    M10,
    M11,
    M12,
    M13,
    M14,
    M15,
    M16,
    M17,
    M18,
    M19,
    M20,
    M21,
    M22,
    M23,
    M24,
    M25,
    M26,
    M27,
    M28,
    M29,
    M30,
    M31,
    M32,
    M33,
    M34,
    M35,
    M36,
    M37,
    M38,
    M39,
    M40,
    M41,
    M42,
    M43,
    M44,
    M45,
    M46,
    M47,
    M48,
    M49,
    M50,
    M51,
    M52,
    M53,
    M54,
    M55,
    M56,
    M57,
    M58,
    M59,
}

impl Minute {
    pub const fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            0..=59 => Some(unsafe { std::mem::transmute::<u8, Self>(repr) }),
            _ => None,
        }
    }

    pub fn iter() -> impl ExactSizeIterator<Item = Self> {
        (0..=59).map(|n| Self::from_repr(n).unwrap())
    }
}

/// A bitset over every possible [`Minute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinuteSet(u64);

impl MinuteSet {
    pub fn set(&mut self, minute: Minute) {
        self.0 |= 1 << (minute as u8);
    }

    pub fn get(&self, minute: Minute) -> bool {
        self.0 & (1 << (minute as u8)) != 0
    }
}

// ============================================================================
// Second / SecondSet
// ============================================================================

/// A second of the minute, `0..=60` (61 is present for leap seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Second {
    #[default]
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    S12,
    S13,
    S14,
    S15,
    S16,
    S17,
    S18,
    S19,
    S20,
    S21,
    S22,
    S23,
    S24,
    S25,
    S26,
    S27,
    S28,
    S29,
    S30,
    S31,
    S32,
    S33,
    S34,
    S35,
    S36,
    S37,
    S38,
    S39,
    S40,
    S41,
    S42,
    S43,
    S44,
    S45,
    S46,
    S47,
    S48,
    S49,
    S50,
    S51,
    S52,
    S53,
    S54,
    S55,
    S56,
    S57,
    S58,
    S59,
    S60,
}

impl Second {
    pub const fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            0..=60 => Some(unsafe { std::mem::transmute::<u8, Self>(repr) }),
            _ => None,
        }
    }

    pub fn iter() -> impl ExactSizeIterator<Item = Self> {
        (0..=60).map(|n| Self::from_repr(n).unwrap())
    }
}

/// A bitset over every possible [`Second`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecondSet(u64);

impl SecondSet {
    pub fn set(&mut self, second: Second) {
        self.0 |= 1 << (second as u8);
    }

    pub fn get(&self, second: Second) -> bool {
        self.0 & (1 << (second as u8)) != 0
    }
}

// ============================================================================
// MonthSet
// ============================================================================

/// A bitset over every [`Month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSet(u16);

impl MonthSet {
    pub fn set(&mut self, month: Month) {
        self.0 |= 1 << (month.number().get() - 1);
    }

    pub fn get(&self, month: Month) -> bool {
        self.0 & (1 << (month.number().get() - 1)) != 0
    }
}

// ============================================================================
// MonthDay / MonthDaySet
// ============================================================================

/// A day of the month, `1..=31`, independent of any particular month's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MonthDay {
    D1 = 1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D11,
    D12,
    D13,
    D14,
    D15,
    D16,
    D17,
    D18,
    D19,
    D20,
    D21,
    D22,
    D23,
    D24,
    D25,
    D26,
    D27,
    D28,
    D29,
    D30,
    D31,
}

impl MonthDay {
    pub const fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            1..=31 => Some(unsafe { std::mem::transmute::<u8, Self>(repr) }),
            _ => None,
        }
    }
}

/// An index into a [`MonthDaySet`]: a signed day-of-month, e.g. `+5` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDaySetIndex(u8);

impl MonthDaySetIndex {
    pub const fn from_signed_month_day(sign: Sign, day: MonthDay) -> Self {
        match sign {
            Sign::Pos => Self(day as u8 - 1),
            Sign::Neg => Self(31 + (day as u8 - 1)),
        }
    }
}

/// A bitset over every signed `BYMONTHDAY` index (`-31..=-1` and `1..=31`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthDaySet(u64);

impl MonthDaySet {
    pub fn set(&mut self, index: MonthDaySetIndex) {
        self.0 |= 1 << index.0;
    }

    pub fn get(&self, index: MonthDaySetIndex) -> bool {
        self.0 & (1 << index.0) != 0
    }
}

// ============================================================================
// WeekNoSet
// ============================================================================

/// An index into a [`WeekNoSet`]: a signed ISO week number, e.g. `+1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekNoSetIndex(u8);

impl WeekNoSetIndex {
    pub const fn from_signed_week(sign: Sign, week: IsoWeek) -> Self {
        match sign {
            Sign::Pos => Self(week.index().get() - 1),
            Sign::Neg => Self(53 + (week.index().get() - 1)),
        }
    }
}

/// A bitset over every signed `BYWEEKNO` index (`-53..=-1` and `1..=53`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekNoSet(u128);

impl Default for WeekNoSet {
    fn default() -> Self {
        Self(0)
    }
}

impl WeekNoSet {
    pub fn set(&mut self, index: WeekNoSetIndex) {
        self.0 |= 1 << index.0;
    }

    pub fn get(&self, index: WeekNoSetIndex) -> bool {
        self.0 & (1 << index.0) != 0
    }
}

// ============================================================================
// YearDayNum
// ============================================================================

/// A signed day-of-year index, e.g. `+1` or `-1`, valid in the range `1..=366`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearDayNum {
    sign: Sign,
    day: NonZero<u16>,
}

impl YearDayNum {
    pub fn from_signed_index(sign: Sign, index: u16) -> Option<Self> {
        match index {
            1..=366 => Some(Self {
                sign,
                day: NonZero::new(index).unwrap(),
            }),
            _ => None,
        }
    }

    pub const fn sign(self) -> Sign {
        self.sign
    }

    pub const fn day(self) -> NonZero<u16> {
        self.day
    }
}

// ============================================================================
// Interval
// ============================================================================

/// The `INTERVAL` rule part: how many `FREQ` periods apart each occurrence is. Defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(NonZero<u64>);

impl Default for Interval {
    fn default() -> Self {
        Self(NonZero::new(1).unwrap())
    }
}

impl Interval {
    pub const fn new(value: NonZero<u64>) -> Self {
        Self(value)
    }

    pub const fn get(self) -> NonZero<u64> {
        self.0
    }
}

// ============================================================================
// WeekdayNum / WeekdayNumSet
// ============================================================================

/// A `BYDAY` value: a [`Weekday`], optionally qualified by a signed ordinal (e.g. `-1FR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    pub ordinal: Option<(Sign, IsoWeek)>,
    pub weekday: Weekday,
}

/// A set of distinct [`WeekdayNum`] values, as used by the `BYDAY` rule part.
pub mod weekday_num_set {
    use super::WeekdayNum;

    /// An insertion-order-independent set of [`WeekdayNum`] values.
    ///
    /// `BYDAY` lists are short (at most 7 unqualified weekdays, or an arbitrary but small number
    /// of qualified ones), so a `Vec` with linear lookup outperforms a hash set in practice.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct WeekdayNumSet(Vec<WeekdayNum>);

    impl WeekdayNumSet {
        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        pub fn len(&self) -> usize {
            self.0.len()
        }

        pub fn contains(&self, value: WeekdayNum) -> bool {
            self.0.contains(&value)
        }

        pub fn insert(&mut self, value: WeekdayNum) -> bool {
            if self.contains(value) {
                false
            } else {
                self.0.push(value);
                true
            }
        }

        pub fn iter(&self) -> impl Iterator<Item = WeekdayNum> + '_ {
            self.0.iter().copied()
        }
    }
}

pub use weekday_num_set::WeekdayNumSet;

// ============================================================================
// RRule
// ============================================================================

/// When a recurrence rule terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RRuleBound<F> {
    /// The rule recurs forever.
    Forever,
    /// The rule terminates on or before the given instant (`UNTIL`).
    Until(DateTimeOrDate<F>),
    /// The rule terminates after the given number of occurrences (`COUNT`).
    Count(NonZero<u32>),
}

/// A recurrence rule (RFC 5545 §3.3.10).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RRule<F> {
    pub freq: Freq,
    pub interval: Interval,
    pub bound: RRuleBound<F>,
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
}

impl<F> Default for RRule<F> {
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
        }
    }
}
