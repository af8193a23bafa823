//! `RECUR` values (RFC 5545 §3.3.10).
//!
//! ```text
//! recur = recur-rule-part *( ";" recur-rule-part )
//! recur-rule-part = "FREQ" "=" freq
//!                  / "UNTIL" "=" enddate
//!                  / "COUNT" "=" 1*DIGIT
//!                  / "INTERVAL" "=" 1*DIGIT
//!                  / "BYSECOND" "=" byseclist
//!                  / ...
//! ```
//!
//! Rule parts may occur in any order, but `FREQ` is mandatory and each part may occur at most
//! once; `COUNT` and `UNTIL` are mutually exclusive.

use std::num::NonZero;

use winnow::{
    Parser,
    ascii::Caseless,
    combinator::{alt, opt, preceded, separated},
    error::{FromExternalError, ParserError},
    stream::AsChar,
    token::{literal, take_while},
};

use calendar_types::primitive::Sign;

use crate::model::primitive::{DateTimeOrDate, IsoWeek, Weekday};
use crate::model::rrule::{
    Freq, Hour, HourSet, Interval, Minute, MinuteSet, MonthDay, MonthDaySet, MonthDaySetIndex,
    MonthSet, RRule, RRuleBound, Second, SecondSet, WeekNoSet, WeekNoSetIndex, WeekdayNum,
    WeekdayNumSet, YearDayNum,
};
use crate::model::string::Name;
use crate::parser::primitive::{comma_seq1, datetime_or_date, name, positive_integer, sign};
use crate::parser::{InputStream, error::CalendarParseError};

/// Parses a `FREQ` value.
fn freq<I, E>(input: &mut I) -> Result<Freq, E>
where
    I: InputStream,
    E: ParserError<I>,
{
    alt((
        Caseless("SECONDLY").value(Freq::Secondly),
        Caseless("MINUTELY").value(Freq::Minutely),
        Caseless("HOURLY").value(Freq::Hourly),
        Caseless("DAILY").value(Freq::Daily),
        Caseless("WEEKLY").value(Freq::Weekly),
        Caseless("MONTHLY").value(Freq::Monthly),
        Caseless("YEARLY").value(Freq::Yearly),
    ))
    .parse_next(input)
}

/// Parses a two-letter weekday abbreviation (`MO`, `TU`, ...).
fn weekday<I, E>(input: &mut I) -> Result<Weekday, E>
where
    I: InputStream,
    E: ParserError<I>,
{
    alt((
        Caseless("MO").value(Weekday::Monday),
        Caseless("TU").value(Weekday::Tuesday),
        Caseless("WE").value(Weekday::Wednesday),
        Caseless("TH").value(Weekday::Thursday),
        Caseless("FR").value(Weekday::Friday),
        Caseless("SA").value(Weekday::Saturday),
        Caseless("SU").value(Weekday::Sunday),
    ))
    .parse_next(input)
}

fn unsigned_u16<I, E>(input: &mut I) -> Result<u16, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I>,
{
    let digits = take_while(1.., |t: I::Token| t.as_char().is_ascii_digit()).parse_next(input)?;
    let s = I::try_into_string(&digits).map_err(|_| E::from_input(input))?;
    s.parse::<u16>().map_err(|_| E::from_input(input))
}

/// Parses a signed index of the form `[sign] 1*DIGIT`, e.g. `BYMONTHDAY`'s `+5` or `-1`.
fn signed_index<I, E>(input: &mut I) -> Result<(Sign, u16), E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I>,
{
    let s = opt(sign).parse_next(input)?.unwrap_or_default();
    let n = unsigned_u16.parse_next(input)?;
    Ok((s, n))
}

/// Parses one `BYDAY` value: `[[sign] ordwk] weekday`.
fn weekday_num<I, E>(input: &mut I) -> Result<WeekdayNum, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I>,
{
    let ordinal = opt((opt(sign), take_while(1.., |t: I::Token| t.as_char().is_ascii_digit())))
        .parse_next(input)?;

    let ordinal = match ordinal {
        Some((s, digits)) => {
            let s = s.unwrap_or_default();
            let n: u8 = I::try_into_string(&digits)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| E::from_input(input))?;
            let week = IsoWeek::from_index(n).ok_or_else(|| E::from_input(input))?;
            Some((s, week))
        }
        None => None,
    };

    let weekday = weekday.parse_next(input)?;
    Ok(WeekdayNum { ordinal, weekday })
}

fn by_day<I, E>(input: &mut I) -> Result<WeekdayNumSet, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I>,
{
    let values = comma_seq1(weekday_num).parse_next(input)?;
    let mut set = WeekdayNumSet::default();
    for value in values {
        set.insert(value);
    }
    Ok(set)
}

fn by_hour<I, E>(input: &mut I) -> Result<HourSet, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let values = comma_seq1(unsigned_u16).parse_next(input)?;
    let mut set = HourSet::default();
    for value in values {
        let hour = u8::try_from(value)
            .ok()
            .and_then(Hour::from_repr)
            .ok_or_else(|| {
                E::from_external_error(
                    input,
                    CalendarParseError::InvalidHourIndex(value.min(255) as u8),
                )
            })?;
        set.set(hour);
    }
    Ok(set)
}

fn by_minute<I, E>(input: &mut I) -> Result<MinuteSet, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let values = comma_seq1(unsigned_u16).parse_next(input)?;
    let mut set = MinuteSet::default();
    for value in values {
        let minute = u8::try_from(value)
            .ok()
            .and_then(Minute::from_repr)
            .ok_or_else(|| {
                E::from_external_error(
                    input,
                    CalendarParseError::InvalidMinuteIndex(value.min(255) as u8),
                )
            })?;
        set.set(minute);
    }
    Ok(set)
}

fn by_second<I, E>(input: &mut I) -> Result<SecondSet, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let values = comma_seq1(unsigned_u16).parse_next(input)?;
    let mut set = SecondSet::default();
    for value in values {
        let second = u8::try_from(value)
            .ok()
            .and_then(Second::from_repr)
            .ok_or_else(|| {
                E::from_external_error(
                    input,
                    CalendarParseError::InvalidSecondIndex(value.min(255) as u8),
                )
            })?;
        set.set(second);
    }
    Ok(set)
}

fn by_month<I, E>(input: &mut I) -> Result<MonthSet, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    use calendar_types::time::Month;

    let values = comma_seq1(unsigned_u16).parse_next(input)?;
    let mut set = MonthSet::default();
    for value in values {
        let month = u8::try_from(value)
            .ok()
            .and_then(|n| Month::new(n).ok())
            .ok_or_else(|| {
                E::from_external_error(
                    input,
                    CalendarParseError::InvalidMonthNumber(value.min(255) as u8),
                )
            })?;
        set.set(month);
    }
    Ok(set)
}

fn by_month_day<I, E>(input: &mut I) -> Result<MonthDaySet, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let values = comma_seq1(signed_index).parse_next(input)?;
    let mut set = MonthDaySet::default();
    for (s, n) in values {
        let day = u8::try_from(n)
            .ok()
            .and_then(MonthDay::from_repr)
            .ok_or_else(|| {
                E::from_external_error(input, CalendarParseError::InvalidMonthDayIndex(n.min(255) as u8))
            })?;
        set.set(MonthDaySetIndex::from_signed_month_day(s, day));
    }
    Ok(set)
}

fn by_week_no<I, E>(input: &mut I) -> Result<WeekNoSet, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let values = comma_seq1(signed_index).parse_next(input)?;
    let mut set = WeekNoSet::default();
    for (s, n) in values {
        let week = u8::try_from(n)
            .ok()
            .and_then(IsoWeek::from_index)
            .ok_or_else(|| {
                E::from_external_error(input, CalendarParseError::InvalidIsoWeekIndex(n.min(255) as u8))
            })?;
        set.set(WeekNoSetIndex::from_signed_week(s, week));
    }
    Ok(set)
}

fn year_day_list<I, E>(input: &mut I) -> Result<Vec<YearDayNum>, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let values = comma_seq1(signed_index).parse_next(input)?;
    values
        .into_iter()
        .map(|(s, n)| {
            YearDayNum::from_signed_index(s, n)
                .ok_or_else(|| E::from_external_error(input, CalendarParseError::InvalidInteger(
                    crate::parser::error::InvalidIntegerError { sign: Some(s), digits: n as u64 },
                )))
        })
        .collect()
}

/// One `recur-rule-part`, not yet folded into an [`RRule`].
enum Part {
    Freq(Freq),
    Until(DateTimeOrDate),
    Count(NonZero<u32>),
    Interval(Interval),
    BySecond(SecondSet),
    ByMinute(MinuteSet),
    ByHour(HourSet),
    ByDay(WeekdayNumSet),
    ByMonthDay(MonthDaySet),
    ByYearDay(Vec<YearDayNum>),
    ByWeekNo(WeekNoSet),
    ByMonth(MonthSet),
    BySetPos(Vec<YearDayNum>),
    WeekStart(Weekday),
    Rscale(Box<Name>),
}

fn part<I, E>(input: &mut I) -> Result<Part, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    alt((
        preceded(Caseless("FREQ="), freq).map(Part::Freq),
        preceded(Caseless("UNTIL="), datetime_or_date).map(Part::Until),
        preceded(Caseless("COUNT="), positive_integer).map(Part::Count),
        preceded(Caseless("INTERVAL="), positive_integer)
            .map(|n| Part::Interval(Interval::new(n.into()))),
        preceded(Caseless("BYSECOND="), by_second).map(Part::BySecond),
        preceded(Caseless("BYMINUTE="), by_minute).map(Part::ByMinute),
        preceded(Caseless("BYHOUR="), by_hour).map(Part::ByHour),
        preceded(Caseless("BYDAY="), by_day).map(Part::ByDay),
        preceded(Caseless("BYMONTHDAY="), by_month_day).map(Part::ByMonthDay),
        preceded(Caseless("BYYEARDAY="), year_day_list).map(Part::ByYearDay),
        preceded(Caseless("BYWEEKNO="), by_week_no).map(Part::ByWeekNo),
        preceded(Caseless("BYMONTH="), by_month).map(Part::ByMonth),
        preceded(Caseless("BYSETPOS="), year_day_list).map(Part::BySetPos),
        preceded(Caseless("WKST="), weekday).map(Part::WeekStart),
        preceded(Caseless("RSCALE="), name).map(Part::Rscale),
    ))
    .parse_next(input)
}

/// Parses a complete `RECUR` value into an [`RRule`].
pub fn recur<I, E>(input: &mut I) -> Result<RRule, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let parts: Vec<Part> = separated(1.., part, literal(';')).parse_next(input)?;

    let mut rule = RRule::default();
    let mut freq_seen = false;
    let mut count = None;
    let mut until = None;

    for p in parts {
        match p {
            Part::Freq(f) => {
                rule.freq = f;
                freq_seen = true;
            }
            Part::Until(u) => until = Some(u),
            Part::Count(c) => count = Some(c),
            Part::Interval(i) => rule.interval = i,
            Part::BySecond(s) => rule.by_second = s,
            Part::ByMinute(s) => rule.by_minute = s,
            Part::ByHour(s) => rule.by_hour = s,
            Part::ByDay(s) => rule.by_day = s,
            Part::ByMonthDay(s) => rule.by_month_day = s,
            Part::ByYearDay(s) => rule.by_year_day = s,
            Part::ByWeekNo(s) => rule.by_week_no = s,
            Part::ByMonth(s) => rule.by_month = s,
            Part::BySetPos(s) => rule.by_set_pos = s,
            Part::WeekStart(w) => rule.week_start = w,
            Part::Rscale(n) => rule.rscale = Some(n),
        }
    }

    if !freq_seen {
        return Err(E::from_external_error(input, CalendarParseError::MissingFreqPart));
    }

    rule.bound = match (count, until) {
        (Some(_), Some(_)) => {
            return Err(E::from_external_error(input, CalendarParseError::CountAndUntilInRRule));
        }
        (Some(c), None) => RRuleBound::Count(c),
        (None, Some(u)) => RRuleBound::Until(u),
        (None, None) => RRuleBound::Forever,
    };

    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recur_defaults_to_no_rscale() {
        let rule = recur::<_, ()>.parse_peek("FREQ=DAILY").unwrap().1;
        assert_eq!(rule.rscale, None);
    }

    #[test]
    fn recur_parses_rscale() {
        let rule = recur::<_, ()>.parse_peek("FREQ=YEARLY;RSCALE=CHINESE;BYMONTH=1").unwrap().1;
        assert_eq!(rule.rscale.as_deref().map(Name::as_str), Some("CHINESE"));
    }
}
