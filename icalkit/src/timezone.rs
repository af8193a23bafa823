//! Synthesizes a [`TimeZone`] component for an IANA zone identifier from [`chrono_tz`]'s
//! transition data, memoized process-wide behind a mutex (see `5. CONCURRENCY & RESOURCE MODEL`
//! for the invariant this cache must uphold: `get` is linearizable and idempotent).

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use calendar_types::primitive::Sign as OrdinalSign;
use calendar_types::time::Weekday;
use chrono::{Datelike, NaiveDate, Offset, TimeZone as _};
use chrono_tz::OffsetName;

use crate::model::component::{TimeZone, TzRule, TzRuleKind};
use crate::model::parameter::Params;
use crate::model::primitive::{Date, DateTime as IcalDateTime, DateTimeOrDate, RawTime, Sign, Time, TimeFormat, UtcOffset};
use crate::model::property::Prop;
use crate::model::rrule::{Freq, MonthSet, RRule, WeekdayNum, WeekdayNumSet, YearDayNum};
use crate::model::string::{TzId, Uri};

/// The year whose transitions are sampled to derive offsets, `DTSTART`, and the `RRULE` pattern.
const REFERENCE_YEAR: i32 = 1970;

/// How many consecutive years are compared when looking for a stable `BYDAY`/`BYSETPOS` pattern.
const PATTERN_SAMPLE_YEARS: i32 = 5;

/// The default template used to build a `TZURL` value; `{id}` is replaced with the zone
/// identifier.
const DEFAULT_TZURL_TEMPLATE: &str = "http://tzurl.org/zoneinfo-outlook/{id}";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SynthesizeError {
    #[error("{0:?} is not a known IANA timezone identifier")]
    UnknownZone(String),
    #[error("could not locate a DST transition for {zone:?} in {year}")]
    NoTransitionFound { zone: String, year: i32 },
}

static CACHE: LazyLock<Mutex<HashMap<String, TimeZone>>> = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns the synthesized `VTIMEZONE` for `zone_id`, consulting (and populating) the process-wide
/// memo cache.
#[tracing::instrument]
pub fn get(zone_id: &str) -> Result<TimeZone, SynthesizeError> {
    if let Some(cached) = CACHE.lock().unwrap_or_else(|e| e.into_inner()).get(zone_id) {
        return Ok(cached.clone());
    }

    let synthesized = synthesize(zone_id)?;
    CACHE.lock().unwrap_or_else(|e| e.into_inner()).insert(zone_id.to_owned(), synthesized.clone());
    Ok(synthesized)
}

/// Clears the memo cache. Subsequent calls to [`get`] recompute their result.
pub fn clear_cache() {
    CACHE.lock().unwrap_or_else(|e| e.into_inner()).clear();
}

fn synthesize(zone_id: &str) -> Result<TimeZone, SynthesizeError> {
    let tz: chrono_tz::Tz = zone_id.parse().map_err(|_| SynthesizeError::UnknownZone(zone_id.to_owned()))?;

    let jan = offset_seconds(tz, REFERENCE_YEAR, 1, 15);
    let jul = offset_seconds(tz, REFERENCE_YEAR, 7, 15);

    let tz_id: Box<TzId> = TzId::new(zone_id).unwrap().into();

    let rules = if jan == jul {
        let name = short_name(tz, REFERENCE_YEAR, 1, 15);
        vec![standard_rule(jan, &name)]
    } else {
        let standard_offset = jan.min(jul);
        let daylight_offset = jan.max(jul);

        let to_standard = find_transition(tz, REFERENCE_YEAR, 9..=12, standard_offset)
            .ok_or_else(|| SynthesizeError::NoTransitionFound { zone: zone_id.to_owned(), year: REFERENCE_YEAR })?;
        let to_daylight = find_transition(tz, REFERENCE_YEAR, 2..=5, daylight_offset)
            .ok_or_else(|| SynthesizeError::NoTransitionFound { zone: zone_id.to_owned(), year: REFERENCE_YEAR })?;

        let standard_name = short_name(tz, REFERENCE_YEAR, to_standard.month(), to_standard.day());
        let daylight_name = short_name(tz, REFERENCE_YEAR, to_daylight.month(), to_daylight.day());

        vec![
            transition_rule(TzRuleKind::Standard, to_standard, daylight_offset, standard_offset, &standard_name, rrule_for(tz, to_standard, 9..=12, standard_offset)),
            transition_rule(TzRuleKind::Daylight, to_daylight, standard_offset, daylight_offset, &daylight_name, rrule_for(tz, to_daylight, 2..=5, daylight_offset)),
        ]
    };

    let mut timezone = TimeZone::new(Prop { value: tz_id, params: Params::new() }, rules);
    let tzurl = DEFAULT_TZURL_TEMPLATE.replace("{id}", zone_id);
    let uri: Box<Uri> = Uri::new(&tzurl).unwrap().into();
    timezone.set_tz_url(Prop { value: uri, params: Params::new() });

    Ok(timezone)
}

fn offset_seconds(tz: chrono_tz::Tz, year: i32, month: u32, day: u32) -> i32 {
    let naive = NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(12, 0, 0).unwrap();
    tz.offset_from_utc_datetime(&naive).fix().local_minus_utc()
}

fn short_name(tz: chrono_tz::Tz, year: i32, month: u32, day: u32) -> String {
    let naive = NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(12, 0, 0).unwrap();
    tz.offset_from_utc_datetime(&naive).abbreviation().to_owned()
}

/// Scans `months` of `year` day by day for the date the zone's offset changes to `target_offset`,
/// probing each day at noon UTC.
fn find_transition(tz: chrono_tz::Tz, year: i32, months: std::ops::RangeInclusive<u32>, target_offset: i32) -> Option<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, *months.start(), 1)?;
    let end = if *months.end() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, months.end() + 1, 1)?
    };

    let mut prev = offset_seconds(tz, year, start.month(), start.day());
    let mut day = start.succ_opt()?;
    while day < end {
        let current = offset_seconds(tz, day.year(), day.month(), day.day());
        if current != prev && current == target_offset {
            return Some(day);
        }
        prev = current;
        day = day.succ_opt()?;
    }

    None
}

fn standard_rule(offset: i32, name: &str) -> TzRule {
    let dtstart = floating_datetime(REFERENCE_YEAR, 1, 1);
    let offset = to_utc_offset(offset);
    let mut rule = TzRule::new(TzRuleKind::Standard, value_prop(dtstart), value_prop(offset), value_prop(offset));
    rule.set_tz_name(vec![value_prop(name.to_owned())]);
    rule
}

fn transition_rule(kind: TzRuleKind, date: NaiveDate, from_offset: i32, to_offset: i32, name: &str, rrule: Option<RRule>) -> TzRule {
    let dtstart = floating_datetime(date.year(), date.month(), date.day());
    let mut rule = TzRule::new(kind, value_prop(dtstart), value_prop(to_utc_offset(to_offset)), value_prop(to_utc_offset(from_offset)));
    rule.set_tz_name(vec![value_prop(name.to_owned())]);
    if let Some(r) = rrule {
        rule.set_rrule(vec![value_prop(r)]);
    }
    rule
}

fn floating_datetime(year: i32, month: u32, day: u32) -> DateTimeOrDate {
    let date = Date::from_ymd_opt(year as u16, month as u8, day as u8).expect("reference date is in range");
    DateTimeOrDate::DateTime(IcalDateTime {
        date,
        time: Time { raw: RawTime { hours: 2, minutes: 0, seconds: 0 }, format: TimeFormat::Local },
    })
}

fn to_utc_offset(total_seconds: i32) -> UtcOffset {
    let sign = if total_seconds < 0 { Sign::Negative } else { Sign::Positive };
    let abs = total_seconds.unsigned_abs();
    UtcOffset {
        sign,
        hours: (abs / 3600) as u8,
        minutes: ((abs % 3600) / 60) as u8,
        seconds: match abs % 60 {
            0 => None,
            s => Some(s as u8),
        },
    }
}

fn value_prop<V>(value: V) -> Prop<V, Params> {
    Prop { value, params: Params::new() }
}

/// Looks for a stable "nth weekday of month" (or "last weekday of month") pattern by recomputing
/// the transition over [`PATTERN_SAMPLE_YEARS`] consecutive years; returns `None` if the day
/// wanders (e.g. a fixed calendar date transition rather than a weekday rule).
fn rrule_for(tz: chrono_tz::Tz, first: NaiveDate, months: std::ops::RangeInclusive<u32>, target_offset: i32) -> Option<RRule> {
    let base_weekday = first.weekday();
    let base_month = first.month();
    let base_is_last = is_last_occurrence(first);
    let base_ordinal = ordinal_in_month(first);

    for offset in 1..PATTERN_SAMPLE_YEARS {
        let year = REFERENCE_YEAR + offset;
        let day = find_transition(tz, year, months.clone(), target_offset)?;
        if day.weekday() != base_weekday || day.month() != base_month {
            return None;
        }
        if is_last_occurrence(day) != base_is_last {
            return None;
        }
        if !base_is_last && ordinal_in_month(day) != base_ordinal {
            return None;
        }
    }

    let mut rule = RRule { freq: Freq::Yearly, ..RRule::default() };
    let mut by_day = WeekdayNumSet::default();
    by_day.insert(WeekdayNum { ordinal: None, weekday: to_model_weekday(base_weekday) });
    rule.by_day = by_day;

    let mut by_month = MonthSet::default();
    by_month.set(calendar_types::time::Month::from_number(base_month as u8).expect("chrono month is 1..=12"));
    rule.by_month = by_month;

    let pos = if base_is_last {
        YearDayNum::from_signed_index(OrdinalSign::Neg, 1).unwrap()
    } else {
        YearDayNum::from_signed_index(OrdinalSign::Pos, base_ordinal as u16).unwrap()
    };
    rule.by_set_pos = vec![pos];

    Some(rule)
}

fn ordinal_in_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

fn is_last_occurrence(date: NaiveDate) -> bool {
    let next_week = date + chrono::Duration::days(7);
    next_week.month() != date.month()
}

fn to_model_weekday(w: chrono::Weekday) -> Weekday {
    match w {
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
        chrono::Weekday::Sun => Weekday::Sunday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_zone_is_rejected() {
        clear_cache();
        assert!(matches!(get("Not/AZone"), Err(SynthesizeError::UnknownZone(_))));
    }

    #[test]
    fn repeated_lookup_is_cached_and_equal() {
        clear_cache();
        let a = get("Europe/London").unwrap();
        let b = get("Europe/London").unwrap();
        assert_eq!(a.tz_id().value.as_str(), b.tz_id().value.as_str());
        assert_eq!(a.rules().len(), b.rules().len());
    }

    #[test]
    fn dst_zone_synthesizes_two_rules() {
        clear_cache();
        let tz = get("Europe/London").unwrap();
        assert_eq!(tz.rules().len(), 2);
    }

    #[test]
    fn non_dst_zone_synthesizes_one_rule() {
        clear_cache();
        let tz = get("Asia/Tokyo").unwrap();
        assert_eq!(tz.rules().len(), 1);
    }
}
