//! Reduces a raw [`RawComponent`] tree into the typed component model in
//! [`crate::model::component`], and the `parse`/`parse_multiple` entry points built on top of it.
//!
//! [`crate::parser::component`] only assembles the `BEGIN`/`END` tree shape; it has no idea which
//! properties a `VEVENT` is supposed to have, or what a `DTSTART` value means. That mapping lives
//! here, one reduction function per component type, built out of a handful of generic lookup
//! helpers (`req_prop`, `opt_prop`, `multi_prop`, `multi_flat_prop`) that thread a strict/lenient
//! [`Mode`] through every property decode.
//!
//! A handful of temporal/duration value parsers are hand-rolled here rather than delegated to
//! [`crate::parser::primitive`], because the existing `date`/`time`/`datetime`/`datetime_or_date`/
//! `datetime_utc`/`utc_offset`/`duration`/`period` functions there are built against newtypes that
//! no longer match this crate's data model (see `DESIGN.md`). Every other value parser in that
//! module is used directly.

use mitsein::vec1::Vec1;

use crate::model::{
    component::{
        Alarm, AudioAlarm, Calendar, CalendarComponent, DisplayAlarm, EmailAlarm, Event, FreeBusy,
        Journal, LocationComponent, OtherAlarm, OtherComponent, Participant, ResourceComponent,
        TimeZone, Todo, TzRule, TzRuleKind,
    },
    parameter::{Params, StructuredDataParams},
    primitive::{
        AlarmAction, Attachment, ClassValue, Date, DateTime, DateTimeOrDate, Duration,
        DurationKind, DurationTime, Gregorian, Method, ParticipantType, Period, RDateSeq,
        ResourceType, Sign, SignedDuration, Status, StyledDescriptionValue, Time, TimeFormat,
        TriggerValue, Utc, UtcOffset, Value,
    },
    property::{Prop, StaticProp, StructuredDataProp},
    string::{CaselessStr, Uid, Uri},
};
use crate::parser::{
    component::{self, ComponentName, RawComponent},
    error::{
        CalendarParseError, ComponentKind, InvalidDateError, InvalidDurationTimeError,
        InvalidRawTimeError, InvalidUtcOffsetError,
    },
    primitive as p,
    property::{ContentLine, PropName},
};

/// Whether unrecoverable-but-localized errors (an unparsable property value, an unrecognized
/// component kind, a non-`BEGIN` line outside of any component) abort parsing or are quietly
/// discarded. Structural failures &mdash; a missing required property, a malformed content line,
/// an unterminated component &mdash; are never downgraded by [`Mode::Lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Strict,
    Lenient,
}

// ============================================================================
// Entry points
// ============================================================================

/// Parses `text` as a single iCalendar object.
///
/// Returns [`CalendarParseError::InvalidFormat`] if `text` contains zero or more than one
/// top-level `VCALENDAR`.
pub fn parse(text: &str, mode: Mode) -> Result<Calendar, CalendarParseError<String>> {
    let mut calendars = parse_multiple(text, mode)?.into_iter();
    match (calendars.next(), calendars.next()) {
        (Some(calendar), None) => Ok(calendar),
        _ => Err(CalendarParseError::InvalidFormat(text.to_string())),
    }
}

/// Parses every top-level `VCALENDAR` object in `text`.
///
/// A leading UTF-8 BOM is stripped. Lines are unfolded before parsing, so the component grammar
/// in [`crate::parser::component`] never has to see continuation whitespace.
///
/// In [`Mode::Strict`], a non-`BEGIN` line outside of any component is a [`CalendarParseError::StrayProperty`],
/// and a top-level component that is not a `VCALENDAR` is a [`CalendarParseError::UnsupportedComponent`].
/// In [`Mode::Lenient`], both are skipped.
pub fn parse_multiple(text: &str, mode: Mode) -> Result<Vec<Calendar>, CalendarParseError<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let unfolded = String::from_utf8(crate::parser::escaped::unfold(text.as_bytes()))
        .map_err(|e| CalendarParseError::Utf8Error(e.utf8_error()))?;

    let mut input: &str = unfolded.as_str();
    let mut raws: Vec<RawComponent<&str>> = Vec::new();

    while !input.is_empty() {
        let starts_with_begin = input
            .as_bytes()
            .get(..6)
            .is_some_and(|b| b.eq_ignore_ascii_case(b"BEGIN:"));

        if !starts_with_begin {
            if mode == Mode::Strict {
                return Err(CalendarParseError::StrayProperty);
            }
            match input.find("\r\n") {
                Some(i) => input = &input[i + 2..],
                None => break,
            }
            continue;
        }

        let raw = component::component::<&str, CalendarParseError<String>>(&mut input)?;

        if raw.name != ComponentName::VCalendar {
            if mode == Mode::Strict {
                return Err(CalendarParseError::UnsupportedComponent(raw.name));
            }
            continue;
        }

        raws.push(raw);
    }

    raws.iter().map(|raw| reduce_calendar(raw, mode)).collect()
}

// ============================================================================
// Hand-rolled temporal / duration value decoders
//
// See the module doc comment: `parser::primitive`'s date/time/duration parsers are built against
// newtypes that no longer match this crate's data model, so the decoders below are written
// directly against `crate::model::primitive` instead of being composed from that module.
// ============================================================================

fn parse_date(s: &str) -> Result<Date, CalendarParseError<String>> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarParseError::InvalidFormat(s.to_string()));
    }
    let year: u16 = s[0..4].parse().unwrap();
    let month: u8 = s[4..6].parse().unwrap();
    let day: u8 = s[6..8].parse().unwrap();
    Date::from_ymd_opt(year, month, day)
        .ok_or(CalendarParseError::InvalidDate(InvalidDateError { year, month, day }))
}

fn parse_time_and_format(s: &str) -> Result<(crate::model::primitive::RawTime, TimeFormat), CalendarParseError<String>> {
    let (digits, utc) = match s.strip_suffix('Z') {
        Some(d) => (d, true),
        None => (s, false),
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarParseError::InvalidFormat(s.to_string()));
    }
    let hours: u8 = digits[0..2].parse().unwrap();
    let minutes: u8 = digits[2..4].parse().unwrap();
    let seconds: u8 = digits[4..6].parse().unwrap();
    if hours > 23 || minutes > 59 || seconds > 60 {
        return Err(CalendarParseError::InvalidRawTime(InvalidRawTimeError {
            hours,
            minutes,
            seconds,
        }));
    }
    let raw = crate::model::primitive::RawTime { hours, minutes, seconds };
    Ok((raw, if utc { TimeFormat::Utc } else { TimeFormat::Local }))
}

fn parse_datetime_or_date(s: &str) -> Result<DateTimeOrDate, CalendarParseError<String>> {
    match s.split_once('T') {
        Some((date_part, time_part)) => {
            let date = parse_date(date_part)?;
            let (raw, format) = parse_time_and_format(time_part)?;
            Ok(DateTimeOrDate::DateTime(DateTime { date, time: Time { raw, format } }))
        }
        None => Ok(DateTimeOrDate::Date(parse_date(s)?)),
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<TimeFormat>, CalendarParseError<String>> {
    let (date_part, time_part) = s
        .split_once('T')
        .ok_or_else(|| CalendarParseError::InvalidFormat(s.to_string()))?;
    let date = parse_date(date_part)?;
    let (raw, format) = parse_time_and_format(time_part)?;
    Ok(DateTime { date, time: Time { raw, format } })
}

fn parse_datetime_utc(s: &str) -> Result<DateTime<Utc>, CalendarParseError<String>> {
    let dt = parse_datetime(s)?;
    if dt.time.format != TimeFormat::Utc {
        return Err(CalendarParseError::InvalidFormat(s.to_string()));
    }
    Ok(DateTime { date: dt.date, time: Time { raw: dt.time.raw, format: Utc } })
}

fn parse_utc_offset(s: &str) -> Result<UtcOffset, CalendarParseError<String>> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (Sign::Positive, &s[1..]),
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => return Err(CalendarParseError::InvalidFormat(s.to_string())),
    };
    if (rest.len() != 4 && rest.len() != 6) || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarParseError::InvalidFormat(s.to_string()));
    }
    let hours: u8 = rest[0..2].parse().unwrap();
    let minutes: u8 = rest[2..4].parse().unwrap();
    let seconds: Option<u8> = if rest.len() == 6 { Some(rest[4..6].parse().unwrap()) } else { None };

    if hours > 23 {
        return Err(CalendarParseError::InvalidUtcOffset(InvalidUtcOffsetError::BadHours(hours)));
    }
    if minutes > 59 {
        return Err(CalendarParseError::InvalidUtcOffset(InvalidUtcOffsetError::BadMinutes(minutes)));
    }
    if let Some(sec) = seconds {
        if sec > 59 {
            return Err(CalendarParseError::InvalidUtcOffset(InvalidUtcOffsetError::BadSeconds(sec)));
        }
    }
    if sign == Sign::Negative && hours == 0 && minutes == 0 && seconds.unwrap_or(0) == 0 {
        return Err(CalendarParseError::InvalidUtcOffset(InvalidUtcOffsetError::NegativeZero));
    }

    Ok(UtcOffset { sign, hours, minutes, seconds })
}

fn parse_signed_duration(s: &str) -> Result<SignedDuration, CalendarParseError<String>> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (crate::model::primitive::Sign::Positive.into(), &s[1..]),
        Some(b'-') => (calendar_types::primitive::Sign::Neg, &s[1..]),
        _ => (calendar_types::primitive::Sign::Pos, s),
    };
    let rest = rest
        .strip_prefix('P')
        .ok_or_else(|| CalendarParseError::InvalidFormat(s.to_string()))?;
    let duration = parse_cal_duration(rest, s)?;
    Ok(SignedDuration { sign, duration })
}

fn parse_cal_duration(
    rest: &str,
    whole: &str,
) -> Result<calendar_types::duration::Duration, CalendarParseError<String>> {
    use calendar_types::duration::{Duration as CalDuration, ExactDuration, NominalDuration};

    if let Some(weeks_str) = rest.strip_suffix('W') {
        let weeks: u32 = weeks_str
            .parse()
            .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?;
        return Ok(CalDuration::Nominal(NominalDuration { weeks, days: 0, exact: None }));
    }
    if let Some(time_str) = rest.strip_prefix('T') {
        return Ok(CalDuration::Exact(parse_exact_duration(time_str, whole)?));
    }
    let day_end = rest
        .find('D')
        .ok_or_else(|| CalendarParseError::InvalidFormat(whole.to_string()))?;
    let days: u32 = rest[..day_end]
        .parse()
        .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?;
    let remainder = &rest[day_end + 1..];
    let exact = if remainder.is_empty() {
        None
    } else {
        let time_str = remainder
            .strip_prefix('T')
            .ok_or_else(|| CalendarParseError::InvalidFormat(whole.to_string()))?;
        Some(parse_exact_duration(time_str, whole)?)
    };
    Ok(CalDuration::Nominal(NominalDuration { weeks: 0, days, exact }))
}

fn parse_exact_duration(
    s: &str,
    whole: &str,
) -> Result<calendar_types::duration::ExactDuration, CalendarParseError<String>> {
    use calendar_types::duration::ExactDuration;

    let mut rest = s;
    let mut hours = 0u32;
    let mut minutes = 0u32;
    let mut seconds = 0u32;
    let mut any = false;

    if let Some(i) = rest.find('H') {
        hours = rest[..i]
            .parse()
            .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?;
        rest = &rest[i + 1..];
        any = true;
    }
    if let Some(i) = rest.find('M') {
        minutes = rest[..i]
            .parse()
            .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?;
        rest = &rest[i + 1..];
        any = true;
    }
    if let Some(i) = rest.find('S') {
        seconds = rest[..i]
            .parse()
            .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?;
        rest = &rest[i + 1..];
        any = true;
    }
    if !any || !rest.is_empty() {
        return Err(CalendarParseError::InvalidFormat(whole.to_string()));
    }
    Ok(ExactDuration { hours, minutes, seconds, frac: None })
}

/// Builds the narrowest [`DurationTime`] variant covering the parts present in `s`, which has
/// already had its leading `T` stripped.
fn parse_duration_time_part(s: &str, whole: &str) -> Result<DurationTime, CalendarParseError<String>> {
    let mut rest = s;
    let mut hours: Option<usize> = None;
    let mut minutes: Option<usize> = None;
    let mut seconds: Option<usize> = None;

    if let Some(i) = rest.find('H') {
        hours = Some(
            rest[..i]
                .parse()
                .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?,
        );
        rest = &rest[i + 1..];
    }
    if let Some(i) = rest.find('M') {
        minutes = Some(
            rest[..i]
                .parse()
                .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?,
        );
        rest = &rest[i + 1..];
    }
    if let Some(i) = rest.find('S') {
        seconds = Some(
            rest[..i]
                .parse()
                .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?,
        );
        rest = &rest[i + 1..];
    }
    if !rest.is_empty() {
        return Err(CalendarParseError::InvalidFormat(whole.to_string()));
    }

    match (hours, minutes, seconds) {
        (Some(hours), Some(minutes), Some(seconds)) => Ok(DurationTime::HMS { hours, minutes, seconds }),
        (Some(hours), Some(minutes), None) => Ok(DurationTime::HM { hours, minutes }),
        (None, Some(minutes), Some(seconds)) => Ok(DurationTime::MS { minutes, seconds }),
        (Some(hours), None, None) => Ok(DurationTime::H { hours }),
        (None, Some(minutes), None) => Ok(DurationTime::M { minutes }),
        (None, None, Some(seconds)) => Ok(DurationTime::S { seconds }),
        (Some(hours), None, Some(seconds)) => Err(CalendarParseError::InvalidDurationTime(
            InvalidDurationTimeError { hours: Some(hours), seconds: Some(seconds) },
        )),
        (None, None, None) => Err(CalendarParseError::InvalidFormat(whole.to_string())),
    }
}

fn parse_duration_kind(rest: &str, whole: &str) -> Result<DurationKind, CalendarParseError<String>> {
    if let Some(weeks_str) = rest.strip_suffix('W') {
        let weeks: usize = weeks_str
            .parse()
            .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?;
        return Ok(DurationKind::Week { weeks });
    }
    if let Some(time_str) = rest.strip_prefix('T') {
        return Ok(DurationKind::Time { time: parse_duration_time_part(time_str, whole)? });
    }
    let day_end = rest
        .find('D')
        .ok_or_else(|| CalendarParseError::InvalidFormat(whole.to_string()))?;
    let days: usize = rest[..day_end]
        .parse()
        .map_err(|_| CalendarParseError::InvalidFormat(whole.to_string()))?;
    let remainder = &rest[day_end + 1..];
    let time = if remainder.is_empty() {
        None
    } else {
        let time_str = remainder
            .strip_prefix('T')
            .ok_or_else(|| CalendarParseError::InvalidFormat(whole.to_string()))?;
        Some(parse_duration_time_part(time_str, whole)?)
    };
    Ok(DurationKind::Date { days, time })
}

fn parse_trigger_duration(s: &str) -> Result<Duration, CalendarParseError<String>> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (Some(Sign::Positive), &s[1..]),
        Some(b'-') => (Some(Sign::Negative), &s[1..]),
        _ => (None, s),
    };
    let rest = rest
        .strip_prefix('P')
        .ok_or_else(|| CalendarParseError::InvalidFormat(s.to_string()))?;
    Ok(Duration { sign, kind: parse_duration_kind(rest, s)? })
}

fn parse_trigger_value(s: &str) -> Result<TriggerValue, CalendarParseError<String>> {
    if s.starts_with('P') || s.starts_with('+') || s.starts_with('-') {
        Ok(TriggerValue::Duration(parse_trigger_duration(s)?))
    } else {
        Ok(TriggerValue::DateTime(parse_datetime_utc(s)?))
    }
}

fn parse_period(s: &str) -> Result<Period, CalendarParseError<String>> {
    let (start_str, rest) = s
        .split_once('/')
        .ok_or_else(|| CalendarParseError::InvalidFormat(s.to_string()))?;
    let start = parse_datetime(start_str)?;
    if rest.starts_with('P') || rest.starts_with('+') || rest.starts_with('-') {
        Ok(Period::Start { start, duration: parse_trigger_duration(rest)? })
    } else {
        Ok(Period::Explicit { start, end: parse_datetime(rest)? })
    }
}

fn parse_rdate_seq(s: &str) -> Result<RDateSeq, CalendarParseError<String>> {
    let tokens: Vec<&str> = s.split(',').collect();
    let first = tokens
        .first()
        .ok_or_else(|| CalendarParseError::InvalidFormat(s.to_string()))?;

    if first.contains('/') {
        Ok(RDateSeq::Period(tokens.iter().map(|t| parse_period(t)).collect::<Result<Vec<_>, _>>()?))
    } else if first.contains('T') {
        Ok(RDateSeq::DateTime(
            tokens.iter().map(|t| parse_datetime(t)).collect::<Result<Vec<_>, _>>()?,
        ))
    } else {
        Ok(RDateSeq::Date(tokens.iter().map(|t| parse_date(t)).collect::<Result<Vec<_>, _>>()?))
    }
}

fn parse_exdate_values(s: &str) -> Result<Vec<DateTimeOrDate>, CalendarParseError<String>> {
    s.split(',').map(parse_datetime_or_date).collect()
}

// ============================================================================
// Value decoders that delegate to `parser::primitive`
// ============================================================================

/// Runs a `parser::primitive` parser over the whole of `raw`, failing if it doesn't consume all
/// of it.
fn run<'a, O>(
    raw: &'a str,
    mut parser: impl FnMut(&mut &'a str) -> Result<O, CalendarParseError<String>>,
) -> Result<O, CalendarParseError<String>> {
    let mut input = raw;
    let value = parser(&mut input)?;
    if !input.is_empty() {
        return Err(CalendarParseError::InvalidFormat(raw.to_string()));
    }
    Ok(value)
}

fn text_value(s: &str) -> Result<String, CalendarParseError<String>> {
    Ok(run(s, p::text)?.into_string())
}

fn text_seq_value(s: &str) -> Result<Vec<String>, CalendarParseError<String>> {
    let seq: Vec1<crate::model::string::TextBuf> = run(s, p::text_seq)?;
    Ok(seq.into_iter().map(|t| t.into_string()).collect())
}

fn uid_value(s: &str) -> Result<Box<Uid>, CalendarParseError<String>> {
    run(s, p::uid)
}

fn uri_value(s: &str) -> Result<Box<Uri>, CalendarParseError<String>> {
    run(s, p::uri::<_, _, true>)
}

fn class_value_token(
    s: &str,
) -> Result<crate::model::primitive::Token<ClassValue, String>, CalendarParseError<String>> {
    Ok(run(s, p::class_value)?.map_unknown(|n| n.as_str().to_string()))
}

fn method_token(
    s: &str,
) -> Result<crate::model::primitive::Token<Method, String>, CalendarParseError<String>> {
    Ok(run(s, p::method)?.map_unknown(|n| n.as_str().to_string()))
}

fn gregorian_token(
    s: &str,
) -> Result<crate::model::primitive::Token<Gregorian, String>, CalendarParseError<String>> {
    if s.eq_ignore_ascii_case("GREGORIAN") {
        Ok(crate::model::primitive::Token::Known(Gregorian))
    } else {
        Ok(crate::model::primitive::Token::Unknown(s.to_string()))
    }
}

fn participant_type_token(
    s: &str,
) -> Result<crate::model::primitive::Token<ParticipantType, String>, CalendarParseError<String>> {
    Ok(run(s, p::participant_type)?.map_unknown(|n| n.as_str().to_string()))
}

fn resource_type_token(
    s: &str,
) -> Result<crate::model::primitive::Token<ResourceType, String>, CalendarParseError<String>> {
    Ok(run(s, p::resource_type)?.map_unknown(|n| n.as_str().to_string()))
}

fn attachment_value(raw: &str, params: &Params) -> Result<Attachment, CalendarParseError<String>> {
    if params.inline_encoding().is_some() {
        Ok(Attachment::Binary(run(raw, p::binary)?))
    } else {
        Ok(Attachment::Uri(uri_value(raw)?))
    }
}

fn styled_description_value(s: &str) -> Result<StyledDescriptionValue, CalendarParseError<String>> {
    if s.contains("://") {
        Ok(StyledDescriptionValue::Uri(uri_value(s)?))
    } else {
        Ok(StyledDescriptionValue::Text(text_value(s)?))
    }
}

fn validate_event_status(status: Status) -> Result<Status, CalendarParseError<String>> {
    match status {
        Status::Tentative | Status::Confirmed | Status::Cancelled => Ok(status),
        other => Err(CalendarParseError::InvalidEventStatus(other)),
    }
}

fn validate_todo_status(status: Status) -> Result<Status, CalendarParseError<String>> {
    match status {
        Status::NeedsAction | Status::Completed | Status::InProcess | Status::Cancelled => Ok(status),
        other => Err(CalendarParseError::InvalidTodoStatus(other)),
    }
}

fn validate_journal_status(status: Status) -> Result<Status, CalendarParseError<String>> {
    match status {
        Status::Draft | Status::Final | Status::Cancelled => Ok(status),
        other => Err(CalendarParseError::InvalidJournalStatus(other)),
    }
}

// ============================================================================
// Generic property lookup helpers
// ============================================================================

fn find_known<'a, 'b>(
    props: &'b [ContentLine<&'a str>],
    name: StaticProp,
) -> Option<&'b ContentLine<&'a str>> {
    props.iter().rev().find(|cl| cl.name == PropName::Known(name))
}

fn decode_prop<V>(
    cl: &ContentLine<&str>,
    f: impl FnOnce(&str, &Params) -> Result<V, CalendarParseError<String>>,
) -> Result<Prop<V, Params>, CalendarParseError<String>> {
    Ok(Prop { value: f(cl.raw_value, &cl.params)?, params: cl.params.clone() })
}

fn opt_prop<V>(
    props: &[ContentLine<&str>],
    name: StaticProp,
    mode: Mode,
    f: impl Fn(&str, &Params) -> Result<V, CalendarParseError<String>>,
) -> Result<Option<Prop<V, Params>>, CalendarParseError<String>> {
    let Some(cl) = find_known(props, name) else { return Ok(None) };
    match decode_prop(cl, &f) {
        Ok(p) => Ok(Some(p)),
        Err(_) if mode == Mode::Lenient => Ok(None),
        Err(e) => Err(e),
    }
}

fn req_prop<V>(
    props: &[ContentLine<&str>],
    name: StaticProp,
    component: ComponentKind<String>,
    f: impl Fn(&str, &Params) -> Result<V, CalendarParseError<String>>,
) -> Result<Prop<V, Params>, CalendarParseError<String>> {
    let cl = find_known(props, name).ok_or_else(|| CalendarParseError::MissingProp {
        prop: PropName::Known(name),
        component,
    })?;
    decode_prop(cl, f)
}

fn multi_prop<V>(
    props: &[ContentLine<&str>],
    name: StaticProp,
    mode: Mode,
    f: impl Fn(&str, &Params) -> Result<V, CalendarParseError<String>>,
) -> Result<Option<Vec<Prop<V, Params>>>, CalendarParseError<String>> {
    let mut out = Vec::new();
    for cl in props.iter().filter(|cl| cl.name == PropName::Known(name)) {
        match decode_prop(cl, &f) {
            Ok(p) => out.push(p),
            Err(_) if mode == Mode::Lenient => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(if out.is_empty() { None } else { Some(out) })
}

/// Like [`multi_prop`], but each content line's value expands into several [`Prop`] entries that
/// share a clone of that line's parameters. Used for `EXDATE`, whose field is a flat
/// `Vec<Prop<DateTimeOrDate, Params>>` rather than one `Prop` per content line.
fn multi_flat_prop<V>(
    props: &[ContentLine<&str>],
    name: StaticProp,
    mode: Mode,
    f: impl Fn(&str) -> Result<Vec<V>, CalendarParseError<String>>,
) -> Result<Option<Vec<Prop<V, Params>>>, CalendarParseError<String>> {
    let mut out = Vec::new();
    for cl in props.iter().filter(|cl| cl.name == PropName::Known(name)) {
        match f(cl.raw_value) {
            Ok(values) => out.extend(values.into_iter().map(|value| Prop { value, params: cl.params.clone() })),
            Err(_) if mode == Mode::Lenient => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(if out.is_empty() { None } else { Some(out) })
}

fn structured_data_values(
    props: &[ContentLine<&str>],
    mode: Mode,
) -> Result<Option<Vec<StructuredDataProp>>, CalendarParseError<String>> {
    let mut out = Vec::new();
    for cl in props.iter().filter(|cl| cl.name == PropName::Known(StaticProp::StructuredData)) {
        let decoded = (|| -> Result<StructuredDataProp, CalendarParseError<String>> {
            let params = &cl.params;
            if params.schema().is_none() && params.format_type().is_none() {
                Ok(StructuredDataProp::Uri(Prop {
                    value: uri_value(cl.raw_value)?,
                    params: params.clone(),
                }))
            } else if params.inline_encoding().is_some() {
                let sd_params = StructuredDataParams::try_from(params.clone())?;
                Ok(StructuredDataProp::Binary(Prop { value: run(cl.raw_value, p::binary)?, params: sd_params }))
            } else {
                let sd_params = StructuredDataParams::try_from(params.clone())?;
                Ok(StructuredDataProp::Text(Prop { value: text_value(cl.raw_value)?, params: sd_params }))
            }
        })();
        match decoded {
            Ok(v) => out.push(v),
            Err(_) if mode == Mode::Lenient => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(if out.is_empty() { None } else { Some(out) })
}

/// Groups every content line with an unrecognized name into `(name, occurrences)` pairs, for
/// storage in a component's `x_property` field.
fn collect_x_properties(
    props: &[ContentLine<&str>],
) -> Vec<(Box<CaselessStr>, Vec<Prop<Value<String>, Params>>)> {
    let mut groups: Vec<(String, Vec<Prop<Value<String>, Params>>)> = Vec::new();
    for cl in props {
        let PropName::Unknown(name) = &cl.name else { continue };
        let prop = Prop { value: Value::Text(cl.raw_value.to_string()), params: cl.params.clone() };
        let display = name.as_str().to_string();
        let key = display.to_ascii_uppercase();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some(group) => group.1.push(prop),
            None => groups.push((display, vec![prop])),
        }
    }
    groups
        .into_iter()
        .map(|(name, values)| (CaselessStr::from_box_str(name.into_boxed_str()), values))
        .collect()
}

fn component_name_text(name: &ComponentName) -> String {
    match name {
        ComponentName::VCalendar => "VCALENDAR".to_string(),
        ComponentName::VEvent => "VEVENT".to_string(),
        ComponentName::VTodo => "VTODO".to_string(),
        ComponentName::VJournal => "VJOURNAL".to_string(),
        ComponentName::VFreeBusy => "VFREEBUSY".to_string(),
        ComponentName::VTimeZone => "VTIMEZONE".to_string(),
        ComponentName::VAlarm => "VALARM".to_string(),
        ComponentName::Standard => "STANDARD".to_string(),
        ComponentName::Daylight => "DAYLIGHT".to_string(),
        ComponentName::Participant => "PARTICIPANT".to_string(),
        ComponentName::VLocation => "VLOCATION".to_string(),
        ComponentName::VResource => "VRESOURCE".to_string(),
        ComponentName::VAvailability => "VAVAILABILITY".to_string(),
        ComponentName::Available => "AVAILABLE".to_string(),
        ComponentName::Unknown(s) => s.clone(),
    }
}

fn reduce_other_component(raw: &RawComponent<&str>) -> OtherComponent {
    OtherComponent {
        name: component_name_text(&raw.name).into_boxed_str(),
        subcomponents: raw.children.iter().map(reduce_other_component).collect(),
    }
}

// ============================================================================
// Calendar
// ============================================================================

fn reduce_calendar(raw: &RawComponent<&str>, mode: Mode) -> Result<Calendar, CalendarParseError<String>> {
    let props = &raw.properties;

    let prod_id = req_prop(props, StaticProp::ProdId, ComponentKind::Calendar, |s, _| text_value(s))?;
    let version = req_prop(props, StaticProp::Version, ComponentKind::Calendar, |s, _| run(s, p::version))?;

    let mut components = Vec::with_capacity(raw.children.len());
    for child in &raw.children {
        match reduce_calendar_component(child, mode) {
            Ok(c) => components.push(c),
            Err(_) if mode == Mode::Lenient => continue,
            Err(e) => return Err(e),
        }
    }

    let mut calendar = Calendar::new(prod_id, version, components);

    if let Some(p) = opt_prop(props, StaticProp::CalScale, mode, |s, _| gregorian_token(s))? {
        calendar.set_cal_scale(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Method, mode, |s, _| method_token(s))? {
        calendar.set_method(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Uid, mode, |s, _| uid_value(s))? {
        calendar.set_uid(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::LastModified, mode, |s, _| parse_datetime_utc(s))? {
        calendar.set_last_modified(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Url, mode, |s, _| uri_value(s))? {
        calendar.set_url(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::RefreshInterval, mode, |s, _| parse_signed_duration(s))? {
        calendar.set_refresh_interval(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Source, mode, |s, _| uri_value(s))? {
        calendar.set_source(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Color, mode, |s, _| run(s, p::color))? {
        calendar.set_color(p);
    }
    if let Some(v) = multi_prop(props, StaticProp::Name, mode, |s, _| text_value(s))? {
        calendar.set_name(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        calendar.set_description(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Categories, mode, |s, _| text_seq_value(s))? {
        calendar.set_categories(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Image, mode, attachment_value)? {
        calendar.set_image(v);
    }

    for (key, values) in collect_x_properties(props) {
        calendar.insert_x_property(key, values);
    }

    Ok(calendar)
}

fn reduce_calendar_component(
    raw: &RawComponent<&str>,
    mode: Mode,
) -> Result<CalendarComponent, CalendarParseError<String>> {
    match raw.name {
        ComponentName::VEvent => Ok(CalendarComponent::Event(reduce_event(raw, mode)?)),
        ComponentName::VTodo => Ok(CalendarComponent::Todo(reduce_todo(raw, mode)?)),
        ComponentName::VJournal => Ok(CalendarComponent::Journal(reduce_journal(raw, mode)?)),
        ComponentName::VFreeBusy => Ok(CalendarComponent::FreeBusy(reduce_freebusy(raw, mode)?)),
        ComponentName::VTimeZone => Ok(CalendarComponent::TimeZone(reduce_timezone(raw, mode)?)),
        _ if mode == Mode::Strict => Err(CalendarParseError::UnsupportedComponent(raw.name.clone())),
        _ => Ok(CalendarComponent::Other(reduce_other_component(raw))),
    }
}

// ============================================================================
// Event / Todo / Journal subcomponent extraction
// ============================================================================

fn reduce_alarms(raw: &RawComponent<&str>, mode: Mode) -> Result<Vec<Alarm>, CalendarParseError<String>> {
    let mut out = Vec::new();
    for child in &raw.children {
        match child.name {
            ComponentName::VAlarm => out.push(reduce_alarm(child, mode)?),
            _ if mode == Mode::Strict => return Err(CalendarParseError::UnsupportedComponent(child.name.clone())),
            _ => continue,
        }
    }
    Ok(out)
}

fn reduce_participants(raw: &RawComponent<&str>, mode: Mode) -> Result<Vec<Participant>, CalendarParseError<String>> {
    let mut out = Vec::new();
    for child in &raw.children {
        if child.name == ComponentName::Participant {
            out.push(reduce_participant(child, mode)?);
        } else if mode == Mode::Strict {
            return Err(CalendarParseError::UnsupportedComponent(child.name.clone()));
        }
    }
    Ok(out)
}

fn reduce_locations(raw: &RawComponent<&str>, mode: Mode) -> Result<Vec<LocationComponent>, CalendarParseError<String>> {
    let mut out = Vec::new();
    for child in &raw.children {
        if child.name == ComponentName::VLocation {
            out.push(reduce_location(child, mode)?);
        } else if mode == Mode::Strict {
            return Err(CalendarParseError::UnsupportedComponent(child.name.clone()));
        }
    }
    Ok(out)
}

fn reduce_resource_components(
    raw: &RawComponent<&str>,
    mode: Mode,
) -> Result<Vec<ResourceComponent>, CalendarParseError<String>> {
    let mut out = Vec::new();
    for child in &raw.children {
        if child.name == ComponentName::VResource {
            out.push(reduce_resource(child, mode)?);
        } else if mode == Mode::Strict {
            return Err(CalendarParseError::UnsupportedComponent(child.name.clone()));
        }
    }
    Ok(out)
}

// ============================================================================
// Event
// ============================================================================

fn reduce_event(raw: &RawComponent<&str>, mode: Mode) -> Result<Event, CalendarParseError<String>> {
    let props = &raw.properties;

    let dtstamp = req_prop(props, StaticProp::DtStamp, ComponentKind::Event, |s, _| parse_datetime_utc(s))?;
    let uid = req_prop(props, StaticProp::Uid, ComponentKind::Event, |s, _| uid_value(s))?;

    let alarms = reduce_alarms(raw, mode)?;
    let participants = reduce_participants(raw, mode)?;
    let locations = reduce_locations(raw, mode)?;
    let resource_components = reduce_resource_components(raw, mode)?;

    let mut event = Event::new(dtstamp, uid, alarms, participants, locations, resource_components);

    if let Some(p) = opt_prop(props, StaticProp::DtStart, mode, |s, _| parse_datetime_or_date(s))? {
        event.set_dtstart(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Class, mode, |s, _| class_value_token(s))? {
        event.set_class(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Created, mode, |s, _| parse_datetime_utc(s))? {
        event.set_created(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        event.set_description(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Geo, mode, |s, _| run(s, p::geo))? {
        event.set_geo(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::LastModified, mode, |s, _| parse_datetime_utc(s))? {
        event.set_last_modified(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Location, mode, |s, _| text_value(s))? {
        event.set_location(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Organizer, mode, |s, _| uri_value(s))? {
        event.set_organizer(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Priority, mode, |s, _| run(s, p::priority))? {
        event.set_priority(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Sequence, mode, |s, _| run(s, p::integer))? {
        event.set_sequence(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Status, mode, |s, _| {
        validate_event_status(run(s, p::status)?)
    })? {
        event.set_status(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Summary, mode, |s, _| text_value(s))? {
        event.set_summary(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Transp, mode, |s, _| run(s, p::time_transparency))? {
        event.set_transp(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Url, mode, |s, _| uri_value(s))? {
        event.set_url(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::RecurId, mode, |s, _| parse_datetime_or_date(s))? {
        event.set_recurrence_id(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::DtEnd, mode, |s, _| parse_datetime_or_date(s))? {
        event.set_dtend(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Duration, mode, |s, _| parse_signed_duration(s))? {
        event.set_duration(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Color, mode, |s, _| run(s, p::color))? {
        event.set_color(p);
    }

    if let Some(v) = multi_prop(props, StaticProp::Attach, mode, attachment_value)? {
        event.set_attach(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Attendee, mode, |s, _| uri_value(s))? {
        event.set_attendee(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Categories, mode, |s, _| text_seq_value(s))? {
        event.set_categories(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Comment, mode, |s, _| text_value(s))? {
        event.set_comment(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Contact, mode, |s, _| text_value(s))? {
        event.set_contact(v);
    }
    if let Some(v) = multi_flat_prop(props, StaticProp::ExDate, mode, parse_exdate_values)? {
        event.set_exdate(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RequestStatus, mode, |s, _| run(s, p::request_status))? {
        event.set_request_status(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RelatedTo, mode, |s, _| uid_value(s))? {
        event.set_related_to(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Resources, mode, |s, _| text_seq_value(s))? {
        event.set_resources(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RDate, mode, |s, _| parse_rdate_seq(s))? {
        event.set_rdate(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RRule, mode, |s, _| run(s, crate::parser::rrule::recur))? {
        event.set_rrule(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Image, mode, attachment_value)? {
        event.set_image(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Conference, mode, |s, _| uri_value(s))? {
        event.set_conference(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::StyledDescription, mode, |s, _| styled_description_value(s))? {
        event.set_styled_description(v);
    }
    if let Some(v) = structured_data_values(props, mode)? {
        event.set_structured_data(v);
    }

    for (key, values) in collect_x_properties(props) {
        event.insert_x_property(key, values);
    }

    Ok(event)
}

// ============================================================================
// Todo
// ============================================================================

fn reduce_todo(raw: &RawComponent<&str>, mode: Mode) -> Result<Todo, CalendarParseError<String>> {
    let props = &raw.properties;

    let dtstamp = req_prop(props, StaticProp::DtStamp, ComponentKind::Todo, |s, _| parse_datetime_utc(s))?;
    let uid = req_prop(props, StaticProp::Uid, ComponentKind::Todo, |s, _| uid_value(s))?;

    let alarms = reduce_alarms(raw, mode)?;
    let participants = reduce_participants(raw, mode)?;
    let locations = reduce_locations(raw, mode)?;
    let resource_components = reduce_resource_components(raw, mode)?;

    let mut todo = Todo::new(dtstamp, uid, alarms, participants, locations, resource_components);

    if let Some(p) = opt_prop(props, StaticProp::DtStart, mode, |s, _| parse_datetime_or_date(s))? {
        todo.set_dtstart(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Class, mode, |s, _| class_value_token(s))? {
        todo.set_class(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::DtCompleted, mode, |s, _| parse_datetime_utc(s))? {
        todo.set_completed(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Created, mode, |s, _| parse_datetime_utc(s))? {
        todo.set_created(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        todo.set_description(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Geo, mode, |s, _| run(s, p::geo))? {
        todo.set_geo(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::LastModified, mode, |s, _| parse_datetime_utc(s))? {
        todo.set_last_modified(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Location, mode, |s, _| text_value(s))? {
        todo.set_location(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Organizer, mode, |s, _| uri_value(s))? {
        todo.set_organizer(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::PercentComplete, mode, |s, _| run(s, p::completion_percentage))? {
        todo.set_percent_complete(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Priority, mode, |s, _| run(s, p::priority))? {
        todo.set_priority(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::RecurId, mode, |s, _| parse_datetime_or_date(s))? {
        todo.set_recurrence_id(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Sequence, mode, |s, _| run(s, p::integer))? {
        todo.set_sequence(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Status, mode, |s, _| {
        validate_todo_status(run(s, p::status)?)
    })? {
        todo.set_status(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Summary, mode, |s, _| text_value(s))? {
        todo.set_summary(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Url, mode, |s, _| uri_value(s))? {
        todo.set_url(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::DtDue, mode, |s, _| parse_datetime_or_date(s))? {
        todo.set_due(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Duration, mode, |s, _| parse_signed_duration(s))? {
        todo.set_duration(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Color, mode, |s, _| run(s, p::color))? {
        todo.set_color(p);
    }

    if let Some(v) = multi_prop(props, StaticProp::Attach, mode, attachment_value)? {
        todo.set_attach(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Attendee, mode, |s, _| uri_value(s))? {
        todo.set_attendee(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Categories, mode, |s, _| text_seq_value(s))? {
        todo.set_categories(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Comment, mode, |s, _| text_value(s))? {
        todo.set_comment(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Contact, mode, |s, _| text_value(s))? {
        todo.set_contact(v);
    }
    if let Some(v) = multi_flat_prop(props, StaticProp::ExDate, mode, parse_exdate_values)? {
        todo.set_exdate(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RequestStatus, mode, |s, _| run(s, p::request_status))? {
        todo.set_request_status(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RelatedTo, mode, |s, _| uid_value(s))? {
        todo.set_related_to(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Resources, mode, |s, _| text_seq_value(s))? {
        todo.set_resources(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RDate, mode, |s, _| parse_rdate_seq(s))? {
        todo.set_rdate(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RRule, mode, |s, _| run(s, crate::parser::rrule::recur))? {
        todo.set_rrule(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Image, mode, attachment_value)? {
        todo.set_image(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Conference, mode, |s, _| uri_value(s))? {
        todo.set_conference(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::StyledDescription, mode, |s, _| styled_description_value(s))? {
        todo.set_styled_description(v);
    }
    if let Some(v) = structured_data_values(props, mode)? {
        todo.set_structured_data(v);
    }

    for (key, values) in collect_x_properties(props) {
        todo.insert_x_property(key, values);
    }

    Ok(todo)
}

// ============================================================================
// Journal
// ============================================================================

fn reduce_journal(raw: &RawComponent<&str>, mode: Mode) -> Result<Journal, CalendarParseError<String>> {
    let props = &raw.properties;

    let dtstamp = req_prop(props, StaticProp::DtStamp, ComponentKind::Journal, |s, _| parse_datetime_utc(s))?;
    let uid = req_prop(props, StaticProp::Uid, ComponentKind::Journal, |s, _| uid_value(s))?;

    let participants = reduce_participants(raw, mode)?;
    let locations = reduce_locations(raw, mode)?;
    let resource_components = reduce_resource_components(raw, mode)?;

    let mut journal = Journal::new(dtstamp, uid, participants, locations, resource_components);

    if let Some(p) = opt_prop(props, StaticProp::DtStart, mode, |s, _| parse_datetime_or_date(s))? {
        journal.set_dtstart(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Class, mode, |s, _| class_value_token(s))? {
        journal.set_class(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Created, mode, |s, _| parse_datetime_utc(s))? {
        journal.set_created(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::LastModified, mode, |s, _| parse_datetime_utc(s))? {
        journal.set_last_modified(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Organizer, mode, |s, _| uri_value(s))? {
        journal.set_organizer(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::RecurId, mode, |s, _| parse_datetime_or_date(s))? {
        journal.set_recurrence_id(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Sequence, mode, |s, _| run(s, p::integer))? {
        journal.set_sequence(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Status, mode, |s, _| {
        validate_journal_status(run(s, p::status)?)
    })? {
        journal.set_status(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Summary, mode, |s, _| text_value(s))? {
        journal.set_summary(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Url, mode, |s, _| uri_value(s))? {
        journal.set_url(p);
    }

    if let Some(v) = multi_prop(props, StaticProp::Attach, mode, attachment_value)? {
        journal.set_attach(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Attendee, mode, |s, _| uri_value(s))? {
        journal.set_attendee(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Categories, mode, |s, _| text_seq_value(s))? {
        journal.set_categories(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Comment, mode, |s, _| text_value(s))? {
        journal.set_comment(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Contact, mode, |s, _| text_value(s))? {
        journal.set_contact(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        journal.set_description(v);
    }
    if let Some(v) = multi_flat_prop(props, StaticProp::ExDate, mode, parse_exdate_values)? {
        journal.set_exdate(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RelatedTo, mode, |s, _| uid_value(s))? {
        journal.set_related_to(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RDate, mode, |s, _| parse_rdate_seq(s))? {
        journal.set_rdate(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RRule, mode, |s, _| run(s, crate::parser::rrule::recur))? {
        journal.set_rrule(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RequestStatus, mode, |s, _| run(s, p::request_status))? {
        journal.set_request_status(v);
    }

    for (key, values) in collect_x_properties(props) {
        journal.insert_x_property(key, values);
    }

    Ok(journal)
}

// ============================================================================
// FreeBusy
// ============================================================================

fn reduce_freebusy(raw: &RawComponent<&str>, mode: Mode) -> Result<FreeBusy, CalendarParseError<String>> {
    let props = &raw.properties;

    let dtstamp = req_prop(props, StaticProp::DtStamp, ComponentKind::FreeBusy, |s, _| parse_datetime_utc(s))?;
    let uid = req_prop(props, StaticProp::Uid, ComponentKind::FreeBusy, |s, _| uid_value(s))?;

    let participants = reduce_participants(raw, mode)?;
    let locations = reduce_locations(raw, mode)?;
    let resource_components = reduce_resource_components(raw, mode)?;

    let mut freebusy = FreeBusy::new(dtstamp, uid, participants, locations, resource_components);

    if let Some(p) = opt_prop(props, StaticProp::Contact, mode, |s, _| text_value(s))? {
        freebusy.set_contact(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::DtStart, mode, |s, _| parse_datetime_or_date(s))? {
        freebusy.set_dtstart(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::DtEnd, mode, |s, _| parse_datetime_or_date(s))? {
        freebusy.set_dtend(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Organizer, mode, |s, _| uri_value(s))? {
        freebusy.set_organizer(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Url, mode, |s, _| uri_value(s))? {
        freebusy.set_url(p);
    }

    if let Some(v) = multi_prop(props, StaticProp::Attendee, mode, |s, _| uri_value(s))? {
        freebusy.set_attendee(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Comment, mode, |s, _| text_value(s))? {
        freebusy.set_comment(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::FreeBusy, mode, |s, _| {
        s.split(',').map(parse_period).collect::<Result<Vec<_>, _>>()
    })? {
        freebusy.set_freebusy(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RequestStatus, mode, |s, _| run(s, p::request_status))? {
        freebusy.set_request_status(v);
    }

    for (key, values) in collect_x_properties(props) {
        freebusy.insert_x_property(key, values);
    }

    Ok(freebusy)
}

// ============================================================================
// TimeZone / TzRule
// ============================================================================

fn reduce_timezone(raw: &RawComponent<&str>, mode: Mode) -> Result<TimeZone, CalendarParseError<String>> {
    let props = &raw.properties;

    let tz_id = req_prop(props, StaticProp::TzId, ComponentKind::TimeZone, |s, _| run(s, p::tz_id))?;

    let mut rules = Vec::new();
    for child in &raw.children {
        match child.name {
            ComponentName::Standard | ComponentName::Daylight => rules.push(reduce_tzrule(child, mode)?),
            _ if mode == Mode::Strict => return Err(CalendarParseError::UnsupportedComponent(child.name.clone())),
            _ => continue,
        }
    }

    let mut timezone = TimeZone::new(tz_id, rules);

    if let Some(p) = opt_prop(props, StaticProp::LastModified, mode, |s, _| parse_datetime_utc(s))? {
        timezone.set_last_modified(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::TzUrl, mode, |s, _| uri_value(s))? {
        timezone.set_tz_url(p);
    }

    for (key, values) in collect_x_properties(props) {
        timezone.insert_x_property(key, values);
    }

    Ok(timezone)
}

fn reduce_tzrule(raw: &RawComponent<&str>, mode: Mode) -> Result<TzRule, CalendarParseError<String>> {
    let props = &raw.properties;
    let kind = match raw.name {
        ComponentName::Standard => TzRuleKind::Standard,
        ComponentName::Daylight => TzRuleKind::Daylight,
        _ => unreachable!("reduce_tzrule is only called for STANDARD/DAYLIGHT children"),
    };

    let dtstart = req_prop(props, StaticProp::DtStart, ComponentKind::from(kind), |s, _| {
        parse_datetime_or_date(s)
    })?;
    let tz_offset_to = req_prop(props, StaticProp::TzOffsetTo, ComponentKind::from(kind), |s, _| {
        parse_utc_offset(s)
    })?;
    let tz_offset_from = req_prop(props, StaticProp::TzOffsetFrom, ComponentKind::from(kind), |s, _| {
        parse_utc_offset(s)
    })?;

    let mut rule = TzRule::new(kind, dtstart, tz_offset_to, tz_offset_from);

    if let Some(v) = multi_prop(props, StaticProp::Comment, mode, |s, _| text_value(s))? {
        rule.set_comment(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RDate, mode, |s, _| parse_rdate_seq(s))? {
        rule.set_rdate(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RRule, mode, |s, _| run(s, crate::parser::rrule::recur))? {
        rule.set_rrule(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::TzName, mode, |s, _| text_value(s))? {
        rule.set_tz_name(v);
    }

    for (key, values) in collect_x_properties(props) {
        rule.insert_x_property(key, values);
    }

    Ok(rule)
}

// ============================================================================
// Alarm
// ============================================================================

fn reduce_alarm(raw: &RawComponent<&str>, mode: Mode) -> Result<Alarm, CalendarParseError<String>> {
    let props = &raw.properties;

    let action_cl = find_known(props, StaticProp::Action).ok_or_else(|| CalendarParseError::MissingProp {
        prop: PropName::Known(StaticProp::Action),
        component: ComponentKind::Alarm,
    })?;
    let action = run(action_cl.raw_value, p::alarm_action)?;

    match action {
        crate::model::primitive::Token::Known(AlarmAction::Audio) => {
            Ok(Alarm::Audio(reduce_audio_alarm(props, mode)?))
        }
        crate::model::primitive::Token::Known(AlarmAction::Display) => {
            Ok(Alarm::Display(reduce_display_alarm(props, mode)?))
        }
        crate::model::primitive::Token::Known(AlarmAction::Email) => {
            Ok(Alarm::Email(reduce_email_alarm(props, mode)?))
        }
        crate::model::primitive::Token::Known(AlarmAction::Other(name)) => {
            Ok(Alarm::Other(reduce_other_alarm(props, mode, name)?))
        }
        crate::model::primitive::Token::Unknown(name) => {
            Ok(Alarm::Other(reduce_other_alarm(props, mode, name.as_str().to_string())?))
        }
    }
}

/// RFC 5545 §3.6.6 requires `AUDIO`'s `ATTACH` to occur at most once (unlike every other alarm
/// property that allows repetition elsewhere in the model), so a second occurrence is a distinct
/// error rather than last-occurrence-wins.
fn audio_alarm_attach(
    props: &[ContentLine<&str>],
    mode: Mode,
) -> Result<Option<Prop<Attachment, Params>>, CalendarParseError<String>> {
    let count = props.iter().filter(|cl| cl.name == PropName::Known(StaticProp::Attach)).count();
    if count > 1 && mode == Mode::Strict {
        return Err(CalendarParseError::TooManyAttachmentsOnAudioAlarm);
    }
    opt_prop(props, StaticProp::Attach, mode, attachment_value)
}

/// RFC 5545 §3.6.6: `DURATION` and `REPEAT` must both be present or both be absent on a `VALARM`.
fn check_duration_repeat_pairing(
    has_duration: bool,
    has_repeat: bool,
    mode: Mode,
) -> Result<(), CalendarParseError<String>> {
    if mode == Mode::Lenient {
        return Ok(());
    }
    match (has_duration, has_repeat) {
        (true, false) => Err(CalendarParseError::DurationWithoutRepeat),
        (false, true) => Err(CalendarParseError::RepeatWithoutDuration),
        _ => Ok(()),
    }
}

fn reduce_audio_alarm(props: &[ContentLine<&str>], mode: Mode) -> Result<AudioAlarm, CalendarParseError<String>> {
    let trigger = req_prop(props, StaticProp::Trigger, ComponentKind::AudioAlarm, |s, _| parse_trigger_value(s))?;
    let mut alarm = AudioAlarm::new(trigger);

    if let Some(p) = audio_alarm_attach(props, mode)? {
        alarm.set_attach(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Uid, mode, |s, _| uid_value(s))? {
        alarm.set_uid(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Duration, mode, |s, _| parse_signed_duration(s))? {
        alarm.set_duration(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Repeat, mode, |s, _| run(s, p::integer))? {
        alarm.set_repeat(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Acknowledged, mode, |s, _| parse_datetime_utc(s))? {
        alarm.set_acknowledged(p);
    }
    for (key, values) in collect_x_properties(props) {
        alarm.insert_x_property(key, values);
    }
    check_duration_repeat_pairing(alarm.duration.is_some(), alarm.repeat.is_some(), mode)?;
    Ok(alarm)
}

fn reduce_display_alarm(props: &[ContentLine<&str>], mode: Mode) -> Result<DisplayAlarm, CalendarParseError<String>> {
    let trigger = req_prop(props, StaticProp::Trigger, ComponentKind::DisplayAlarm, |s, _| parse_trigger_value(s))?;
    let description = req_prop(props, StaticProp::Description, ComponentKind::DisplayAlarm, |s, _| text_value(s))?;
    let mut alarm = DisplayAlarm::new(trigger, description);

    if let Some(p) = opt_prop(props, StaticProp::Uid, mode, |s, _| uid_value(s))? {
        alarm.set_uid(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Duration, mode, |s, _| parse_signed_duration(s))? {
        alarm.set_duration(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Repeat, mode, |s, _| run(s, p::integer))? {
        alarm.set_repeat(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Acknowledged, mode, |s, _| parse_datetime_utc(s))? {
        alarm.set_acknowledged(p);
    }
    for (key, values) in collect_x_properties(props) {
        alarm.insert_x_property(key, values);
    }
    check_duration_repeat_pairing(alarm.duration.is_some(), alarm.repeat.is_some(), mode)?;
    Ok(alarm)
}

fn reduce_email_alarm(props: &[ContentLine<&str>], mode: Mode) -> Result<EmailAlarm, CalendarParseError<String>> {
    let trigger = req_prop(props, StaticProp::Trigger, ComponentKind::EmailAlarm, |s, _| parse_trigger_value(s))?;
    let description = req_prop(props, StaticProp::Description, ComponentKind::EmailAlarm, |s, _| text_value(s))?;
    let summary = req_prop(props, StaticProp::Summary, ComponentKind::EmailAlarm, |s, _| text_value(s))?;
    let mut alarm = EmailAlarm::new(trigger, description, summary);

    if let Some(p) = opt_prop(props, StaticProp::Uid, mode, |s, _| uid_value(s))? {
        alarm.set_uid(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Duration, mode, |s, _| parse_signed_duration(s))? {
        alarm.set_duration(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Repeat, mode, |s, _| run(s, p::integer))? {
        alarm.set_repeat(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Acknowledged, mode, |s, _| parse_datetime_utc(s))? {
        alarm.set_acknowledged(p);
    }
    if let Some(v) = multi_prop(props, StaticProp::Attendee, mode, |s, _| uri_value(s))? {
        alarm.set_attendee(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Attach, mode, attachment_value)? {
        alarm.set_attach(v);
    }
    for (key, values) in collect_x_properties(props) {
        alarm.insert_x_property(key, values);
    }
    check_duration_repeat_pairing(alarm.duration.is_some(), alarm.repeat.is_some(), mode)?;
    Ok(alarm)
}

fn reduce_other_alarm(
    props: &[ContentLine<&str>],
    mode: Mode,
    action: String,
) -> Result<OtherAlarm, CalendarParseError<String>> {
    let trigger = req_prop(props, StaticProp::Trigger, ComponentKind::Alarm, |s, _| parse_trigger_value(s))?;
    let action_prop = Prop::from_value(action);
    let mut alarm = OtherAlarm::new(trigger, action_prop);

    if let Some(p) = opt_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        alarm.set_description(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Summary, mode, |s, _| text_value(s))? {
        alarm.set_summary(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Uid, mode, |s, _| uid_value(s))? {
        alarm.set_uid(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Duration, mode, |s, _| parse_signed_duration(s))? {
        alarm.set_duration(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Repeat, mode, |s, _| run(s, p::integer))? {
        alarm.set_repeat(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Acknowledged, mode, |s, _| parse_datetime_utc(s))? {
        alarm.set_acknowledged(p);
    }
    if let Some(v) = multi_prop(props, StaticProp::Attendee, mode, |s, _| uri_value(s))? {
        alarm.set_attendee(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Attach, mode, attachment_value)? {
        alarm.set_attach(v);
    }
    for (key, values) in collect_x_properties(props) {
        alarm.insert_x_property(key, values);
    }
    check_duration_repeat_pairing(alarm.duration.is_some(), alarm.repeat.is_some(), mode)?;
    Ok(alarm)
}

// ============================================================================
// RFC 9073 components
// ============================================================================

fn reduce_location(raw: &RawComponent<&str>, mode: Mode) -> Result<LocationComponent, CalendarParseError<String>> {
    let props = &raw.properties;
    let uid = req_prop(props, StaticProp::Uid, ComponentKind::Unknown, |s, _| uid_value(s))?;
    let mut location = LocationComponent::new(uid);

    if let Some(p) = opt_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        location.set_description(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Geo, mode, |s, _| run(s, p::geo))? {
        location.set_geo(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Name, mode, |s, _| text_value(s))? {
        location.set_name(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::LocationType, mode, |s, _| text_value(s))? {
        location.set_location_type(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Url, mode, |s, _| uri_value(s))? {
        location.set_url(p);
    }
    if let Some(v) = structured_data_values(props, mode)? {
        location.set_structured_data(v);
    }
    for (key, values) in collect_x_properties(props) {
        location.insert_x_property(key, values);
    }
    Ok(location)
}

fn reduce_resource(raw: &RawComponent<&str>, mode: Mode) -> Result<ResourceComponent, CalendarParseError<String>> {
    let props = &raw.properties;
    let uid = req_prop(props, StaticProp::Uid, ComponentKind::Unknown, |s, _| uid_value(s))?;
    let mut resource = ResourceComponent::new(uid);

    if let Some(p) = opt_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        resource.set_description(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Geo, mode, |s, _| run(s, p::geo))? {
        resource.set_geo(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Name, mode, |s, _| text_value(s))? {
        resource.set_name(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::ResourceType, mode, |s, _| resource_type_token(s))? {
        resource.set_resource_type(p);
    }
    if let Some(v) = structured_data_values(props, mode)? {
        resource.set_structured_data(v);
    }
    for (key, values) in collect_x_properties(props) {
        resource.insert_x_property(key, values);
    }
    Ok(resource)
}

fn reduce_participant(raw: &RawComponent<&str>, mode: Mode) -> Result<Participant, CalendarParseError<String>> {
    let props = &raw.properties;
    let uid = req_prop(props, StaticProp::Uid, ComponentKind::Unknown, |s, _| uid_value(s))?;
    let participant_type =
        req_prop(props, StaticProp::ParticipantType, ComponentKind::Unknown, |s, _| participant_type_token(s))?;

    let locations = reduce_locations(raw, mode)?;
    let resource_components = reduce_resource_components(raw, mode)?;

    let mut participant = Participant::new(uid, participant_type, locations, resource_components);

    if let Some(p) = opt_prop(props, StaticProp::CalendarAddress, mode, |s, _| uri_value(s))? {
        participant.set_calendar_address(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Created, mode, |s, _| parse_datetime_utc(s))? {
        participant.set_created(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Description, mode, |s, _| text_value(s))? {
        participant.set_description(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::DtStamp, mode, |s, _| parse_datetime_utc(s))? {
        participant.set_dtstamp(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Geo, mode, |s, _| run(s, p::geo))? {
        participant.set_geo(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::LastModified, mode, |s, _| parse_datetime_utc(s))? {
        participant.set_last_modified(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Priority, mode, |s, _| run(s, p::priority))? {
        participant.set_priority(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Sequence, mode, |s, _| run(s, p::integer))? {
        participant.set_sequence(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Status, mode, |s, _| run(s, p::status))? {
        participant.set_status(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Summary, mode, |s, _| text_value(s))? {
        participant.set_summary(p);
    }
    if let Some(p) = opt_prop(props, StaticProp::Url, mode, |s, _| uri_value(s))? {
        participant.set_url(p);
    }

    if let Some(v) = multi_prop(props, StaticProp::Attach, mode, attachment_value)? {
        participant.set_attach(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Categories, mode, |s, _| text_seq_value(s))? {
        participant.set_categories(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Comment, mode, |s, _| text_value(s))? {
        participant.set_comment(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Contact, mode, |s, _| text_value(s))? {
        participant.set_contact(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Location, mode, |s, _| text_value(s))? {
        participant.set_location_prop(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RequestStatus, mode, |s, _| run(s, p::request_status))? {
        participant.set_request_status(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::RelatedTo, mode, |s, _| uid_value(s))? {
        participant.set_related_to(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::Resources, mode, |s, _| text_seq_value(s))? {
        participant.set_resources(v);
    }
    if let Some(v) = multi_prop(props, StaticProp::StyledDescription, mode, |s, _| styled_description_value(s))? {
        participant.set_styled_description(v);
    }
    if let Some(v) = structured_data_values(props, mode)? {
        participant.set_structured_data(v);
    }

    for (key, values) in collect_x_properties(props) {
        participant.insert_x_property(key, values);
    }

    Ok(participant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crlf(lines: &[&str]) -> String {
        lines.iter().map(|l| format!("{l}\r\n")).collect()
    }

    #[test]
    fn parses_minimal_event() {
        let text = crlf(&[
            "BEGIN:VCALENDAR",
            "PRODID:-//test//test//EN",
            "VERSION:2.0",
            "BEGIN:VEVENT",
            "UID:event-1@example.com",
            "DTSTAMP:20260101T120000Z",
            "SUMMARY:Launch",
            "END:VEVENT",
            "END:VCALENDAR",
        ]);

        let calendar = parse(&text, Mode::Strict).unwrap();
        assert_eq!(calendar.prod_id.value, "-//test//test//EN");
        assert_eq!(calendar.components.len(), 1);
        match &calendar.components[0] {
            CalendarComponent::Event(event) => {
                assert_eq!(event.uid.value.as_str(), "event-1@example.com");
                assert_eq!(event.summary.as_ref().unwrap().value, "Launch");
            }
            other => panic!("expected an event, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_more_than_one_calendar() {
        let text = crlf(&[
            "BEGIN:VCALENDAR",
            "PRODID:-//test//test//EN",
            "VERSION:2.0",
            "END:VCALENDAR",
            "BEGIN:VCALENDAR",
            "PRODID:-//test//test//EN",
            "VERSION:2.0",
            "END:VCALENDAR",
        ]);

        assert!(matches!(parse(&text, Mode::Strict), Err(CalendarParseError::InvalidFormat(_))));
        assert_eq!(parse_multiple(&text, Mode::Strict).unwrap().len(), 2);
    }

    #[test]
    fn strict_mode_rejects_stray_property() {
        let text = crlf(&[
            "X-STRAY:oops",
            "BEGIN:VCALENDAR",
            "PRODID:-//test//test//EN",
            "VERSION:2.0",
            "END:VCALENDAR",
        ]);

        assert!(matches!(parse(&text, Mode::Strict), Err(CalendarParseError::StrayProperty)));
    }

    #[test]
    fn lenient_mode_skips_stray_property() {
        let text = crlf(&[
            "X-STRAY:oops",
            "BEGIN:VCALENDAR",
            "PRODID:-//test//test//EN",
            "VERSION:2.0",
            "END:VCALENDAR",
        ]);

        assert!(parse(&text, Mode::Lenient).is_ok());
    }

    #[test]
    fn missing_required_property_errors() {
        let text = crlf(&[
            "BEGIN:VCALENDAR",
            "PRODID:-//test//test//EN",
            "VERSION:2.0",
            "BEGIN:VEVENT",
            "UID:event-1@example.com",
            "END:VEVENT",
            "END:VCALENDAR",
        ]);

        assert!(matches!(
            parse(&text, Mode::Strict),
            Err(CalendarParseError::MissingProp { prop: PropName::Known(StaticProp::DtStamp), .. })
        ));
    }

    #[test]
    fn leading_bom_is_stripped() {
        let text = format!(
            "\u{feff}{}",
            crlf(&[
                "BEGIN:VCALENDAR",
                "PRODID:-//test//test//EN",
                "VERSION:2.0",
                "END:VCALENDAR",
            ])
        );

        assert!(parse(&text, Mode::Strict).is_ok());
    }

    #[test]
    fn unsupported_top_level_component_errors_in_strict_mode() {
        let text = crlf(&["BEGIN:VJOURNAL", "END:VJOURNAL"]);
        assert!(matches!(
            parse_multiple(&text, Mode::Strict),
            Err(CalendarParseError::UnsupportedComponent(ComponentName::VJournal))
        ));
    }
}
