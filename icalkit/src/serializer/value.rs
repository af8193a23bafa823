//! Encoding of primitive and compound values to their RFC 5545 wire representations.
//!
//! Every function here is a pure `&T -> String` projection; none of them know about content line
//! folding or parameter quoting, which live in [`super::component`] alongside the property-name
//! tables they're emitted next to.

use calendar_types::duration::{Duration as CalDuration, ExactDuration, NominalDuration, SignedDuration};
use calendar_types::primitive::Sign as CalSign;
use calendar_types::time::{IsoWeek, Month as CalMonth, Weekday};
use rfc5545_types::rrule::{Freq, Hour, Minute, MonthDay, MonthDaySetIndex, Second, WeekNoSetIndex};

use crate::model::css::Css3Color;
use crate::model::primitive::{
    AlarmAction, Attachment, CalendarUserType, ClassValue, CompletionPercentage, Date, DateTime,
    DateTimeOrDate, DisplayType, Duration as TriggerDuration, DurationKind, DurationTime,
    FeatureType, FreeBusyType, Geo, Method, ParticipantType, ParticipationRole,
    ParticipationStatus, Period, ProximityValue, RDateSeq, RawTime, RelationshipType,
    RequestStatus, RequestStatusCode, ResourceType, Sign as LocalSign, Status, Time, TimeFormat,
    TriggerValue, Utc, UtcOffset, ValueType,
};
use crate::model::rrule::RRule;
use calendar_types::set::Token;
use rfc5545_types::string::Name;

/// Encodes a [`Token`] whose unknown branch carries an owned [`Name`], applying `encode_known` to
/// the statically-known branch.
pub(crate) fn encode_token_name<T>(t: &Token<T, Box<Name>>, encode_known: impl FnOnce(&T) -> String) -> String {
    match t {
        Token::Known(v) => encode_known(v),
        Token::Unknown(s) => s.as_str().to_string(),
    }
}

/// Encodes a [`Token`] whose unknown branch carries an owned [`String`].
pub(crate) fn encode_token_string<T>(t: &Token<T, String>, encode_known: impl FnOnce(&T) -> String) -> String {
    match t {
        Token::Known(v) => encode_known(v),
        Token::Unknown(s) => s.clone(),
    }
}

/// RFC 6868 `^`-encoding of a parameter value: `^` becomes `^^`, `"` becomes `^'`, and a bare
/// newline becomes `^n`.
pub(crate) fn encode_param_value_caret(raw: &str) -> String {
    if !raw.contains(['^', '"', '\n']) {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '^' => out.push_str("^^"),
            '"' => out.push_str("^'"),
            '\n' => out.push_str("^n"),
            c => out.push(c),
        }
    }
    out
}

/// Wraps a parameter value in `DQUOTE`s if it contains a character the unquoted `paramtext`
/// grammar forbids (`:`, `;`, `,`), after applying RFC 6868 caret-encoding.
pub(crate) fn encode_param_value(raw: &str) -> String {
    let encoded = encode_param_value_caret(raw);
    if encoded.contains([':', ';', ',']) {
        format!("\"{encoded}\"")
    } else {
        encoded
    }
}

// ============================================================================
// Date / time
// ============================================================================

pub(crate) fn encode_date(date: &Date) -> String {
    format!("{:04}{:02}{:02}", date.year, date.month.get(), date.day.get())
}

fn encode_raw_time(t: &RawTime) -> String {
    format!("{:02}{:02}{:02}", t.hours, t.minutes, t.seconds)
}

pub(crate) fn encode_time(t: &Time<TimeFormat>) -> String {
    let suffix = match t.format {
        TimeFormat::Utc => "Z",
        TimeFormat::Local => "",
    };
    format!("{}{suffix}", encode_raw_time(&t.raw))
}

pub(crate) fn encode_time_utc(t: &Time<Utc>) -> String {
    format!("{}Z", encode_raw_time(&t.raw))
}

pub(crate) fn encode_datetime(dt: &DateTime<TimeFormat>) -> String {
    format!("{}T{}", encode_date(&dt.date), encode_time(&dt.time))
}

pub(crate) fn encode_datetime_utc(dt: &DateTime<Utc>) -> String {
    format!("{}T{}", encode_date(&dt.date), encode_time_utc(&dt.time))
}

pub(crate) fn encode_date_time_or_date(v: &DateTimeOrDate) -> String {
    match v {
        DateTimeOrDate::Date(date) => encode_date(date),
        DateTimeOrDate::DateTime(dt) => encode_datetime(dt),
    }
}

/// Encodes an `RDATE` property value, a single comma-separated run of homogeneously-typed dates,
/// date-times, or periods.
pub(crate) fn encode_rdate_seq(seq: &RDateSeq) -> String {
    match seq {
        RDateSeq::DateTime(v) => v.iter().map(encode_datetime).collect::<Vec<_>>().join(","),
        RDateSeq::Date(v) => v.iter().map(encode_date).collect::<Vec<_>>().join(","),
        RDateSeq::Period(v) => v.iter().map(encode_period).collect::<Vec<_>>().join(","),
    }
}

pub(crate) fn encode_period(p: &Period) -> String {
    match p {
        Period::Explicit { start, end } => {
            format!("{}/{}", encode_datetime(start), encode_datetime(end))
        }
        Period::Start { start, duration } => {
            format!("{}/{}", encode_datetime(start), encode_trigger_duration(duration))
        }
    }
}

pub(crate) fn encode_utc_offset(o: &UtcOffset) -> String {
    let sign = match o.sign {
        LocalSign::Positive => '+',
        LocalSign::Negative => '-',
    };
    match o.seconds {
        Some(s) => format!("{sign}{:02}{:02}{:02}", o.hours, o.minutes, s),
        None => format!("{sign}{:02}{:02}", o.hours, o.minutes),
    }
}

pub(crate) fn encode_geo(g: &Geo) -> String {
    format!("{};{}", g.lat, g.lon)
}

// ============================================================================
// Durations
// ============================================================================

fn encode_duration_time<T: std::fmt::Display>(t: &DurationTime<T>) -> String {
    match t {
        DurationTime::HMS { hours, minutes, seconds } => format!("T{hours}H{minutes}M{seconds}S"),
        DurationTime::HM { hours, minutes } => format!("T{hours}H{minutes}M"),
        DurationTime::MS { minutes, seconds } => format!("T{minutes}M{seconds}S"),
        DurationTime::H { hours } => format!("T{hours}H"),
        DurationTime::M { minutes } => format!("T{minutes}M"),
        DurationTime::S { seconds } => format!("T{seconds}S"),
    }
}

/// Encodes the TRIGGER property's relative-duration form, and the `DURATION` rule part of a
/// `DURATION`-valued [`Period`].
pub(crate) fn encode_trigger_duration(d: &TriggerDuration) -> String {
    let sign = match d.sign {
        Some(LocalSign::Negative) => "-",
        _ => "",
    };

    let body = match &d.kind {
        DurationKind::Week { weeks } => format!("{weeks}W"),
        DurationKind::Date { days, time } => {
            let mut s = format!("{days}D");
            if let Some(t) = time {
                s.push_str(&encode_duration_time(t));
            }
            s
        }
        DurationKind::Time { time } => encode_duration_time(time),
    };

    format!("{sign}P{body}")
}

fn encode_exact_duration(e: &ExactDuration) -> String {
    let mut s = String::from("T");
    if e.hours > 0 {
        s.push_str(&format!("{}H", e.hours));
    }
    if e.minutes > 0 {
        s.push_str(&format!("{}M", e.minutes));
    }
    if e.seconds > 0 || (e.hours == 0 && e.minutes == 0) {
        s.push_str(&format!("{}S", e.seconds));
    }
    s
}

fn encode_nominal_duration(n: &NominalDuration) -> String {
    if n.weeks > 0 {
        return format!("{}W", n.weeks);
    }

    let mut s = format!("{}D", n.days);
    if let Some(exact) = &n.exact {
        s.push_str(&encode_exact_duration(exact));
    }
    s
}

/// Encodes the `DURATION` property's value (RFC 5545 §3.3.6), distinct from the icalkit-local
/// [`TriggerDuration`] used by `TRIGGER`.
pub(crate) fn encode_signed_duration(d: &SignedDuration) -> String {
    let sign = match d.sign {
        CalSign::Neg => "-",
        CalSign::Pos => "",
    };
    let body = match &d.duration {
        CalDuration::Nominal(n) => encode_nominal_duration(n),
        CalDuration::Exact(e) => encode_exact_duration(e),
    };
    format!("{sign}P{body}")
}

// ============================================================================
// TRIGGER
// ============================================================================

pub(crate) fn encode_trigger_value(v: &TriggerValue) -> String {
    match v {
        TriggerValue::Duration(d) => encode_trigger_duration(d),
        TriggerValue::DateTime(dt) => encode_datetime_utc(dt),
    }
}

// ============================================================================
// REQUEST-STATUS
// ============================================================================

fn encode_request_status_code(c: &RequestStatusCode) -> String {
    match c.2 {
        Some(third) => format!("{}.{}.{third}", c.0, c.1),
        None => format!("{}.{}", c.0, c.1),
    }
}

pub(crate) fn encode_request_status(r: &RequestStatus) -> String {
    match &r.exception_data {
        Some(data) => format!(
            "{};{};{}",
            encode_request_status_code(&r.code),
            r.description.as_str(),
            data.as_str()
        ),
        None => format!(
            "{};{}",
            encode_request_status_code(&r.code),
            r.description.as_str()
        ),
    }
}

// ============================================================================
// Attachment / binary
// ============================================================================

const BASE64_ENGINE: base64::engine::GeneralPurpose = base64::prelude::BASE64_STANDARD;

pub(crate) fn encode_binary(bytes: &[u8]) -> String {
    base64::Engine::encode(&BASE64_ENGINE, bytes)
}

/// Encodes an [`Attachment`]'s inline-binary form; the URI form needs no encoding beyond what
/// [`Uri::as_str`](crate::model::string::Uri::as_str) already provides.
pub(crate) fn encode_attachment_binary(a: &Attachment) -> Option<String> {
    match a {
        Attachment::Binary(bytes) => Some(encode_binary(bytes)),
        Attachment::Uri(_) => None,
    }
}

/// Encodes an [`Attachment`]'s value, whichever form it takes. Callers that need to know whether
/// an `ENCODING=BASE64` parameter is required should match on the [`Attachment`] directly instead.
pub(crate) fn encode_attachment(a: &Attachment) -> String {
    match a {
        Attachment::Binary(bytes) => encode_binary(bytes),
        Attachment::Uri(uri) => uri.as_str().to_string(),
    }
}

// ============================================================================
// Status / class / css color
// ============================================================================

pub(crate) fn encode_status(s: Status) -> &'static str {
    match s {
        Status::Tentative => "TENTATIVE",
        Status::Confirmed => "CONFIRMED",
        Status::Cancelled => "CANCELLED",
        Status::NeedsAction => "NEEDS-ACTION",
        Status::Completed => "COMPLETED",
        Status::InProcess => "IN-PROCESS",
        Status::Draft => "DRAFT",
        Status::Final => "FINAL",
    }
}

pub(crate) fn encode_class_value(v: &ClassValue) -> String {
    match v {
        ClassValue::Public => "PUBLIC".to_string(),
        ClassValue::Private => "PRIVATE".to_string(),
        ClassValue::Confidential => "CONFIDENTIAL".to_string(),
        ClassValue::Other(s) => s.clone(),
    }
}

pub(crate) fn encode_css3_color(c: &Css3Color) -> String {
    c.to_string()
}

pub(crate) fn encode_completion_percentage(p: CompletionPercentage) -> u8 {
    p.0
}

// ============================================================================
// RFC 5546 METHOD
// ============================================================================

pub(crate) fn encode_method(m: &Method) -> String {
    match m {
        Method::Publish => "PUBLISH".to_string(),
        Method::Request => "REQUEST".to_string(),
        Method::Reply => "REPLY".to_string(),
        Method::Add => "ADD".to_string(),
        Method::Cancel => "CANCEL".to_string(),
        Method::Refresh => "REFRESH".to_string(),
        Method::Counter => "COUNTER".to_string(),
        Method::DeclineCounter => "DECLINECOUNTER".to_string(),
        Method::Other(s) => s.clone(),
    }
}

// ============================================================================
// Alarm action
// ============================================================================

pub(crate) fn encode_alarm_action(a: &AlarmAction) -> String {
    match a {
        AlarmAction::Audio => "AUDIO".to_string(),
        AlarmAction::Display => "DISPLAY".to_string(),
        AlarmAction::Email => "EMAIL".to_string(),
        AlarmAction::Other(s) => s.clone(),
    }
}

// ============================================================================
// RFC 7986 / RFC 9073 / RFC 9074 parameter and value tokens
// ============================================================================

pub(crate) fn encode_display_type(v: &DisplayType) -> String {
    match v {
        DisplayType::Badge => "BADGE".to_string(),
        DisplayType::Graphic => "GRAPHIC".to_string(),
        DisplayType::Fullsize => "FULLSIZE".to_string(),
        DisplayType::Thumbnail => "THUMBNAIL".to_string(),
        DisplayType::Other(s) => s.as_str().to_string(),
    }
}

pub(crate) fn encode_feature_type(v: &FeatureType) -> String {
    match v {
        FeatureType::Audio => "AUDIO".to_string(),
        FeatureType::Chat => "CHAT".to_string(),
        FeatureType::Feed => "FEED".to_string(),
        FeatureType::Moderator => "MODERATOR".to_string(),
        FeatureType::Phone => "PHONE".to_string(),
        FeatureType::Screen => "SCREEN".to_string(),
        FeatureType::Video => "VIDEO".to_string(),
        FeatureType::Other(s) => s.as_str().to_string(),
    }
}

pub(crate) fn encode_calendar_user_type(v: &CalendarUserType) -> String {
    match v {
        CalendarUserType::Individual => "INDIVIDUAL".to_string(),
        CalendarUserType::Group => "GROUP".to_string(),
        CalendarUserType::Resource => "RESOURCE".to_string(),
        CalendarUserType::Room => "ROOM".to_string(),
        CalendarUserType::Unknown => "UNKNOWN".to_string(),
        CalendarUserType::Other(s) => s.as_str().to_string(),
    }
}

pub(crate) fn encode_resource_type(v: &ResourceType) -> String {
    match v {
        ResourceType::Room => "ROOM".to_string(),
        ResourceType::Projector => "PROJECTOR".to_string(),
        ResourceType::RemoteConferenceAudio => "REMOTE-CONFERENCE-AUDIO".to_string(),
        ResourceType::RemoteConferenceVideo => "REMOTE-CONFERENCE-VIDEO".to_string(),
        ResourceType::Other(s) => s.clone(),
    }
}

pub(crate) fn encode_participant_type(v: &ParticipantType) -> String {
    match v {
        ParticipantType::Active => "ACTIVE".to_string(),
        ParticipantType::Inactive => "INACTIVE".to_string(),
        ParticipantType::Sponsor => "SPONSOR".to_string(),
        ParticipantType::Contact => "CONTACT".to_string(),
        ParticipantType::BookingContact => "BOOKING-CONTACT".to_string(),
        ParticipantType::EmergencyContact => "EMERGENCY-CONTACT".to_string(),
        ParticipantType::PublicityContact => "PUBLICITY-CONTACT".to_string(),
        ParticipantType::PlannerContact => "PLANNER-CONTACT".to_string(),
        ParticipantType::Performer => "PERFORMER".to_string(),
        ParticipantType::Speaker => "SPEAKER".to_string(),
        ParticipantType::Other(s) => s.clone(),
    }
}

pub(crate) fn encode_participation_role(v: &ParticipationRole) -> String {
    match v {
        ParticipationRole::Chair => "CHAIR".to_string(),
        ParticipationRole::ReqParticipant => "REQ-PARTICIPANT".to_string(),
        ParticipationRole::OptParticipant => "OPT-PARTICIPANT".to_string(),
        ParticipationRole::NonParticipant => "NON-PARTICIPANT".to_string(),
        ParticipationRole::Other(s) => s.as_str().to_string(),
    }
}

pub(crate) fn encode_participation_status(v: &ParticipationStatus) -> String {
    match v {
        ParticipationStatus::NeedsAction => "NEEDS-ACTION".to_string(),
        ParticipationStatus::Accepted => "ACCEPTED".to_string(),
        ParticipationStatus::Declined => "DECLINED".to_string(),
        ParticipationStatus::Tentative => "TENTATIVE".to_string(),
        ParticipationStatus::Delegated => "DELEGATED".to_string(),
        ParticipationStatus::Completed => "COMPLETED".to_string(),
        ParticipationStatus::InProcess => "IN-PROCESS".to_string(),
        ParticipationStatus::Other(s) => s.as_str().to_string(),
    }
}

pub(crate) fn encode_free_busy_type(v: &FreeBusyType) -> String {
    match v {
        FreeBusyType::Free => "FREE".to_string(),
        FreeBusyType::Busy => "BUSY".to_string(),
        FreeBusyType::BusyUnavailable => "BUSY-UNAVAILABLE".to_string(),
        FreeBusyType::BusyTentative => "BUSY-TENTATIVE".to_string(),
        FreeBusyType::Other(s) => s.as_str().to_string(),
    }
}

pub(crate) fn encode_relationship_type(v: &RelationshipType) -> String {
    match v {
        RelationshipType::Parent => "PARENT".to_string(),
        RelationshipType::Child => "CHILD".to_string(),
        RelationshipType::Sibling => "SIBLING".to_string(),
        RelationshipType::Snooze => "SNOOZE".to_string(),
        RelationshipType::Other(s) => s.as_str().to_string(),
    }
}

pub(crate) fn encode_proximity_value(v: &ProximityValue) -> String {
    match v {
        ProximityValue::Arrive => "ARRIVE".to_string(),
        ProximityValue::Depart => "DEPART".to_string(),
        ProximityValue::Connect => "CONNECT".to_string(),
        ProximityValue::Disconnect => "DISCONNECT".to_string(),
        ProximityValue::Other(s) => s.clone(),
    }
}

pub(crate) fn encode_value_type(v: &ValueType) -> String {
    match v {
        ValueType::Binary => "BINARY".to_string(),
        ValueType::Boolean => "BOOLEAN".to_string(),
        ValueType::CalAddress => "CAL-ADDRESS".to_string(),
        ValueType::Date => "DATE".to_string(),
        ValueType::DateTime => "DATE-TIME".to_string(),
        ValueType::Duration => "DURATION".to_string(),
        ValueType::Float => "FLOAT".to_string(),
        ValueType::Integer => "INTEGER".to_string(),
        ValueType::Period => "PERIOD".to_string(),
        ValueType::Recur => "RECUR".to_string(),
        ValueType::Text => "TEXT".to_string(),
        ValueType::Time => "TIME".to_string(),
        ValueType::Uri => "URI".to_string(),
        ValueType::UtcOffset => "UTC-OFFSET".to_string(),
        ValueType::Other(s) => s.as_str().to_string(),
    }
}

// ============================================================================
// Weekday / month (BYDAY, BYMONTH, WKST)
// ============================================================================

pub(crate) fn encode_weekday(w: Weekday) -> &'static str {
    match w {
        Weekday::Monday => "MO",
        Weekday::Tuesday => "TU",
        Weekday::Wednesday => "WE",
        Weekday::Thursday => "TH",
        Weekday::Friday => "FR",
        Weekday::Saturday => "SA",
        Weekday::Sunday => "SU",
    }
}

// ============================================================================
// RRULE
// ============================================================================

fn encode_freq(f: Freq) -> &'static str {
    match f {
        Freq::Secondly => "SECONDLY",
        Freq::Minutely => "MINUTELY",
        Freq::Hourly => "HOURLY",
        Freq::Daily => "DAILY",
        Freq::Weekly => "WEEKLY",
        Freq::Monthly => "MONTHLY",
        Freq::Yearly => "YEARLY",
    }
}

fn encode_weekday_num(w: rfc5545_types::rrule::WeekdayNum) -> String {
    let ordinal = match w.ordinal {
        Some((CalSign::Pos, week)) => week.index().get().to_string(),
        Some((CalSign::Neg, week)) => format!("-{}", week.index().get()),
        None => String::new(),
    };
    format!("{ordinal}{}", encode_weekday(w.weekday))
}

fn encode_year_day_num(n: rfc5545_types::rrule::YearDayNum) -> String {
    match n.sign() {
        CalSign::Pos => n.day().to_string(),
        CalSign::Neg => format!("-{}", n.day()),
    }
}

/// Reconstructs the signed `BYMONTHDAY` values set in `rule.by_month_day`, since [`MonthDaySet`]
/// only exposes membership testing by [`MonthDaySetIndex`], not iteration.
///
/// [`MonthDaySet`]: rfc5545_types::rrule::MonthDaySet
fn by_month_day_values(rule: &RRule) -> Vec<String> {
    let mut out = Vec::new();
    for day in (1..=31u8).filter_map(MonthDay::from_repr) {
        for sign in [CalSign::Pos, CalSign::Neg] {
            let index = MonthDaySetIndex::from_signed_month_day(sign, day);
            if rule.by_month_day.get(index) {
                let value = match sign {
                    CalSign::Pos => (day as u8).to_string(),
                    CalSign::Neg => format!("-{}", day as u8),
                };
                out.push(value);
            }
        }
    }
    out
}

/// Reconstructs the signed `BYWEEKNO` values set in `rule.by_week_no`, by the same strategy as
/// [`by_month_day_values`].
fn by_week_no_values(rule: &RRule) -> Vec<String> {
    let mut out = Vec::new();
    for week in (1..=53u8).filter_map(IsoWeek::from_index) {
        for sign in [CalSign::Pos, CalSign::Neg] {
            let index = WeekNoSetIndex::from_signed_week(sign, week);
            if rule.by_week_no.get(index) {
                let value = match sign {
                    CalSign::Pos => week.index().get().to_string(),
                    CalSign::Neg => format!("-{}", week.index().get()),
                };
                out.push(value);
            }
        }
    }
    out
}

pub(crate) fn encode_rrule(rule: &RRule) -> String {
    let mut parts = vec![format!("FREQ={}", encode_freq(rule.freq))];

    parts.push(format!("INTERVAL={}", rule.interval.get()));

    match &rule.bound {
        crate::model::rrule::RRuleBound::Forever => {}
        crate::model::rrule::RRuleBound::Until(dt) => {
            parts.push(format!("UNTIL={}", encode_date_time_or_date(dt)));
        }
        crate::model::rrule::RRuleBound::Count(n) => parts.push(format!("COUNT={n}")),
    }

    let by_second: Vec<String> = Second::iter()
        .filter(|s| rule.by_second.get(*s))
        .map(|s| (s as u8).to_string())
        .collect();
    if !by_second.is_empty() {
        parts.push(format!("BYSECOND={}", by_second.join(",")));
    }

    let by_minute: Vec<String> = Minute::iter()
        .filter(|m| rule.by_minute.get(*m))
        .map(|m| (m as u8).to_string())
        .collect();
    if !by_minute.is_empty() {
        parts.push(format!("BYMINUTE={}", by_minute.join(",")));
    }

    let by_hour: Vec<String> = Hour::iter()
        .filter(|h| rule.by_hour.get(*h))
        .map(|h| (h as u8).to_string())
        .collect();
    if !by_hour.is_empty() {
        parts.push(format!("BYHOUR={}", by_hour.join(",")));
    }

    if !rule.by_day.is_empty() {
        let days: Vec<String> = rule.by_day.iter().map(encode_weekday_num).collect();
        parts.push(format!("BYDAY={}", days.join(",")));
    }

    let by_month_day = by_month_day_values(rule);
    if !by_month_day.is_empty() {
        parts.push(format!("BYMONTHDAY={}", by_month_day.join(",")));
    }

    if !rule.by_year_day.is_empty() {
        let days: Vec<String> = rule.by_year_day.iter().copied().map(encode_year_day_num).collect();
        parts.push(format!("BYYEARDAY={}", days.join(",")));
    }

    let by_week_no = by_week_no_values(rule);
    if !by_week_no.is_empty() {
        parts.push(format!("BYWEEKNO={}", by_week_no.join(",")));
    }

    let by_month: Vec<String> = CalMonth::iter()
        .filter(|m| rule.by_month.get(*m))
        .map(|m| m.number().to_string())
        .collect();
    if !by_month.is_empty() {
        parts.push(format!("BYMONTH={}", by_month.join(",")));
    }

    if !rule.by_set_pos.is_empty() {
        let positions: Vec<String> = rule.by_set_pos.iter().copied().map(encode_year_day_num).collect();
        parts.push(format!("BYSETPOS={}", positions.join(",")));
    }

    parts.push(format!("WKST={}", encode_weekday(rule.week_start)));

    if let Some(rscale) = &rule.rscale {
        parts.push(format!("RSCALE={}", rscale.as_str()));
    }

    parts.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_date() {
        let date = Date::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(encode_date(&date), "20240307");
    }

    #[test]
    fn encodes_utc_offset_without_seconds() {
        let offset = UtcOffset {
            sign: LocalSign::Negative,
            hours: 5,
            minutes: 30,
            seconds: None,
        };
        assert_eq!(encode_utc_offset(&offset), "-0530");
    }

    #[test]
    fn encodes_utc_offset_with_seconds() {
        let offset = UtcOffset {
            sign: LocalSign::Positive,
            hours: 1,
            minutes: 0,
            seconds: Some(15),
        };
        assert_eq!(encode_utc_offset(&offset), "+010015");
    }

    #[test]
    fn caret_encodes_only_when_needed() {
        assert_eq!(encode_param_value_caret("plain"), "plain");
        assert_eq!(encode_param_value_caret("a^b"), "a^^b");
        assert_eq!(encode_param_value_caret("a\"b"), "a^'b");
        assert_eq!(encode_param_value_caret("a\nb"), "a^nb");
    }

    #[test]
    fn quotes_param_value_containing_delimiters() {
        assert_eq!(encode_param_value("mailto:x"), "\"mailto:x\"");
        assert_eq!(encode_param_value("plain"), "plain");
    }

    #[test]
    fn encodes_daily_rrule_with_until() {
        let mut rule = RRule {
            freq: Freq::Daily,
            ..RRule::default()
        };
        rule.bound = crate::model::rrule::RRuleBound::Until(DateTimeOrDate::Date(
            Date::from_ymd_opt(2024, 12, 31).unwrap(),
        ));
        assert_eq!(encode_rrule(&rule), "FREQ=DAILY;INTERVAL=1;UNTIL=20241231;WKST=MO");
    }

    #[test]
    fn encodes_rscale_after_wkst() {
        let mut rule = RRule {
            freq: Freq::Yearly,
            ..RRule::default()
        };
        rule.rscale = Some(Name::new("CHINESE").unwrap().into());
        assert_eq!(encode_rrule(&rule), "FREQ=YEARLY;INTERVAL=1;WKST=MO;RSCALE=CHINESE");
    }
}
