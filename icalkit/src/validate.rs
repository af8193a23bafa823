//! Structural and semantic validation over a parsed [`Calendar`](crate::model::component::Calendar).
//!
//! The data model already makes most required-property violations unrepresentable (a
//! [`DisplayAlarm`] simply has no way to omit its `DESCRIPTION`), so this module is left with the
//! checks the type system can't express: non-empty subcomponent lists, `VALARM` rules that depend
//! on the textual action rather than the variant, and cross-references between a `TZID` parameter
//! and the `VTIMEZONE` children of the enclosing calendar.

use crate::model::component::{
    Alarm, Calendar, CalendarComponent, Event, FreeBusy, Journal, Todo,
};
use crate::model::parameter::Params;

/// Controls how mode-dependent checks (currently, unresolved `TZID` references) are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Unresolved references are hard errors.
    #[default]
    Strict,
    /// Unresolved references are downgraded to warnings.
    Lenient,
}

/// How serious a [`Finding`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single validation finding, carrying enough context for a pinpointed diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub component_kind: &'static str,
    pub property: Option<&'static str>,
    pub rfc_section: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn new(severity: Severity, component_kind: &'static str, property: Option<&'static str>, rfc_section: &'static str, message: impl Into<String>) -> Self {
        Self { component_kind, property, rfc_section, severity, message: message.into() }
    }

    fn error(component_kind: &'static str, property: Option<&'static str>, rfc_section: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, component_kind, property, rfc_section, message)
    }

    fn warning(component_kind: &'static str, property: Option<&'static str>, rfc_section: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, component_kind, property, rfc_section, message)
    }
}

/// The outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Success,
    Warnings(Vec<Finding>),
    Errors(Vec<Finding>),
    Mixed { warnings: Vec<Finding>, errors: Vec<Finding> },
}

impl ValidationResult {
    fn from_findings(findings: Vec<Finding>) -> Self {
        let (warnings, errors): (Vec<_>, Vec<_>) = findings.into_iter().partition(|f| f.severity == Severity::Warning);

        match (warnings.is_empty(), errors.is_empty()) {
            (true, true) => Self::Success,
            (false, true) => Self::Warnings(warnings),
            (true, false) => Self::Errors(errors),
            (false, false) => Self::Mixed { warnings, errors },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn has_errors(&self) -> bool {
        matches!(self, Self::Errors(_) | Self::Mixed { .. })
    }

    /// Converts a failing result into an [`Invalid`] error, or `None` if nothing worse than a
    /// warning occurred.
    pub fn into_invalid(self) -> Option<Invalid> {
        self.has_errors().then(|| Invalid(self))
    }
}

/// A [`ValidationResult`] carrying at least one error, usable as a [`std::error::Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("calendar failed validation: {0:?}")]
pub struct Invalid(pub ValidationResult);

/// Validates `calendar` in [`Mode::Strict`].
pub fn validate(calendar: &Calendar) -> ValidationResult {
    validate_with_mode(calendar, Mode::default())
}

/// Validates `calendar`, scoring unresolved `TZID` references per `mode`.
#[tracing::instrument(skip_all)]
pub fn validate_with_mode(calendar: &Calendar, mode: Mode) -> ValidationResult {
    let mut findings = Vec::new();

    if calendar.components().is_empty() {
        findings.push(Finding::error("VCALENDAR", None, "3.4", "a VCALENDAR must contain at least one component"));
    }

    let known_zones: Vec<&str> = calendar
        .components()
        .iter()
        .filter_map(|c| match c {
            CalendarComponent::TimeZone(tz) => Some(tz.tz_id().value.as_str()),
            _ => None,
        })
        .collect();

    for component in calendar.components() {
        match component {
            CalendarComponent::Event(e) => validate_event(e, &known_zones, mode, &mut findings),
            CalendarComponent::Todo(t) => validate_todo(t, &known_zones, mode, &mut findings),
            CalendarComponent::Journal(j) => validate_journal(j, &known_zones, mode, &mut findings),
            CalendarComponent::FreeBusy(f) => validate_freebusy(f, &mut findings),
            CalendarComponent::TimeZone(tz) => {
                if tz.rules().is_empty() {
                    findings.push(Finding::error(
                        "VTIMEZONE",
                        None,
                        "3.6.5",
                        format!("VTIMEZONE {:?} has no STANDARD or DAYLIGHT child", tz.tz_id().value.as_str()),
                    ));
                }
            }
            CalendarComponent::Other(_) => {}
        }
    }

    ValidationResult::from_findings(findings)
}

fn check_tzid(params: &Params, known_zones: &[&str], component_kind: &'static str, property: &'static str, mode: Mode, findings: &mut Vec<Finding>) {
    let Some(tz_id) = params.tz_id() else { return };
    let tz_id = tz_id.as_str();

    if tz_id.eq_ignore_ascii_case("UTC") || known_zones.contains(&tz_id) {
        return;
    }

    let message = format!("{property} references unknown TZID {tz_id:?}");
    match mode {
        Mode::Strict => findings.push(Finding::error(component_kind, Some(property), "3.2.19", message)),
        Mode::Lenient => findings.push(Finding::warning(component_kind, Some(property), "3.2.19", message)),
    }
}

fn validate_event(e: &Event, known_zones: &[&str], mode: Mode, findings: &mut Vec<Finding>) {
    if let Some(p) = e.dtstart() {
        check_tzid(&p.params, known_zones, "VEVENT", "DTSTART", mode, findings);
    }
    if let Some(p) = e.dtend() {
        check_tzid(&p.params, known_zones, "VEVENT", "DTEND", mode, findings);
    }
    if e.dtend().is_some() && e.duration().is_some() {
        findings.push(Finding::error("VEVENT", None, "3.6.1", "DTEND and DURATION occurred together"));
    }
    for alarm in e.alarms() {
        validate_alarm(alarm, findings);
    }
}

fn validate_todo(t: &Todo, known_zones: &[&str], mode: Mode, findings: &mut Vec<Finding>) {
    if let Some(p) = t.dtstart() {
        check_tzid(&p.params, known_zones, "VTODO", "DTSTART", mode, findings);
    }
    if let Some(p) = t.due() {
        check_tzid(&p.params, known_zones, "VTODO", "DUE", mode, findings);
    }
    if t.due().is_some() && t.duration().is_some() {
        findings.push(Finding::error("VTODO", None, "3.6.2", "DUE and DURATION occurred together"));
    }
    for alarm in t.alarms() {
        validate_alarm(alarm, findings);
    }
}

fn validate_journal(j: &Journal, known_zones: &[&str], mode: Mode, findings: &mut Vec<Finding>) {
    if let Some(p) = j.dtstart() {
        check_tzid(&p.params, known_zones, "VJOURNAL", "DTSTART", mode, findings);
    }
}

fn validate_freebusy(f: &FreeBusy, findings: &mut Vec<Finding>) {
    if f.dtstart().is_some() != f.dtend().is_some() {
        findings.push(Finding::warning("VFREEBUSY", None, "3.6.4", "DTSTART and DTEND should occur together or not at all"));
    }
}

fn validate_alarm(alarm: &Alarm, findings: &mut Vec<Finding>) {
    match alarm {
        Alarm::Audio(_) | Alarm::Display(_) => {}
        Alarm::Email(email) => {
            if email.attendee().is_none_or(|a| a.is_empty()) {
                findings.push(Finding::error("VALARM", Some("ATTENDEE"), "3.8.6.3", "EMAIL alarm requires at least one ATTENDEE"));
            }
        }
        Alarm::Other(other) => {
            let action = other.action().value.as_str();
            if action.eq_ignore_ascii_case("PROCEDURE") && other.attach().is_none() {
                findings.push(Finding::error("VALARM", Some("ATTACH"), "3.8.6.1", "PROCEDURE alarm requires ATTACH"));
            } else if action.eq_ignore_ascii_case("PROXIMITY") {
                // RFC 9074 proximity triggers aren't modeled as a distinct value type yet, so we
                // can't check for one here; flag the gap instead of silently accepting it.
                findings.push(Finding::warning("VALARM", None, "9074", "PROXIMITY alarm validation is not implemented"));
            }
        }
    }
}
