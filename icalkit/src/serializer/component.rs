//! Rendering of the component tree back to RFC 5545 content lines.
//!
//! Each `write_*` function appends `BEGIN`/`END` and the component's properties to a [`Writer`],
//! recursing into subcomponents itself. Property values are escaped/encoded by
//! [`super::value`]; parameter values are escaped and quoted here, since that depends on nothing
//! but the raw parameter string.

use crate::model::component::{
    Alarm, AudioAlarm, Calendar, CalendarComponent, DisplayAlarm, EmailAlarm, Event, FreeBusy,
    Journal, LocationComponent, OtherAlarm, OtherComponent, Participant, ResourceComponent,
    TimeZone, Todo, TzRule, TzRuleKind,
};
use crate::model::parameter::Params;
use crate::model::property::{Prop, StaticProp, StructuredDataProp};
use crate::parser::escaped::escape_text;

use super::options::SerializeOptions;
use super::value;

/// Folds `input` into lines of at most `limit` octets, using `line_ending` as the fold separator,
/// mirroring [`crate::parser::escaped::fold`] but with configurable limit and line ending.
/// Continuation chunks are one octet narrower than the first, since the leading fold space counts
/// against their own `limit`-octet line.
fn fold_with_limit(input: &str, limit: usize, line_ending: &str) -> String {
    let bytes = input.as_bytes();
    if bytes.len() <= limit {
        return input.to_owned();
    }

    let mut out = String::with_capacity(bytes.len() + bytes.len() / limit.max(1) * (line_ending.len() + 1));
    let mut start = 0;
    let mut first = true;

    while start < bytes.len() {
        let width = if first { limit } else { limit.saturating_sub(1).max(1) };
        let mut end = (start + width).min(bytes.len());
        while end < bytes.len() && !input.is_char_boundary(end) {
            end -= 1;
        }

        out.push_str(&input[start..end]);
        start = end;
        first = false;

        if start < bytes.len() {
            out.push_str(line_ending);
            out.push(' ');
        }
    }

    out
}

/// Appends folded content lines to a buffer.
pub(crate) struct Writer<'a> {
    opts: &'a SerializeOptions,
    buf: String,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(opts: &'a SerializeOptions) -> Self {
        Self { opts, buf: String::new() }
    }

    fn raw_line(&mut self, content: &str) {
        self.buf.push_str(&fold_with_limit(content, self.opts.line_length, self.opts.line_ending.as_str()));
        self.buf.push_str(self.opts.line_ending.as_str());
    }

    fn begin(&mut self, kind: &str) {
        self.raw_line(&format!("BEGIN:{kind}"));
    }

    fn end(&mut self, kind: &str) {
        self.raw_line(&format!("END:{kind}"));
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

/// Collects a single component's content lines so they can be sorted by property name before
/// being folded and written out.
struct Props<'a> {
    opts: &'a SerializeOptions,
    lines: Vec<(String, String)>,
}

impl<'a> Props<'a> {
    fn new(opts: &'a SerializeOptions) -> Self {
        Self { opts, lines: Vec::new() }
    }

    fn push(&mut self, name: &str, params: Vec<(String, String)>, value: &str) {
        let mut params = params;
        if self.opts.sort_parameters {
            params.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let mut line = String::from(name);
        for (k, v) in &params {
            line.push(';');
            line.push_str(k);
            line.push('=');
            line.push_str(v);
        }
        line.push(':');
        line.push_str(value);

        self.lines.push((name.to_string(), line));
    }

    fn flush_into(self, w: &mut Writer) {
        let mut lines = self.lines;
        if self.opts.sort_properties {
            lines.sort_by(|a, b| a.0.cmp(&b.0));
        }
        for (_, line) in lines {
            w.raw_line(&line);
        }
    }
}

fn encode_param_pairs(params: &Params) -> Vec<(String, String)> {
    let mut out = Vec::new();

    let mut push = |name: &str, raw: String| out.push((name.to_string(), value::encode_param_value(&raw)));

    if let Some(v) = params.alternate_representation() {
        push("ALTREP", v.as_str().to_string());
    }
    if let Some(v) = params.common_name() {
        push("CN", v.as_str().to_string());
    }
    if let Some(v) = params.calendar_user_type() {
        push("CUTYPE", value::encode_token_name(v, value::encode_calendar_user_type));
    }
    if let Some(v) = params.delegated_from() {
        for uri in v.iter() {
            push("DELEGATED-FROM", uri.as_str().to_string());
        }
    }
    if let Some(v) = params.delegated_to() {
        for uri in v.iter() {
            push("DELEGATED-TO", uri.as_str().to_string());
        }
    }
    if let Some(v) = params.directory_reference() {
        push("DIR", v.as_str().to_string());
    }
    if let Some(v) = params.inline_encoding() {
        push("ENCODING", v.to_string());
    }
    if let Some(v) = params.format_type() {
        push("FMTTYPE", v.as_str().to_string());
    }
    if let Some(v) = params.free_busy_type() {
        push("FBTYPE", value::encode_token_name(v, value::encode_free_busy_type));
    }
    if let Some(v) = params.language() {
        push("LANGUAGE", v.0.to_string());
    }
    if let Some(v) = params.membership() {
        for uri in v.iter() {
            push("MEMBER", uri.as_str().to_string());
        }
    }
    if let Some(v) = params.participation_status() {
        push("PARTSTAT", value::encode_token_name(v, value::encode_participation_status));
    }
    if params.recurrence_range().is_some() {
        push("RANGE", "THISANDFUTURE".to_string());
    }
    if let Some(v) = params.trigger_relationship() {
        push("RELATED", v.to_string());
    }
    if let Some(v) = params.relationship_type() {
        push("RELTYPE", value::encode_token_name(v, value::encode_relationship_type));
    }
    if let Some(v) = params.participation_role() {
        push("ROLE", value::encode_token_name(v, value::encode_participation_role));
    }
    if let Some(v) = params.rsvp_expectation() {
        push("RSVP", if *v { "TRUE".to_string() } else { "FALSE".to_string() });
    }
    if let Some(v) = params.sent_by() {
        push("SENT-BY", v.as_str().to_string());
    }
    if let Some(v) = params.tz_id() {
        push("TZID", v.as_str().to_string());
    }
    if let Some(v) = params.display_type() {
        push("DISPLAY", value::encode_token_name(v, value::encode_display_type));
    }
    if let Some(v) = params.email() {
        push("EMAIL", v.as_str().to_string());
    }
    if let Some(v) = params.feature_type() {
        push("FEATURE", value::encode_token_name(v, value::encode_feature_type));
    }
    if let Some(v) = params.label() {
        push("LABEL", v.as_str().to_string());
    }
    if let Some(v) = params.order() {
        push("ORDER", v.to_string());
    }
    if let Some(v) = params.schema() {
        push("SCHEMA", v.as_str().to_string());
    }
    if let Some(v) = params.derived() {
        push("DERIVED", if *v { "TRUE".to_string() } else { "FALSE".to_string() });
    }

    out
}

fn encode_structured_data_param_pairs(params: &crate::model::parameter::StructuredDataParams) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut push = |name: &str, raw: String| out.push((name.to_string(), value::encode_param_value(&raw)));

    push("FMTTYPE", params.format_type().as_str().to_string());
    push("SCHEMA", params.schema().as_str().to_string());
    if let Some(v) = params.inline_encoding() {
        push("ENCODING", v.to_string());
    }

    out
}

// ============================================================================
// Generic property-emission helpers
// ============================================================================

fn emit<V>(props: &mut Props, name: StaticProp, prop: &Prop<V, Params>, encode: impl Fn(&V) -> String) {
    props.push(&name.to_string(), encode_param_pairs(&prop.params), &encode(&prop.value));
}

fn emit_text(props: &mut Props, name: StaticProp, prop: &Prop<String, Params>) {
    let escaped = escape_text(&prop.value);
    props.push(&name.to_string(), encode_param_pairs(&prop.params), &escaped);
}

fn emit_text_seq(props: &mut Props, name: StaticProp, prop: &Prop<Vec<String>, Params>) {
    let joined = prop.value.iter().map(|s| escape_text(s).into_owned()).collect::<Vec<_>>().join(",");
    props.push(&name.to_string(), encode_param_pairs(&prop.params), &joined);
}

fn emit_multi<V>(props: &mut Props, name: StaticProp, items: Option<&Vec<Prop<V, Params>>>, encode: impl Fn(&V) -> String) {
    if let Some(items) = items {
        for p in items {
            emit(props, name, p, &encode);
        }
    }
}

fn emit_text_multi(props: &mut Props, name: StaticProp, items: Option<&Vec<Prop<String, Params>>>) {
    if let Some(items) = items {
        for p in items {
            emit_text(props, name, p);
        }
    }
}

fn emit_text_seq_multi(props: &mut Props, name: StaticProp, items: Option<&Vec<Prop<Vec<String>, Params>>>) {
    if let Some(items) = items {
        for p in items {
            emit_text_seq(props, name, p);
        }
    }
}

fn emit_structured_data(props: &mut Props, items: Option<&Vec<StructuredDataProp>>) {
    let Some(items) = items else { return };
    for item in items {
        match item {
            StructuredDataProp::Text(p) => {
                let escaped = escape_text(&p.value);
                props.push("STRUCTURED-DATA", encode_structured_data_param_pairs(&p.params), &escaped);
            }
            StructuredDataProp::Binary(p) => {
                let encoded = value::encode_binary(&p.value);
                props.push("STRUCTURED-DATA", encode_structured_data_param_pairs(&p.params), &encoded);
            }
            StructuredDataProp::Uri(p) => {
                props.push("STRUCTURED-DATA", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
    }
}

fn emit_styled_description(props: &mut Props, items: Option<&Vec<Prop<crate::model::primitive::StyledDescriptionValue, Params>>>) {
    use crate::model::primitive::StyledDescriptionValue as SDV;
    let Some(items) = items else { return };
    for p in items {
        let raw = match &p.value {
            SDV::Text(s) => escape_text(s).into_owned(),
            SDV::Uri(u) => u.as_str().to_string(),
            SDV::Iana { value, .. } => value.clone(),
        };
        props.push(&StaticProp::StyledDescription.to_string(), encode_param_pairs(&p.params), &raw);
    }
}

// ============================================================================
// Calendar
// ============================================================================

pub(crate) fn write_calendar(w: &mut Writer, cal: &Calendar) {
    w.begin("VCALENDAR");

    let mut props = Props::new(w.opts);
    emit_text(&mut props, StaticProp::ProdId, cal.prod_id());
    emit(&mut props, StaticProp::Version, cal.version(), |v| v.to_string());

    if w.opts.include_optional_properties {
        if let Some(p) = cal.cal_scale() {
            emit(&mut props, StaticProp::CalScale, p, |v| value::encode_token_string(v, |g| g.to_string()));
        }
        if let Some(p) = cal.method() {
            emit(&mut props, StaticProp::Method, p, |v| value::encode_token_string(v, value::encode_method));
        }
        if let Some(p) = cal.last_modified() {
            emit(&mut props, StaticProp::LastModified, p, value::encode_datetime_utc);
        }
        if let Some(p) = cal.url() {
            props.push("URL", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = cal.refresh_interval() {
            emit(&mut props, StaticProp::RefreshInterval, p, value::encode_signed_duration);
        }
        if let Some(p) = cal.source() {
            props.push("SOURCE", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = cal.color() {
            emit(&mut props, StaticProp::Color, p, value::encode_css3_color);
        }
        emit_text_multi(&mut props, StaticProp::Name, cal.name());
        emit_text_multi(&mut props, StaticProp::Description, cal.description());
        emit_text_seq_multi(&mut props, StaticProp::Categories, cal.categories());
        emit_multi(&mut props, StaticProp::Image, cal.image(), value::encode_attachment);
    }

    props.flush_into(w);

    let (tz, rest): (Vec<_>, Vec<_>) = if w.opts.timezones_first {
        cal.components().iter().partition(|c| matches!(c, CalendarComponent::TimeZone(_)))
    } else {
        (Vec::new(), cal.components().iter().collect())
    };

    for c in tz.into_iter().chain(rest) {
        write_calendar_component(w, c);
    }

    w.end("VCALENDAR");
}

fn write_calendar_component(w: &mut Writer, c: &CalendarComponent) {
    match c {
        CalendarComponent::Event(e) => write_event(w, e),
        CalendarComponent::Todo(t) => write_todo(w, t),
        CalendarComponent::Journal(j) => write_journal(w, j),
        CalendarComponent::FreeBusy(f) => write_freebusy(w, f),
        CalendarComponent::TimeZone(tz) => write_timezone(w, tz),
        CalendarComponent::Other(o) => write_other_component(w, o),
    }
}

// ============================================================================
// Event
// ============================================================================

pub(crate) fn write_event(w: &mut Writer, e: &Event) {
    w.begin("VEVENT");

    let mut props = Props::new(w.opts);
    emit(&mut props, StaticProp::DtStamp, e.dtstamp(), value::encode_datetime_utc);
    props.push("UID", encode_param_pairs(&e.uid().params), e.uid().value.as_str());

    if let Some(p) = e.dtstart() {
        emit(&mut props, StaticProp::DtStart, p, value::encode_date_time_or_date);
    }
    if let Some(p) = e.dtend() {
        emit(&mut props, StaticProp::DtEnd, p, value::encode_date_time_or_date);
    }
    if let Some(p) = e.duration() {
        emit(&mut props, StaticProp::Duration, p, value::encode_signed_duration);
    }

    if w.opts.include_optional_properties {
        if let Some(p) = e.class() {
            emit(&mut props, StaticProp::Class, p, |v| value::encode_token_string(v, value::encode_class_value));
        }
        if let Some(p) = e.created() {
            emit(&mut props, StaticProp::Created, p, value::encode_datetime_utc);
        }
        if let Some(p) = e.description() {
            emit_text(&mut props, StaticProp::Description, p);
        }
        if let Some(p) = e.geo() {
            emit(&mut props, StaticProp::Geo, p, value::encode_geo);
        }
        if let Some(p) = e.last_modified() {
            emit(&mut props, StaticProp::LastModified, p, value::encode_datetime_utc);
        }
        if let Some(p) = e.location() {
            emit_text(&mut props, StaticProp::Location, p);
        }
        if let Some(p) = e.organizer() {
            props.push("ORGANIZER", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = e.priority() {
            emit(&mut props, StaticProp::Priority, p, |v| (*v as u8).to_string());
        }
        if let Some(p) = e.sequence() {
            emit(&mut props, StaticProp::Sequence, p, |v| v.to_string());
        }
        if let Some(p) = e.status() {
            emit(&mut props, StaticProp::Status, p, |v| value::encode_status(*v).to_string());
        }
        if let Some(p) = e.summary() {
            emit_text(&mut props, StaticProp::Summary, p);
        }
        if let Some(p) = e.transp() {
            emit(&mut props, StaticProp::Transp, p, |v| v.to_string());
        }
        if let Some(p) = e.url() {
            props.push("URL", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = e.recurrence_id() {
            emit(&mut props, StaticProp::RecurId, p, value::encode_date_time_or_date);
        }
        if let Some(p) = e.color() {
            emit(&mut props, StaticProp::Color, p, value::encode_css3_color);
        }

        emit_multi(&mut props, StaticProp::Attach, e.attach(), value::encode_attachment);
        if let Some(v) = e.attendee() {
            for p in v {
                props.push("ATTENDEE", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_text_seq_multi(&mut props, StaticProp::Categories, e.categories());
        emit_text_multi(&mut props, StaticProp::Comment, e.comment());
        emit_text_multi(&mut props, StaticProp::Contact, e.contact());
        emit_multi(&mut props, StaticProp::ExDate, e.exdate(), value::encode_date_time_or_date);
        emit_multi(&mut props, StaticProp::RequestStatus, e.request_status(), value::encode_request_status);
        if let Some(v) = e.related_to() {
            for p in v {
                props.push("RELATED-TO", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_text_seq_multi(&mut props, StaticProp::Resources, e.resources());
        emit_multi(&mut props, StaticProp::RDate, e.rdate(), value::encode_rdate_seq);
        emit_multi(&mut props, StaticProp::RRule, e.rrule(), value::encode_rrule);
        emit_multi(&mut props, StaticProp::Image, e.image(), value::encode_attachment);
        if let Some(v) = e.conference() {
            for p in v {
                props.push("CONFERENCE", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_styled_description(&mut props, e.styled_description());
        emit_structured_data(&mut props, e.structured_data());
    }

    props.flush_into(w);

    for a in e.alarms() {
        write_alarm(w, a);
    }
    for p in e.participants() {
        write_participant(w, p);
    }
    for l in e.locations() {
        write_location(w, l);
    }
    for r in e.resource_components() {
        write_resource(w, r);
    }

    w.end("VEVENT");
}

// ============================================================================
// Todo
// ============================================================================

pub(crate) fn write_todo(w: &mut Writer, t: &Todo) {
    w.begin("VTODO");

    let mut props = Props::new(w.opts);
    emit(&mut props, StaticProp::DtStamp, t.dtstamp(), value::encode_datetime_utc);
    props.push("UID", encode_param_pairs(&t.uid().params), t.uid().value.as_str());

    if let Some(p) = t.dtstart() {
        emit(&mut props, StaticProp::DtStart, p, value::encode_date_time_or_date);
    }
    if let Some(p) = t.due() {
        emit(&mut props, StaticProp::DtDue, p, value::encode_date_time_or_date);
    }
    if let Some(p) = t.duration() {
        emit(&mut props, StaticProp::Duration, p, value::encode_signed_duration);
    }

    if w.opts.include_optional_properties {
        if let Some(p) = t.class() {
            emit(&mut props, StaticProp::Class, p, |v| value::encode_token_string(v, value::encode_class_value));
        }
        if let Some(p) = t.completed() {
            emit(&mut props, StaticProp::DtCompleted, p, value::encode_datetime_utc);
        }
        if let Some(p) = t.created() {
            emit(&mut props, StaticProp::Created, p, value::encode_datetime_utc);
        }
        if let Some(p) = t.description() {
            emit_text(&mut props, StaticProp::Description, p);
        }
        if let Some(p) = t.geo() {
            emit(&mut props, StaticProp::Geo, p, value::encode_geo);
        }
        if let Some(p) = t.last_modified() {
            emit(&mut props, StaticProp::LastModified, p, value::encode_datetime_utc);
        }
        if let Some(p) = t.location() {
            emit_text(&mut props, StaticProp::Location, p);
        }
        if let Some(p) = t.organizer() {
            props.push("ORGANIZER", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = t.percent_complete() {
            emit(&mut props, StaticProp::PercentComplete, p, |v| value::encode_completion_percentage(*v).to_string());
        }
        if let Some(p) = t.priority() {
            emit(&mut props, StaticProp::Priority, p, |v| (*v as u8).to_string());
        }
        if let Some(p) = t.recurrence_id() {
            emit(&mut props, StaticProp::RecurId, p, value::encode_date_time_or_date);
        }
        if let Some(p) = t.sequence() {
            emit(&mut props, StaticProp::Sequence, p, |v| v.to_string());
        }
        if let Some(p) = t.status() {
            emit(&mut props, StaticProp::Status, p, |v| value::encode_status(*v).to_string());
        }
        if let Some(p) = t.summary() {
            emit_text(&mut props, StaticProp::Summary, p);
        }
        if let Some(p) = t.url() {
            props.push("URL", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = t.color() {
            emit(&mut props, StaticProp::Color, p, value::encode_css3_color);
        }

        emit_multi(&mut props, StaticProp::Attach, t.attach(), value::encode_attachment);
        if let Some(v) = t.attendee() {
            for p in v {
                props.push("ATTENDEE", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_text_seq_multi(&mut props, StaticProp::Categories, t.categories());
        emit_text_multi(&mut props, StaticProp::Comment, t.comment());
        emit_text_multi(&mut props, StaticProp::Contact, t.contact());
        emit_multi(&mut props, StaticProp::ExDate, t.exdate(), value::encode_date_time_or_date);
        emit_multi(&mut props, StaticProp::RequestStatus, t.request_status(), value::encode_request_status);
        if let Some(v) = t.related_to() {
            for p in v {
                props.push("RELATED-TO", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_text_seq_multi(&mut props, StaticProp::Resources, t.resources());
        emit_multi(&mut props, StaticProp::RRule, t.rrule(), value::encode_rrule);
        emit_multi(&mut props, StaticProp::Image, t.image(), value::encode_attachment);
        if let Some(v) = t.conference() {
            for p in v {
                props.push("CONFERENCE", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_styled_description(&mut props, t.styled_description());
        emit_structured_data(&mut props, t.structured_data());
    }

    props.flush_into(w);

    for a in t.alarms() {
        write_alarm(w, a);
    }
    for p in t.participants() {
        write_participant(w, p);
    }
    for l in t.locations() {
        write_location(w, l);
    }
    for r in t.resource_components() {
        write_resource(w, r);
    }

    w.end("VTODO");
}

// ============================================================================
// Journal
// ============================================================================

pub(crate) fn write_journal(w: &mut Writer, j: &Journal) {
    w.begin("VJOURNAL");

    let mut props = Props::new(w.opts);
    emit(&mut props, StaticProp::DtStamp, j.dtstamp(), value::encode_datetime_utc);
    props.push("UID", encode_param_pairs(&j.uid().params), j.uid().value.as_str());

    if w.opts.include_optional_properties {
        if let Some(p) = j.dtstart() {
            emit(&mut props, StaticProp::DtStart, p, value::encode_date_time_or_date);
        }
        if let Some(p) = j.class() {
            emit(&mut props, StaticProp::Class, p, |v| value::encode_token_string(v, value::encode_class_value));
        }
        if let Some(p) = j.created() {
            emit(&mut props, StaticProp::Created, p, value::encode_datetime_utc);
        }
        if let Some(p) = j.last_modified() {
            emit(&mut props, StaticProp::LastModified, p, value::encode_datetime_utc);
        }
        if let Some(p) = j.organizer() {
            props.push("ORGANIZER", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = j.recurrence_id() {
            emit(&mut props, StaticProp::RecurId, p, value::encode_date_time_or_date);
        }
        if let Some(p) = j.sequence() {
            emit(&mut props, StaticProp::Sequence, p, |v| v.to_string());
        }
        if let Some(p) = j.status() {
            emit(&mut props, StaticProp::Status, p, |v| value::encode_status(*v).to_string());
        }
        if let Some(p) = j.summary() {
            emit_text(&mut props, StaticProp::Summary, p);
        }
        if let Some(p) = j.url() {
            props.push("URL", encode_param_pairs(&p.params), p.value.as_str());
        }

        emit_multi(&mut props, StaticProp::Attach, j.attach(), value::encode_attachment);
        if let Some(v) = j.attendee() {
            for p in v {
                props.push("ATTENDEE", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_text_seq_multi(&mut props, StaticProp::Categories, j.categories());
        emit_text_multi(&mut props, StaticProp::Comment, j.comment());
        emit_text_multi(&mut props, StaticProp::Contact, j.contact());
        emit_text_multi(&mut props, StaticProp::Description, j.description());
        emit_multi(&mut props, StaticProp::ExDate, j.exdate(), value::encode_date_time_or_date);
        if let Some(v) = j.related_to() {
            for p in v {
                props.push("RELATED-TO", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_multi(&mut props, StaticProp::RRule, j.rrule(), value::encode_rrule);
        emit_multi(&mut props, StaticProp::RequestStatus, j.request_status(), value::encode_request_status);
    }

    props.flush_into(w);

    for p in j.participants() {
        write_participant(w, p);
    }
    for l in j.locations() {
        write_location(w, l);
    }
    for r in j.resource_components() {
        write_resource(w, r);
    }

    w.end("VJOURNAL");
}

// ============================================================================
// FreeBusy
// ============================================================================

pub(crate) fn write_freebusy(w: &mut Writer, f: &FreeBusy) {
    w.begin("VFREEBUSY");

    let mut props = Props::new(w.opts);
    emit(&mut props, StaticProp::DtStamp, f.dtstamp(), value::encode_datetime_utc);
    props.push("UID", encode_param_pairs(&f.uid().params), f.uid().value.as_str());

    if w.opts.include_optional_properties {
        if let Some(p) = f.contact() {
            emit_text(&mut props, StaticProp::Comment, p);
        }
        if let Some(p) = f.dtstart() {
            emit(&mut props, StaticProp::DtStart, p, value::encode_date_time_or_date);
        }
        if let Some(p) = f.dtend() {
            emit(&mut props, StaticProp::DtEnd, p, value::encode_date_time_or_date);
        }
        if let Some(p) = f.organizer() {
            props.push("ORGANIZER", encode_param_pairs(&p.params), p.value.as_str());
        }
        if let Some(p) = f.url() {
            props.push("URL", encode_param_pairs(&p.params), p.value.as_str());
        }

        if let Some(v) = f.attendee() {
            for p in v {
                props.push("ATTENDEE", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_text_multi(&mut props, StaticProp::Comment, f.comment());
        emit_multi(&mut props, StaticProp::FreeBusy, f.freebusy(), |periods| {
            periods.iter().map(value::encode_period).collect::<Vec<_>>().join(",")
        });
        emit_multi(&mut props, StaticProp::RequestStatus, f.request_status(), value::encode_request_status);
    }

    props.flush_into(w);

    for p in f.participants() {
        write_participant(w, p);
    }
    for l in f.locations() {
        write_location(w, l);
    }
    for r in f.resource_components() {
        write_resource(w, r);
    }

    w.end("VFREEBUSY");
}

// ============================================================================
// TimeZone / TzRule
// ============================================================================

pub(crate) fn write_timezone(w: &mut Writer, tz: &TimeZone) {
    w.begin("VTIMEZONE");

    let mut props = Props::new(w.opts);
    props.push("TZID", encode_param_pairs(&tz.tz_id().params), tz.tz_id().value.as_str());

    if w.opts.include_optional_properties {
        if let Some(p) = tz.last_modified() {
            emit(&mut props, StaticProp::LastModified, p, value::encode_datetime_utc);
        }
        if let Some(p) = tz.tz_url() {
            props.push("TZURL", encode_param_pairs(&p.params), p.value.as_str());
        }
    }

    props.flush_into(w);

    for rule in tz.rules() {
        write_tzrule(w, rule);
    }

    w.end("VTIMEZONE");
}

pub(crate) fn write_tzrule(w: &mut Writer, r: &TzRule) {
    let kind = match r.kind() {
        TzRuleKind::Standard => "STANDARD",
        TzRuleKind::Daylight => "DAYLIGHT",
    };
    w.begin(kind);

    let mut props = Props::new(w.opts);
    emit(&mut props, StaticProp::DtStart, r.dtstart(), value::encode_date_time_or_date);
    emit(&mut props, StaticProp::TzOffsetTo, r.tz_offset_to(), value::encode_utc_offset);
    emit(&mut props, StaticProp::TzOffsetFrom, r.tz_offset_from(), value::encode_utc_offset);

    emit_text_multi(&mut props, StaticProp::Comment, r.comment());
    emit_multi(&mut props, StaticProp::RDate, r.rdate(), value::encode_rdate_seq);
    emit_multi(&mut props, StaticProp::RRule, r.rrule(), value::encode_rrule);
    emit_text_multi(&mut props, StaticProp::TzName, r.tz_name());

    props.flush_into(w);

    w.end(kind);
}

// ============================================================================
// Alarm
// ============================================================================

fn write_alarm(w: &mut Writer, a: &Alarm) {
    match a {
        Alarm::Audio(a) => write_audio_alarm(w, a),
        Alarm::Display(a) => write_display_alarm(w, a),
        Alarm::Email(a) => write_email_alarm(w, a),
        Alarm::Other(a) => write_other_alarm(w, a),
    }
}

fn write_audio_alarm(w: &mut Writer, a: &AudioAlarm) {
    w.begin("VALARM");

    let mut props = Props::new(w.opts);
    props.push("ACTION", Vec::new(), "AUDIO");
    emit(&mut props, StaticProp::Trigger, a.trigger(), value::encode_trigger_value);

    if w.opts.include_optional_properties {
        if let Some(p) = a.attach() {
            props.push("ATTACH", encode_param_pairs(&p.params), &value::encode_attachment(&p.value));
        }
        if let Some(p) = a.duration() {
            emit(&mut props, StaticProp::Duration, p, value::encode_signed_duration);
        }
        if let Some(p) = a.repeat() {
            emit(&mut props, StaticProp::Repeat, p, |v| v.to_string());
        }
        if let Some(p) = a.acknowledged() {
            emit(&mut props, StaticProp::Acknowledged, p, value::encode_datetime_utc);
        }
    }

    props.flush_into(w);
    w.end("VALARM");
}

fn write_display_alarm(w: &mut Writer, a: &DisplayAlarm) {
    w.begin("VALARM");

    let mut props = Props::new(w.opts);
    props.push("ACTION", Vec::new(), "DISPLAY");
    emit(&mut props, StaticProp::Trigger, a.trigger(), value::encode_trigger_value);
    emit_text(&mut props, StaticProp::Description, a.description());

    if w.opts.include_optional_properties {
        if let Some(p) = a.duration() {
            emit(&mut props, StaticProp::Duration, p, value::encode_signed_duration);
        }
        if let Some(p) = a.repeat() {
            emit(&mut props, StaticProp::Repeat, p, |v| v.to_string());
        }
        if let Some(p) = a.acknowledged() {
            emit(&mut props, StaticProp::Acknowledged, p, value::encode_datetime_utc);
        }
    }

    props.flush_into(w);
    w.end("VALARM");
}

fn write_email_alarm(w: &mut Writer, a: &EmailAlarm) {
    w.begin("VALARM");

    let mut props = Props::new(w.opts);
    props.push("ACTION", Vec::new(), "EMAIL");
    emit(&mut props, StaticProp::Trigger, a.trigger(), value::encode_trigger_value);
    emit_text(&mut props, StaticProp::Description, a.description());
    emit_text(&mut props, StaticProp::Summary, a.summary());

    if let Some(v) = a.attendee() {
        for p in v {
            props.push("ATTENDEE", encode_param_pairs(&p.params), p.value.as_str());
        }
    }

    if w.opts.include_optional_properties {
        if let Some(p) = a.duration() {
            emit(&mut props, StaticProp::Duration, p, value::encode_signed_duration);
        }
        if let Some(p) = a.repeat() {
            emit(&mut props, StaticProp::Repeat, p, |v| v.to_string());
        }
        if let Some(p) = a.acknowledged() {
            emit(&mut props, StaticProp::Acknowledged, p, value::encode_datetime_utc);
        }
        emit_multi(&mut props, StaticProp::Attach, a.attach(), value::encode_attachment);
    }

    props.flush_into(w);
    w.end("VALARM");
}

fn write_other_alarm(w: &mut Writer, a: &OtherAlarm) {
    w.begin("VALARM");

    let mut props = Props::new(w.opts);
    emit_text(&mut props, StaticProp::Action, a.action());
    emit(&mut props, StaticProp::Trigger, a.trigger(), value::encode_trigger_value);

    if w.opts.include_optional_properties {
        if let Some(p) = a.description() {
            emit_text(&mut props, StaticProp::Description, p);
        }
        if let Some(p) = a.summary() {
            emit_text(&mut props, StaticProp::Summary, p);
        }
        if let Some(p) = a.duration() {
            emit(&mut props, StaticProp::Duration, p, value::encode_signed_duration);
        }
        if let Some(p) = a.repeat() {
            emit(&mut props, StaticProp::Repeat, p, |v| v.to_string());
        }
        if let Some(p) = a.acknowledged() {
            emit(&mut props, StaticProp::Acknowledged, p, value::encode_datetime_utc);
        }
        if let Some(v) = a.attendee() {
            for p in v {
                props.push("ATTENDEE", encode_param_pairs(&p.params), p.value.as_str());
            }
        }
        emit_multi(&mut props, StaticProp::Attach, a.attach(), value::encode_attachment);
    }

    props.flush_into(w);
    w.end("VALARM");
}

// ============================================================================
// RFC 9073 components
// ============================================================================

fn write_participant(w: &mut Writer, p: &Participant) {
    w.begin("PARTICIPANT");

    let mut props = Props::new(w.opts);
    props.push("UID", encode_param_pairs(&p.uid().params), p.uid().value.as_str());
    emit(&mut props, StaticProp::ParticipantType, p.participant_type(), |v| value::encode_token_string(v, value::encode_participant_type));

    if w.opts.include_optional_properties {
        if let Some(v) = p.calendar_address() {
            props.push("CALENDAR-ADDRESS", encode_param_pairs(&v.params), v.value.as_str());
        }
        if let Some(v) = p.created() {
            emit(&mut props, StaticProp::Created, v, value::encode_datetime_utc);
        }
        if let Some(v) = p.description() {
            emit_text(&mut props, StaticProp::Description, v);
        }
        if let Some(v) = p.dtstamp() {
            emit(&mut props, StaticProp::DtStamp, v, value::encode_datetime_utc);
        }
        if let Some(v) = p.geo() {
            emit(&mut props, StaticProp::Geo, v, value::encode_geo);
        }
        if let Some(v) = p.last_modified() {
            emit(&mut props, StaticProp::LastModified, v, value::encode_datetime_utc);
        }
        if let Some(v) = p.priority() {
            emit(&mut props, StaticProp::Priority, v, |pr| (*pr as u8).to_string());
        }
        if let Some(v) = p.sequence() {
            emit(&mut props, StaticProp::Sequence, v, |s| s.to_string());
        }
        if let Some(v) = p.status() {
            emit(&mut props, StaticProp::Status, v, |s| value::encode_status(*s).to_string());
        }
        if let Some(v) = p.summary() {
            emit_text(&mut props, StaticProp::Summary, v);
        }
        if let Some(v) = p.url() {
            props.push("URL", encode_param_pairs(&v.params), v.value.as_str());
        }

        emit_multi(&mut props, StaticProp::Attach, p.attach(), value::encode_attachment);
        emit_text_seq_multi(&mut props, StaticProp::Categories, p.categories());
        emit_text_multi(&mut props, StaticProp::Comment, p.comment());
        emit_text_multi(&mut props, StaticProp::Contact, p.contact());
        emit_text_multi(&mut props, StaticProp::Location, p.location_prop());
        emit_multi(&mut props, StaticProp::RequestStatus, p.request_status(), value::encode_request_status);
        if let Some(v) = p.related_to() {
            for rp in v {
                props.push("RELATED-TO", encode_param_pairs(&rp.params), rp.value.as_str());
            }
        }
        emit_text_seq_multi(&mut props, StaticProp::Resources, p.resources());
        emit_styled_description(&mut props, p.styled_description());
        emit_structured_data(&mut props, p.structured_data());
    }

    props.flush_into(w);

    for l in p.locations() {
        write_location(w, l);
    }
    for r in p.resource_components() {
        write_resource(w, r);
    }

    w.end("PARTICIPANT");
}

fn write_location(w: &mut Writer, l: &LocationComponent) {
    w.begin("VLOCATION");

    let mut props = Props::new(w.opts);
    props.push("UID", encode_param_pairs(&l.uid().params), l.uid().value.as_str());

    if w.opts.include_optional_properties {
        if let Some(v) = l.description() {
            emit_text(&mut props, StaticProp::Description, v);
        }
        if let Some(v) = l.geo() {
            emit(&mut props, StaticProp::Geo, v, value::encode_geo);
        }
        if let Some(v) = l.name() {
            emit_text(&mut props, StaticProp::Name, v);
        }
        if let Some(v) = l.location_type() {
            emit_text(&mut props, StaticProp::LocationType, v);
        }
        if let Some(v) = l.url() {
            props.push("URL", encode_param_pairs(&v.params), v.value.as_str());
        }
        emit_structured_data(&mut props, l.structured_data());
    }

    props.flush_into(w);
    w.end("VLOCATION");
}

fn write_resource(w: &mut Writer, r: &ResourceComponent) {
    w.begin("VRESOURCE");

    let mut props = Props::new(w.opts);
    props.push("UID", encode_param_pairs(&r.uid().params), r.uid().value.as_str());

    if w.opts.include_optional_properties {
        if let Some(v) = r.description() {
            emit_text(&mut props, StaticProp::Description, v);
        }
        if let Some(v) = r.geo() {
            emit(&mut props, StaticProp::Geo, v, value::encode_geo);
        }
        if let Some(v) = r.name() {
            emit_text(&mut props, StaticProp::Name, v);
        }
        if let Some(v) = r.resource_type() {
            emit(&mut props, StaticProp::ResourceType, v, |t| value::encode_token_string(t, value::encode_resource_type));
        }
        emit_structured_data(&mut props, r.structured_data());
    }

    props.flush_into(w);
    w.end("VRESOURCE");
}

fn write_other_component(w: &mut Writer, o: &OtherComponent) {
    w.begin(&o.name);
    for c in &o.subcomponents {
        write_other_component(w, c);
    }
    w.end(&o.name);
}

/// Renders a [`Calendar`] to its RFC 5545 text form according to `options`.
pub fn serialize(calendar: &Calendar, options: &SerializeOptions) -> String {
    let mut w = Writer::new(options);
    write_calendar(&mut w, calendar);
    w.finish()
}
