//! The `BEGIN`/`END` component state machine (RFC 5545 §3.6).
//!
//! ```text
//! component = "BEGIN" ":" name CRLF
//!             1*contentline
//!             "END" ":" name CRLF
//! ```
//!
//! This module assembles a flat stream of [`ContentLine`]s into the tree shape that RFC 5545
//! components actually have: a `VCALENDAR` containing `VEVENT`/`VTODO`/etc., which may themselves
//! contain `VALARM`, and `VTIMEZONE` containing `STANDARD`/`DAYLIGHT`. It does not know which
//! properties belong on which component, or what any of the values mean; mapping the properties
//! on each [`RawComponent`] onto the concrete structs in [`crate::model::component`] is a
//! separate pass in [`crate::parser::reduce`].

use winnow::{
    Parser,
    ascii::Caseless,
    combinator::{alt, not, peek, repeat},
    error::{FromExternalError, ParserError},
    stream::AsChar,
};

use crate::parser::{
    InputStream,
    error::CalendarParseError,
    property::{ContentLine, content_line},
};

/// A component name, as it appears after `BEGIN:`/`END:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentName {
    VCalendar,
    VEvent,
    VTodo,
    VJournal,
    VFreeBusy,
    VTimeZone,
    VAlarm,
    Standard,
    Daylight,
    Participant,
    VLocation,
    VResource,
    VAvailability,
    Available,
    Unknown(String),
}

impl ComponentName {
    fn from_str(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::VCalendar,
            "VEVENT" => Self::VEvent,
            "VTODO" => Self::VTodo,
            "VJOURNAL" => Self::VJournal,
            "VFREEBUSY" => Self::VFreeBusy,
            "VTIMEZONE" => Self::VTimeZone,
            "VALARM" => Self::VAlarm,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            "PARTICIPANT" => Self::Participant,
            "VLOCATION" => Self::VLocation,
            "VRESOURCE" => Self::VResource,
            "VAVAILABILITY" => Self::VAvailability,
            "AVAILABLE" => Self::Available,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

/// An unreduced component: a name, the content lines that are direct properties of it, and its
/// nested subcomponents in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComponent<S> {
    pub name: ComponentName,
    pub properties: Vec<ContentLine<S>>,
    pub children: Vec<RawComponent<S>>,
}

fn eol<I, E>(input: &mut I) -> Result<(), E>
where
    I: InputStream,
    E: ParserError<I>,
{
    "\r\n".void().parse_next(input)
}

fn begin_line<I, E>(input: &mut I) -> Result<I::Str, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    (Caseless("BEGIN:"), component_name_slice, eol)
        .map(|(_, name, _)| name)
        .parse_next(input)
}

fn end_line<I, E>(input: &mut I) -> Result<I::Str, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    (Caseless("END:"), component_name_slice, eol)
        .map(|(_, name, _)| name)
        .parse_next(input)
}

fn component_name_slice<I, E>(input: &mut I) -> Result<I::Str, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    use winnow::token::take_till;

    let slice = take_till(1.., |t: I::Token| t.as_char() == '\r').parse_next(input)?;
    I::try_into_str(&slice).map_err(|e| E::from_external_error(input, e.into()))
}

/// Parses a single [`RawComponent`], including its `BEGIN`/`END` lines and everything between
/// them.
pub fn component<I, E>(input: &mut I) -> Result<RawComponent<I::Str>, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let opening = begin_line.parse_next(input)?;
    let name = ComponentName::from_str(opening.as_ref());

    let parsed_children: Vec<Child<I::Str>> = repeat(
        0..,
        alt((
            component.map(Child::Component),
            (
                not(peek(Caseless("END:"))),
                content_line,
                eol,
            )
                .map(|(_, line, ())| Child::Property(line)),
        )),
    )
    .parse_next(input)?;

    let closing = end_line
        .parse_next(input)
        .map_err(|_| E::from_external_error(input, CalendarParseError::UnterminatedComponent(name.clone())))?;
    let closing_name = ComponentName::from_str(closing.as_ref());

    if name != closing_name {
        return Err(E::from_external_error(
            input,
            CalendarParseError::MismatchedComponentName {
                begin: name,
                end: closing_name,
            }
            .into(),
        ));
    }

    let mut properties = Vec::new();
    let mut children = Vec::new();
    for child in parsed_children {
        match child {
            Child::Component(c) => children.push(c),
            Child::Property(p) => properties.push(p),
        }
    }

    Ok(RawComponent {
        name,
        properties,
        children,
    })
}

enum Child<S> {
    Component(RawComponent<S>),
    Property(ContentLine<S>),
}

/// Parses every top-level `VCALENDAR` component in `input`.
pub fn calendars<I, E>(input: &mut I) -> Result<Vec<RawComponent<I::Str>>, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    repeat(0.., component).parse_next(input)
}
