//! A parser, serializer, validator, and timezone synthesizer for iCalendar (RFC 5545).
//!
//! This crate builds on [`calendar_types`] and [`rfc5545_types`] for the underlying date/time and
//! string primitives, and adds:
//!
//! - **A data model** ([`model`]): [`Calendar`](model::component::Calendar) and its subcomponents
//!   ([`Event`](model::component::Event), [`Todo`](model::component::Todo),
//!   [`Journal`](model::component::Journal), [`FreeBusy`](model::component::FreeBusy),
//!   [`TimeZone`](model::component::TimeZone), [`Alarm`](model::component::Alarm)), plus the RFC
//!   9073 structured components ([`Participant`](model::component::Participant),
//!   [`LocationComponent`](model::component::LocationComponent),
//!   [`ResourceComponent`](model::component::ResourceComponent)).
//! - **A [`winnow`]-based parser** ([`parser`]): line unfolding and text unescaping
//!   ([`parser::escaped`]), content-line lexing ([`parser::property`]), the `BEGIN`/`END`
//!   component state machine ([`parser::component`]), and the reduction pass from raw component
//!   trees into the typed model, exposed as [`parser::reduce::parse`]/[`parser::reduce::parse_multiple`]
//!   ([`parser::reduce`]).
//! - **A validator** ([`validate`]): structural and semantic checks over a parsed [`Calendar`],
//!   surfaced as the `Malformed*Error` flag sets already attached to each component type.
//! - **A timezone synthesizer** ([`timezone`]): builds a [`TimeZone`](model::component::TimeZone)
//!   component for an IANA timezone identifier over a given date range, using [`chrono_tz`] as
//!   the source of truth for transition rules.
//!
//! Errors are represented as plain enums (see [`parser::error::CalendarParseError`]) rather than
//! via `anyhow`/`eyre`, matching the rest of the `calendar-types`/`rfc5545-types` family.
//! Diagnostic output uses [`tracing`] spans and events rather than `println!`.

pub mod model;
pub mod parser;
pub mod serializer;
pub mod timezone;
pub mod validate;
