//! A [`winnow`]-based RFC 5545 parser implementation.
//!
//! Parsing proceeds in four layers, matching the layering of the format itself:
//! [`escaped`] unfolds physical lines and decodes `TEXT` escape sequences; [`property`] lexes a
//! logical line into a name, parameter list, and raw value; [`component`] drives the
//! `BEGIN`/`END` state machine that assembles properties into a [`component::RawComponent`]
//! tree; [`reduce`] maps that raw tree onto the typed component model in
//! [`crate::model::component`] and exposes the crate's [`reduce::parse`]/[`reduce::parse_multiple`]
//! entry points. [`primitive`], [`parameter`], and [`rrule`] hold the value-level parsers used by
//! [`property`] and [`reduce`].

use winnow::{
    Parser,
    ascii::Caseless,
    error::ParserError,
    stream::{AsBytes, Compare, Stream, StreamIsPartial},
    token::take_until,
};

use error::CalendarParseError;

use crate::parser::escaped::split_fold_prefix;

pub mod component;
pub mod config;
pub mod error;
pub mod escaped;
pub mod parameter;
pub mod primitive;
pub mod property;
pub mod reduce;
pub mod rrule;

/// The input stream type accepted by the parsers in [`crate::parser`].
///
/// All of this crate's parsing operates over `&str`: iCalendar content is required to be UTF-8
/// text (RFC 5545 §3.1), so there is no benefit to parsing over raw bytes, and keeping a single
/// concrete stream type avoids threading a generic parameter through every parser and model type.
pub trait InputStream
where
    Self: StreamIsPartial + Stream + Compare<char> + AsRef<[u8]>,
    for<'a> Self: Compare<Caseless<&'a str>> + Compare<&'a str>,
{
    type Str: Clone + AsRef<str> + Into<String> + Into<Box<str>>;

    fn try_into_str(slice: &Self::Slice) -> Result<Self::Str, CalendarParseError<Self::Slice>>;
    fn try_into_string(slice: &Self::Slice) -> Result<String, CalendarParseError<Self::Slice>>;
    fn as_bytes(slice: &Self::Slice) -> &[u8];
    fn str_from_static_str(s: &'static str) -> Self::Str;

    /// Removes as many line folds from the prefix of `self` as possible, and returns the number of
    /// bytes removed (this will always be a multiple of three).
    fn strip_line_fold_prefix(&mut self) -> usize;

    /// Returns the longest contiguous prefix of `self`. A slice is contiguous if it does not
    /// contain line folds or newlines. If the input does not contain the sequence `\r\n` anywhere,
    /// the entire input is returned as a slice.
    fn next_contiguous_slice<E>(input: &mut Self) -> Result<Self::Slice, E>
    where
        E: ParserError<Self>;
}

impl InputStream for &str {
    type Str = Self;

    #[inline(always)]
    fn try_into_str(slice: &Self::Slice) -> Result<Self::Str, CalendarParseError<Self::Slice>> {
        Ok(slice)
    }

    #[inline(always)]
    fn try_into_string(slice: &Self::Slice) -> Result<String, CalendarParseError<Self::Slice>> {
        Ok(slice.to_string())
    }

    #[inline(always)]
    fn as_bytes(slice: &Self::Slice) -> &[u8] {
        slice.as_bytes()
    }

    #[inline(always)]
    fn str_from_static_str(s: &'static str) -> Self::Str {
        s
    }

    #[inline(always)]
    fn strip_line_fold_prefix(&mut self) -> usize {
        let (prefix, tail) = split_fold_prefix(self.as_bytes());
        *self = str::from_utf8(tail).expect("tail represents a valid UTF-8 string slice");
        prefix.len()
    }

    #[inline(always)]
    fn next_contiguous_slice<E>(input: &mut Self) -> Result<Self::Slice, E>
    where
        E: ParserError<Self>,
    {
        let _ = input.strip_line_fold_prefix();

        match take_until(0.., "\r\n").parse_next(input) {
            Ok(slice) => Ok(slice),
            Err(()) => Ok(input.finish()),
        }
    }
}
