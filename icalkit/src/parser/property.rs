//! Content lines (RFC 5545 §3.1).
//!
//! ```text
//! contentline = name *(";" param) ":" value CRLF
//! ```
//!
//! This module lexes a single content line into its name, its parameter list, and the raw,
//! still-escaped text of its value. Decoding that raw value into a concrete model type is
//! name-dependent (and needs the component it occurs in, for properties like `ATTACH` whose shape
//! depends on a parameter) and happens two layers up, in [`crate::parser::reduce`]. Callers are
//! expected to have already unfolded the physical lines that make up this logical line, e.g. via
//! [`crate::parser::escaped::unfold`].

use winnow::{
    Parser,
    combinator::{preceded, repeat},
    error::{FromExternalError, ParserError},
    stream::AsChar,
    token::take_till,
};

use crate::model::parameter::Params;
use crate::model::property::StaticProp;
use crate::model::string::Name;
use crate::parser::{
    InputStream,
    error::CalendarParseError,
    parameter::parameter,
    primitive::name,
};

/// A property name: either one of the statically known properties, or an `iana-token`/`x-name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropName<S> {
    Known(StaticProp),
    Unknown(S),
}

/// Parses a [`PropName`].
pub fn prop_name<I, E>(input: &mut I) -> Result<PropName<Box<Name>>, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let name = name.parse_next(input)?;
    match name.as_str().parse::<StaticProp>() {
        Ok(known) => Ok(PropName::Known(known)),
        Err(_) => Ok(PropName::Unknown(name)),
    }
}

/// Parses a `*(";" param)` sequence into a [`Params`], threading duplicate-parameter handling
/// through the active [`Config`](crate::parser::config::Config).
pub fn params<I, E>(input: &mut I) -> Result<Params, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let parsed: Vec<_> = repeat(0.., preceded(';', parameter)).parse_next(input)?;

    let mut params = Params::default();
    for param in parsed {
        match param {
            crate::model::parameter::Param::Known(known) => params.insert_known(known),
            crate::model::parameter::Param::Unknown(unknown) => {
                let key = crate::model::string::CaselessStr::from_box_str(
                    unknown.name.as_str().into(),
                );
                params.insert_unknown_param(key, unknown.value.values);
            }
        }
    }

    Ok(params)
}

/// The lexed form of a single content line: a name, its parameters, and its raw (still escaped,
/// un-typed) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine<S> {
    pub name: PropName<Box<Name>>,
    pub params: Params,
    pub raw_value: S,
}

/// Parses a single content line, stopping just before the trailing CRLF. Callers are expected to
/// have already unfolded the physical lines that make up this logical line (see
/// [`crate::parser::escaped`]).
pub fn content_line<I, E>(input: &mut I) -> Result<ContentLine<I::Str>, E>
where
    I: InputStream,
    I::Token: AsChar + Clone,
    E: ParserError<I> + FromExternalError<I, CalendarParseError<I::Slice>>,
{
    let name = prop_name.parse_next(input)?;
    let params = params.parse_next(input)?;
    ':'.parse_next(input)?;

    let value_slice = take_till(0.., |t: I::Token| t.as_char() == '\r').parse_next(input)?;
    let raw_value =
        I::try_into_str(&value_slice).map_err(|e| E::from_external_error(input, e.into()))?;

    Ok(ContentLine {
        name,
        params,
        raw_value,
    })
}
