//! Types for finite set values.

use std::{convert::Infallible, fmt, str::FromStr};

/// A token which may be a statically known value of type `T` or else an unknown value of type
/// `S`.
///
/// The principal use of this type is to allow finite enums to be extended with arbitrary values,
/// most commonly some unknown string which is permissible but statically unknowable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token<T, S> {
    /// A statically known value.
    Known(T),
    /// An unknown or vendor-defined value.
    Unknown(S),
}

impl<T: Default, S> Default for Token<T, S> {
    fn default() -> Self {
        Self::Known(Default::default())
    }
}

impl<T, S> FromStr for Token<T, S>
where
    T: FromStr,
    for<'a> &'a str: Into<S>,
{
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match T::from_str(s) {
            Ok(value) => Ok(Token::Known(value)),
            Err(_) => Ok(Token::Unknown(s.into())),
        }
    }
}

impl<T, S> Token<T, S> {
    /// Like [`FromStr`], but uses a fallible conversion for the unknown variant.
    pub fn try_from_str<'a>(s: &'a str) -> Result<Self, <&'a str as TryInto<S>>::Error>
    where
        T: FromStr,
        &'a str: TryInto<S>,
    {
        match T::from_str(s) {
            Ok(value) => Ok(Token::Known(value)),
            Err(_) => s.try_into().map(Token::Unknown),
        }
    }

    /// Maps the unknown value of a `Token`, leaving known values unchanged.
    pub fn map_unknown<U>(self, f: impl FnOnce(S) -> U) -> Token<T, U> {
        match self {
            Token::Known(t) => Token::Known(t),
            Token::Unknown(s) => Token::Unknown(f(s)),
        }
    }
}

impl<T: fmt::Display, S: fmt::Display> fmt::Display for Token<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Known(t) => fmt::Display::fmt(t, f),
            Token::Unknown(s) => fmt::Display::fmt(s, f),
        }
    }
}

