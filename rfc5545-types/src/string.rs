//! String data model types for RFC 5545.

use std::hash::{Hash, Hasher};

use dizzy::DstNewtype;

/// An error indicating that a string is not valid `paramtext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidParamTextError {
    /// The index of the first invalid character.
    pub index: usize,
    /// The invalid character.
    pub c: char,
}

/// A `paramtext` value as defined by RFC 5545 ยง3.1.
///
/// ```text
/// paramtext = *SAFE-CHAR
/// ```
///
/// This is the unquoted form of a property parameter value. The quoted form (`QSAFE-CHAR`) allows
/// additional characters like `:`, `;`, and `,`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, DstNewtype)]
#[dizzy(invariant = ParamText::str_is_paramtext, error = InvalidParamTextError)]
#[dizzy(constructor = pub new)]
#[dizzy(getter = pub const as_str)]
#[dizzy(derive(Debug, CloneBoxed, IntoBoxed))]
#[dizzy(owned = pub ParamTextBuf(String))]
#[dizzy(derive_owned(Debug, IntoBoxed))]
#[repr(transparent)]
pub struct ParamText(str);

impl ParamText {
    fn str_is_paramtext(s: &str) -> Result<(), InvalidParamTextError> {
        for (index, c) in s.chars().enumerate() {
            if !char_is_safe_char(c) {
                return Err(InvalidParamTextError { index, c });
            }
        }
        Ok(())
    }
}

/// Returns `true` iff `c` is a `SAFE-CHAR` as defined by RFC 5545 ยง3.1.
///
/// ```text
/// SAFE-CHAR = WSP / %x21 / %x23-2B / %x2D-39 / %x3C-7E / NON-US-ASCII
/// ```
///
/// NB: RFC 5545 doesn't define the `WSP` rule in its grammar, as it is defined by RFC 5234 to be
/// either the literal space (U+0020) or the horizontal tab (U+0009).
const fn char_is_safe_char(c: char) -> bool {
    match c {
        '\t' | ' ' | '!' | '#'..='+' | '-'..='9' | '<'..='~' => true,
        _ => !c.is_ascii(),
    }
}

// ============================================================================
// Text
// ============================================================================

/// An error indicating that a string contains a disallowed control character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCharError {
    pub index: usize,
    pub c: char,
}

impl InvalidCharError {
    pub fn from_char_index((index, c): (usize, char)) -> Self {
        Self { index, c }
    }
}

/// A `TEXT` value (RFC 5545 §3.3.11), already unescaped. Any character is permitted other than
/// ASCII control characters (besides HTAB and LF).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, DstNewtype)]
#[dizzy(invariant = Text::str_is_text, error = InvalidCharError)]
#[dizzy(constructor = pub new)]
#[dizzy(getter = pub const as_str)]
#[dizzy(derive(Debug, CloneBoxed, IntoBoxed))]
#[dizzy(owned = pub TextBuf(String))]
#[dizzy(derive_owned(Debug, IntoBoxed))]
#[repr(transparent)]
pub struct Text(str);

impl Text {
    #[inline(always)]
    const fn char_is_valid(c: char) -> bool {
        !c.is_ascii_control() || c == '\t' || c == '\n'
    }

    fn str_is_text(s: &str) -> Result<(), InvalidCharError> {
        match s.char_indices().find(|(_, c)| !Self::char_is_valid(*c)) {
            Some(c) => Err(InvalidCharError::from_char_index(c)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Name
// ============================================================================

/// Whether a [`Name`] is a vendor-specific `X-name` or a plain `iana-token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Iana,
    X,
}

/// An error indicating that a string is not a valid `iana-token` or `x-name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNameError {
    pub index: usize,
    pub c: char,
}

/// An `iana-token` or `x-name` (RFC 5545 §3.1): `1*(ALPHA / DIGIT / "-")`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, DstNewtype)]
#[dizzy(invariant = Name::str_is_name, error = InvalidNameError)]
#[dizzy(constructor = pub new)]
#[dizzy(getter = pub const as_str)]
#[dizzy(derive(Debug, CloneBoxed, IntoBoxed))]
#[repr(transparent)]
pub struct Name(str);

impl Name {
    fn str_is_name(s: &str) -> Result<(), InvalidNameError> {
        if s.is_empty() {
            return Err(InvalidNameError { index: 0, c: '\0' });
        }

        match s
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            Some((index, c)) => Err(InvalidNameError { index, c }),
            None => Ok(()),
        }
    }

    /// Returns [`NameKind::X`] iff this name begins with the case-insensitive prefix `X-`.
    pub fn kind(&self) -> NameKind {
        if self.as_str().len() >= 2 && self.as_str()[..2].eq_ignore_ascii_case("x-") {
            NameKind::X
        } else {
            NameKind::Iana
        }
    }
}

// ============================================================================
// CaselessStr
// ============================================================================

/// A borrowed or boxed string compared and hashed ASCII-case-insensitively, used to key unknown
/// parameters and properties by name.
#[derive(Debug)]
#[repr(transparent)]
pub struct CaselessStr(str);

impl CaselessStr {
    /// Views `s` as a `CaselessStr` without copying.
    pub fn new(s: &str) -> &Self {
        // SAFETY: CaselessStr is repr(transparent) over str.
        unsafe { &*(s as *const str as *const Self) }
    }

    /// Takes ownership of a boxed string as a boxed `CaselessStr`.
    pub fn from_box_str(s: Box<str>) -> Box<Self> {
        // SAFETY: CaselessStr is repr(transparent) over str.
        unsafe { Box::from_raw(Box::into_raw(s) as *mut Self) }
    }

    pub const fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for CaselessStr {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for CaselessStr {}

impl Hash for CaselessStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            b.to_ascii_uppercase().hash(state);
        }
    }
}

impl Clone for Box<CaselessStr> {
    fn clone(&self) -> Self {
        CaselessStr::from_box_str(self.as_str().into())
    }
}

