//! Serializer configuration.

/// The line ending written between content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `CRLF`, as required by RFC 5545 §3.1 for network transmission.
    Crlf,
    /// A bare `LF`, for outputs that are never transmitted over the wire (e.g. files read back
    /// by a local application).
    Lf,
}

impl LineEnding {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::Crlf
    }
}

/// Options controlling how a [`Calendar`](crate::model::component::Calendar) is rendered back to
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// The maximum octet length of a folded physical line, per RFC 5545 §3.1. The default of 75
    /// matches the recommendation in the RFC.
    pub line_length: usize,
    /// Emit properties in ascending name order rather than the order they appear on the
    /// in-memory component.
    pub sort_properties: bool,
    /// Emit parameters in ascending name order rather than insertion order.
    pub sort_parameters: bool,
    /// Emit only the properties a component kind requires (see the table in
    /// [`crate::validate`]) instead of every populated property.
    pub include_optional_properties: bool,
    /// The line ending written after each content line.
    pub line_ending: LineEnding,
    /// Emit `VTIMEZONE` children of a `VCALENDAR` before any other children, matching the
    /// ordering Google Calendar expects.
    pub timezones_first: bool,
    /// Run [`crate::validate::validate`] before emitting text, returning its result as an error
    /// instead of serializing anything worse than warnings.
    pub validate_before: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            line_length: 75,
            sort_properties: false,
            sort_parameters: false,
            include_optional_properties: true,
            line_ending: LineEnding::Crlf,
            timezones_first: false,
            validate_before: false,
        }
    }
}
