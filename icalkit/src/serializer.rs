//! Rendering a [`Calendar`](crate::model::component::Calendar) back to RFC 5545 text.

pub mod component;
pub mod options;
pub mod value;

pub use options::{LineEnding, SerializeOptions};

use crate::model::component::Calendar;

/// Serializes `calendar` to RFC 5545 text according to `options`.
///
/// If `options.validate_before` is set, the calendar is validated first and a
/// [`crate::validate::Invalid`] error is returned in place of text on anything worse than
/// warnings.
pub fn serialize(calendar: &Calendar, options: &SerializeOptions) -> Result<String, crate::validate::Invalid> {
    if options.validate_before {
        if let Some(invalid) = crate::validate::validate(calendar).into_invalid() {
            return Err(invalid);
        }
    }

    let mut w = component::Writer::new(options);
    component::write_calendar(&mut w, calendar);
    Ok(w.finish())
}
