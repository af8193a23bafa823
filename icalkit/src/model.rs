//! The iCalendar data model.
//!
//! [`component`] holds the component tree ([`Calendar`](component::Calendar) and its
//! subcomponents); [`property`] holds the per-property value/parameter pairs that populate it;
//! [`parameter`] and [`primitive`] hold the parameter and value types those properties are built
//! from; [`string`], [`css`], and [`rrule`] hold supporting newtypes reused across several
//! properties.

pub mod component;
pub mod css;
pub mod parameter;
pub mod primitive;
pub mod property;
pub mod rrule;
pub mod string;
