//! TRIAS response document mapping.
//!
//! [`parse`] turns raw response bytes into the typed model in [`types`].
//! The envelope (`Trias/ServiceDelivery/DeliveryPayload/StopEventResponse`)
//! is required; everything inside it is optional and missing elements fall
//! back to empty defaults, matching how the service actually omits fields.
//! Element matching ignores namespace prefixes, so `siri:`-prefixed and
//! default-namespace variants of the same element are interchangeable.

mod parse;
mod types;

pub use parse::parse;
pub use types::{
    CallAtStop, ErrorMessage, LocalizedText, Mode, Service, ServiceAttribute, ServiceDelivery,
    StopEvent, StopEventResponse, StopEventResult, Timetable, TriasResponse, TriasTime,
};
