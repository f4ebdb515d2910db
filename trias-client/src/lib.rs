//! TRIAS stop-event client for opentransportdata.swiss.
//!
//! This crate answers: "what is arriving at or departing from this stop
//! around this time?" against the Swiss national TRIAS 2020 endpoint.
//! It builds a `StopEventRequest` document, POSTs it with an API key, and
//! parses the `StopEventResponse` XML into typed data.
//!
//! Key characteristics of TRIAS:
//! - Requests and responses are XML (`http://www.vdv.de/trias`, version 1.1)
//!   with SIRI elements mixed in under the `siri:` prefix
//! - Timestamps on the wire are `YYYY-MM-DDTHH:MM:SSZ` strings; this crate
//!   keeps them as strings and parses to calendar times only on demand
//! - Service-level failures arrive as an `ErrorMessage` inside an otherwise
//!   well-formed response, not as HTTP errors

pub mod client;
pub mod error;
pub mod request;
pub mod schema;

mod xml;
