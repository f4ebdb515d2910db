//! Stop-event request construction and XML serialization.
//!
//! A [`StopEventRequest`] describes one query ("departures from stop X
//! around time T"); [`StopEventRequest::to_xml`] renders it as a complete
//! `Trias` document from a fixed template. The template carries the
//! namespace preamble and a fixed `RequestorRef`, so serialization is pure
//! string assembly with no document builder involved.

use chrono::Utc;

/// Format for every timestamp this crate puts on the wire.
///
/// The service interprets `DepArrTime` in this shape as local wall-clock
/// time, `Z` suffix notwithstanding.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Fixed requestor identifier sent in `siri:RequestorRef`.
const REQUESTOR_REF: &str = "trias-client";

/// Whether a query asks for arrivals or departures at the stop.
///
/// # Examples
///
/// ```
/// use trias_client::request::EventType;
///
/// assert_eq!(EventType::Departure.as_str(), "departure");
/// assert_eq!(EventType::Arrival.to_string(), "arrival");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Departure,
    Arrival,
}

impl EventType {
    /// Returns the wire representation of this event type.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Departure => "departure",
            EventType::Arrival => "arrival",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `Params` block of a stop-event query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEventParams {
    /// How many stop events to return
    pub number_of_results: u32,
    /// Arrivals or departures
    pub event_type: EventType,
    /// Include the calls the vehicle made before the queried stop
    pub include_previous_calls: bool,
    /// Include the calls the vehicle will make after the queried stop
    pub include_onward_calls: bool,
    /// Include realtime estimates alongside timetabled times
    pub include_realtime_data: bool,
}

/// A stop-event query, ready to serialize.
///
/// All fields are caller-controlled. Values are inserted into the XML
/// verbatim, so parameter values must not contain XML metacharacters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEventRequest {
    /// Request timestamp. Informational only: the client overwrites it with
    /// the wall-clock time at send time.
    pub timestamp: String,
    /// Identifier of the stop to query (e.g. `"8503000"` for Zürich HB)
    pub stop_point_ref: String,
    /// Target time for the query, formatted per [`TIMESTAMP_FORMAT`]
    pub dep_arr_time: String,
    /// Query parameters
    pub params: StopEventParams,
}

impl StopEventRequest {
    /// Create a request from its parts. No validation beyond assignment.
    pub fn new(
        timestamp: impl Into<String>,
        stop_point_ref: impl Into<String>,
        dep_arr_time: impl Into<String>,
        params: StopEventParams,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            stop_point_ref: stop_point_ref.into(),
            dep_arr_time: dep_arr_time.into(),
            params,
        }
    }

    /// Template for the most common query: the next departure, right now.
    ///
    /// `dep_arr_time` is the current time in Europe/Zurich (the service
    /// reads it as local time), one result, no previous or onward calls,
    /// realtime data included. `stop_point_ref` is left empty and must be
    /// filled in before sending.
    ///
    /// # Examples
    ///
    /// ```
    /// use trias_client::request::StopEventRequest;
    ///
    /// let mut request = StopEventRequest::departures_now();
    /// assert!(request.stop_point_ref.is_empty());
    /// request.stop_point_ref = "8503000".into();
    /// ```
    pub fn departures_now() -> Self {
        let now = Utc::now().with_timezone(&chrono_tz::Europe::Zurich);
        let dep_arr_time = now.format(TIMESTAMP_FORMAT).to_string();

        Self::new(
            "",
            "",
            dep_arr_time,
            StopEventParams {
                number_of_results: 1,
                event_type: EventType::Departure,
                include_previous_calls: false,
                include_onward_calls: false,
                include_realtime_data: true,
            },
        )
    }

    /// Render the complete `StopEventRequest` document.
    ///
    /// Field values are inserted without escaping.
    pub fn to_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Trias version="1.1" xmlns="http://www.vdv.de/trias" xmlns:siri="http://www.siri.org.uk/siri" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<ServiceRequest>
<siri:RequestTimestamp>{timestamp}</siri:RequestTimestamp>
<siri:RequestorRef>{requestor}</siri:RequestorRef>
<RequestPayload>
<StopEventRequest>
<Location>
<LocationRef>
<StopPointRef>{stop_point_ref}</StopPointRef>
</LocationRef>
<DepArrTime>{dep_arr_time}</DepArrTime>
</Location>
<Params>
<NumberOfResults>{number_of_results}</NumberOfResults>
<StopEventType>{event_type}</StopEventType>
<IncludePreviousCalls>{previous}</IncludePreviousCalls>
<IncludeOnwardCalls>{onward}</IncludeOnwardCalls>
<IncludeRealtimeData>{realtime}</IncludeRealtimeData>
</Params>
</StopEventRequest>
</RequestPayload>
</ServiceRequest>
</Trias>"#,
            timestamp = self.timestamp,
            requestor = REQUESTOR_REF,
            stop_point_ref = self.stop_point_ref,
            dep_arr_time = self.dep_arr_time,
            number_of_results = self.params.number_of_results,
            event_type = self.params.event_type,
            previous = self.params.include_previous_calls,
            onward = self.params.include_onward_calls,
            realtime = self.params.include_realtime_data,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn params(n: u32) -> StopEventParams {
        StopEventParams {
            number_of_results: n,
            event_type: EventType::Departure,
            include_previous_calls: false,
            include_onward_calls: false,
            include_realtime_data: false,
        }
    }

    #[test]
    fn default_template_settings() {
        let request = StopEventRequest::departures_now();

        assert_eq!(request.params.number_of_results, 1);
        assert_eq!(request.params.event_type, EventType::Departure);
        assert!(!request.params.include_previous_calls);
        assert!(!request.params.include_onward_calls);
        assert!(request.params.include_realtime_data);
        assert!(request.stop_point_ref.is_empty());
        assert!(!request.dep_arr_time.is_empty());
    }

    #[test]
    fn default_template_time_is_well_formed() {
        let request = StopEventRequest::departures_now();

        assert!(NaiveDateTime::parse_from_str(&request.dep_arr_time, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn serializes_field_values_verbatim() {
        let request = StopEventRequest::new(
            "2024-01-01T07:59:30Z",
            "8503000",
            "2024-01-01T08:00:00Z",
            params(2),
        );

        let xml = request.to_xml();

        assert!(xml.contains("<StopPointRef>8503000</StopPointRef>"));
        assert!(xml.contains("<DepArrTime>2024-01-01T08:00:00Z</DepArrTime>"));
        assert!(xml.contains("<NumberOfResults>2</NumberOfResults>"));
        assert!(xml.contains("<StopEventType>departure</StopEventType>"));
        assert!(xml.contains("<IncludePreviousCalls>false</IncludePreviousCalls>"));
        assert!(xml.contains("<IncludeOnwardCalls>false</IncludeOnwardCalls>"));
        assert!(xml.contains("<IncludeRealtimeData>false</IncludeRealtimeData>"));
    }

    #[test]
    fn serializes_complete_document() {
        let request = StopEventRequest::new(
            "2024-07-26T09:42:09Z",
            "8507000",
            "2024-07-26T09:45:00Z",
            StopEventParams {
                number_of_results: 10,
                event_type: EventType::Arrival,
                include_previous_calls: true,
                include_onward_calls: true,
                include_realtime_data: true,
            },
        );

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<Trias version="1.1" xmlns="http://www.vdv.de/trias" xmlns:siri="http://www.siri.org.uk/siri" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<ServiceRequest>
<siri:RequestTimestamp>2024-07-26T09:42:09Z</siri:RequestTimestamp>
<siri:RequestorRef>trias-client</siri:RequestorRef>
<RequestPayload>
<StopEventRequest>
<Location>
<LocationRef>
<StopPointRef>8507000</StopPointRef>
</LocationRef>
<DepArrTime>2024-07-26T09:45:00Z</DepArrTime>
</Location>
<Params>
<NumberOfResults>10</NumberOfResults>
<StopEventType>arrival</StopEventType>
<IncludePreviousCalls>true</IncludePreviousCalls>
<IncludeOnwardCalls>true</IncludeOnwardCalls>
<IncludeRealtimeData>true</IncludeRealtimeData>
</Params>
</StopEventRequest>
</RequestPayload>
</ServiceRequest>
</Trias>"#;

        assert_eq!(request.to_xml(), expected);
    }

    #[test]
    fn event_type_wire_values() {
        assert_eq!(EventType::Departure.as_str(), "departure");
        assert_eq!(EventType::Arrival.as_str(), "arrival");
    }
}
