//! TRIAS stop-event response DTOs.
//!
//! These types map directly onto the `StopEventResponse` document structure.
//! TRIAS omits elements rather than sending empty ones, so genuinely
//! optional fields are `Option` and plain text fields default to empty
//! strings when absent. Timestamps stay as the literal strings from the
//! wire; see [`TriasTime`].

use chrono::{DateTime, Utc};

/// A timestamp as it appeared on the wire.
///
/// TRIAS timetable fields are nominally `YYYY-MM-DDTHH:MM:SSZ`, but this
/// layer never validates them. [`TriasTime::to_datetime`] parses on demand.
///
/// # Examples
///
/// ```
/// use trias_client::schema::TriasTime;
///
/// let time = TriasTime::from("2024-07-23T11:02:00Z".to_string());
/// assert_eq!(time.as_str(), "2024-07-23T11:02:00Z");
/// assert!(time.to_datetime().is_ok());
///
/// let junk = TriasTime::from("tomorrow-ish".to_string());
/// assert!(junk.to_datetime().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriasTime(String);

impl TriasTime {
    /// Returns the raw timestamp string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a calendar time.
    ///
    /// Accepts RFC 3339, which covers the `Z`-suffixed shape TRIAS uses as
    /// well as explicit offsets.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.0).map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<String> for TriasTime {
    fn from(raw: String) -> Self {
        TriasTime(raw)
    }
}

impl std::fmt::Display for TriasTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A human-readable string with its language code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub text: String,
    pub language: Option<String>,
}

/// Parsed response document (root `Trias` element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriasResponse {
    pub service_delivery: ServiceDelivery,
}

/// The `ServiceDelivery` envelope around the stop-event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDelivery {
    /// When the service produced this response (empty if absent)
    pub response_timestamp: TriasTime,
    /// Identifier of the producing system
    pub producer_ref: String,
    /// Delivery status flag; absent reads as `false`
    pub status: bool,
    /// Response language
    pub language: Option<String>,
    /// Server-side calculation time in milliseconds
    pub calc_time: Option<i64>,
    /// The stop-event payload
    pub stop_event_response: StopEventResponse,
}

/// The stop-event payload: an optional service-level error, opaque
/// situation messages, and the results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopEventResponse {
    /// Service-level error, populated independently of whether results are
    /// also present
    pub error: Option<ErrorMessage>,
    /// Raw text of `StopEventResponseContext/Situations`; not structurally
    /// parsed
    pub situations: Option<String>,
    /// Stop events in document order
    pub results: Vec<StopEventResult>,
}

/// A service-level error reported inside the response document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessage {
    pub code: String,
    pub text: LocalizedText,
}

/// One result entry: an identifier plus the stop event itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopEventResult {
    pub result_id: String,
    pub stop_event: StopEvent,
}

/// A single scheduled or realtime visit of a vehicle at the queried stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopEvent {
    /// Calls the vehicle made before the queried stop, in document order
    pub previous_calls: Vec<CallAtStop>,
    /// The call at the queried stop
    pub this_call: CallAtStop,
    /// Calls the vehicle will make after the queried stop, in document order
    pub onward_calls: Vec<CallAtStop>,
    /// Metadata about the operating service
    pub service: Service,
}

/// A vehicle's visit to one stop within a journey.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallAtStop {
    /// Standardized identifier of the stop
    pub stop_point_ref: String,
    /// Display name of the stop
    pub stop_point_name: LocalizedText,
    /// Planned platform/bay text
    pub planned_bay: Option<LocalizedText>,
    /// Realtime platform/bay text, when it differs from the plan
    pub estimated_bay: Option<LocalizedText>,
    /// Arrival times at this stop
    pub service_arrival: Option<Timetable>,
    /// Departure times at this stop
    pub service_departure: Option<Timetable>,
    /// Position of this call in the journey's stop sequence
    pub stop_seq_number: Option<u32>,
}

/// Planned and, when realtime data was requested and available, estimated
/// time for one arrival or departure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    pub timetabled_time: Option<TriasTime>,
    pub estimated_time: Option<TriasTime>,
}

impl Timetable {
    /// The best available time: the estimate when present, otherwise the
    /// timetabled time.
    pub fn expected_time(&self) -> Option<&TriasTime> {
        self.estimated_time.as_ref().or(self.timetabled_time.as_ref())
    }
}

/// Metadata about the service a stop event belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    /// Operating day of the journey
    pub operating_day_ref: String,
    /// Identifier of the journey
    pub journey_ref: String,
    /// Identifier of the line
    pub line_ref: String,
    /// Direction of travel on the line
    pub direction_ref: String,
    /// Transport mode
    pub mode: Mode,
    /// Display name of the line (e.g. "IC 8", "4")
    pub published_line_name: LocalizedText,
    /// Identifier of the operator
    pub operator_ref: String,
    /// Identifier of the journey's origin stop
    pub origin_stop_point_ref: String,
    /// Display text of the origin
    pub origin_text: LocalizedText,
    /// Identifier of the journey's destination stop
    pub destination_stop_point_ref: String,
    /// Display text of the destination
    pub destination_text: LocalizedText,
    /// Free-form service attributes
    pub attributes: Vec<ServiceAttribute>,
}

/// Transport mode of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mode {
    /// Primary mode (e.g. "rail", "bus")
    pub pt_mode: String,
    /// Rail-specific submode, when the mode is rail
    pub rail_submode: Option<String>,
    /// Display name of the mode
    pub name: Option<LocalizedText>,
}

/// A free-form attribute attached to a service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceAttribute {
    pub code: String,
    pub text: LocalizedText,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn trias_time_parses_wire_format() {
        let time = TriasTime::from("2024-07-23T11:02:00Z".to_string());

        let parsed = time.to_datetime().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 7, 23, 11, 2, 0).unwrap());
    }

    #[test]
    fn trias_time_parses_offset_format() {
        let time = TriasTime::from("2024-07-23T13:02:00+02:00".to_string());

        let parsed = time.to_datetime().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 7, 23, 11, 2, 0).unwrap());
    }

    #[test]
    fn trias_time_rejects_junk() {
        assert!(TriasTime::from("not a time".to_string()).to_datetime().is_err());
        assert!(TriasTime::default().to_datetime().is_err());
    }

    #[test]
    fn trias_time_display_is_verbatim() {
        let time = TriasTime::from("2024-07-23T11:02:00Z".to_string());
        assert_eq!(time.to_string(), "2024-07-23T11:02:00Z");
    }

    #[test]
    fn expected_time_prefers_estimate() {
        let timetabled = TriasTime::from("2024-07-23T11:02:00Z".to_string());
        let estimated = TriasTime::from("2024-07-23T11:02:30Z".to_string());

        let timetable = Timetable {
            timetabled_time: Some(timetabled.clone()),
            estimated_time: Some(estimated.clone()),
        };
        assert_eq!(timetable.expected_time(), Some(&estimated));

        let timetable = Timetable {
            timetabled_time: Some(timetabled.clone()),
            estimated_time: None,
        };
        assert_eq!(timetable.expected_time(), Some(&timetabled));

        assert_eq!(Timetable::default().expected_time(), None);
    }
}
