//! XML tree walkers building the response model.

use minidom::Element;

use crate::error::TriasError;
use crate::xml::ElementExt;

use super::types::{
    CallAtStop, ErrorMessage, LocalizedText, Mode, Service, ServiceAttribute, ServiceDelivery,
    StopEvent, StopEventResponse, StopEventResult, Timetable, TriasResponse, TriasTime,
};

/// Parse a TRIAS stop-event response.
///
/// Fails with [`TriasError::MalformedDocument`] when the bytes are not
/// well-formed XML or the response envelope is missing or duplicated.
/// Unexpected elements are ignored and missing optional elements yield
/// empty defaults.
pub fn parse(bytes: &[u8]) -> Result<TriasResponse, TriasError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| TriasError::malformed(format!("response is not valid UTF-8: {e}")))?;

    let root: Element = text
        .parse()
        .map_err(|e: minidom::Error| TriasError::from(e))?;

    if root.name() != "Trias" {
        return Err(TriasError::malformed(format!(
            "unexpected root element '{}'",
            root.name()
        )));
    }

    let delivery = root.try_only_child("ServiceDelivery")?;

    Ok(TriasResponse {
        service_delivery: parse_service_delivery(delivery)?,
    })
}

fn parse_service_delivery(el: &Element) -> Result<ServiceDelivery, TriasError> {
    let payload = el.try_only_child("DeliveryPayload")?;
    let response = payload.try_only_child("StopEventResponse")?;

    Ok(ServiceDelivery {
        response_timestamp: TriasTime::from(el.child_text("ResponseTimestamp").unwrap_or_default()),
        producer_ref: el.child_text("ProducerRef").unwrap_or_default(),
        status: el
            .child_text("Status")
            .is_some_and(|text| text.trim() == "true"),
        language: el.child_text("Language"),
        calc_time: el
            .child_text("CalcTime")
            .and_then(|text| text.trim().parse().ok()),
        stop_event_response: parse_stop_event_response(response),
    })
}

fn parse_stop_event_response(el: &Element) -> StopEventResponse {
    StopEventResponse {
        error: el.only_child("ErrorMessage").map(parse_error_message),
        situations: el
            .only_child("StopEventResponseContext")
            .and_then(|context| context.only_child("Situations"))
            .map(Element::text),
        results: el
            .children_named("StopEventResult")
            .map(parse_stop_event_result)
            .collect(),
    }
}

fn parse_error_message(el: &Element) -> ErrorMessage {
    ErrorMessage {
        code: el.child_text("Code").unwrap_or_default(),
        text: el
            .only_child("Text")
            .map(parse_localized_text)
            .unwrap_or_default(),
    }
}

fn parse_stop_event_result(el: &Element) -> StopEventResult {
    StopEventResult {
        result_id: el.child_text("ResultId").unwrap_or_default(),
        stop_event: el
            .only_child("StopEvent")
            .map(parse_stop_event)
            .unwrap_or_default(),
    }
}

fn parse_stop_event(el: &Element) -> StopEvent {
    StopEvent {
        previous_calls: parse_call_wrappers(el, "PreviousCall"),
        this_call: el
            .only_child("ThisCall")
            .and_then(|wrapper| wrapper.only_child("CallAtStop"))
            .map(parse_call_at_stop)
            .unwrap_or_default(),
        onward_calls: parse_call_wrappers(el, "OnwardCall"),
        service: el
            .only_child("Service")
            .map(parse_service)
            .unwrap_or_default(),
    }
}

/// `PreviousCall`/`OnwardCall` each wrap a single `CallAtStop`; the wrapper
/// carries nothing else and is flattened away.
fn parse_call_wrappers(el: &Element, wrapper_name: &str) -> Vec<CallAtStop> {
    el.children_named(wrapper_name)
        .map(|wrapper| {
            wrapper
                .only_child("CallAtStop")
                .map(parse_call_at_stop)
                .unwrap_or_default()
        })
        .collect()
}

fn parse_call_at_stop(el: &Element) -> CallAtStop {
    CallAtStop {
        stop_point_ref: el.child_text("StopPointRef").unwrap_or_default(),
        stop_point_name: el
            .only_child("StopPointName")
            .map(parse_localized_text)
            .unwrap_or_default(),
        planned_bay: el.only_child("PlannedBay").map(parse_localized_text),
        estimated_bay: el.only_child("EstimatedBay").map(parse_localized_text),
        service_arrival: el.only_child("ServiceArrival").map(parse_timetable),
        service_departure: el.only_child("ServiceDeparture").map(parse_timetable),
        stop_seq_number: el
            .child_text("StopSeqNumber")
            .and_then(|text| text.trim().parse().ok()),
    }
}

fn parse_timetable(el: &Element) -> Timetable {
    Timetable {
        timetabled_time: el.child_text("TimetabledTime").map(TriasTime::from),
        estimated_time: el.child_text("EstimatedTime").map(TriasTime::from),
    }
}

fn parse_service(el: &Element) -> Service {
    Service {
        operating_day_ref: el.child_text("OperatingDayRef").unwrap_or_default(),
        journey_ref: el.child_text("JourneyRef").unwrap_or_default(),
        line_ref: el.child_text("LineRef").unwrap_or_default(),
        direction_ref: el.child_text("DirectionRef").unwrap_or_default(),
        mode: el.only_child("Mode").map(parse_mode).unwrap_or_default(),
        published_line_name: el
            .only_child("PublishedLineName")
            .map(parse_localized_text)
            .unwrap_or_default(),
        operator_ref: el.child_text("OperatorRef").unwrap_or_default(),
        origin_stop_point_ref: el.child_text("OriginStopPointRef").unwrap_or_default(),
        origin_text: el
            .only_child("OriginText")
            .map(parse_localized_text)
            .unwrap_or_default(),
        destination_stop_point_ref: el.child_text("DestinationStopPointRef").unwrap_or_default(),
        destination_text: el
            .only_child("DestinationText")
            .map(parse_localized_text)
            .unwrap_or_default(),
        attributes: el
            .children_named("Attribute")
            .map(parse_attribute)
            .collect(),
    }
}

fn parse_mode(el: &Element) -> Mode {
    Mode {
        pt_mode: el.child_text("PtMode").unwrap_or_default(),
        rail_submode: el.child_text("RailSubmode"),
        name: el.only_child("Name").map(parse_localized_text),
    }
}

fn parse_attribute(el: &Element) -> ServiceAttribute {
    ServiceAttribute {
        code: el.child_text("Code").unwrap_or_default(),
        text: el
            .only_child("Text")
            .map(parse_localized_text)
            .unwrap_or_default(),
    }
}

/// TRIAS renders human-readable strings as a `Text` child plus an optional
/// `Language` child.
fn parse_localized_text(el: &Element) -> LocalizedText {
    LocalizedText {
        text: el.child_text("Text").unwrap_or_default(),
        language: el.child_text("Language"),
    }
}
