//! 4.F Event Post-Processor: materialises `DTSTART`/`DTEND`/`RECURRENCE-ID`
//! into `PropertyValueWithParams`, indexes modified instances by UID, and
//! normalises custom/`X-` property values.

use std::collections::HashMap;

use chrono_tz::Tz;

use icalrec_ical::content_line::LineParams;

use crate::config::{DiagnosticSink, EngineConfig, EngineError};
use crate::moment::parse_moment;
use crate::types::{ModifiedInstanceIndex, PropertyValueWithParams, RawEvent};

/// `escape(t) = "\""+t+"\"" iff t contains any of `: ; ,`; else `t` unchanged.
pub fn escape(value: &str) -> String {
    if value.contains(':') || value.contains(';') || value.contains(',') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Resolves the zone a materialised property should be rendered in: UTC for
/// a `Z`-suffixed value regardless of any stray `TZID`, else the value's own
/// `TZID` resolved against `default_tz`, else `default_tz` itself.
pub(crate) fn resolve_property_tz(property: &PropertyValueWithParams, default_tz: Tz) -> Tz {
    if property.is_utc() {
        Tz::UTC
    } else {
        property
            .tzid()
            .map_or(default_tz, |tzid| icalrec_ical::timezone::resolve_timezone(tzid, default_tz))
    }
}

fn reconstruct(params: &LineParams, raw_value: &str) -> String {
    match params.get_single("TZID") {
        Some(tzid) => format!("TZID={}:{}", escape(tzid), raw_value),
        None => raw_value.to_string(),
    }
}

/// Materialises a raw `(params, value)` pair into a `PropertyValueWithParams`
/// per 4.F steps 1-4.
pub fn materialize(
    params: &LineParams,
    raw_value: &str,
    default_tz: Tz,
) -> Result<PropertyValueWithParams, EngineError> {
    let reconstructed = reconstruct(params, raw_value);
    let moment = parse_moment(&reconstructed, default_tz)?;

    Ok(PropertyValueWithParams {
        params: params.clone(),
        raw_value: raw_value.to_string(),
        epoch: moment.epoch,
        reconstructed,
    })
}

/// A `RawEvent` with its schedule properties materialised, ready for the
/// expander. `suppressed` marks a master event whose own `DTSTART` collides
/// with a `RECURRENCE-ID` override (4.F's "colliding base occurrence is
/// nullified in place").
#[derive(Debug, Clone)]
pub struct ProcessedEvent {
    pub raw: RawEvent,
    pub dtstart: PropertyValueWithParams,
    pub dtend: Option<PropertyValueWithParams>,
    pub recurrence_id: Option<PropertyValueWithParams>,
    pub tz: Tz,
    pub suppressed: bool,
}

/// Strips surrounding whitespace, unescapes literal `\n`, and strips one
/// level of `\,`/`\;`/`\\` backslash-escaping. Applied only to custom/`X-`
/// property values, never to well-known typed fields.
fn normalize_custom_value(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut chars = value.trim().chars().peekable();

    while let Some(character) = chars.next() {
        if character == '\\' {
            match chars.peek() {
                Some('n') | Some('N') => {
                    output.push('\n');
                    chars.next();
                }
                Some(',') | Some(';') | Some('\\') => {
                    output.push(*chars.peek().unwrap());
                    chars.next();
                }
                _ => output.push(character),
            }
        } else {
            output.push(character);
        }
    }

    output
}

/// Materialises every raw event's schedule properties. Events that fail to
/// parse a mandatory `DTSTART` are reported through the sink and dropped;
/// every other `EngineError` is reported but leaves the event in place with
/// that slot left unset.
pub fn process(
    raw_events: Vec<RawEvent>,
    config: &EngineConfig,
    sink: &dyn DiagnosticSink,
) -> Vec<ProcessedEvent> {
    let mut processed = Vec::with_capacity(raw_events.len());

    for raw in raw_events {
        let Some((dtstart_params, dtstart_value)) = raw.dtstart_raw.clone() else {
            crate::config::emit(sink, raw.uid.as_deref(), "event has no DTSTART, skipping");
            continue;
        };

        let dtstart = match materialize(&dtstart_params, &dtstart_value, config.default_time_zone) {
            Ok(dtstart) => dtstart,
            Err(error) => {
                crate::config::emit(sink, raw.uid.as_deref(), error.to_string());
                continue;
            }
        };

        let dtend = match raw.dtend_raw.as_ref() {
            Some((params, value)) => match materialize(params, value, config.default_time_zone) {
                Ok(dtend) => Some(dtend),
                Err(error) => {
                    crate::config::emit(sink, raw.uid.as_deref(), error.to_string());
                    None
                }
            },
            None => None,
        };

        let recurrence_id = match raw.recurrence_id_raw.as_ref() {
            Some((params, value)) => match materialize(params, value, config.default_time_zone) {
                Ok(recurrence_id) => Some(recurrence_id),
                Err(error) => {
                    crate::config::emit(sink, raw.uid.as_deref(), error.to_string());
                    None
                }
            },
            None => None,
        };

        let tz = resolve_property_tz(&dtstart, config.default_time_zone);

        let mut raw = raw;
        raw.custom = raw
            .custom
            .into_iter()
            .map(|(name, value)| (name, normalize_custom_value(&value)))
            .collect();

        processed.push(ProcessedEvent {
            raw,
            dtstart,
            dtend,
            recurrence_id,
            tz,
            suppressed: false,
        });
    }

    processed
}

/// Builds the `ModifiedInstanceIndex` from every event carrying a
/// `RECURRENCE-ID`, then marks master events whose own `DTSTART` collides
/// with one of their overrides as suppressed.
pub fn link_overrides(events: &mut [ProcessedEvent], config: &EngineConfig) -> ModifiedInstanceIndex {
    let mut index: ModifiedInstanceIndex = HashMap::new();

    for event in events.iter() {
        if let (Some(recurrence_id), Some(uid)) = (&event.recurrence_id, &event.raw.uid) {
            let rendered = crate::exporter::materialize_event(event, config);
            index.entry(uid.clone()).or_default().insert(recurrence_id.epoch, rendered);
        }
    }

    for event in events.iter_mut() {
        if event.recurrence_id.is_some() {
            continue;
        }

        let Some(uid) = event.raw.uid.as_ref() else {
            continue;
        };

        if index.get(uid).is_some_and(|overrides| overrides.contains_key(&event.dtstart.epoch)) {
            event.suppressed = true;
        }
    }

    index
}
