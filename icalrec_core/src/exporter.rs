//! 4.I Event Exporter. Turns a processed event plus its expansion outcome
//! into the final flat `Vec<Event>`: the base occurrence (unless excluded or
//! superseded by a `RECURRENCE-ID` override), followed by every expansion
//! occurrence (with overrides spliced in at their colliding epoch). The
//! `DTEND = DTSTART + 1 day` fallback for an event with neither `DTEND` nor
//! `DURATION` is applied here, and only here, as the very last step before a
//! value leaves the engine — the raw-event pipeline upstream (Assembler,
//! Expander, Window Filter) never sees a synthesised `DTEND`.

use chrono::TimeZone;
use chrono_tz::Tz;

use icalrec_ical::values::duration::Duration;

use crate::config::EngineConfig;
use crate::expander::{self, ExpansionOutcome};
use crate::post_processor::{escape, resolve_property_tz, ProcessedEvent};
use crate::types::{Event, ModifiedInstanceIndex, PropertyValueWithParams};

const ONE_DAY_SECONDS: i64 = 86_400;

/// Renders an epoch as civil wall-clock text in `tz`: `YYYYMMDDTHHMMSS`,
/// with a trailing `Z` when the property is UTC.
fn render_epoch(epoch: i64, tz: Tz, is_utc: bool) -> String {
    let moment = tz
        .timestamp_opt(epoch, 0)
        .single()
        .expect("epoch resolves to a single civil moment in a fixed-offset-free zone");

    let formatted = moment.format("%Y%m%dT%H%M%S").to_string();

    if is_utc {
        format!("{formatted}Z")
    } else {
        formatted
    }
}

/// Rebuilds a `PropertyValueWithParams` at a new epoch, preserving
/// `template`'s `TZID`/`Z`-ness (regenerated occurrences always carry a full
/// date-time, even when the original property was date-only).
fn render_property(template: &PropertyValueWithParams, tz: Tz, epoch: i64) -> PropertyValueWithParams {
    let is_utc = template.is_utc();
    let raw_value = render_epoch(epoch, tz, is_utc);

    let reconstructed = match template.tzid() {
        Some(tzid) if !is_utc => format!("TZID={}:{raw_value}", escape(tzid)),
        _ => raw_value.clone(),
    };

    PropertyValueWithParams {
        params: template.params.clone(),
        raw_value,
        epoch,
        reconstructed,
    }
}

/// Computes `DTEND` for an occurrence whose `DTSTART` now sits at
/// `new_dtstart_epoch`: mirrors the real `DTEND`'s length when present, else
/// applies `DURATION`, else the one-day fallback — always relative to the
/// *new* `dtstart`, never the original.
fn compute_dtend(
    event: &ProcessedEvent,
    config: &EngineConfig,
    new_dtstart_epoch: i64,
    new_dtstart: &PropertyValueWithParams,
) -> PropertyValueWithParams {
    if let Some(dtend) = &event.dtend {
        let length = dtend.epoch - event.dtstart.epoch;
        let dtend_tz = resolve_property_tz(dtend, config.default_time_zone);

        render_property(dtend, dtend_tz, new_dtstart_epoch + length)
    } else if let Some(duration) = &event.raw.duration {
        let length = duration.get_duration_in_seconds();

        render_property(new_dtstart, event.tz, new_dtstart_epoch + length)
    } else {
        render_property(new_dtstart, event.tz, new_dtstart_epoch + ONE_DAY_SECONDS)
    }
}

fn build_event(
    event: &ProcessedEvent,
    dtstart: PropertyValueWithParams,
    dtend: PropertyValueWithParams,
    dtend_tz: Tz,
) -> Event {
    let raw = &event.raw;

    Event {
        uid: raw.uid.clone(),
        summary: raw.summary.clone(),
        description: raw.description.clone(),
        location: raw.location.clone(),
        dtstamp: raw.dtstamp.clone(),
        created: raw.created.clone(),
        last_modified: raw.last_modified.clone(),
        sequence: raw.sequence.clone(),
        status: raw.status.clone(),
        transp: raw.transp.clone(),
        organizer: raw.organizer.clone(),
        attendee: raw.attendee.clone(),
        custom: raw.custom.clone(),
        dtstart,
        dtend,
        duration: raw.duration.as_ref().map(Duration::get_duration_in_seconds),
        recurrence_id: event.recurrence_id.clone(),
        dtstart_tz: event.tz,
        dtend_tz,
    }
}

/// Materialises a processed event's own `DTSTART` into a final `Event`,
/// applying the `DTEND`/one-day-fallback rules. Used both for a source
/// event's base occurrence and to pre-render `RECURRENCE-ID` overrides for
/// the `ModifiedInstanceIndex`.
pub fn materialize_event(event: &ProcessedEvent, config: &EngineConfig) -> Event {
    let dtend = compute_dtend(event, config, event.dtstart.epoch, &event.dtstart);
    let dtend_tz = resolve_property_tz(&dtend, config.default_time_zone);

    build_event(event, event.dtstart.clone(), dtend, dtend_tz)
}

fn occurrence_event(event: &ProcessedEvent, config: &EngineConfig, epoch: i64) -> Event {
    let dtstart = render_property(&event.dtstart, event.tz, epoch);
    let dtend = compute_dtend(event, config, epoch, &dtstart);
    let dtend_tz = resolve_property_tz(&dtend, config.default_time_zone);

    build_event(event, dtstart, dtend, dtend_tz)
}

/// Flattens one processed event plus its expansion outcome into the
/// concrete events it contributes to the output, in emission order: the
/// base occurrence (if not excluded/suppressed), then each expansion
/// occurrence, overrides spliced in at their colliding epoch.
fn flatten_one(
    event: &ProcessedEvent,
    outcome: &ExpansionOutcome,
    overrides: &ModifiedInstanceIndex,
    config: &EngineConfig,
    out: &mut Vec<Event>,
) {
    let uid_overrides = event.raw.uid.as_ref().and_then(|uid| overrides.get(uid));

    if !event.suppressed && !outcome.dtstart_excluded {
        out.push(materialize_event(event, config));
    }

    for &epoch in &outcome.occurrence_epochs {
        match uid_overrides.and_then(|overrides| overrides.get(&epoch)) {
            Some(override_event) => out.push(override_event.clone()),
            None => out.push(occurrence_event(event, config, epoch)),
        }
    }
}

/// Runs the Expander and Exporter over every processed event (components G
/// and I), in assembly order. `RECURRENCE-ID` events that only exist to
/// supply an override are never emitted standalone — they reach the output
/// solely by being spliced into their master's sequence.
pub fn export(
    events: &[ProcessedEvent],
    overrides: &ModifiedInstanceIndex,
    config: &EngineConfig,
    sink: &dyn crate::config::DiagnosticSink,
) -> Vec<Event> {
    let mut flattened = Vec::with_capacity(events.len());

    for event in events {
        if event.recurrence_id.is_some() {
            continue;
        }

        let outcome = expander::expand(event, config, sink);
        flatten_one(event, &outcome, overrides, config, &mut flattened);
    }

    flattened
}
