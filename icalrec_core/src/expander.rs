//! 4.G RRULE Expander. For every event carrying an `RRULE` (or a standalone
//! `RDATE`), produces the epoch seconds of every occurrence strictly after
//! `DTSTART` and at or before the computed `UNTIL` bound.
//!
//! The actual BY-part candidate math (weekday/month-day/year-day/week-number
//! expansion, `BYSETPOS`, `WKST`-relative week axis, DST-aware field
//! addition) is delegated to the `rrule` crate: its `RRuleSet` already
//! implements RFC 5545 occurrence generation, including feeding it `EXDATE`
//! content lines so `COUNT` is decremented for excluded candidates exactly
//! as required (the crate decrements its internal counter before EXDATE
//! filtering, the same order this engine's accounting relies on).

use std::str::FromStr;

use chrono::TimeZone;
use rrule::RRuleSet;

use icalrec_ical::values::recur::{Frequency, Recur};
use icalrec_ical::ICalendarEntity;

use crate::config::{emit, DiagnosticSink, EngineConfig};
use crate::moment::parse_moment;
use crate::post_processor::{escape, ProcessedEvent};
use crate::types::DateListBlock;

/// What the expander produced for one event: whether its own `DTSTART`
/// collides with an `EXDATE` (and so must be dropped from the output), and
/// the epoch of every surviving expansion occurrence, ascending and deduped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionOutcome {
    pub dtstart_excluded: bool,
    pub occurrence_epochs: Vec<i64>,
}

/// Numeric `BYDAY` ordinals (`-1SU`, `2MO`) are only meaningful under
/// `MONTHLY`/`YEARLY`, and a `YEARLY` rule combining `BYWEEKNO` with a
/// numeric-ordinal `BYDAY` is self-contradictory (per 4.G step 2).
fn validate_recur_for_expansion(recur: &Recur) -> Result<(), String> {
    let has_numeric_byday = recur
        .byday
        .as_ref()
        .is_some_and(|byday| byday.0 .0.iter().any(|entry| entry.0.is_some()));

    if !has_numeric_byday {
        return Ok(());
    }

    let freq = recur.freq.as_ref().map(|freq| &freq.0);

    if !matches!(freq, Some(Frequency::Monthly) | Some(Frequency::Yearly)) {
        return Err(String::from(
            "numeric BYDAY ordinal requires FREQ=MONTHLY or FREQ=YEARLY",
        ));
    }

    if matches!(freq, Some(Frequency::Yearly)) && recur.byweekno.is_some() {
        return Err(String::from(
            "YEARLY rule with BYWEEKNO forbids a numeric BYDAY ordinal",
        ));
    }

    Ok(())
}

/// Extracts the `HHMMSS` (without any trailing `Z`) from a `DTSTART` raw
/// value, if it carries a time component at all.
fn dtstart_time_digits(dtstart_raw_value: &str) -> Option<&str> {
    let body = dtstart_raw_value.strip_suffix('Z').unwrap_or(dtstart_raw_value);
    body.split_once('T').map(|(_, time)| time)
}

/// A bare `YYYYMMDD` `EXDATE`/`RDATE` entry against a date-time `DTSTART`
/// names "the occurrence that would land on this date" — so it is aligned
/// to `DTSTART`'s wall-clock time before being matched or fed to the
/// recurrence set. An entry that already carries a time is left untouched.
fn align_date_entry(value: &str, dtstart_time_digits: Option<&str>) -> String {
    let is_date_only = value.len() == 8 && value.bytes().all(|byte| byte.is_ascii_digit());

    match (is_date_only, dtstart_time_digits) {
        (true, Some(time_digits)) => format!("{value}T{time_digits}"),
        _ => value.to_string(),
    }
}

fn align_date_list_value(value: &str, dtstart_raw_value: &str) -> String {
    let time_digits = dtstart_time_digits(dtstart_raw_value);

    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| align_date_entry(part, time_digits))
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits each block's comma-separated value on its own `TZID`, parsing
/// every entry into an epoch. Unparseable individual dates are reported and
/// dropped rather than failing the whole block.
fn parse_date_list_epochs(
    blocks: &[DateListBlock],
    default_tz: chrono_tz::Tz,
    uid: Option<&str>,
    sink: &dyn DiagnosticSink,
    dtstart_raw_value: &str,
) -> Vec<i64> {
    let mut epochs = Vec::new();

    for block in blocks {
        let tzid = block.params.get_single("TZID");

        for raw_value in block.value.split(',') {
            let raw_value = raw_value.trim();

            if raw_value.is_empty() {
                continue;
            }

            let raw_value = align_date_entry(raw_value, dtstart_time_digits(dtstart_raw_value));

            let reconstructed = match tzid {
                Some(tzid) => format!("TZID={}:{raw_value}", escape(tzid)),
                None => raw_value,
            };

            match parse_moment(&reconstructed, default_tz) {
                Ok(moment) => epochs.push(moment.epoch),
                Err(error) => emit(sink, uid, error.to_string()),
            }
        }
    }

    epochs
}

fn content_line(name: &str, tzid: Option<&str>, raw_value: &str) -> String {
    match tzid {
        Some(tzid) => format!("{name};TZID={tzid}:{raw_value}"),
        None => format!("{name}:{raw_value}"),
    }
}

/// Appends `;WKST=<default>` to a `RRULE`/`EXRULE` text when it carries no
/// `WKST` of its own, so an omitted `WKST` honours `EngineConfig`'s
/// configured default instead of silently falling through to the `rrule`
/// crate's own hard-coded Monday.
fn with_default_wkst(rule_text: &str, config: &EngineConfig) -> String {
    let has_wkst = Recur::from_str(rule_text).is_ok_and(|recur| recur.wkst.is_some());

    if has_wkst {
        rule_text.to_string()
    } else {
        format!("{rule_text};WKST={}", config.default_week_start.render_ical())
    }
}

/// Builds the ical-text content-line block `rrule::RRuleSet::from_str`
/// expects: `DTSTART`, then `RRULE`/`EXRULE`/`RDATE`/`EXDATE` in whatever
/// combination the event carries.
fn build_ical_text(event: &ProcessedEvent, config: &EngineConfig) -> String {
    let fallback_tzid = (!event.dtstart.is_utc()).then(|| event.tz.name().to_string());

    let mut lines = vec![content_line(
        "DTSTART",
        event.dtstart.tzid().or(fallback_tzid.as_deref()),
        &event.dtstart.raw_value,
    )];

    if let Some(rrule) = &event.raw.rrule_raw {
        lines.push(format!("RRULE:{}", with_default_wkst(rrule, config)));
    }

    if let Some(exrule) = &event.raw.exrule_raw {
        lines.push(format!("EXRULE:{}", with_default_wkst(exrule, config)));
    }

    for rdate in &event.raw.rdates {
        let value = align_date_list_value(&rdate.value, &event.dtstart.raw_value);
        let tzid = rdate.params.get_single("TZID").or(fallback_tzid.as_deref());
        lines.push(content_line("RDATE", tzid, &value));
    }

    for exdate in &event.raw.exdates {
        let value = align_date_list_value(&exdate.value, &event.dtstart.raw_value);
        let tzid = exdate.params.get_single("TZID").or(fallback_tzid.as_deref());
        lines.push(content_line("EXDATE", tzid, &value));
    }

    lines.join("\n")
}

/// "now + `default_span_years` at 23:59:59", clamped to `UNTIL` when present.
fn compute_until(recur: Option<&Recur>, event: &ProcessedEvent, config: &EngineConfig) -> i64 {
    let now = chrono::Utc::now();
    let span_end = now + chrono::Duration::days(i64::from(config.default_span_years) * 365);
    let span_until_epoch = span_end
        .date_naive()
        .and_hms_opt(23, 59, 59)
        .expect("23:59:59 is always a valid time")
        .and_utc()
        .timestamp();

    let until_epoch = recur
        .and_then(|recur| recur.until.as_ref())
        .map(|until| until.0.get_utc_timestamp(Some(&event.tz)));

    match until_epoch {
        Some(until_epoch) => span_until_epoch.min(until_epoch),
        None => span_until_epoch,
    }
}

/// Runs the Expander for one event. `skipRecurrence` bypasses this component
/// entirely; an event with neither `RRULE` nor `RDATE` has nothing to expand.
pub fn expand(event: &ProcessedEvent, config: &EngineConfig, sink: &dyn DiagnosticSink) -> ExpansionOutcome {
    if (event.raw.rrule_raw.is_none() && event.raw.rdates.is_empty()) || config.skip_recurrence {
        return ExpansionOutcome::default();
    }

    let uid = event.raw.uid.as_deref();

    let recur = match event.raw.rrule_raw.as_deref() {
        Some(rrule_text) => match Recur::from_str(rrule_text) {
            Ok(recur) => Some(recur),
            Err(error) => {
                emit(sink, uid, format!("invalid RRULE: {error}"));
                return ExpansionOutcome::default();
            }
        },
        None => None,
    };

    if let Some(recur) = &recur {
        if let Err(error) = validate_recur_for_expansion(recur) {
            emit(sink, uid, error);
            return ExpansionOutcome::default();
        }
    }

    let exdate_epochs = parse_date_list_epochs(
        &event.raw.exdates,
        event.tz,
        uid,
        sink,
        &event.dtstart.raw_value,
    );
    let dtstart_excluded = exdate_epochs.contains(&event.dtstart.epoch);

    let ical_text = build_ical_text(event, config);

    let rrule_set = match RRuleSet::from_str(&ical_text) {
        Ok(rrule_set) => rrule_set,
        Err(error) => {
            emit(sink, uid, format!("invalid recurrence set: {error}"));
            return ExpansionOutcome { dtstart_excluded, occurrence_epochs: Vec::new() };
        }
    };

    let until_epoch = compute_until(recur.as_ref(), event, config);
    let until_moment = rrule::Tz::UTC
        .timestamp_opt(until_epoch, 0)
        .single()
        .unwrap_or_else(|| rrule::Tz::UTC.timestamp_opt(0, 0).single().expect("epoch zero is valid"));

    let (candidates, _was_limited) = rrule_set.before(until_moment).all(u16::MAX);

    let mut occurrence_epochs: Vec<i64> = candidates
        .into_iter()
        .map(|candidate| candidate.timestamp())
        .filter(|epoch| *epoch > event.dtstart.epoch && *epoch <= until_epoch)
        .collect();

    occurrence_epochs.sort_unstable();
    occurrence_epochs.dedup();

    ExpansionOutcome { dtstart_excluded, occurrence_epochs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::config::NullSink;
    use crate::post_processor::process;
    use icalrec_ical::values::recur::WeekDay;

    fn processed(ical: &str, config: &EngineConfig) -> ProcessedEvent {
        let (raw_events, _counts) = assemble(ical);
        process(raw_events, config, &NullSink).remove(0)
    }

    #[test]
    fn default_week_start_is_honoured_when_wkst_is_omitted() {
        let ical = "BEGIN:VEVENT\r\n\
             UID:event-1\r\n\
             DTSTART:20230101T090000Z\r\n\
             RRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=SU,MO;COUNT=4\r\n\
             END:VEVENT\r\n";

        let monday_config = EngineConfig { default_week_start: WeekDay::Monday, ..EngineConfig::default() };
        let monday_event = processed(ical, &monday_config);
        let monday_outcome = expand(&monday_event, &monday_config, &NullSink);

        let sunday_config = EngineConfig { default_week_start: WeekDay::Sunday, ..EngineConfig::default() };
        let sunday_event = processed(ical, &sunday_config);
        let sunday_outcome = expand(&sunday_event, &sunday_config, &NullSink);

        assert_ne!(monday_outcome.occurrence_epochs, sunday_outcome.occurrence_epochs);
    }

    #[test]
    fn weekly_byday_expands_and_excludes_matching_exdates() {
        let config = EngineConfig::default();
        let event = processed(
            "BEGIN:VEVENT\r\n\
             UID:event-1\r\n\
             DTSTART;TZID=Europe/London:20190911T095000\r\n\
             RRULE:FREQ=WEEKLY;BYDAY=WE;COUNT=7\r\n\
             EXDATE:20190911,20190925,20191009,20191023\r\n\
             END:VEVENT\r\n",
            &config,
        );

        let outcome = expand(&event, &config, &NullSink);

        assert!(outcome.dtstart_excluded);
        assert_eq!(outcome.occurrence_epochs.len(), 3);
    }

    #[test]
    fn count_one_emits_no_expansion_occurrences() {
        let config = EngineConfig::default();
        let event = processed(
            "BEGIN:VEVENT\r\n\
             UID:event-1\r\n\
             DTSTART:20000206T120000Z\r\n\
             RRULE:FREQ=DAILY;COUNT=1\r\n\
             END:VEVENT\r\n",
            &config,
        );

        let outcome = expand(&event, &config, &NullSink);

        assert!(outcome.occurrence_epochs.is_empty());
    }

    #[test]
    fn numeric_byday_under_daily_is_rejected() {
        let config = EngineConfig::default();
        let event = processed(
            "BEGIN:VEVENT\r\n\
             UID:event-1\r\n\
             DTSTART:20000206T120000Z\r\n\
             RRULE:FREQ=DAILY;BYDAY=-1SU;COUNT=3\r\n\
             END:VEVENT\r\n",
            &config,
        );

        let outcome = expand(&event, &config, &NullSink);

        assert!(outcome.occurrence_epochs.is_empty());
    }
}
