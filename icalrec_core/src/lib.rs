//! iCalendar (RFC 5545) parsing and recurrence expansion: takes a raw
//! `VCALENDAR` text stream and produces a flat, expanded `Vec<Event>`,
//! honouring `RRULE`/`EXRULE`/`RDATE`/`EXDATE`, `RECURRENCE-ID` overrides,
//! and an optional time-window filter.

mod assembler;
mod config;
mod expander;
mod exporter;
mod moment;
mod post_processor;
mod types;
mod window;

pub use config::{Diagnostic, DiagnosticSink, EngineConfig, EngineError, NullSink};
pub use types::{DateListBlock, Event, ModifiedInstanceIndex, PropertyValueWithParams, RawEvent};

/// Parses `input` with a default `EngineConfig` and a discarding diagnostic
/// sink. The common entry point for callers who don't need to tune
/// `defaultSpan`/`defaultTimeZone`/window filtering or observe diagnostics.
pub fn parse(input: &str) -> Vec<Event> {
    parse_with_config(input, &EngineConfig::default(), &NullSink).unwrap_or_default()
}

/// Parses `input` against `config`, reporting recoverable diagnostics
/// (invalid moments, durations, RRULEs) to `sink`. Only a configuration
/// error is returned as `Err`; anything else that goes wrong skips the
/// offending event or property and the parse completes regardless.
pub fn parse_with_config(
    input: &str,
    config: &EngineConfig,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Event>, EngineError> {
    config.validate()?;

    let cleaned = if config.disable_character_replacement {
        input.to_string()
    } else {
        assembler::normalize_smart_quotes(input)
    };

    let (raw_events, _counts) = assembler::assemble(&cleaned);
    let mut processed = post_processor::process(raw_events, config, sink);
    let overrides = post_processor::link_overrides(&mut processed, config);

    let exported = exporter::export(&processed, &overrides, config, sink);

    let now_epoch = chrono::Utc::now().timestamp();
    Ok(window::filter(exported, config, now_epoch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_non_recurring_event() {
        let events = parse(
            "BEGIN:VCALENDAR\r\n\
             BEGIN:VEVENT\r\n\
             UID:event-1\r\n\
             SUMMARY:Standup\r\n\
             DTSTART:20250101T090000Z\r\n\
             DTEND:20250101T093000Z\r\n\
             END:VEVENT\r\n\
             END:VCALENDAR\r\n",
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary.as_deref(), Some("Standup"));
        assert_eq!(events[0].dtstart.raw_value, "20250101T090000Z");
        assert_eq!(events[0].dtend.raw_value, "20250101T093000Z");
    }

    #[test]
    fn synthesises_a_one_day_dtend_when_absent() {
        let events = parse(
            "BEGIN:VEVENT\r\n\
             UID:event-1\r\n\
             DTSTART;VALUE=DATE:20250101\r\n\
             END:VEVENT\r\n",
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].dtend.epoch - events[0].dtstart.epoch, 86_400);
    }

    #[test]
    fn smart_quotes_in_summary_are_normalised_unless_disabled() {
        let ical = "BEGIN:VEVENT\r\nUID:a\r\nSUMMARY:Caf\u{2019}s \u{201C}grand opening\u{201D}\r\nDTSTART:20250101T000000Z\r\nEND:VEVENT\r\n";

        let events = parse(ical);
        assert_eq!(events[0].summary.as_deref(), Some("Caf's \"grand opening\""));

        let config = EngineConfig {
            disable_character_replacement: true,
            ..EngineConfig::default()
        };
        let events = parse_with_config(ical, &config, &NullSink).unwrap();
        assert_eq!(events[0].summary.as_deref(), Some("Caf\u{2019}s \u{201C}grand opening\u{201D}"));
    }

    #[test]
    fn configuration_error_is_the_only_hard_failure() {
        let config = EngineConfig {
            default_span_years: 0,
            ..EngineConfig::default()
        };

        let result = parse_with_config(
            "BEGIN:VEVENT\r\nUID:a\r\nDTSTART:20250101T000000Z\r\nEND:VEVENT\r\n",
            &config,
            &NullSink,
        );

        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }
}
