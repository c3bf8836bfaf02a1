//! 4.H Window Filter: a second pass dropping events whose `DTSTART` falls
//! outside an optional `[windowMin, windowMax]`. Recurring events are not
//! pruned here beyond this check — their expansion already stopped at
//! `UNTIL`, computed upstream in the Expander.

use crate::config::EngineConfig;
use crate::types::Event;

/// `now ± N days`, per `EngineConfig.filter_days_before/after`. `now_epoch`
/// is passed in rather than read from the clock so the filter stays a pure
/// function of its inputs.
fn window_bounds(config: &EngineConfig, now_epoch: i64) -> (Option<i64>, Option<i64>) {
    const DAY_SECONDS: i64 = 86_400;

    let min = config.filter_days_before.map(|days| now_epoch - i64::from(days) * DAY_SECONDS);
    let max = config.filter_days_after.map(|days| now_epoch + i64::from(days) * DAY_SECONDS);

    (min, max)
}

/// Retains only events whose `DTSTART` epoch falls within the configured
/// window. With neither bound configured, every event passes through.
pub fn filter(events: Vec<Event>, config: &EngineConfig, now_epoch: i64) -> Vec<Event> {
    let (min, max) = window_bounds(config, now_epoch);

    if min.is_none() && max.is_none() {
        return events;
    }

    events
        .into_iter()
        .filter(|event| {
            let epoch = event.dtstart.epoch;
            min.is_none_or(|min| epoch >= min) && max.is_none_or(|max| epoch <= max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post_processor::process;
    use crate::assembler::assemble;
    use crate::config::NullSink;
    use crate::exporter::materialize_event;

    fn event_with_dtstart(ical: &str) -> Event {
        let config = EngineConfig::default();
        let (raw_events, _counts) = assemble(ical);
        let processed = process(raw_events, &config, &NullSink);
        materialize_event(&processed[0], &config)
    }

    #[test]
    fn drops_events_outside_the_configured_window() {
        let config = EngineConfig {
            filter_days_before: Some(1),
            filter_days_after: Some(1),
            ..EngineConfig::default()
        };

        let now_epoch = 1_000_000_000;
        let in_window = event_with_dtstart("BEGIN:VEVENT\r\nUID:a\r\nDTSTART:20010909T014640Z\r\nEND:VEVENT\r\n");
        let out_of_window = event_with_dtstart("BEGIN:VEVENT\r\nUID:b\r\nDTSTART:20500101T000000Z\r\nEND:VEVENT\r\n");

        let filtered = filter(vec![in_window.clone(), out_of_window], &config, now_epoch);

        assert_eq!(filtered, vec![in_window]);
    }

    #[test]
    fn keeps_everything_when_no_window_is_configured() {
        let config = EngineConfig::default();
        let event = event_with_dtstart("BEGIN:VEVENT\r\nUID:a\r\nDTSTART:20500101T000000Z\r\nEND:VEVENT\r\n");

        let filtered = filter(vec![event.clone()], &config, 0);

        assert_eq!(filtered, vec![event]);
    }
}
