use icalrec_core::{parse, EngineConfig};
use pretty_assertions_sorted::assert_eq;

fn dtstarts(events: &[icalrec_core::Event]) -> Vec<String> {
    events.iter().map(|event| event.dtstart.raw_value.clone()).collect()
}

fn parse_with(ical: &str, config: &EngineConfig) -> Vec<icalrec_core::Event> {
    icalrec_core::parse_with_config(ical, config, &icalrec_core::NullSink).unwrap()
}

#[test]
fn yearly_date_only_in_berlin() {
    let config = EngineConfig { default_time_zone: chrono_tz::Europe::Berlin, ..EngineConfig::default() };

    let events = parse_with(
        "BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         DTSTART;VALUE=DATE:20000301\r\n\
         RRULE:FREQ=YEARLY;WKST=SU;COUNT=3\r\n\
         END:VEVENT\r\n",
        &config,
    );

    assert_eq!(
        dtstarts(&events),
        vec!["20000301", "20010301T000000", "20020301T000000"],
    );
}

#[test]
fn daily_across_dst_in_berlin() {
    let config = EngineConfig { default_time_zone: chrono_tz::Europe::Berlin, ..EngineConfig::default() };

    let events = parse_with(
        "BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         DTSTART;VALUE=DATE:20000301\r\n\
         RRULE:FREQ=DAILY;COUNT=31\r\n\
         END:VEVENT\r\n",
        &config,
    );

    assert_eq!(events.len(), 31);
    assert_eq!(events[0].dtstart.raw_value, "20000301");
    assert_eq!(events[30].dtstart.raw_value, "20000331T000000");
}

#[test]
fn weekly_with_exdates_equal_to_dtstart_in_london() {
    let events = parse(
        "BEGIN:VCALENDAR\r\n\
         BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         DTSTART;TZID=Europe/London:20190911T095000\r\n\
         RRULE:FREQ=WEEKLY;BYDAY=WE;COUNT=7\r\n\
         EXDATE:20190911,20190925,20191009,20191023\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n",
    );

    assert_eq!(
        dtstarts(&events),
        vec!["20190918T095000", "20191002T095000", "20191016T095000"],
    );
}

#[test]
fn yearly_bysetpos_on_tu_th_in_march_new_york() {
    let events = parse(
        "BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         DTSTART;TZID=America/New_York:19970306T090000\r\n\
         RRULE:FREQ=YEARLY;COUNT=10;BYMONTH=3;BYDAY=TU,TH;BYSETPOS=2,4,-2\r\n\
         END:VEVENT\r\n",
    );

    assert_eq!(events.len(), 10);
    assert_eq!(
        dtstarts(&events[0..3]),
        vec!["19970306T090000", "19970313T090000", "19970325T090000"],
    );
    assert_eq!(events[9].dtstart.raw_value, "20000307T090000");
}

#[test]
fn daily_bymonthday_across_month_boundary() {
    let events = parse(
        "BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         DTSTART:20000206T120000\r\n\
         RRULE:FREQ=DAILY;BYMONTHDAY=1,6,11,16,21,26,31;COUNT=16\r\n\
         END:VEVENT\r\n",
    );

    assert_eq!(events.len(), 16);
    assert_eq!(
        dtstarts(&events[4..6]),
        vec!["20000226T120000", "20000301T120000"],
    );
    assert_eq!(
        dtstarts(&events[11..13]),
        vec!["20000331T120000", "20000401T120000"],
    );
}

#[test]
fn count_one_emits_only_the_base_event() {
    let events = parse(
        "BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         DTSTART:20000206T120000Z\r\n\
         RRULE:FREQ=DAILY;COUNT=1\r\n\
         END:VEVENT\r\n",
    );

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].dtstart.raw_value, "20000206T120000Z");
}

#[test]
fn recurrence_id_override_replaces_its_colliding_occurrence() {
    let events = parse(
        "BEGIN:VCALENDAR\r\n\
         BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         DTSTART:20000101T090000Z\r\n\
         RRULE:FREQ=DAILY;COUNT=3\r\n\
         END:VEVENT\r\n\
         BEGIN:VEVENT\r\n\
         UID:event-1\r\n\
         RECURRENCE-ID:20000102T090000Z\r\n\
         DTSTART:20000102T113000Z\r\n\
         SUMMARY:Rescheduled\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n",
    );

    assert_eq!(events.len(), 3);
    assert_eq!(events[1].dtstart.raw_value, "20000102T113000Z");
    assert_eq!(events[1].summary.as_deref(), Some("Rescheduled"));
}
