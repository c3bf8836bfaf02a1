//! The `BEGIN:X`/`END:X` component state machine (4.E). Collects every
//! `VEVENT` into a `RawEvent`; `VTODO`/`VFREEBUSY`/`VALARM`/`VTIMEZONE` are
//! recognised at the framing level (their counters are tracked) but their
//! payload is discarded, since only `VEVENT` is expanded.

use icalrec_ical::content_line::{tokenize_logical_line, LineParams, LogicalLine};
use icalrec_ical::unfold::unfold;
use icalrec_ical::values::duration::Duration;

use crate::types::{DateListBlock, RawEvent};

/// Replaces "smart"/typographic Unicode punctuation (curly quotes, en/em
/// dashes, the ellipsis glyph) with its plain-ASCII equivalent. Applied to
/// the whole input text before unfolding/tokenizing, since it's cleanup of
/// what the source text *is*, not of any one property's value.
pub fn normalize_smart_quotes(input: &str) -> String {
    input
        .replace(['\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'], "'")
        .replace(['\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}'], "\"")
        .replace(['\u{2013}', '\u{2014}'], "-")
        .replace('\u{2026}', "...")
}

/// Component counters tracked by the assembler, surfaced for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyCounts {
    pub vevent: usize,
    pub vtodo: usize,
    pub vfreebusy: usize,
    pub valarm: usize,
}

impl RawEvent {
    /// Stores one non-framing content line into the appropriate field.
    /// Unknown keywords (including `X-` properties) are preserved verbatim.
    fn ingest(&mut self, line: &LogicalLine) {
        let params = line.params.clone();
        let value = line.value.clone();

        match line.property.to_ascii_uppercase().as_str() {
            "UID" => self.uid = Some(value),
            "SUMMARY" => self.summary = Some(value),
            "DESCRIPTION" => self.description = Some(value),
            "LOCATION" => self.location = Some(value),
            "DTSTAMP" => self.dtstamp = Some(value),
            "CREATED" => self.created = Some(value),
            "LAST-MODIFIED" => self.last_modified = Some(value),
            "SEQUENCE" => self.sequence = Some(value),
            "STATUS" => self.status = Some(value),
            "TRANSP" => self.transp = Some(value),
            "ORGANIZER" => self.organizer = Some(value),
            "ATTENDEE" => self.attendee.push(value),

            "DTSTART" => self.dtstart_raw = Some((params, value)),
            "DTEND" => self.dtend_raw = Some((params, value)),
            "RECURRENCE-ID" => self.recurrence_id_raw = Some((params, value)),

            "DURATION" => {
                self.duration = value.parse::<Duration>().ok();
                self.duration_raw = Some(value);
            }

            "RRULE" => self.rrule_raw = Some(value),
            "EXRULE" => self.exrule_raw = Some(value),
            "RDATE" => self.rdates.push(DateListBlock { params, value }),
            "EXDATE" => self.exdates.push(DateListBlock { params, value }),

            other => self.custom.push((other.to_string(), value)),
        }
    }

    /// Attributes a pathological value-only line (no property name) to the
    /// most recently seen keyword in this component.
    fn ingest_keyword(&mut self, keyword: &str, value: &str) {
        self.ingest(&LogicalLine {
            property: keyword.to_string(),
            params: LineParams::default(),
            value: value.to_string(),
        });
    }
}

/// Runs the component state machine over a raw iCalendar payload, returning
/// every assembled `VEVENT` in assembly order plus component counters.
pub fn assemble(input: &str) -> (Vec<RawEvent>, AssemblyCounts) {
    let mut stack: Vec<String> = vec![String::from("TOP")];
    let mut counts = AssemblyCounts::default();
    let mut events = Vec::new();
    let mut current: Option<RawEvent> = None;
    let mut last_keyword: Option<String> = None;

    for line in unfold(input) {
        if let Some(value) = line.strip_prefix(':') {
            if let (Some(event), Some(keyword)) = (current.as_mut(), last_keyword.as_ref()) {
                event.ingest_keyword(keyword, value);
            }
            continue;
        }

        let Some(logical) = tokenize_logical_line(&line) else {
            continue;
        };

        if logical.is_begin() {
            let component = logical.value.to_ascii_uppercase();
            stack.push(component.clone());
            last_keyword = None;

            match component.as_str() {
                "VEVENT" => {
                    counts.vevent += 1;
                    current = Some(RawEvent::default());
                }
                "VTODO" => counts.vtodo += 1,
                "VFREEBUSY" => counts.vfreebusy += 1,
                "VALARM" => counts.valarm += 1,
                _ => {}
            }

            continue;
        }

        if logical.is_end() {
            let component = logical.value.to_ascii_uppercase();

            if stack.last().map(String::as_str) == Some(component.as_str()) {
                stack.pop();
            }

            last_keyword = None;

            if component == "VEVENT" {
                if let Some(event) = current.take() {
                    events.push(event);
                }
            }

            continue;
        }

        if stack.last().map(String::as_str) == Some("VEVENT") {
            if let Some(event) = current.as_mut() {
                event.ingest(&logical);
                last_keyword = Some(logical.property.clone());
            }
        }
    }

    (events, counts)
}
