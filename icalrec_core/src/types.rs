use std::collections::HashMap;

use chrono_tz::Tz;

use icalrec_ical::content_line::LineParams;
use icalrec_ical::values::duration::Duration;

/// The four-slot tuple `{ params, raw_value, epoch, reconstructed }` used for
/// `DTSTART`/`DTEND`/`RECURRENCE-ID`. `reconstructed` is the `TZID=`-prefixed
/// form handed to the moment parser.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValueWithParams {
    pub params: LineParams,
    pub raw_value: String,
    pub epoch: i64,
    pub reconstructed: String,
}

impl PropertyValueWithParams {
    pub fn tzid(&self) -> Option<&str> {
        self.params.get_single("TZID")
    }

    pub fn is_utc(&self) -> bool {
        self.raw_value.ends_with('Z')
    }
}

/// One `EXDATE`/`RDATE` content line: its parameters (notably `TZID`) and its
/// raw comma-separated value, kept together since the `TZID` only applies to
/// this one block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateListBlock {
    pub params: LineParams,
    pub value: String,
}

/// A mapping from property name to scalar or structured value, assembled
/// straight off the content-line stream for a single `VEVENT`. Repeated
/// properties (`EXDATE`, `RDATE`, `ATTENDEE`) keep every occurrence in order;
/// unrecognised properties are preserved verbatim for the post-processor's
/// normaliser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    pub uid: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub dtstamp: Option<String>,
    pub created: Option<String>,
    pub last_modified: Option<String>,
    pub sequence: Option<String>,
    pub status: Option<String>,
    pub transp: Option<String>,
    pub organizer: Option<String>,
    pub attendee: Vec<String>,

    pub dtstart_raw: Option<(LineParams, String)>,
    pub dtend_raw: Option<(LineParams, String)>,
    pub recurrence_id_raw: Option<(LineParams, String)>,

    pub duration_raw: Option<String>,
    pub duration: Option<Duration>,

    pub rrule_raw: Option<String>,
    pub exrule_raw: Option<String>,
    pub rdates: Vec<DateListBlock>,
    pub exdates: Vec<DateListBlock>,

    /// Unrecognised (including `X-`) properties, in assembly order.
    pub custom: Vec<(String, String)>,
}

/// Output record. Created when the assembler finalises a `VEVENT`; the
/// expander mutates copies of it when splicing recurrence overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub uid: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub dtstamp: Option<String>,
    pub created: Option<String>,
    pub last_modified: Option<String>,
    pub sequence: Option<String>,
    pub status: Option<String>,
    pub transp: Option<String>,
    pub organizer: Option<String>,
    pub attendee: Vec<String>,
    pub custom: Vec<(String, String)>,

    pub dtstart: PropertyValueWithParams,
    pub dtend: PropertyValueWithParams,
    pub duration: Option<i64>,
    pub recurrence_id: Option<PropertyValueWithParams>,

    pub dtstart_tz: Tz,
    pub dtend_tz: Tz,
}

/// `uid -> (original_epoch -> override_event)`. Populated by the
/// post-processor when it sees a `RECURRENCE-ID`; consulted by the expander
/// to suppress a generated occurrence at a matching epoch and emit the
/// override in its place.
pub type ModifiedInstanceIndex = HashMap<String, HashMap<i64, Event>>;
