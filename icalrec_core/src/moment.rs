//! The `[TZID=<zone>:]YYYYMMDD['T'HHMMSS][Z]` moment grammar: combines the
//! DATE/DATE-TIME value parser with the time-zone resolver so the rest of
//! the engine can go from a raw property string straight to an epoch.

use std::str::FromStr;

use chrono_tz::Tz;

use icalrec_ical::timezone::resolve_timezone;
use icalrec_ical::values::date_time::DateTime;

use crate::config::EngineError;

/// A calendar point: the parsed `DateTime` value, the zone it was resolved
/// against, and its derived epoch. `is_date_only`/`is_utc` mirror the
/// `DateTime` variant so callers don't need to match on it themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonedMoment {
    pub date_time: DateTime,
    pub tz: Tz,
    pub is_date_only: bool,
    pub is_utc: bool,
    pub epoch: i64,
}

/// Splits a leading `TZID=<zone>:` (optionally double-quoted) prefix off of
/// `raw`, returning the zone candidate (if any) and the remaining value.
fn split_tzid_prefix(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw.strip_prefix("TZID=") else {
        return (None, raw);
    };

    if let Some(quoted) = rest.strip_prefix('"') {
        if let Some(end) = quoted.find('"') {
            let tzid = &quoted[..end];
            let after_quote = &quoted[end + 1..];
            let value = after_quote.strip_prefix(':').unwrap_or(after_quote);
            return (Some(tzid), value);
        }
    }

    if let Some(colon) = rest.find(':') {
        return (Some(&rest[..colon]), &rest[colon + 1..]);
    }

    (None, raw)
}

/// Parses a moment string per 4.C/4.D: a `TZID=` prefix (if any) resolves
/// through the time-zone resolver; a trailing `Z` means UTC regardless of
/// any zone prefix; otherwise the configured default zone applies.
pub fn parse_moment(raw: &str, default_tz: Tz) -> Result<ZonedMoment, EngineError> {
    let (tzid, value) = split_tzid_prefix(raw);

    let date_time = DateTime::from_str(value)
        .map_err(|error| EngineError::InvalidMoment(format!("{value}: {error}")))?;

    let is_date_only = matches!(date_time, DateTime::LocalDate(_));
    let is_utc = matches!(date_time, DateTime::UtcDateTime(_));

    let tz = if is_utc {
        Tz::UTC
    } else if let Some(tzid) = tzid {
        resolve_timezone(tzid, default_tz)
    } else {
        default_tz
    };

    let epoch = date_time.get_utc_timestamp(Some(&tz));

    Ok(ZonedMoment { date_time, tz, is_date_only, is_utc, epoch })
}
