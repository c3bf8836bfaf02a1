use std::collections::HashMap;
use std::sync::Mutex;

use chrono_tz::Tz;
use lazy_static::lazy_static;

lazy_static! {
    /// Maps CLDR long display names (as commonly found in calendars exported
    /// by desktop/mobile clients) onto their canonical IANA identifier. This
    /// is a representative slice of the full CLDR table, not the whole thing
    /// - see DESIGN.md.
    static ref CLDR_DISPLAY_NAME_MAP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("Pacific Time", "America/Los_Angeles");
        map.insert("Mountain Time", "America/Denver");
        map.insert("Central Time", "America/Chicago");
        map.insert("Eastern Time", "America/New_York");
        map.insert("Greenwich Mean Time", "Etc/GMT");
        map.insert("Central European Time", "Europe/Berlin");
        map.insert("Eastern European Time", "Europe/Bucharest");
        map.insert("British Summer Time", "Europe/London");
        map.insert("Japan Standard Time", "Asia/Tokyo");
        map.insert("India Standard Time", "Asia/Kolkata");
        map.insert("China Standard Time", "Asia/Shanghai");
        map.insert("Australian Eastern Time", "Australia/Sydney");
        map
    };

    /// Maps Windows zone identifiers (as published in CLDR's
    /// `windowsZones.xml`) onto their canonical IANA identifier. Again a
    /// representative slice; inject a fuller table from that source if
    /// needed.
    static ref WINDOWS_ZONE_MAP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("Pacific Standard Time", "America/Los_Angeles");
        map.insert("Mountain Standard Time", "America/Denver");
        map.insert("Central Standard Time", "America/Chicago");
        map.insert("Eastern Standard Time", "America/New_York");
        map.insert("GMT Standard Time", "Europe/London");
        map.insert("W. Europe Standard Time", "Europe/Berlin");
        map.insert("Romance Standard Time", "Europe/Paris");
        map.insert("Central Europe Standard Time", "Europe/Budapest");
        map.insert("FLE Standard Time", "Europe/Kiev");
        map.insert("Tokyo Standard Time", "Asia/Tokyo");
        map.insert("India Standard Time", "Asia/Kolkata");
        map.insert("China Standard Time", "Asia/Shanghai");
        map.insert("AUS Eastern Standard Time", "Australia/Sydney");
        map.insert("UTC", "Etc/UTC");
        map
    };

    /// Append-only cache of IANA validity checks, keyed on the raw candidate
    /// string. A concurrent embedding must either give each parse its own
    /// cache or guard this one, per the concurrency model.
    static ref VALID_IANA_CACHE: Mutex<HashMap<String, Option<Tz>>> = Mutex::new(HashMap::new());
}

fn cldr_display_name_map() -> &'static HashMap<&'static str, &'static str> {
    &CLDR_DISPLAY_NAME_MAP
}

fn windows_zone_map() -> &'static HashMap<&'static str, &'static str> {
    &WINDOWS_ZONE_MAP
}

fn strip_quotes(candidate: &str) -> &str {
    candidate.trim_matches('"')
}

/// Decodes a handful of HTML entities that show up in TZID parameters
/// copy-pasted out of calendar UIs (e.g. `&amp;` in "AT&amp;T").
fn html_entity_decode(candidate: &str) -> String {
    candidate
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn lookup_iana(candidate: &str) -> Option<Tz> {
    let mut cache = VALID_IANA_CACHE.lock().unwrap();

    if let Some(cached) = cache.get(candidate) {
        return *cached;
    }

    let resolved = candidate.parse::<Tz>().ok();
    cache.insert(candidate.to_string(), resolved);
    resolved
}

/// Resolves a candidate zone string (IANA, CLDR display name, or Windows
/// zone ID) to a `Tz`, falling back to `default_tz` when nothing matches.
///
/// # Examples
///
/// ```rust
/// use chrono_tz::Tz;
/// use icalrec_ical::timezone::resolve_timezone;
///
/// assert_eq!(resolve_timezone("Europe/London", Tz::UTC), Tz::Europe__London);
/// assert_eq!(resolve_timezone("W. Europe Standard Time", Tz::UTC), Tz::Europe__Berlin);
/// assert_eq!(resolve_timezone("Central Time", Tz::UTC), Tz::America__Chicago);
/// assert_eq!(resolve_timezone("Not A Zone", Tz::UTC), Tz::UTC);
/// ```
pub fn resolve_timezone(candidate: &str, default_tz: Tz) -> Tz {
    let decoded = html_entity_decode(strip_quotes(candidate));

    if let Some(tz) = lookup_iana(&decoded) {
        return tz;
    }

    if let Some(iana) = cldr_display_name_map().get(decoded.as_str()) {
        if let Some(tz) = lookup_iana(iana) {
            return tz;
        }
    }

    if let Some(iana) = windows_zone_map().get(decoded.as_str()) {
        if let Some(tz) = lookup_iana(iana) {
            return tz;
        }
    }

    default_tz
}
