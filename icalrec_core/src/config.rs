use chrono_tz::Tz;

use icalrec_ical::values::recur::WeekDay;

/// The in-memory options a caller tunes the engine with. Constructed with
/// `Default` and overridden field-by-field; there is no file-backed config
/// layer since the engine is an embedded library, not a standalone service.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Years used as an `UNTIL` fallback for unbounded recurrences.
    pub default_span_years: u32,
    /// Fallback zone when none resolved from the input.
    pub default_time_zone: Tz,
    /// Fallback week-start weekday for `WKST`.
    pub default_week_start: WeekDay,
    /// When true, the RRULE Expander is bypassed entirely.
    pub skip_recurrence: bool,
    /// When true, the smart-quote normaliser is bypassed.
    pub disable_character_replacement: bool,
    /// Window lower bound, in days before "now".
    pub filter_days_before: Option<u32>,
    /// Window upper bound, in days after "now".
    pub filter_days_after: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_span_years: 2,
            default_time_zone: Tz::UTC,
            default_week_start: WeekDay::Monday,
            skip_recurrence: false,
            disable_character_replacement: false,
            filter_days_before: None,
            filter_days_after: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.default_span_years == 0 {
            return Err(EngineError::Configuration(String::from(
                "defaultSpan must be a positive number of years",
            )));
        }

        Ok(())
    }
}

/// The engine's error taxonomy. `InvalidMoment`/`InvalidDuration`/`InvalidRRule`
/// are recoverable: callers see them only via the diagnostic sink, never as a
/// propagated `Result::Err` from the top-level `parse` entry point.
/// `ConfigurationError` is the only variant `parse_with_config` can return.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid date/time moment: {0}")]
    InvalidMoment(String),

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("invalid RRULE: {0}")]
    InvalidRRule(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// A human-readable diagnostic surfaced for recoverable parse/expansion
/// failures. Never fatal; always accompanied by ambient `log` emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub uid: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(uid: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            uid: uid.map(String::from),
            message: message.into(),
        }
    }
}

/// The "Logger hook" of the external interface, generalised into the
/// ambient structured-logging layer. Absence of a sink silently discards
/// messages; the engine always additionally emits through `log` regardless.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: discards every diagnostic it receives.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

pub(crate) fn emit(sink: &dyn DiagnosticSink, uid: Option<&str>, message: impl Into<String>) {
    let message = message.into();

    log::warn!("{}: {}", uid.unwrap_or("-"), message);

    sink.report(Diagnostic::new(uid, message));
}
