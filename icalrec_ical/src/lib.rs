pub mod grammar;
pub mod unfold;
pub mod content_line;
pub mod values;
pub mod timezone;

/// Context threaded through `render_ical_with_context` so a rendered moment
/// can be expressed in a timezone other than the one it was parsed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderingContext {
    pub tz: Option<chrono_tz::Tz>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParserError<'a> {
    span: ParserInput<'a>,
    message: Option<String>,
    context: Vec<String>,
}

impl <'a> std::fmt::Display for ParserError<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message.clone().unwrap_or(String::from("-"));
        let context = self.context.join(" <- ");

        write!(f, "Error: {message} in {context}")
    }
}

impl<'a> ParserError<'a> {
    pub fn new(message: String, span: ParserInput<'a>) -> Self {
        Self {
            span,
            message: Some(message),
            context: Vec::new(),
        }
    }

    pub fn span(&self) -> &ParserInput<'a> {
        &self.span
    }

    pub fn line(&self) -> u32 {
        self.span().location_line()
    }

    pub fn offset(&self) -> usize {
        self.span().location_offset()
    }
}

impl<'a> nom::error::ParseError<ParserInput<'a>> for ParserError<'a> {
    fn from_error_kind(input: ParserInput<'a>, kind: nom::error::ErrorKind) -> Self {
        Self::new(
            format!("parse error {:?}", kind),
            input,
        )
    }

    fn append(_input: ParserInput<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: ParserInput<'a>, unexpected: char) -> Self {
        Self::new(
            format!("unexpected character '{}'", unexpected),
            input,
        )
    }
}

impl<'a> nom::error::ContextError<ParserInput<'a>> for ParserError<'a> {
    fn add_context(_input: ParserInput, context: &'static str, mut other: Self) -> Self {
        other.context.push(String::from(context));
        other
    }
}

impl<'a, E> nom::error::FromExternalError<ParserInput<'a>, E> for ParserError<'a>
where
    E: ToString,
{
    /// Create a new error from an input position and an external error
    fn from_external_error(input: ParserInput<'a>, _kind: nom::error::ErrorKind, error: E) -> Self {
        Self::new(error.to_string(), input)
    }
}

/// Renders a single-line trace out of a `ParserError`. Kept deliberately terse -
/// this engine reports parse failures as log diagnostics, not multi-line spans.
pub fn convert_error<I: core::ops::Deref<Target = str>>(_input: I, error: ParserError) -> std::string::String {
    format!("{error}")
}

pub type ParserInput<'a> = nom_locate::LocatedSpan<&'a str>;
pub type ParserResult<'a, O> = nom::IResult<ParserInput<'a>, O, ParserError<'a>>;

pub trait ICalendarEntity {
    fn parse_ical(input: ParserInput) -> ParserResult<Self>
    where
        Self: Sized;

    fn render_ical(&self) -> String;

    fn render_ical_with_context(&self, _context: Option<&RenderingContext>) -> String {
        self.render_ical()
    }

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T> ICalendarEntity for Option<T>
where
    T: ICalendarEntity,
{
    fn parse_ical(input: ParserInput) -> ParserResult<Self> {
        T::parse_ical(input).map(|(remaining, parsed)| (remaining, Some(parsed)))
    }

    fn render_ical(&self) -> String {
        if let Some(entity) = self {
            entity.render_ical()
        } else {
            String::new()
        }
    }
}

#[macro_export]
macro_rules! impl_icalendar_entity_traits {
    ($entity:ident) => {
        impl std::str::FromStr for $entity {
            type Err = String;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let parser_result = nom::combinator::all_consuming(Self::parse_ical)(input.into());

                match parser_result {
                    Ok((_remaining, value)) => Ok(value),

                    Err(error) => {
                        if let nom::Err::Error(error) | nom::Err::Failure(error) = error {
                            Err(crate::convert_error(input, error))
                        } else {
                            Err(error.to_string())
                        }
                    }
                }
            }
        }

        impl ToString for $entity {
            fn to_string(&self) -> String {
                self.render_ical()
            }
        }
    }
}

/// Rewrites a parser's failure message, keeping its span. Wraps `parser` so
/// that any `Error`/`Failure` it produces is replaced with `message`, used
/// throughout `values` to surface one readable message for an `alt`/`tuple`
/// chain instead of nom's generic `ErrorKind` noise.
pub fn with_error_message<'a, O>(
    mut parser: impl FnMut(ParserInput<'a>) -> ParserResult<'a, O>,
    message: &'static str,
) -> impl FnMut(ParserInput<'a>) -> ParserResult<'a, O> {
    move |input: ParserInput<'a>| {
        parser(input).map_err(|error| match error {
            nom::Err::Error(inner) => nom::Err::Error(ParserError::new(String::from(message), *inner.span())),
            nom::Err::Failure(inner) => nom::Err::Failure(ParserError::new(String::from(message), *inner.span())),
            nom::Err::Incomplete(needed) => nom::Err::Incomplete(needed),
        })
    }
}

#[macro_export]
macro_rules! map_err_message {
    ($parser:expr, $message:expr $(,)?) => {
        $crate::with_error_message($parser, $message)
    }
}
