use unicode_segmentation::UnicodeSegmentation;

/// A single parameter value: iCalendar params are either a bare scalar or a
/// comma-separated list (`CATEGORIES`, `MEMBER`, multi-valued `X-` params).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the first (or only) value, ignoring any trailing list members.
    pub fn as_single(&self) -> &str {
        match self {
            ParamValue::Single(value) => value,
            ParamValue::List(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn as_list(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(value) => vec![value.as_str()],
            ParamValue::List(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Parameters for a content line, preserved in the order they appeared.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LineParams(pub Vec<(String, ParamValue)>);

impl LineParams {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn get_single(&self, name: &str) -> Option<&str> {
        self.get(name).map(ParamValue::as_single)
    }
}

/// The output of tokenizing one logical (already unfolded) line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LogicalLine {
    pub property: String,
    pub params: LineParams,
    pub value: String,
}

impl LogicalLine {
    pub fn is_begin(&self) -> bool {
        self.property.eq_ignore_ascii_case("BEGIN")
    }

    pub fn is_end(&self) -> bool {
        self.property.eq_ignore_ascii_case("END")
    }
}

/// Consumes a run of characters up to (but not including) one of `stop_chars`
/// appearing outside of a double-quoted run, discarding the quote characters
/// themselves. Scans by extended grapheme cluster so multi-byte content never
/// desynchronises the scan.
fn scan_segment(graphemes: &[&str], index: &mut usize, stop_chars: &[&str]) -> String {
    let mut output = String::new();
    let mut in_quotes = false;

    while *index < graphemes.len() {
        let grapheme = graphemes[*index];

        if grapheme == "\"" {
            in_quotes = !in_quotes;
            *index += 1;
            continue;
        }

        if !in_quotes && stop_chars.contains(&grapheme) {
            break;
        }

        output.push_str(grapheme);
        *index += 1;
    }

    output
}

/// Tokenizes a single unfolded line into name/params/value, or `None` if the
/// line has no unquoted `:` to delimit a value (per RFC-5545 `contentline`
/// grammar, such a line is skipped rather than treated as an error).
pub fn tokenize_logical_line(line: &str) -> Option<LogicalLine> {
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    let mut index = 0;

    let property = scan_segment(&graphemes, &mut index, &[";", ":"]);

    if property.is_empty() || index >= graphemes.len() {
        return None;
    }

    let mut params = Vec::new();

    while index < graphemes.len() && graphemes[index] == ";" {
        index += 1;

        let param_name = scan_segment(&graphemes, &mut index, &["="]);

        if param_name.is_empty() || index >= graphemes.len() {
            return None;
        }

        index += 1; // skip '='

        let mut values = Vec::new();

        loop {
            values.push(scan_segment(&graphemes, &mut index, &[",", ";", ":"]));

            if index < graphemes.len() && graphemes[index] == "," {
                index += 1;
                continue;
            }

            break;
        }

        let param_value = if values.len() == 1 {
            ParamValue::Single(values.into_iter().next().unwrap())
        } else {
            ParamValue::List(values)
        };

        params.push((param_name, param_value));
    }

    if index >= graphemes.len() || graphemes[index] != ":" {
        return None;
    }

    index += 1; // skip the unquoted ':'

    let value = graphemes[index..].concat();

    Some(LogicalLine {
        property,
        params: LineParams(params),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_simple_property() {
        let line = tokenize_logical_line("UID:event-1234@example.com").unwrap();

        assert_eq!(line.property, "UID");
        assert!(line.params.0.is_empty());
        assert_eq!(line.value, "event-1234@example.com");
    }

    #[test]
    fn tokenizes_params_with_quoted_and_list_values() {
        let line = tokenize_logical_line(
            r#"CATEGORIES;X-TEST-KEY-ONE=VALUE_ONE,"VALUE_TWO";LANGUAGE=ENGLISH:APPOINTMENT,EDUCATION,"QUOTED, + STRING""#,
        )
        .unwrap();

        assert_eq!(line.property, "CATEGORIES");
        assert_eq!(
            line.params.get("X-TEST-KEY-ONE"),
            Some(&ParamValue::List(vec![
                String::from("VALUE_ONE"),
                String::from("VALUE_TWO"),
            ])),
        );
        assert_eq!(line.params.get_single("LANGUAGE"), Some("ENGLISH"));
        assert_eq!(line.value, r#"APPOINTMENT,EDUCATION,"QUOTED, + STRING""#);
    }

    #[test]
    fn colon_inside_quoted_param_value_is_not_a_boundary() {
        let line = tokenize_logical_line(
            r#"RESOURCES;ALTREP="http://xyzcorp.com/conf-rooms/f123.vcf":APPOINTMENT"#,
        )
        .unwrap();

        assert_eq!(
            line.params.get_single("ALTREP"),
            Some("http://xyzcorp.com/conf-rooms/f123.vcf"),
        );
        assert_eq!(line.value, "APPOINTMENT");
    }

    #[test]
    fn line_without_unquoted_colon_is_skipped() {
        assert!(tokenize_logical_line("JUST-A-TOKEN-NO-VALUE").is_none());
        assert!(tokenize_logical_line("").is_none());
    }

    #[test]
    fn begin_and_end_lines_are_recognised() {
        let begin = tokenize_logical_line("BEGIN:VEVENT").unwrap();
        assert!(begin.is_begin());
        assert_eq!(begin.value, "VEVENT");

        let end = tokenize_logical_line("END:VEVENT").unwrap();
        assert!(end.is_end());
    }

    #[test]
    fn multi_byte_content_does_not_desynchronise_scan() {
        let line = tokenize_logical_line(
            r#"SOMEPROP;X-TEST-KEY-TWO="KEY -🎄- TWO":value after emoji"#,
        )
        .unwrap();

        assert_eq!(line.params.get_single("X-TEST-KEY-TWO"), Some("KEY -🎄- TWO"));
        assert_eq!(line.value, "value after emoji");
    }
}
