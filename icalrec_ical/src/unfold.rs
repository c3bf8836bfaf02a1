//! RFC-5545 §3.1 line unfolding: joins continuation lines back into the
//! logical lines the content-line tokenizer expects.

fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace("\n\r", "\n").replace('\r', "\n")
}

fn is_trimmable_control(character: char) -> bool {
    matches!(character, '\u{00}'..='\u{1F}' | '\u{7F}' | '\u{A0}')
}

fn strip_trailing_noise(line: &str) -> String {
    line.trim_end()
        .trim_end_matches(is_trimmable_control)
        .to_string()
}

/// Unfolds a raw calendar payload into a sequence of logical lines, joining
/// any line that starts with a single space or tab onto the line before it.
/// Empty logical lines are dropped.
pub fn unfold(input: &str) -> Vec<String> {
    let normalized = normalize_newlines(input);

    let mut logical_lines: Vec<String> = Vec::new();

    for raw_line in normalized.split('\n') {
        let starts_with_fold = raw_line.starts_with(' ') || raw_line.starts_with('\t');

        if starts_with_fold {
            if let Some(previous) = logical_lines.last_mut() {
                previous.push_str(&raw_line[1..]);
                continue;
            }
        }

        logical_lines.push(raw_line.to_string());
    }

    logical_lines
        .into_iter()
        .map(|line| strip_trailing_noise(&line))
        .filter(|line| !line.is_empty())
        .collect()
}
