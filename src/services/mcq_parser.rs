//! Turns the model's free-text reply into [`McqRecord`]s.
//!
//! The model is asked for a raw JSON array but does not always comply, so
//! parsing is best effort: whatever can be read is kept, everything else is
//! reported as a warning. Parsing never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::domain::McqRecord;

static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:q(?:uestion)?\s*\d+\s*[:.)]|\d+\s*[.)])\s*(.+)$")
        .expect("QUESTION_LINE is a valid regex pattern")
});

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([A-Ha-h])\s*[).:]\s*(.+)$").expect("OPTION_LINE is a valid regex pattern")
});

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:correct(?:\s+answer)?|answer)\s*[:\-]\s*(.+)$")
        .expect("ANSWER_LINE is a valid regex pattern")
});

const NOT_AN_ARRAY: &str =
    "The API returned JSON, but not in the expected array format. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMcqs {
    pub records: Vec<McqRecord>,
    pub warnings: Vec<String>,
}

impl ParsedMcqs {
    fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.warnings.push(message);
    }
}

pub fn parse_mcqs(raw: &str) -> ParsedMcqs {
    let mut parsed = ParsedMcqs::default();
    let body = strip_code_fence(raw.trim());

    if body.is_empty() {
        parsed.warn("The generation API returned a successful but empty response.");
        return parsed;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => collect_json_items(items, &mut parsed),
        Ok(Value::Object(fields)) => match fields.into_iter().find(|(_, v)| v.is_array()) {
            Some((key, Value::Array(items))) => {
                log::debug!("Unwrapping question list from field '{}'", key);
                collect_json_items(items, &mut parsed);
            }
            _ => parsed.warn(NOT_AN_ARRAY),
        },
        Ok(_) => parsed.warn(NOT_AN_ARRAY),
        Err(_) => {
            collect_text_blocks(body, &mut parsed);
            if parsed.records.is_empty() {
                parsed.warn(
                    "Failed to decode the API's response. The model might not be following the schema.",
                );
            }
        }
    }

    parsed
}

fn strip_code_fence(body: &str) -> &str {
    let Some(rest) = body.strip_prefix("```") else {
        return body;
    };
    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest).trim_start();
    // info string on the opening fence, with or without a newline after it
    let rest = match rest.get(..4) {
        Some(info) if info.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.trim()
}

fn collect_json_items(items: Vec<Value>, parsed: &mut ParsedMcqs) {
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<McqRecord>(item) {
            Ok(record) => keep_if_usable(record, idx + 1, parsed),
            Err(e) => parsed.warn(format!("Q{} could not be read: {}", idx + 1, e)),
        }
    }
}

fn keep_if_usable(mut record: McqRecord, number: usize, parsed: &mut ParsedMcqs) {
    record.question = record.question.trim().to_string();
    record.answer = record.answer.trim().to_string();
    record.options.retain(|opt| !opt.trim().is_empty());

    if record.question.is_empty() {
        parsed.warn(format!("Q{} was skipped: missing question text.", number));
    } else if record.options.is_empty() {
        parsed.warn(format!("Q{} was skipped: no answer options.", number));
    } else {
        parsed.records.push(record);
    }
}

/// Line-oriented fallback for replies such as
/// `Q1: ...` / `A) ...` / `B) ...` / `Correct: B`.
fn collect_text_blocks(body: &str, parsed: &mut ParsedMcqs) {
    let mut current: Option<McqRecord> = None;
    let mut number = 0;

    for line in body.lines() {
        let line = line.trim().trim_matches('*').trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = ANSWER_LINE.captures(line) {
            if let Some(record) = current.as_mut() {
                record.answer = caps[1].trim().to_string();
            }
        } else if let Some(caps) = QUESTION_LINE.captures(line) {
            if let Some(record) = current.take() {
                keep_if_usable(record, number, parsed);
            }
            number += 1;
            current = Some(McqRecord::new(caps[1].trim(), Vec::new(), ""));
        } else if let Some(caps) = OPTION_LINE.captures(line) {
            if let Some(record) = current.as_mut() {
                record.options.push(caps[2].trim().to_string());
            }
        } else if let Some(record) = current.as_mut() {
            // wrapped question text
            if record.options.is_empty() {
                record.question.push(' ');
                record.question.push_str(line);
            }
        }
    }

    if let Some(record) = current.take() {
        keep_if_usable(record, number, parsed);
    }
}
