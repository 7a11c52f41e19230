use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One generated multiple-choice question.
///
/// `answer` is whatever the model reported as correct: usually the full text
/// of one option, sometimes only its label (`"B"`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: String,
}

// Models sometimes emit bare numbers or booleans where text is expected.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.into_iter().filter_map(scalar_text).collect())
}

impl McqRecord {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }

    pub fn has_expected_shape(&self, option_count: usize) -> bool {
        self.options.len() == option_count
    }

    /// Position of the correct option, if the answer can be tied to one.
    pub fn correct_index(&self) -> Option<usize> {
        let answer = self.answer.trim();
        if answer.is_empty() {
            return None;
        }

        if let Some(idx) = self
            .options
            .iter()
            .position(|opt| opt.trim().eq_ignore_ascii_case(answer))
        {
            return Some(idx);
        }

        if let Some(idx) = label_index(answer) {
            return (idx < self.options.len()).then_some(idx);
        }

        // "B) Paris" / "B. Paris"
        let mut chars = answer.chars();
        let label = chars.next()?;
        let rest = chars.as_str().trim_start();
        if let Some(text) = rest.strip_prefix(')').or_else(|| rest.strip_prefix('.')) {
            let idx = label_index(&label.to_string())?;
            let text = text.trim();
            let matches = self
                .options
                .get(idx)
                .is_some_and(|opt| text.is_empty() || opt.trim().eq_ignore_ascii_case(text));
            return matches.then_some(idx);
        }

        None
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.correct_index()
            .and_then(|idx| self.options.get(idx))
            .map(String::as_str)
    }
}

/// Label shown in front of the option at `idx` ("A", "B", ...).
pub fn option_label(idx: usize) -> String {
    match u8::try_from(idx) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (idx + 1).to_string(),
    }
}

fn label_index(label: &str) -> Option<usize> {
    let mut chars = label.chars();
    let c = chars.next()?;
    if chars.next().is_some() || !c.is_ascii_alphabetic() {
        return None;
    }
    Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
}
