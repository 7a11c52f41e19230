use once_cell::sync::Lazy;
use schemars::JsonSchema;

use crate::config::EXPECTED_OPTION_COUNT;

// Shape the model is asked for. Parsing goes through the more lenient
// `McqRecord`; this type only feeds the schema.
#[allow(dead_code)]
#[derive(JsonSchema)]
#[schemars(rename = "Mcq")]
struct McqSchema {
    question: String,
    #[schemars(length(min = 4, max = 4))]
    options: Vec<String>,
    answer: String,
}

/// JSON schema of the array the model must return.
pub static RESPONSE_SCHEMA: Lazy<String> = Lazy::new(|| {
    let schema = schemars::schema_for!(Vec<McqSchema>);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "[]".to_string())
});

pub static MCQ_SYSTEM_PROMPT: Lazy<String> = Lazy::new(|| {
    format!(
        "You are an expert quiz creator. Your role is to generate high-quality, \
multiple-choice questions (MCQs) based *only* on the text provided by the user. \
You must generate exactly {count} options for each question. \
One of these options must be the correct answer, which is directly supported by the text. \
The other options must be plausible but incorrect distractors. \
The 'answer' field in your response must exactly match the text of the correct option. \
You MUST format your output as a single JSON array of objects, matching this schema:\n\
{schema}\n\
Do not include any other text or markdown formatting (like ```json) in your response. \
Just provide the raw JSON array.",
        count = EXPECTED_OPTION_COUNT,
        schema = RESPONSE_SCHEMA.as_str(),
    )
});

pub const SOURCE_TEXT_BEGIN: &str = "---BEGIN TEXT---";
pub const SOURCE_TEXT_END: &str = "---END TEXT---";

pub fn mcq_user_prompt(text: &str, question_count: u8) -> String {
    format!(
        "Please generate {question_count} multiple-choice questions from the following text:\n\n\
{SOURCE_TEXT_BEGIN}\n{text}\n{SOURCE_TEXT_END}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn item_schema(schema: &Value) -> &Value {
        let items = &schema["items"];
        match items["$ref"].as_str().and_then(|r| r.rsplit('/').next()) {
            Some(name) => &schema["$defs"][name],
            None => items,
        }
    }

    #[test]
    fn response_schema_requires_every_field_and_four_options() {
        let schema: Value =
            serde_json::from_str(RESPONSE_SCHEMA.as_str()).expect("schema should be JSON");
        let item = item_schema(&schema);

        let required: Vec<&str> = item["required"]
            .as_array()
            .expect("required list")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required.len(), 3);
        for field in ["question", "options", "answer"] {
            assert!(required.contains(&field), "{} should be required", field);
        }

        let options = &item["properties"]["options"];
        assert_eq!(options["minItems"], EXPECTED_OPTION_COUNT);
        assert_eq!(options["maxItems"], EXPECTED_OPTION_COUNT);
        assert!(options.get("default").is_none());
        assert!(!RESPONSE_SCHEMA.contains("description"));
    }

    #[test]
    fn system_prompt_embeds_schema_fields() {
        let prompt = MCQ_SYSTEM_PROMPT.as_str();
        assert!(prompt.contains("\"question\""));
        assert!(prompt.contains("\"options\""));
        assert!(prompt.contains("\"answer\""));
        assert!(prompt.contains("exactly 4 options"));
    }

    #[test]
    fn user_prompt_contains_count_and_fenced_text() {
        let prompt = mcq_user_prompt("Mitochondria produce ATP.", 5);
        assert!(prompt.starts_with("Please generate 5 multiple-choice questions"));
        assert!(prompt.contains("---BEGIN TEXT---\nMitochondria produce ATP.\n---END TEXT---"));
    }
}
