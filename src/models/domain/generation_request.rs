use validator::{Validate, ValidationError};

/// One user submission. Lives only for the duration of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct GenerationRequest {
    #[validate(custom(function = "not_blank"))]
    pub text: String,

    #[validate(range(min = 1, max = 10))]
    pub question_count: u8,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>, question_count: u8) -> Self {
        Self {
            text: text.into(),
            question_count,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

fn not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Please paste some text into the box first.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_QUESTIONS;

    #[test]
    fn accepts_text_and_count_in_range() {
        assert!(GenerationRequest::new("Some article", 3).validate().is_ok());
        assert!(GenerationRequest::new("Some article", MAX_QUESTIONS).validate().is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        let request = GenerationRequest::new("  \n\t", 3);
        assert!(request.is_blank());
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_count_out_of_range() {
        assert!(GenerationRequest::new("text", 0).validate().is_err());
        assert!(GenerationRequest::new("text", MAX_QUESTIONS + 1).validate().is_err());
    }
}
