// 输入校验
use crate::domain::error::ValidationError;
use crate::domain::model::{DetectionMethod, DetectionRequest};

/// Minimum trimmed length (in characters) the service accepts.
pub const MIN_TEXT_CHARS: usize = 3;

/// Trim `text` and check it is long enough to submit.
pub fn validate_request(
    text: &str,
    method: DetectionMethod,
) -> Result<DetectionRequest, ValidationError> {
    let trimmed = text.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        return Err(ValidationError::Empty);
    }
    if length < MIN_TEXT_CHARS {
        return Err(ValidationError::TooShort {
            min: MIN_TEXT_CHARS,
            needed: MIN_TEXT_CHARS - length,
        });
    }

    Ok(DetectionRequest::new(trimmed.to_string(), method))
}

/// Live hint shown under the input box while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFeedback {
    Blank,
    NeedMore(usize),
    Ready(usize),
}

impl InputFeedback {
    pub fn message(&self) -> String {
        match self {
            InputFeedback::Blank => format!(
                "Minimum {} characters required for accurate detection.",
                MIN_TEXT_CHARS
            ),
            InputFeedback::NeedMore(n) => {
                format!("Need {} more characters for accurate detection.", n)
            }
            InputFeedback::Ready(n) => {
                format!("Text length is good for detection ({} characters).", n)
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, InputFeedback::Ready(_))
    }
}

pub fn input_feedback(text: &str) -> InputFeedback {
    let length = text.trim().chars().count();
    match length {
        0 => InputFeedback::Blank,
        n if n < MIN_TEXT_CHARS => InputFeedback::NeedMore(MIN_TEXT_CHARS - n),
        n => InputFeedback::Ready(n),
    }
}
