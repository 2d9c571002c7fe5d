//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::assistant::{AnswerKind, FinalAnswer};

/// A question, from either the HTML form or the JSON API.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

impl AskRequest {
    /// The question with surrounding whitespace removed, or `None` if blank.
    pub fn query(&self) -> Option<&str> {
        let q = self.question.trim();
        (!q.is_empty()).then_some(q)
    }
}

/// Answer returned by `POST /api/ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub kind: AnswerKind,
}

impl From<FinalAnswer> for AskResponse {
    fn from(answer: FinalAnswer) -> Self {
        Self {
            answer: answer.text,
            kind: answer.kind,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_questions_have_no_query() {
        for question in ["", "   ", "\n\t"] {
            let req = AskRequest {
                question: question.into(),
            };
            assert_eq!(req.query(), None);
        }

        let req = AskRequest {
            question: "  Boston to New York? ".into(),
        };
        assert_eq!(req.query(), Some("Boston to New York?"));
    }

    #[test]
    fn missing_question_field_deserializes_as_blank() {
        let req: AskRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.query(), None);
    }

    #[test]
    fn response_serializes_kind_in_snake_case() {
        let response = AskResponse::from(FinalAnswer {
            text: "About 4 hours.".into(),
            kind: AnswerKind::Duration,
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"answer": "About 4 hours.", "kind": "duration"})
        );
    }
}
