//! Askama templates for the web frontend.

use askama::Template;

/// Home page: the question form, plus the answer once there is one.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub question: String,
    pub answer: Option<String>,
}

impl IndexTemplate {
    /// Empty form.
    pub fn blank() -> Self {
        Self {
            question: String::new(),
            answer: None,
        }
    }

    /// Form showing `answer` beneath the question that produced it.
    pub fn answered(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Some(answer.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_has_no_answer() {
        let html = IndexTemplate::blank().render().unwrap();
        assert!(html.contains(r#"name="question""#));
        assert!(!html.contains(r#"class="answer""#));
    }

    #[test]
    fn answer_is_escaped() {
        let html = IndexTemplate::answered("<b>hi</b>", "It takes <4 hours> & change.")
            .render()
            .unwrap();
        assert!(html.contains(r#"class="answer""#));
        assert!(html.contains("&lt;4 hours&gt; &amp; change."));
        assert!(!html.contains("<b>hi</b>"));
    }
}
