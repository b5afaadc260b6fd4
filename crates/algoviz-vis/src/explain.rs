//! Plain-language explanations from an external text generator.
//!
//! The generator is injected as an [`ExplanationSource`]; nothing else in
//! the crate depends on it. The crate ships no transport, so the `algoviz`
//! binary shows no explanations. Presentation layers that own an HTTP
//! client implement the trait and call [`Explainer::explain`] with
//! [`AlgorithmKey::name`](crate::AlgorithmKey::name) and
//! [`AlgorithmKey::category`](crate::AlgorithmKey::category).

use std::future::Future;

use thiserror::Error;

use crate::catalog::Category;

/// Failure reported by an explanation source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    #[error("{0}")]
    Transport(String),

    #[error("the response contained no text")]
    EmptyResponse,
}

/// Generation settings for the explanation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainConfig {
    /// Credential for the source. `None` means explanations are disabled.
    pub api_key: Option<String>,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            temperature: 0.5,
            top_p: 0.95,
        }
    }
}

impl ExplainConfig {
    /// Defaults with the key taken from `ALGOVIZ_API_KEY`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("ALGOVIZ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("ALGOVIZ_API_KEY is not set; explanations are disabled");
        }
        Self {
            api_key,
            ..Self::default()
        }
    }
}

/// A fully built request.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Prompt {
    pub fn new(name: &str, category: Category, config: &ExplainConfig) -> Self {
        let text = format!(
            "You are an expert computer science professor.\n\
             Explain the algorithm or data structure called \"{name}\" from the category \"{category}\".\n\
             Keep the explanation concise, student-friendly, and easy to understand.\n\
             Focus on the core concept and how it works.\n\
             Do not include code snippets.\n\
             Format the output in simple paragraphs."
        );
        Self {
            text,
            temperature: config.temperature,
            top_p: config.top_p,
        }
    }
}

/// Something that turns a prompt into text.
pub trait ExplanationSource {
    fn generate(&self, prompt: &Prompt) -> impl Future<Output = Result<String, ExplainError>> + Send;
}

/// Wraps a source so that every outcome is a displayable string.
#[derive(Debug, Clone)]
pub struct Explainer<S> {
    config: ExplainConfig,
    source: S,
}

impl<S: ExplanationSource> Explainer<S> {
    pub fn new(config: ExplainConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ExplainConfig {
        &self.config
    }

    /// Explanation text for `name`, or a readable error message.
    pub async fn explain(&self, name: &str, category: Category) -> String {
        if self.config.api_key.is_none() {
            return "Error: API key is not configured. Cannot generate AI explanation.".to_string();
        }

        let prompt = Prompt::new(name, category, &self.config);
        match self.source.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!(name, "Explanation source returned no text");
                format!(
                    "An error occurred while generating the explanation: {}",
                    ExplainError::EmptyResponse
                )
            }
            Err(e) => {
                tracing::warn!(name, error = %e, "Failed to generate explanation");
                format!("An error occurred while generating the explanation: {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records prompts and answers with a canned result.
    struct Canned {
        answer: Result<String, ExplainError>,
        seen: Mutex<Vec<Prompt>>,
    }

    impl Canned {
        fn new(answer: Result<String, ExplainError>) -> Self {
            Self {
                answer,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl ExplanationSource for Canned {
        fn generate(
            &self,
            prompt: &Prompt,
        ) -> impl Future<Output = Result<String, ExplainError>> + Send {
            self.seen.lock().unwrap().push(prompt.clone());
            let answer = self.answer.clone();
            async move { answer }
        }
    }

    fn configured() -> ExplainConfig {
        ExplainConfig {
            api_key: Some("test-key".to_string()),
            ..ExplainConfig::default()
        }
    }

    #[test]
    fn missing_key_never_calls_source() {
        let explainer = Explainer::new(ExplainConfig::default(), Canned::new(Ok("hi".into())));
        let text = tokio_test::block_on(explainer.explain("Bubble Sort", Category::Sorting));
        assert_eq!(
            text,
            "Error: API key is not configured. Cannot generate AI explanation."
        );
        assert!(explainer.source.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn passes_text_through() {
        let explainer = Explainer::new(configured(), Canned::new(Ok("Swaps neighbours.".into())));
        let text = tokio_test::block_on(explainer.explain("Bubble Sort", Category::Sorting));
        assert_eq!(text, "Swaps neighbours.");

        let seen = explainer.source.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].text.contains("\"Bubble Sort\""));
        assert!(seen[0].text.contains("\"Sorting\""));
        assert_eq!(seen[0].temperature, 0.5);
        assert_eq!(seen[0].top_p, 0.95);
    }

    #[test]
    fn transport_failure_becomes_text() {
        let explainer = Explainer::new(
            configured(),
            Canned::new(Err(ExplainError::Transport("connection refused".into()))),
        );
        let text = tokio_test::block_on(explainer.explain("Queue", Category::StacksAndQueues));
        assert_eq!(
            text,
            "An error occurred while generating the explanation: connection refused"
        );
    }

    #[test]
    fn blank_answer_is_an_error() {
        let explainer = Explainer::new(configured(), Canned::new(Ok("  ".into())));
        let text = tokio_test::block_on(explainer.explain("Queue", Category::StacksAndQueues));
        assert!(text.ends_with("the response contained no text"));
    }
}
