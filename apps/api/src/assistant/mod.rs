//! Resume assistant: LLM-backed rewriting of resume text.
//!
//! Two operations: tighten resume bullets, and draft a cover letter for a JD.
//! Both go through `TextGenerator`; nothing here knows which backend answers.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::{CompletionRequest, LlmError, TextGenerator};
use prompts::{cover_letter_prompt, OPTIMIZE_PROMPT_TEMPLATE, RESUME_WRITER_SYSTEM};

const MAX_TOKENS: u32 = 800;
/// Cover letters always use a slightly warmer temperature than optimization.
pub const COVER_LETTER_TEMPERATURE: f32 = 0.4;

/// Rewrites resume bullets to be concise, quantified and action-led.
pub async fn optimize_resume(
    generator: &dyn TextGenerator,
    resume_text: &str,
    temperature: f32,
) -> Result<String, LlmError> {
    let request = CompletionRequest {
        system: system_prompt(),
        prompt: OPTIMIZE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text),
        temperature: temperature.clamp(0.0, 1.0),
        max_tokens: MAX_TOKENS,
    };
    info!("Optimizing resume ({} chars)", resume_text.len());
    generator.complete(&request).await
}

/// Drafts a one-page cover letter for `jd_text` from `resume_text`.
pub async fn cover_letter(
    generator: &dyn TextGenerator,
    resume_text: &str,
    jd_text: &str,
) -> Result<String, LlmError> {
    let request = CompletionRequest {
        system: system_prompt(),
        prompt: cover_letter_prompt(jd_text, resume_text),
        temperature: COVER_LETTER_TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };
    info!(
        "Generating cover letter (resume {} chars, jd {} chars)",
        resume_text.len(),
        jd_text.len()
    );
    generator.complete(&request).await
}

fn system_prompt() -> String {
    format!("{RESUME_WRITER_SYSTEM} {PLAIN_TEXT_INSTRUCTION}")
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{CompletionRequest, LlmError, TextGenerator};

    /// Canned generator that records every request it receives.
    #[derive(Default)]
    pub struct RecordingGenerator {
        pub reply: Option<String>,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl RecordingGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn last_request(&self) -> CompletionRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone().ok_or(LlmError::EmptyContent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingGenerator;
    use super::*;

    #[tokio::test]
    async fn test_optimize_embeds_resume_and_clamps_temperature() {
        let generator = RecordingGenerator::replying("- Led migration cutting costs 30%");
        let out = optimize_resume(&generator, "- did a migration", 3.0).await.unwrap();

        assert_eq!(out, "- Led migration cutting costs 30%");
        let request = generator.last_request();
        assert!(request.prompt.contains("- did a migration"));
        assert!(request.prompt.starts_with("Rewrite the following resume bullets"));
        assert_eq!(request.temperature, 1.0);
        assert_eq!(request.max_tokens, MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_cover_letter_uses_fixed_temperature_and_both_texts() {
        let generator = RecordingGenerator::replying("Dear hiring manager,");
        cover_letter(&generator, "Rust engineer", "We need Rust").await.unwrap();

        let request = generator.last_request();
        assert_eq!(request.temperature, COVER_LETTER_TEMPERATURE);
        let jd_at = request.prompt.find("We need Rust").unwrap();
        let resume_at = request.prompt.find("Rust engineer").unwrap();
        assert!(jd_at < resume_at, "JD must precede resume in the prompt");
        assert!(request.prompt.ends_with("Keep it concise and persuasive."));
    }

    #[tokio::test]
    async fn test_cover_letter_keeps_placeholder_text_from_jd_literal() {
        let generator = RecordingGenerator::replying("Dear team");
        cover_letter(&generator, "RESUME BODY", "Paste {resume_text} here; {jd_text} too")
            .await
            .unwrap();

        let prompt = generator.last_request().prompt;
        assert!(prompt.contains("Paste {resume_text} here; {jd_text} too"));
        assert_eq!(prompt.matches("RESUME BODY").count(), 1);
    }

    #[tokio::test]
    async fn test_optimize_keeps_braces_in_resume_literal() {
        let generator = RecordingGenerator::replying("ok");
        optimize_resume(&generator, "Built {resume_text} parser", 0.2)
            .await
            .unwrap();
        assert!(generator.last_request().prompt.contains("Built {resume_text} parser"));
    }

    #[tokio::test]
    async fn test_generator_error_propagates() {
        let generator = RecordingGenerator::default();
        let result = optimize_resume(&generator, "text", 0.2).await;
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }
}
