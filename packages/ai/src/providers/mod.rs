//! Narrative provider abstraction and implementations.

pub mod gemini;

use crate::AiError;

/// Trait for text-generation providers.
///
/// A provider receives the fully assembled prompt and returns prose. The
/// response is opaque to the rest of the pipeline.
#[async_trait::async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Sends the prompt and returns the provider's prose response.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails or the response carries no
    /// usable text.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

/// Creates a narrative provider from environment variables.
///
/// Requires `GEMINI_API_KEY`; `GEMINI_MODEL` overrides the default model.
///
/// # Errors
///
/// Returns [`AiError::Config`] if no API key is configured.
pub fn create_provider_from_env() -> Result<Box<dyn NarrativeProvider>, AiError> {
    let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| AiError::Config {
        message: "GEMINI_API_KEY environment variable not set".to_string(),
    })?;
    let model =
        std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());
    Ok(Box::new(gemini::GeminiProvider::new(api_key, model)))
}
