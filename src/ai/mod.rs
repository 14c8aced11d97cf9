/// AI module for SoftSell
///
/// Answers visitor questions in the chat widget by forwarding them to the
/// Gemini generative-language API.
///
/// # Architecture
///
/// - `client` - the `Responder` seam, its error type and the fallback policy
/// - `providers` - the Gemini HTTP client
///
/// # Usage
///
/// ```rust,no_run
/// use softsell::ai::{GeminiClient, answer_or_fallback};
/// use softsell::config::AppConfig;
///
/// # async fn example() {
/// let client = GeminiClient::from_config(&AppConfig::load());
/// let reply = answer_or_fallback(&client, "How long does it take to get paid?").await;
/// # }
/// ```
mod client;
mod providers;

// Re-export main types
pub use client::{
    FALLBACK_REPLY, Responder, ResponderError, ResponderResult, SYSTEM_PROMPT,
    answer_or_fallback,
};
pub use providers::GeminiClient;
pub use providers::gemini::{build_prompt, extract_answer};
