use async_trait::async_trait;
use reqwest::StatusCode;

// ============================================
// Prompt and fallback
// ============================================

pub const SYSTEM_PROMPT: &str = r#"You are SoftSell's AI Assistant. Your role is to help users understand the software license selling process.
Key responsibilities:
- Provide clear, professional information about license selling
- Explain SoftSell's valuation process and security measures
- Answer questions about payment methods and timelines
- Stay focused on software license related topics
- Be concise but helpful
- If unsure, direct users to contact support at support@softsell.com

Remember: Maintain a professional, knowledgeable tone and focus on software license trading topics."#;

/// Shown in place of an answer whenever the responder fails, whatever the cause.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting to the service. Please try again or contact our support team.";

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("Gemini API key not found")]
    MissingCredential,

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response from Gemini API: {0}")]
    MalformedResponse(String),
}

impl ResponderError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ResponderError::MissingCredential => "missing_credential",
            ResponderError::Network(_) => "network",
            ResponderError::Status { .. } => "status",
            ResponderError::MalformedResponse(_) => "malformed_response",
        }
    }
}

pub type ResponderResult<T> = Result<T, ResponderError>;

// ============================================
// Responder seam
// ============================================

/// Turns a visitor question into an answer. One attempt, no retries.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Responder {
    async fn respond(&self, question: &str) -> ResponderResult<String>;
}

/// Asks the responder and collapses every failure into [`FALLBACK_REPLY`].
pub async fn answer_or_fallback<R>(responder: &R, question: &str) -> String
where
    R: Responder + ?Sized,
{
    match responder.respond(question).await {
        Ok(answer) => answer,
        Err(err) => {
            tracing::warn!(kind = err.kind(), "chat responder failed: {err}");
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    impl Responder for Failing {
        async fn respond(&self, _question: &str) -> ResponderResult<String> {
            Err(ResponderError::MalformedResponse("no candidates".into()))
        }
    }

    #[tokio::test]
    async fn failures_collapse_to_fallback() {
        assert_eq!(answer_or_fallback(&Failing, "hi").await, FALLBACK_REPLY);
    }

    #[test]
    fn error_kinds_stay_distinct() {
        assert_eq!(ResponderError::MissingCredential.kind(), "missing_credential");
        let status = ResponderError::Status {
            status: StatusCode::FORBIDDEN,
            body: "denied".into(),
        };
        assert_eq!(status.kind(), "status");
        assert_eq!(status.to_string(), "Gemini API error 403 Forbidden: denied");
    }
}
