//! Chat widget session: the transcript plus the open/awaiting state machine.
//!
//! ```text
//! Closed --open--> OpenIdle --begin--> OpenAwaitingResponse --complete--> OpenIdle
//!   ^                 |                        |
//!   +------close------+------------close-------+
//! ```
//!
//! Closing never cancels an outstanding request; its reply is appended by
//! `complete` and shows up when the widget is reopened.

use crate::ai::{Responder, answer_or_fallback};
use crate::types::ChatMessage;

pub const GREETING: &str = "Hi there! How can I help you with selling your software licenses today?";

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "How does the license valuation process work?",
    "What types of software licenses do you accept?",
    "How long does it take to get paid?",
    "Is my data secure when I sell my license?",
    "What payment methods do you support?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Closed,
    OpenIdle,
    OpenAwaitingResponse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("message is empty")]
    Empty,
    #[error("chat widget is closed")]
    Closed,
    #[error("a reply is still pending")]
    Busy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    draft: String,
    open: bool,
    awaiting: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::bot(GREETING)],
            draft: String::new(),
            open: false,
            awaiting: false,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn state(&self) -> WidgetState {
        match (self.open, self.awaiting) {
            (false, _) => WidgetState::Closed,
            (true, false) => WidgetState::OpenIdle,
            (true, true) => WidgetState::OpenAwaitingResponse,
        }
    }

    /// Text typed into the composer but not yet sent.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a reply is outstanding, whether or not the widget is open.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Suggestions are offered only before the first exchange.
    pub fn suggestions_visible(&self) -> bool {
        self.transcript.len() <= 1
    }

    /// Records the visitor's message and marks the session as awaiting a reply.
    /// Returns the question to hand to the responder.
    pub fn begin(&mut self, text: &str) -> Result<String, SubmitError> {
        let question = text.trim();
        if question.is_empty() {
            return Err(SubmitError::Empty);
        }
        if !self.open {
            return Err(SubmitError::Closed);
        }
        if self.awaiting {
            return Err(SubmitError::Busy);
        }

        self.transcript.push(ChatMessage::user(question));
        self.awaiting = true;
        Ok(question.to_string())
    }

    /// Sends `text` (typed or a suggestion). The draft is cleared only when
    /// the submission is accepted.
    pub fn submit(&mut self, text: &str) -> Result<String, SubmitError> {
        let question = self.begin(text)?;
        self.draft.clear();
        Ok(question)
    }

    /// Sends whatever is in the composer.
    pub fn submit_draft(&mut self) -> Result<String, SubmitError> {
        let text = std::mem::take(&mut self.draft);
        let result = self.submit(&text);
        if result.is_err() {
            self.draft = text;
        }
        result
    }

    /// Appends the reply for the outstanding question. A reply with nothing
    /// outstanding is dropped.
    pub fn complete(&mut self, reply: impl Into<String>) {
        if !self.awaiting {
            tracing::warn!("chat reply arrived with no outstanding question");
            return;
        }
        self.transcript.push(ChatMessage::bot(reply));
        self.awaiting = false;
    }
}

/// Runs one full exchange: begin, ask the responder, complete.
pub async fn ask<R>(session: &mut ChatSession, responder: &R, text: &str) -> Result<(), SubmitError>
where
    R: Responder + ?Sized,
{
    let question = session.submit(text)?;
    let reply = answer_or_fallback(responder, &question).await;
    session.complete(reply);
    Ok(())
}
