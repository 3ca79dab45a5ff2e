//! In-memory chat history for one analysis.

use crate::api::AnalysisApi;
use crate::types::ChatTurn;
use crate::Result;
use tracing::debug;

/// First assistant turn of every session.
pub const GREETING: &str =
    "Hello! I'm your AI assistant. Ask me anything about the video you just analyzed.";

/// Assistant turn appended when a chat call fails.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Append-only conversation about one analysis.
///
/// `send` takes `&mut self`, so a session can have at most one message in
/// flight.
pub struct ChatSession<A> {
    api: A,
    analysis_id: String,
    turns: Vec<ChatTurn>,
}

impl<A: AnalysisApi> ChatSession<A> {
    pub fn new(api: A, analysis_id: impl Into<String>) -> Self {
        Self {
            api,
            analysis_id: analysis_id.into(),
            turns: vec![ChatTurn::ai(GREETING)],
        }
    }

    pub fn analysis_id(&self) -> &str {
        &self.analysis_id
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Send `text` and record both sides of the exchange.
    ///
    /// Blank input is ignored and returns `Ok(None)`. On failure an apology
    /// turn is appended and the classified error is returned so the caller
    /// can surface it.
    pub async fn send(&mut self, text: &str) -> Result<Option<&ChatTurn>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        self.turns.push(ChatTurn::user(text));
        debug!(
            analysis_id = self.analysis_id.as_str(),
            turns = self.turns.len(),
            "sending chat message"
        );

        match self.api.chat(&self.analysis_id, text).await {
            Ok(reply) => {
                self.turns.push(ChatTurn::ai(reply.reply));
                Ok(self.turns.last())
            }
            Err(err) => {
                self.turns.push(ChatTurn::ai(ERROR_REPLY));
                Err(err)
            }
        }
    }
}
