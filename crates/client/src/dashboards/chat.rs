use shared_types::{AppError, ChatMessage, ChatReply, ChatRequest, Notice, CHAT_APOLOGY};
use uuid::Uuid;

use crate::api::RestaurantApi;
use crate::identity::IdentityProvider;

/// Conversation with the assistant. The session id is fixed for the
/// lifetime of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
        }
    }

    /// Append the user's message and build the request for it. Blank input
    /// is ignored.
    pub fn begin(&mut self, text: &str) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        Some(ChatRequest {
            session_id: self.session_id.clone(),
            message: text.to_string(),
        })
    }

    /// Append the assistant's answer. Any failure, or a reply without text,
    /// appends the apology instead and returns an error notice.
    pub fn finish(&mut self, outcome: Result<ChatReply, AppError>) -> Option<Notice> {
        match outcome {
            Ok(reply) => match reply.response.filter(|r| !r.is_empty()) {
                Some(response) => {
                    self.messages.push(ChatMessage::bot(response));
                    None
                }
                None => {
                    tracing::warn!("Assistant replied without a response");
                    self.messages.push(ChatMessage::bot(CHAT_APOLOGY));
                    Some(Notice::error("The assistant did not answer"))
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Chat request failed");
                self.messages.push(ChatMessage::bot(CHAT_APOLOGY));
                Some(Notice::failure("The assistant did not answer", &e))
            }
        }
    }

    /// Send one message and wait for the answer.
    pub async fn send<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
        text: &str,
    ) -> Option<Notice> {
        let req = self.begin(text)?;
        let outcome = api.chatbot(&req).await;
        self.finish(outcome)
    }
}
