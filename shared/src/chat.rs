use serde::{Deserialize, Serialize};

pub const BOT_REPLY: &str = "Thank you for your message. How can I assist you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub author: Author,
}

/// Conversation with the canned assistant. Replies are not produced by
/// `send`; the caller answers pending messages after its reply delay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    draft: String,
    unanswered: usize,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Posts the draft as a user message. Blank drafts are ignored and left
    /// in place.
    pub fn send(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage {
            text,
            author: Author::User,
        });
        self.unanswered += 1;
        true
    }

    pub fn pending_replies(&self) -> usize {
        self.unanswered
    }

    /// Appends one bot reply per unanswered user message.
    pub fn answer_pending(&mut self) -> usize {
        let answered = std::mem::take(&mut self.unanswered);
        self.messages.extend((0..answered).map(|_| ChatMessage {
            text: BOT_REPLY.to_owned(),
            author: Author::Bot,
        }));
        answered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_is_not_sent() {
        let mut transcript = Transcript::default();
        transcript.set_draft("   ".to_owned());
        assert!(!transcript.send());
        assert!(transcript.messages().is_empty());
        assert_eq!(transcript.draft(), "   ");
    }

    #[test]
    fn sent_text_is_kept_untrimmed() {
        let mut transcript = Transcript::default();
        transcript.set_draft(" hello ".to_owned());
        assert!(transcript.send());
        assert_eq!(transcript.messages()[0].text, " hello ");
        assert_eq!(transcript.draft(), "");
    }
}
