//! Session entity

use crate::conversation::context::ConversationContext;
use crate::core::topic::Topic;
use crate::orchestration::mode::SessionMode;

/// One completed mode invocation (Entity)
///
/// Carries everything a follow-up needs: the mode to re-enter, the topic
/// currently under discussion, and the accumulated context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    mode: SessionMode,
    topic: Topic,
    context: ConversationContext,
}

impl Session {
    pub fn new(mode: SessionMode, topic: Topic, context: ConversationContext) -> Self {
        Self {
            mode,
            topic,
            context,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Consume the session, keeping only its context
    pub fn into_context(self) -> ConversationContext {
        self.context
    }
}
