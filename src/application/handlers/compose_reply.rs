//! ComposeReply - Builds the assistant reply for a chat message.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ContentLibrary, KnowledgeBase, ValidationError, REPLY_TEMPLATES};
use crate::ports::{random_pick, RandomSource};

/// Probability that the fallback draws from the knowledge table instead of
/// the suggestion pools.
const KNOWLEDGE_FALLBACK_PROBABILITY: f64 = 0.4;

/// Command carrying the submitted chat message.
#[derive(Debug, Clone)]
pub struct ComposeReplyCommand {
    pub message: String,
}

/// Handler producing the reply string for a message.
///
/// A keyword hit returns the table's guidance verbatim. Otherwise the reply
/// is a randomly chosen tip wrapped in one of the fixed phrasing templates.
pub struct ComposeReplyHandler {
    knowledge: KnowledgeBase,
    library: ContentLibrary,
    random: Arc<dyn RandomSource>,
}

impl ComposeReplyHandler {
    pub fn new(
        knowledge: KnowledgeBase,
        library: ContentLibrary,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            knowledge,
            library,
            random,
        }
    }

    pub fn handle(&self, cmd: ComposeReplyCommand) -> Result<String, ValidationError> {
        if cmd.message.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }

        if let Some(guidance) = self.knowledge.match_message(&cmd.message) {
            debug!("Keyword match, returning table guidance");
            return Ok(guidance.to_string());
        }

        debug!("No keyword match, composing randomized fallback");
        Ok(self.fallback_reply())
    }

    fn fallback_reply(&self) -> String {
        let tip = if self.random.chance(KNOWLEDGE_FALLBACK_PROBABILITY) {
            *random_pick(self.random.as_ref(), &self.knowledge.guidance_values())
        } else {
            *random_pick(self.random.as_ref(), &self.library.combined_suggestions())
        };

        let template = random_pick(self.random.as_ref(), &REPLY_TEMPLATES);
        template.replace("{tip}", tip)
    }
}
