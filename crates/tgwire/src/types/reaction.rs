use serde::{Deserialize, Serialize};

use super::{Chat, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionTypeEmoji {
    pub emoji: String,
}

impl ReactionTypeEmoji {
    pub fn new(emoji: impl Into<String>) -> Self {
        Self { emoji: emoji.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionTypeCustomEmoji {
    pub custom_emoji_id: String,
}

impl ReactionTypeCustomEmoji {
    pub fn new(custom_emoji_id: impl Into<String>) -> Self {
        Self {
            custom_emoji_id: custom_emoji_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionTypePaid {}

family! {
    #[tag = "type"]
    pub enum ReactionType {
        "emoji" => Emoji(ReactionTypeEmoji),
        "custom_emoji" => CustomEmoji(ReactionTypeCustomEmoji),
        "paid" => Paid(ReactionTypePaid),
    }
}

/// A reaction added to a message along with the number of times it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub total_count: i64,
}

impl ReactionCount {
    pub fn new(kind: impl Into<ReactionType>, total_count: i64) -> Self {
        Self {
            kind: kind.into(),
            total_count,
        }
    }
}

/// A change of a reaction on a message performed by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i64,
    pub user: Option<User>,
    pub actor_chat: Option<Chat>,
    pub date: i64,
    pub old_reaction: Vec<ReactionType>,
    pub new_reaction: Vec<ReactionType>,
}

impl MessageReactionUpdated {
    pub fn new(
        chat: Chat,
        message_id: i64,
        date: i64,
        old_reaction: Vec<ReactionType>,
        new_reaction: Vec<ReactionType>,
    ) -> Self {
        Self {
            chat,
            message_id,
            user: None,
            actor_chat: None,
            date,
            old_reaction,
            new_reaction,
        }
    }
}
