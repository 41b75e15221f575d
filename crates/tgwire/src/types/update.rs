use serde::{Deserialize, Serialize};

use super::{
    CallbackQuery, ChatMemberUpdated, ChosenInlineResult, InlineQuery, Message, MessageReactionUpdated,
    Poll, PollAnswer,
};

/// An incoming update. At most one of the optional payloads is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Identifiers increase sequentially; useful to restore update order after a webhook hiccup.
    pub update_id: i64,
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
    pub edited_channel_post: Option<Message>,
    pub message_reaction: Option<MessageReactionUpdated>,
    pub inline_query: Option<InlineQuery>,
    pub chosen_inline_result: Option<ChosenInlineResult>,
    pub callback_query: Option<CallbackQuery>,
    pub poll: Option<Poll>,
    pub poll_answer: Option<PollAnswer>,
    pub my_chat_member: Option<ChatMemberUpdated>,
    pub chat_member: Option<ChatMemberUpdated>,
}

impl Update {
    pub fn new(update_id: i64) -> Self {
        Self {
            update_id,
            message: None,
            edited_message: None,
            channel_post: None,
            edited_channel_post: None,
            message_reaction: None,
            inline_query: None,
            chosen_inline_result: None,
            callback_query: None,
            poll: None,
            poll_answer: None,
            my_chat_member: None,
            chat_member: None,
        }
    }

    /// Wire name of the payload this update carries, if any.
    pub fn kind(&self) -> Option<&'static str> {
        let present = [
            ("message", self.message.is_some()),
            ("edited_message", self.edited_message.is_some()),
            ("channel_post", self.channel_post.is_some()),
            ("edited_channel_post", self.edited_channel_post.is_some()),
            ("message_reaction", self.message_reaction.is_some()),
            ("inline_query", self.inline_query.is_some()),
            ("chosen_inline_result", self.chosen_inline_result.is_some()),
            ("callback_query", self.callback_query.is_some()),
            ("poll", self.poll.is_some()),
            ("poll_answer", self.poll_answer.is_some()),
            ("my_chat_member", self.my_chat_member.is_some()),
            ("chat_member", self.chat_member.is_some()),
        ];
        present.into_iter().find(|(_, set)| *set).map(|(name, _)| name)
    }
}

/// Current status of a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Empty if the webhook is not set up
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    pub ip_address: Option<String>,
    pub last_error_date: Option<i64>,
    pub last_error_message: Option<String>,
    pub last_synchronization_error_date: Option<i64>,
    pub max_connections: Option<i64>,
    pub allowed_updates: Option<Vec<String>>,
}

impl WebhookInfo {
    pub fn new(url: impl Into<String>, has_custom_certificate: bool, pending_update_count: i64) -> Self {
        Self {
            url: url.into(),
            has_custom_certificate,
            pending_update_count,
            ip_address: None,
            last_error_date: None,
            last_error_message: None,
            last_synchronization_error_date: None,
            max_connections: None,
            allowed_updates: None,
        }
    }
}

/// Information about why a request was unsuccessful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseParameters {
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before the request can be repeated
    pub retry_after: Option<i64>,
}
