use serde::{Deserialize, Serialize};

use super::{Message, User};

/// An incoming callback query from a callback button in an inline keyboard.
///
/// Exactly one of `data` or `game_short_name` is present on queries the API sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent when the button was attached to a message sent via the bot in inline mode
    pub message: Option<Box<Message>>,
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    pub data: Option<String>,
    pub game_short_name: Option<String>,
}

impl CallbackQuery {
    pub fn new(id: impl Into<String>, from: User, chat_instance: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from,
            message: None,
            inline_message_id: None,
            chat_instance: chat_instance.into(),
            data: None,
            game_short_name: None,
        }
    }
}
