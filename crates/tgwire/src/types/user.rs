use serde::{Deserialize, Serialize};

use super::True;

/// This object represents a Telegram user or bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier. May exceed 32 bits; at most 52 significant bits.
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    /// IETF language tag of the user's language
    pub language_code: Option<String>,
    pub is_premium: Option<True>,
    pub added_to_attachment_menu: Option<True>,
    /// Returned only in getMe.
    pub can_join_groups: Option<bool>,
    /// Returned only in getMe.
    pub can_read_all_group_messages: Option<bool>,
    /// Returned only in getMe.
    pub supports_inline_queries: Option<bool>,
    /// Returned only in getMe.
    pub can_connect_to_business: Option<bool>,
    /// Returned only in getMe.
    pub has_main_web_app: Option<bool>,
}

impl User {
    pub fn new(id: i64, is_bot: bool, first_name: impl Into<String>) -> Self {
        Self {
            id,
            is_bot,
            first_name: first_name.into(),
            last_name: None,
            username: None,
            language_code: None,
            is_premium: None,
            added_to_attachment_menu: None,
            can_join_groups: None,
            can_read_all_group_messages: None,
            supports_inline_queries: None,
            can_connect_to_business: None,
            has_main_web_app: None,
        }
    }
}
