use serde::{Deserialize, Serialize};

use super::{ChatId, WebAppInfo};

/// A bot command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommand {
    /// 1-32 characters; lowercase English letters, digits and underscores
    pub command: String,
    /// 1-256 characters
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotCommandScopeDefault {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotCommandScopeAllPrivateChats {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotCommandScopeAllGroupChats {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotCommandScopeAllChatAdministrators {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommandScopeChat {
    pub chat_id: ChatId,
}

impl BotCommandScopeChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommandScopeChatAdministrators {
    pub chat_id: ChatId,
}

impl BotCommandScopeChatAdministrators {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommandScopeChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl BotCommandScopeChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

family! {
    /// The scope to which bot commands are applied.
    #[tag = "type"]
    pub enum BotCommandScope {
        "default" => Default(BotCommandScopeDefault),
        "all_private_chats" => AllPrivateChats(BotCommandScopeAllPrivateChats),
        "all_group_chats" => AllGroupChats(BotCommandScopeAllGroupChats),
        "all_chat_administrators" => AllChatAdministrators(BotCommandScopeAllChatAdministrators),
        "chat" => Chat(BotCommandScopeChat),
        "chat_administrators" => ChatAdministrators(BotCommandScopeChatAdministrators),
        "chat_member" => ChatMember(BotCommandScopeChatMember),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuButtonCommands {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuButtonWebApp {
    pub text: String,
    pub web_app: WebAppInfo,
}

impl MenuButtonWebApp {
    pub fn new(text: impl Into<String>, web_app: WebAppInfo) -> Self {
        Self {
            text: text.into(),
            web_app,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuButtonDefault {}

family! {
    /// The bot's menu button in a private chat.
    #[tag = "type"]
    pub enum MenuButton {
        "commands" => Commands(MenuButtonCommands),
        "web_app" => WebApp(MenuButtonWebApp),
        "default" => Default(MenuButtonDefault),
    }
}
