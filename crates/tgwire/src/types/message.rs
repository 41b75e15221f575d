use serde::{Deserialize, Serialize};

use super::{
    Animation, Audio, Chat, Contact, Dice, Document, InlineKeyboardMarkup, Location, PhotoSize, Poll,
    Sticker, True, User, Venue, Video, VideoNote, Voice,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
    /// Legacy mode, kept for backward compatibility.
    #[serde(rename = "Markdown")]
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    ExpandableBlockquote,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
}

/// One special entity in a text message: hashtag, username, URL, etc.
///
/// `offset` and `length` are measured in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,
    pub offset: i64,
    pub length: i64,
    /// `text_link` only
    pub url: Option<String>,
    /// `text_mention` only
    pub user: Option<User>,
    /// `pre` only
    pub language: Option<String>,
    /// `custom_emoji` only
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: MessageEntityType, offset: i64, length: i64) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user: None,
            language: None,
            custom_emoji_id: None,
        }
    }
}

/// A unique message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

impl MessageId {
    pub fn new(message_id: i64) -> Self {
        Self { message_id }
    }
}

/// Options used for link preview generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkPreviewOptions {
    pub is_disabled: Option<bool>,
    pub url: Option<String>,
    pub prefer_small_media: Option<bool>,
    pub prefer_large_media: Option<bool>,
    pub show_above_text: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginUser {
    pub date: i64,
    pub sender_user: User,
}

impl MessageOriginUser {
    pub fn new(date: i64, sender_user: User) -> Self {
        Self { date, sender_user }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginHiddenUser {
    pub date: i64,
    pub sender_user_name: String,
}

impl MessageOriginHiddenUser {
    pub fn new(date: i64, sender_user_name: impl Into<String>) -> Self {
        Self {
            date,
            sender_user_name: sender_user_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChat {
    pub date: i64,
    pub sender_chat: Chat,
    pub author_signature: Option<String>,
}

impl MessageOriginChat {
    pub fn new(date: i64, sender_chat: Chat) -> Self {
        Self {
            date,
            sender_chat,
            author_signature: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChannel {
    pub date: i64,
    pub chat: Chat,
    pub message_id: i64,
    pub author_signature: Option<String>,
}

impl MessageOriginChannel {
    pub fn new(date: i64, chat: Chat, message_id: i64) -> Self {
        Self {
            date,
            chat,
            message_id,
            author_signature: None,
        }
    }
}

family! {
    /// The origin of a forwarded message.
    #[tag = "type"]
    pub enum MessageOrigin {
        "user" => User(MessageOriginUser),
        "hidden_user" => HiddenUser(MessageOriginHiddenUser),
        "chat" => Chat(MessageOriginChat),
        "channel" => Channel(MessageOriginChannel),
    }
}

/// This object represents a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub message_thread_id: Option<i64>,
    pub from: Option<User>,
    pub sender_chat: Option<Chat>,
    /// Unix time the message was sent
    pub date: i64,
    pub chat: Chat,
    pub forward_origin: Option<MessageOrigin>,
    pub is_topic_message: Option<True>,
    pub is_automatic_forward: Option<True>,
    pub reply_to_message: Option<Box<Message>>,
    pub via_bot: Option<User>,
    pub edit_date: Option<i64>,
    pub has_protected_content: Option<True>,
    pub media_group_id: Option<String>,
    pub author_signature: Option<String>,
    pub text: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub animation: Option<Animation>,
    pub audio: Option<Audio>,
    pub document: Option<Document>,
    /// Available sizes of the photo, smallest first
    pub photo: Option<Vec<PhotoSize>>,
    pub sticker: Option<Sticker>,
    pub video: Option<Video>,
    pub video_note: Option<VideoNote>,
    pub voice: Option<Voice>,
    pub caption: Option<String>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub has_media_spoiler: Option<True>,
    pub contact: Option<Contact>,
    pub dice: Option<Dice>,
    pub poll: Option<Poll>,
    pub venue: Option<Venue>,
    pub location: Option<Location>,
    pub new_chat_members: Option<Vec<User>>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    pub delete_chat_photo: Option<True>,
    pub group_chat_created: Option<True>,
    pub supergroup_chat_created: Option<True>,
    pub channel_chat_created: Option<True>,
    pub migrate_to_chat_id: Option<i64>,
    pub migrate_from_chat_id: Option<i64>,
    pub pinned_message: Option<Box<Message>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    pub fn new(message_id: i64, date: i64, chat: Chat) -> Self {
        Self {
            message_id,
            message_thread_id: None,
            from: None,
            sender_chat: None,
            date,
            chat,
            forward_origin: None,
            is_topic_message: None,
            is_automatic_forward: None,
            reply_to_message: None,
            via_bot: None,
            edit_date: None,
            has_protected_content: None,
            media_group_id: None,
            author_signature: None,
            text: None,
            entities: None,
            link_preview_options: None,
            animation: None,
            audio: None,
            document: None,
            photo: None,
            sticker: None,
            video: None,
            video_note: None,
            voice: None,
            caption: None,
            caption_entities: None,
            has_media_spoiler: None,
            contact: None,
            dice: None,
            poll: None,
            venue: None,
            location: None,
            new_chat_members: None,
            left_chat_member: None,
            new_chat_title: None,
            new_chat_photo: None,
            delete_chat_photo: None,
            group_chat_created: None,
            supergroup_chat_created: None,
            channel_chat_created: None,
            migrate_to_chat_id: None,
            migrate_from_chat_id: None,
            pinned_message: None,
            reply_markup: None,
        }
    }
}
