//! Name-indexed registry of every record in the catalog.

use serde_json::Value;

use crate::record::Record;
use crate::types::*;
use crate::{Error, Options, Result, WireMap};

macro_rules! catalog {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Record for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )+

        /// Names of all registered records, in catalog order.
        pub const RECORD_NAMES: &[&str] = &[$(stringify!($ty)),+];

        /// Decode `value` as the record called `name` and return its normalized wire mapping.
        pub fn normalize_named(name: &str, value: Value, options: &Options) -> Result<WireMap> {
            match name {
                $(
                    stringify!($ty) => {
                        let record: $ty = crate::de::from_value(value, options)?;
                        crate::ser::normalize_with(&record, options)
                    }
                )+
                _ => Err(Error::UnknownRecord(name.to_string())),
            }
        }
    };
}

catalog! {
    User,
    Chat,
    ChatPhoto,
    ChatPermissions,
    ChatLocation,
    PhotoSize,
    Animation,
    Audio,
    Document,
    Video,
    VideoNote,
    Voice,
    Sticker,
    Contact,
    Location,
    Venue,
    Dice,
    Poll,
    PollOption,
    PollAnswer,
    MessageEntity,
    MessageId,
    LinkPreviewOptions,
    MessageOrigin,
    Message,
    InlineKeyboardMarkup,
    InlineKeyboardButton,
    LoginUrl,
    WebAppInfo,
    SwitchInlineQueryChosenChat,
    CallbackGame,
    ReplyKeyboardMarkup,
    KeyboardButton,
    KeyboardButtonPollType,
    ReplyKeyboardRemove,
    ForceReply,
    ChatAdministratorRights,
    ChatMember,
    ChatMemberUpdated,
    ChatInviteLink,
    InlineQuery,
    ChosenInlineResult,
    InlineQueryResult,
    CallbackQuery,
    BotCommand,
    BotCommandScope,
    MenuButton,
    ReactionType,
    ReactionCount,
    MessageReactionUpdated,
    Update,
    WebhookInfo,
    ResponseParameters,
}

/// Catalog spelling of `name`, matched case-insensitively.
pub fn lookup(name: &str) -> Option<&'static str> {
    RECORD_NAMES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(name))
}
