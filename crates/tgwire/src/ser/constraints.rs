//! Field constraints the Bot API documents but the wire format cannot express.
//!
//! Rules are keyed by the Rust struct name of the record and are evaluated against
//! the record's already-normalized fields, so absent optionals count as unset.

use serde_json::{Map, Value};

use crate::error::{Error, Path, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exactly one of the listed fields must be present.
    ExactlyOneOf(&'static [&'static str]),
    /// No more than one of the listed fields may be present.
    AtMostOneOf(&'static [&'static str]),
    /// String length in characters, checked only when the field is present.
    Chars {
        field: &'static str,
        min: usize,
        max: usize,
    },
    /// String length in UTF-8 bytes, checked only when the field is present.
    Bytes {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

const BUTTON_ACTIONS: &[&str] = &[
    "url",
    "callback_data",
    "web_app",
    "login_url",
    "switch_inline_query",
    "switch_inline_query_current_chat",
    "switch_inline_query_chosen_chat",
    "callback_game",
    "pay",
];

const KEYBOARD_REQUESTS: &[&str] = &["request_contact", "request_location", "request_poll", "web_app"];

const UPDATE_PAYLOADS: &[&str] = &[
    "message",
    "edited_message",
    "channel_post",
    "edited_channel_post",
    "message_reaction",
    "inline_query",
    "chosen_inline_result",
    "callback_query",
    "poll",
    "poll_answer",
    "my_chat_member",
    "chat_member",
];

const INLINE_KEYBOARD_BUTTON: &[Rule] = &[
    Rule::ExactlyOneOf(BUTTON_ACTIONS),
    Rule::Bytes { field: "callback_data", min: 1, max: 64 },
];

const KEYBOARD_BUTTON: &[Rule] = &[Rule::AtMostOneOf(KEYBOARD_REQUESTS)];

const UPDATE: &[Rule] = &[Rule::AtMostOneOf(UPDATE_PAYLOADS)];

const BOT_COMMAND: &[Rule] = &[
    Rule::Chars { field: "command", min: 1, max: 32 },
    Rule::Chars { field: "description", min: 1, max: 256 },
];

const PLACEHOLDER: &[Rule] = &[Rule::Chars { field: "input_field_placeholder", min: 1, max: 64 }];

const INLINE_RESULT: &[Rule] = &[Rule::Bytes { field: "id", min: 1, max: 64 }];

const POLL_OPTION: &[Rule] = &[Rule::Chars { field: "text", min: 1, max: 100 }];

pub fn rules_for(record: &str) -> &'static [Rule] {
    match record {
        "InlineKeyboardButton" => INLINE_KEYBOARD_BUTTON,
        "KeyboardButton" => KEYBOARD_BUTTON,
        "Update" => UPDATE,
        "BotCommand" => BOT_COMMAND,
        "ReplyKeyboardMarkup" | "ForceReply" => PLACEHOLDER,
        "InlineQueryResultArticle"
        | "InlineQueryResultPhoto"
        | "InlineQueryResultGif"
        | "InlineQueryResultLocation"
        | "InlineQueryResultVenue"
        | "InlineQueryResultContact" => INLINE_RESULT,
        "PollOption" => POLL_OPTION,
        _ => &[],
    }
}

pub fn check(record: &str, fields: &Map<String, Value>, path: &Path) -> Result<()> {
    for rule in rules_for(record) {
        if let Some(message) = violation(rule, fields) {
            tracing::debug!(record, path = %path, %message, "constraint violated");
            return Err(Error::Constraint {
                path: path.clone(),
                record: record.to_string(),
                message,
            });
        }
    }
    Ok(())
}

fn violation(rule: &Rule, fields: &Map<String, Value>) -> Option<String> {
    match *rule {
        Rule::ExactlyOneOf(names) => {
            let set = present(names, fields);
            (set.len() != 1).then(|| {
                format!(
                    "exactly one of [{}] must be set, found {}",
                    names.join(", "),
                    describe(&set)
                )
            })
        }
        Rule::AtMostOneOf(names) => {
            let set = present(names, fields);
            (set.len() > 1).then(|| {
                format!(
                    "at most one of [{}] may be set, found {}",
                    names.join(", "),
                    describe(&set)
                )
            })
        }
        Rule::Chars { field, min, max } => {
            let len = fields.get(field)?.as_str()?.chars().count();
            out_of_range(field, len, min, max, "characters")
        }
        Rule::Bytes { field, min, max } => {
            let len = fields.get(field)?.as_str()?.len();
            out_of_range(field, len, min, max, "bytes")
        }
    }
}

// `false` on an optional flag means the option is not used.
fn present<'n>(names: &[&'n str], fields: &Map<String, Value>) -> Vec<&'n str> {
    names
        .iter()
        .copied()
        .filter(|n| !matches!(fields.get(*n), None | Some(Value::Bool(false))))
        .collect()
}

fn describe(set: &[&str]) -> String {
    if set.is_empty() {
        "none".to_string()
    } else {
        set.join(", ")
    }
}

fn out_of_range(field: &str, len: usize, min: usize, max: usize, unit: &str) -> Option<String> {
    (len < min || len > max)
        .then(|| format!("`{}` must be {}-{} {}, got {}", field, min, max, unit, len))
}
