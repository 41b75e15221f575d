use serde::{Deserialize, Serialize};

use super::{Chat, MessageEntity, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollType {
    Regular,
    Quiz,
}

/// Information about one answer option in a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    /// Option text, 1-100 characters
    pub text: String,
    pub text_entities: Option<Vec<MessageEntity>>,
    pub voter_count: i64,
}

impl PollOption {
    pub fn new(text: impl Into<String>, voter_count: i64) -> Self {
        Self {
            text: text.into(),
            text_entities: None,
            voter_count,
        }
    }
}

/// This object contains information about a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub question_entities: Option<Vec<MessageEntity>>,
    pub options: Vec<PollOption>,
    pub total_voter_count: i64,
    pub is_closed: bool,
    pub is_anonymous: bool,
    #[serde(rename = "type")]
    pub kind: PollType,
    pub allows_multiple_answers: bool,
    /// 0-based index of the correct option. Quizzes only, and only when visible to the bot.
    pub correct_option_id: Option<i64>,
    pub explanation: Option<String>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<i64>,
    pub close_date: Option<i64>,
}

impl Poll {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        options: Vec<PollOption>,
        total_voter_count: i64,
        is_closed: bool,
        is_anonymous: bool,
        kind: PollType,
        allows_multiple_answers: bool,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            question_entities: None,
            options,
            total_voter_count,
            is_closed,
            is_anonymous,
            kind,
            allows_multiple_answers,
            correct_option_id: None,
            explanation: None,
            explanation_entities: None,
            open_period: None,
            close_date: None,
        }
    }
}

/// An answer of a user in a non-anonymous poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub poll_id: String,
    /// Set when the vote was cast on behalf of an anonymous chat
    pub voter_chat: Option<Chat>,
    pub user: Option<User>,
    /// Empty when the user retracted their vote.
    pub option_ids: Vec<i64>,
}

impl PollAnswer {
    pub fn new(poll_id: impl Into<String>, option_ids: Vec<i64>) -> Self {
        Self {
            poll_id: poll_id.into(),
            voter_chat: None,
            user: None,
            option_ids,
        }
    }
}
