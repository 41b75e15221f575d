use serde::{Deserialize, Serialize};

use super::{Chat, ChatPermissions, User};

/// Rights of an administrator in a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatAdministratorRights {
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,
    /// Channels only
    pub can_post_messages: Option<bool>,
    /// Channels only
    pub can_edit_messages: Option<bool>,
    /// Groups and supergroups only
    pub can_pin_messages: Option<bool>,
    /// Supergroups only
    pub can_manage_topics: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    pub custom_title: Option<String>,
}

impl ChatMemberOwner {
    pub fn new(user: User, is_anonymous: bool) -> Self {
        Self {
            user,
            is_anonymous,
            custom_title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    pub can_be_edited: bool,
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub can_manage_topics: Option<bool>,
    pub custom_title: Option<String>,
}

impl ChatMemberAdministrator {
    pub fn new(user: User, can_be_edited: bool, rights: &ChatAdministratorRights) -> Self {
        Self {
            user,
            can_be_edited,
            is_anonymous: rights.is_anonymous,
            can_manage_chat: rights.can_manage_chat,
            can_delete_messages: rights.can_delete_messages,
            can_manage_video_chats: rights.can_manage_video_chats,
            can_restrict_members: rights.can_restrict_members,
            can_promote_members: rights.can_promote_members,
            can_change_info: rights.can_change_info,
            can_invite_users: rights.can_invite_users,
            can_post_stories: rights.can_post_stories,
            can_edit_stories: rights.can_edit_stories,
            can_delete_stories: rights.can_delete_stories,
            can_post_messages: rights.can_post_messages,
            can_edit_messages: rights.can_edit_messages,
            can_pin_messages: rights.can_pin_messages,
            can_manage_topics: rights.can_manage_topics,
            custom_title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
    /// Unix time when the user's subscription expires
    pub until_date: Option<i64>,
}

impl ChatMemberMember {
    pub fn new(user: User) -> Self {
        Self { user, until_date: None }
    }
}

/// A member under restrictions. Supergroups only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,
    /// 0 means restricted forever
    pub until_date: i64,
}

impl ChatMemberRestricted {
    /// Permissions left unset in `permissions` are treated as denied.
    pub fn new(user: User, is_member: bool, permissions: &ChatPermissions, until_date: i64) -> Self {
        let p = permissions;
        Self {
            user,
            is_member,
            can_send_messages: p.can_send_messages.unwrap_or(false),
            can_send_audios: p.can_send_audios.unwrap_or(false),
            can_send_documents: p.can_send_documents.unwrap_or(false),
            can_send_photos: p.can_send_photos.unwrap_or(false),
            can_send_videos: p.can_send_videos.unwrap_or(false),
            can_send_video_notes: p.can_send_video_notes.unwrap_or(false),
            can_send_voice_notes: p.can_send_voice_notes.unwrap_or(false),
            can_send_polls: p.can_send_polls.unwrap_or(false),
            can_send_other_messages: p.can_send_other_messages.unwrap_or(false),
            can_add_web_page_previews: p.can_add_web_page_previews.unwrap_or(false),
            can_change_info: p.can_change_info.unwrap_or(false),
            can_invite_users: p.can_invite_users.unwrap_or(false),
            can_pin_messages: p.can_pin_messages.unwrap_or(false),
            can_manage_topics: p.can_manage_topics.unwrap_or(false),
            until_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

impl ChatMemberLeft {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user: User,
    /// 0 means banned forever
    pub until_date: i64,
}

impl ChatMemberBanned {
    pub fn new(user: User, until_date: i64) -> Self {
        Self { user, until_date }
    }
}

family! {
    /// Information about one member of a chat, discriminated by `status`.
    #[tag = "status"]
    pub enum ChatMember {
        "creator" => Owner(ChatMemberOwner),
        "administrator" => Administrator(ChatMemberAdministrator),
        "member" => Member(ChatMemberMember),
        "restricted" => Restricted(ChatMemberRestricted),
        "left" => Left(ChatMemberLeft),
        "kicked" => Banned(ChatMemberBanned),
    }
}

impl ChatMember {
    pub fn user(&self) -> &User {
        match self {
            Self::Owner(m) => &m.user,
            Self::Administrator(m) => &m.user,
            Self::Member(m) => &m.user,
            Self::Restricted(m) => &m.user,
            Self::Left(m) => &m.user,
            Self::Banned(m) => &m.user,
        }
    }
}

/// An invite link for a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatInviteLink {
    pub invite_link: String,
    pub creator: User,
    pub creates_join_request: bool,
    pub is_primary: bool,
    pub is_revoked: bool,
    pub name: Option<String>,
    pub expire_date: Option<i64>,
    pub member_limit: Option<i64>,
    pub pending_join_request_count: Option<i64>,
}

impl ChatInviteLink {
    pub fn new(
        invite_link: impl Into<String>,
        creator: User,
        creates_join_request: bool,
        is_primary: bool,
        is_revoked: bool,
    ) -> Self {
        Self {
            invite_link: invite_link.into(),
            creator,
            creates_join_request,
            is_primary,
            is_revoked,
            name: None,
            expire_date: None,
            member_limit: None,
            pending_join_request_count: None,
        }
    }
}

/// Changes in the status of a chat member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    pub invite_link: Option<ChatInviteLink>,
    pub via_join_request: Option<bool>,
    pub via_chat_folder_invite_link: Option<bool>,
}

impl ChatMemberUpdated {
    pub fn new(
        chat: Chat,
        from: User,
        date: i64,
        old_chat_member: ChatMember,
        new_chat_member: ChatMember,
    ) -> Self {
        Self {
            chat,
            from,
            date,
            old_chat_member,
            new_chat_member,
            invite_link: None,
            via_join_request: None,
            via_chat_folder_invite_link: None,
        }
    }
}
