use serde_json::{Value, json};
use tgwire::types::*;
use tgwire::{Error, Family, Options};

fn assert_tagged<F: Family>(member: &F) -> Result<(), Box<dyn std::error::Error>> {
    let wire = tgwire::normalize(member)?;
    let (first_key, first_value) = wire.iter().next().ok_or("empty wire mapping")?;
    assert_eq!(first_key, F::DISCRIMINATOR);
    assert_eq!(first_value, member.discriminator());
    assert!(F::VARIANTS.contains(&member.discriminator()));

    let back: F = tgwire::from_value(Value::Object(wire), &Options::default())?;
    assert_eq!(back.discriminator(), member.discriminator());
    Ok(())
}

fn ada() -> User {
    User::new(1001, false, "Ada")
}

#[test]
fn chat_member_statuses() -> Result<(), Box<dyn std::error::Error>> {
    let rights = ChatAdministratorRights {
        can_manage_chat: true,
        can_delete_messages: true,
        ..Default::default()
    };
    let members: Vec<ChatMember> = vec![
        ChatMemberOwner::new(ada(), false).into(),
        ChatMemberAdministrator::new(ada(), true, &rights).into(),
        ChatMemberMember::new(ada()).into(),
        ChatMemberRestricted::new(ada(), true, &ChatPermissions::default(), 0).into(),
        ChatMemberLeft::new(ada()).into(),
        ChatMemberBanned::new(ada(), 1_700_000_000).into(),
    ];
    let seen: Vec<&str> = members.iter().map(|m| m.discriminator()).collect();
    assert_eq!(seen, ChatMember::VARIANTS);
    for member in &members {
        assert_tagged(member)?;
        assert_eq!(member.user().first_name, "Ada");
    }
    Ok(())
}

#[test]
fn owner_and_banned_use_legacy_status_names() -> Result<(), Box<dyn std::error::Error>> {
    let owner = tgwire::normalize(&ChatMember::from(ChatMemberOwner::new(ada(), true)))?;
    assert_eq!(
        Value::Object(owner),
        json!({
            "status": "creator",
            "user": {"id": 1001, "is_bot": false, "first_name": "Ada"},
            "is_anonymous": true
        })
    );
    let banned = tgwire::normalize(&ChatMember::from(ChatMemberBanned::new(ada(), 0)))?;
    assert_eq!(banned["status"], "kicked");
    Ok(())
}

#[test]
fn inline_query_result_types() -> Result<(), Box<dyn std::error::Error>> {
    let results: Vec<InlineQueryResult> = vec![
        InlineQueryResultArticle::new("a1", "Hello", InputTextMessageContent::new("hi")).into(),
        InlineQueryResultPhoto::new("p1", "https://x.test/p.jpg", "https://x.test/t.jpg").into(),
        InlineQueryResultGif::new("g1", "https://x.test/g.gif", "https://x.test/t.jpg").into(),
        InlineQueryResultLocation::new("l1", 52.52, 13.405, "Berlin").into(),
        InlineQueryResultVenue::new("v1", 52.52, 13.405, "Cafe", "Unter den Linden 1").into(),
        InlineQueryResultContact::new("c1", "+4930123", "Ada").into(),
    ];
    let seen: Vec<&str> = results.iter().map(|r| r.discriminator()).collect();
    assert_eq!(seen, InlineQueryResult::VARIANTS);
    for result in &results {
        assert_tagged(result)?;
    }
    assert_eq!(results[3].id(), "l1");
    Ok(())
}

#[test]
fn article_wire_layout() -> Result<(), Box<dyn std::error::Error>> {
    let mut article = InlineQueryResultArticle::new("a1", "Hello", InputTextMessageContent::new("hi"));
    article.description = Some("greeting".into());
    let wire = tgwire::normalize(&InlineQueryResult::from(article))?;
    assert_eq!(
        serde_json::to_string(&wire)?,
        r#"{"type":"article","id":"a1","title":"Hello","input_message_content":{"message_text":"hi"},"description":"greeting"}"#
    );
    Ok(())
}

#[test]
fn message_origin_types() -> Result<(), Box<dyn std::error::Error>> {
    let channel = Chat::new(-100, ChatType::Channel);
    let origins: Vec<MessageOrigin> = vec![
        MessageOriginUser::new(10, ada()).into(),
        MessageOriginHiddenUser::new(10, "someone").into(),
        MessageOriginChat::new(10, Chat::new(-5, ChatType::Group)).into(),
        MessageOriginChannel::new(10, channel, 77).into(),
    ];
    for origin in &origins {
        assert_tagged(origin)?;
    }
    assert_eq!(origins[1].discriminator(), "hidden_user");
    Ok(())
}

#[test]
fn bot_command_scopes() -> Result<(), Box<dyn std::error::Error>> {
    let scopes: Vec<BotCommandScope> = vec![
        BotCommandScopeDefault {}.into(),
        BotCommandScopeAllPrivateChats {}.into(),
        BotCommandScopeAllGroupChats {}.into(),
        BotCommandScopeAllChatAdministrators {}.into(),
        BotCommandScopeChat::new(-100123_i64).into(),
        BotCommandScopeChatAdministrators::new("@channel").into(),
        BotCommandScopeChatMember::new(-100123_i64, 42).into(),
    ];
    for scope in &scopes {
        assert_tagged(scope)?;
    }
    let wire = tgwire::normalize(&scopes[0])?;
    assert_eq!(Value::Object(wire), json!({"type": "default"}));
    let wire = tgwire::normalize(&scopes[5])?;
    assert_eq!(Value::Object(wire), json!({"type": "chat_administrators", "chat_id": "@channel"}));
    Ok(())
}

#[test]
fn menu_buttons_and_reactions() -> Result<(), Box<dyn std::error::Error>> {
    let buttons: Vec<MenuButton> = vec![
        MenuButtonCommands {}.into(),
        MenuButtonWebApp::new("Open", WebAppInfo::new("https://app.test")).into(),
        MenuButtonDefault {}.into(),
    ];
    for button in &buttons {
        assert_tagged(button)?;
    }

    let reactions: Vec<ReactionType> = vec![
        ReactionTypeEmoji::new("👍").into(),
        ReactionTypeCustomEmoji::new("5368324170671202286").into(),
        ReactionTypePaid {}.into(),
    ];
    for reaction in &reactions {
        assert_tagged(reaction)?;
    }
    Ok(())
}

#[test]
fn reaction_count_nests_the_family() -> Result<(), Box<dyn std::error::Error>> {
    let count = ReactionCount::new(ReactionTypeEmoji::new("🔥"), 3);
    let wire = tgwire::normalize(&count)?;
    assert_eq!(
        serde_json::to_string(&wire)?,
        r#"{"type":{"type":"emoji","emoji":"🔥"},"total_count":3}"#
    );
    Ok(())
}

#[test]
fn unknown_discriminator_is_rejected() {
    let input = json!({"status": "owner", "user": {"id": 1, "is_bot": false, "first_name": "A"}});
    let err = tgwire::from_value::<ChatMember>(input, &Options::default()).unwrap_err();
    match err {
        Error::UnknownVariant { value, expected, .. } => {
            assert_eq!(value, "owner");
            assert!(expected.contains("`creator`"));
            assert!(expected.contains("`kicked`"));
        }
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn nested_unknown_discriminator_reports_path() {
    let input = json!({
        "update_id": 5,
        "chat_member": {
            "chat": {"id": -100, "type": "supergroup", "title": "g"},
            "from": {"id": 1, "is_bot": false, "first_name": "A"},
            "date": 1,
            "old_chat_member": {"status": "left", "user": {"id": 2, "is_bot": false, "first_name": "B"}},
            "new_chat_member": {"status": "vip", "user": {"id": 2, "is_bot": false, "first_name": "B"}}
        }
    });
    let err = tgwire::from_value::<Update>(input, &Options::default()).unwrap_err();
    match err {
        Error::UnknownVariant { path, value, .. } => {
            assert_eq!(value, "vip");
            assert_eq!(path.to_string(), "chat_member.new_chat_member.status");
        }
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn missing_discriminator_is_a_missing_field() {
    let input = json!({"emoji": "👍"});
    let err = tgwire::from_value::<ReactionType>(input, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field, .. } if field == "type"));
}
