use serde_json::{Value, json};
use tgwire::types::*;
use tgwire::{Options, Record};

/// Decodes `input` as `T`, checks the normalized form reproduces it key for key, and
/// that decoding the normalized form again is a fixed point.
fn assert_stable<T: Record + PartialEq + std::fmt::Debug>(input: Value) -> Result<T, Box<dyn std::error::Error>> {
    let record: T = tgwire::from_value(input.clone(), &Options::default())?;
    let wire = record.to_wire()?;
    assert_eq!(serde_json::to_string(&wire)?, serde_json::to_string(&input)?);

    let again = T::from_wire(wire.clone())?;
    assert_eq!(again, record);
    assert_eq!(again.to_wire()?, wire);
    Ok(record)
}

fn user(id: i64, name: &str) -> Value {
    json!({"id": id, "is_bot": false, "first_name": name, "language_code": "en"})
}

#[test]
fn text_message_with_entities_and_keyboard() -> Result<(), Box<dyn std::error::Error>> {
    let input = json!({
        "update_id": 735_102_001,
        "message": {
            "message_id": 4411,
            "from": user(51_234_567, "Ada"),
            "date": 1_714_000_000,
            "chat": {"id": 51_234_567, "type": "private", "first_name": "Ada"},
            "forward_origin": {
                "type": "user",
                "date": 1_713_999_000,
                "sender_user": user(7, "Grace")
            },
            "text": "/start hello",
            "entities": [
                {"type": "bot_command", "offset": 0, "length": 6}
            ],
            "reply_markup": {
                "inline_keyboard": [
                    [
                        {"text": "Docs", "url": "https://core.telegram.org/bots/api"},
                        {"text": "Ping", "callback_data": "ping:1"}
                    ]
                ]
            }
        }
    });
    let update: Update = assert_stable(input)?;
    assert_eq!(update.kind(), Some("message"));
    let msg = update.message.ok_or("message payload")?;
    assert!(matches!(msg.forward_origin, Some(MessageOrigin::User(_))));
    Ok(())
}

#[test]
fn callback_query_with_boxed_message() -> Result<(), Box<dyn std::error::Error>> {
    let input = json!({
        "update_id": 735_102_002,
        "callback_query": {
            "id": "4382bfdwdsb323b2d9",
            "from": user(51_234_567, "Ada"),
            "message": {
                "message_id": 4412,
                "date": 1_714_000_100,
                "chat": {"id": -1_001_987_654_321_i64, "type": "supergroup", "title": "Builders", "is_forum": true},
                "text": "Pick one"
            },
            "chat_instance": "-8812345678901234",
            "data": "ping:1"
        }
    });
    let update: Update = assert_stable(input)?;
    let query = update.callback_query.ok_or("callback payload")?;
    assert_eq!(query.message.map(|m| m.message_id), Some(4412));
    Ok(())
}

#[test]
fn inline_query_from_sender_chat_with_location() -> Result<(), Box<dyn std::error::Error>> {
    let input = json!({
        "update_id": 735_102_003,
        "inline_query": {
            "id": "91823",
            "from": user(51_234_567, "Ada"),
            "query": "coffee",
            "offset": "",
            "chat_type": "sender",
            "location": {"latitude": 52.520008, "longitude": 13.404954}
        }
    });
    let update: Update = assert_stable(input)?;
    let query = update.inline_query.ok_or("inline payload")?;
    assert_eq!(query.chat_type, Some(InlineQueryChatType::Sender));
    Ok(())
}

#[test]
fn promotion_to_administrator() -> Result<(), Box<dyn std::error::Error>> {
    let input = json!({
        "update_id": 735_102_004,
        "my_chat_member": {
            "chat": {"id": -1_001_987_654_321_i64, "type": "supergroup", "title": "Builders"},
            "from": user(7, "Grace"),
            "date": 1_714_000_200,
            "old_chat_member": {"status": "left", "user": {"id": 99, "is_bot": true, "first_name": "wirebot", "username": "wire_bot"}},
            "new_chat_member": {
                "status": "administrator",
                "user": {"id": 99, "is_bot": true, "first_name": "wirebot", "username": "wire_bot"},
                "can_be_edited": false,
                "is_anonymous": false,
                "can_manage_chat": true,
                "can_delete_messages": true,
                "can_manage_video_chats": false,
                "can_restrict_members": true,
                "can_promote_members": false,
                "can_change_info": false,
                "can_invite_users": true,
                "can_post_stories": false,
                "can_edit_stories": false,
                "can_delete_stories": false,
                "can_pin_messages": true
            }
        }
    });
    let update: Update = assert_stable(input)?;
    let change = update.my_chat_member.ok_or("member payload")?;
    assert!(matches!(change.new_chat_member, ChatMember::Administrator(ref a) if a.can_pin_messages == Some(true)));
    assert_eq!(change.old_chat_member.user().id, 99);
    Ok(())
}

#[test]
fn reaction_update_mixes_family_members() -> Result<(), Box<dyn std::error::Error>> {
    let input = json!({
        "update_id": 735_102_005,
        "message_reaction": {
            "chat": {"id": -1_001_987_654_321_i64, "type": "supergroup", "title": "Builders"},
            "message_id": 4411,
            "user": user(7, "Grace"),
            "date": 1_714_000_300,
            "old_reaction": [{"type": "emoji", "emoji": "👍"}],
            "new_reaction": [
                {"type": "custom_emoji", "custom_emoji_id": "5368324170671202286"},
                {"type": "paid"}
            ]
        }
    });
    let update: Update = assert_stable(input)?;
    let reaction = update.message_reaction.ok_or("reaction payload")?;
    assert_eq!(reaction.new_reaction.len(), 2);
    Ok(())
}

#[test]
fn quiz_poll_keeps_correct_option() -> Result<(), Box<dyn std::error::Error>> {
    let input = json!({
        "update_id": 735_102_006,
        "poll": {
            "id": "5172",
            "question": "2 + 2?",
            "options": [
                {"text": "3", "voter_count": 1},
                {"text": "4", "voter_count": 9}
            ],
            "total_voter_count": 10,
            "is_closed": true,
            "is_anonymous": false,
            "type": "quiz",
            "allows_multiple_answers": false,
            "correct_option_id": 1,
            "explanation": "Arithmetic"
        }
    });
    let update: Update = assert_stable(input)?;
    assert_eq!(update.poll.and_then(|p| p.correct_option_id), Some(1));
    Ok(())
}

#[test]
fn inline_results_pick_the_right_content_shape() -> Result<(), Box<dyn std::error::Error>> {
    let input = json!([
        {
            "type": "article",
            "id": "a1",
            "title": "Eiffel Tower",
            "input_message_content": {
                "latitude": 48.8584,
                "longitude": 2.2945,
                "title": "Eiffel Tower",
                "address": "Champ de Mars"
            }
        },
        {
            "type": "location",
            "id": "l1",
            "latitude": 48.8584,
            "longitude": 2.2945,
            "title": "Paris",
            "input_message_content": {"latitude": 48.8584, "longitude": 2.2945, "live_period": 900}
        },
        {
            "type": "contact",
            "id": "c1",
            "phone_number": "+33100000000",
            "first_name": "Gustave",
            "input_message_content": {"message_text": "Call me", "parse_mode": "HTML"}
        }
    ]);
    let results: Vec<InlineQueryResult> = tgwire::from_value(input.clone(), &Options::default())?;

    let InlineQueryResult::Article(article) = &results[0] else {
        return Err("first result should be an article".into());
    };
    assert!(matches!(article.input_message_content, InputMessageContent::Venue(_)));
    let InlineQueryResult::Location(location) = &results[1] else {
        return Err("second result should be a location".into());
    };
    assert!(matches!(location.input_message_content, Some(InputMessageContent::Location(_))));
    let InlineQueryResult::Contact(contact) = &results[2] else {
        return Err("third result should be a contact".into());
    };
    assert!(matches!(contact.input_message_content, Some(InputMessageContent::Text(_))));

    let wire = tgwire::ser::to_value(&results, &Options::default())?;
    assert_eq!(serde_json::to_string(&wire)?, serde_json::to_string(&input)?);
    Ok(())
}

#[test]
fn reply_markup_union_resolves_each_shape() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::default();
    let remove: ReplyMarkup = tgwire::from_value(json!({"remove_keyboard": true}), &opts)?;
    assert!(matches!(remove, ReplyMarkup::Remove(_)));

    let force: ReplyMarkup = tgwire::from_value(json!({"force_reply": true, "selective": true}), &opts)?;
    assert!(matches!(force, ReplyMarkup::ForceReply(_)));

    let keyboard: ReplyMarkup = tgwire::from_value(
        json!({"keyboard": [[{"text": "Yes"}, {"text": "No"}]], "one_time_keyboard": true}),
        &opts,
    )?;
    assert!(matches!(keyboard, ReplyMarkup::ReplyKeyboard(_)));
    Ok(())
}

#[test]
fn chat_id_accepts_numbers_and_usernames() -> Result<(), Box<dyn std::error::Error>> {
    let scope: BotCommandScope = tgwire::from_value(json!({"type": "chat", "chat_id": "@builders"}), &Options::default())?;
    assert!(matches!(scope, BotCommandScope::Chat(ref s) if s.chat_id == ChatId::from("@builders")));

    let scope: BotCommandScope =
        tgwire::from_value(json!({"type": "chat_member", "chat_id": -100, "user_id": 5}), &Options::default())?;
    assert!(matches!(scope, BotCommandScope::ChatMember(ref s) if s.chat_id == ChatId::Id(-100)));
    Ok(())
}

#[test]
fn webhook_info_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let info: WebhookInfo = assert_stable(json!({
        "url": "https://bot.example.com/hook",
        "has_custom_certificate": false,
        "pending_update_count": 3,
        "last_error_date": 1_714_000_000,
        "last_error_message": "Connection timed out",
        "max_connections": 40,
        "allowed_updates": ["message", "callback_query"]
    }))?;
    assert_eq!(info.max_connections, Some(40));
    Ok(())
}
