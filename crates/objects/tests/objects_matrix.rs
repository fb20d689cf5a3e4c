//! Resource records against realistic wire payloads.

use patchwire_image::{ImagePacker, PackError, PackOptions};
use patchwire_objects::{
    create_stage_instance_body, modify_stage_instance_body, EmbedType, GatewayEndpoint,
    GuildImages, MessageType, ModifyGuild, PartialMessage, Snowflake, StageInstance,
    StagePrivacyLevel,
};
use patchwire_presence::{from_value, to_string, to_value, Optional};
use serde_json::json;

const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[test]
fn message_create_payload_decodes() {
    let msg: PartialMessage = from_value(json!({
        "id": "334385199974967042",
        "channel_id": "290926798999357250",
        "author": {
            "id": "53908099506183680",
            "username": "Mason",
            "discriminator": "9999",
            "avatar": null,
            "public_flags": 131328
        },
        "content": "Supa Hot",
        "timestamp": "2017-07-11T17:27:07.299000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mention_roles": [],
        "embeds": [{
            "title": "link",
            "type": "gifv",
            "color": 16711680,
            "fields": [{ "name": "a", "value": "b", "inline": true }]
        }],
        "pinned": false,
        "type": 0,
        "flags": 0
    }))
    .unwrap();

    assert_eq!(msg.id, Optional::Value(Snowflake(334385199974967042)));
    assert_eq!(msg.guild_id, Optional::Unset);
    assert_eq!(msg.edited_timestamp, Optional::Null);
    assert_eq!(msg.mention_roles, Optional::Value(Vec::new()));
    assert_eq!(msg.kind, Optional::Value(MessageType::Default));
    assert!(!msg.is_webhook());

    let author = msg.author.clone().unwrap().unwrap();
    assert_eq!(author.avatar, Optional::Null);
    assert_eq!(author.bot, Optional::Unset);

    let embeds = msg.embeds.clone().unwrap().unwrap();
    assert_eq!(embeds[0].kind, Optional::Value(EmbedType::Gifv));
    assert_eq!(embeds[0].color, Optional::Value(0xFF0000));
}

#[test]
fn deleted_reference_is_null() {
    let msg: PartialMessage = from_value(json!({
        "type": 19,
        "referenced_message": null
    }))
    .unwrap();
    assert_eq!(msg.kind, Optional::Value(MessageType::Reply));
    assert_eq!(msg.referenced_message, Optional::Null);
}

#[test]
fn bad_embed_type_points_at_field() {
    let err = from_value::<PartialMessage>(json!({
        "embeds": [{ "type": "rich" }, { "type": "poll" }]
    }))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "at $.embeds[1].type: unknown EmbedType discriminator \"poll\""
    );
}

#[test]
fn message_round_trips() {
    let msg: PartialMessage = from_value(json!({
        "id": "1",
        "content": "hi",
        "timestamp": "2021-01-01T00:00:00+00:00",
        "referenced_message": { "id": "2", "content": "parent" }
    }))
    .unwrap();
    let text = to_string(&msg).unwrap();
    assert_eq!(from_value::<PartialMessage>(serde_json::from_str(&text).unwrap()).unwrap(), msg);
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

#[test]
fn gateway_bot_endpoint_decodes() {
    let endpoint: GatewayEndpoint = from_value(json!({
        "url": "wss://gateway.discord.gg/",
        "shards": 9,
        "session_start_limit": {
            "total": 1000,
            "remaining": 999,
            "reset_after": 14400000,
            "max_concurrency": 1
        }
    }))
    .unwrap();
    let limit = endpoint.session_start_limit.unwrap().unwrap();
    assert_eq!(limit.reset_after, Optional::Value(14_400_000));

    let plain: GatewayEndpoint = from_value(json!({ "url": "wss://gateway.discord.gg/" })).unwrap();
    assert_eq!(plain.shards, Optional::Unset);
}

// ---------------------------------------------------------------------------
// Stage instances
// ---------------------------------------------------------------------------

#[test]
fn create_stage_body_omits_unset_privacy() {
    let body = create_stage_instance_body(Snowflake(42), "town hall", Optional::Unset).unwrap();
    assert_eq!(body, json!({ "channel_id": "42", "topic": "town hall" }));

    let body = create_stage_instance_body(
        Snowflake(42),
        "town hall",
        StagePrivacyLevel::GuildOnly.into(),
    )
    .unwrap();
    assert_eq!(
        body,
        json!({ "channel_id": "42", "topic": "town hall", "privacy_level": 2 })
    );
}

#[test]
fn modify_stage_body_sends_only_touched_fields() {
    assert_eq!(
        modify_stage_instance_body(Optional::Unset, Optional::Unset).unwrap(),
        json!({})
    );
    assert_eq!(
        modify_stage_instance_body("new".to_owned().into(), Optional::Unset).unwrap(),
        json!({ "topic": "new" })
    );
}

#[test]
fn stage_instance_decodes() {
    let stage: StageInstance = from_value(json!({
        "id": "840647391636226060",
        "guild_id": "197038439483310086",
        "channel_id": "733488538393510049",
        "topic": "Testing Testing, 123",
        "privacy_level": 1,
        "discoverable_disabled": false
    }))
    .unwrap();
    assert_eq!(stage.privacy_level, Optional::Value(StagePrivacyLevel::Public));
}

// ---------------------------------------------------------------------------
// Guild modification with packed images
// ---------------------------------------------------------------------------

#[tokio::test]
async fn modify_guild_packs_icon_and_clears_banner() {
    let update = ModifyGuild {
        name: "renamed".to_owned().into(),
        ..Default::default()
    };
    let images = GuildImages::<&[u8], &[u8], &[u8]> {
        icon: Optional::Value(GIF),
        banner: Optional::Null,
        ..Default::default()
    };
    let update = update
        .with_images(&ImagePacker::default(), images)
        .await
        .unwrap();
    assert_eq!(
        to_value(&update).unwrap(),
        json!({
            "name": "renamed",
            "icon": "data:image/gif;base64,R0lGODlhAQABAA==",
            "banner": null
        })
    );
}

#[tokio::test]
async fn unset_image_keeps_existing_value() {
    let update = ModifyGuild {
        icon: Optional::Null,
        ..Default::default()
    };
    let update = update
        .with_images(&ImagePacker::default(), GuildImages::<&[u8], &[u8], &[u8]>::default())
        .await
        .unwrap();
    assert_eq!(update.icon, Optional::Null);
    assert_eq!(to_string(&update).unwrap(), r#"{"icon":null}"#);
}

#[tokio::test]
async fn unsupported_image_aborts_update() {
    let images = GuildImages::<&[u8], &[u8], &[u8]> {
        splash: Optional::Value(&b"not an image"[..]),
        ..Default::default()
    };
    let err = ModifyGuild::default()
        .with_images(&ImagePacker::default(), images)
        .await
        .unwrap_err();
    assert!(matches!(err, PackError::UnsupportedFormat));
}

#[tokio::test]
async fn packer_limit_applies_to_guild_images() {
    let packer = ImagePacker::new(PackOptions { max_bytes: Some(4) });
    let images = GuildImages::<&[u8], &[u8], &[u8]> {
        icon: Optional::Value(GIF),
        ..Default::default()
    };
    let err = ModifyGuild::default()
        .with_images(&packer, images)
        .await
        .unwrap_err();
    assert!(matches!(err, PackError::TooLarge { limit: 4 }));
}
