//! Stage instances and their request bodies.

use patchwire_presence::{record, wire_enum, EncodeError, ObjectWriter, Optional};
use serde_json::Value;

use crate::snowflake::Snowflake;

wire_enum! {
    pub enum StagePrivacyLevel as int {
        Public = 1,
        GuildOnly = 2,
    }
}

record! {
    pub struct StageInstance {
        pub id: Snowflake => value "id",
        pub guild_id: Snowflake => value "guild_id",
        pub channel_id: Snowflake => value "channel_id",
        pub topic: String => value "topic",
        pub privacy_level: StagePrivacyLevel => value "privacy_level",
        pub discoverable_disabled: bool => value "discoverable_disabled",
    }
}

/// Body of a stage instance creation request.
pub fn create_stage_instance_body(
    channel_id: Snowflake,
    topic: &str,
    privacy_level: Optional<StagePrivacyLevel>,
) -> Result<Value, EncodeError> {
    let mut body = ObjectWriter::new();
    body.required("channel_id", &channel_id)?
        .required("topic", &topic.to_owned())?
        .field("privacy_level", &privacy_level)?;
    Ok(body.finish())
}

/// Body of a stage instance modification request. Only touched fields are sent.
pub fn modify_stage_instance_body(
    topic: Optional<String>,
    privacy_level: Optional<StagePrivacyLevel>,
) -> Result<Value, EncodeError> {
    let mut body = ObjectWriter::new();
    body.field("topic", &topic)?
        .field("privacy_level", &privacy_level)?;
    Ok(body.finish())
}
