//! A representative slice of remote resource records.
//!
//! Each record is declared with [`patchwire_presence::record!`], so every
//! field tracks whether it was sent, sent as null, or sent with a value.

pub mod gateway;
pub mod guild;
pub mod message;
pub mod snowflake;
pub mod stage;

pub use gateway::{GatewayEndpoint, SessionStartLimit};
pub use guild::{GuildImages, ModifyGuild, VerificationLevel};
pub use message::{Embed, EmbedField, EmbedType, MessageType, PartialMessage, User};
pub use snowflake::Snowflake;
pub use stage::{
    create_stage_instance_body, modify_stage_instance_body, StageInstance, StagePrivacyLevel,
};
