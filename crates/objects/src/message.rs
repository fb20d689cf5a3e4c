//! Messages, embeds and their authors.

use chrono::{DateTime, FixedOffset};
use patchwire_presence::{record, wire_enum};

use crate::snowflake::Snowflake;

wire_enum! {
    /// Kind of embed, as named on the wire.
    pub enum EmbedType as str {
        Rich = "rich",
        Image = "image",
        Video = "video",
        /// An animated gif rendered as a video.
        Gifv = "gifv",
        Article = "article",
        Link = "link",
    }
}

wire_enum! {
    pub enum MessageType as int {
        Default = 0,
        RecipientAdd = 1,
        RecipientRemove = 2,
        Call = 3,
        ChannelNameChange = 4,
        ChannelIconChange = 5,
        ChannelPinnedMessage = 6,
        GuildMemberJoin = 7,
        UserPremiumGuildSubscription = 8,
        ChannelFollowAdd = 12,
        Reply = 19,
        ChatInputCommand = 20,
        ThreadStarterMessage = 21,
        ContextMenuCommand = 23,
    }
}

record! {
    pub struct User {
        pub id: Snowflake => value "id",
        pub username: String => value "username",
        pub discriminator: String => value "discriminator",
        pub avatar: String => nullable "avatar",
        pub bot: bool => value "bot",
    }
}

record! {
    pub struct EmbedField {
        pub name: String => value "name",
        pub value: String => value "value",
        pub inline: bool => value "inline",
    }
}

record! {
    pub struct Embed {
        pub title: String => value "title",
        pub kind: EmbedType => value "type",
        pub description: String => value "description",
        pub url: String => value "url",
        pub timestamp: DateTime<FixedOffset> => value "timestamp",
        pub color: u32 => value "color",
        pub fields: Vec<EmbedField> => value "fields",
    }
}

record! {
    /// A message as delivered by events and partial fetches; any field may be
    /// absent.
    pub struct PartialMessage {
        pub id: Snowflake => value "id",
        pub channel_id: Snowflake => value "channel_id",
        pub guild_id: Snowflake => value "guild_id",
        pub author: User => value "author",
        pub content: String => value "content",
        pub timestamp: DateTime<FixedOffset> => value "timestamp",
        pub edited_timestamp: DateTime<FixedOffset> => nullable "edited_timestamp",
        pub tts: bool => value "tts",
        pub mention_everyone: bool => value "mention_everyone",
        pub mention_roles: Vec<Snowflake> => value "mention_roles",
        pub embeds: Vec<Embed> => value "embeds",
        pub nonce: String => value "nonce",
        pub pinned: bool => value "pinned",
        pub webhook_id: Snowflake => value "webhook_id",
        pub kind: MessageType => value "type",
        /// Null when the referenced message was deleted.
        pub referenced_message: Box<PartialMessage> => nullable "referenced_message",
    }
}

impl PartialMessage {
    /// True when the message came from a webhook rather than a user.
    pub fn is_webhook(&self) -> bool {
        self.webhook_id.is_value()
    }
}
