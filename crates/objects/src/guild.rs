//! Guild modification with packed image fields.

use patchwire_image::{ImagePacker, PackError};
use patchwire_presence::{record, wire_enum, Optional};
use tokio::io::AsyncRead;
use tracing::debug;

use crate::snowflake::Snowflake;

wire_enum! {
    pub enum VerificationLevel as int {
        None = 0,
        Low = 1,
        Medium = 2,
        High = 3,
        VeryHigh = 4,
    }
}

record! {
    /// Partial update of a guild. Image fields hold packed data URIs; null
    /// clears the image.
    pub struct ModifyGuild {
        pub name: String => value "name",
        pub verification_level: VerificationLevel => nullable "verification_level",
        pub afk_channel_id: Snowflake => nullable "afk_channel_id",
        pub afk_timeout: u32 => value "afk_timeout",
        pub icon: String => nullable "icon",
        pub owner_id: Snowflake => value "owner_id",
        pub splash: String => nullable "splash",
        pub banner: String => nullable "banner",
        pub description: String => nullable "description",
        pub preferred_locale: String => nullable "preferred_locale",
    }
}

/// Raw image sources for a guild update.
pub struct GuildImages<I, S, B> {
    pub icon: Optional<I>,
    pub splash: Optional<S>,
    pub banner: Optional<B>,
}

impl<I, S, B> Default for GuildImages<I, S, B> {
    fn default() -> Self {
        Self {
            icon: Optional::Unset,
            splash: Optional::Unset,
            banner: Optional::Unset,
        }
    }
}

impl ModifyGuild {
    /// Packs the given image sources into this update.
    ///
    /// Unset sources leave the corresponding field as it was; null sources
    /// clear it. The first packing failure aborts the whole update.
    pub async fn with_images<I, S, B>(
        mut self,
        packer: &ImagePacker,
        images: GuildImages<I, S, B>,
    ) -> Result<Self, PackError>
    where
        I: AsyncRead + Unpin,
        S: AsyncRead + Unpin,
        B: AsyncRead + Unpin,
    {
        self.icon = packer.pack_optional(images.icon).await?.or(self.icon);
        self.splash = packer.pack_optional(images.splash).await?.or(self.splash);
        self.banner = packer.pack_optional(images.banner).await?.or(self.banner);
        debug!(
            icon = self.icon.has_value(),
            splash = self.splash.has_value(),
            banner = self.banner.has_value(),
            "guild images packed"
        );
        Ok(self)
    }
}
