//! Buffers a byte source, classifies it, and packs it into a data URI.

use patchwire_presence::Optional;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use crate::data_uri;
use crate::error::PackError;
use crate::signature::sniff;

/// Packer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackOptions {
    /// Largest payload accepted, in bytes. `None` buffers without bound.
    pub max_bytes: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ImagePacker {
    options: PackOptions,
}

impl ImagePacker {
    pub fn new(options: PackOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PackOptions {
        &self.options
    }

    /// Classifies and encodes an already buffered payload.
    pub fn pack_bytes(&self, bytes: &[u8]) -> Result<String, PackError> {
        if let Some(limit) = self.options.max_bytes {
            if bytes.len() > limit {
                return Err(PackError::TooLarge { limit });
            }
        }
        let Some(format) = sniff(bytes) else {
            warn!(bytes = bytes.len(), "unknown or unsupported image format");
            return Err(PackError::UnsupportedFormat);
        };
        debug!(%format, bytes = bytes.len(), "packing image");
        Ok(data_uri::encode(format, bytes))
    }

    /// Drains `reader` to the end, then packs what was read.
    ///
    /// Dropping the returned future while it is reading cancels the
    /// operation; nothing is produced from a partial read.
    pub async fn pack<R>(&self, reader: R) -> Result<String, PackError>
    where
        R: AsyncRead + Unpin,
    {
        let bytes = self.drain(reader).await?;
        self.pack_bytes(&bytes)
    }

    /// Packs an optional byte source, passing unset and null through.
    pub async fn pack_optional<R>(&self, source: Optional<R>) -> Result<Optional<String>, PackError>
    where
        R: AsyncRead + Unpin,
    {
        match source {
            Optional::Unset => Ok(Optional::Unset),
            Optional::Null => Ok(Optional::Null),
            Optional::Value(reader) => self.pack(reader).await.map(Optional::Value),
        }
    }

    async fn drain<R>(&self, mut reader: R) -> Result<Vec<u8>, PackError>
    where
        R: AsyncRead + Unpin,
    {
        let mut buf = Vec::new();
        match self.options.max_bytes {
            None => {
                reader.read_to_end(&mut buf).await?;
            }
            Some(limit) => {
                // Read one byte past the limit so oversized payloads are detected.
                let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
                reader.take(cap).read_to_end(&mut buf).await?;
                if buf.len() > limit {
                    return Err(PackError::TooLarge { limit });
                }
            }
        }
        Ok(buf)
    }
}

/// [`ImagePacker::pack_bytes`] with default options.
pub fn pack_bytes(bytes: &[u8]) -> Result<String, PackError> {
    ImagePacker::default().pack_bytes(bytes)
}

/// [`ImagePacker::pack`] with default options.
pub async fn pack_image<R>(reader: R) -> Result<String, PackError>
where
    R: AsyncRead + Unpin,
{
    ImagePacker::default().pack(reader).await
}

/// [`ImagePacker::pack_optional`] with default options.
pub async fn pack_optional_image<R>(source: Optional<R>) -> Result<Optional<String>, PackError>
where
    R: AsyncRead + Unpin,
{
    ImagePacker::default().pack_optional(source).await
}
