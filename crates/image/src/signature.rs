//! Magic-number table and format sniffing.

use patchwire_presence::wire_enum;

wire_enum! {
    /// Image formats accepted for inline payloads, named as they appear in
    /// the media type.
    pub enum ImageFormat as str {
        Png = "png",
        Jpeg = "jpeg",
        Gif = "gif",
    }
}

impl ImageFormat {
    /// The full media type, e.g. `image/png`.
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }
}

/// A magic byte sequence expected at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub magic: &'static [u8],
    pub offset: usize,
    pub format: ImageFormat,
}

impl Signature {
    pub fn matches(&self, bytes: &[u8]) -> bool {
        let end = self.offset + self.magic.len();
        bytes.get(self.offset..end) == Some(self.magic)
    }
}

/// Checked in order; the first match wins. No two entries share a prefix.
pub static SIGNATURES: &[Signature] = &[
    Signature {
        magic: &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        offset: 0,
        format: ImageFormat::Png,
    },
    Signature {
        magic: &[0xFF, 0xD8, 0xFF],
        offset: 0,
        format: ImageFormat::Jpeg,
    },
    Signature {
        magic: b"GIF87a",
        offset: 0,
        format: ImageFormat::Gif,
    },
    Signature {
        magic: b"GIF89a",
        offset: 0,
        format: ImageFormat::Gif,
    },
];

/// Classifies `bytes` by their leading magic number.
pub fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
    SIGNATURES
        .iter()
        .find(|signature| signature.matches(bytes))
        .map(|signature| signature.format)
}
