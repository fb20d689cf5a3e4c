//! Inline `data:` URI form of an image payload.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::PackError;
use crate::signature::{sniff, ImageFormat};

/// Prefix shared by every packed image: `data:image/`.
pub const IMAGE_URI_START: &str = "data:image/";

/// Separator between the media subtype and the payload.
pub const BASE64_MARKER: &str = ";base64,";

/// Formats `bytes` as `data:image/<format>;base64,<payload>`.
pub fn encode(format: ImageFormat, bytes: &[u8]) -> String {
    let name = format.wire_name();
    let mut out = String::with_capacity(
        IMAGE_URI_START.len() + name.len() + BASE64_MARKER.len() + bytes.len().div_ceil(3) * 4,
    );
    out.push_str(IMAGE_URI_START);
    out.push_str(name);
    out.push_str(BASE64_MARKER);
    STANDARD.encode_string(bytes, &mut out);
    out
}

/// Splits a packed image back into its format and raw bytes.
///
/// The decoded bytes must sniff as the declared format.
pub fn unpack(uri: &str) -> Result<(ImageFormat, Vec<u8>), PackError> {
    let rest = uri
        .strip_prefix(IMAGE_URI_START)
        .ok_or(PackError::InvalidDataUri("missing `data:image/` prefix"))?;
    let (name, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or(PackError::InvalidDataUri("missing `;base64,` marker"))?;
    let declared = ImageFormat::from_wire_name(name)
        .ok_or(PackError::InvalidDataUri("unsupported media subtype"))?;
    let bytes = STANDARD.decode(payload)?;
    match sniff(&bytes) {
        Some(detected) if detected == declared => Ok((declared, bytes)),
        Some(detected) => Err(PackError::FormatMismatch { declared, detected }),
        None => Err(PackError::UnsupportedFormat),
    }
}
