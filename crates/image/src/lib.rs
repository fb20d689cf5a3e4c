//! Binary payload packing for image fields.
//!
//! Raw bytes are classified by magic number and re-encoded as
//! `data:image/<format>;base64,<payload>`, the form resource fields such as
//! icons and banners carry on the wire. Unrecognised payloads are rejected
//! rather than guessed.
//!
//! ```
//! let gif = b"GIF89a\x01\x00\x01\x00";
//! let packed = patchwire_image::pack_bytes(gif).unwrap();
//! assert_eq!(packed, "data:image/gif;base64,R0lGODlhAQABAA==");
//! ```

pub mod data_uri;
pub mod error;
pub mod packer;
pub mod signature;

pub use data_uri::unpack;
pub use error::PackError;
pub use packer::{pack_bytes, pack_image, pack_optional_image, ImagePacker, PackOptions};
pub use signature::{sniff, ImageFormat, Signature, SIGNATURES};
