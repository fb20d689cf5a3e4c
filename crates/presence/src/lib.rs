//! Presence tracking for partial JSON resource models.
//!
//! Every field of a resource is an [`Optional<T>`] that is either unset,
//! explicitly null, or set to a value. The codec omits unset fields when
//! writing and restores all three states when reading, which is what
//! PATCH-style requests need: only the fields a caller touched go over the
//! wire.
//!
//! ```
//! use patchwire_presence::{record, Optional};
//!
//! record! {
//!     pub struct Member {
//!         pub nick: String => nullable "nick",
//!         pub mute: bool => value "mute",
//!     }
//! }
//!
//! let member: Member = patchwire_presence::from_str(r#"{"nick":null,"flags":4}"#).unwrap();
//! assert_eq!(member.nick, Optional::Null);
//! assert_eq!(member.mute, Optional::Unset);
//! ```

pub mod codec;
pub mod error;
pub mod field;
mod macros;
pub mod optional;
pub mod path;
mod serde_impl;

pub use codec::{
    from_slice, from_str, from_value, to_string, to_value, to_vec, FieldReader, ObjectWriter,
    Record,
};
pub use error::{DecodeError, EncodeError, UnsetReadError};
pub use field::FieldValue;
pub use optional::Optional;
pub use path::{FieldPath, Segment};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;

    pub use crate::serde_impl::{decode_discriminant, decode_name, deserialize, serialize};
}
