//! Declaration macros for records and wire enumerations.

/// Declares a record whose fields are presence containers.
///
/// Each field names its element type, how a `null` is treated and its wire
/// name. A `value` field hands `null` to the element codec, so only an
/// `Option<T>` element accepts it (as `Value(None)`). A `nullable` field maps
/// `null` to [`Optional::Null`](crate::Optional::Null).
///
/// ```
/// use patchwire_presence::{record, Optional};
///
/// record! {
///     pub struct ModifyChannel {
///         pub name: String => value "name",
///         pub topic: String => nullable "topic",
///         pub position: u32 => value "position",
///     }
/// }
///
/// let patch = ModifyChannel {
///     topic: Optional::Null,
///     ..Default::default()
/// };
/// assert_eq!(patchwire_presence::to_string(&patch).unwrap(), r#"{"topic":null}"#);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty => $kind:ident $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $crate::Optional<$ty>,
            )*
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$($wire),*];

            fn write_fields(
                &self,
                out: &mut $crate::ObjectWriter<'_>,
            ) -> ::core::result::Result<(), $crate::EncodeError> {
                $( out.field($wire, &self.$field)?; )*
                ::core::result::Result::Ok(())
            }

            #[allow(unused_variables, unreachable_code)]
            fn read_field(
                &mut self,
                name: &str,
                reader: $crate::FieldReader<'_>,
            ) -> ::core::result::Result<bool, $crate::DecodeError> {
                match name {
                    $( $wire => self.$field = reader.$kind::<$ty>()?, )*
                    _ => return ::core::result::Result::Ok(false),
                }
                ::core::result::Result::Ok(true)
            }
        }

        impl $crate::FieldValue for $name {
            const EXPECTED: &'static str = concat!(stringify!($name), " object");

            fn encode(
                &self,
                path: &mut $crate::FieldPath,
            ) -> ::core::result::Result<$crate::__private::serde_json::Value, $crate::EncodeError> {
                $crate::codec::encode_record(self, path)
            }

            fn decode(
                value: $crate::__private::serde_json::Value,
                path: &mut $crate::FieldPath,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                $crate::codec::decode_record(value, path)
            }
        }

        $crate::__serde_via_codec!($name);
    };
}

/// Declares an enumeration encoded by its documented discriminator.
///
/// `as str` uses names on the wire, `as int` uses integers. Unknown
/// discriminators fail decoding with [`DecodeError::UnknownVariant`](crate::DecodeError::UnknownVariant).
///
/// ```
/// use patchwire_presence::wire_enum;
///
/// wire_enum! {
///     pub enum Privacy as int {
///         Public = 1,
///         GuildOnly = 2,
///     }
/// }
///
/// assert_eq!(Privacy::GuildOnly.wire_value(), 2);
/// assert_eq!(Privacy::from_wire_value(1), Some(Privacy::Public));
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as str {
            $( $(#[$variant_meta:meta])* $variant:ident = $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub const fn wire_name(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )*
                }
            }

            pub fn from_wire_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    $( $wire => ::core::option::Option::Some(Self::$variant), )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.wire_name())
            }
        }

        impl $crate::FieldValue for $name {
            const EXPECTED: &'static str = concat!(stringify!($name), " name");

            fn encode(
                &self,
                _path: &mut $crate::FieldPath,
            ) -> ::core::result::Result<$crate::__private::serde_json::Value, $crate::EncodeError> {
                ::core::result::Result::Ok($crate::__private::serde_json::Value::String(
                    self.wire_name().into(),
                ))
            }

            fn decode(
                value: $crate::__private::serde_json::Value,
                path: &mut $crate::FieldPath,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                $crate::__private::decode_name(
                    value,
                    path,
                    <Self as $crate::FieldValue>::EXPECTED,
                    stringify!($name),
                    Self::from_wire_name,
                )
            }
        }

        $crate::__serde_via_codec!($name);
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as int {
            $( $(#[$variant_meta:meta])* $variant:ident = $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub const fn wire_value(self) -> i64 {
                match self {
                    $( Self::$variant => $wire, )*
                }
            }

            pub fn from_wire_value(value: i64) -> ::core::option::Option<Self> {
                match value {
                    $( $wire => ::core::option::Option::Some(Self::$variant), )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::FieldValue for $name {
            const EXPECTED: &'static str = concat!(stringify!($name), " discriminator");

            fn encode(
                &self,
                _path: &mut $crate::FieldPath,
            ) -> ::core::result::Result<$crate::__private::serde_json::Value, $crate::EncodeError> {
                ::core::result::Result::Ok($crate::__private::serde_json::Value::from(
                    self.wire_value(),
                ))
            }

            fn decode(
                value: $crate::__private::serde_json::Value,
                path: &mut $crate::FieldPath,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                $crate::__private::decode_discriminant(
                    value,
                    path,
                    <Self as $crate::FieldValue>::EXPECTED,
                    stringify!($name),
                    Self::from_wire_value,
                )
            }
        }

        $crate::__serde_via_codec!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __serde_via_codec {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::__private::deserialize(deserializer)
            }
        }
    };
}
