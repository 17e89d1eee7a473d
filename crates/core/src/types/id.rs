//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` as a plain JSON string
/// - `Deserialize` from either a JSON string or a JSON integer (integers are
///   normalized to their decimal string form)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>`, `From<u64>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use sneaker_shelf_core::define_id;
/// define_id!(ShoeId);
/// define_id!(StoreId);
///
/// let shoe_id = ShoeId::new("1");
/// let store_id = StoreId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: ShoeId = store_id;
/// assert_eq!(shoe_id, ShoeId::from(1_u64));
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct IdVisitor;

                impl<'de> ::serde::de::Visitor<'de> for IdVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                        f.write_str("a string or non-negative integer ID")
                    }

                    fn visit_str<E: ::serde::de::Error>(self, id: &str) -> ::core::result::Result<$name, E> {
                        Ok($name::from(id))
                    }

                    fn visit_string<E: ::serde::de::Error>(self, id: String) -> ::core::result::Result<$name, E> {
                        Ok($name(id))
                    }

                    fn visit_u64<E: ::serde::de::Error>(self, id: u64) -> ::core::result::Result<$name, E> {
                        Ok($name::from(id))
                    }

                    fn visit_i64<E: ::serde::de::Error>(self, id: i64) -> ::core::result::Result<$name, E> {
                        u64::try_from(id).map($name::from).map_err(|_| {
                            E::invalid_value(::serde::de::Unexpected::Signed(id), &self)
                        })
                    }

                    fn visit_map<A>(self, map: A) -> ::core::result::Result<$name, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        let text = $crate::types::number::read_number_text(map)?;
                        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                            Ok($name(text))
                        } else {
                            Err(<A::Error as ::serde::de::Error>::invalid_value(
                                ::serde::de::Unexpected::Str(&text),
                                &self,
                            ))
                        }
                    }
                }

                deserializer.deserialize_any(IdVisitor)
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_id() {
        let id: ProductId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(id.as_str(), "12");
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let id: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(id, ProductId::new("12"));
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let json = serde_json::to_string(&ProductId::from(7_u64)).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_deserialize_rejects_other_shapes() {
        assert!(serde_json::from_str::<ProductId>("true").is_err());
        assert!(serde_json::from_str::<ProductId>("{\"id\": 1}").is_err());
        assert!(serde_json::from_str::<ProductId>("1.5").is_err());
        assert!(serde_json::from_str::<ProductId>("-3").is_err());
    }

    #[test]
    fn test_deserialize_large_numeric_id_exactly() {
        let id: ProductId = serde_json::from_str("123456789012345678901234567890").unwrap();
        assert_eq!(id.as_str(), "123456789012345678901234567890");
    }

    #[test]
    fn test_deserialize_numeric_ids_in_array() {
        let ids: Vec<ProductId> = serde_json::from_str("[2, \"9\"]").unwrap();
        assert_eq!(ids, vec![ProductId::new("2"), ProductId::new("9")]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::new("af1-white").to_string(), "af1-white");
    }
}
