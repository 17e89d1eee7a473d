//! Exact JSON numbers for hand-written deserializers.
//!
//! With serde_json's `arbitrary_precision` (enabled through rust_decimal),
//! `deserialize_any` hands every JSON number to `visit_map` as a one-entry
//! map whose value is the number's original text. Reading that text keeps
//! prices and IDs exact instead of passing them through `f64`.

use serde::de::{Error, MapAccess};

/// Key serde_json uses for the one-entry number map.
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Read the original text of a JSON number presented as a map.
///
/// # Errors
///
/// Fails if the map is anything other than serde_json's number entry.
#[doc(hidden)]
pub fn read_number_text<'de, A>(mut map: A) -> Result<String, A::Error>
where
    A: MapAccess<'de>,
{
    match map.next_key::<String>()? {
        Some(key) if key == NUMBER_TOKEN => map.next_value::<String>(),
        Some(key) => Err(A::Error::unknown_field(&key, &[])),
        None => Err(A::Error::invalid_length(0, &"a JSON number")),
    }
}
