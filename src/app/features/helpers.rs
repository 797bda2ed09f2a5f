use serde::{de::Deserializer, Deserialize};

/// Deserializes a JSON value so that missing key => None, present null => Some(None),
/// present value => Some(Some(v)). Required to distinguish "omit field" (leave
/// unchanged) from "field: null" (clear the stored value).
pub fn deserialize_optional_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Trim a client-supplied string, mapping blank input to None.
pub fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
