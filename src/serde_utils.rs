/// Serde utility functions for common patterns
use serde::Deserializer;
use std::fmt;

/// Deserialize an optional unsigned integer that may arrive as a JSON number
/// or as a numeric string.
///
/// MCP prompt arguments are transported as strings, so `"14"` and `14` must
/// both be accepted.
///
/// - Missing field, `null` or blank string → `None`
/// - `14` or `"14"` → `Some(14)`
/// - Anything else → error
///
/// Usage:
/// ```ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "crate::serde_utils::lenient_u32")]
///     sprint_duration: Option<u32>,
/// }
/// ```
pub fn lenient_u32<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientU32Visitor;

    impl<'de> serde::de::Visitor<'de> for LenientU32Visitor {
        type Value = Option<u32>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a string holding one")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u32::try_from(v)
                .map(Some)
                .map_err(|_| E::custom(format!("{v} is out of range")))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u32::try_from(v)
                .map(Some)
                .map_err(|_| E::custom(format!("{v} is out of range")))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<u32>()
                .map(Some)
                .map_err(|_| E::custom(format!("'{v}' is not a non-negative integer")))
        }
    }

    de.deserialize_option(LenientU32Visitor)
}

#[cfg(test)]
#[path = "serde_utils_test.rs"]
mod serde_utils_test;
