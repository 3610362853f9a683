// ABOUTME: Custom serde deserializers for descriptor fields.
// ABOUTME: Rejects blank strings and tolerates null argument lists.

use serde::Deserialize;

use super::DescriptorError;

fn non_blank<'de, D>(deserializer: D, err: DescriptorError) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom(err));
    }
    Ok(s)
}

pub fn deserialize_binary<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    non_blank(deserializer, DescriptorError::EmptyBinary)
}

pub fn deserialize_uri<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    non_blank(deserializer, DescriptorError::EmptyUri)
}

pub fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    non_blank(deserializer, DescriptorError::EmptyName)
}

/// `args: null` and a missing `args` key both mean "no arguments".
pub fn deserialize_args<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
