use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Reads a boolean column the way Postgres and spreadsheet exports spell it.
///
/// Pass-through columns must never cost a row, so unrecognised text becomes `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "t" | "true" | "y" | "yes" | "1" => Some(true),
        "f" | "false" | "n" | "no" | "0" => Some(false),
        "" => None,
        other => {
            debug!("Ignoring unrecognised flag value [{other}]");
            None
        }
    }
}

pub fn deserialize_optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.as_deref().and_then(parse_flag))
}
