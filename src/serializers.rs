use serde::{Deserialize, Deserializer};
use serde::de;
use serde_json::Value;

/// Deserializes a GraphQL `ID`. Some services send these as numbers, others as strings.
pub fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(num) => Ok(num.to_string()),
        _ => Err(de::Error::custom("not a number or string")),
    }
}

/// Deserializes `null` as the default value of `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>
{
    let value = Option::<T>::deserialize(deserializer)?;
    
    Ok(value.unwrap_or_default())
}
