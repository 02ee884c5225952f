//! Serde helpers for fields the service transmits as JSON strings.
//!
//! Decoding accepts both the quoted form (`"true"`, `"42"`) and the native
//! JSON value. Encoding always writes the quoted form. `null` decodes to
//! the zero value, whatever the field's type.

use core::fmt::Display;
use core::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Quoted<T> {
    Native(T),
    Text(String),
}

fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default + Deserialize<'de>,
    T::Err: Display,
{
    match Option::<Quoted<T>>::deserialize(deserializer)? {
        None => Ok(T::default()),
        Some(Quoted::Native(value)) => Ok(value),
        Some(Quoted::Text(text)) => {
            text.trim().parse().map_err(de::Error::custom)
        }
    }
}

/// Decodes `null` as `T::default()`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    serializer.collect_str(value)
}

pub(crate) mod bool_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize(deserializer)
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize(value, serializer)
    }
}

pub(crate) mod u64_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize(deserializer)
    }

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize(value, serializer)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Sample {
        #[serde(with = "super::bool_string")]
        flag: bool,
        #[serde(with = "super::u64_string")]
        count: u64,
    }

    #[rstest]
    #[case(json!({"flag": "true", "count": "42"}), true, 42)]
    #[case(json!({"flag": "false", "count": "0"}), false, 0)]
    #[case(json!({"flag": true, "count": 7}), true, 7)]
    #[case(json!({"flag": " true ", "count": " 12 "}), true, 12)]
    #[case(json!({"flag": null, "count": null}), false, 0)]
    fn coerces_quoted_values(
        #[case] input: Value,
        #[case] flag: bool,
        #[case] count: u64,
    ) {
        let sample: Sample = serde_json::from_value(input).unwrap();
        assert_eq!(sample, Sample { flag, count });
    }

    #[rstest]
    #[case(json!({"flag": "yes", "count": "1"}))]
    #[case(json!({"flag": "true", "count": "-1"}))]
    #[case(json!({"flag": "true", "count": "many"}))]
    #[case(json!({"flag": [], "count": "1"}))]
    fn rejects_garbage(#[case] input: Value) {
        assert!(serde_json::from_value::<Sample>(input).is_err());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Nullable {
        #[serde(default, deserialize_with = "super::null_default")]
        text: String,
        #[serde(default, deserialize_with = "super::null_default")]
        list: Vec<String>,
    }

    #[rstest]
    #[case(json!({"text": null, "list": null}), "", 0)]
    #[case(json!({}), "", 0)]
    #[case(json!({"text": "a", "list": ["b"]}), "a", 1)]
    fn null_is_zero_value(
        #[case] input: Value,
        #[case] text: &str,
        #[case] len: usize,
    ) {
        let nullable: Nullable = serde_json::from_value(input).unwrap();
        assert_eq!(nullable.text, text);
        assert_eq!(nullable.list.len(), len);
    }

    #[test]
    fn encodes_as_strings() {
        let value = serde_json::to_value(Sample {
            flag: true,
            count: 42,
        })
        .unwrap();
        assert_eq!(value, json!({"flag": "true", "count": "42"}));
    }
}
