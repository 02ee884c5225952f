use serde::{Deserialize, Serialize};

use crate::de::{bool_string, null_default, u64_string};
use crate::Result;

/// Profile information associated with an email.
///
/// Every field falls back to its zero value when the service omits it or
/// sends `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(with = "u64_string")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
    #[serde(deserialize_with = "null_default")]
    pub preferred_username: String,
    #[serde(deserialize_with = "null_default")]
    pub profile_url: String,
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_default")]
    pub about_me: String,
    #[serde(deserialize_with = "null_default")]
    pub current_location: String,
    #[serde(deserialize_with = "null_default")]
    pub name: Name,
    #[serde(deserialize_with = "null_default")]
    pub profile_background: ProfileBackground,
    #[serde(deserialize_with = "null_default")]
    pub accounts: Vec<Account>,
    #[serde(deserialize_with = "null_default")]
    pub emails: Vec<Email>,
    #[serde(deserialize_with = "null_default")]
    pub ims: Vec<Im>,
    #[serde(deserialize_with = "null_default")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(deserialize_with = "null_default")]
    pub photos: Vec<Photo>,
    #[serde(deserialize_with = "null_default")]
    pub urls: Vec<Link>,
}

impl Profile {
    /// `true` for the zero-valued record returned when the service
    /// answers with no entries.
    pub fn is_empty(&self) -> bool {
        *self == Profile::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Name {
    #[serde(deserialize_with = "null_default")]
    pub formatted: String,
    #[serde(
        rename = "givenName",
        alias = "given",
        deserialize_with = "null_default"
    )]
    pub given: String,
    #[serde(
        rename = "familyName",
        alias = "family",
        deserialize_with = "null_default"
    )]
    pub family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileBackground {
    #[serde(deserialize_with = "null_default")]
    pub color: String,
    #[serde(deserialize_with = "null_default")]
    pub position: String,
    #[serde(deserialize_with = "null_default")]
    pub repeat: String,
}

/// A verified account on another service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_default")]
    pub display: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    #[serde(with = "bool_string")]
    pub verified: bool,
    #[serde(alias = "shortName", deserialize_with = "null_default")]
    pub shortname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Email {
    #[serde(with = "bool_string")]
    pub primary: bool,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
}

/// Instant messenger handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Im {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhoneNumber {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Photo {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
}

/// Outer document of the profile endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileEnvelope {
    #[serde(default, deserialize_with = "null_default")]
    pub entry: Vec<Profile>,
}

impl ProfileEnvelope {
    /// First entry, or an empty profile when there is none.
    pub fn into_profile(self) -> Profile {
        self.entry.into_iter().next().unwrap_or_default()
    }
}

/// Decodes a profile endpoint body.
///
/// An envelope with no entries yields [`Profile::default`], not an error.
pub fn decode_profile(data: &[u8]) -> Result<Profile> {
    let envelope: ProfileEnvelope = serde_json::from_slice(data)?;
    log::trace!("Profile envelope holds {} entries", envelope.entry.len());

    Ok(envelope.into_profile())
}
