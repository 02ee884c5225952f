use core::{fmt::Display, str::FromStr};

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::{GravatarError, Result};

const HASH_LEN: usize = 32;

/// Lowercases `email` and returns its MD5 digest as lowercase hex.
///
/// This is the key the service addresses avatars and profiles by.
pub fn email_hash(email: &str) -> String {
    log::trace!("Computing email hash for {} bytes", email.len());

    // Per-character mapping, without the final-sigma context rule.
    let lower: String = email.chars().flat_map(char::to_lowercase).collect();
    let digest = Md5::digest(lower.as_bytes());
    hex::encode(digest)
}

/// A 32-character lowercase hex MD5 digest of an email address.
#[derive(
    Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct EmailHash(String);

impl EmailHash {
    pub fn from_email(email: &str) -> Self {
        EmailHash(email_hash(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key asking the service for a specific image format,
    /// e.g. `<hash>.png`.
    pub fn with_extension(&self, ext: &str) -> String {
        format!("{}.{}", self.0, ext.trim_start_matches('.'))
    }
}

impl FromStr for EmailHash {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != HASH_LEN || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GravatarError::InvalidHash(s.to_string()));
        }
        Ok(EmailHash(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for EmailHash {
    type Error = GravatarError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<EmailHash> for String {
    fn from(hash: EmailHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for EmailHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for EmailHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn sanity_check() {
        let hash = email_hash("ftrvxmtrx@gmail.com");
        assert_eq!(hash, "d96ba36eb0d406aea53f3868cd06fca8");

        let id = EmailHash::from_email("ftrvxmtrx@gmail.com");
        assert_eq!(id.as_str(), "d96ba36eb0d406aea53f3868cd06fca8");
    }

    #[rstest]
    #[case("FOO@BAR.com", "foo@bar.com")]
    #[case("FtrvxMtrx@Gmail.COM", "ftrvxmtrx@gmail.com")]
    #[case("", "")]
    #[case("ΑΣ@x.com", "ασ@x.com")]
    fn hashing_ignores_case(#[case] mixed: &str, #[case] lower: &str) {
        assert_eq!(email_hash(mixed), email_hash(lower));
    }

    #[test]
    fn empty_string_hashes() {
        assert_eq!(email_hash(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn sigma_is_lowercased_per_character() {
        assert_eq!(email_hash("ΑΣ@x.com"), "c8913eb41bd1956b35128cac7361da64");
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_ne!(
            email_hash(" foo@bar.com"),
            email_hash("foo@bar.com")
        );
    }

    #[rstest]
    #[case("D96BA36EB0D406AEA53F3868CD06FCA8", true)]
    #[case("d96ba36eb0d406aea53f3868cd06fca8", true)]
    #[case("d96ba36eb0d406aea53f3868cd06fca", false)]
    #[case("z96ba36eb0d406aea53f3868cd06fca8", false)]
    #[case("", false)]
    fn parse_hex_hash(#[case] input: &str, #[case] valid: bool) {
        let parsed = input.parse::<EmailHash>();
        assert_eq!(parsed.is_ok(), valid);
        if let Ok(hash) = parsed {
            assert_eq!(hash.as_str(), "d96ba36eb0d406aea53f3868cd06fca8");
        }
    }

    #[test]
    fn extension_key() {
        let hash = EmailHash::from_email("ftrvxmtrx@gmail.com");
        assert_eq!(
            hash.with_extension("png"),
            "d96ba36eb0d406aea53f3868cd06fca8.png"
        );
        assert_eq!(hash.with_extension(".jpg"), format!("{hash}.jpg"));
    }
}
