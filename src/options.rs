use core::{fmt::Display, str::FromStr};

use url::Url;

use crate::{GravatarError, Result};

pub const MIN_SIZE: u16 = 1;
pub const MAX_SIZE: u16 = 2048;

/// Transport used to reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl FromStr for Scheme {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(GravatarError::InvalidScheme(s.to_string())),
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the service returns when no avatar exists for a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefaultImage {
    /// Respond with a 404 instead of an image.
    Error,
    /// A generated geometric pattern.
    IdentIcon,
    /// A generated "monster" with different colors and faces.
    Monster,
    /// A simple, cartoon-style silhouetted outline of a person.
    MysteryMan,
    /// Generated 8-bit arcade-style pixelated faces.
    Retro,
    /// Generated faces with differing features and backgrounds.
    Wavatar,
    /// An external image the service redirects to.
    Custom(Url),
}

impl DefaultImage {
    /// Accepts only absolute `http`/`https` image addresses.
    pub fn custom(url: Url) -> Result<Self> {
        match url.scheme() {
            "http" | "https" => Ok(DefaultImage::Custom(url)),
            _ => Err(GravatarError::InvalidDefaultImage(url.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DefaultImage::Error => "404",
            DefaultImage::IdentIcon => "identicon",
            DefaultImage::Monster => "monsterid",
            DefaultImage::MysteryMan => "mm",
            DefaultImage::Retro => "retro",
            DefaultImage::Wavatar => "wavatar",
            DefaultImage::Custom(url) => url.as_str(),
        }
    }
}

impl FromStr for DefaultImage {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "404" => Ok(DefaultImage::Error),
            "identicon" => Ok(DefaultImage::IdentIcon),
            "monsterid" => Ok(DefaultImage::Monster),
            "mm" => Ok(DefaultImage::MysteryMan),
            "retro" => Ok(DefaultImage::Retro),
            "wavatar" => Ok(DefaultImage::Wavatar),
            other => {
                let url = Url::parse(other).map_err(|_| {
                    GravatarError::InvalidDefaultImage(other.to_string())
                })?;
                DefaultImage::custom(url)
            }
        }
    }
}

impl Display for DefaultImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest content rating the caller accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    G,
    Pg,
    R,
    X,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }
}

impl FromStr for Rating {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::Pg),
            "r" => Ok(Rating::R),
            "x" => Ok(Rating::X),
            _ => Err(GravatarError::InvalidRating(s.to_string())),
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional directives attached to an avatar request.
///
/// ```
/// use gravatar::{AvatarOptions, DefaultImage, Rating};
///
/// let options = AvatarOptions::new()
///     .with_size(256)
///     .unwrap()
///     .with_default(DefaultImage::IdentIcon)
///     .with_rating(Rating::Pg);
/// assert_eq!(options.size(), Some(256));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarOptions {
    size: Option<u16>,
    default: Option<DefaultImage>,
    rating: Option<Rating>,
}

impl AvatarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: u32) -> Result<Self> {
        let size = u16::try_from(size)
            .ok()
            .filter(|s| (MIN_SIZE..=MAX_SIZE).contains(s))
            .ok_or(GravatarError::InvalidSize(size))?;
        self.size = Some(size);
        Ok(self)
    }

    pub fn with_default(mut self, default: DefaultImage) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn size(&self) -> Option<u16> {
        self.size
    }

    pub fn default_image(&self) -> Option<&DefaultImage> {
        self.default.as_ref()
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.default.is_none() && self.rating.is_none()
    }

    /// Query parameters sorted by key.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(default) = &self.default {
            pairs.push(("d", default.to_string()));
        }
        if let Some(rating) = self.rating {
            pairs.push(("r", rating.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("s", size.to_string()));
        }
        pairs
    }
}
