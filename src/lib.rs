//! Client for the Gravatar avatar and profile service.
//!
//! ```no_run
//! use gravatar::{AvatarOptions, DefaultImage, EmailHash, Gravatar, Scheme};
//!
//! let gravatar = Gravatar::new()?;
//! let hash = EmailHash::from_email("ftrvxmtrx@gmail.com");
//!
//! let options = AvatarOptions::new()
//!     .with_size(128)?
//!     .with_default(DefaultImage::Retro);
//! let image = gravatar.fetch_avatar(Scheme::Https, &hash, &options)?;
//!
//! let profile = gravatar.fetch_profile(Scheme::Https, &hash)?;
//! println!("{} ({} bytes)", profile.preferred_username, image.len());
//! # Ok::<(), gravatar::GravatarError>(())
//! ```

mod de;
mod errors;
mod gravatar;

pub mod client;
pub mod endpoint;
pub mod hash;
pub mod options;
pub mod profile;

pub use client::{ClientConfig, HttpClient, HttpResponse, ReqwestClient};
pub use endpoint::{Endpoint, DEFAULT_HOST};
pub use errors::{GravatarError, Result};
pub use gravatar::Gravatar;
pub use hash::{email_hash, EmailHash};
pub use options::{AvatarOptions, DefaultImage, Rating, Scheme};
pub use profile::{decode_profile, Profile, ProfileEnvelope};
