use url::Url;

use crate::client::{HttpClient, ReqwestClient};
use crate::endpoint::Endpoint;
use crate::options::{AvatarOptions, Scheme};
use crate::profile::{decode_profile, Profile};
use crate::{GravatarError, Result};

/// Client for the avatar and profile endpoints.
///
/// Every call is one blocking GET; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct Gravatar<C = ReqwestClient> {
    client: C,
    endpoint: Endpoint,
}

impl Gravatar<ReqwestClient> {
    /// Uses a default [`ReqwestClient`] against `gravatar.com`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(ReqwestClient::new()?))
    }
}

impl<C: HttpClient> Gravatar<C> {
    pub fn with_client(client: C) -> Self {
        Self {
            client,
            endpoint: Endpoint::default(),
        }
    }

    /// Points the client at another host, e.g. `secure.gravatar.com`.
    pub fn with_host(mut self, host: &str) -> Result<Self> {
        self.endpoint = Endpoint::new(host)?;
        Ok(self)
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn host(&self) -> &str {
        self.endpoint.host()
    }

    /// Address of an avatar, for embedding rather than downloading.
    ///
    /// `key` is an email hash, optionally with an image extension
    /// (`<hash>.png`).
    pub fn avatar_url(
        &self,
        scheme: Scheme,
        key: impl AsRef<str>,
        options: &AvatarOptions,
    ) -> Url {
        self.endpoint.avatar_url(scheme, key.as_ref(), options)
    }

    pub fn profile_url(&self, scheme: Scheme, key: impl AsRef<str>) -> Url {
        self.endpoint.profile_url(scheme, key.as_ref())
    }

    /// Downloads the avatar image.
    ///
    /// The body of a successful response is returned as is, without any
    /// check of its content type or size.
    pub fn fetch_avatar(
        &self,
        scheme: Scheme,
        key: impl AsRef<str>,
        options: &AvatarOptions,
    ) -> Result<Vec<u8>> {
        let url = self.avatar_url(scheme, key, options);
        self.run(&url, Ok)
    }

    /// Downloads and decodes the profile.
    ///
    /// Unknown keys may come back as an empty profile rather than an error;
    /// check [`Profile::is_empty`].
    pub fn fetch_profile(
        &self,
        scheme: Scheme,
        key: impl AsRef<str>,
    ) -> Result<Profile> {
        let url = self.profile_url(scheme, key);
        self.run(&url, |data| decode_profile(&data))
    }

    fn run<T, F>(&self, url: &Url, f: F) -> Result<T>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        let response = self
            .client
            .get(url)
            .map_err(GravatarError::transport)?;

        if response.is_success() {
            f(response.body)
        } else {
            Err(GravatarError::Remote {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            })
        }
    }
}
