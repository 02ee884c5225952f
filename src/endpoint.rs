use once_cell::sync::Lazy;
use url::Url;

use crate::options::{AvatarOptions, Scheme};
use crate::{GravatarError, Result};

pub const DEFAULT_HOST: &str = "gravatar.com";

pub(crate) static DEFAULT_ENDPOINT: Lazy<Endpoint> = Lazy::new(|| {
    Endpoint::new(DEFAULT_HOST).expect("default host is a valid authority")
});

/// Base addresses of the service, one per scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    http: Url,
    https: Url,
}

impl Endpoint {
    /// `host` may carry a port, e.g. `127.0.0.1:8080`.
    pub fn new(host: &str) -> Result<Self> {
        let invalid = || GravatarError::InvalidHost(host.to_string());
        if host.is_empty() || host.contains(['/', '?', '#', '@']) {
            return Err(invalid());
        }

        let http =
            Url::parse(&format!("http://{host}/")).map_err(|_| invalid())?;
        let https =
            Url::parse(&format!("https://{host}/")).map_err(|_| invalid())?;
        Ok(Self {
            host: host.to_string(),
            http,
            https,
        })
    }

    /// Host as given, including any port.
    pub fn host(&self) -> &str {
        &self.host
    }

    fn base(&self, scheme: Scheme) -> Url {
        match scheme {
            Scheme::Http => self.http.clone(),
            Scheme::Https => self.https.clone(),
        }
    }

    /// `<scheme>://<host>/avatar/<key>?<options>`
    pub fn avatar_url(
        &self,
        scheme: Scheme,
        key: &str,
        options: &AvatarOptions,
    ) -> Url {
        let mut url = self.base(scheme);
        url.set_path(&format!("/avatar/{key}"));

        let pairs = options.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// `<scheme>://<host>/<key>.json`
    pub fn profile_url(&self, scheme: Scheme, key: &str) -> Url {
        let mut url = self.base(scheme);
        url.set_path(&format!("/{key}.json"));
        url
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        DEFAULT_ENDPOINT.clone()
    }
}
