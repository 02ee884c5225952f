use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Proxy;
use url::Url;

use crate::{GravatarError, Result};

/// Status and fully drained body of a GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP transport.
///
/// Implementations read the whole body before returning, on success and
/// error statuses alike, so the underlying connection can be reused.
/// Only failures where no response arrived are reported as `Err`.
///
/// [`ReqwestClient`] is the production implementation; tests substitute
/// their own.
pub trait HttpClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(&self, url: &Url) -> std::result::Result<HttpResponse, Self::Error>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    type Error = C::Error;

    fn get(&self, url: &Url) -> std::result::Result<HttpResponse, Self::Error> {
        (**self).get(url)
    }
}

/// Settings for the underlying [`reqwest`] client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Whole-request deadline. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub proxies: Option<Vec<Url>>,
}

impl ClientConfig {
    pub fn build(self) -> Result<Client> {
        let mut cb = Client::builder().timeout(self.timeout);

        if let Some(timeout) = self.connect_timeout {
            cb = cb.connect_timeout(timeout);
        }

        if let Some(agent) = self.user_agent {
            cb = cb.user_agent(agent);
        }

        if let Some(proxies) = self.proxies {
            let (secure, insecure): (Vec<Url>, Vec<Url>) =
                proxies.into_iter().partition(|u| u.scheme() == "https");

            for u in secure {
                cb = cb.proxy(Proxy::https(u.as_str()).map_err(|source| {
                    GravatarError::Proxy {
                        url: u.to_string(),
                        source,
                    }
                })?);
            }

            for u in insecure {
                cb = cb.proxy(Proxy::http(u.as_str()).map_err(|source| {
                    GravatarError::Proxy {
                        url: u.to_string(),
                        source,
                    }
                })?);
            }
        }

        cb.build().map_err(GravatarError::ClientBuild)
    }
}

/// [`HttpClient`] backed by a pooled blocking `reqwest` client.
///
/// Must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: config.build()?,
        })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    type Error = reqwest::Error;

    fn get(&self, url: &Url) -> std::result::Result<HttpResponse, Self::Error> {
        log::trace!("GET {}", url);

        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        log::debug!("{} answered {} with {} bytes", url, status, body.len());
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
