use thiserror::Error;

pub type Result<T> = std::result::Result<T, GravatarError>;

#[derive(Error, Debug)]
pub enum GravatarError {
    /// No response was received: DNS, TLS, connection or timeout failure.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The service answered with a non-success status.
    /// Displays the raw response body.
    #[error("{body}")]
    Remote { status: u16, body: String },
    #[error("Failed to decode profile: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Avatar size must be within 1..=2048, got {0}")]
    InvalidSize(u32),
    #[error("Invalid default image: {0}")]
    InvalidDefaultImage(String),
    #[error("Invalid rating: {0}")]
    InvalidRating(String),
    #[error("Invalid email hash: {0}")]
    InvalidHash(String),
    #[error("Invalid host: {0}")]
    InvalidHost(String),
    #[error("Invalid scheme: {0}")]
    InvalidScheme(String),
    #[error("Failed to build client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Invalid proxy URL {url}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl GravatarError {
    pub(crate) fn transport<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(e))
    }
}
