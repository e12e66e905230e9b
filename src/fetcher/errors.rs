use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("dns failure: {0}")]
    Dns(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("too many redirects")]
    RedirectLoop,

    #[error("http error {status}")]
    Http {
        status: reqwest::StatusCode,
        retriable: bool,
    },

    #[error("body too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("io error: {0}")]
    Io(String),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Whether a later re-submission of the same URL could plausibly succeed.
    /// Requests are never retried in-process; this only feeds the logs.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::UnsupportedScheme(_) => false,
            Self::BodyTooLarge(_) => false,
            Self::Http { retriable, .. } => *retriable,

            Self::Connect(_) => true,
            Self::Dns(_) => true,
            Self::ConnectTimeout => true,
            Self::RequestTimeout => true,
            Self::RedirectLoop => true,
            Self::Io(_) => true,
            Self::Unknown(_) => true,
        }
    }

    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_redirect() {
            Self::RedirectLoop
        } else if let Some(status) = err.status() {
            Self::Http {
                status,
                retriable: status.is_server_error(),
            }
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_request() {
            Self::Dns(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Io(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}
