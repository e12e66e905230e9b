use crate::fetcher::{decode::decode_response, errors::FetchError, types::PageResponse};
use async_trait::async_trait;
use bytes::BytesMut;
use reqwest::{Client, ClientBuilder, Response, header};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

pub const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB

/// Desktop browser identity; plenty of blogs refuse obvious bot agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 10;

/// Retrieves a page over the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError>;
}

/// `reqwest`-backed fetcher. Cheap to clone; the underlying client pools
/// connections across requests.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests are bounded by `timeout` end to end.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
        }

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                retriable: status.is_server_error(),
            });
        }

        // only used to pick a charset; any 2xx body goes on to extraction
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = read_capped(response).await?;

        debug!(%status, %final_url, bytes = body.len(), "page fetched");

        Ok(decode_response(final_url, &body, &content_type))
    }
}

/// Stream the body, giving up as soon as it passes [`MAX_BODY_SIZE`].
/// Content-Length may be absent or describe the compressed size, so the
/// decoded bytes are counted as they arrive.
async fn read_capped(mut response: Response) -> Result<BytesMut, FetchError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(FetchError::from_reqwest_error)?
    {
        let received = (body.len() + chunk.len()) as u64;
        if received > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(received));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}
