use url::Url;

/// Text pulled out of one fetched page. Lives only for the duration of a
/// single request before being written to the raw-text store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub url: Url,
    pub full_text: String,
}
