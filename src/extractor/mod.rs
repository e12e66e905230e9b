pub mod model;

#[cfg(test)]
mod tests;

pub use model::ExtractedPage;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::fetcher::types::PageResponse;

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("Failed to compile paragraph selector"));

/// Concatenate the text of every `<p>` element in document order, separated by
/// a single space.
///
/// Parsing is html5ever's error-recovering tree builder, so malformed markup
/// still yields a best-effort result. A page without paragraphs yields `""`.
pub fn extract(markup: &str) -> String {
    let document = Html::parse_document(markup);

    document
        .select(&PARAGRAPH_SELECTOR)
        .map(|paragraph| paragraph.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the readable text of a fetched page.
pub fn extract_page(resp: &PageResponse) -> ExtractedPage {
    ExtractedPage {
        url: resp.url_final.clone(),
        full_text: extract(&resp.body_utf8),
    }
}
