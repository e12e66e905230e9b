use std::fs;
use url::Url;

use crate::extractor::{extract, extract_page};
use crate::fetcher::types::{Charset, PageResponse};

#[test]
fn test_extract_blog_post() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/blog.html")
        .expect("Failed to read test fixture");

    let text = extract(&html);

    assert_eq!(
        text,
        "Building better software starts with understanding the problem you are solving. \
         Keep functions small. Name things clearly. Test the edges. \
         Ship early and iterate. \
         Copyright 2025"
    );
    // headings, list items, nav and script bodies are not paragraphs
    assert!(!text.contains("Key Principles"));
    assert!(!text.contains("Not a paragraph"));
    assert!(!text.contains("not a paragraph"));
    assert!(!text.contains("Home"));
}

#[test]
fn test_page_without_paragraphs_is_empty() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/empty.html")
        .expect("Failed to read test fixture");

    assert_eq!(extract(&html), "");
}

#[test]
fn test_empty_and_plain_text_input() {
    assert_eq!(extract(""), "");
    assert_eq!(extract("just some text, no markup"), "");
}

#[test]
fn test_paragraph_newlines_are_preserved() {
    let html = "<p>first line\nsecond line</p><p>next</p>";
    assert_eq!(extract(html), "first line\nsecond line next");
}

#[test]
fn test_empty_paragraphs_still_join() {
    let html = "<p>a</p><p></p><p>b</p>";
    assert_eq!(extract(html), "a  b");
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";

    // the div implicitly closes the open paragraph
    assert_eq!(extract(html), "Unclosed tags");
}

#[test]
fn test_unclosed_paragraphs_are_split() {
    assert_eq!(extract("<p>one<p>two<p>three"), "one two three");
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(extract("<p>Fish &amp; chips &lt;3</p>"), "Fish & chips <3");
}

#[test]
fn test_extract_page_uses_final_url() {
    let response = create_test_response(
        "<p>Hello world.</p>".to_string(),
        "https://example.com/after-redirect",
    );

    let page = extract_page(&response);

    assert_eq!(page.url.as_str(), "https://example.com/after-redirect");
    assert_eq!(page.full_text, "Hello world.");
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        body_utf8: html,
        charset: Charset::Utf8,
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract(&html);
        }

        #[test]
        fn test_extract_page_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/[a-z]*"
        ) {
            let response = create_test_response(html, &url);
            let page = extract_page(&response);
            prop_assert_eq!(page.url.as_str(), url.as_str());
        }
    }
}
