use crate::fetcher::types::{Charset, PageResponse};
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// How far into the body we look for a `<meta>` charset declaration.
const META_SNIFF_BYTES: usize = 4096;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn decode_response(url_final: Url, body_bytes: &[u8], content_type: &str) -> PageResponse {
    let charset = detect_charset(content_type, body_bytes);
    let body_utf8 = decode_to_utf8(body_bytes, &charset);

    PageResponse {
        url_final,
        body_utf8,
        charset,
    }
}

/// Header charset, then `<meta charset>`, then `<meta http-equiv>`, then a
/// statistical guess.
fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    if let Some(encoding) = labelled_encoding(&CHARSET_REGEX, content_type) {
        return Charset::from_encoding(encoding);
    }

    let search_bytes = &body_bytes[..body_bytes.len().min(META_SNIFF_BYTES)];
    let search_str = String::from_utf8_lossy(search_bytes);

    for regex in [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX] {
        if let Some(encoding) = labelled_encoding(regex, &search_str) {
            return Charset::from_encoding(encoding);
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn labelled_encoding(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

/// Lossy decode; malformed sequences become U+FFFD rather than failing the
/// whole page.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> String {
    let encoding = charset.encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        debug!(
            encoding = encoding.name(),
            "body contained malformed sequences, replaced"
        );
    }

    decoded.into_owned()
}
