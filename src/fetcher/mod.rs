pub mod client;
pub mod decode;
pub mod errors;
pub mod types;

#[cfg(test)]
pub use client::MockPageFetcher;
pub use client::{HttpFetcher, PageFetcher, USER_AGENT};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
