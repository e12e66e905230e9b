pub mod errors;
pub mod raw_text;
pub mod results;

pub use errors::StoreError;
#[cfg(test)]
pub use raw_text::MockRawTextStore;
pub use raw_text::{RawRecord, RawTextRepository, RawTextStore};
#[cfg(test)]
pub use results::MockResultStore;
pub use results::{ResultRecord, ResultRepository, ResultStore};
