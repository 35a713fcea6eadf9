//! Retrieval of artifact file contents
//!
//! Every file is addressed as `{location}/{artifact}/{file}`. The location is
//! either an HTTP(S) base URL or a local directory laid out the same way,
//! which is handy for offline mirrors and for tests.

mod dir;
mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use crate::error::Result;

/// Where artifact files come from
pub trait ContentSource {
    /// Fetch one file of one artifact. Failures are per file; callers decide
    /// whether to carry on with sibling files.
    fn fetch(&self, artifact: &str, file: &str) -> Result<String>;

    /// Human-readable location, for logs and summaries
    fn location(&self) -> String;
}

/// Pick a source implementation for a configured location
pub fn from_location(location: &str) -> Box<dyn ContentSource> {
    if is_remote(location) {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(DirSource::new(location))
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
