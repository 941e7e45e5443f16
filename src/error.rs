//! Errors raised at the edges of the exporter.
//!
//! Rendering itself never fails; these cover reading sources, loading
//! configuration and writing exports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The source produced nothing but whitespace
    #[error("no content in {}", path.display())]
    EmptySource { path: PathBuf },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// SVG comes from the rendered mind map, not from the markdown
    #[error("SVG export needs the rendered mind map")]
    SvgNotRendered,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::EmptySource {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(err.to_string(), "no content in notes.txt");

        let err = Error::Read {
            path: PathBuf::from("in.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read in.md: gone");
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
