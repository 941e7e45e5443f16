use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Read generated markdown from a file, or from stdin when `path` is `-`.
///
/// A source with no non-whitespace content is an error.
pub fn read_markdown(path: &Path) -> Result<String> {
    let content = if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
    .map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content = content
        .strip_prefix('\u{feff}')
        .map(str::to_string)
        .unwrap_or(content);

    if content.trim().is_empty() {
        return Err(Error::EmptySource {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}
