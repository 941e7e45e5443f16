use std::sync::LazyLock;

use regex::Regex;

use crate::parser;

/// Identifier used when the front matter carries no usable title
pub const DEFAULT_TITLE: &str = "mind_map";

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]+").unwrap());

/// A sanitized document title.
///
/// Holds the single canonical value that both the download file name and the
/// visible heading are derived from, so the two never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Sanitize a raw title, falling back to [`DEFAULT_TITLE`] when nothing
    /// survives.
    pub fn new(raw: &str) -> Self {
        let kept = DISALLOWED_RE.replace_all(raw.trim(), "");
        let joined = SEPARATOR_RE.replace_all(&kept, "_");
        if joined.is_empty() {
            Self::default()
        } else {
            Self(joined.into_owned())
        }
    }

    /// File name stem, e.g. `My_Plan`
    pub fn stem(&self) -> &str {
        &self.0
    }

    /// Human readable form, e.g. `My Plan`
    pub fn heading(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl Default for Title {
    fn default() -> Self {
        Self(DEFAULT_TITLE.to_string())
    }
}

/// Read the `title:` field of the leading front matter block.
pub fn extract_title(markdown: &str) -> Title {
    let Some(body) = parser::front_matter(markdown) else {
        return Title::default();
    };

    body.lines()
        .find_map(|line| line.strip_prefix("title:"))
        .map(|value| Title::new(unquote(value.trim())))
        .unwrap_or_default()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
