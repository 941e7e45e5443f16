use std::sync::LazyLock;

use regex::Regex;

use crate::config::{Config, RuntimeConfig};
use crate::html;
use crate::title::Title;

static SCRIPT_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</(script)").unwrap());

/// Handle to the mind map runtime an interactive bundle loads.
///
/// Obtained once (usually from config) and passed to every bundle render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkmapRuntime {
    transformer: String,
    view: String,
}

impl MarkmapRuntime {
    /// `transformer` and `view` are ES module URLs exporting `Transformer`
    /// and `Markmap` respectively.
    pub fn new(transformer: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            transformer: transformer.into(),
            view: view.into(),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.transformer.clone(), config.view.clone())
    }

    pub fn transformer(&self) -> &str {
        &self.transformer
    }

    pub fn view(&self) -> &str {
        &self.view
    }
}

impl Default for MarkmapRuntime {
    fn default() -> Self {
        Self::from_config(&RuntimeConfig::default())
    }
}

/// Neutralize `</script` and `<!--` so embedded text can neither end its
/// script element nor push the parser into the double-escaped state
pub fn escape_script_content(text: &str) -> String {
    SCRIPT_CLOSE_RE
        .replace_all(text, r"<\/${1}")
        .replace("<!--", r"<\!--")
}

/// Quote `text` as a JavaScript string literal safe inside a script element
fn js_string(text: &str) -> String {
    serde_json::Value::from(text)
        .to_string()
        .replace('<', "\\u003c")
}

/// Standalone interactive mind map page.
///
/// The markdown is embedded verbatim and transformed in the browser; no
/// structure is inferred here.
pub fn bundle_document(
    markdown: &str,
    title: &Title,
    runtime: &MarkmapRuntime,
    config: &Config,
) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{heading}</title>
  <style>
    body, html, #mindmap {{ width: 100%; height: 100%; margin: 0; padding: 0; overflow: hidden; }}
    @media print {{
      @page {{ size: {page_size}; }}
    }}
  </style>
</head>
<body>
  <svg id="mindmap"></svg>
  <script type="text/template" id="markmap-source">{source}</script>
  <script type="module">
    import {{ Transformer }} from {transformer};
    import {{ Markmap }} from {view};
    const source = document.getElementById("markmap-source").textContent;
    const {{ root }} = new Transformer().transform(source);
    Markmap.create("#mindmap", null, root);
  </script>
</body>
</html>
"##,
        heading = html::escape(&title.heading()),
        page_size = config.page.size,
        source = escape_script_content(markdown),
        transformer = js_string(runtime.transformer()),
        view = js_string(runtime.view()),
    )
}
