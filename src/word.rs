use crate::config::Config;
use crate::html;
use crate::list;
use crate::title::Title;

/// Build an HTML document that word processors open as a `.doc`.
///
/// The body is the nested list fragment under a title banner.
pub fn word_document(markdown: &str, title: &Title, config: &Config) -> String {
    let heading = html::escape(&title.heading());
    format!(
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:w="urn:schemas-microsoft-com:office:word" xmlns="http://www.w3.org/TR/REC-html40">
<head>
  <meta charset="utf-8">
  <title>{heading}</title>
  <style>
    @page {{
      size: {page_size};
      margin: {page_margin};
    }}
    body {{
      font-family: {font_family};
      font-size: {font_size};
    }}
    h1 {{
      color: #333;
    }}
    ul {{
      list-style-type: disc;
      margin-left: 20px;
    }}
    ul ul {{
      list-style-type: circle;
    }}
    ul ul ul {{
      list-style-type: square;
    }}
  </style>
</head>
<body>
  <h1>{heading}</h1>
  {body}
</body>
</html>
"#,
        heading = heading,
        page_size = config.page.size,
        page_margin = config.page.margin,
        font_family = config.font.family,
        font_size = config.font.size,
        body = list::markdown_to_list(markdown),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MD: &str = "---\ntitle: My Plan\n---\n# Root\n## Branch A\n- leaf 1\n## Branch B";

    #[test]
    fn wraps_nested_list() {
        let doc = word_document(MD, &Title::new("My Plan"), &Config::default());
        assert!(doc.starts_with("<html xmlns:o=\"urn:schemas-microsoft-com:office:office\""));
        assert!(doc.contains("<title>My Plan</title>"));
        assert!(doc.contains("<h1>My Plan</h1>"));
        assert!(doc.contains(
            "<ul><li>Root</li><ul><li>Branch A</li><ul><li>leaf 1</li></ul><li>Branch B</li></ul></ul>"
        ));
    }

    #[test]
    fn page_and_font_from_config() {
        let mut config = Config::default();
        config.page.size = "Letter portrait".to_string();
        config.font.family = "Georgia, serif".to_string();

        let doc = word_document(MD, &Title::default(), &config);
        assert!(doc.contains("size: Letter portrait;"));
        assert!(doc.contains("margin: 2cm;"));
        assert!(doc.contains("font-family: Georgia, serif;"));
        assert!(doc.contains("<h1>mind map</h1>"));
    }

    #[test]
    fn empty_markdown_still_produces_document() {
        let doc = word_document("", &Title::default(), &Config::default());
        assert!(doc.contains("<body>\n  <h1>mind map</h1>\n  \n</body>"));
    }
}
