use crate::html;
use crate::line::{LevelScale, OutlineLine};
use crate::parser;
use crate::title::Title;

const OUTLINE_CSS: &str = r#"    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; color: #333; max-width: 800px; margin: 2rem auto; padding: 0 1rem; background-color: #fdfdfd; }
    h1 { color: #111; border-bottom: 1px solid #eee; padding-bottom: 0.5rem; }
    details { margin-left: 20px; border-left: 1px solid #e0e0e0; padding-left: 15px; margin-top: 5px; }
    summary { cursor: pointer; font-weight: 500; padding: 4px 8px; border-radius: 4px; list-style-position: inside; }
    summary:hover { background-color: #f0f0f0; }
    .leaf { margin-left: 20px; padding: 4px 8px; }"#;

/// Convert markdown to nested, pre-expanded `<details>` elements.
///
/// A line becomes an expandable container only when the next line is
/// deeper; everything else becomes a `<p class="leaf">`.
pub fn markdown_to_outline(markdown: &str) -> String {
    lines_to_outline(&parser::parse(markdown, LevelScale::OUTLINE))
}

fn lines_to_outline(lines: &[OutlineLine]) -> String {
    let mut out = String::new();
    // Levels of the open containers, strictly increasing
    let mut open: Vec<usize> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        while open.last().is_some_and(|&top| line.level <= top) {
            out.push_str("</details>");
            open.pop();
        }

        let has_children = lines.get(i + 1).is_some_and(|next| next.level > line.level);
        if has_children {
            out.push_str("<details open><summary>");
            html::escape_into(&line.content, &mut out);
            out.push_str("</summary>");
            open.push(line.level);
        } else {
            out.push_str("<p class=\"leaf\">");
            html::escape_into(&line.content, &mut out);
            out.push_str("</p>");
        }
    }

    for _ in open {
        out.push_str("</details>");
    }

    out
}

/// Standalone page wrapping the collapsible outline.
pub fn outline_document(markdown: &str, title: &Title) -> String {
    let heading = html::escape(&title.heading());
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Outline: {heading}</title>
  <style>
{css}
  </style>
</head>
<body>
  <h1>{heading}</h1>
  {body}
</body>
</html>
"#,
        heading = heading,
        css = OUTLINE_CSS,
        body = markdown_to_outline(markdown),
    )
}
