use crate::html;
use crate::line::{LevelScale, OutlineLine};
use crate::parser;

/// Convert markdown to a nested `<ul>` fragment.
///
/// Level is absolute nesting depth: a jump of N levels opens N lists, a drop
/// of N levels closes N lists.
pub fn markdown_to_list(markdown: &str) -> String {
    lines_to_list(&parser::parse(markdown, LevelScale::LIST))
}

fn lines_to_list(lines: &[OutlineLine]) -> String {
    let mut out = String::new();
    let mut last_level = 0;

    for line in lines {
        if line.level > last_level {
            for _ in last_level..line.level {
                out.push_str("<ul>");
            }
        } else {
            for _ in line.level..last_level {
                out.push_str("</ul>");
            }
        }

        out.push_str("<li>");
        html::escape_into(&line.content, &mut out);
        out.push_str("</li>");
        last_level = line.level;
    }

    // One list is open per level reached
    for _ in 0..last_level {
        out.push_str("</ul>");
    }

    out
}
