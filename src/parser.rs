use crate::line::{LevelScale, LineKind, OutlineLine, OutlineNode};

/// Split a leading `---` delimited block from the rest of the document.
///
/// Returns `(front_matter_body, remainder)`, or `None` if the document does
/// not open with a closed block.
fn split_front_matter(markdown: &str) -> Option<(&str, &str)> {
    let rest = markdown.trim_start().strip_prefix("---")?;
    // The opening delimiter must sit alone on its line
    let (opening, rest) = rest.split_once('\n')?;
    if !opening.trim().is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Strip YAML front matter from the beginning of markdown content
pub fn strip_front_matter(markdown: &str) -> &str {
    match split_front_matter(markdown) {
        Some((_, remainder)) => remainder,
        None => markdown,
    }
}

/// The body of the leading front matter block, without its delimiters
pub fn front_matter(markdown: &str) -> Option<&str> {
    split_front_matter(markdown).map(|(body, _)| body)
}

/// Filter markdown down to heading and bullet lines, measured on `scale`.
///
/// Lines that are neither, and markers with nothing after them, are dropped.
pub fn parse(markdown: &str, scale: LevelScale) -> Vec<OutlineLine> {
    strip_front_matter(markdown)
        .lines()
        .filter_map(|raw| parse_line(raw, scale))
        .collect()
}

fn parse_line(raw: &str, scale: LevelScale) -> Option<OutlineLine> {
    let trimmed = raw.trim();

    let (kind, level, rest) = if trimmed.starts_with('#') {
        let rest = trimmed.trim_start_matches('#');
        let hashes = trimmed.len() - rest.len();
        (LineKind::Heading, scale.heading_level(hashes), rest)
    } else if trimmed.starts_with('-') {
        let rest = trimmed.trim_start_matches('-');
        (LineKind::Bullet, scale.bullet_level(indent_width(raw)), rest)
    } else {
        return None;
    };

    let content = rest.trim();
    if content.is_empty() {
        return None;
    }

    Some(OutlineLine {
        raw: raw.to_string(),
        kind,
        level,
        content: content.to_string(),
    })
}

/// Leading whitespace in columns; a tab is one full indentation unit
fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 2 } else { 1 })
        .sum()
}

/// Build the forest implied by line levels.
///
/// Each line becomes a child of the nearest preceding line with a lower
/// level, or a root when there is none.
pub fn build_tree(lines: &[OutlineLine]) -> Vec<OutlineNode> {
    let mut roots = Vec::new();
    // Open nodes; levels strictly increase from bottom to top
    let mut stack: Vec<OutlineNode> = Vec::new();

    for line in lines {
        while stack.last().is_some_and(|top| top.level >= line.level) {
            if let Some(node) = stack.pop() {
                attach(node, &mut stack, &mut roots);
            }
        }
        stack.push(OutlineNode {
            content: line.content.clone(),
            level: line.level,
            children: Vec::new(),
        });
    }

    while let Some(node) = stack.pop() {
        attach(node, &mut stack, &mut roots);
    }

    roots
}

fn attach(node: OutlineNode, stack: &mut [OutlineNode], roots: &mut Vec<OutlineNode>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\ntitle: My Plan\nmarkmap:\n  colorFreezeLevel: 2\n---\n# Root\n## Branch A\n- leaf 1\n- leaf 2\n## Branch B\n";

    fn levels(markdown: &str, scale: LevelScale) -> Vec<(String, usize)> {
        parse(markdown, scale)
            .into_iter()
            .map(|line| (line.content, line.level))
            .collect()
    }

    #[test]
    fn strips_front_matter() {
        assert_eq!(
            strip_front_matter(SAMPLE),
            "# Root\n## Branch A\n- leaf 1\n- leaf 2\n## Branch B\n"
        );
        assert_eq!(
            front_matter(SAMPLE),
            Some("title: My Plan\nmarkmap:\n  colorFreezeLevel: 2\n")
        );
    }

    #[test]
    fn unclosed_front_matter_is_kept() {
        let md = "---\ntitle: x\n# Root";
        assert_eq!(strip_front_matter(md), md);
        assert_eq!(front_matter(md), None);
    }

    #[test]
    fn horizontal_rule_is_not_front_matter() {
        let md = "----\n# Root\n---\n";
        assert_eq!(strip_front_matter(md), md);
    }

    #[test]
    fn front_matter_with_crlf() {
        let md = "---\r\ntitle: x\r\n---\r\n# Root\r\n";
        assert_eq!(strip_front_matter(md), "# Root\r\n");
        assert_eq!(levels(md, LevelScale::LIST), vec![("Root".to_string(), 1)]);
    }

    #[test]
    fn list_scale_levels() {
        assert_eq!(
            levels(SAMPLE, LevelScale::LIST),
            vec![
                ("Root".to_string(), 1),
                ("Branch A".to_string(), 2),
                ("leaf 1".to_string(), 3),
                ("leaf 2".to_string(), 3),
                ("Branch B".to_string(), 2),
            ]
        );
    }

    #[test]
    fn outline_scale_levels() {
        let md = "# A\n## B\n- c\n  - d\n    - e";
        assert_eq!(
            levels(md, LevelScale::OUTLINE),
            vec![
                ("A".to_string(), 0),
                ("B".to_string(), 1),
                ("c".to_string(), 2),
                ("d".to_string(), 3),
                ("e".to_string(), 4),
            ]
        );
    }

    #[test]
    fn odd_indentation_rounds_down() {
        let md = "- a\n   - b\n     - c";
        assert_eq!(
            levels(md, LevelScale::LIST),
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 4),
                ("c".to_string(), 5),
            ]
        );
    }

    #[test]
    fn tab_counts_as_one_unit() {
        assert_eq!(
            levels("\t- a\n\t\t- b", LevelScale::LIST),
            vec![("a".to_string(), 4), ("b".to_string(), 5)]
        );
    }

    #[test]
    fn drops_other_lines_and_empty_markers() {
        let md = "# Root\n\nplain paragraph\n-\n#\n---\n| a | b |\n- kept";
        let lines = parse(md, LevelScale::LIST);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, LineKind::Heading);
        assert_eq!(lines[1].kind, LineKind::Bullet);
        assert_eq!(lines[1].raw, "- kept");
    }

    #[test]
    fn inline_markup_is_opaque() {
        let lines = parse("- **bold** and `code` [link](x)", LevelScale::LIST);
        assert_eq!(lines[0].content, "**bold** and `code` [link](x)");
    }

    #[test]
    fn empty_and_front_matter_only_inputs() {
        assert!(parse("", LevelScale::LIST).is_empty());
        assert!(parse("---\ntitle: x\n---\n", LevelScale::OUTLINE).is_empty());
        assert!(build_tree(&[]).is_empty());
    }

    #[test]
    fn tree_follows_nearest_lower_level() {
        let tree = build_tree(&parse(SAMPLE, LevelScale::LIST));
        assert_eq!(tree.len(), 1);
        let root = &tree[0];
        assert_eq!(root.content, "Root");
        assert_eq!(root.count(), 5);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].content, "Branch A");
        assert_eq!(root.children[0].children.len(), 2);
        assert_eq!(root.children[0].children[1].content, "leaf 2");
        assert!(root.children[1].is_leaf());
    }

    #[test]
    fn tree_tolerates_jumps_and_missing_roots() {
        let md = "- orphan\n# A\n        - deep\n  - shallow\n# B";
        let tree = build_tree(&parse(md, LevelScale::LIST));
        let names: Vec<_> = tree.iter().map(|node| node.content.as_str()).collect();
        assert_eq!(names, ["orphan", "A", "B"]);
        // A jump of several levels still attaches directly to the nearest lower line
        let a = &tree[1];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].content, "deep");
        assert_eq!(a.children[1].content, "shallow");
    }
}
