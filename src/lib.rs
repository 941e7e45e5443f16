mod bundle;
mod config;
mod error;
mod export;
mod html;
mod line;
mod list;
mod outline;
mod parser;
mod source;
mod title;
mod word;

pub use bundle::{MarkmapRuntime, bundle_document, escape_script_content};
pub use config::{Config, FontConfig, PageConfig, RuntimeConfig};
pub use error::{Error, Result};
pub use export::{Export, ExportKind, Exporter};
pub use line::{LevelScale, LineKind, OutlineLine, OutlineNode};
pub use list::markdown_to_list;
pub use outline::{markdown_to_outline, outline_document};
pub use parser::{build_tree, front_matter, strip_front_matter};
pub use source::read_markdown;
pub use title::{DEFAULT_TITLE, Title, extract_title};
pub use word::word_document;

/// Filter markdown into heading and bullet lines measured on `scale`.
pub fn parse(markdown: &str, scale: LevelScale) -> Vec<OutlineLine> {
    parser::parse(markdown, scale)
}

/// Parse markdown into the forest implied by nested-list levels.
pub fn markdown_to_tree(markdown: &str) -> Vec<OutlineNode> {
    build_tree(&parse(markdown, LevelScale::LIST))
}

/// Render a forest as indented plain text, two spaces per depth.
pub fn tree_to_text(nodes: &[OutlineNode]) -> String {
    let mut out = String::new();
    write_nodes(nodes, 0, &mut out);
    out
}

fn write_nodes(nodes: &[OutlineNode], depth: usize, out: &mut String) {
    for node in nodes {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.content);
        out.push('\n');
        write_nodes(&node.children, depth + 1, out);
    }
}
