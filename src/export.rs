use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle::{self, MarkmapRuntime};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::outline;
use crate::title::{self, Title};
use crate::word;

/// The downloadable forms of a mind map
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportKind {
    /// Standalone interactive mind map page
    Bundle,
    /// Collapsible outline page
    Outline,
    /// Vector image of the rendered mind map
    Svg,
    /// The markdown as given
    Markdown,
    /// The markdown as plain text
    Text,
    /// HTML document for word processors
    Word,
}

impl ExportKind {
    pub fn mime(&self) -> &'static str {
        match self {
            ExportKind::Bundle | ExportKind::Outline => "text/html",
            ExportKind::Svg => "image/svg+xml",
            ExportKind::Markdown => "text/markdown",
            ExportKind::Text => "text/plain",
            ExportKind::Word => "application/vnd.ms-word",
        }
    }

    /// Appended to the title stem to form the file name
    pub fn suffix(&self) -> &'static str {
        match self {
            ExportKind::Bundle => ".html",
            ExportKind::Outline => "_outline.html",
            ExportKind::Svg => ".svg",
            ExportKind::Markdown => ".md",
            ExportKind::Text => ".txt",
            ExportKind::Word => ".doc",
        }
    }

    pub fn file_name(&self, title: &Title) -> String {
        format!("{}{}", title.stem(), self.suffix())
    }

    pub fn all() -> &'static [ExportKind] {
        &[
            ExportKind::Bundle,
            ExportKind::Outline,
            ExportKind::Svg,
            ExportKind::Markdown,
            ExportKind::Text,
            ExportKind::Word,
        ]
    }
}

/// A rendered export, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub kind: ExportKind,
    pub file_name: String,
    pub content: String,
}

impl Export {
    pub fn mime(&self) -> &'static str {
        self.kind.mime()
    }

    /// Write into `dir` under the export's file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        self.write_as(&path)?;
        Ok(path)
    }

    pub fn write_as(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.content).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Renders exports with one configuration and runtime.
#[derive(Debug, Clone)]
pub struct Exporter {
    config: Config,
    runtime: MarkmapRuntime,
}

impl Exporter {
    pub fn new(config: Config) -> Self {
        let runtime = MarkmapRuntime::from_config(&config.runtime);
        Self { config, runtime }
    }

    pub fn with_runtime(config: Config, runtime: MarkmapRuntime) -> Self {
        Self { config, runtime }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `markdown` as `kind`.
    ///
    /// Fails only for [`ExportKind::Svg`], which needs the rendered mind map;
    /// use [`Exporter::export_svg`] for that.
    pub fn export(&self, kind: ExportKind, markdown: &str) -> Result<Export> {
        let title = title::extract_title(markdown);
        let content = match kind {
            ExportKind::Bundle => {
                bundle::bundle_document(markdown, &title, &self.runtime, &self.config)
            }
            ExportKind::Outline => outline::outline_document(markdown, &title),
            ExportKind::Word => word::word_document(markdown, &title, &self.config),
            ExportKind::Markdown | ExportKind::Text => markdown.to_string(),
            ExportKind::Svg => return Err(Error::SvgNotRendered),
        };
        Ok(self.finish(kind, &title, content))
    }

    /// Package SVG produced by the mind map view under the document's title.
    pub fn export_svg(&self, markdown: &str, svg: &str) -> Export {
        let title = title::extract_title(markdown);
        self.finish(ExportKind::Svg, &title, svg.to_string())
    }

    fn finish(&self, kind: ExportKind, title: &Title, content: String) -> Export {
        let file_name = kind.file_name(title);
        debug!("Rendered {} ({} bytes)", file_name, content.len());
        Export {
            kind,
            file_name,
            content,
        }
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(Config::compiled_default())
    }
}
