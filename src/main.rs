use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::error;

use mindmap::{Config, ExportKind, Exporter};

/// Config picked up from the working directory when `--config` is absent
const LOCAL_CONFIG: &str = "mindmap.toml";

#[derive(Parser)]
#[command(name = "mindmap")]
#[command(about = "Export mind map markdown as outlines, documents and interactive pages")]
struct Cli {
    /// Input markdown file, or `-` for stdin
    input: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportKind::Outline)]
    format: ExportKind,

    /// Output file (defaults to the title-derived name next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rendered SVG to package when exporting as svg
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the inferred outline tree instead of exporting
    #[arg(long)]
    tree: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> mindmap::Result<()> {
    let markdown = mindmap::read_markdown(&cli.input)?;

    if cli.tree {
        print!("{}", mindmap::tree_to_text(&mindmap::markdown_to_tree(&markdown)));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::try_load(path)?,
        None => Config::load(Path::new(LOCAL_CONFIG)),
    };
    let exporter = Exporter::new(config);

    let export = match (cli.format, &cli.svg) {
        (ExportKind::Svg, Some(svg_path)) => {
            let svg = fs::read_to_string(svg_path).map_err(|source| mindmap::Error::Read {
                path: svg_path.clone(),
                source,
            })?;
            exporter.export_svg(&markdown, &svg)
        }
        (kind, _) => exporter.export(kind, &markdown)?,
    };

    // Determine output path
    let output = match cli.output {
        Some(path) => path,
        None => output_dir(&cli.input).join(&export.file_name),
    };

    export.write_as(&output)?;
    println!("Created {}", output.display());
    Ok(())
}

/// Directory exports land in when no output is given
fn output_dir(input: &Path) -> PathBuf {
    if input == Path::new("-") {
        return PathBuf::from(".");
    }
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
