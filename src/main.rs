//! docdown — render indexed package documentation as markdown.
//!
//! Reads the package description produced by a source indexer (JSON) and
//! prints a markdown document:
//!
//! - **directory**: `docdown path/to/pkg` reads `package.json`, `.import`
//!   and the optional `.docdown.markdown` template
//! - **file**: `docdown widget.json`
//! - **stdin**: `indexer ./pkg | docdown -`

mod model;
mod parser;
mod render;
mod style;
mod template;

use anyhow::{Context, Result};
use clap::Parser;
use render::heading::HeadingPattern;
use std::path::{Path, PathBuf};
use style::{Flavor, Style};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "docdown",
    version,
    about = "Generate markdown documentation from indexed package sources"
)]
struct Cli {
    /// Package directory, indexer JSON file, or - for stdin
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Emit standard markdown (indented code) rather than fenced code blocks
    #[arg(long)]
    plain: bool,

    /// Heading detection method: 1Word, TitleCase, Title, TitleCase1Word, ""
    #[arg(long, default_value = "TitleCase1Word")]
    heading: HeadingPattern,

    /// Append the docdown signature to the end of the documentation
    #[arg(long)]
    signature: bool,

    /// Leave out the import line under the title
    #[arg(long)]
    no_import: bool,

    /// Language tag for fenced code blocks
    #[arg(long, default_value = "go")]
    language: String,

    /// Template file (default: .docdown.markdown in the package directory)
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn style(&self) -> Style {
        Style {
            include_import: !self.no_import,
            heading: self.heading,
            flavor: if self.plain {
                Flavor::Plain
            } else {
                Flavor::Flavored
            },
            language: self.language.clone(),
            include_signature: self.signature,
            ..Style::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let style = cli.style();
    let document = parser::load(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;
    if document.is_empty() {
        warn!(package = %document.name, "no exported identifiers");
    }

    let template_path = template::locate(cli.template.as_deref(), &package_dir(&cli.path));
    let output = match template_path {
        Some(path) => {
            debug!(template = %path.display(), "rendering through template");
            let template = template::load(&path)?;
            template.execute(
                || render::emit(&document, &style),
                || render::emit_signature(&style),
            )
        }
        None => render::render(&document, &style),
    };

    println!("{}", render::trim(&output));
    Ok(())
}

/// Directory searched for the default template.
fn package_dir(path: &Path) -> PathBuf {
    if path == Path::new("-") {
        PathBuf::from(".")
    } else if path.is_dir() {
        path.to_path_buf()
    } else {
        parser::containing_dir(path)
    }
}

/// Log to stderr so stdout stays pure markdown.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
