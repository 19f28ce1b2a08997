//! gofuncs CLI - locate Go functions by byte offset

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use gofuncs_core::config;
use gofuncs_core::{parse_source, render_json, render_text, Func, FuncReport, OutputFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gofuncs")]
#[command(about = "Find the enclosing, next, or previous Go function at a byte offset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (overrides config file)
    #[arg(long, global = true)]
    format: Option<Format>,

    /// Attach doc comments to declarations (overrides config file)
    #[arg(long, global = true, overrides_with = "no_comments")]
    comments: bool,

    /// Ignore doc comments even if the config file enables them
    #[arg(long, global = true, overrides_with = "comments")]
    no_comments: bool,

    /// Path to config file (default: auto-discover next to the source file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every function in a file
    Funcs {
        /// Path to a Go source file
        file: PathBuf,

        /// Only list named functions and methods
        #[arg(long)]
        declarations: bool,
    },
    /// Show the innermost function enclosing an offset
    Enclosing {
        /// Path to a Go source file
        file: PathBuf,

        /// Byte offset into the file
        #[arg(long)]
        offset: usize,
    },
    /// Show the first declaration at or after an offset
    Next {
        /// Path to a Go source file
        file: PathBuf,

        /// Byte offset into the file
        #[arg(long)]
        offset: usize,
    },
    /// Show the nearest declaration before an offset
    Prev {
        /// Path to a Go source file
        file: PathBuf,

        /// Byte offset into the file
        #[arg(long)]
        offset: usize,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    /// Comment tracking forced by the command line, if any; the last flag wins
    fn comments_override(&self) -> Option<bool> {
        match (self.comments, self.no_comments) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GOFUNCS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let file = match &cli.command {
        Commands::Funcs { file, .. }
        | Commands::Enclosing { file, .. }
        | Commands::Next { file, .. }
        | Commands::Prev { file, .. } => file.clone(),
    };

    let project_dir = file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let resolved = config::load_and_resolve(project_dir, cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(config_path) = &resolved.config_path {
        tracing::info!(path = %config_path.display(), "using config");
    }

    // CLI flags override config file values
    let mut options = resolved.parser_options;
    if let Some(parse_comments) = cli.comments_override() {
        options.parse_comments = parse_comments;
    }
    let format = cli.format.map(OutputFormat::from).unwrap_or(resolved.format);

    let source = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read source file: {}", file.display()))?;
    tracing::debug!(file = %file.display(), bytes = source.len(), "loaded source");

    let funcs = parse_source(&source, &options)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let selected: Vec<&Func> = match cli.command {
        Commands::Funcs { declarations, .. } => funcs
            .iter()
            .filter(|f| !declarations || f.is_declaration())
            .collect(),
        Commands::Enclosing { offset, .. } => vec![funcs.enclosing_func(offset)?],
        Commands::Next { offset, .. } => vec![funcs.next_func(offset)?],
        Commands::Prev { offset, .. } => vec![funcs.prev_func(offset)?],
    };

    let file_label = file.display().to_string();
    let reports: Vec<FuncReport> = selected
        .into_iter()
        .map(|func| FuncReport::new(func, &file_label))
        .collect();

    match format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }

    Ok(())
}
