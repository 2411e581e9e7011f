use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fracdraw_cli::config::{self, ConfigMerger};
use fracdraw_cli::explain;
use fracdraw_core::pipeline::{ToolError, run_draw_with_defaults};
use fracdraw_core::settings::DrawSettings;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Message shown on stderr when the request file is rejected.
const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// Shown (with exit code 1) when the bare form gets no file or more than one.
const USAGE_LINE: &str = "Usage: fracdraw <FILE>";

#[derive(Debug, Parser)]
#[command(
    name = "fracdraw",
    version,
    about = "Draws Sierpinski and Vicsek fractals as ASCII art.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Request file; `fracdraw <FILE>` is the same as `fracdraw draw <FILE>`.
    #[arg(value_name = "FILE")]
    files: Vec<Utf8PathBuf>,

    #[command(flatten)]
    draw: DrawOptions,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render every request in a request file, last request first.
    Draw(DrawArgs),
    /// List the patterns that can be drawn.
    ListPatterns(ListPatternsArgs),
    /// Explain a pattern: its stencil, base tile and growth per depth.
    Explain(ExplainArgs),
}

#[derive(Debug, Parser)]
struct DrawArgs {
    /// Request file: one `kind,depth` pair per line.
    file: Utf8PathBuf,

    #[command(flatten)]
    options: DrawOptions,
}

#[derive(Debug, Clone, Default, clap::Args)]
struct DrawOptions {
    /// Character used for drawn cells (overrides the config file).
    #[arg(long)]
    glyph: Option<String>,

    /// Write the output to this file instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Accept request files that don't end in `.csv`.
    #[arg(long, default_value_t = false)]
    allow_any_extension: bool,

    /// Config file (default: ./fracdraw.toml if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Pattern key or index to explain (e.g., "carpet", "2").
    pattern: String,
}

#[derive(Debug, Parser)]
struct ListPatternsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        let tool = e.downcast_ref::<ToolError>();
        if tool.is_some_and(ToolError::is_invalid_input) {
            eprintln!("{INVALID_INPUT_MESSAGE}");
            error!("{:#}", e);
        } else {
            eprintln!("{e:#}");
            debug!("{:?}", e);
        }
        return ExitCode::from(tool.map_or(1, ToolError::exit_code));
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Some(Command::Draw(args)) => cmd_draw(args),
        Some(Command::ListPatterns(args)) => cmd_list_patterns(args),
        Some(Command::Explain(args)) => cmd_explain(args),
        None => {
            let [file] = <[Utf8PathBuf; 1]>::try_from(cli.files)
                .map_err(|_| anyhow::anyhow!("{USAGE_LINE}"))?;
            cmd_draw(DrawArgs {
                file,
                options: cli.draw,
            })
        }
    }
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let DrawArgs { file, options } = args;
    let file_config = match &options.config {
        Some(path) => config::load_config(path)?,
        None => {
            let cwd = std::env::current_dir().context("get current directory")?;
            let cwd = Utf8PathBuf::from_path_buf(cwd)
                .map_err(|p| anyhow::anyhow!("current directory is not UTF-8: {}", p.display()))?;
            config::load_or_default(&cwd)?
        }
    };

    let merged = ConfigMerger::new(file_config).merge_draw_args(
        options.glyph.as_deref(),
        options.out.as_deref(),
        options.allow_any_extension,
    )?;
    debug!(?merged, "merged draw settings");

    let settings = DrawSettings {
        input: file,
        require_csv_extension: merged.require_csv_extension,
        drawn_glyph: merged.drawn_glyph,
        output: merged.output,
    };

    let outcome = run_draw_with_defaults(&settings)?;
    debug!(drawn = outcome.drawn.len(), "draw finished");
    Ok(())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    use explain::{base_tile, format_stencil, growth_table, list_pattern_keys, lookup_pattern};

    let Some(pattern) = lookup_pattern(&args.pattern) else {
        let available = list_pattern_keys().join(", ");
        anyhow::bail!(
            "Unknown pattern: '{}'\n\nAvailable patterns: {}",
            args.pattern,
            available
        );
    };
    let def = pattern.definition();

    println!("================================================================================");
    println!("PATTERN: {}", pattern.kind.title());
    println!("================================================================================");
    println!();
    println!("Key:        {}", pattern.kind.key());
    println!("Index:      {}", pattern.kind.index());
    println!("Base size:  {}", def.base_size());
    println!();

    println!("DESCRIPTION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", pattern.description);
    println!();

    println!("STENCIL");
    println!("--------------------------------------------------------------------------------");
    println!("Active sub-tiles (row,col): {}", format_stencil(def));
    println!();
    println!("{}", base_tile(def)?);
    println!();

    println!("GROWTH");
    println!("--------------------------------------------------------------------------------");
    println!("  {:<6} {:<6} DRAWN CELLS", "DEPTH", "SIDE");
    for row in growth_table(def) {
        println!("  {:<6} {:<6} {}", row.depth, row.side, row.drawn_cells);
    }
    println!();

    Ok(())
}

fn cmd_list_patterns(args: ListPatternsArgs) -> anyhow::Result<()> {
    use explain::PATTERN_REGISTRY;

    match args.format {
        OutputFormat::Text => {
            println!("Available patterns:\n");
            println!(
                "  {:<10} {:<6} {:<5} {:<8} TITLE",
                "KEY", "INDEX", "BASE", "STENCIL"
            );
            println!(
                "  {:<10} {:<6} {:<5} {:<8} -----",
                "---", "-----", "----", "-------"
            );
            for p in PATTERN_REGISTRY {
                let def = p.definition();
                println!(
                    "  {:<10} {:<6} {:<5} {:<8} {}",
                    p.kind.key(),
                    p.kind.index(),
                    def.base_size(),
                    def.stencil().len(),
                    p.kind.title()
                );
            }
            println!();
            println!("Use 'fracdraw explain <key>' for details.");
        }
        OutputFormat::Json => {
            let patterns: Vec<_> = PATTERN_REGISTRY
                .iter()
                .map(|p| {
                    let def = p.definition();
                    serde_json::json!({
                        "key": p.kind.key(),
                        "index": p.kind.index(),
                        "title": p.kind.title(),
                        "base_size": def.base_size(),
                        "stencil": def.stencil(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&patterns)?);
        }
    }
    Ok(())
}
