//! tabby-demo: print a sample inventory table.
//!
//! ```text
//! tabby-demo                      # ASCII grid
//! tabby-demo --border rounded     # box-drawing grid
//! tabby-demo --format csv         # CSV on stdout
//! tabby-demo --format json --pretty
//! RUST_LOG=tabby=debug tabby-demo # show cells that fell back to empty
//! ```

mod inventory;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tabby::{BorderStyle, CsvRenderer, GridRenderer, JsonRenderer, OutputFormat, Render, Table};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tabby-demo", version, about = "Print a sample inventory table")]
struct Args {
    /// Output format: grid, csv or json
    #[arg(short, long, default_value = "grid")]
    format: OutputFormat,

    /// Grid border: none, ascii, light, heavy, double or rounded
    #[arg(short, long, default_value = "ascii")]
    border: BorderStyle,

    /// Upper-case header and footer in grid output
    #[arg(long)]
    uppercase: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Show the supplier as one column instead of inlining its fields
    #[arg(long)]
    no_inline: bool,

    /// Do not apply the warehouse formatter
    #[arg(long)]
    no_specialize: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn renderer(args: &Args) -> Box<dyn Render> {
    match args.format {
        OutputFormat::Grid => Box::new(
            GridRenderer::new()
                .border(args.border)
                .uppercase(args.uppercase),
        ),
        OutputFormat::Csv => Box::new(CsvRenderer),
        OutputFormat::Json => Box::new(JsonRenderer::new().pretty(args.pretty)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);
    debug!(?args, "starting");

    let data = inventory::sample();
    let config = inventory::config(!args.no_inline, !args.no_specialize);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Table::new(&data)
        .config(config)
        .render_to(&mut out, renderer(&args).as_ref())
        .with_context(|| format!("failed to print inventory as {}", args.format))?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
