use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generate::DEFAULT_TAB_WIDTH;

#[derive(Parser)]
#[command(name = "argparse2typer")]
#[command(about = "Port an argparse argument spec to a Typer command", long_about = None)]
pub struct Cli {
    /// Log pipeline details to stderr.
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON or YAML file describing the parser's arguments.
    #[arg(long)]
    pub spec: PathBuf,
    /// File to write; prints to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Replace an existing output file without asking.
    #[arg(long = "override")]
    pub override_output: bool,
    /// Add `import typer` to the header.
    #[arg(long)]
    pub import_typer: bool,
    /// Emit `app = typer.Typer()` before the command.
    #[arg(long)]
    pub create_app: bool,
    /// Emit `pass` instead of capturing the arguments into `args`.
    #[arg(long)]
    pub no_get_args: bool,
    /// Spaces per indentation level.
    #[arg(long, default_value_t = DEFAULT_TAB_WIDTH)]
    pub tab_width: usize,
    /// Additional destinations to leave out (`help` is always left out).
    #[arg(long)]
    pub ignore: Vec<String>,
}
