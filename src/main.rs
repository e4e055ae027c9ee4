use argparse2typer::cli::Cli;
use argparse2typer::run;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
