pub mod choices;
pub mod cli;
pub mod compose;
pub mod declare;
pub mod diagnostics;
pub mod error;
pub mod generate;
pub mod infer;
pub mod ir;
pub mod load;
pub mod logging;
pub mod naming;
pub mod options;
pub mod sink;

use anyhow::Result;
use cli::{Cli, Commands};

pub use generate::{Conversion, GenerateOptions, convert};

pub fn run(cli: Cli) -> Result<()> {
    logging::init_tracing(cli.verbose);
    match cli.command {
        Commands::Generate(args) => generate::generate(&args),
    }
}
