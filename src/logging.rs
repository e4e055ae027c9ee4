use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

const VERBOSE_DIRECTIVE: &str = "argparse2typer=debug";

/// Logs go to stderr so stdout carries only the generated module.
///
/// `RUST_LOG` sets the base filter; `verbose` adds debug output for this
/// crate on top of it.
pub fn init_tracing(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose && let Ok(directive) = VERBOSE_DIRECTIVE.parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}
