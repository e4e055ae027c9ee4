use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::GenerateArgs;
use crate::compose::{ComposeOptions, GeneratedDocument, compose};
use crate::declare::assemble_declaration;
use crate::diagnostics::summarize;
use crate::error::GenerateError;
use crate::ir::{ArgumentDescriptor, GenerationContext, ImportKey, Warning};
use crate::load::load_spec;
use crate::sink::{StdinPrompt, write_document};

pub const DEFAULT_TAB_WIDTH: usize = 2;
pub const DEFAULT_IGNORE: [&str; 1] = ["help"];

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub import_typer: bool,
    pub create_app: bool,
    pub get_args: bool,
    pub tab_width: usize,
    /// Destinations that never produce a declaration.
    pub ignore: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            import_typer: false,
            create_app: false,
            get_args: true,
            tab_width: DEFAULT_TAB_WIDTH,
            ignore: DEFAULT_IGNORE.iter().map(|dest| dest.to_string()).collect(),
        }
    }
}

impl GenerateOptions {
    fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            create_app: self.create_app,
            get_args: self.get_args,
            tab_width: self.tab_width,
        }
    }
}

#[derive(Debug)]
pub struct Conversion {
    pub document: GeneratedDocument,
    pub warnings: Vec<Warning>,
    pub converted: usize,
    pub skipped: Vec<String>,
    pub enums: Vec<String>,
}

/// Converts descriptors, in order, into a Typer command module.
pub fn convert(
    arguments: &[ArgumentDescriptor],
    options: &GenerateOptions,
) -> Result<Conversion, GenerateError> {
    let mut context = GenerationContext::default();
    if options.import_typer {
        context.imports.insert(ImportKey::Typer);
    }

    for descriptor in arguments {
        if options.ignore.contains(&descriptor.dest) {
            context.skipped.push(descriptor.dest.clone());
            continue;
        }
        assemble_declaration(descriptor, &mut context)?;
    }

    let document = compose(&context, &options.compose_options());
    Ok(Conversion {
        document,
        converted: context.declaration_lines.len(),
        enums: context
            .enum_blocks
            .iter()
            .map(|block| block.name.clone())
            .collect(),
        warnings: context.warnings,
        skipped: context.skipped,
    })
}

pub fn generate(args: &GenerateArgs) -> Result<()> {
    let spec = load_spec(&args.spec)?;
    let options = GenerateOptions {
        import_typer: args.import_typer,
        create_app: args.create_app,
        get_args: !args.no_get_args,
        tab_width: args.tab_width,
        ignore: DEFAULT_IGNORE
            .iter()
            .map(|dest| dest.to_string())
            .chain(args.ignore.iter().cloned())
            .collect(),
    };

    let conversion = convert(spec.arguments(), &options)
        .with_context(|| format!("failed to convert {}", args.spec.display()))?;
    info!(
        prog = spec.prog().unwrap_or("-"),
        converted = conversion.converted,
        enums = conversion.enums.len(),
        "converted argument spec"
    );

    let outcome = match &args.out {
        Some(out) => Some(write_document(
            &conversion.document,
            out,
            args.override_output,
            &mut StdinPrompt,
        )?),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(conversion.document.render().as_bytes())?;
            stdout.flush()?;
            None
        }
    };

    eprintln!("{}", summarize(&conversion, args.out.as_deref(), outcome));

    Ok(())
}
