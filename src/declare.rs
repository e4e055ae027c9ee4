use tracing::debug;

use crate::choices::enumerate_choices;
use crate::diagnostics::warning;
use crate::error::GenerateError;
use crate::infer::{UNKNOWN_TYPE, infer_type};
use crate::ir::{ArgumentDescriptor, GenerationContext, WarningKind, escape_string};
use crate::naming::parameter_name;
use crate::options::derive_option_flags;

/// Default for a required argument that has none.
pub const REQUIRED_MARKER: &str = "...";
/// Default for an optional argument that has none.
pub const NO_DEFAULT: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStyle {
    Argument,
    Option,
}

impl CallStyle {
    pub fn for_descriptor(descriptor: &ArgumentDescriptor) -> Self {
        if descriptor.required {
            CallStyle::Argument
        } else {
            CallStyle::Option
        }
    }

    pub fn constructor(self) -> &'static str {
        match self {
            CallStyle::Argument => "typer.Argument",
            CallStyle::Option => "typer.Option",
        }
    }
}

/// Appends the declaration line for `descriptor` to `context`.
pub fn assemble_declaration(
    descriptor: &ArgumentDescriptor,
    context: &mut GenerationContext,
) -> Result<(), GenerateError> {
    let name = parameter_name(&descriptor.dest);
    let style = CallStyle::for_descriptor(descriptor);

    let (type_token, default) = match descriptor.choices() {
        Some(choices) => {
            let binding =
                enumerate_choices(choices, &name, descriptor.default.as_ref(), context)?;
            let default = binding
                .default
                .unwrap_or_else(|| missing_default(style).to_string());
            (binding.type_name, default)
        }
        None => {
            let type_token = infer_type(
                descriptor.arg_type.as_deref(),
                descriptor.default.as_ref(),
                &name,
                context,
            );
            if type_token == UNKNOWN_TYPE {
                context.warnings.push(warning(
                    WarningKind::UnknownType,
                    format!("`{name}` has neither a type nor a default"),
                ));
            }
            let default = descriptor
                .default
                .as_ref()
                .map(|value| value.to_source())
                .unwrap_or_else(|| missing_default(style).to_string());
            (type_token, default)
        }
    };

    let flags = derive_option_flags(&descriptor.option_strings, &name);
    let help = help_fragment(descriptor.help.as_deref());
    let line = format!(
        "\t{name}: {type_token} = {constructor}({default}{flags}{help}),",
        constructor = style.constructor()
    );

    debug!(dest = %descriptor.dest, %line, "assembled declaration");
    context.declaration_lines.push(line);
    Ok(())
}

fn missing_default(style: CallStyle) -> &'static str {
    match style {
        CallStyle::Argument => REQUIRED_MARKER,
        CallStyle::Option => NO_DEFAULT,
    }
}

fn help_fragment(help: Option<&str>) -> String {
    match help {
        Some(help) if !help.is_empty() => {
            format!(", help=\"{}\"", escape_string(&help.replace('"', "'")))
        }
        _ => String::new(),
    }
}
