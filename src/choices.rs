use std::collections::BTreeSet;

use tracing::debug;

use crate::diagnostics::warning;
use crate::error::GenerateError;
use crate::ir::{EnumBlock, GenerationContext, ImportKey, Literal, WarningKind};
use crate::naming::{lower_camel_case, number_identifier};

pub const ENUM_SUFFIX: &str = "Enum";

/// Enumeration synthesized for one choice-constrained argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumBinding {
    pub type_name: String,
    /// `<TypeName>.<member>` reference for the default, if there is one.
    pub default: Option<String>,
}

/// Synthesizes the enumeration type for `choices` and records it in `context`.
pub fn enumerate_choices(
    choices: &[Literal],
    name: &str,
    default: Option<&Literal>,
    context: &mut GenerationContext,
) -> Result<EnumBinding, GenerateError> {
    let type_name = enum_type_name(name);

    let mut members = BTreeSet::new();
    let mut lines = vec![format!("class {type_name}(str, Enum):")];
    for choice in choices {
        let member = member_name(choice).ok_or_else(|| unspellable(&type_name, choice))?;
        let value = match as_integer(choice) {
            Some((negative, digits)) => format!("{}{digits}", if negative { "-" } else { "" }),
            None => format!("\"{choice}\""),
        };
        if !members.insert(member.clone()) {
            return Err(GenerateError::DuplicateEnumMember {
                enum_name: type_name,
                member,
            });
        }
        lines.push(format!("\t{member} = {value}"));
    }

    let default = match default {
        Some(value) => {
            let member = member_name(value).ok_or_else(|| unspellable(&type_name, value))?;
            if !members.contains(&member) {
                context.warnings.push(warning(
                    WarningKind::DefaultNotInChoices,
                    format!("default `{value}` of `{name}` is not one of its choices"),
                ));
            }
            Some(format!("{type_name}.{member}"))
        }
        None => None,
    };

    debug!(enum_name = %type_name, members = members.len(), "synthesized enumeration");
    context.imports.insert(ImportKey::Enum);
    context.enum_blocks.push(EnumBlock {
        name: type_name.clone(),
        lines,
    });

    Ok(EnumBinding { type_name, default })
}

/// `retries` becomes `RetriesEnum`, `log_level` becomes `LogLevelEnum`.
pub fn enum_type_name(name: &str) -> String {
    let base = format!("{}{ENUM_SUFFIX}", lower_camel_case(name));
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => base,
    }
}

/// Member identifier used for a choice or a default.
///
/// `None` when a number is too large to spell.
pub fn member_name(value: &Literal) -> Option<String> {
    match as_integer(value) {
        Some((negative, digits)) => number_identifier(negative, &digits),
        None => Some(value.to_string()),
    }
}

fn unspellable(enum_name: &str, value: &Literal) -> GenerateError {
    GenerateError::UnspellableNumber {
        enum_name: enum_name.to_string(),
        value: value.to_string(),
    }
}

/// Integers and all-digit strings are spelled out as words. Returns the
/// sign and the digits without leading zeros.
fn as_integer(value: &Literal) -> Option<(bool, String)> {
    match value {
        Literal::Int(number) => Some((*number < 0, number.unsigned_abs().to_string())),
        Literal::UInt(number) => Some((false, number.to_string())),
        Literal::Str(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            let digits = text.trim_start_matches('0');
            Some((false, if digits.is_empty() { "0" } else { digits }.to_string()))
        }
        _ => None,
    }
}
