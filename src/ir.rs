use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

/// A primitive value carried by a descriptor as a default or a choice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Str(String),
}

impl Literal {
    /// Type token for the value's kind.
    pub fn kind_token(&self) -> &'static str {
        match self {
            Literal::Bool(_) => "bool",
            Literal::Int(_) | Literal::UInt(_) => "int",
            Literal::Float(_) => "float",
            Literal::Str(_) => "str",
        }
    }

    /// Source literal for embedding in generated code.
    pub fn to_source(&self) -> String {
        match self {
            Literal::Str(value) => quote(value),
            Literal::Float(value) if !value.is_finite() => format!("float(\"{self}\")"),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::Int(value) => write!(f, "{value}"),
            Literal::UInt(value) => write!(f, "{value}"),
            Literal::Float(value) if value.is_nan() => f.write_str("nan"),
            Literal::Float(value) if value.is_infinite() => {
                f.write_str(if *value > 0.0 { "inf" } else { "-inf" })
            }
            Literal::Float(value) if value.fract() == 0.0 => write!(f, "{value:.1}"),
            Literal::Float(value) => write!(f, "{value}"),
            Literal::Str(value) => f.write_str(value),
        }
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", escape_string(value))
}

/// Escapes text for a double-quoted string literal on a single line.
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// One CLI argument as exposed by the source parser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArgumentDescriptor {
    pub dest: String,
    #[serde(default)]
    pub option_strings: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "type")]
    pub arg_type: Option<String>,
    #[serde(default)]
    pub default: Option<Literal>,
    #[serde(default)]
    pub choices: Option<Vec<Literal>>,
    #[serde(default)]
    pub help: Option<String>,
}

impl ArgumentDescriptor {
    pub fn choices(&self) -> Option<&[Literal]> {
        self.choices
            .as_deref()
            .filter(|choices| !choices.is_empty())
    }
}

/// Descriptor document read from disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArgSpec {
    Parser {
        #[serde(default)]
        prog: Option<String>,
        arguments: Vec<ArgumentDescriptor>,
    },
    Arguments(Vec<ArgumentDescriptor>),
}

impl ArgSpec {
    pub fn prog(&self) -> Option<&str> {
        match self {
            ArgSpec::Parser { prog, .. } => prog.as_deref(),
            ArgSpec::Arguments(_) => None,
        }
    }

    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        match self {
            ArgSpec::Parser { arguments, .. } => arguments,
            ArgSpec::Arguments(arguments) => arguments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportKey {
    Enum,
    Path,
    Typer,
}

impl ImportKey {
    pub fn line(self) -> &'static str {
        match self {
            ImportKey::Enum => "from enum import Enum",
            ImportKey::Path => "from pathlib import Path",
            ImportKey::Typer => "import typer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumBlock {
    pub name: String,
    pub lines: Vec<String>,
}

/// Per-run state shared by the pipeline stages.
#[derive(Debug, Default)]
pub struct GenerationContext {
    pub imports: BTreeSet<ImportKey>,
    pub enum_blocks: Vec<EnumBlock>,
    pub declaration_lines: Vec<String>,
    pub warnings: Vec<Warning>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    UnknownType,
    DefaultNotInChoices,
}
