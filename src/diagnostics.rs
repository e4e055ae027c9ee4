use std::path::Path;

use crate::generate::Conversion;
use crate::ir::{Warning, WarningKind};
use crate::sink::WriteOutcome;

pub fn warning(kind: WarningKind, message: impl Into<String>) -> Warning {
    Warning {
        kind,
        message: message.into(),
    }
}

pub fn summarize(
    conversion: &Conversion,
    out: Option<&Path>,
    outcome: Option<WriteOutcome>,
) -> String {
    let mut output = String::new();
    match (out, outcome) {
        (Some(out), Some(WriteOutcome::Declined)) => {
            output.push_str(&format!("Output: {} (kept existing file)\n", out.display()));
        }
        (Some(out), _) => output.push_str(&format!("Output: {}\n", out.display())),
        (None, _) => output.push_str("Output: stdout\n"),
    }
    output.push_str(&format!("Arguments converted: {}\n", conversion.converted));
    if !conversion.skipped.is_empty() {
        output.push_str(&format!(
            "Arguments skipped: {}\n",
            conversion.skipped.join(", ")
        ));
    }

    output.push_str("Enums:\n");
    if conversion.enums.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for name in &conversion.enums {
            output.push_str(&format!("  - {name}\n"));
        }
    }

    output.push_str(&format!("Warnings: {}\n", conversion.warnings.len()));
    for warning in conversion.warnings.iter().take(5) {
        output.push_str(&format!(
            "  - [{}] {}\n",
            format_kind(warning.kind),
            warning.message
        ));
    }

    output.trim_end().to_string()
}

fn format_kind(kind: WarningKind) -> &'static str {
    match kind {
        WarningKind::UnknownType => "unknown_type",
        WarningKind::DefaultNotInChoices => "default_not_in_choices",
    }
}
