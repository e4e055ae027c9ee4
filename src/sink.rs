use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::compose::GeneratedDocument;

/// Decides whether an existing output file may be replaced.
pub trait OverwritePolicy {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

/// A pre-resolved answer.
impl OverwritePolicy for bool {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(*self)
    }
}

/// Asks on stdin; only `y` confirms.
pub struct StdinPrompt;

impl OverwritePolicy for StdinPrompt {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        let input = prompt_line(&format!(
            "{} exists, do you want to override? (y/any) ",
            path.display()
        ))?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Declined,
}

/// Writes `document` to `path`. An existing file is only replaced when
/// `override_output` is set or `policy` confirms.
pub fn write_document(
    document: &GeneratedDocument,
    path: &Path,
    override_output: bool,
    policy: &mut dyn OverwritePolicy,
) -> Result<WriteOutcome> {
    if path.exists() && !override_output && !policy.confirm_overwrite(path)? {
        info!(path = %path.display(), "kept existing output");
        return Ok(WriteOutcome::Declined);
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, document.render())
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), lines = document.lines.len(), "wrote output");
    Ok(WriteOutcome::Written)
}

fn prompt_line(prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
