use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ir::ArgSpec;

/// Reads a descriptor document; `.yaml`/`.yml` files are YAML, anything else JSON.
pub fn load_spec(path: &Path) -> Result<ArgSpec> {
    if !path.is_file() {
        bail!("argument spec does not exist: {}", path.display());
    }

    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let extension = path.extension().and_then(|ext| ext.to_str());
    let spec = if extension.is_some_and(|ext| {
        ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    }) {
        serde_yaml_bw::from_str(&contents)
            .with_context(|| format!("invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    };

    Ok(spec)
}
