use tracing::debug;

use crate::ir::{GenerationContext, ImportKey, Literal};

pub const UNKNOWN_TYPE: &str = "<UNKNOWN>";
pub const PATH_TYPE: &str = "Path";

const PATH_HINTS: [&str; 2] = ["dir", "path"];

/// Resolves the type annotation for a parameter.
///
/// An explicit type wins over the default's kind. String parameters whose
/// name mentions `dir` or `path` become `Path`, which registers the path
/// import.
pub fn infer_type(
    explicit: Option<&str>,
    default: Option<&Literal>,
    name: &str,
    context: &mut GenerationContext,
) -> String {
    let token = match (explicit, default) {
        (Some(explicit), _) => explicit,
        (None, Some(default)) => default.kind_token(),
        (None, None) => UNKNOWN_TYPE,
    };

    if token == "str" && PATH_HINTS.iter().any(|hint| name.contains(hint)) {
        debug!(name, "treating string parameter as a path");
        context.imports.insert(ImportKey::Path);
        return PATH_TYPE.to_string();
    }

    token.to_string()
}
