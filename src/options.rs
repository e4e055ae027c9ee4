pub const LONG_PREFIX: &str = "--";

/// Extra flag arguments for a declaration, e.g. `, "--out", "-o"`.
///
/// A long flag that spells the parameter name is left out because Typer
/// derives it from the parameter. When several spellings of one kind exist
/// the last one is kept.
pub fn derive_option_flags(option_strings: &[String], name: &str) -> String {
    let mut long = None;
    let mut short = None;
    for option in option_strings {
        if option.contains(LONG_PREFIX) {
            let bare = option.replace(LONG_PREFIX, "").replace('-', "_");
            long = (bare != name).then_some(option.as_str());
        } else {
            short = Some(option.as_str());
        }
    }

    let mut fragment = String::new();
    for flag in [long, short].into_iter().flatten() {
        fragment.push_str(&format!(", \"{flag}\""));
    }
    fragment
}
