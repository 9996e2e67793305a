//! Process-wide string helpers.

/// Maximum number of characters kept from the normalized input.
const LABEL_PREFIX_LEN: usize = 10;

/// Package version, taken from the crate metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Trims `data` and tags it as processed.
pub fn mark_processed(data: &str) -> String {
    format!("{}-processed", data.trim())
}

/// Builds an upper-case, dash-separated label from free text.
///
/// The input is trimmed, lower-cased and has its spaces replaced by `_`;
/// only the first ten characters are kept. Then `_processed` is appended,
/// the whole is upper-cased, underscores become dashes and `_final` is
/// appended.
///
/// # Examples
///
/// ```
/// use fixture_kit::normalize_label;
///
/// assert_eq!(normalize_label("  Hello World  "), "HELLO-WORL-PROCESSED_final");
/// ```
pub fn normalize_label(input: &str) -> String {
    let snake: String = input
        .trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .take(LABEL_PREFIX_LEN)
        .collect();

    let tagged = format!("{}_processed", snake).to_uppercase().replace('_', "-");
    format!("{}_final", tagged)
}
