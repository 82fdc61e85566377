//! Display markup for news text.
//!
//! Admins write news with bracket tags because slash-command options are a
//! single line. The tags are expanded to Discord markdown at display time.

/// Tag to markdown substitutions, applied in order.
///
/// No replacement contains `[`, so the order never changes the result.
pub const TAGS: &[(&str, &str)] = &[
    ("[b]", "**"),
    ("[/b]", "**"),
    ("[i]", "*"),
    ("[/i]", "*"),
    ("[br]", "\n"),
    ("[li]", "• "),
];

/// Expands the recognized tags in `raw`. Everything else passes through.
pub fn render(raw: &str) -> String {
    TAGS.iter()
        .fold(raw.to_string(), |text, (tag, markdown)| text.replace(tag, markdown))
}
