//! Markup helpers for output lines
//!
//! Output lines may carry simple HTML (`<strong>` headers). Any text that
//! came from the user must go through [`escape_html`] before it is embedded.

const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#039;", '\''),
];

/// Neutralize markup-significant characters in untrusted text.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for ch in unsafe_text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Render an output line for a plain-text display.
///
/// Tags are dropped and the entities produced by [`escape_html`] are decoded
/// in a single pass, so `&amp;lt;` becomes `&lt;` and not `<`.
pub fn to_plain_text(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if ch == '<' {
            match rest.find('>') {
                Some(end) => {
                    rest = &rest[end + 1..];
                    continue;
                }
                None => {
                    out.push_str(rest);
                    break;
                }
            }
        }

        if ch == '&' {
            if let Some((entity, decoded)) = ENTITIES.iter().find(|(e, _)| rest.starts_with(e)) {
                out.push(*decoded);
                rest = &rest[entity.len()..];
                continue;
            }
        }

        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
