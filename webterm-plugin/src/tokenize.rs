//! Quote-aware argument tokenizer

use serde_json::Value as JsonValue;

/// Split a command line into argument tokens.
///
/// Tokens are separated by runs of spaces. A double-quoted segment that
/// starts a token and is followed by a space or the end of input becomes one
/// token with the quotes stripped. Any other quote (unterminated, or glued to
/// surrounding text as in `key:"a b"`) stays in the token, and spaces between
/// a pair of such quotes do not split it.
pub fn tokenize(content: &str) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    let mut args = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i] == ' ' {
            i += 1;
        }
        if i == chars.len() {
            break;
        }

        if chars[i] == '"' {
            if let Some(close) = find_closing_quote(&chars, i + 1) {
                let standalone = chars.get(close + 1).map_or(true, |&c| c == ' ');
                if standalone {
                    let token: String = chars[i + 1..close].iter().collect();
                    if !token.is_empty() {
                        args.push(token);
                    }
                    i = close + 1;
                    continue;
                }
            }
        }

        let mut token = String::new();
        let mut in_quotes = false;
        while i < chars.len() {
            let c = chars[i];
            if c == '"' {
                in_quotes = !in_quotes;
            }
            if c == ' ' && !in_quotes {
                break;
            }
            token.push(c);
            i += 1;
        }

        if !token.is_empty() {
            args.push(token);
        }
    }

    args
}

/// Tokenize a loosely typed input. Anything other than a string yields no tokens.
pub fn tokenize_value(content: &JsonValue) -> Vec<String> {
    match content {
        JsonValue::String(s) => tokenize(s),
        _ => Vec::new(),
    }
}

fn find_closing_quote(chars: &[char], from: usize) -> Option<usize> {
    chars[from..].iter().position(|&c| c == '"').map(|p| from + p)
}
