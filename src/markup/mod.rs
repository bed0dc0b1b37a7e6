//! Inline bold markup
//!
//! Free text in a résumé may mark emphasis with `**double asterisks**`.
//! [`expand`] turns each marked run into a `<strong>` pair. The rest of the
//! text, including any HTML it already contains, passes through untouched.

pub mod lexer;

use std::borrow::Cow;

use serde_json::Value;

pub use lexer::{lex, Token, MARKER};

const BOLD_OPEN: &str = "<strong>";
const BOLD_CLOSE: &str = "</strong>";

/// Expand `**bold**` markers into `<strong>` tags.
///
/// Each marker flushes the text gathered since the previous one, wrapped
/// in `<strong>` if bold was on, then toggles bold. An unmatched marker is
/// not an error: the trailing text is flushed under whatever state is
/// active at the end.
///
/// ```rust
/// use resume_compiler::markup::expand;
///
/// assert_eq!(expand("a **b** c"), "a <strong>b</strong> c");
/// assert_eq!(expand("plain"), "plain");
/// assert_eq!(expand("**bold"), "<strong>bold</strong>");
/// ```
pub fn expand(text: &str) -> Cow<'_, str> {
    if !text.contains(MARKER) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 2 * (BOLD_OPEN.len() + BOLD_CLOSE.len()));
    let mut bold = false;
    let mut run: Option<(usize, usize)> = None;

    for (token, span) in lex(text) {
        match token {
            Token::Marker => {
                flush(&mut out, text, run.take(), bold);
                bold = !bold;
            }
            Token::Literal | Token::Star => {
                run = Some(match run {
                    Some((start, _)) => (start, span.end),
                    None => (span.start, span.end),
                });
            }
        }
    }
    flush(&mut out, text, run, bold);

    Cow::Owned(out)
}

/// Literal text of a JSON value: strings as-is, anything else as JSON
pub fn literal(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

fn flush(out: &mut String, text: &str, run: Option<(usize, usize)>, bold: bool) {
    let Some((start, end)) = run else {
        return;
    };
    if bold {
        out.push_str(BOLD_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(BOLD_CLOSE);
    } else {
        out.push_str(&text[start..end]);
    }
}
