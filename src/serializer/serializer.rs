use std::borrow::Cow;

use tracing::debug;

use crate::lexer::tokens::{Token, TokenKind};

/// Entity form of the characters that cannot appear literally in markup.
/// Entities are `;`-terminated, unlike the bare `&lt` older tools emitted.
pub fn escape_symbol(c: char) -> Cow<'static, str> {
    match c {
        '<' => Cow::Borrowed("&lt;"),
        '>' => Cow::Borrowed("&gt;"),
        '"' => Cow::Borrowed("&quot;"),
        '&' => Cow::Borrowed("&amp;"),
        _ => Cow::Owned(c.to_string()),
    }
}

/// Renders a single token as `<tag> value </tag>`, without a line ending.
pub fn render_token(token: &Token) -> String {
    let value = match &token.kind {
        TokenKind::Symbol(symbol) => escape_symbol(symbol.as_char()).into_owned(),
        _ => token.value(),
    };

    format!("<{tag}> {value} </{tag}>", tag = token.tag_name(), value = value)
}

pub fn render(tokens: &[Token]) -> String {
    let mut output = String::from("<tokens>\n");

    for token in tokens {
        output.push_str(&render_token(token));
        output.push('\n');
    }

    output.push_str("</tokens>\n");

    debug!(tokens = tokens.len(), bytes = output.len(), "rendered tokens");
    output
}
