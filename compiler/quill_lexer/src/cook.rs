//! String literal cooking.

use std::borrow::Cow;

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Resolve the escapes of a string literal lexeme.
///
/// Accepts the lexeme with or without its surrounding quotes. Recognised
/// escapes are `\n \t \r \" \\ \0`; any other backslash sequence is kept
/// verbatim. Literals without a backslash are returned borrowed.
pub fn cook_string(lexeme: &str) -> Cow<'_, str> {
    let body = lexeme.strip_prefix('"').unwrap_or(lexeme);
    let body = body.strip_suffix('"').unwrap_or(body);
    if !body.contains('\\') {
        return Cow::Borrowed(body);
    }

    let mut cooked = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => cooked.push(resolved),
                None => {
                    cooked.push('\\');
                    cooked.push(esc);
                }
            },
            None => cooked.push('\\'),
        }
    }
    Cow::Owned(cooked)
}
