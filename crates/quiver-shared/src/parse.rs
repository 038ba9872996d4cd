// parse.rs — tokenizer for scripts, configs and console input

pub const MAX_TOKEN_CHARS: usize = 128;

/// Parse one token from the front of `cursor`, advancing it past the token.
///
/// Skips whitespace (any byte at or below space) and `//` comments. Quoted
/// strings come back verbatim, possibly empty, with no escape handling; an
/// unterminated quote runs to the end of the data. Returns `None` once the
/// data is exhausted, draining the cursor.
///
/// Any token that reaches [`MAX_TOKEN_CHARS`] collapses to an empty token
/// while the cursor still moves past it.
pub fn parse_token(cursor: &mut &str) -> Option<String> {
    let s = *cursor;
    let bytes = s.as_bytes();
    let mut i = 0;

    loop {
        while i < bytes.len() && bytes[i] <= b' ' {
            i += 1;
        }
        if i == bytes.len() {
            *cursor = "";
            return None;
        }
        if bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            continue;
        }
        break;
    }

    // quoted strings are taken verbatim
    if bytes[i] == b'"' {
        i += 1;
        let start = i;
        while i < bytes.len() && bytes[i] != b'"' {
            i += 1;
        }
        let content = &s[start..i];
        if i < bytes.len() {
            i += 1; // closing quote
        }
        *cursor = &s[i..];
        if content.len() >= MAX_TOKEN_CHARS {
            return Some(String::new());
        }
        return Some(content.to_string());
    }

    // a regular word is a maximal run of bytes above space
    let start = i;
    while i < bytes.len() && bytes[i] > b' ' {
        i += 1;
    }
    let word = &s[start..i];
    *cursor = &s[i..];

    if word.len() >= MAX_TOKEN_CHARS {
        return Some(String::new());
    }
    Some(word.to_string())
}

/// Tokenize a whole string.
pub fn parse_all(data: &str) -> Vec<String> {
    let mut cursor = data;
    let mut tokens = Vec::new();
    while let Some(token) = parse_token(&mut cursor) {
        tokens.push(token);
    }
    tokens
}

// ============================================================
// Tests
// ============================================================
