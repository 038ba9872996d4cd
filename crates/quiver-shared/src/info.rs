// info.rs — \key\value info strings for configuration and handshake metadata

use thiserror::Error;

pub const MAX_INFO_KEY: usize = 64;
pub const MAX_INFO_VALUE: usize = 64;
pub const MAX_INFO_STRING: usize = 512;

/// Why a key/value pair could not be written into an info string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InfoError {
    #[error("info keys and values may not contain '\\' or '\"', nor keys ';'")]
    IllegalCharacter,
    #[error("info keys and values must be shorter than {MAX_INFO_KEY} characters")]
    Oversize,
    #[error("info string length exceeded")]
    Overflow,
}

/// Iterator over the `(key, value)` pairs of an info string.
pub struct Pairs<'a> {
    rest: &'a str,
}

/// Walk the `\key\value` pairs of an info string. A key missing its value
/// separator is dropped, matching how the engine has always parsed these.
pub fn pairs(s: &str) -> Pairs<'_> {
    Pairs {
        rest: s.strip_prefix('\\').unwrap_or(s),
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let sep = self.rest.find('\\')?;
        let key = &self.rest[..sep];
        let after = &self.rest[sep + 1..];

        let (value, rest) = match after.find('\\') {
            Some(pos) => (&after[..pos], &after[pos + 1..]),
            None => (after, ""),
        };
        self.rest = rest;
        Some((key, value))
    }
}

/// The value for `key`, or `None` when absent. The first occurrence wins.
pub fn value_for_key<'a>(s: &'a str, key: &str) -> Option<&'a str> {
    pairs(s).find(|&(k, _)| k == key).map(|(_, v)| v)
}

/// Remove the first occurrence of `key` and its value by splicing it out
/// in place; the rest of the string stays byte-for-byte intact. Keys
/// containing a backslash are ignored.
pub fn remove_key(s: &mut String, key: &str) {
    if key.contains('\\') {
        return;
    }

    let mut cursor = 0;
    loop {
        // the splice swallows the separator in front of the pair, if any
        let start = cursor;
        let mut p = cursor;
        if s[p..].starts_with('\\') {
            p += 1;
        }
        let ksep = match s[p..].find('\\') {
            Some(pos) => pos,
            // a trailing key with no value separator stays put
            None => return,
        };
        let vstart = p + ksep + 1;
        let vend = match s[vstart..].find('\\') {
            Some(pos) => vstart + pos,
            None => s.len(),
        };
        if &s[p..p + ksep] == key {
            s.replace_range(start..vend, "");
            return;
        }
        if vend == s.len() {
            return;
        }
        cursor = vend;
    }
}

/// Some characters can break the server's parsing and are never allowed
/// anywhere in an info string.
pub fn validate(s: &str) -> bool {
    !s.contains('"') && !s.contains(';')
}

/// Set `key` to `value`, replacing any previous value. An empty value
/// removes the key. Appended bytes are masked to 7-bit ASCII and
/// non-printables dropped.
pub fn set_value_for_key(s: &mut String, key: &str, value: &str) -> Result<(), InfoError> {
    if key.contains('\\') || value.contains('\\') {
        return Err(InfoError::IllegalCharacter);
    }
    if key.contains(';') {
        return Err(InfoError::IllegalCharacter);
    }
    if key.contains('"') || value.contains('"') {
        return Err(InfoError::IllegalCharacter);
    }
    if key.len() >= MAX_INFO_KEY || value.len() >= MAX_INFO_VALUE {
        return Err(InfoError::Oversize);
    }

    remove_key(s, key);

    if value.is_empty() {
        return Ok(());
    }

    let pair = format!("\\{}\\{}", key, value);
    if pair.len() + s.len() >= MAX_INFO_STRING {
        return Err(InfoError::Overflow);
    }

    for c in pair.bytes() {
        let c = c & 127;
        if c >= 32 && c < 127 {
            s.push(c as char);
        }
    }
    Ok(())
}

// ============================================================
// Tests
// ============================================================
