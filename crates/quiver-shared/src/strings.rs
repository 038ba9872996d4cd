// strings.rs — path and string helpers shared by the filesystem and console layers

/// The filename portion after the last '/'.
pub fn skip_path(pathname: &str) -> &str {
    match pathname.rfind('/') {
        Some(pos) => &pathname[pos + 1..],
        None => pathname,
    }
}

/// Truncate at the first '.': "model.md2" -> "model".
pub fn strip_extension(input: &str) -> &str {
    match input.find('.') {
        Some(pos) => &input[..pos],
        None => input,
    }
}

/// The extension after the last '.', without the dot. Empty when there is
/// no dot or the dot is the first byte.
pub fn file_extension(input: &str) -> &str {
    match input.rfind('.') {
        Some(0) | None => "",
        Some(pos) => &input[pos + 1..],
    }
}

/// The filename between the last '/' and the last '.'. Degenerate inputs
/// (no extension, single-character base at the start) come back empty.
pub fn file_base(input: &str) -> &str {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return "";
    }

    // walk back to the last '.', or the start when there is none
    let mut s = bytes.len() - 1;
    while s > 0 && bytes[s] != b'.' {
        s -= 1;
    }
    // then back to the '/' before it
    let mut s2 = s;
    while s2 > 0 && bytes[s2] != b'/' {
        s2 -= 1;
    }

    if s - s2 < 2 {
        return "";
    }
    &input[s2 + 1..s]
}

/// The path up to, but not including, the last '/'. Empty when there is no
/// directory part.
pub fn file_path(input: &str) -> &str {
    match input.rfind('/') {
        Some(pos) => &input[..pos],
        None => "",
    }
}

/// Append `extension` (dot included) unless the final path component
/// already has one.
pub fn default_extension(path: &mut String, extension: &str) {
    for ch in path.chars().rev() {
        if ch == '/' {
            break;
        }
        if ch == '.' {
            return;
        }
    }
    path.push_str(extension);
}

/// Case-insensitive (ASCII) string equality.
pub fn str_eq_ignore_case(s1: &str, s2: &str) -> bool {
    s1.eq_ignore_ascii_case(s2)
}

/// Case-insensitive comparison of the first `n` bytes; strings that both
/// end before `n` still compare equal.
pub fn strn_eq_ignore_case(s1: &str, s2: &str, n: usize) -> bool {
    let a = s1.as_bytes();
    let b = s2.as_bytes();
    for i in 0..n {
        match (a.get(i), b.get(i)) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.eq_ignore_ascii_case(y) => {}
            _ => return false,
        }
    }
    true
}

/// Byte position of the first case-insensitive occurrence of `needle`.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// True when the string is all ASCII digits (vacuously true when empty).
pub fn is_all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================
// Tests
// ============================================================
