//! Line folding (RFC 5545 §3.1) and `TEXT` escape sequences (RFC 5545 §3.3.11).

use std::borrow::Cow;

/// The line fold sequence: CRLF followed by a single space or horizontal tab.
const FOLD: &[u8] = b"\r\n ";
const FOLD_TAB: &[u8] = b"\r\n\t";

/// Splits off the longest run of line folds at the start of `input`, returning `(folds,
/// remainder)`. The length of `folds` is always a multiple of three, since each fold is exactly
/// `CRLF` plus one leading whitespace octet.
pub fn split_fold_prefix(input: &[u8]) -> (&[u8], &[u8]) {
    let mut consumed = 0;

    while input[consumed..].starts_with(FOLD) || input[consumed..].starts_with(FOLD_TAB) {
        consumed += 3;
    }

    input.split_at(consumed)
}

/// Removes every line fold from `input`, producing the logical (unfolded) content line.
pub fn unfold(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut rest = input;

    loop {
        let (folds, tail) = split_fold_prefix(rest);
        if !folds.is_empty() {
            rest = tail;
            continue;
        }

        match tail.iter().position(|&b| b == b'\r') {
            Some(i) if tail[i..].starts_with(b"\r\n") => {
                out.extend_from_slice(&tail[..i]);
                rest = &tail[i..];
                if split_fold_prefix(rest).0.is_empty() {
                    rest = &rest[2..];
                }
            }
            _ => {
                out.extend_from_slice(tail);
                break;
            }
        }

        if rest.is_empty() {
            break;
        }
    }

    out
}

/// Folds `input` into lines of at most 75 octets, as recommended (but not required) by RFC 5545
/// §3.1, inserting a single leading space after each fold. Continuation chunks are one octet
/// narrower than the first, since the leading fold space counts against their own 75-octet limit.
pub fn fold(input: &str) -> String {
    const LIMIT: usize = 75;

    let bytes = input.as_bytes();
    if bytes.len() <= LIMIT {
        return input.to_owned();
    }

    let mut out = String::with_capacity(bytes.len() + bytes.len() / LIMIT * 3);
    let mut start = 0;
    let mut first = true;

    while start < bytes.len() {
        let width = if first { LIMIT } else { LIMIT - 1 };
        let mut end = (start + width).min(bytes.len());
        // never split a UTF-8 sequence in the middle
        while end < bytes.len() && !input.is_char_boundary(end) {
            end -= 1;
        }

        out.push_str(&input[start..end]);
        start = end;
        first = false;

        if start < bytes.len() {
            out.push_str("\r\n ");
        }
    }

    out
}

/// Unescapes a `TEXT` value per RFC 5545 §3.3.11: `\\`, `\;`, `\,`, `\N`, and `\n` are replaced by
/// `\`, `;`, `,`, and a newline respectively; any other escape is left unchanged.
pub fn unescape_text(input: &str) -> Cow<'_, str> {
    if !input.contains('\\') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.clone().next() {
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            Some(';') => {
                out.push(';');
                chars.next();
            }
            Some(',') => {
                out.push(',');
                chars.next();
            }
            Some('N') | Some('n') => {
                out.push('\n');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }

    Cow::Owned(out)
}

/// Escapes `input` for use as a `TEXT` value, per RFC 5545 §3.3.11.
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !input.contains(['\\', ';', ',', '\n']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

/// A byte slice whose `TEXT` escape sequences (and embedded line folds) have not yet been
/// resolved; resolving them may require allocation, so this wrapper defers the work until
/// [`Escaped::try_into_cow_str`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped<'a>(pub &'a [u8]);

/// Converts a reference to a byte slice into its [`Escaped`] view.
pub trait AsEscaped {
    fn as_escaped(&self) -> Escaped<'_>;
}

impl AsEscaped for [u8] {
    fn as_escaped(&self) -> Escaped<'_> {
        Escaped(self)
    }
}

impl<'a> Escaped<'a> {
    /// Unfolds and unescapes this slice, returning a borrowed `str` when no folds or escapes were
    /// present and an owned `String` otherwise.
    pub fn try_into_cow_str(&self) -> Result<Cow<'a, str>, std::str::Utf8Error> {
        let unfolded = unfold(self.0);

        if unfolded == self.0 {
            let s = std::str::from_utf8(self.0)?;
            Ok(unescape_text(s).into_owned().into())
        } else {
            let s = String::from_utf8(unfolded).map_err(|e| e.utf8_error())?;
            Ok(Cow::Owned(unescape_text(&s).into_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fold_prefix_single_fold() {
        let (prefix, tail) = split_fold_prefix(b"\r\n deo");
        assert_eq!(prefix, b"\r\n ");
        assert_eq!(tail, b"deo");
    }

    #[test]
    fn split_fold_prefix_tab_fold() {
        let (prefix, tail) = split_fold_prefix(b"\r\n\tX-THING");
        assert_eq!(prefix, b"\r\n\t");
        assert_eq!(tail, b"X-THING");
    }

    #[test]
    fn split_fold_prefix_no_fold() {
        let (prefix, tail) = split_fold_prefix(b"hello");
        assert!(prefix.is_empty());
        assert_eq!(tail, b"hello");
    }

    #[test]
    fn unfold_removes_embedded_folds() {
        let out = unfold(b"vi\r\n deo");
        assert_eq!(out, b"video");
    }

    #[test]
    fn fold_roundtrips_short_line() {
        let s = "SUMMARY:short";
        assert_eq!(fold(s), s);
    }

    #[test]
    fn fold_folds_twice_with_narrower_continuations() {
        let s = "SUMMARY:".to_owned() + &"x".repeat(200);
        let folded = fold(&s);
        let lines: Vec<&str> = folded.split("\r\n").collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1].len(), 75);
        assert!(lines[1].starts_with(' '));
        assert!(lines[2].len() < 75);

        assert_eq!(unfold(folded.as_bytes()), s.as_bytes());
    }

    #[test]
    fn unescape_handles_all_sequences() {
        assert_eq!(unescape_text(r"a\,b\;c\\d\ne"), "a,b;c\\d\ne");
    }

    #[test]
    fn escape_then_unescape_roundtrips() {
        let original = "a,b;c\\d\ne";
        let escaped = escape_text(original);
        assert_eq!(unescape_text(&escaped), original);
    }
}
