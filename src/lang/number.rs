use super::is_whitespace;
use std::iter::Peekable;
use std::str::Chars;

/// Text that can begin a numeric literal.
pub const NUMBER_START: [&str; 11] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "."];

/// Pieces a numeric literal is scanned from, tried in order.
/// `E+` and `E-` come before `E` so the sign stays with its exponent.
pub const NUMBER_CONTENT: [&str; 14] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "E+", "E-", "E",
];

/// True when all of `s` is one numeric literal:
/// `[+-]?(\d+(\.\d*)?|\.\d+)([Ee][+-]?\d+)?` then optional whitespace.
pub fn is_numeric(s: &str) -> bool {
    fn digits(chars: &mut Peekable<Chars<'_>>) -> bool {
        let mut found = false;
        while let Some(c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            found = true;
            chars.next();
        }
        found
    }
    let mut chars = s.chars().peekable();
    if let Some('+') | Some('-') = chars.peek() {
        chars.next();
    }
    let integer = digits(&mut chars);
    if let Some('.') = chars.peek() {
        chars.next();
        if !digits(&mut chars) && !integer {
            return false;
        }
    } else if !integer {
        return false;
    }
    if let Some('E') | Some('e') = chars.peek() {
        chars.next();
        if let Some('+') | Some('-') = chars.peek() {
            chars.next();
        }
        if !digits(&mut chars) {
            return false;
        }
    }
    chars.all(is_whitespace)
}

/// The value of a literal accepted by [`is_numeric`].
pub fn value(s: &str) -> Option<f64> {
    if !is_numeric(s) {
        return None;
    }
    s.trim_end_matches(is_whitespace).parse().ok()
}
