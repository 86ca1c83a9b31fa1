//! Text escaping for `<t>` elements
//!
//! XML 1.0 cannot carry most control characters even as character
//! references, so they are written with Excel's `_xHHHH_` notation. A literal
//! `_xHHHH_` in the input gets its underscore encoded as `_x005F_` so readers
//! decode it back to the original text.

use std::borrow::Cow;
use std::fmt::Write as _;

use quick_xml::escape::escape;

/// Escape `s` for use as the text of a `<t>` element
pub(crate) fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| is_xml_invalid(c) || c == '_') {
        return escape(s);
    }

    let encoded = encode_excel_escapes(s);
    if let Cow::Owned(escaped) = escape(&encoded) {
        return Cow::Owned(escaped);
    }
    Cow::Owned(encoded)
}

/// Characters outside the XML 1.0 `Char` production
fn is_xml_invalid(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

/// Whether `rest` (the text right after an underscore) completes `_xHHHH_`
fn starts_escape(rest: &str) -> bool {
    let b = rest.as_bytes();
    b.len() >= 6 && b[0] == b'x' && b[1..5].iter().all(u8::is_ascii_hexdigit) && b[5] == b'_'
}

fn encode_excel_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for (i, c) in s.char_indices() {
        if is_xml_invalid(c) || (c == '_' && starts_escape(&s[i + 1..])) {
            let _ = write!(out, "_x{:04X}_", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}
