//! Invisible payloads inside formatted text
//!
//! Labels and book lines are rendered with `§x` formatting codes, and a code
//! pair never shows up in the rendered text. A hidden payload is written as
//! its UTF-8 bytes in hex, one `§` + digit pair per nibble, between a start
//! and an end sentinel built from non-hex codes. The sentinels can therefore
//! never occur inside the encoded data, and any string, including one full
//! of `§`, survives the trip unchanged.

use crate::contract::SettingsError;

/// Formatting code prefix
pub const FORMAT_CHAR: char = '§';

pub const RESET: &str = "§r";
pub const WHITE: &str = "§f";
pub const GREEN: &str = "§a";
pub const RED: &str = "§c";
pub const BLUE: &str = "§9";
pub const ITALIC: &str = "§o";

const HIDDEN_START: &str = "§k§l§k";
const HIDDEN_END: &str = "§m§n§m";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Append `hidden` invisibly to `visible`
///
/// A formatting prefix left dangling at the end of `visible` is dropped first
/// so it cannot swallow the start sentinel; it renders as nothing either way.
pub fn encode(visible: &str, hidden: &str) -> String {
    let visible = trim_dangling_format(visible);
    let mut out =
        String::with_capacity(visible.len() + HIDDEN_START.len() + HIDDEN_END.len() + hidden.len() * 6);
    out.push_str(visible);
    out.push_str(HIDDEN_START);
    for byte in hidden.bytes() {
        for nibble in [byte >> 4, byte & 0x0f] {
            out.push(FORMAT_CHAR);
            out.push(char::from(HEX_DIGITS[usize::from(nibble)]));
        }
    }
    out.push_str(HIDDEN_END);
    out
}

/// Extract the hidden payload from a label
///
/// Returns `Ok(None)` when the label carries no payload at all and
/// `Ok(Some(""))` for an empty one. A payload that was cut off or tampered
/// with is a [`SettingsError::MalformedPayload`].
pub fn decode(label: &str) -> Result<Option<String>, SettingsError> {
    let Some(start) = label.rfind(HIDDEN_START) else {
        return Ok(None);
    };
    let body = &label[start + HIDDEN_START.len()..];
    let end = body.find(HIDDEN_END).ok_or_else(|| malformed("hidden payload is not terminated"))?;

    let mut bytes = Vec::with_capacity(end / 4);
    let mut high: Option<u8> = None;
    let mut chars = body[..end].chars();
    while let Some(c) = chars.next() {
        if c != FORMAT_CHAR {
            return Err(malformed(format!("unexpected character '{}' in hidden payload", c)));
        }
        let digit = chars
            .next()
            .and_then(|d| d.to_digit(16))
            .ok_or_else(|| malformed("hidden payload contains a non-hex code"))?;
        // to_digit(16) is always < 16
        let nibble = digit as u8;
        match high.take() {
            Some(h) => bytes.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }
    if high.is_some() {
        return Err(malformed("hidden payload has an odd number of digits"));
    }

    String::from_utf8(bytes)
        .map(Some)
        .map_err(|_| malformed("hidden payload is not valid UTF-8"))
}

/// The text a reader sees: everything except formatting code pairs
pub fn visible_text(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut chars = label.chars();
    while let Some(c) = chars.next() {
        if c == FORMAT_CHAR {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

fn trim_dangling_format(s: &str) -> &str {
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == FORMAT_CHAR && chars.next().is_none() {
            return &s[..i];
        }
    }
    s
}

fn malformed(details: impl Into<String>) -> SettingsError {
    SettingsError::MalformedPayload {
        details: details.into(),
    }
}
