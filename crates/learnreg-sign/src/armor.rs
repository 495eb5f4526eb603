//! Text-level handling of the OpenPGP cleartext signature framework.
//!
//! The OpenPGP engine parses and emits the binary parts; these helpers deal
//! with the line structure around them: the break that must precede the
//! signature armor, recovering the signed plaintext, and slicing out the
//! armored signature block.

use std::borrow::Cow;

/// First line of a clear-signed message.
pub const SIGNED_MESSAGE_HEADER: &str = "-----BEGIN PGP SIGNED MESSAGE-----";

/// Opening line of the armored signature.
pub const SIGNATURE_HEADER: &str = "-----BEGIN PGP SIGNATURE-----";

/// Closing line of the armored signature.
pub const SIGNATURE_FOOTER: &str = "-----END PGP SIGNATURE-----";

/// Make sure a line break immediately precedes the signature armor header.
///
/// Returns the input untouched when it is already well formed.
pub fn ensure_signature_break(message: &str) -> Cow<'_, str> {
    match message.find(SIGNATURE_HEADER) {
        Some(pos) if pos > 0 && !message[..pos].ends_with('\n') => {
            let mut repaired = String::with_capacity(message.len() + 1);
            repaired.push_str(&message[..pos]);
            repaired.push('\n');
            repaired.push_str(&message[pos..]);
            Cow::Owned(repaired)
        }
        _ => Cow::Borrowed(message),
    }
}

/// Recover the signed plaintext from a clear-signed message.
///
/// Skips the armor headers (`Hash: ...`) up to the first blank line, then
/// collects lines until the signature header. Dash-escaped lines are
/// unescaped and trailing whitespace is removed, as the cleartext signature
/// framework requires. Returns `None` if the framing is incomplete.
pub fn recover_plaintext(message: &str) -> Option<String> {
    let mut lines = message.lines().skip_while(|line| line.trim() != SIGNED_MESSAGE_HEADER);
    lines.next()?;

    // Armor headers end at the first blank line.
    for line in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
    }

    let mut text: Vec<&str> = Vec::new();
    for line in lines {
        if line.trim_end() == SIGNATURE_HEADER {
            return Some(text.join("\n"));
        }
        let line = line.strip_prefix("- ").unwrap_or(line);
        text.push(line.trim_end());
    }
    None
}

/// Slice the armored signature block, header through footer inclusive.
pub fn signature_block(message: &str) -> Option<&str> {
    let start = message.find(SIGNATURE_HEADER)?;
    let end = message[start..].find(SIGNATURE_FOOTER)? + start + SIGNATURE_FOOTER.len();
    Some(&message[start..end])
}
