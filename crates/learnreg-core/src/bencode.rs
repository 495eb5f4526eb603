//! Canonical bencoding of normalized documents.
//!
//! Bencoding gives every normalized value exactly one byte representation:
//! - byte strings: `<len>:<bytes>` (length in bytes, ASCII decimal)
//! - integers: `i<decimal>e`, no leading zeros, `-` for negatives
//! - lists: `l<items>e`, items in their original order
//! - dictionaries: `d<key><value>...e`, keys sorted by raw byte value
//!
//! The digest of these bytes is what gets signed, so any deviation here
//! silently breaks interoperability with other registry nodes.

use serde_json::Number;

use crate::error::CoreError;
use crate::normalize::{NormalizedDocument, NormalizedValue};

/// Bytes produced by the canonical encoder.
///
/// The buffer is private: the only way to obtain one is through [`bencode`],
/// so anything hashed as canonical went through the encoder.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for CanonicalBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CanonicalBytes({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Encode a normalized value.
pub fn bencode(value: &NormalizedValue) -> Result<CanonicalBytes, CoreError> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value)?;
    Ok(CanonicalBytes(buf))
}

/// Encode a normalized document as a bencoded dictionary.
pub fn bencode_document(doc: &NormalizedDocument) -> Result<CanonicalBytes, CoreError> {
    let mut buf = Vec::new();
    encode_dict(&mut buf, doc)?;
    Ok(CanonicalBytes(buf))
}

/// Recursively encode a value.
fn encode_value_to(buf: &mut Vec<u8>, value: &NormalizedValue) -> Result<(), CoreError> {
    match value {
        NormalizedValue::String(s) => encode_string(buf, s),
        NormalizedValue::Number(n) => encode_number(buf, n)?,
        NormalizedValue::List(items) => {
            buf.push(b'l');
            for item in items {
                encode_value_to(buf, item)?;
            }
            buf.push(b'e');
        }
        NormalizedValue::Map(doc) => encode_dict(buf, doc)?,
    }
    Ok(())
}

/// Encode a byte string.
fn encode_string(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(s.as_bytes());
}

/// Encode an integer.
///
/// Bencoding has no float type; a non-integral number is a contract
/// violation rather than something to round.
fn encode_number(buf: &mut Vec<u8>, n: &Number) -> Result<(), CoreError> {
    let digits = if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        return Err(CoreError::Encode(format!(
            "non-integral number {} cannot be bencoded",
            n
        )));
    };
    buf.push(b'i');
    buf.extend_from_slice(digits.as_bytes());
    buf.push(b'e');
    Ok(())
}

/// Encode a dictionary with keys in raw byte order.
fn encode_dict(buf: &mut Vec<u8>, doc: &NormalizedDocument) -> Result<(), CoreError> {
    let mut entries: Vec<(&str, &NormalizedValue)> = doc.iter().collect();

    // `str` ordering is byte-wise lexicographic.
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    if let Some(pair) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(CoreError::Encode(format!("duplicate key {:?}", pair[0].0)));
    }

    buf.push(b'd');
    for (key, value) in entries {
        encode_string(buf, key);
        encode_value_to(buf, value)?;
    }
    buf.push(b'e');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoded(value: &NormalizedValue) -> String {
        String::from_utf8(bencode(value).unwrap().into_vec()).unwrap()
    }

    #[test]
    fn test_string_encoding() {
        assert_eq!(encoded(&"spam".into()), "4:spam");
        assert_eq!(encoded(&"".into()), "0:");
    }

    #[test]
    fn test_string_length_counts_utf8_bytes() {
        // "é" is two bytes in UTF-8.
        let bytes = bencode(&"café".into()).unwrap();
        assert_eq!(bytes.as_bytes(), "5:café".as_bytes());
    }

    #[test]
    fn test_integer_encoding() {
        assert_eq!(encoded(&NormalizedValue::Number(0.into())), "i0e");
        assert_eq!(encoded(&NormalizedValue::Number(42.into())), "i42e");
        assert_eq!(encoded(&NormalizedValue::Number((-3).into())), "i-3e");
        assert_eq!(
            encoded(&NormalizedValue::Number(u64::MAX.into())),
            "i18446744073709551615e"
        );
    }

    #[test]
    fn test_float_is_encode_error() {
        let value = NormalizedValue::Number(Number::from_f64(2.5).unwrap());
        assert!(matches!(bencode(&value), Err(CoreError::Encode(_))));
    }

    #[test]
    fn test_list_keeps_order() {
        let value = NormalizedValue::List(vec!["b".into(), "a".into()]);
        assert_eq!(encoded(&value), "l1:b1:ae");
    }

    #[test]
    fn test_dict_keys_sorted() {
        let doc = NormalizedDocument::new().with("b", "2").with("a", "1");
        let bytes = bencode_document(&doc).unwrap();
        assert_eq!(bytes.as_bytes(), b"d1:a1:11:b1:2e");
    }

    #[test]
    fn test_dict_sort_is_bytewise() {
        // Uppercase sorts before lowercase, and a prefix before its extensions.
        let doc = NormalizedDocument::new()
            .with("ab", "3")
            .with("a", "2")
            .with("B", "1");
        assert_eq!(
            bencode_document(&doc).unwrap().as_bytes(),
            b"d1:B1:11:a1:22:ab1:3e"
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(bencode_document(&NormalizedDocument::new()).unwrap().as_bytes(), b"de");
        assert_eq!(encoded(&NormalizedValue::List(vec![])), "le");
    }

    #[test]
    fn test_nested() {
        let inner = NormalizedDocument::new().with("y", NormalizedValue::List(vec!["1".into()]));
        let doc = NormalizedDocument::new()
            .with("x", inner)
            .with("n", NormalizedValue::Number(7.into()));
        assert_eq!(
            bencode_document(&doc).unwrap().as_bytes(),
            b"d1:ni7e1:xd1:yl1:1eee"
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let doc = NormalizedDocument::new().with("a", "1").with("a", "2");
        assert!(matches!(bencode_document(&doc), Err(CoreError::Encode(_))));
    }

    proptest! {
        #[test]
        fn test_string_prefix_is_byte_length(s in "\\PC{0,32}") {
            let bytes = bencode(&NormalizedValue::String(s.clone())).unwrap().into_vec();
            let prefix = format!("{}:", s.len());
            prop_assert!(bytes.starts_with(prefix.as_bytes()));
            prop_assert_eq!(&bytes[prefix.len()..], s.as_bytes());
        }

        #[test]
        fn test_integer_is_plain_decimal(n in any::<i64>()) {
            let bytes = bencode(&NormalizedValue::Number(n.into())).unwrap().into_vec();
            prop_assert_eq!(bytes, format!("i{}e", n).into_bytes());
        }
    }
}
