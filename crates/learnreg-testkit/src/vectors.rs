//! Golden test vectors for canonical encoding.
//!
//! Each vector pins the bencoded bytes and SHA-256 digest of a JSON
//! document. Any registry client computing the same digests will accept our
//! signatures and produce ones we accept.

use learnreg_core::{canonical_bytes, canonical_digest, Document};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input document as JSON; member order is preserved.
    pub json: &'static str,
    /// Expected canonical bytes.
    pub bencoded: &'static str,
    /// Expected digest (lowercase hex).
    pub digest: &'static str,
}

impl GoldenVector {
    pub fn document(&self) -> Document {
        match Document::from_json_str(self.json) {
            Ok(doc) => doc,
            Err(e) => panic!("vector '{}' has invalid JSON: {}", self.name, e),
        }
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty document",
            json: "{}",
            bencoded: "de",
            digest: "959a45d44e6fcf58361ed004681556fe50129f2109e817dec098c00c9e5d2578",
        },
        GoldenVector {
            name: "keys out of order",
            json: r#"{"b": "2", "a": "1"}"#,
            bencoded: "d1:a1:11:b1:2e",
            digest: "780ba9680b868831abce6683fb6f6762fd39e47307ccb0d4ec22e6a3b2287c9c",
        },
        GoldenVector {
            name: "null and booleans",
            json: r#"{"a": null, "b": true, "c": false}"#,
            bencoded: "d1:a4:null1:b4:true1:c5:falsee",
            digest: "ce4a09a6d8fcc119e5a44f72c6fc9f8a6a932ae4bbf4dc314bb5ead12a8d6c73",
        },
        GoldenVector {
            name: "numbers dropped from lists",
            json: r#"{"a": [1, "x", 2.5, true]}"#,
            bencoded: "d1:al1:x4:trueee",
            digest: "ebc6734a85be00bfe52d81a13b2fe89f3439dfcec57f7a7593cc51cf6df16a50",
        },
        GoldenVector {
            name: "integers under map keys",
            json: r#"{"count": 42, "neg": -7}"#,
            bencoded: "d5:counti42e3:negi-7ee",
            digest: "a29db50766cfa5948b8d3ad1e1188a4c7998aa3cea7188d72c48cd2e1dc179a4",
        },
        GoldenVector {
            name: "nested map and list",
            json: r#"{"x": {"y": ["1"]}, "n": 7}"#,
            bencoded: "d1:ni7e1:xd1:yl1:1eee",
            digest: "a77e02ebaffdee516f79c148e51baf102c109af8ae4a76ad0d20018a311b2dfe",
        },
        GoldenVector {
            name: "multi-byte utf-8",
            json: r#"{"title": "café"}"#,
            bencoded: "d5:title5:cafée",
            digest: "83f124b90da6b819e08efb1cf961fb59c7c9c4fb8aeec4dbabf64d6987cc1fd2",
        },
        GoldenVector {
            name: "resource data envelope",
            json: r#"{"doc_type": "resource_data", "doc_version": "0.51.0", "active": true, "resource_data_type": "metadata", "identity": {"submitter_type": "agent", "submitter": "Registry Test Publisher"}, "TOS": {"submission_TOS": "http://www.learningregistry.org/tos/cc0/v0-5/"}, "resource_locator": "http://example.org/lesson/1", "payload_placement": "inline", "payload_schema": ["LR Paradata 1.0"], "keys": ["math", "algebra"], "resource_data": "<lesson/>"}"#,
            bencoded: "d3:TOSd14:submission_TOS45:http://www.learningregistry.org/tos/cc0/v0-5/e6:active4:true8:doc_type13:resource_data11:doc_version6:0.51.08:identityd9:submitter23:Registry Test Publisher14:submitter_type5:agente4:keysl4:math7:algebrae17:payload_placement6:inline14:payload_schemal15:LR Paradata 1.0e13:resource_data9:<lesson/>18:resource_data_type8:metadata16:resource_locator27:http://example.org/lesson/1e",
            digest: "4085a74e47d6a146602b2b45e028cfcfa9dacc1072a76f16f4e0491e949df120",
        },
    ]
}

/// Check every vector against the current implementation.
///
/// Returns `(name, matches, actual digest)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let doc = v.document();
            let (matches, hex) = match (canonical_bytes(&doc), canonical_digest(&doc)) {
                (Ok(bytes), Ok(digest)) => {
                    let hex = digest.to_hex();
                    (bytes.as_bytes() == v.bencoded.as_bytes() && hex == v.digest, hex)
                }
                (Err(e), _) | (_, Err(e)) => (false, e.to_string()),
            };
            (v.name.to_string(), matches, hex)
        })
        .collect()
}
