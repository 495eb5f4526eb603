//! End-to-end publishing: envelopes, configuration, signing and checking.

use learnreg::envelope::{
    signable_document, signature_of, Activity, Delete, Envelope, EnvelopeMeta, JsonDocument,
    SimpleDocument, DIGITAL_SIGNATURE_FIELD,
};
use learnreg::sign::SignError;
use learnreg::{
    canonical_digest, sign, verify, verify_document, Config, Document, Error, Publisher, Value,
    Verifier, SIGNING_METHOD,
};
use learnreg_testkit::fixtures::{TestFixture, GNUPG_EMPTY_DOCUMENT_MESSAGE};
use learnreg_testkit::vectors::all_vectors;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn meta() -> EnvelopeMeta {
    EnvelopeMeta::new()
        .submitter("Registry Test Publisher")
        .submitter_type("agent")
        .submission_tos("http://www.learningregistry.org/tos/cc0/v0-5/")
        .signer("Registry Test Publisher")
        .tags(["math", "algebra", "math"])
}

fn lesson() -> Envelope {
    Envelope::from(
        SimpleDocument::new("<lom/>", "http://example.org/lesson/1")
            .unwrap()
            .resource_data_type("metadata")
            .payload_placement("inline")
            .meta(meta()),
    )
}

#[test]
fn test_publish_and_verify() {
    init_tracing();
    let fixture = TestFixture::publisher();
    let publisher = Publisher::new(fixture.signer());

    let doc = publisher.publish(&lesson()).unwrap();

    let block = signature_of(&doc).unwrap();
    assert_eq!(block.signing_method(), SIGNING_METHOD);
    assert_eq!(block.key_location(), &[fixture.public_key_location()]);
    assert_eq!(doc.keys().last(), Some(DIGITAL_SIGNATURE_FIELD));

    assert!(verify_document(&doc, fixture.public_key).unwrap());
    assert!(verify(block.signature(), fixture.public_key).unwrap());
}

#[test]
fn test_modified_document_fails_verification() {
    let fixture = TestFixture::publisher();
    let doc = Publisher::new(fixture.signer()).publish(&lesson()).unwrap();

    let mut modified = doc.clone();
    modified.insert("resource_locator", "http://example.org/lesson/2");

    assert!(!verify_document(&modified, fixture.public_key).unwrap());
}

#[test]
fn test_node_fields_do_not_break_verification() {
    let fixture = TestFixture::publisher();
    let mut doc = Publisher::new(fixture.signer()).publish(&lesson()).unwrap();

    doc.insert("doc_ID", "0f1e2d3c");
    doc.insert("publishing_node", "node-1");
    doc.insert("node_timestamp", "2026-10-16T00:00:00Z");

    assert!(verify_document(&doc, fixture.public_key).unwrap());
}

#[test]
fn test_unsigned_document() {
    let doc = lesson().to_document().unwrap();
    assert!(matches!(
        verify_document(&doc, TestFixture::publisher().public_key),
        Err(Error::Unsigned)
    ));
}

#[test]
fn test_every_envelope_variant_signs() {
    let fixture = TestFixture::other();
    let publisher = Publisher::new(fixture.signer());

    let envelopes = vec![
        Envelope::from(
            JsonDocument::from_json_str(r#"{"title": "Fractions", "grade": 4}"#, "http://example.org/f")
                .unwrap()
                .meta(meta()),
        ),
        Envelope::from(
            Activity::new("http://example.org/lesson/1")
                .unwrap()
                .activity(Document::new().with("verb", Document::new().with("action", "viewed")))
                .meta(meta()),
        ),
        Envelope::from(Delete::new(["0f1e2d3c"]).meta(meta())),
    ];

    for envelope in &envelopes {
        let doc = publisher.publish(envelope).unwrap();
        assert!(verify_document(&doc, fixture.public_key).unwrap());
    }
}

#[test]
fn test_sign_free_function() {
    let fixture = TestFixture::publisher();
    let doc = Document::new().with("b", "2").with("a", "1");

    let block = sign(&fixture.signer(), &doc).unwrap();
    assert_eq!(
        Verifier::signed_text(block.signature()).unwrap(),
        canonical_digest(&doc).unwrap()
    );
}

#[test]
fn test_canonical_digest_matches_vectors() {
    for vector in all_vectors() {
        assert_eq!(canonical_digest(&vector.document()).unwrap(), vector.digest);
    }
}

#[test]
fn test_gnupg_reference_signature() {
    let fixture = TestFixture::publisher();
    assert!(verify(GNUPG_EMPTY_DOCUMENT_MESSAGE, fixture.public_key).unwrap());
    assert_eq!(
        Verifier::signed_text(GNUPG_EMPTY_DOCUMENT_MESSAGE).unwrap(),
        canonical_digest(&Document::new()).unwrap()
    );
}

#[test]
fn test_publisher_from_config_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let fixture = TestFixture::publisher();
    let key_path = fixture.write_secret_key(dir.path()).unwrap();

    let config_path = dir.path().join("learnreg.json");
    let json = serde_json::json!({
        "signing": {
            "public_key_location": fixture.public_key_location(),
            "private_key": key_path.to_str().unwrap(),
            "pass_phrase": fixture.pass_phrase,
        }
    });
    std::fs::write(&config_path, json.to_string()).unwrap();

    let publisher = Publisher::from_config(&Config::from_file(&config_path).unwrap()).unwrap();
    let doc = publisher.publish(&lesson()).unwrap();
    assert!(verify_document(&doc, fixture.public_key).unwrap());
}

#[test]
fn test_config_with_empty_pass_phrase() {
    let config = Config::from_json_str(&format!(
        r#"{{"signing": {{"public_key_location": "http://keys.example.org/k", "private_key": {:?}, "pass_phrase": ""}}}}"#,
        TestFixture::publisher().secret_key
    ))
    .unwrap();

    assert!(matches!(
        Publisher::from_config(&config),
        Err(Error::Sign(SignError::NullField("pass_phrase")))
    ));
}

#[test]
fn test_resigning_replaces_signature() {
    let publisher = Publisher::new(TestFixture::publisher().signer());
    let first = publisher.publish(&lesson()).unwrap();
    let second = publisher.sign_document(first.clone()).unwrap();

    assert_eq!(signable_document(&first), signable_document(&second));
    assert_eq!(
        second.keys().filter(|k| *k == DIGITAL_SIGNATURE_FIELD).count(),
        1
    );
    assert!(verify_document(&second, TestFixture::publisher().public_key).unwrap());
}

#[test]
fn test_tags_are_deduplicated_on_the_wire() {
    let doc = lesson().to_document().unwrap();
    assert_eq!(
        doc.get("keys"),
        Some(&Value::List(vec![Value::from("math"), Value::from("algebra")]))
    );
}
