//! Signing and verification against GnuPG-generated key fixtures.

use learnreg_core::{canonical_digest, Document, Value};
use learnreg_sign::{
    armor, SignError, Signer, SigningIdentity, Verifier, VerifyError, SIGNING_METHOD,
};
use learnreg_testkit::fixtures::{TestFixture, GNUPG_EMPTY_DOCUMENT_MESSAGE, KEY_RING};

fn lesson() -> Document {
    Document::new()
        .with("doc_type", "resource_data")
        .with("doc_version", "0.51.0")
        .with("active", true)
        .with("keys", vec![Value::from("math"), Value::from(3)])
        .with("resource_locator", "http://example.org/lesson/1")
        .with("resource_data", "<lesson/>")
}

#[test]
fn test_round_trip() {
    let fixture = TestFixture::publisher();
    let doc = lesson();

    let block = fixture.signer().sign(&doc).unwrap();

    assert_eq!(block.signing_method(), SIGNING_METHOD);
    assert_eq!(block.key_location(), &[fixture.public_key_location()]);
    assert!(Verifier::verify_block(&block, fixture.public_key).unwrap());

    // The signed plaintext is the canonical digest.
    let signed = Verifier::signed_text(block.signature()).unwrap();
    assert_eq!(signed, canonical_digest(&doc).unwrap().to_hex());
}

#[test]
fn test_signature_armor_is_line_broken() {
    let block = TestFixture::publisher().signer().sign(&Document::new()).unwrap();
    let signature = block.signature();

    assert!(signature.starts_with(armor::SIGNED_MESSAGE_HEADER));
    let pos = signature.find(armor::SIGNATURE_HEADER).unwrap();
    assert!(signature[..pos].ends_with('\n'));
}

#[test]
fn test_tampered_digest_never_verifies() {
    let fixture = TestFixture::publisher();
    let block = fixture.signer().sign(&lesson()).unwrap();
    let digest = Verifier::signed_text(block.signature()).unwrap();

    let first = digest.as_bytes()[0];
    let replacement = if first == b'0' { "1" } else { "0" };
    let forged_digest = format!("{}{}", replacement, &digest[1..]);
    let tampered = block.signature().replacen(&digest, &forged_digest, 1);

    let result = Verifier::verify(&tampered, fixture.public_key);
    assert!(!matches!(result, Ok(true)), "tampered message verified");
}

#[test]
fn test_unknown_issuer_is_signature_not_found() {
    let block = TestFixture::publisher().signer().sign(&lesson()).unwrap();
    let result = Verifier::verify_block(&block, TestFixture::other().public_key);
    assert!(matches!(result, Err(VerifyError::SignatureNotFound(_))));
}

#[test]
fn test_gnupg_reference_message_verifies() {
    let fixture = TestFixture::publisher();
    assert!(Verifier::verify(GNUPG_EMPTY_DOCUMENT_MESSAGE, fixture.public_key).unwrap());
    assert_eq!(
        Verifier::signed_text(GNUPG_EMPTY_DOCUMENT_MESSAGE).unwrap(),
        canonical_digest(&Document::new()).unwrap().to_hex()
    );
}

#[test]
fn test_key_ring_with_both_keys() {
    for fixture in [TestFixture::publisher(), TestFixture::other()] {
        let block = fixture.signer().sign(&lesson()).unwrap();
        assert!(Verifier::verify_block(&block, KEY_RING).unwrap());
    }
}

#[test]
fn test_signature_missing_from_message() {
    let message = "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\nabc\n-----BEGIN PGP SIGNATURE-----\n";
    let result = Verifier::verify(message, TestFixture::publisher().public_key);
    assert!(matches!(result, Err(VerifyError::SignatureInvalid(_))));
}

#[test]
fn test_plain_text_is_message_invalid() {
    let result = Verifier::verify("not a signed message", TestFixture::publisher().public_key);
    assert!(matches!(result, Err(VerifyError::MessageInvalid(_))));
}

#[test]
fn test_key_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = TestFixture::other();
    let path = fixture.write_secret_key(dir.path()).unwrap();

    let signer = Signer::new(fixture.identity_with_key_file(&path));
    let block = signer.sign(&lesson()).unwrap();
    assert!(Verifier::verify_block(&block, fixture.public_key).unwrap());
}

#[test]
fn test_missing_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = TestFixture::publisher();
    let signer = Signer::new(fixture.identity_with_key_file(&dir.path().join("absent.asc")));

    assert!(matches!(
        signer.sign(&lesson()),
        Err(SignError::KeyStreamUnavailable { .. })
    ));
}

#[test]
fn test_public_key_file_is_no_signing_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("publisher.pub.asc");
    std::fs::write(&path, TestFixture::publisher().public_key).unwrap();

    let fixture = TestFixture::publisher();
    let signer = Signer::new(fixture.identity_with_key_file(&path));
    assert!(matches!(
        signer.sign(&lesson()),
        Err(SignError::NoSigningKey(_))
    ));
}

#[test]
fn test_wrong_pass_phrase_is_no_signing_key() {
    let fixture = TestFixture::publisher();
    let signer = Signer::new(SigningIdentity::new(
        fixture.public_key_location(),
        fixture.secret_key,
        "not the pass phrase",
    ));
    assert!(matches!(
        signer.sign(&lesson()),
        Err(SignError::NoSigningKey(_))
    ));
}

#[test]
fn test_empty_pass_phrase_is_null_field() {
    let fixture = TestFixture::publisher();
    let signer = Signer::new(SigningIdentity::new(
        fixture.public_key_location(),
        fixture.secret_key,
        "",
    ));
    assert!(matches!(
        signer.sign(&lesson()),
        Err(SignError::NullField("pass_phrase"))
    ));
}

#[test]
fn test_concurrent_signing() {
    let fixture = TestFixture::publisher();
    let signer = &fixture.signer();
    let docs = [lesson().with("n", 1), lesson().with("n", 2)];

    let blocks: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| s.spawn(move || signer.sign(doc)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });

    for (doc, block) in docs.iter().zip(&blocks) {
        assert!(Verifier::verify_block(block, fixture.public_key).unwrap());
        assert_eq!(
            Verifier::signed_text(block.signature()).unwrap(),
            canonical_digest(doc).unwrap().to_hex()
        );
    }
}
