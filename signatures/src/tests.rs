use super::*;
use curve::{Affine, CurveParams};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::{Digest, Sha256};

fn digest(msg: &[u8]) -> [u8; HASH_SIZE] {
    Sha256::digest(msg).into()
}

#[test]
fn test_ecdsa_sign_verify() {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let hash = digest(b"hello ecdsa");

    let sig = sk.sign_ecdsa(&curve, &mut rng, &hash).expect("sign");
    assert!(sig.is_low_s(&curve));

    let ok = ecdsa::verify(&curve, &hash, &sig.to_bytes(), &pk.to_bytes()).expect("verify");
    assert!(ok);
}

#[test]
fn test_ecdsa_rejects_wrong_message() {
    let curve = CurveParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let sig = sk.sign_ecdsa(&curve, &mut rng, &digest(b"pay 10")).expect("sign");

    let ok = pk.verify_ecdsa(&curve, &digest(b"pay 11"), &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_ecdsa_rejects_wrong_key() {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng, &curve);
    let hash = digest(b"message");
    let sig = sk.sign_ecdsa(&curve, &mut rng, &hash).expect("sign");

    let wrong_pk = SigningKey::random(&mut rng, &curve)
        .verifying_key(&curve)
        .expect("derive");
    let ok = wrong_pk.verify_ecdsa(&curve, &hash, &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_ecdsa_rejects_flipped_bits() {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(7);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive").to_bytes();
    let hash = digest(b"bit flips");
    let sig = sk.sign_ecdsa(&curve, &mut rng, &hash).expect("sign").to_bytes();

    for byte in [0, 17, 31, 32, 50, 63] {
        let mut tampered = sig;
        tampered[byte] ^= 0x01;
        let ok = ecdsa::verify(&curve, &hash, &tampered, &pk).expect("verify");
        assert!(!ok, "flipped byte {byte} still verifies");
    }
}

#[test]
fn test_ecdsa_rejects_high_s_twin() {
    let curve = CurveParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(3);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let hash = digest(b"malleable");
    let sig = sk.sign_ecdsa(&curve, &mut rng, &hash).expect("sign");

    let high = ecdsa::Signature::new(sig.r.clone(), &curve.n - &sig.s);
    assert!(!high.is_low_s(&curve));
    assert!(!pk.verify_ecdsa(&curve, &hash, &high).expect("verify"));
    assert_eq!(high.normalize_s(&curve), sig);
}

#[test]
fn test_ecdsa_buffer_lengths() {
    let curve = CurveParams::secp256r1();
    let hash = [0u8; HASH_SIZE];
    let pk = curve.generator().to_bytes();

    for len in [0, 63, 65] {
        let sig = vec![1u8; len];
        assert_eq!(
            ecdsa::verify(&curve, &hash, &sig, &pk),
            Err(SignatureError::InvalidLength {
                expected: ECDSA_SIG_SIZE,
                actual: len
            })
        );
    }

    let sig = [1u8; ECDSA_SIG_SIZE];
    assert_eq!(
        ecdsa::verify(&curve, &hash, &sig, &pk[..63]),
        Err(SignatureError::InvalidLength {
            expected: PK_SIZE,
            actual: 63
        })
    );
}

#[test]
fn test_schnorr_sign_verify_all_curves() {
    let mut rng = StdRng::seed_from_u64(42);
    let hash = digest(b"hello schnorr");

    for curve in [
        CurveParams::secp256r1(),
        CurveParams::secp256k1(),
        CurveParams::brainpool_p256r1(),
    ] {
        let sk = SigningKey::random(&mut rng, &curve);
        let pk = sk.verifying_key(&curve).expect("derive");
        let sig = sk.sign_schnorr(&curve, &mut rng, &hash).expect("sign");

        assert!(pk.verify_schnorr(&curve, &hash, &sig));
        let ok = schnorr::verify(&curve, &hash, &sig.to_bytes(), &pk.to_bytes()).expect("verify");
        assert!(ok);
    }
}

#[test]
fn test_schnorr_rejects_wrong_message_and_key() {
    let curve = CurveParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(11);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let hash = digest(b"original");
    let sig = sk.sign_schnorr(&curve, &mut rng, &hash).expect("sign");

    assert!(!pk.verify_schnorr(&curve, &digest(b"forged"), &sig));

    let wrong_pk = SigningKey::random(&mut rng, &curve)
        .verifying_key(&curve)
        .expect("derive");
    assert!(!wrong_pk.verify_schnorr(&curve, &hash, &sig));
}

#[test]
fn test_brainpool_ecdsa() {
    let curve = CurveParams::brainpool_p256r1();
    let mut rng = StdRng::seed_from_u64(5);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let hash = digest(b"brainpool");

    let sig = sk.sign_ecdsa(&curve, &mut rng, &hash).expect("sign");
    assert!(pk.verify_ecdsa(&curve, &hash, &sig).expect("verify"));
}

#[test]
fn test_adaptor_round_trip() {
    let curve = CurveParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let hash = digest(b"atomic swap");

    let secret = SigningKey::random(&mut rng, &curve);
    let t: Affine = secret.verifying_key(&curve).expect("derive").as_affine().clone();

    let adaptor = sk.sign_adaptor(&curve, &mut rng, &hash, &t).expect("adaptor sign");
    assert!(pk.verify_adaptor(&curve, &hash, &adaptor, &t).expect("verify adaptor"));
    assert!(!pk.verify_schnorr(&curve, &hash, &adaptor));

    let completed = schnorr::complete_adaptor(&curve, &adaptor, secret.scalar()).expect("complete");
    assert!(pk.verify_schnorr(&curve, &hash, &completed));

    let extracted = schnorr::extract_secret(
        &curve,
        &hash,
        &completed.to_bytes(),
        &adaptor.to_bytes(),
        &pk.to_bytes(),
        &t,
    )
    .expect("extract");
    assert_eq!(&extracted, secret.scalar());
}

#[test]
fn test_extract_refuses_unrelated_signature() {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(8);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let hash = digest(b"swap");

    let secret = SigningKey::random(&mut rng, &curve);
    let t = secret.verifying_key(&curve).expect("derive").as_affine().clone();
    let adaptor = sk.sign_adaptor(&curve, &mut rng, &hash, &t).expect("adaptor sign");

    // A valid signature on the same message that was not completed from the adaptor.
    let unrelated = sk.sign_schnorr(&curve, &mut rng, &hash).expect("sign");
    let result = schnorr::extract_secret(
        &curve,
        &hash,
        &unrelated.to_bytes(),
        &adaptor.to_bytes(),
        &pk.to_bytes(),
        &t,
    );
    assert_eq!(result, Err(SignatureError::UnverifiedAdaptor));
}

#[test]
fn test_adaptor_rejects_wrong_adaptor_point() {
    let curve = CurveParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(13);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");
    let hash = digest(b"adaptor");

    let t = SigningKey::random(&mut rng, &curve)
        .verifying_key(&curve)
        .expect("derive")
        .as_affine()
        .clone();
    let other_t = SigningKey::random(&mut rng, &curve)
        .verifying_key(&curve)
        .expect("derive")
        .as_affine()
        .clone();

    let adaptor = sk.sign_adaptor(&curve, &mut rng, &hash, &t).expect("adaptor sign");
    assert!(!pk.verify_adaptor(&curve, &hash, &adaptor, &other_t).expect("verify"));
}

#[test]
fn test_keys_bytes_round_trip() {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(21);
    let sk = SigningKey::random(&mut rng, &curve);
    let pk = sk.verifying_key(&curve).expect("derive");

    assert_eq!(SigningKey::from_bytes(&sk.to_bytes(), &curve), Ok(sk));
    assert_eq!(VerifyingKey::from_bytes(&pk.to_bytes(), &curve), Ok(pk));
    assert_eq!(
        SigningKey::from_bytes(&[0u8; SK_SIZE], &curve),
        Err(SignatureError::InvalidScalar)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_schnorr_verifies_any_message(seed in any::<u64>(), msg in any::<[u8; 32]>()) {
        let curve = CurveParams::secp256k1();
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = SigningKey::random(&mut rng, &curve);
        let pk = sk.verifying_key(&curve).expect("derive");
        let sig = sk.sign_schnorr(&curve, &mut rng, &msg).expect("sign");
        prop_assert!(pk.verify_schnorr(&curve, &msg, &sig));
    }
}
