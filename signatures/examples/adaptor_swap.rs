use curve::CurveParams;
use rand::SeedableRng;
use rand::rngs::StdRng;
use signatures::{schnorr, SigningKey, VerifyingKey};

fn main() {
    let curve = CurveParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);

    let sk = SigningKey::random(&mut rng, &curve);
    let vk = sk.verifying_key(&curve).expect("derive vk");

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    // The counterparty locks the swap behind T = t*G.
    let secret = SigningKey::random(&mut rng, &curve);
    let t = secret.verifying_key(&curve).expect("derive T").as_affine().clone();

    let hash = [0x42u8; 32];
    let adaptor = sk.sign_adaptor(&curve, &mut rng, &hash, &t).expect("adaptor sign");
    let adaptor_bytes = bincode::serialize(&adaptor).expect("serialize adaptor");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let adaptor2: schnorr::Signature = bincode::deserialize(&adaptor_bytes).expect("deserialize adaptor");
    assert_eq!(sk2, sk);

    let ok = vk2.verify_adaptor(&curve, &hash, &adaptor2, &t).expect("verify adaptor");
    assert!(ok);

    let completed = schnorr::complete_adaptor(&curve, &adaptor2, secret.scalar()).expect("complete");
    assert!(vk2.verify_schnorr(&curve, &hash, &completed));

    let recovered = schnorr::extract_secret(
        &curve,
        &hash,
        &completed.to_bytes(),
        &adaptor2.to_bytes(),
        &vk2.to_bytes(),
        &t,
    )
    .expect("extract");
    assert_eq!(&recovered, secret.scalar());
    println!("recovered adaptor secret {recovered:x}");
}
