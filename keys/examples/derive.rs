use babyjub_keys::{PrivateKey, PublicKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = PrivateKey::random(&mut rng);
    let pk = PublicKey::try_from(&sk).expect("derive");

    println!("private scalar: {}", sk.scalar().value());
    println!("public key x:   {}", pk.point().x());
    println!("public key y:   {}", pk.point().y());

    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    assert_eq!(pk, pk2);
}
