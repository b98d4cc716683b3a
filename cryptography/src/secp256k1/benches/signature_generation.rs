use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use sigkey_cryptography::secp256k1::PrivateKey;
use std::hint::black_box;

fn benchmark_signature_generation(c: &mut Criterion) {
    for message_length in [32, 1000, 10000].into_iter() {
        let mut msg = vec![0u8; message_length];
        thread_rng().fill(msg.as_mut_slice());
        c.bench_function(&format!("{}/msg_len={}", module_path!(), msg.len()), |b| {
            b.iter_batched(
                || PrivateKey::from_rng(&mut thread_rng()),
                |signer| {
                    black_box(signer.sign(&msg).unwrap());
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, benchmark_signature_generation);
