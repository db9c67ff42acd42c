use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uniform_prng::{AesCtrPrng, UniformPseudorandomGenerator};

fn pseudorandom_bytes(c: &mut Criterion) {
    let key = [1u8; 32];
    let iv = [0u8; 16];
    for num_bytes in [1, 100, 1 << 20] {
        let mut prng = AesCtrPrng::new(&key, &iv).unwrap();
        c.bench_function(format!("AES-CTR PRNG {} bytes", num_bytes).as_str(), |b| {
            b.iter(|| prng.pseudorandom_bytes(black_box(num_bytes)).unwrap())
        });
    }
}

criterion_group!(benches, pseudorandom_bytes);
criterion_main!(benches);
