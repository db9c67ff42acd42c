use any_sketch_crypto::P256SketchDecrypter;
use any_sketch_utils::elgamal::CommutativeElGamal;
use ark_std::rand::{prelude::StdRng, SeedableRng};
use benches::setup_sketch_encryption;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_utils::G;

fn sketch_encryption(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let register_counts = [100, 1000, 10000];
    let (unique, sum) = (2, 3);

    let mut group = c.benchmark_group("Sketch encryption");
    group.sample_size(10);
    for register_count in register_counts {
        let (encrypter, sketch) = setup_sketch_encryption(&mut rng, 100, register_count, unique, sum);
        group.bench_function(
            format!(
                "{} registers with {} values each",
                register_count,
                unique + sum
            ),
            |b| b.iter(|| encrypter.encrypt(&mut rng, black_box(&sketch)).unwrap()),
        );
    }
    group.finish();
}

fn counter_table(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let mut group = c.benchmark_group("Decrypter creation");
    group.sample_size(10);
    for max_counter_value in [10, 100, 1000] {
        let cipher = CommutativeElGamal::<G>::new_key_pair(&mut rng);
        group.bench_function(format!("max counter value {}", max_counter_value), |b| {
            b.iter(|| P256SketchDecrypter::new(cipher.clone(), black_box(max_counter_value)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, sketch_encryption, counter_table);
criterion_main!(benches);
