use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use f4_farfalle::{
    CubeFeistel, FarfalleLike, IteratedTransformation, LARGE_ROUNDS, SMALL_ROUNDS, STATE_WIDTH,
    derive_tables,
};
use f4_field::{Field, Gfp128};
use f4_symmetric::Permutation;

const PRIME_DOMAIN: &str = "GF(258439831533290445326983084816294483837)";

type Transform = IteratedTransformation<Gfp128, CubeFeistel, STATE_WIDTH>;

fn transforms() -> (Transform, Transform) {
    let (large, small) = derive_tables::<Gfp128>(PRIME_DOMAIN, LARGE_ROUNDS, SMALL_ROUNDS);
    let p_n = IteratedTransformation::new(LARGE_ROUNDS, large, CubeFeistel).unwrap();
    let p_r = IteratedTransformation::new(SMALL_ROUNDS, small, CubeFeistel).unwrap();
    (p_n, p_r)
}

fn bench_permutations(c: &mut Criterion) {
    let (p_n, p_r) = transforms();
    let mut state = [1, 2, 3, 4].map(Gfp128::new);

    let mut group = c.benchmark_group("iterated transformation");
    group.bench_function("large (134 rounds)", |b| {
        b.iter(|| p_n.permute_mut(black_box(&mut state)))
    });
    group.bench_function("small (10 rounds)", |b| {
        b.iter(|| p_r.permute_mut(black_box(&mut state)))
    });
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    const BLOCKS: usize = 64;

    let (p_n, p_r) = transforms();
    let authenc = FarfalleLike::new(p_n, p_r);
    let key = [Gfp128::new(1), Gfp128::new(2)];
    let message = vec![Gfp128::new(5); BLOCKS];

    let mut group = c.benchmark_group("farfalle encrypt");
    group.throughput(Throughput::Elements(BLOCKS as u64));
    group.bench_function("64 blocks", |b| {
        b.iter(|| {
            authenc
                .encrypt(black_box(&key), Gfp128::ONE, black_box(&message))
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_permutations, bench_encrypt);
criterion_main!(benches);
