use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_core::{
    fields::{primes, PrimeField},
    polynomial::{point::Point, point_sequence::PointSequence, Polynomial},
};
use num_bigint::BigUint;
use rand::{rngs::StdRng, SeedableRng};

const POINT_COUNT: u32 = 32;

fn bench_interpolate(c: &mut Criterion) {
    let field = PrimeField::new(primes::mersenne_127()).expect("field construction failed");
    let mut rng = StdRng::seed_from_u64(7);
    let constant = field.gen_random_element(&mut rng);
    let polynomial = Polynomial::gen_random(constant, POINT_COUNT, &field, &mut rng);

    let mut sequence = PointSequence::default();
    for x in 1..=POINT_COUNT {
        sequence.push(Point::new(x, polynomial.eval(&BigUint::from(x), &field)));
    }

    c.bench_function("interpolate at zero (32 points)", |b| {
        b.iter(|| {
            black_box(&sequence).lagrange_interpolate(&field).expect("interpolation failed");
        });
    });
}

criterion_group!(benches, bench_interpolate);
criterion_main!(benches);
