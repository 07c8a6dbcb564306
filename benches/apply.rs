//! Apply benchmarks.
//!
//! These benchmarks measure `add` and `mul` on random polynomials, including
//! the cost of copying the left table and importing the right operand.
//!
//! Run with:
//! ```bash
//! cargo bench --bench apply
//! ```

use std::rc::Rc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polyzdd::monomial::Monomial;
use polyzdd::ring::Ring;
use polyzdd::zdd::Zdd;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Helper: Random Polynomial
// ============================================================================

/// Build a random polynomial with `num_terms` monomials of density `p`.
fn random_polynomial(ring: &Rc<Ring>, num_terms: usize, p: f64, seed: u64) -> Zdd {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let monomials: Vec<Monomial> = (0..num_terms)
        .map(|_| ring.monomial((0..ring.size()).filter(|_| rng.random_bool(p))))
        .collect();
    Zdd::from_monomials(ring, &monomials)
}

// ============================================================================
// Benchmark: Addition
// ============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("zdd/add");

    for num_vars in [16, 32, 64] {
        let ring = Rc::new(Ring::with_size(num_vars));
        let f = random_polynomial(&ring, 200, 0.2, 1);
        let g = random_polynomial(&ring, 200, 0.2, 2);

        group.bench_with_input(BenchmarkId::new("terms=200", num_vars), &(f, g), |b, (f, g)| {
            b.iter(|| f + g);
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Multiplication
// ============================================================================

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("zdd/mul");
    group.sample_size(10);

    for num_terms in [10, 20, 40] {
        let ring = Rc::new(Ring::with_size(24));
        let f = random_polynomial(&ring, num_terms, 0.15, 3);
        let g = random_polynomial(&ring, num_terms, 0.15, 4);

        group.bench_with_input(BenchmarkId::new("vars=24", num_terms), &(f, g), |b, (f, g)| {
            b.iter(|| f * g);
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Enumeration
// ============================================================================

fn bench_iter(c: &mut Criterion) {
    let ring = Rc::new(Ring::with_size(32));
    let f = random_polynomial(&ring, 1000, 0.2, 5);

    c.bench_function("zdd/iter/terms=1000", |b| {
        b.iter(|| f.iter().count());
    });
}

criterion_group!(benches, bench_add, bench_mul, bench_iter);
criterion_main!(benches);
