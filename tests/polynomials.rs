//! Algebraic laws of monomials and diagrams.
//!
//! Tests cover monomial arithmetic, the ring laws of diagrams, enumeration
//! order, and diagrams that were built in separate tables.

use std::rc::Rc;

use num_bigint::BigUint;
use polyzdd::monomial::Monomial;
use polyzdd::ring::Ring;
use polyzdd::zdd::Zdd;

fn ring4() -> Rc<Ring> {
    Rc::new(Ring::with_size(4))
}

fn abc(ring: &Rc<Ring>) -> (Monomial, Monomial, Monomial) {
    (ring.var(0), ring.var(1), ring.var(2))
}

// ─── Monomial Laws ─────────────────────────────────────────────────────────────

#[test]
fn monomial_divisibility() {
    let ring = ring4();
    let (a, _, _) = abc(&ring);
    let one = ring.one();

    assert!(one.is_divisible_by(&one));
    assert!(!one.is_divisible_by(&a));
    assert!(a.is_divisible_by(&one));
}

#[test]
fn monomial_multiplication() {
    let ring = ring4();
    let (a, b, _) = abc(&ring);

    assert_eq!(&a * &a, a);
    assert_eq!(&a * &ring.one(), a);
    assert!((&a * &ring.zero()).is_zero());
    assert_eq!(&a * &b, ring.monomial([0, 1]));
    assert_eq!(&a * &b, a.lcm(&b));
}

#[test]
fn monomial_division() {
    let ring = ring4();
    let (a, b, c) = abc(&ring);
    let ab = &a * &b;
    let bc = &b * &c;
    let abc = &ab * &c;

    assert!((&ring.one() / &a).is_zero());
    assert_eq!(&a / &ring.one(), a);
    assert!((&a / &b).is_zero());
    assert_eq!(&ab / &b, a);
    assert_eq!(&ab / &a, b);
    assert_eq!(&abc / &ab, c);
    assert!((&ab / &bc).is_zero());
}

#[test]
fn monomial_relative_primality() {
    let ring = ring4();
    let (a, b, _) = abc(&ring);

    assert!(a.is_relatively_prime(&b));
    assert!(!(&a * &b).is_relatively_prime(&b));
}

#[test]
fn monomial_ring_mismatch() {
    let a = ring4().var(0);
    let other = Rc::new(Ring::with_size(3)).var(0);

    assert!(a.try_divide(&other).is_err());
    assert!(a.try_is_divisible_by(&other).is_err());
    assert_ne!(a, other);
}

// ─── Diagram Laws ──────────────────────────────────────────────────────────────

fn sample(ring: &Rc<Ring>) -> Vec<Zdd> {
    let (a, b, c) = abc(ring);
    vec![
        Zdd::zero(ring),
        Zdd::one(ring),
        Zdd::from_monomial(&a),
        Zdd::from_monomial(&(&a * &b)),
        Zdd::from_monomials(ring, [&a, &b, &c]),
        Zdd::from_monomials(ring, [&(&a * &c), &b, &ring.one()]),
        Zdd::from_monomials(ring, [&(&b * &c), &ring.var(3), &(&a * &ring.var(3))]),
    ]
}

#[test]
fn self_cancellation() {
    let ring = ring4();
    for d in sample(&ring) {
        assert!((&d + &d).is_zero(), "{} + {} is not zero", d, d);
    }
}

#[test]
fn idempotent_product() {
    let ring = ring4();
    for d in sample(&ring) {
        assert_eq!(&d * &d, d);
    }
}

#[test]
fn identities() {
    let ring = ring4();
    let zero = Zdd::zero(&ring);
    let one = Zdd::one(&ring);
    for d in sample(&ring) {
        assert_eq!(&d + &zero, d);
        assert_eq!(&zero + &d, d);
        assert_eq!(&d * &one, d);
        assert_eq!(&one * &d, d);
        assert_eq!(&d * &zero, zero);
        assert!((&zero * &d).is_zero());
    }
}

#[test]
fn commutativity_and_distributivity() {
    let ring = ring4();
    let ds = sample(&ring);
    for x in &ds {
        for y in &ds {
            assert_eq!(x + y, y + x);
            assert_eq!(x * y, y * x);
            for z in &ds {
                assert_eq!(x * &(y + z), &(x * y) + &(x * z));
            }
        }
    }
}

#[test]
fn constant_term_toggles() {
    let ring = ring4();
    let a = Zdd::from_var(&ring, 0);
    let one = Zdd::one(&ring);

    let a1 = &a + &one;
    assert_eq!(a1.to_string(), "a + 1");
    assert_eq!(&a1 + &one, a);
    // (a + 1)·a = a + a = 0
    assert!((&a1 * &a).is_zero());
}

// ─── Enumeration ───────────────────────────────────────────────────────────────

#[test]
fn single_monomial_enumeration() {
    let ring = ring4();
    for vars in [vec![], vec![0], vec![3], vec![1, 2], vec![0, 1, 2, 3]] {
        let m = ring.monomial(vars);
        let zdd = Zdd::from_monomial(&m);
        assert_eq!(zdd.iter().collect::<Vec<_>>(), vec![m.clone()]);
        assert_eq!(zdd.leading_monomial(), &m);
    }
}

#[test]
fn pair_enumeration_order() {
    let ring = ring4();
    let m1 = ring.monomial([1, 3]);
    let m2 = ring.monomial([0, 2]);
    let zdd = Zdd::from_monomial(&m1) + Zdd::from_monomial(&m2);

    // ac > bd: the monomial with the lowest differing variable comes first.
    assert_eq!(zdd.iter().collect::<Vec<_>>(), vec![m2, m1]);
    assert_eq!(zdd.count(), BigUint::from(2u32));
}

#[test]
fn end_to_end() {
    let ring = ring4();
    let ab = ring.monomial([0, 1]);
    let b = ring.var(1);
    let c = ring.var(2);

    let d1 = Zdd::from_monomial(&ab) + Zdd::from_monomial(&c);
    assert_eq!(d1.iter().collect::<Vec<_>>(), vec![ab.clone(), c.clone()]);
    assert_eq!(d1.to_string(), "ab + c");

    // b·ab = ab and b·c = bc
    let product = &d1 * &Zdd::from_monomial(&b);
    let expected = Zdd::from_monomial(&ab) + Zdd::from_monomial(&(&b * &c));
    assert_eq!(product, expected);
    assert_eq!(product.to_string(), "ab + bc");
    assert_eq!(&d1 * &b, product);
}

#[test]
fn copy_is_independent() {
    let ring = ring4();
    let original = Zdd::from_monomials(&ring, [&ring.var(0), &ring.var(1)]);
    let copy = original.clone();
    let sum = &copy + &ring.var(2);

    assert_eq!(copy, original);
    assert_eq!(original.to_string(), "a + b");
    assert_eq!(sum.to_string(), "a + b + c");
    assert!(copy.is_isomorphic(&original));
}

// ─── Independently Built Diagrams ──────────────────────────────────────────────

/// Builds `a·b + b·c + d` with its own table, adding terms in the given order.
fn build(ring: &Rc<Ring>, order: &[usize]) -> Zdd {
    let terms = [ring.monomial([0, 1]), ring.monomial([1, 2]), ring.var(3)];
    let mut acc = Zdd::zero(ring);
    for &k in order {
        acc += Zdd::from_monomial(&terms[k]);
    }
    acc
}

#[test]
fn independent_equal_diagrams_cancel() {
    let ring = ring4();
    let f = build(&ring, &[0, 1, 2]);
    let g = build(&ring, &[2, 0, 1]);

    assert_ne!(f.table_size(), 0);
    assert!(f.is_isomorphic(&g));
    assert_eq!(f, g);
    assert!((&f + &g).is_zero());
    assert_eq!(&f * &g, f);
    assert!((&f * &g).is_isomorphic(&g));
}

#[test]
fn independent_diagrams_share_no_stale_nodes() {
    let ring = ring4();
    let f = build(&ring, &[0, 1]);
    let g = build(&ring, &[1, 2]);

    // f + g = ab + d
    let sum = &f + &g;
    let expected = Zdd::from_monomials(&ring, [&ring.monomial([0, 1]), &ring.var(3)]);
    assert_eq!(sum, expected);
    assert!(sum.is_isomorphic(&expected));

    // Result nodes live in a copy of f's table; neither operand grew.
    assert!(sum.table_size() >= f.table_size());
    assert_eq!(f.to_string(), "ab + bc");
    assert_eq!(g.to_string(), "bc + d");
}

#[test]
fn leading_monomial_is_maximum() {
    let ring = ring4();
    for d in sample(&ring) {
        let max = d.iter().max().unwrap_or_else(|| ring.zero());
        assert_eq!(d.leading_monomial(), &max);
    }
}
