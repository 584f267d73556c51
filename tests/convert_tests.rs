use num_rational::BigRational;
use num_traits::Zero;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use r2vec::{Covector2, Vector2, cov_to_vec, length, maximum_norm, vec_to_cov};

fn same_bits(a: [f64; 2], b: [f64; 2]) -> bool {
    a[0].to_bits() == b[0].to_bits() && a[1].to_bits() == b[1].to_bits()
}

#[quickcheck]
fn quickcheck_vector_round_trip_is_bit_exact(x: f64, y: f64) -> bool {
    let v = Vector2::new(x, y);
    same_bits(cov_to_vec(&vec_to_cov(&v)).into(), v.into())
}

#[quickcheck]
fn quickcheck_covector_round_trip_is_bit_exact(x: f64, y: f64) -> bool {
    let c = Covector2::new(x, y);
    same_bits(vec_to_cov(&cov_to_vec(&c)).into(), c.into())
}

#[quickcheck]
fn quickcheck_relabeling_preserves_norms(x: f64, y: f64) -> TestResult {
    if !(x.is_finite() && y.is_finite()) {
        return TestResult::discard();
    }
    let v = Vector2::new(x, y);
    let c = vec_to_cov(&v);
    TestResult::from_bool(length(&v) == length(&c) && maximum_norm(&v) == maximum_norm(&c))
}

fn exact_pairing(c: &Covector2<f64>, v: &Vector2<f64>) -> BigRational {
    let r = |value: f64| {
        if value == 0.0 {
            BigRational::zero()
        } else {
            BigRational::from_float(value).expect("finite input")
        }
    };
    r(c.x) * r(v.x) + r(c.y) * r(v.y)
}

#[quickcheck]
fn quickcheck_apply_small_integers_is_exact(a: i16, b: i16, x: i16, y: i16) -> bool {
    let c = Covector2::new(f64::from(a), f64::from(b));
    let v = Vector2::new(f64::from(x), f64::from(y));
    let expected = exact_pairing(&c, &v);
    BigRational::from_float(c.apply(&v)).unwrap_or_else(BigRational::zero) == expected
}

#[test]
fn apply_of_relabeled_vector_is_length_sq() {
    let v = Vector2::new(3.0, -4.0);
    assert_eq!(vec_to_cov(&v).apply(&v), 25.0);
}

#[test]
fn from_impls_match_free_functions() {
    let v = Vector2::new(1.25, -0.5);
    let c: Covector2<f64> = v.into();
    assert_eq!(c, vec_to_cov(&v));
    assert_eq!(Vector2::from(c), cov_to_vec(&c));
}
