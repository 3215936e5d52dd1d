use crate::vector::Vector2;
use rand::Rng;
use std::f64::consts::TAU;

pub fn vector(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// Builds a vector of length `len` pointing `angle` radians away from the
/// positive x-axis.
pub fn from_angle(angle: f64, len: f64) -> Vector2 {
    Vector2::new(len * angle.cos(), len * angle.sin())
}

/// Unit vector with a uniformly random heading, drawn from the thread-local
/// generator.
pub fn random_unit() -> Vector2 {
    let angle: f64 = rand::random_range(0.0..TAU);
    from_angle(angle, 1.0)
}

pub fn random_unit_with<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    let angle: f64 = rng.random_range(0.0..TAU);
    from_angle(angle, 1.0)
}

pub fn add_vector(v1: &Vector2, v2: &Vector2) -> Vector2 {
    let mut vadd = v1.copy();
    vadd.add(v2);
    vadd
}

pub fn sub_vector(v1: &Vector2, v2: &Vector2) -> Vector2 {
    let mut vsub = v1.copy();
    vsub.sub(v2);
    vsub
}

pub fn mult_vector(v: &Vector2, n: f64) -> Vector2 {
    let mut vmult = v.copy();
    vmult.mult(n);
    vmult
}

pub fn div_vector(v: &Vector2, n: f64) -> Vector2 {
    let mut vdiv = v.copy();
    vdiv.div(n);
    vdiv
}

pub fn dot_product(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.dot(v2)
}

pub fn cross_product(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.cross(v2)
}

/// Unit normal on the left of the direction `a0 -> a1`. A zero-length
/// segment gives the zero vector.
pub fn find_normal(a0: &Vector2, a1: &Vector2) -> Vector2 {
    let mut direction = sub_vector(a1, a0);
    direction.normalize();
    direction.perp()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::vector::tests::{close, close_vec};

    #[test]
    fn free_functions_leave_inputs_untouched() {
        let v = vector(1.0, 2.0);
        let w = vector(3.0, -1.0);
        assert_eq!(add_vector(&v, &w), vector(4.0, 1.0));
        assert_eq!(sub_vector(&v, &w), vector(-2.0, 3.0));
        assert_eq!(mult_vector(&v, 3.0), vector(3.0, 6.0));
        assert_eq!(div_vector(&v, 2.0), vector(0.5, 1.0));
        assert_eq!(dot_product(&v, &w), 1.0);
        assert_eq!(cross_product(&v, &w), -7.0);
        assert_eq!(v, vector(1.0, 2.0));
        assert_eq!(w, vector(3.0, -1.0));
    }

    #[test]
    fn div_vector_by_zero_is_not_trapped() {
        let v = div_vector(&vector(-1.0, 0.0), 0.0);
        assert_eq!(v.x, f64::NEG_INFINITY);
        assert!(v.y.is_nan());
    }

    #[test]
    fn from_angle_has_requested_heading_and_length() {
        let v = from_angle(FRAC_PI_2, 3.0);
        assert!(close_vec(&v, &vector(0.0, 3.0), 1e-12));
        let w = from_angle(PI / 3.0, 2.0);
        assert!(close(w.mag(), 2.0, 1e-12));
        assert!(close(w.heading(), PI / 3.0, 1e-12));
    }

    #[test]
    fn random_unit_is_unit_length() {
        for _ in 0..100 {
            assert!(close(random_unit().mag(), 1.0, 1e-12));
        }
    }

    #[test]
    fn seeded_random_unit_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let va = random_unit_with(&mut a);
            assert_eq!(va, random_unit_with(&mut b));
            assert!(close(va.mag(), 1.0, 1e-12));
        }
    }

    #[test]
    fn normal_is_left_of_direction() {
        let n = find_normal(&vector(0.0, 0.0), &vector(10.0, 0.0));
        assert_eq!(n, vector(-0.0, 1.0));
        let degenerate = find_normal(&vector(2.0, 2.0), &vector(2.0, 2.0));
        assert_eq!(degenerate.mag(), 0.0);
    }

    #[quickcheck]
    fn add_then_sub_is_identity(v: Vector2, w: Vector2) -> bool {
        sub_vector(&add_vector(&v, &w), &w) == v
    }

    #[quickcheck]
    fn div_then_mult_is_identity(v: Vector2, n: i16) -> TestResult {
        if n == 0 {
            return TestResult::discard();
        }
        let n = n as f64 / 8.0;
        TestResult::from_bool(close_vec(&mult_vector(&div_vector(&v, n), n), &v, 1e-12))
    }
}
