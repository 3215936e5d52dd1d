//! Segment queries built on [`Vector2`].
//!
//! Both queries report "nothing found" as `None` instead of falling back to
//! some nearby answer, so callers have to check before using the result.

use crate::library::*;
use crate::vector::Vector2;

/// Where the open segments `a0 -> a1` and `b0 -> b1` cross.
///
/// Returns the crossing point together with its parameter `s` along
/// `a0 -> a1`. Touching at an endpoint does not count, and parallel or
/// collinear segments never intersect.
pub fn segment_intersect(
    a0: &Vector2,
    a1: &Vector2,
    b0: &Vector2,
    b1: &Vector2,
) -> Option<(Vector2, f64)> {
    let a = sub_vector(a1, a0);
    let b = sub_vector(b1, b0);
    let den1 = a.cross(&b);
    let den2 = b.cross(&a);

    if den1 == 0.0 {
        log::trace!("segments {a0:?}->{a1:?} and {b0:?}->{b1:?} are parallel");
        return None;
    }

    let s = sub_vector(b0, a0).cross(&b) / den1;
    let u = sub_vector(a0, b0).cross(&a) / den2;
    if s > 0.0 && s < 1.0 && u > 0.0 && u < 1.0 {
        let p = add_vector(a0, &mult_vector(&a, s));
        return Some((p, s));
    }
    log::trace!("segments do not cross between their endpoints (s = {s}, u = {u})");
    None
}

/// Distance from `p` to the segment `a0 -> a1`.
///
/// Only answers when the foot of the perpendicular from `p` lands on the
/// segment, past `a0` and up to and including `a1`. Otherwise, and for a
/// zero-length segment, the result is `None`; the distance to the nearer
/// endpoint is not substituted.
pub fn min_distance_point_to_segment(p: &Vector2, a0: &Vector2, a1: &Vector2) -> Option<f64> {
    let mut a0a1 = sub_vector(a1, a0);
    let a0p = sub_vector(p, a0);
    let magnitude = a0a1.mag();

    // scalar projection of a0p onto the segment direction
    a0a1.normalize();
    let sp = a0a1.dot(&a0p);

    if sp > 0.0 && sp <= magnitude {
        a0a1.mult(sp);
        return Some(sub_vector(&a0p, &a0a1).mag());
    }
    log::trace!("perpendicular foot of {p:?} is off the segment (projection {sp}, length {magnitude})");
    None
}

/// A finite piece of line between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vector2,
    pub b: Vector2,
}

impl Segment {
    pub fn new(a: Vector2, b: Vector2) -> Segment {
        Segment { a, b }
    }

    /// Unit vector from `a` towards `b`, zero for a degenerate segment.
    pub fn direction(&self) -> Vector2 {
        let mut vec = sub_vector(&self.b, &self.a);
        vec.normalize();
        vec
    }

    pub fn length(&self) -> f64 {
        self.a.dist(&self.b)
    }

    pub fn normal(&self) -> Vector2 {
        find_normal(&self.a, &self.b)
    }

    pub fn intersect(&self, other: &Segment) -> Option<(Vector2, f64)> {
        segment_intersect(&self.a, &self.b, &other.a, &other.b)
    }

    pub fn distance_to(&self, p: &Vector2) -> Option<f64> {
        min_distance_point_to_segment(p, &self.a, &self.b)
    }
}

impl From<([f64; 2], [f64; 2])> for Segment {
    fn from((a, b): ([f64; 2], [f64; 2])) -> Segment {
        Segment::new(a.into(), b.into())
    }
}
