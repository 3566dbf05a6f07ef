//! This module contains the math utils that mainly comes from `cgmath`.

pub use cgmath::*;

/// Component-wise reciprocal of `v`. Components whose magnitude is below
/// `epsilon` yield zero instead of an infinity.
#[inline]
pub fn inverse_safe(v: Vector3<f32>, epsilon: f32) -> Vector3<f32> {
    let inv = |c: f32| if c.abs() < epsilon { 0.0 } else { 1.0 / c };
    Vector3::new(inv(v.x), inv(v.y), inv(v.z))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inverse_safe_guards_zero() {
        let v = inverse_safe(Vector3::new(2.0, 0.0, -4.0), 1e-6);
        assert_eq!(v, Vector3::new(0.5, 0.0, -0.25));

        let v = inverse_safe(Vector3::new(1e-8, 1.0, 1.0), 1e-6);
        assert_eq!(v.x, 0.0);
    }
}
