//! Small 3-vector helpers shared by the forward and inverse solvers.

use nalgebra::Vector3;

#[inline]
pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a.cross(b)
}

#[inline]
pub fn dot(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b)
}

/// Euclidean length of a 3-vector.
#[inline]
pub fn norm(v: &Vector3<f64>) -> f64 {
    v.norm()
}

/// Euclidean length of the 2-vector `(a, b)`.
#[inline]
pub fn hypot2(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Signed angle from `a` to `b`, in (-pi, pi].
///
/// The magnitude is `atan2(|a x b|, a . b)`. The sign is taken from which side
/// of `reference` the vector `a` falls on: negative when `reference . a < 0`,
/// positive otherwise. `reference` must be transverse to the plane spanned by
/// `a` and `b` for the sign to carry meaning.
///
/// ```
/// use nalgebra::Vector3;
/// use sixdof_ik::vector::angle_between;
/// let angle = angle_between(&Vector3::x(), &Vector3::y(), &Vector3::z());
/// assert_eq!(angle, std::f64::consts::FRAC_PI_2);
/// ```
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>, reference: &Vector3<f64>) -> f64 {
    let magnitude = norm(&cross(a, b)).atan2(dot(a, b));
    if dot(reference, a) < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}
