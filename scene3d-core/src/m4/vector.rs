/// 3-vector helpers and homogeneous vector transform
use super::{Mat4, Vec3, Vec4};

/// Vectors shorter than this normalize to zero instead of blowing up.
pub const NORMALIZE_EPSILON: f32 = 0.00001;

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn length(v: Vec3) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Unit vector in the direction of `v`, or `[0, 0, 0]` when `v` is too
/// short to have a meaningful direction.
pub fn normalize(v: Vec3) -> Vec3 {
    let length = length(v);
    if length > NORMALIZE_EPSILON {
        [v[0] / length, v[1] / length, v[2] / length]
    } else {
        [0.0, 0.0, 0.0]
    }
}

/// `v * m` with `v` as a row vector.
pub fn transform_vector(m: &Mat4, v: Vec4) -> Vec4 {
    let mut dst = [0.0; 4];
    for (i, out) in dst.iter_mut().enumerate() {
        for (j, component) in v.iter().enumerate() {
            *out += component * m[j * 4 + i];
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::m4::{identity, scaling};

    #[test]
    fn test_normalize() {
        assert_eq!(normalize([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(normalize([3.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);

        let v = normalize([1.0, 2.0, 2.0]);
        assert!((length(v) - 1.0).abs() < 1e-6);
        assert!((v[1] - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_epsilon_threshold() {
        assert_eq!(normalize([0.000009, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        let tiny = normalize([0.00002, 0.0, 0.0]);
        assert!((tiny[0] - 1.0).abs() < 1e-6, "{tiny:?}");
    }

    #[test]
    fn test_cross_and_subtract() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
        assert_eq!(subtract([5.0, 3.0, 1.0], [1.0, 1.0, 1.0]), [4.0, 2.0, 0.0]);
    }

    #[test]
    fn test_transform_vector_row_convention() {
        let v = [1.0, 2.0, 3.0, 1.0];
        assert_eq!(transform_vector(&identity(), v), v);
        assert_eq!(transform_vector(&scaling(2.0, 3.0, 4.0), v), [2.0, 6.0, 12.0, 1.0]);

        let mut m = [0.0; 16];
        // Row 0 column 1: x feeds y.
        m[1] = 1.0;
        assert_eq!(transform_vector(&m, v), [0.0, 1.0, 0.0, 0.0]);
    }
}
