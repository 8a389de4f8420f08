//! Flat 4x4 matrix and 3-vector math
//!
//! Matrices are 16 `f32` in row-major order: element (row `r`, column `c`)
//! lives at `r * 4 + c`. Vectors are row vectors multiplied on the left of a
//! matrix (`v' = v * M`), so translations sit in the last row.
//!
//! Every function is pure. None of them validate their input: degenerate
//! parameters (singular matrices, `near == far`, zero vectors) produce
//! non-finite numbers instead of errors. The only exception is [`normalize`],
//! which falls back to the zero vector. See [`crate::checked`] for variants
//! that report degenerate input.

mod compose;
mod construct;
mod vector;
mod view;

pub use compose::{
    bezier_offset, multiply, rotate_around_point, scale, translate, translate_bezier,
    translation_bezier, x_rotate, y_rotate, z_rotate,
};
pub use construct::{
    identity, orthographic, perspective, point_rotation, scaling, translation, x_rotation,
    y_rotation, z_rotation,
};
pub use vector::{cross, length, normalize, subtract, transform_vector, NORMALIZE_EPSILON};
pub use view::{determinant, inverse, look_at};

/// A 4x4 matrix stored row-major
pub type Mat4 = [f32; 16];

/// A point or direction in 3D space
pub type Vec3 = [f32; 3];

/// A homogeneous 4-component vector
pub type Vec4 = [f32; 4];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// Element-wise comparison used by tests and by callers that need to
/// compare composed matrices.
pub fn approx_eq(a: &Mat4, b: &Mat4, tolerance: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Convert into an nalgebra matrix holding the same transform for
/// column vectors (the transpose of the row-major layout).
pub fn to_nalgebra(m: &Mat4) -> nalgebra::Matrix4<f32> {
    nalgebra::Matrix4::from_row_slice(m).transpose()
}

/// Inverse of [`to_nalgebra`].
pub fn from_nalgebra(m: &nalgebra::Matrix4<f32>) -> Mat4 {
    let mut out = [0.0; 16];
    // nalgebra storage is column-major, which is our row-major transpose.
    out.copy_from_slice(m.as_slice());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nalgebra_conversion_preserves_transform() {
        let m = translate(&x_rotation(0.4), 5.0, -2.0, 7.0);
        let na = to_nalgebra(&m);
        let p = na.transform_point(&nalgebra::Point3::new(1.0, 2.0, 3.0));
        let v = transform_vector(&m, [1.0, 2.0, 3.0, 1.0]);
        assert!((p.x - v[0]).abs() < 1e-5);
        assert!((p.y - v[1]).abs() < 1e-5);
        assert!((p.z - v[2]).abs() < 1e-5);
        assert!(approx_eq(&from_nalgebra(&na), &m, 0.0));
    }

    #[test]
    fn test_multiply_matches_nalgebra_column_product() {
        let a = translate(&y_rotation(1.1), 3.0, 4.0, 5.0);
        let b = scale(&z_rotation(-0.3), 2.0, 0.5, 1.5);
        // Applying b first then a is `A * B` for column vectors.
        let expected = from_nalgebra(&(to_nalgebra(&a) * to_nalgebra(&b)));
        assert!(approx_eq(&multiply(&a, &b), &expected, 1e-5));
    }
}
