/// Matrix composition and incremental transforms
use super::construct::{point_rotation, scaling, translation, x_rotation, y_rotation, z_rotation};
use super::Mat4;

/// Bézier control offsets shared by both axes of [`translation_bezier`].
const BEZIER_START: f32 = 0.0;
const BEZIER_CONTROL_1: f32 = 50.0;
const BEZIER_CONTROL_2: f32 = 100.0;

/// Row-major product `b * a`.
///
/// For row vectors this applies `b` first and `a` second, which is what lets
/// `translate`, `x_rotate` and friends append a transform that acts on the
/// model before everything already accumulated in `a`.
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = (0..4).map(|k| b[row * 4 + k] * a[k * 4 + col]).sum();
        }
    }
    out
}

pub fn translate(m: &Mat4, tx: f32, ty: f32, tz: f32) -> Mat4 {
    multiply(m, &translation(tx, ty, tz))
}

pub fn x_rotate(m: &Mat4, angle: f32) -> Mat4 {
    multiply(m, &x_rotation(angle))
}

pub fn y_rotate(m: &Mat4, angle: f32) -> Mat4 {
    multiply(m, &y_rotation(angle))
}

pub fn z_rotate(m: &Mat4, angle: f32) -> Mat4 {
    multiply(m, &z_rotation(angle))
}

pub fn scale(m: &Mat4, sx: f32, sy: f32, sz: f32) -> Mat4 {
    multiply(m, &scaling(sx, sy, sz))
}

/// Appends `translation(-p)`, `point_rotation(angle)` and `translation(p)`
/// to `m`, in that order.
///
/// Because each step is appended with [`multiply`], a row vector meets them
/// in reverse: it is moved by `+p`, rotated, then moved by `-p`. The point
/// that stays in place is therefore `-p`.
pub fn rotate_around_point(m: &Mat4, angle: f32, px: f32, py: f32, pz: f32) -> Mat4 {
    let matrix = translate(m, -px, -py, -pz);
    let matrix = multiply(&matrix, &point_rotation(angle));
    translate(&matrix, px, py, pz)
}

/// Cubic Bézier from 0 to `end` through the fixed control offsets 50 and
/// 100, evaluated at `t` in `[0, 1]`.
pub fn bezier_offset(end: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    BEZIER_START * u.powi(3)
        + BEZIER_CONTROL_1 * 3.0 * u.powi(2) * t
        + BEZIER_CONTROL_2 * 3.0 * u * t.powi(2)
        + end * t.powi(3)
}

/// Translation along a 2D Bézier path ending at `(end_x, end_y)`.
///
/// `t` is the curve parameter, not a Z offset; Z is always 0.
pub fn translation_bezier(end_x: f32, end_y: f32, t: f32) -> Mat4 {
    translation(bezier_offset(end_x, t), bezier_offset(end_y, t), 0.0)
}

pub fn translate_bezier(m: &Mat4, end_x: f32, end_y: f32, t: f32) -> Mat4 {
    multiply(m, &translation_bezier(end_x, end_y, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::m4::{approx_eq, identity, transform_vector};
    use std::f32::consts::FRAC_PI_2;

    fn samples() -> [Mat4; 3] {
        [
            translate(&x_rotation(0.3), 10.0, -20.0, 5.0),
            scale(&y_rotation(-1.2), 2.0, 3.0, 0.5),
            z_rotate(&translation(-4.0, 8.0, 1.0), 2.2),
        ]
    }

    #[test]
    fn test_multiply_is_associative() {
        let [a, b, c] = samples();
        let left = multiply(&multiply(&a, &b), &c);
        let right = multiply(&a, &multiply(&b, &c));
        assert!(approx_eq(&left, &right, 1e-4));
    }

    #[test]
    fn test_identity_is_neutral() {
        for m in samples() {
            assert_eq!(multiply(&m, &identity()), m);
            assert_eq!(multiply(&identity(), &m), m);
        }
    }

    #[test]
    fn test_appended_transform_applies_first() {
        // translate, then rotate: the model is rotated about its own origin
        // and only then moved.
        let m = x_rotate(&translate(&identity(), 0.0, 10.0, 0.0), FRAC_PI_2);
        let p = transform_vector(&m, [0.0, 1.0, 0.0, 1.0]);
        assert!(p[0].abs() < 1e-5);
        assert!((p[1] - 10.0).abs() < 1e-5);
        assert!((p[2] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_wrappers_match_explicit_multiply() {
        let base = translation(1.0, 2.0, 3.0);
        assert_eq!(scale(&base, 2.0, 2.0, 2.0), multiply(&base, &scaling(2.0, 2.0, 2.0)));
        assert_eq!(y_rotate(&base, 0.5), multiply(&base, &y_rotation(0.5)));
    }

    #[test]
    fn test_rotate_around_point_composition() {
        let m = translation(5.0, 0.0, 0.0);
        let expected = multiply(
            &multiply(&multiply(&m, &translation(-1.0, -2.0, 0.0)), &point_rotation(0.8)),
            &translation(1.0, 2.0, 0.0),
        );
        assert_eq!(rotate_around_point(&m, 0.8, 1.0, 2.0, 0.0), expected);
    }

    #[test]
    fn test_rotate_around_point_keeps_negated_pivot() {
        let m = rotate_around_point(&identity(), 1.3, 30.0, -40.0, 0.0);
        let fixed = transform_vector(&m, [-30.0, 40.0, 0.0, 1.0]);
        assert!((fixed[0] + 30.0).abs() < 1e-3, "{fixed:?}");
        assert!((fixed[1] - 40.0).abs() < 1e-3, "{fixed:?}");
    }

    #[test]
    fn test_bezier_endpoints() {
        let start = translation_bezier(200.0, 300.0, 0.0);
        assert_eq!(&start[12..16], &[0.0, 0.0, 0.0, 1.0]);

        let end = translation_bezier(200.0, 300.0, 1.0);
        assert_eq!(&end[12..16], &[200.0, 300.0, 0.0, 1.0]);
    }

    #[test]
    fn test_bezier_midpoint_uses_fixed_controls() {
        // 50 * 3/8 + 100 * 3/8 + 200/8
        assert!((bezier_offset(200.0, 0.5) - 81.25).abs() < 1e-4);
        let m = translation_bezier(0.0, 8.0, 0.5);
        assert!((m[12] - 56.25).abs() < 1e-4);
        assert!((m[13] - 57.25).abs() < 1e-4);
        assert_eq!(m[14], 0.0);
    }

    #[test]
    fn test_translate_bezier_appends() {
        let base = y_rotation(0.25);
        assert_eq!(
            translate_bezier(&base, 10.0, 20.0, 0.4),
            multiply(&base, &translation_bezier(10.0, 20.0, 0.4))
        );
    }
}
