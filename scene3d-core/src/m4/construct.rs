/// Elementary transform matrices
use std::f32::consts::PI;

use super::{Mat4, IDENTITY};

pub fn identity() -> Mat4 {
    IDENTITY
}

/// Perspective projection for a right-handed view space looking down -Z.
///
/// View depth `-near` maps to clip Z -1 and `-far` to +1 after the divide
/// by `w = -z`. Nothing is validated: `near == far` divides by zero.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = (PI * 0.5 - 0.5 * fov_y).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect, 0.0, 0.0, 0.0, //
        0.0, f, 0.0, 0.0, //
        0.0, 0.0, (near + far) * range_inv, -1.0, //
        0.0, 0.0, near * far * range_inv * 2.0, 0.0,
    ]
}

/// Maps `[0, width] x [0, height] x [0, depth]` onto the NDC cube.
///
/// The Y axis is flipped so that 0 is at the top of the screen.
pub fn orthographic(width: f32, height: f32, depth: f32) -> Mat4 {
    [
        2.0 / width, 0.0, 0.0, 0.0, //
        0.0, -2.0 / height, 0.0, 0.0, //
        0.0, 0.0, 2.0 / depth, 0.0, //
        -1.0, 1.0, 0.0, 1.0,
    ]
}

pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        tx, ty, tz, 1.0,
    ]
}

pub fn x_rotation(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, s, 0.0, //
        0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn y_rotation(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn z_rotation(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, s, 0.0, 0.0, //
        -s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Z rotation with the opposite sign of [`z_rotation`], used when pivoting
/// around an arbitrary point.
pub fn point_rotation(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
    [
        sx, 0.0, 0.0, 0.0, //
        0.0, sy, 0.0, 0.0, //
        0.0, 0.0, sz, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::m4::{approx_eq, transform_vector};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_aliases() {
        assert_eq!(translation(0.0, 0.0, 0.0), identity());
        assert_eq!(scaling(1.0, 1.0, 1.0), identity());
        assert!(approx_eq(&z_rotation(0.0), &identity(), 0.0));
    }

    #[test]
    fn test_translation_in_last_row() {
        let m = translation(3.0, -4.0, 5.0);
        assert_eq!(&m[12..16], &[3.0, -4.0, 5.0, 1.0]);
        let p = transform_vector(&m, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(p, [4.0, -3.0, 6.0, 1.0]);
        // Directions ignore translation.
        let d = transform_vector(&m, [1.0, 1.0, 1.0, 0.0]);
        assert_eq!(d, [1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_axis_rotations_follow_right_hand_rule() {
        let y = transform_vector(&x_rotation(FRAC_PI_2), [0.0, 1.0, 0.0, 0.0]);
        assert!((y[2] - 1.0).abs() < 1e-6, "x rotation sends +Y to +Z: {y:?}");

        let z = transform_vector(&y_rotation(FRAC_PI_2), [0.0, 0.0, 1.0, 0.0]);
        assert!((z[0] - 1.0).abs() < 1e-6, "y rotation sends +Z to +X: {z:?}");

        let x = transform_vector(&z_rotation(FRAC_PI_2), [1.0, 0.0, 0.0, 0.0]);
        assert!((x[1] - 1.0).abs() < 1e-6, "z rotation sends +X to +Y: {x:?}");
    }

    #[test]
    fn test_point_rotation_is_reverse_of_z_rotation() {
        let a = 0.7;
        assert!(approx_eq(&point_rotation(a), &z_rotation(-a), 1e-6));
    }

    #[test]
    fn test_perspective_projects_inside_clip_volume() {
        let m = perspective(60f32.to_radians(), 1.0, 1.0, 5000.0);
        let clip = transform_vector(&m, [0.0, 0.0, -1000.0, 1.0]);
        assert_eq!(clip[3], 1000.0, "w = -z");
        let ndc_z = clip[2] / clip[3];
        assert!(ndc_z > -1.0 && ndc_z < 1.0, "ndc z = {ndc_z}");
    }

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let m = perspective(1.0, 1.5, 2.0, 50.0);
        let near = transform_vector(&m, [0.0, 0.0, -2.0, 1.0]);
        let far = transform_vector(&m, [0.0, 0.0, -50.0, 1.0]);
        assert!((near[2] / near[3] + 1.0).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_perspective_equal_planes_is_not_finite() {
        let m = perspective(1.0, 1.0, 10.0, 10.0);
        assert!(!m[10].is_finite());
        assert!(!m[14].is_finite());
    }

    #[test]
    fn test_orthographic_flips_y() {
        let m = orthographic(200.0, 100.0, 400.0);
        let top_left = transform_vector(&m, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(&top_left[..2], &[-1.0, 1.0]);
        let bottom_right = transform_vector(&m, [200.0, 100.0, 400.0, 1.0]);
        let expected = [1.0, -1.0, 2.0];
        for (got, want) in bottom_right.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{bottom_right:?}");
        }
    }
}
