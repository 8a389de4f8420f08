/// Camera look-at and general 4x4 inverse
use super::vector::{cross, normalize, subtract};
use super::{Mat4, Vec3};

/// Camera-to-world matrix for a camera at `eye` looking at `target`.
///
/// The camera looks down its local -Z. If `up` is parallel to the view
/// direction the X axis normalizes to zero and the basis is degenerate.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let z_axis = normalize(subtract(eye, target));
    let x_axis = normalize(cross(up, z_axis));
    let y_axis = normalize(cross(z_axis, x_axis));

    [
        x_axis[0], x_axis[1], x_axis[2], 0.0, //
        y_axis[0], y_axis[1], y_axis[2], 0.0, //
        z_axis[0], z_axis[1], z_axis[2], 0.0, //
        eye[0], eye[1], eye[2], 1.0,
    ]
}

/// 2x2 products of the lower-right and upper-left blocks shared by the
/// cofactor expansion.
struct Cofactors {
    t: [f32; 24],
    /// First column of the adjugate, before scaling.
    first: [f32; 4],
}

fn cofactors(m: &Mat4) -> Cofactors {
    let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] = *m;

    let t = [
        m22 * m33,
        m32 * m23,
        m12 * m33,
        m32 * m13,
        m12 * m23,
        m22 * m13,
        m02 * m33,
        m32 * m03,
        m02 * m23,
        m22 * m03,
        m02 * m13,
        m12 * m03,
        m20 * m31,
        m30 * m21,
        m10 * m31,
        m30 * m11,
        m10 * m21,
        m20 * m11,
        m00 * m31,
        m30 * m01,
        m00 * m21,
        m20 * m01,
        m00 * m11,
        m10 * m01,
    ];

    let first = [
        (t[0] * m11 + t[3] * m21 + t[4] * m31) - (t[1] * m11 + t[2] * m21 + t[5] * m31),
        (t[1] * m01 + t[6] * m21 + t[9] * m31) - (t[0] * m01 + t[7] * m21 + t[8] * m31),
        (t[2] * m01 + t[7] * m11 + t[10] * m31) - (t[3] * m01 + t[6] * m11 + t[11] * m31),
        (t[5] * m01 + t[8] * m11 + t[11] * m21) - (t[4] * m01 + t[9] * m11 + t[10] * m21),
    ];

    Cofactors { t, first }
}

pub fn determinant(m: &Mat4) -> f32 {
    let Cofactors { first, .. } = cofactors(m);
    m[0] * first[0] + m[4] * first[1] + m[8] * first[2] + m[12] * first[3]
}

/// General inverse by cofactor expansion.
///
/// Singular matrices divide by zero and come back full of non-finite values.
pub fn inverse(m: &Mat4) -> Mat4 {
    let [m00, _, m02, m03, m10, _, m12, m13, m20, _, m22, m23, m30, _, m32, m33] = *m;
    let Cofactors { t, first } = cofactors(m);

    let d = 1.0 / (m00 * first[0] + m10 * first[1] + m20 * first[2] + m30 * first[3]);

    [
        d * first[0],
        d * first[1],
        d * first[2],
        d * first[3],
        d * ((t[1] * m10 + t[2] * m20 + t[5] * m30) - (t[0] * m10 + t[3] * m20 + t[4] * m30)),
        d * ((t[0] * m00 + t[7] * m20 + t[8] * m30) - (t[1] * m00 + t[6] * m20 + t[9] * m30)),
        d * ((t[3] * m00 + t[6] * m10 + t[11] * m30) - (t[2] * m00 + t[7] * m10 + t[10] * m30)),
        d * ((t[4] * m00 + t[9] * m10 + t[10] * m20) - (t[5] * m00 + t[8] * m10 + t[11] * m20)),
        d * ((t[12] * m13 + t[15] * m23 + t[16] * m33) - (t[13] * m13 + t[14] * m23 + t[17] * m33)),
        d * ((t[13] * m03 + t[18] * m23 + t[21] * m33) - (t[12] * m03 + t[19] * m23 + t[20] * m33)),
        d * ((t[14] * m03 + t[19] * m13 + t[22] * m33) - (t[15] * m03 + t[18] * m13 + t[23] * m33)),
        d * ((t[17] * m03 + t[20] * m13 + t[23] * m23) - (t[16] * m03 + t[21] * m13 + t[22] * m23)),
        d * ((t[14] * m22 + t[17] * m32 + t[13] * m12) - (t[16] * m32 + t[12] * m12 + t[15] * m22)),
        d * ((t[20] * m32 + t[12] * m02 + t[19] * m22) - (t[18] * m22 + t[21] * m32 + t[13] * m02)),
        d * ((t[18] * m12 + t[23] * m32 + t[15] * m02) - (t[22] * m32 + t[14] * m02 + t[19] * m12)),
        d * ((t[22] * m22 + t[16] * m02 + t[21] * m12) - (t[20] * m12 + t[23] * m22 + t[17] * m02)),
    ]
}
