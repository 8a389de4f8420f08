/// Validating counterparts of the `m4` functions
///
/// The plain `m4` functions never fail and hand back non-finite numbers on
/// degenerate input. These variants detect the same cases up front and
/// report them instead.
use crate::error::{MathError, Result};
use crate::m4::{self, Mat4, Vec3, NORMALIZE_EPSILON};

/// Determinants smaller than this are treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-12;

pub fn try_inverse(m: &Mat4) -> Result<Mat4> {
    let determinant = m4::determinant(m);
    if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
        return Err(MathError::Singular { determinant });
    }
    Ok(m4::inverse(m))
}

pub fn try_perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4> {
    if near <= 0.0 || near == far || !near.is_finite() || !far.is_finite() {
        return Err(MathError::DepthRange { near, far });
    }
    if aspect == 0.0 || !aspect.is_finite() {
        return Err(MathError::Aspect(aspect));
    }
    Ok(m4::perspective(fov_y, aspect, near, far))
}

pub fn try_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4> {
    let forward = m4::subtract(eye, target);
    if m4::length(forward) <= NORMALIZE_EPSILON {
        return Err(MathError::DegenerateBasis("eye and target coincide"));
    }
    let side = m4::cross(up, m4::normalize(forward));
    if m4::length(side) <= NORMALIZE_EPSILON {
        return Err(MathError::DegenerateBasis("up is parallel to the view direction"));
    }
    Ok(m4::look_at(eye, target, up))
}
