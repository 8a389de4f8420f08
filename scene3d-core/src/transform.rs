/// Model transform composition and rotation state
use crate::m4::{self, Mat4, Vec3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Build from angles in degrees, as the UI presents them
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// A matrix under construction.
///
/// Each `then_*` step appends a transform with [`m4::multiply`], so the
/// step named last is the first one a vertex goes through. Chains read the
/// same way as the equivalent nested `m4` calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Mat4);

impl Transform {
    pub fn identity() -> Self {
        Self(m4::IDENTITY)
    }

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self(matrix)
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    pub fn then(self, other: &Mat4) -> Self {
        Self(m4::multiply(&self.0, other))
    }

    pub fn then_translate(self, tx: f32, ty: f32, tz: f32) -> Self {
        Self(m4::translate(&self.0, tx, ty, tz))
    }

    pub fn then_translate_bezier(self, end_x: f32, end_y: f32, t: f32) -> Self {
        Self(m4::translate_bezier(&self.0, end_x, end_y, t))
    }

    pub fn then_rotate_x(self, angle: f32) -> Self {
        Self(m4::x_rotate(&self.0, angle))
    }

    pub fn then_rotate_y(self, angle: f32) -> Self {
        Self(m4::y_rotate(&self.0, angle))
    }

    pub fn then_rotate_z(self, angle: f32) -> Self {
        Self(m4::z_rotate(&self.0, angle))
    }

    pub fn then_rotate_around(self, angle: f32, pivot: Vec3) -> Self {
        Self(m4::rotate_around_point(&self.0, angle, pivot[0], pivot[1], pivot[2]))
    }

    pub fn then_scale(self, sx: f32, sy: f32, sz: f32) -> Self {
        Self(m4::scale(&self.0, sx, sy, sz))
    }

    /// Apply to a point (w = 1) and drop the homogeneous coordinate
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let [x, y, z, _] = m4::transform_vector(&self.0, [point[0], point[1], point[2], 1.0]);
        [x, y, z]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Transform> for Mat4 {
    fn from(transform: Transform) -> Self {
        transform.0
    }
}

/// How the model translation is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Plain translation by `(x, y, z)`
    #[default]
    Linear,
    /// Bézier path towards `(x, y)` at the curve parameter
    Bezier,
}

/// Per-model translation, rotation and scale controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub translation: Vec3,
    pub rotation: RotationState,
    pub scale: Vec3,
    /// Curve parameter in `[0, 1]` for [`PathMode::Bezier`]
    pub curve_t: f32,
    pub path: PathMode,
}

impl ModelTransform {
    /// Append translation, X/Y/Z rotation and scale to `base`.
    pub fn apply(&self, base: &Mat4) -> Mat4 {
        let [tx, ty, tz] = self.translation;
        let transform = Transform::from_matrix(*base);
        let transform = match self.path {
            PathMode::Linear => transform.then_translate(tx, ty, tz),
            PathMode::Bezier => transform.then_translate_bezier(tx, ty, self.curve_t),
        };

        transform
            .then_rotate_x(self.rotation.x)
            .then_rotate_y(self.rotation.y)
            .then_rotate_z(self.rotation.z)
            .then_scale(self.scale[0], self.scale[1], self.scale[2])
            .matrix()
    }

    /// Back to the rest pose, keeping scale and path settings
    pub fn reset_motion(&mut self) {
        self.translation = [0.0; 3];
        self.rotation = RotationState::zero();
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: RotationState::zero(),
            scale: [1.0; 3],
            curve_t: 0.0,
            path: PathMode::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);

        let degrees = RotationState::from_degrees(180.0, 0.0, 90.0);
        assert!((degrees.x - std::f32::consts::PI).abs() < 1e-6);
        assert!((degrees.z - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_builder_matches_m4_chain() {
        let chain = m4::scale(
            &m4::y_rotate(&m4::translate(&m4::IDENTITY, 1.0, 2.0, 3.0), 0.4),
            2.0,
            2.0,
            2.0,
        );
        let built = Transform::identity()
            .then_translate(1.0, 2.0, 3.0)
            .then_rotate_y(0.4)
            .then_scale(2.0, 2.0, 2.0);
        assert_eq!(built.matrix(), chain);
    }

    #[test]
    fn test_transform_point_applies_last_step_first() {
        let t = Transform::identity().then_translate(10.0, 0.0, 0.0).then_scale(2.0, 2.0, 2.0);
        assert_eq!(t.transform_point([1.0, 1.0, 1.0]), [12.0, 2.0, 2.0]);
    }

    #[test]
    fn test_identity_model_transform() {
        let model = ModelTransform::default();
        assert!(m4::approx_eq(&model.apply(&m4::IDENTITY), &m4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_model_transform_order() {
        let model = ModelTransform {
            translation: [5.0, 6.0, 7.0],
            rotation: RotationState::new(0.1, 0.2, 0.3),
            scale: [1.0, 2.0, 3.0],
            ..Default::default()
        };
        let base = m4::translation(100.0, 0.0, 0.0);
        let mut expected = m4::translate(&base, 5.0, 6.0, 7.0);
        expected = m4::x_rotate(&expected, 0.1);
        expected = m4::y_rotate(&expected, 0.2);
        expected = m4::z_rotate(&expected, 0.3);
        expected = m4::scale(&expected, 1.0, 2.0, 3.0);
        assert_eq!(model.apply(&base), expected);
    }

    #[test]
    fn test_bezier_path_ignores_z() {
        let model = ModelTransform {
            translation: [200.0, 200.0, 999.0],
            curve_t: 1.0,
            path: PathMode::Bezier,
            ..Default::default()
        };
        let m = model.apply(&m4::IDENTITY);
        assert_eq!(&m[12..15], &[200.0, 200.0, 0.0]);
    }

    #[test]
    fn test_reset_motion_keeps_scale() {
        let mut model = ModelTransform {
            translation: [1.0, 2.0, 3.0],
            rotation: RotationState::new(1.0, 1.0, 1.0),
            scale: [2.0; 3],
            ..Default::default()
        };
        model.reset_motion();
        assert_eq!(model.translation, [0.0; 3]);
        assert_eq!(model.rotation, RotationState::zero());
        assert_eq!(model.scale, [2.0; 3]);
    }
}
