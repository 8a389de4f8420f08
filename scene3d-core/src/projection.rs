/// Camera and projection utilities
use crate::m4::{self, Mat4, Vec3};

/// Field of view the zoom control divides down from
pub const ZOOM_BASE_FOV_DEGREES: f32 = 100.0;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    Orthographic,
    #[default]
    Perspective,
}

/// Camera configuration for 3D rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            ..Self::default()
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Zoom in `[1, 100]` narrows the field of view from 100 degrees
    pub fn set_zoom(&mut self, zoom: f32) {
        self.fov = ZOOM_BASE_FOV_DEGREES.to_radians() / zoom;
    }

    /// Zoom factor matching the current field of view
    pub fn zoom(&self) -> f32 {
        ZOOM_BASE_FOV_DEGREES / self.fov.to_degrees()
    }

    /// Camera-to-world matrix
    pub fn camera_matrix(&self) -> Mat4 {
        m4::look_at(self.position, self.target, self.up)
    }

    /// World-to-camera matrix
    pub fn view_matrix(&self) -> Mat4 {
        m4::inverse(&self.camera_matrix())
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => {
                m4::perspective(self.fov, self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let height = m4::length(m4::subtract(self.position, self.target));
                let width = height * self.aspect;
                // `orthographic` works in screen space with Y down and depth
                // from 0; shift the view volume into that box first.
                let screen = m4::orthographic(width, height, self.far - self.near);
                let centered = m4::translate(
                    &screen,
                    width / 2.0,
                    height / 2.0,
                    -(self.near + self.far) / 2.0,
                );
                m4::scale(&centered, 1.0, -1.0, -1.0)
            }
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        m4::multiply(&self.projection_matrix(), &self.view_matrix())
    }

    /// Project a 3D point to 2D screen space
    pub fn project_to_screen(
        &self,
        point: Vec3,
        model_matrix: &Mat4,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let mvp = m4::multiply(&self.view_projection(), model_matrix);
        project_with(&mvp, point, width, height)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: [0.0, 1000.0, 1000.0],
            target: [0.0, -100.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov: 60f32.to_radians(),
            aspect: 1.0,
            near: 1.0,
            far: 5000.0,
            mode: ProjectionMode::Perspective,
        }
    }
}

/// Project `point` through a full model-view-projection matrix.
///
/// Returns screen coordinates with Y down plus the NDC depth, or `None`
/// when the point falls outside the view volume, including points behind
/// the camera.
pub fn project_with(
    mvp: &Mat4,
    point: Vec3,
    width: u32,
    height: u32,
) -> Option<(f32, f32, f32)> {
    let clip = m4::transform_vector(mvp, [point[0], point[1], point[2], 1.0]);

    // Behind the camera, or too close to divide by
    if clip[3] < 1e-6 {
        return None;
    }

    let ndc_x = clip[0] / clip[3];
    let ndc_y = clip[1] / clip[3];
    let depth = clip[2] / clip[3];

    // Clip test
    let inside = |v: f32| (-1.0..=1.0).contains(&v);
    if !inside(ndc_x) || !inside(ndc_y) || !inside(depth) {
        return None;
    }

    // Convert to screen space
    let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
    let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

    Some((screen_x, screen_y, depth))
}
