/// Interactive scene state: model controls, camera, orbit target and
/// animation, advanced one frame at a time by a driver.
use log::debug;

use crate::m4::{self, Mat4, Vec3};
use crate::projection::Camera;
use crate::transform::ModelTransform;

/// Instances per side of the square grid of models
pub const GRID_SIZE: usize = 5;
/// Distance between neighbouring grid instances
pub const GRID_SPACING: f32 = 150.0;

/// Radius of the circle the orbit target moves on
pub const ORBIT_RADIUS: f32 = 300.0;
const ORBIT_HEIGHT: f32 = 200.0;

/// Rotation speed of the climb animation, in radians per second
pub const CLIMB_SPIN: f32 = 1.2;
const CLIMB_EYE: Vec3 = [-300.0, 500.0, 700.0];
const CLIMB_END: [f32; 2] = [100.0, 300.0];
const APPROACH_END: [f32; 2] = [200.0, 200.0];
/// Translation per animation step
const ANIMATION_STEP: f32 = 1.0;

const SIDE_EYE: Vec3 = [1000.0, 0.0, 0.0];
const SIDE_FAR: f32 = 1000.0;
const OVERHEAD_EYE: Vec3 = [-300.0, 500.0, 700.0];
const OVERHEAD_FAR: f32 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    /// Driven only by the controls
    #[default]
    Idle,
    /// Slide the model diagonally out to (200, 200)
    Approach,
    /// Spin around X while moving right, then up
    Climb,
}

/// Fixed alternative viewpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPreset {
    /// The user-controlled camera
    #[default]
    Main,
    /// From +X, short far plane
    Side,
    /// From above and behind
    Overhead,
}

/// The point every grid instance turns to face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Angle around the Y axis, in radians
    pub angle: f32,
    pub radius: f32,
    pub height: f32,
}

impl Orbit {
    pub fn target(&self) -> Vec3 {
        [
            self.angle.sin() * self.radius,
            self.height,
            self.angle.cos() * self.radius,
        ]
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            angle: 0.0,
            radius: ORBIT_RADIUS,
            height: ORBIT_HEIGHT,
        }
    }
}

/// Matrices for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub view_projection: Mat4,
    /// Final model-view-projection matrix per drawn instance
    pub models: Vec<Mat4>,
}

/// Everything the controls of the demo change
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub model: ModelTransform,
    pub camera: Camera,
    pub orbit: Orbit,
    pub zoom: f32,
    pub view: ViewPreset,
    animation: AnimationMode,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        let camera = Camera::default();
        Self {
            model: ModelTransform::default(),
            camera,
            orbit: Orbit::default(),
            zoom: camera.zoom(),
            view: ViewPreset::Main,
            animation: AnimationMode::Idle,
        }
    }

    pub fn animation(&self) -> AnimationMode {
        self.animation
    }

    /// Switch animation. Going back to idle puts the model at rest.
    pub fn set_animation(&mut self, mode: AnimationMode) {
        if mode == self.animation {
            return;
        }
        debug!("animation {:?} -> {:?}", self.animation, mode);
        self.animation = mode;
        if mode == AnimationMode::Idle {
            self.model.reset_motion();
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
        self.camera.set_zoom(zoom);
    }

    /// Set the field of view directly; the zoom follows it.
    pub fn set_fov(&mut self, fov: f32) {
        self.camera.fov = fov;
        self.zoom = self.camera.zoom();
    }

    /// Orbit angle in degrees
    pub fn set_orbit_angle(&mut self, degrees: f32) {
        self.orbit.angle = degrees.to_radians();
    }

    pub fn set_orbit_height(&mut self, height: f32) {
        self.orbit.height = height;
    }

    /// Advance the running animation by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        match self.animation {
            AnimationMode::Idle => {}
            AnimationMode::Approach => {
                let t = &mut self.model.translation;
                if t[0] < APPROACH_END[0] {
                    t[0] += ANIMATION_STEP;
                }
                if t[1] < APPROACH_END[1] {
                    t[1] += ANIMATION_STEP;
                } else {
                    self.set_animation(AnimationMode::Idle);
                }
            }
            AnimationMode::Climb => {
                self.model.rotation.rotate(CLIMB_SPIN * dt, 0.0, 0.0);
                let t = &mut self.model.translation;
                if t[0] < CLIMB_END[0] {
                    t[0] += ANIMATION_STEP;
                } else if t[1] < CLIMB_END[1] {
                    t[1] += ANIMATION_STEP;
                } else {
                    self.set_animation(AnimationMode::Idle);
                }
            }
        }
    }

    /// The camera actually used this frame, after presets and animation
    pub fn active_camera(&self, aspect: f32) -> Camera {
        let mut camera = self.camera;
        camera.set_aspect(aspect);
        match self.view {
            ViewPreset::Side => {
                camera.position = SIDE_EYE;
                camera.far = SIDE_FAR;
            }
            ViewPreset::Overhead => {
                camera.position = OVERHEAD_EYE;
                camera.far = OVERHEAD_FAR;
            }
            ViewPreset::Main if self.animation == AnimationMode::Climb => {
                camera.position = CLIMB_EYE;
            }
            ViewPreset::Main => {}
        }
        camera
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.active_camera(aspect).view_projection()
    }

    /// Base matrices of every instance: the grid, each turned towards the
    /// orbit target, then a marker at the target itself.
    pub fn instances(&self) -> Vec<Mat4> {
        let target = self.orbit.target();
        let up = self.camera.up;
        let extent = GRID_SIZE as f32 * GRID_SPACING;
        let offset = |i: usize| (i as f32 / (GRID_SIZE - 1) as f32 - 0.5) * extent;

        let mut instances = Vec::with_capacity(GRID_SIZE * GRID_SIZE + 1);
        for row in 0..GRID_SIZE {
            let z = offset(row);
            for col in 0..GRID_SIZE {
                let x = offset(col);
                instances.push(m4::look_at([x, 0.0, z], target, up));
            }
        }
        instances.push(m4::translation(target[0], target[1], target[2]));
        instances
    }

    pub fn frame(&self, aspect: f32) -> Frame {
        let view_projection = self.view_projection(aspect);
        let models = self
            .instances()
            .iter()
            .map(|instance| m4::multiply(&view_projection, &self.model.apply(instance)))
            .collect();
        Frame {
            view_projection,
            models,
        }
    }
}
