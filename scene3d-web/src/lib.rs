/// scene3d Web - WASM bindings for a browser-side renderer
///
/// The page owns the canvas, shaders and buffers. It forwards control
/// values to a [`WebScene`] and uploads the flat matrices it gets back,
/// 16 floats per instance.
use scene3d_core::{m4, AnimationMode, Mesh, PathMode, SceneState, ViewPreset};
use wasm_bindgen::prelude::*;

/// Copy a slice coming from JS into a matrix; short input is an error.
fn to_mat4(values: &[f32]) -> Result<m4::Mat4, JsValue> {
    values
        .try_into()
        .map_err(|_| {
            JsValue::from_str(&format!("expected 16 matrix elements, got {}", values.len()))
        })
}

fn to_vec3(values: &[f32]) -> Result<m4::Vec3, JsValue> {
    values
        .try_into()
        .map_err(|_| {
            JsValue::from_str(&format!("expected 3 vector elements, got {}", values.len()))
        })
}

#[wasm_bindgen]
pub struct WebScene {
    scene: SceneState,
}

#[wasm_bindgen]
impl WebScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebScene {
        WebScene {
            scene: SceneState::new(),
        }
    }

    pub fn set_translation(&mut self, index: usize, value: f32) {
        if let Some(axis) = self.scene.model.translation.get_mut(index) {
            *axis = value;
        }
    }

    /// Rotation slider value in degrees
    pub fn set_rotation(&mut self, index: usize, degrees: f32) {
        let rotation = &mut self.scene.model.rotation;
        let radians = degrees.to_radians();
        match index {
            0 => rotation.x = radians,
            1 => rotation.y = radians,
            2 => rotation.z = radians,
            _ => {}
        }
    }

    pub fn set_scale(&mut self, index: usize, value: f32) {
        if let Some(axis) = self.scene.model.scale.get_mut(index) {
            *axis = value;
        }
    }

    pub fn set_curve(&mut self, t: f32) {
        self.scene.model.curve_t = t;
    }

    pub fn set_bezier(&mut self, enabled: bool) {
        self.scene.model.path = if enabled {
            PathMode::Bezier
        } else {
            PathMode::Linear
        };
    }

    pub fn set_orbit_angle(&mut self, degrees: f32) {
        self.scene.set_orbit_angle(degrees);
    }

    pub fn set_orbit_height(&mut self, height: f32) {
        self.scene.set_orbit_height(height);
    }

    pub fn set_camera_position(&mut self, index: usize, value: f32) {
        if let Some(axis) = self.scene.camera.position.get_mut(index) {
            *axis = value;
        }
    }

    pub fn set_camera_target(&mut self, index: usize, value: f32) {
        if let Some(axis) = self.scene.camera.target.get_mut(index) {
            *axis = value;
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.scene.set_zoom(zoom);
    }

    /// 0 = idle, 1 = approach, 2 = climb
    pub fn set_animation(&mut self, mode: u8) -> Result<(), JsValue> {
        let mode = match mode {
            0 => AnimationMode::Idle,
            1 => AnimationMode::Approach,
            2 => AnimationMode::Climb,
            other => return Err(JsValue::from_str(&format!("unknown animation {other}"))),
        };
        self.scene.set_animation(mode);
        Ok(())
    }

    /// 0 = main camera, 1 = side, 2 = overhead
    pub fn set_view(&mut self, view: u8) -> Result<(), JsValue> {
        self.scene.view = match view {
            0 => ViewPreset::Main,
            1 => ViewPreset::Side,
            2 => ViewPreset::Overhead,
            other => return Err(JsValue::from_str(&format!("unknown view {other}"))),
        };
        Ok(())
    }

    pub fn animating(&self) -> bool {
        self.scene.animation() != AnimationMode::Idle
    }

    pub fn step(&mut self, dt: f32) {
        self.scene.step(dt);
    }

    /// Put the model back at rest
    pub fn reset(&mut self) {
        self.scene.model.reset_motion();
    }

    /// All instance matrices of this frame, concatenated
    pub fn frame(&self, aspect: f32) -> Vec<f32> {
        self.scene.frame(aspect).models.concat()
    }

    pub fn view_projection(&self, aspect: f32) -> Vec<f32> {
        self.scene.view_projection(aspect).to_vec()
    }
}

impl Default for WebScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Model positions with the model orientation baked in, `x, y, z` per vertex
#[wasm_bindgen]
pub fn cube_positions(size: f32) -> Vec<f32> {
    Mesh::cube(size).baked(&Mesh::model_orientation()).positions()
}

/// RGB bytes per vertex, matching [`cube_positions`]
#[wasm_bindgen]
pub fn cube_colors(size: f32) -> Vec<u8> {
    Mesh::cube(size).vertex_colors()
}

#[wasm_bindgen]
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Vec<f32> {
    m4::perspective(fov_y, aspect, near, far).to_vec()
}

#[wasm_bindgen]
pub fn look_at(eye: &[f32], target: &[f32], up: &[f32]) -> Result<Vec<f32>, JsValue> {
    Ok(m4::look_at(to_vec3(eye)?, to_vec3(target)?, to_vec3(up)?).to_vec())
}

#[wasm_bindgen]
pub fn inverse(m: &[f32]) -> Result<Vec<f32>, JsValue> {
    Ok(m4::inverse(&to_mat4(m)?).to_vec())
}

#[wasm_bindgen]
pub fn multiply(a: &[f32], b: &[f32]) -> Result<Vec<f32>, JsValue> {
    Ok(m4::multiply(&to_mat4(a)?, &to_mat4(b)?).to_vec())
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) keeps the existing logger.
    let _ = console_log::init_with_level(log::Level::Warn);
}
