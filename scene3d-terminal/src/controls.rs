/// Keyboard mapping onto the scene controls
use crossterm::event::KeyCode;
use scene3d_core::{AnimationMode, PathMode, SceneState, ViewPreset};

const MOVE_STEP: f32 = 10.0;
const ROTATE_STEP_DEGREES: f32 = 5.0;
const SCALE_STEP: f32 = 0.1;
const CURVE_STEP: f32 = 0.05;
const CAMERA_STEP: f32 = 50.0;
const ORBIT_HEIGHT_STEP: f32 = 10.0;

/// Ranges the controls are clamped to
pub const ZOOM_RANGE: (f32, f32) = (1.0, 100.0);
pub const SCALE_RANGE: (f32, f32) = (-5.0, 5.0);
pub const ORBIT_HEIGHT_RANGE: (f32, f32) = (50.0, 300.0);
pub const CAMERA_RANGE: (f32, f32) = (-1000.0, 1000.0);

pub const HELP: &str = "Arrows/PgUp/PgDn=Move WASD/E/R=Rotate [/]=Scale +/-=Zoom J/L/I/K=Orbit \
                        T/G/U/O=Camera B=Bezier ,/.=Curve 0/1/2=Anim V=View Q=Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub fn apply_key(scene: &mut SceneState, code: KeyCode) -> Action {
    let model = &mut scene.model;
    let rotate = ROTATE_STEP_DEGREES.to_radians();
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,

        KeyCode::Left => model.translation[0] -= MOVE_STEP,
        KeyCode::Right => model.translation[0] += MOVE_STEP,
        KeyCode::Up => model.translation[1] += MOVE_STEP,
        KeyCode::Down => model.translation[1] -= MOVE_STEP,
        KeyCode::PageUp => model.translation[2] += MOVE_STEP,
        KeyCode::PageDown => model.translation[2] -= MOVE_STEP,

        KeyCode::Char('w') => model.rotation.rotate(rotate, 0.0, 0.0),
        KeyCode::Char('s') => model.rotation.rotate(-rotate, 0.0, 0.0),
        KeyCode::Char('a') => model.rotation.rotate(0.0, -rotate, 0.0),
        KeyCode::Char('d') => model.rotation.rotate(0.0, rotate, 0.0),
        KeyCode::Char('e') => model.rotation.rotate(0.0, 0.0, rotate),
        KeyCode::Char('r') => model.rotation.rotate(0.0, 0.0, -rotate),

        KeyCode::Char(']') => model.scale = model.scale.map(|s| clamp(s + SCALE_STEP, SCALE_RANGE)),
        KeyCode::Char('[') => model.scale = model.scale.map(|s| clamp(s - SCALE_STEP, SCALE_RANGE)),

        KeyCode::Char('b') => {
            model.path = match model.path {
                PathMode::Linear => PathMode::Bezier,
                PathMode::Bezier => PathMode::Linear,
            }
        }
        KeyCode::Char('.') => model.curve_t = clamp(model.curve_t + CURVE_STEP, (0.0, 1.0)),
        KeyCode::Char(',') => model.curve_t = clamp(model.curve_t - CURVE_STEP, (0.0, 1.0)),

        KeyCode::Char('+') | KeyCode::Char('=') => {
            let zoom = clamp(scene.zoom + 1.0, ZOOM_RANGE);
            scene.set_zoom(zoom);
        }
        KeyCode::Char('-') => {
            let zoom = clamp(scene.zoom - 1.0, ZOOM_RANGE);
            scene.set_zoom(zoom);
        }

        KeyCode::Char('j') => {
            let degrees = scene.orbit.angle.to_degrees() - ROTATE_STEP_DEGREES;
            scene.set_orbit_angle(degrees);
        }
        KeyCode::Char('l') => {
            let degrees = scene.orbit.angle.to_degrees() + ROTATE_STEP_DEGREES;
            scene.set_orbit_angle(degrees);
        }
        KeyCode::Char('i') => {
            let height = clamp(scene.orbit.height + ORBIT_HEIGHT_STEP, ORBIT_HEIGHT_RANGE);
            scene.set_orbit_height(height);
        }
        KeyCode::Char('k') => {
            let height = clamp(scene.orbit.height - ORBIT_HEIGHT_STEP, ORBIT_HEIGHT_RANGE);
            scene.set_orbit_height(height);
        }

        KeyCode::Char('t') => move_camera(scene, 1, CAMERA_STEP),
        KeyCode::Char('g') => move_camera(scene, 1, -CAMERA_STEP),
        KeyCode::Char('u') => move_camera(scene, 2, -CAMERA_STEP),
        KeyCode::Char('o') => move_camera(scene, 2, CAMERA_STEP),

        KeyCode::Char('0') => scene.set_animation(AnimationMode::Idle),
        KeyCode::Char('1') => scene.set_animation(AnimationMode::Approach),
        KeyCode::Char('2') => scene.set_animation(AnimationMode::Climb),

        KeyCode::Char('v') => {
            scene.view = match scene.view {
                ViewPreset::Main => ViewPreset::Side,
                ViewPreset::Side => ViewPreset::Overhead,
                ViewPreset::Overhead => ViewPreset::Main,
            }
        }
        _ => {}
    }
    Action::Continue
}

fn move_camera(scene: &mut SceneState, axis: usize, delta: f32) {
    let position = &mut scene.camera.position[axis];
    *position = clamp(*position + delta, CAMERA_RANGE);
}

fn clamp(value: f32, (min, max): (f32, f32)) -> f32 {
    value.clamp(min, max)
}
