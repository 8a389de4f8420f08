/// scene3d Core Library - 4x4 transform math and scene state
///
/// This library provides the stateless math core for the demo (flat
/// row-major matrices, look-at, inverse) together with the camera, model
/// transform and scene state that a driver feeds into it every frame.

pub mod checked;
pub mod error;
pub mod geometry;
pub mod m4;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use error::MathError;
pub use geometry::{Mesh, Triangle, Vertex};
pub use m4::{Mat4, Vec3, Vec4};
pub use projection::{Camera, ProjectionMode};
pub use scene::{AnimationMode, Frame, Orbit, SceneState, ViewPreset};
pub use transform::{ModelTransform, PathMode, RotationState, Transform};
