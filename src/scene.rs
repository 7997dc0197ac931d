//! Camera and model transforms for the fixed function pipeline.

use crate::graphics::{legacy, GlApi};
use glam::{Mat4, Vec3};

/// A perspective camera looking at a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: std::f32::consts::FRAC_PI_3,
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

/// Placement of a model in the world
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    /// In degrees
    pub rotation_angle: f32,
    pub rotation_axis: Vec3,
    pub scale: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_angle: 0.0,
            rotation_axis: Vec3::Y,
            scale: Vec3::ONE,
        }
    }
}

impl ModelTransform {
    /// translation * rotation * scale
    pub fn matrix(&self) -> Mat4 {
        let axis = self.rotation_axis.try_normalize().unwrap_or(Vec3::Y);
        Mat4::from_translation(self.position)
            * Mat4::from_axis_angle(axis, self.rotation_angle.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

/// What a renderable needs to draw one frame
#[derive(Clone, Copy, Debug)]
pub struct RenderArgs<'a> {
    pub camera: &'a Camera,
}

/// Something drawn once per frame by the caller's render loop
pub trait Renderable<G: GlApi> {
    fn render(&mut self, gl: &G, args: &RenderArgs<'_>);
}

/// Loads the projection and model-view matrices of the fixed function
/// pipeline, leaving the model-view stack selected
pub fn legacy_mvp<G: GlApi>(gl: &G, camera: &Camera, model: &ModelTransform) {
    gl.matrix_mode(legacy::PROJECTION);
    gl.load_matrix(&camera.projection().to_cols_array());
    gl.matrix_mode(legacy::MODELVIEW);
    gl.load_matrix(&(camera.view() * model.matrix()).to_cols_array());
}
