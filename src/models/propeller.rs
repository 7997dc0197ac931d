use crate::graphics::{legacy, GlApi};
use crate::scene::{legacy_mvp, ModelTransform, RenderArgs, Renderable};
use glam::Vec3;

const HEIGHT: f32 = 0.2;

//
//        2-------------------3
//      / .                  /|
//     /  .                 / |
//    /   .                /  |
//   /    .               /   |
//  /     .              /    |
// 6--------------------7     |
// |      .             |     |
// |      0 . . . . . . |. . .1
// |     .              |    /
// |    .               |   /
// |   .                |  /
// |  .                 | /
// | .                  |/
// 4 -------------------5
//
/// The eight corners of a flat box
pub const POSITIONS: [Vec3; 8] = [
    Vec3::new(-1.0, -HEIGHT, -1.0),
    Vec3::new(-1.0, -HEIGHT, 1.0),
    Vec3::new(-1.0, HEIGHT, -1.0),
    Vec3::new(-1.0, HEIGHT, 1.0),
    Vec3::new(1.0, -HEIGHT, -1.0),
    Vec3::new(1.0, -HEIGHT, 1.0),
    Vec3::new(1.0, HEIGHT, -1.0),
    Vec3::new(1.0, HEIGHT, 1.0),
];

// Channels are either full or darkened by a factor of 3
const DARK: f32 = 1.0 / 3.0;

/// One color per corner, the corner's bits pick the bright channels
pub const COLORS: [Vec3; 8] = [
    Vec3::new(DARK, DARK, DARK),
    Vec3::new(DARK, DARK, 1.0),
    Vec3::new(DARK, 1.0, DARK),
    Vec3::new(DARK, 1.0, 1.0),
    Vec3::new(1.0, DARK, DARK),
    Vec3::new(1.0, DARK, 1.0),
    Vec3::new(1.0, 1.0, DARK),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Six quads, four corners each
pub const INDICES: [u8; 24] = [
    1, 3, 7, 5, 0, 4, 6, 2, //
    2, 6, 7, 3, 0, 1, 5, 4, //
    4, 5, 7, 6, 0, 2, 3, 1,
];

/// The (position, color) pairs in the order they are drawn
pub fn mesh_vertices() -> impl Iterator<Item = (Vec3, Vec3)> {
    IntoIterator::into_iter(INDICES).map(|i| (POSITIONS[i as usize], COLORS[i as usize]))
}

/// Draws the box in immediate mode, turning it a bit every frame
#[derive(Clone, Debug)]
pub struct PropellerRenderer {
    pub transform: ModelTransform,
    /// Degrees added to the rotation before each frame
    pub rotation_step: f32,
}

impl Default for PropellerRenderer {
    fn default() -> Self {
        Self {
            transform: ModelTransform::default(),
            rotation_step: 3.0,
        }
    }
}

impl PropellerRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation_step(mut self, degrees: f32) -> Self {
        self.rotation_step = degrees;
        self
    }

    pub fn rotation_angle(&self) -> f32 {
        self.transform.rotation_angle
    }
}

impl<G: GlApi> Renderable<G> for PropellerRenderer {
    fn render(&mut self, gl: &G, args: &RenderArgs<'_>) {
        self.transform.rotation_angle += self.rotation_step;

        legacy_mvp(gl, args.camera, &self.transform);

        gl.begin(legacy::QUADS);
        for (position, color) in mesh_vertices() {
            gl.color_3f(color.x, color.y, color.z);
            gl.vertex_3f(position.x, position.y, position.z);
        }
        gl.end();
    }
}
