use crate::config::Config;
use anyhow::Context;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use glutin::dpi::PhysicalSize;
use propeller_gl::graphics::{
    check_error, DepthBuffer, FragmentShader, Framebuffer, GlApi, NativeGl, Program, Texture,
    VertexShader,
};
use propeller_gl::models::PropellerRenderer;
use propeller_gl::scene::{Camera, RenderArgs, Renderable};
use propeller_gl::uniform::{Uniform, UniformBlock, UniformSet};

mod math {
    pub use std::f32::consts::*;
    pub const TWO_THIRDS_PI: f32 = FRAC_PI_3 * 2.0;
    pub const FOUR_THIRDS_PI: f32 = TWO_THIRDS_PI * 2.0;
    pub const TWICE_PI: f32 = PI * 2.0;
}

/// Host copy of the `Lighting` block (std140)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Lighting {
    pub ambient: [f32; 4],
    pub brightness: f32,
    _padding: [f32; 3],
}

/// Everything drawn by the demo, rendered into an off-screen framebuffer
pub struct Stage {
    gl: NativeGl,
    program: Program,
    uniforms: UniformSet<NativeGl>,
    framebuffer: Framebuffer,
    texture: Texture,
    depth: DepthBuffer,
    propeller: PropellerRenderer,
    camera: Camera,
    window: PhysicalSize<u32>,
    downscale: u32,
}

impl Stage {
    pub fn new(gl: &NativeGl, config: &Config, window: PhysicalSize<u32>) -> anyhow::Result<Self> {
        // Load the shaders from their files and compile them
        let vs = VertexShader::from_file(gl, &config.shader_dir.join("propeller.vert"))?;
        let fs = FragmentShader::from_file(gl, &config.shader_dir.join("propeller.frag"))?;
        // Link the shaders to the program
        let program = Program::new(gl, &vs, &fs)?;

        let mut uniforms = UniformSet::new();
        uniforms.insert(Uniform::with_value("tint", Vec3::ONE));
        uniforms.insert(UniformBlock::with_value(
            "Lighting",
            Lighting {
                ambient: [0.05, 0.05, 0.05, 1.0],
                brightness: config.brightness,
                ..Lighting::default()
            },
        ));

        let (width, height) = offscreen_size(window, config.downscale);
        let texture = Texture::new(gl, width, height, None);
        let depth = DepthBuffer::new(gl, width, height);
        let framebuffer = Framebuffer::with_attachments(gl, &texture, Some(&depth))
            .context("off-screen framebuffer")?;

        Ok(Self {
            gl: *gl,
            program,
            uniforms,
            framebuffer,
            texture,
            depth,
            propeller: PropellerRenderer::new().with_rotation_step(config.rotation_step),
            camera: Camera::new(Vec3::new(0.0, 2.5, 4.0), Vec3::ZERO, aspect(window)),
            window,
            downscale: config.downscale,
        })
    }

    pub fn resize(&mut self, window: PhysicalSize<u32>) {
        let (width, height) = offscreen_size(window, self.downscale);
        self.texture.resize(width, height);
        self.depth.resize(width, height);
        self.camera.aspect = aspect(window);
        self.window = window;
    }

    pub fn draw(&mut self) -> anyhow::Result<()> {
        let gl = &self.gl;
        let (width, height) = (self.texture.width() as i32, self.texture.height() as i32);

        // The tint follows the propeller around the color wheel
        let angle = self.propeller.rotation_angle().to_radians();
        self.uniforms.set("tint", hue_cycle(angle))?;

        self.framebuffer.bind();
        gl.enable(gl::DEPTH_TEST);
        gl.viewport(0, 0, width, height);
        // Clear the previus image
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);

        self.program.bind();
        self.uniforms.push_updated(&self.program)?;
        self.propeller.render(gl, &RenderArgs {
            camera: &self.camera,
        });
        self.program.unbind();

        gl.disable(gl::DEPTH_TEST);
        self.framebuffer.blit_to_default(
            [0, 0, width, height],
            [0, 0, self.window.width as i32, self.window.height as i32],
        );
        check_error(gl)?;
        Ok(())
    }
}

fn offscreen_size(window: PhysicalSize<u32>, downscale: u32) -> (u32, u32) {
    (
        (window.width / downscale).max(1),
        (window.height / downscale).max(1),
    )
}

fn aspect(window: PhysicalSize<u32>) -> f32 {
    window.width.max(1) as f32 / window.height.max(1) as f32
}

/// Walks red -> green -> blue -> red as `angle` goes around the circle
fn hue_cycle(angle: f32) -> Vec3 {
    let angle = angle.rem_euclid(math::TWICE_PI);
    if angle < math::TWO_THIRDS_PI {
        let angle = angle / math::TWO_THIRDS_PI * math::FRAC_PI_2;
        Vec3::new(angle.cos(), angle.sin(), 0.0)
    } else if angle < math::FOUR_THIRDS_PI {
        let angle = (angle - math::TWO_THIRDS_PI) / math::TWO_THIRDS_PI * math::FRAC_PI_2;
        Vec3::new(0.0, angle.cos(), angle.sin())
    } else {
        let angle = (angle - math::FOUR_THIRDS_PI) / math::TWO_THIRDS_PI * math::FRAC_PI_2;
        Vec3::new(angle.sin(), 0.0, angle.cos())
    }
}
