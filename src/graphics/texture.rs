use super::{rgba_len, GlApi, NativeGl};
use gl::types::*;

/// An RGBA texture, used as the color attachment of a framebuffer
pub struct Texture<G: GlApi = NativeGl> {
    gl: G,
    id: GLuint,
    width: u32,
    height: u32,
}

impl<G: GlApi> Texture<G> {
    /// NOTE: after this call there will be no texture binded
    pub fn new(gl: &G, width: u32, height: u32, data: Option<&[u8]>) -> Self {
        if let Some(data) = data {
            assert_eq!(data.len(), rgba_len(width as i32, height as i32));
        }
        // Genereate a new texture
        let id = gl.gen_texture();
        gl.bind_texture(id);
        gl.tex_image_rgba(width as i32, height as i32, data);
        gl.tex_parameter(gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
        gl.tex_parameter(gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
        gl.tex_parameter(gl::TEXTURE_MIN_FILTER, gl::NEAREST as i32);
        gl.tex_parameter(gl::TEXTURE_MAG_FILTER, gl::NEAREST as i32);
        gl.bind_texture(0);
        log::debug!("created {}x{} texture {}", width, height, id);
        Self {
            gl: gl.clone(),
            id,
            width,
            height,
        }
    }

    /// Reallocates the storage, dropping the previous contents.
    ///
    /// NOTE: after this call there will be no texture binded
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            self.gl.bind_texture(self.id);
            self.width = width;
            self.height = height;
            self.gl.tex_image_rgba(width as i32, height as i32, None);
            self.gl.bind_texture(0);
        }
    }

    pub fn bind(&self) {
        self.gl.bind_texture(self.id);
    }

    pub fn unbind(&self) {
        self.gl.bind_texture(0);
    }

    pub(super) fn handle(&self) -> GLuint {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<G: GlApi> Drop for Texture<G> {
    fn drop(&mut self) {
        self.gl.delete_texture(self.id);
    }
}
