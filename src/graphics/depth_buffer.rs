use super::{GlApi, NativeGl};
use gl::types::*;

/// A renderbuffer with only the depth component
pub struct DepthBuffer<G: GlApi = NativeGl> {
    gl: G,
    id: GLuint,
    width: u32,
    height: u32,
}

impl<G: GlApi> DepthBuffer<G> {
    pub fn new(gl: &G, width: u32, height: u32) -> Self {
        // Genereate a new renderbuffer
        let id = gl.gen_renderbuffer();
        gl.bind_renderbuffer(id);
        gl.renderbuffer_storage(gl::DEPTH_COMPONENT, width as i32, height as i32);
        gl.bind_renderbuffer(0);
        log::debug!("created {}x{} depth buffer {}", width, height, id);
        Self {
            gl: gl.clone(),
            id,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            self.gl.bind_renderbuffer(self.id);
            self.gl
                .renderbuffer_storage(gl::DEPTH_COMPONENT, width as i32, height as i32);
            self.gl.bind_renderbuffer(0);
            self.width = width;
            self.height = height;
        }
    }

    pub(super) fn handle(&self) -> GLuint {
        self.id
    }
}

impl<G: GlApi> Drop for DepthBuffer<G> {
    fn drop(&mut self) {
        log::debug!("deleting depth buffer {}", self.id);
        self.gl.delete_renderbuffer(self.id);
    }
}
