use super::{DepthBuffer, GlApi, NativeGl, Texture};
use crate::{Error, Result};
use gl::types::*;

/// An off-screen render target owning a single framebuffer object.
///
/// The native handle is released when the wrapper is dropped (or passed to
/// [`Framebuffer::dispose`]), so it can't be bound after being deleted.
pub struct Framebuffer<G: GlApi = NativeGl> {
    gl: G,
    id: GLuint,
}

impl<G: GlApi> Framebuffer<G> {
    /// Allocates an empty framebuffer object, nothing is attached to it
    pub fn new(gl: &G) -> Self {
        let id = gl.gen_framebuffer();
        log::debug!("created framebuffer {}", id);
        Self { gl: gl.clone(), id }
    }

    /// Allocates a framebuffer rendering into `tex`, with an optional depth
    /// attachment, and checks that it is complete.
    ///
    /// NOTE: after this call there will be no framebuffer binded
    pub fn with_attachments(gl: &G, tex: &Texture<G>, depth: Option<&DepthBuffer<G>>) -> Result<Self> {
        let framebuffer = Self::new(gl);
        framebuffer.bind();
        framebuffer.attach_texture(gl::COLOR_ATTACHMENT0, tex);
        if let Some(buffer) = depth {
            framebuffer.attach_depth(buffer);
        }
        framebuffer.set_draw_buffers(&[gl::COLOR_ATTACHMENT0]);

        let complete = framebuffer.check_completeness();
        framebuffer.unbind();
        complete.map(|_| framebuffer)
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        self.gl.bind_framebuffer(gl::FRAMEBUFFER, self.id);
    }

    pub fn unbind(&self) {
        self.gl.bind_framebuffer(gl::FRAMEBUFFER, 0);
    }

    /// Checks the currently bound framebuffer
    pub fn check_completeness(&self) -> Result<()> {
        let status = self.gl.check_framebuffer_status(gl::FRAMEBUFFER);
        if status != gl::FRAMEBUFFER_COMPLETE {
            return Err(Error::IncompleteFramebuffer { status });
        }
        Ok(())
    }

    /// The framebuffer must be bound
    pub fn attach_texture(&self, attachment: GLenum, tex: &Texture<G>) {
        self.gl.framebuffer_texture_2d(attachment, tex.handle());
    }

    /// The framebuffer must be bound
    pub fn attach_depth(&self, buffer: &DepthBuffer<G>) {
        self.gl
            .framebuffer_renderbuffer(gl::DEPTH_ATTACHMENT, buffer.handle());
    }

    /// The framebuffer must be bound
    pub fn set_draw_buffers(&self, attachments: &[GLenum]) {
        self.gl.draw_buffers(attachments);
    }

    /// Copies the color attachment into the window's framebuffer, stretching
    /// the `src` rectangle over `dst` (both as `[x0, y0, x1, y1]`)
    ///
    /// NOTE: after this call there will be no framebuffer binded
    pub fn blit_to_default(&self, src: [GLint; 4], dst: [GLint; 4]) {
        self.gl.bind_framebuffer(gl::READ_FRAMEBUFFER, self.id);
        self.gl.bind_framebuffer(gl::DRAW_FRAMEBUFFER, 0);
        self.gl
            .blit_framebuffer(src, dst, gl::COLOR_BUFFER_BIT, gl::NEAREST);
        self.unbind();
    }

    /// Releases the native framebuffer
    pub fn dispose(self) {}
}

impl<G: GlApi> Drop for Framebuffer<G> {
    fn drop(&mut self) {
        log::debug!("deleting framebuffer {}", self.id);
        self.gl.delete_framebuffer(self.id);
    }
}
