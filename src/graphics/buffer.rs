use super::{GlApi, NativeGl};
use crate::{Error, Result};
use gl::types::*;
use std::ptr;

/// A buffer object bound to a single target (e.g. `GL_UNIFORM_BUFFER`)
pub struct Buffer<G: GlApi = NativeGl> {
    gl: G,
    id: GLuint,
    target: GLenum,
    len: usize,
}

impl<G: GlApi> Buffer<G> {
    /// Allocates a buffer initialized with `data`.
    ///
    /// NOTE: after this call there will be no buffer binded to `target`
    pub fn with_data(gl: &G, target: GLenum, data: &[u8], usage: GLenum) -> Self {
        let id = gl.gen_buffer();
        gl.bind_buffer(target, id);
        gl.buffer_data(target, data, usage);
        gl.bind_buffer(target, 0);
        log::debug!("created buffer {} ({} bytes)", id, data.len());
        Self {
            gl: gl.clone(),
            id,
            target,
            len: data.len(),
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(self.target, self.id);
    }

    pub fn unbind(&self) {
        self.gl.bind_buffer(self.target, 0);
    }

    /// Binds the buffer to an indexed binding point of its target
    pub fn bind_base(&self, index: GLuint) {
        self.gl.bind_buffer_base(self.target, index, self.id);
    }

    /// Maps the whole buffer write-only and overwrites its beginning with
    /// `bytes`, which must not be longer than the buffer.
    ///
    /// NOTE: after this call there will be no buffer binded to the target
    pub fn write_mapped(&self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.len {
            return Err(Error::BufferOverflow {
                buffer: self.id,
                len: bytes.len(),
                capacity: self.len,
            });
        }
        self.bind();
        let pointer = self.gl.map_buffer(self.target, gl::WRITE_ONLY);
        if pointer.is_null() {
            self.unbind();
            return Err(Error::MapBufferFailed(self.id));
        }
        // The mapping spans the whole buffer, which is at least `bytes.len()` long
        unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), pointer as *mut u8, bytes.len()) };
        let intact = self.gl.unmap_buffer(self.target);
        self.unbind();
        if intact {
            Ok(())
        } else {
            Err(Error::UnmapBufferFailed(self.id))
        }
    }
}

impl<G: GlApi> Drop for Buffer<G> {
    fn drop(&mut self) {
        log::debug!("deleting buffer {}", self.id);
        self.gl.delete_buffer(self.id);
    }
}
