use super::{FragmentShader, VertexShader};
use crate::graphics::{GlApi, NativeGl};
use crate::{Error, Result};
use gl::types::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// A linked shader program.
///
/// Uniform locations are looked up by name once and cached.
pub struct Program<G: GlApi = NativeGl> {
    gl: G,
    id: GLuint,
    locations: RefCell<HashMap<String, GLint>>,
}

impl<G: GlApi> Program<G> {
    pub fn new(gl: &G, vs: &VertexShader<G>, fs: &FragmentShader<G>) -> Result<Self> {
        let id = gl.create_program();
        gl.attach_shader(id, vs.handle());
        gl.attach_shader(id, fs.handle());
        gl.link_program(id);

        if gl.get_program_iv(id, gl::LINK_STATUS) == 0 {
            let log = gl.program_info_log(id);
            gl.delete_program(id);
            return Err(Error::ProgramLink(log));
        }
        log::debug!("linked program {}", id);
        Ok(Self {
            gl: gl.clone(),
            id,
            locations: RefCell::new(HashMap::new()),
        })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub(crate) fn gl(&self) -> &G {
        &self.gl
    }

    pub fn bind(&self) {
        self.gl.use_program(self.id);
    }

    pub fn unbind(&self) {
        self.gl.use_program(0);
    }

    /// Location of the uniform called `name`, `-1` when it isn't active
    pub fn uniform_location(&self, name: &str) -> GLint {
        if let Some(&location) = self.locations.borrow().get(name) {
            return location;
        }
        let location = self.gl.get_uniform_location(self.id, name);
        if location < 0 {
            log::debug!("uniform `{}` is not active in program {}", name, self.id);
        }
        self.locations
            .borrow_mut()
            .insert(name.to_string(), location);
        location
    }
}

impl<G: GlApi> Drop for Program<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}
