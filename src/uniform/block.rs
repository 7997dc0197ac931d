use super::DynUniform;
use crate::graphics::{Buffer, GlApi, NativeGl, Program};
use crate::{Error, Result};
use gl::types::GLuint;
use std::any::{type_name, Any};
use std::fmt;

// uniform Lighting {
//     vec4 ambient;
//     float brightness;
// };
// block name is `Lighting`.

/// A value that is uploaded as the raw bytes of a uniform block.
///
/// The layout has to match the block's, e.g. `#[repr(C)]` fields padded to
/// the `std140` rules.
pub trait BlockValue: bytemuck::Pod + PartialEq + Default + fmt::Debug {}

impl<T: bytemuck::Pod + PartialEq + Default + fmt::Debug> BlockValue for T {}

/// A uniform block in a shader, backed by a uniform buffer.
///
/// The buffer is created on the first push and rewritten in place after that.
pub struct UniformBlock<T: BlockValue, G: GlApi = NativeGl> {
    name: String,
    value: T,
    updated: bool,
    binding: Option<GLuint>,
    buffer: Option<Buffer<G>>,
}

impl<T: BlockValue, G: GlApi> UniformBlock<T, G> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: T::default(),
            updated: false,
            binding: None,
            buffer: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: T) -> Self {
        let mut block = Self::new(name);
        block.set(value);
        block
    }

    /// Uses `binding` as the block's binding point instead of its index
    pub fn with_binding(mut self, binding: GLuint) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// The backing buffer, once the block has been pushed
    pub fn buffer(&self) -> Option<&Buffer<G>> {
        self.buffer.as_ref()
    }

    /// Stores `value`, returns `false` (and does nothing) if it's the current one
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        self.updated = true;
        true
    }

    /// Uploads the value to the block of `program`
    pub fn set_uniform(&mut self, program: &Program<G>) -> Result<()> {
        let bytes = bytemuck::bytes_of(&self.value);
        match &self.buffer {
            Some(buffer) => buffer.write_mapped(bytes)?,
            None => self.buffer = Some(self.initialize(program)?),
        }
        log::trace!("uniform block `{}` pushed ({} bytes)", self.name, bytes.len());
        self.updated = false;
        Ok(())
    }

    fn initialize(&self, program: &Program<G>) -> Result<Buffer<G>> {
        let gl = program.gl();
        let index = gl.get_uniform_block_index(program.id(), &self.name);
        if index == gl::INVALID_INDEX {
            return Err(Error::UniformBlockNotFound(self.name.clone()));
        }

        let bytes = bytemuck::bytes_of(&self.value);
        let size = gl.get_active_uniform_block_iv(program.id(), index, gl::UNIFORM_BLOCK_DATA_SIZE);
        if size as usize != bytes.len() {
            log::warn!(
                "uniform block `{}` is {} bytes in program {}, the host value is {} bytes",
                self.name,
                size,
                program.id(),
                bytes.len()
            );
        }

        let buffer = Buffer::with_data(gl, gl::UNIFORM_BUFFER, bytes, gl::STATIC_DRAW);
        let binding = self.binding.unwrap_or(index);
        gl.uniform_block_binding(program.id(), index, binding);
        buffer.bind_base(binding);
        log::debug!(
            "uniform block `{}` (index {}) bound to point {} with buffer {}",
            self.name,
            index,
            binding,
            buffer.id()
        );
        Ok(buffer)
    }
}

impl<T: BlockValue, G: GlApi> fmt::Display for UniformBlock<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {}: [{:?}]", self.name, self.value)
    }
}

impl<T: BlockValue, G: GlApi> DynUniform<G> for UniformBlock<T, G> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_updated(&self) -> bool {
        self.updated
    }

    /// A block has no single GLSL type, a mismatch reports the Rust type of
    /// its host value instead
    fn set_any(&mut self, value: &dyn Any) -> Result<bool> {
        match value.downcast_ref::<T>() {
            Some(value) => Ok(self.set(*value)),
            None => Err(Error::TypeMismatch {
                name: self.name.clone(),
                expected: type_name::<T>(),
            }),
        }
    }

    fn value_any(&self) -> &dyn Any {
        &self.value
    }

    fn push(&mut self, program: &Program<G>) -> Result<()> {
        self.set_uniform(program)
    }
}
