use super::{DynUniform, UniformValue};
use crate::graphics::{GlApi, Program};
use crate::{Error, Result};
use gl::types::GLint;
use std::any::Any;
use std::fmt;

/// A uniform variable in a shader, with the value last given by the host.
///
/// Setting the value it already holds does not mark it as updated.
#[derive(Clone, Debug)]
pub struct Uniform<T: UniformValue> {
    name: String,
    value: T,
    updated: bool,
    location: Option<GLint>,
}

impl<T: UniformValue> Uniform<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: T::default(),
            updated: false,
            location: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: T) -> Self {
        let mut uniform = Self::new(name);
        uniform.set(value);
        uniform
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Whether the value changed since it was last pushed
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Location recorded by the last push
    pub fn location(&self) -> Option<GLint> {
        self.location
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

    /// Uploads the value to `program`, which must be in use, whether it
    /// changed or not
    pub fn set_uniform<G: GlApi>(&mut self, program: &Program<G>) -> GLint {
        let location = program.uniform_location(&self.name);
        self.value.push(program.gl(), location);
        log::trace!("{} pushed to location {}", self, location);
        self.location = Some(location);
        self.updated = false;
        location
    }
}

impl<T: UniformValue> fmt::Display for Uniform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: [{:?}]", T::GLSL_TYPE, self.name, self.value)
    }
}

impl<T: UniformValue, G: GlApi> DynUniform<G> for Uniform<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_updated(&self) -> bool {
        self.updated
    }

    fn set_any(&mut self, value: &dyn Any) -> Result<bool> {
        match value.downcast_ref::<T>() {
            Some(value) => Ok(self.set(*value)),
            None => Err(Error::TypeMismatch {
                name: self.name.clone(),
                expected: T::GLSL_TYPE,
            }),
        }
    }

    fn value_any(&self) -> &dyn Any {
        &self.value
    }

    fn push(&mut self, program: &Program<G>) -> Result<()> {
        self.set_uniform(program);
        Ok(())
    }
}
