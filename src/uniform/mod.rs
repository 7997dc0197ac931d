//! Host side copies of shader uniforms.
//!
//! [`Uniform`] covers single variables of any [`UniformValue`] type,
//! [`UniformBlock`] covers blocks uploaded through a uniform buffer. Both only
//! mark themselves as updated when given a different value; deciding when to
//! push is up to the caller (or to [`UniformSet::push_updated`]).
mod block;
mod value;
mod variable;

pub use block::{BlockValue, UniformBlock};
pub use value::UniformValue;
pub use variable::Uniform;

use crate::graphics::{GlApi, Program};
use crate::{Error, Result};
use std::any::Any;

/// A uniform whose value type is only known at runtime
pub trait DynUniform<G: GlApi> {
    fn name(&self) -> &str;

    fn is_updated(&self) -> bool;

    /// Stores `value` if it has the uniform's type, returns whether it changed
    fn set_any(&mut self, value: &dyn Any) -> Result<bool>;

    fn value_any(&self) -> &dyn Any;

    fn push(&mut self, program: &Program<G>) -> Result<()>;
}

/// The uniforms of one program, addressed by name
pub struct UniformSet<G: GlApi> {
    uniforms: Vec<Box<dyn DynUniform<G>>>,
}

impl<G: GlApi> Default for UniformSet<G> {
    fn default() -> Self {
        Self {
            uniforms: Vec::new(),
        }
    }
}

impl<G: GlApi> UniformSet<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a uniform, replacing the one with the same name
    pub fn insert(&mut self, uniform: impl DynUniform<G> + 'static) {
        self.uniforms.retain(|u| u.name() != uniform.name());
        self.uniforms.push(Box::new(uniform));
    }

    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&dyn DynUniform<G>> {
        self.uniforms
            .iter()
            .find(|u| u.name() == name)
            .map(|u| &**u)
    }

    /// The current value of `name`, if it exists and holds a `T`
    pub fn value<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get(name)?.value_any().downcast_ref()
    }

    /// Sets the uniform called `name`, returns whether its value changed
    pub fn set<T: 'static>(&mut self, name: &str, value: T) -> Result<bool> {
        self.uniforms
            .iter_mut()
            .find(|u| u.name() == name)
            .ok_or_else(|| Error::UnknownUniform(name.to_string()))?
            .set_any(&value)
    }

    /// Pushes the uniforms whose value changed since their last push,
    /// returns how many were pushed
    pub fn push_updated(&mut self, program: &Program<G>) -> Result<usize> {
        let mut pushed = 0;
        for uniform in self.uniforms.iter_mut().filter(|u| u.is_updated()) {
            uniform.push(program)?;
            pushed += 1;
        }
        Ok(pushed)
    }

    /// Pushes every uniform
    pub fn push_all(&mut self, program: &Program<G>) -> Result<()> {
        self.uniforms.iter_mut().try_for_each(|u| u.push(program))
    }
}
