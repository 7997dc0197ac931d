//! Object wrappers around the OpenGL pipeline: framebuffer objects, typed
//! uniform variables and uniform blocks, and a small immediate-mode mesh.
//!
//! Every wrapper talks to the driver through [`graphics::GlApi`], so the
//! native entry points are resolved once per process by [`graphics::loader`]
//! instead of once per wrapper type.

pub mod error;
pub mod graphics;
pub mod models;
pub mod scene;
pub mod uniform;

pub use error::{Error, Result};
