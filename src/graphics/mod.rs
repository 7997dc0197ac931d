//! Thin wrappers around OpenGL objects.
//!
//! Each wrapper owns one native object and releases it on drop. Calls go
//! through [`GlApi`]; [`NativeGl`] is the driver, loaded once per process by
//! [`loader::load_with`].
mod api;
mod buffer;
mod depth_buffer;
mod framebuffer;
pub mod legacy;
pub mod loader;
mod shader;
mod texture;

#[cfg(test)]
pub(crate) mod recording;

pub use api::{check_error, rgba_len, GlApi, NativeGl};
pub use buffer::Buffer;
pub use depth_buffer::DepthBuffer;
pub use framebuffer::Framebuffer;
pub use shader::{FragmentShader, Program, VertexShader};
pub use texture::Texture;
