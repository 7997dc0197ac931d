macro_rules! shader {
	($name: ident [$gl: ident]: $kind:literal) => {
		pub struct $name<G: GlApi = NativeGl> {
			gl: G,
			id: u32,
			source: String,
		}

		impl<G: GlApi> $name<G> {
			pub(super) fn handle(&self) -> u32 {
				self.id
			}

			/// Compiles the shader from its GLSL source code
			pub fn from_source(gl: &G, source: &str) -> Result<Self> {
				// Create a new shader and attach the source code to it
				let id = gl.create_shader(gl::$gl);
				gl.shader_source(id, source);
				gl.compile_shader(id); // Compile it

				// Checking shader compile status
				if gl.get_shader_iv(id, gl::COMPILE_STATUS) == 0 {
					let log = gl.shader_info_log(id);
					gl.delete_shader(id);
					Err(Error::ShaderCompile { kind: $kind, log })
				} else {
					Ok(Self {
						gl: gl.clone(),
						id,
						source: source.to_string(),
					})
				}
			}

			pub fn from_file(gl: &G, path: &Path) -> Result<Self> {
				let source = fs::read_to_string(path).map_err(|source| Error::ShaderRead {
					path: path.to_path_buf(),
					source,
				})?;
				Self::from_source(gl, &source)
			}
		}

		impl<G: GlApi> fmt::Debug for $name<G> {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, concat!($kind, " source code:\n{}"), self.source)
			}
		}

		impl<G: GlApi> Drop for $name<G> {
			fn drop(&mut self) {
				self.gl.delete_shader(self.id);
			}
		}
	};
}

use super::{GlApi, NativeGl};
use crate::{Error, Result};
use std::fmt;
use std::fs;
use std::path::Path;

shader! {VertexShader[VERTEX_SHADER]: "Vertex"}
shader! {FragmentShader[FRAGMENT_SHADER]: "Fragment"}

pub use program::Program;
mod program;
