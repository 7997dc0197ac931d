use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("OpenGL entry point `{0}` is not loaded")]
    NotLoaded(&'static str),

    #[error("Framebuffer incomplete error: {status:#x}")]
    IncompleteFramebuffer { status: u32 },

    #[error("uniform block `{0}` is not active in the program")]
    UniformBlockNotFound(String),

    #[error("no uniform named `{0}`")]
    UnknownUniform(String),

    /// `expected` is the GLSL type of a variable, or the Rust type backing a
    /// uniform block
    #[error("value does not match the type `{expected}` of uniform `{name}`")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("{len} bytes don't fit in the {capacity} bytes of buffer {buffer}")]
    BufferOverflow {
        buffer: u32,
        len: usize,
        capacity: usize,
    },

    #[error("failed to map buffer {0}")]
    MapBufferFailed(u32),

    #[error("buffer {0} got corrupted while mapped")]
    UnmapBufferFailed(u32),

    #[error("{kind} shader compile error:\n{log}")]
    ShaderCompile { kind: &'static str, log: String },

    #[error("program link error:\n{0}")]
    ProgramLink(String),

    #[error("failed to read shader {}", path.display())]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("OpenGL error {0:#x}")]
    Gl(u32),
}
