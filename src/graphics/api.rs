use super::{legacy, loader};
use crate::{Error, Result};
use gl::types::*;
use std::ffi::{c_void, CString};
use std::marker::PhantomData;
use std::ptr;

/// The subset of the OpenGL function table used by the wrappers.
///
/// Implementations are cheap handles (cloned into every wrapper that owns a
/// native object so it can release it on drop). All calls act on the context
/// that is current on the calling thread.
pub trait GlApi: Clone {
    // Framebuffers
    fn gen_framebuffer(&self) -> GLuint;
    fn bind_framebuffer(&self, target: GLenum, id: GLuint);
    fn check_framebuffer_status(&self, target: GLenum) -> GLenum;
    fn framebuffer_texture_2d(&self, attachment: GLenum, texture: GLuint);
    fn framebuffer_renderbuffer(&self, attachment: GLenum, renderbuffer: GLuint);
    fn draw_buffers(&self, buffers: &[GLenum]);
    fn blit_framebuffer(&self, src: [GLint; 4], dst: [GLint; 4], mask: GLbitfield, filter: GLenum);
    fn delete_framebuffer(&self, id: GLuint);

    // Textures and renderbuffers
    fn gen_texture(&self) -> GLuint;
    fn bind_texture(&self, id: GLuint);
    /// Reallocates the bound texture as `width`x`height` RGBA8.
    ///
    /// # Panics
    /// If `data` holds fewer than [`rgba_len`] bytes.
    fn tex_image_rgba(&self, width: GLsizei, height: GLsizei, data: Option<&[u8]>);
    fn tex_parameter(&self, pname: GLenum, param: GLint);
    fn delete_texture(&self, id: GLuint);
    fn gen_renderbuffer(&self) -> GLuint;
    fn bind_renderbuffer(&self, id: GLuint);
    fn renderbuffer_storage(&self, format: GLenum, width: GLsizei, height: GLsizei);
    fn delete_renderbuffer(&self, id: GLuint);

    // Buffers
    fn gen_buffer(&self) -> GLuint;
    fn bind_buffer(&self, target: GLenum, id: GLuint);
    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum);
    /// Returns null when the driver refuses the mapping
    fn map_buffer(&self, target: GLenum, access: GLenum) -> *mut c_void;
    /// Returns `false` when the buffer contents got corrupted while mapped
    fn unmap_buffer(&self, target: GLenum) -> bool;
    fn bind_buffer_base(&self, target: GLenum, index: GLuint, id: GLuint);
    fn delete_buffer(&self, id: GLuint);

    // Shaders and programs
    fn create_shader(&self, kind: GLenum) -> GLuint;
    fn shader_source(&self, id: GLuint, source: &str);
    fn compile_shader(&self, id: GLuint);
    fn get_shader_iv(&self, id: GLuint, pname: GLenum) -> GLint;
    fn shader_info_log(&self, id: GLuint) -> String;
    fn delete_shader(&self, id: GLuint);
    fn create_program(&self) -> GLuint;
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint);
    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint;
    fn program_info_log(&self, program: GLuint) -> String;
    fn use_program(&self, program: GLuint);
    fn delete_program(&self, program: GLuint);

    // Uniforms
    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint;
    fn uniform_1f(&self, location: GLint, x: f32);
    fn uniform_2f(&self, location: GLint, x: f32, y: f32);
    fn uniform_3f(&self, location: GLint, x: f32, y: f32, z: f32);
    fn uniform_4f(&self, location: GLint, x: f32, y: f32, z: f32, w: f32);
    fn uniform_1i(&self, location: GLint, x: i32);
    fn uniform_2i(&self, location: GLint, x: i32, y: i32);
    fn uniform_3i(&self, location: GLint, x: i32, y: i32, z: i32);
    fn uniform_4i(&self, location: GLint, x: i32, y: i32, z: i32, w: i32);
    fn uniform_1ui(&self, location: GLint, x: u32);
    fn uniform_matrix_3fv(&self, location: GLint, value: &[f32; 9]);
    fn uniform_matrix_4fv(&self, location: GLint, value: &[f32; 16]);
    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint;
    fn get_active_uniform_block_iv(&self, program: GLuint, index: GLuint, pname: GLenum) -> GLint;
    fn uniform_block_binding(&self, program: GLuint, index: GLuint, binding: GLuint);

    // Immediate mode
    fn matrix_mode(&self, mode: GLenum);
    fn load_matrix(&self, matrix: &[f32; 16]);
    fn begin(&self, mode: GLenum);
    fn end(&self);
    fn color_3f(&self, r: f32, g: f32, b: f32);
    fn vertex_3f(&self, x: f32, y: f32, z: f32);

    // State
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: GLbitfield);
    fn enable(&self, cap: GLenum);
    fn disable(&self, cap: GLenum);
    fn get_error(&self) -> GLenum;
}

/// Bytes taken by a `width`x`height` RGBA8 image
pub fn rgba_len(width: GLsizei, height: GLsizei) -> usize {
    width.max(0) as usize * height.max(0) as usize * 4
}

/// Turns a pending `glGetError` code into an error
pub fn check_error<G: GlApi>(gl: &G) -> Result<()> {
    match gl.get_error() {
        gl::NO_ERROR => Ok(()),
        code => Err(Error::Gl(code)),
    }
}

/// The driver's function table, as resolved by [`loader::load_with`].
///
/// It is neither `Send` nor `Sync`: an OpenGL context is current on a single
/// thread.
#[derive(Clone, Copy, Debug)]
pub struct NativeGl {
    _context: PhantomData<*const ()>,
}

impl NativeGl {
    /// # Safety
    /// An OpenGL context, from which the entry points were loaded, must be
    /// current on the calling thread for as long as the handle (and every
    /// wrapper holding a copy of it) is used.
    pub unsafe fn current() -> Result<Self> {
        if !loader::is_loaded() || !gl::GenFramebuffers::is_loaded() {
            return Err(Error::NotLoaded("glGenFramebuffers"));
        }
        if !gl::MapBuffer::is_loaded() {
            return Err(Error::NotLoaded("glMapBuffer"));
        }
        if !gl::GetUniformBlockIndex::is_loaded() {
            return Err(Error::NotLoaded("glGetUniformBlockIndex"));
        }
        if !legacy::Begin::is_loaded() {
            return Err(Error::NotLoaded("glBegin"));
        }
        Ok(Self {
            _context: PhantomData,
        })
    }
}

// Names with an interior nul can't exist in GLSL, the empty string resolves to nothing
fn c_name(name: &str) -> CString {
    CString::new(name).unwrap_or_default()
}

fn info_log(len: GLint, read: impl FnOnce(GLsizei, &mut GLsizei, *mut GLchar)) -> String {
    let mut buffer = vec![0u8; len.max(1) as usize];
    let mut written = 0;
    read(buffer.len() as GLsizei, &mut written, buffer.as_mut_ptr() as *mut GLchar);
    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}

impl GlApi for NativeGl {
    fn gen_framebuffer(&self) -> GLuint {
        let mut id = 0;
        unsafe { gl::GenFramebuffers(1, &mut id) };
        id
    }

    fn bind_framebuffer(&self, target: GLenum, id: GLuint) {
        unsafe { gl::BindFramebuffer(target, id) }
    }

    fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        unsafe { gl::CheckFramebufferStatus(target) }
    }

    fn framebuffer_texture_2d(&self, attachment: GLenum, texture: GLuint) {
        unsafe {
            gl::FramebufferTexture2D(gl::FRAMEBUFFER, attachment, gl::TEXTURE_2D, texture, 0)
        }
    }

    fn framebuffer_renderbuffer(&self, attachment: GLenum, renderbuffer: GLuint) {
        unsafe {
            gl::FramebufferRenderbuffer(
                gl::FRAMEBUFFER,
                attachment,
                gl::RENDERBUFFER,
                renderbuffer,
            )
        }
    }

    fn draw_buffers(&self, buffers: &[GLenum]) {
        unsafe { gl::DrawBuffers(buffers.len() as GLsizei, buffers.as_ptr()) }
    }

    fn blit_framebuffer(&self, src: [GLint; 4], dst: [GLint; 4], mask: GLbitfield, filter: GLenum) {
        unsafe {
            gl::BlitFramebuffer(
                src[0], src[1], src[2], src[3], dst[0], dst[1], dst[2], dst[3], mask, filter,
            )
        }
    }

    fn delete_framebuffer(&self, id: GLuint) {
        unsafe { gl::DeleteFramebuffers(1, &id) }
    }

    fn gen_texture(&self) -> GLuint {
        let mut id = 0;
        unsafe { gl::GenTextures(1, &mut id) };
        id
    }

    fn bind_texture(&self, id: GLuint) {
        unsafe { gl::BindTexture(gl::TEXTURE_2D, id) }
    }

    fn tex_image_rgba(&self, width: GLsizei, height: GLsizei, data: Option<&[u8]>) {
        if let Some(data) = data {
            // The driver reads the whole image from the pointer
            assert!(
                data.len() >= rgba_len(width, height),
                "{} bytes given for a {}x{} RGBA texture",
                data.len(),
                width,
                height
            );
        }
        let pixels = data.map_or(ptr::null(), |data| data.as_ptr() as *const c_void);
        unsafe {
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as i32,
                width,
                height,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pixels,
            )
        }
    }

    fn tex_parameter(&self, pname: GLenum, param: GLint) {
        unsafe { gl::TexParameteri(gl::TEXTURE_2D, pname, param) }
    }

    fn delete_texture(&self, id: GLuint) {
        unsafe { gl::DeleteTextures(1, &id) }
    }

    fn gen_renderbuffer(&self) -> GLuint {
        let mut id = 0;
        unsafe { gl::GenRenderbuffers(1, &mut id) };
        id
    }

    fn bind_renderbuffer(&self, id: GLuint) {
        unsafe { gl::BindRenderbuffer(gl::RENDERBUFFER, id) }
    }

    fn renderbuffer_storage(&self, format: GLenum, width: GLsizei, height: GLsizei) {
        unsafe { gl::RenderbufferStorage(gl::RENDERBUFFER, format, width, height) }
    }

    fn delete_renderbuffer(&self, id: GLuint) {
        unsafe { gl::DeleteRenderbuffers(1, &id) }
    }

    fn gen_buffer(&self) -> GLuint {
        let mut id = 0;
        unsafe { gl::GenBuffers(1, &mut id) };
        id
    }

    fn bind_buffer(&self, target: GLenum, id: GLuint) {
        unsafe { gl::BindBuffer(target, id) }
    }

    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) {
        unsafe {
            gl::BufferData(
                target,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                usage,
            )
        }
    }

    fn map_buffer(&self, target: GLenum, access: GLenum) -> *mut c_void {
        unsafe { gl::MapBuffer(target, access) }
    }

    fn unmap_buffer(&self, target: GLenum) -> bool {
        unsafe { gl::UnmapBuffer(target) == gl::TRUE }
    }

    fn bind_buffer_base(&self, target: GLenum, index: GLuint, id: GLuint) {
        unsafe { gl::BindBufferBase(target, index, id) }
    }

    fn delete_buffer(&self, id: GLuint) {
        unsafe { gl::DeleteBuffers(1, &id) }
    }

    fn create_shader(&self, kind: GLenum) -> GLuint {
        unsafe { gl::CreateShader(kind) }
    }

    fn shader_source(&self, id: GLuint, source: &str) {
        let length = source.len() as GLint;
        let source = source.as_ptr() as *const GLchar;
        unsafe { gl::ShaderSource(id, 1, &source, &length) }
    }

    fn compile_shader(&self, id: GLuint) {
        unsafe { gl::CompileShader(id) }
    }

    fn get_shader_iv(&self, id: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetShaderiv(id, pname, &mut value) };
        value
    }

    fn shader_info_log(&self, id: GLuint) -> String {
        let len = self.get_shader_iv(id, gl::INFO_LOG_LENGTH);
        info_log(len, |size, written, log| unsafe {
            gl::GetShaderInfoLog(id, size, written, log)
        })
    }

    fn delete_shader(&self, id: GLuint) {
        unsafe { gl::DeleteShader(id) }
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) }
    }

    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetProgramiv(program, pname, &mut value) };
        value
    }

    fn program_info_log(&self, program: GLuint) -> String {
        let len = self.get_program_iv(program, gl::INFO_LOG_LENGTH);
        info_log(len, |size, written, log| unsafe {
            gl::GetProgramInfoLog(program, size, written, log)
        })
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint {
        let name = c_name(name);
        unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
    }

    fn uniform_1f(&self, location: GLint, x: f32) {
        unsafe { gl::Uniform1f(location, x) }
    }

    fn uniform_2f(&self, location: GLint, x: f32, y: f32) {
        unsafe { gl::Uniform2f(location, x, y) }
    }

    fn uniform_3f(&self, location: GLint, x: f32, y: f32, z: f32) {
        unsafe { gl::Uniform3f(location, x, y, z) }
    }

    fn uniform_4f(&self, location: GLint, x: f32, y: f32, z: f32, w: f32) {
        unsafe { gl::Uniform4f(location, x, y, z, w) }
    }

    fn uniform_1i(&self, location: GLint, x: i32) {
        unsafe { gl::Uniform1i(location, x) }
    }

    fn uniform_2i(&self, location: GLint, x: i32, y: i32) {
        unsafe { gl::Uniform2i(location, x, y) }
    }

    fn uniform_3i(&self, location: GLint, x: i32, y: i32, z: i32) {
        unsafe { gl::Uniform3i(location, x, y, z) }
    }

    fn uniform_4i(&self, location: GLint, x: i32, y: i32, z: i32, w: i32) {
        unsafe { gl::Uniform4i(location, x, y, z, w) }
    }

    fn uniform_1ui(&self, location: GLint, x: u32) {
        unsafe { gl::Uniform1ui(location, x) }
    }

    fn uniform_matrix_3fv(&self, location: GLint, value: &[f32; 9]) {
        unsafe { gl::UniformMatrix3fv(location, 1, gl::FALSE, value.as_ptr()) }
    }

    fn uniform_matrix_4fv(&self, location: GLint, value: &[f32; 16]) {
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr()) }
    }

    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint {
        let name = c_name(name);
        unsafe { gl::GetUniformBlockIndex(program, name.as_ptr()) }
    }

    fn get_active_uniform_block_iv(&self, program: GLuint, index: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetActiveUniformBlockiv(program, index, pname, &mut value) };
        value
    }

    fn uniform_block_binding(&self, program: GLuint, index: GLuint, binding: GLuint) {
        unsafe { gl::UniformBlockBinding(program, index, binding) }
    }

    fn matrix_mode(&self, mode: GLenum) {
        unsafe { legacy::MatrixMode(mode) }
    }

    fn load_matrix(&self, matrix: &[f32; 16]) {
        unsafe { legacy::LoadMatrixf(matrix.as_ptr()) }
    }

    fn begin(&self, mode: GLenum) {
        unsafe { legacy::Begin(mode) }
    }

    fn end(&self) {
        unsafe { legacy::End() }
    }

    fn color_3f(&self, r: f32, g: f32, b: f32) {
        unsafe { legacy::Color3f(r, g, b) }
    }

    fn vertex_3f(&self, x: f32, y: f32, z: f32) {
        unsafe { legacy::Vertex3f(x, y, z) }
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { gl::ClearColor(r, g, b, a) }
    }

    fn clear(&self, mask: GLbitfield) {
        unsafe { gl::Clear(mask) }
    }

    fn enable(&self, cap: GLenum) {
        unsafe { gl::Enable(cap) }
    }

    fn disable(&self, cap: GLenum) {
        unsafe { gl::Disable(cap) }
    }

    fn get_error(&self) -> GLenum {
        unsafe { gl::GetError() }
    }
}
