//! A `GlApi` that records calls instead of reaching a driver, for tests.

use super::{legacy, FragmentShader, GlApi, Program, VertexShader};
use gl::types::*;
use std::cell::{RefCell, RefMut};
use std::collections::HashMap;
use std::ffi::c_void;
use std::ptr;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    GenFramebuffer(GLuint),
    BindFramebuffer(GLenum, GLuint),
    CheckFramebufferStatus,
    FramebufferTexture(GLenum, GLuint),
    FramebufferRenderbuffer(GLenum, GLuint),
    DrawBuffers(Vec<GLenum>),
    BlitFramebuffer([GLint; 4], [GLint; 4]),
    DeleteFramebuffer(GLuint),
    GenTexture(GLuint),
    BindTexture(GLuint),
    TexImage(GLsizei, GLsizei),
    DeleteTexture(GLuint),
    GenRenderbuffer(GLuint),
    BindRenderbuffer(GLuint),
    RenderbufferStorage(GLsizei, GLsizei),
    DeleteRenderbuffer(GLuint),
    GenBuffer(GLuint),
    BindBuffer(GLenum, GLuint),
    BufferData(GLenum, usize),
    MapBuffer(GLenum),
    UnmapBuffer(GLenum),
    BindBufferBase(GLenum, GLuint, GLuint),
    DeleteBuffer(GLuint),
    UseProgram(GLuint),
    GetUniformLocation(String),
    Uniform1f(GLint, f32),
    Uniform2f(GLint, [f32; 2]),
    Uniform3f(GLint, [f32; 3]),
    Uniform4f(GLint, [f32; 4]),
    Uniform1i(GLint, i32),
    UniformInts(GLint, Vec<i32>),
    Uniform1ui(GLint, u32),
    UniformMatrix3(GLint, [f32; 9]),
    UniformMatrix4(GLint, [f32; 16]),
    GetUniformBlockIndex(String),
    UniformBlockBinding(GLuint, GLuint, GLuint),
    MatrixMode(GLenum),
    LoadMatrix([f32; 16]),
    Begin(GLenum),
    End,
    Color3f([f32; 3]),
    Vertex3f([f32; 3]),
    Other(&'static str),
}

#[derive(Default)]
pub struct State {
    calls: Vec<Call>,
    last_id: GLuint,
    buffers: HashMap<GLuint, Vec<u8>>,
    bound_buffers: HashMap<GLenum, GLuint>,
    framebuffer_status: Option<GLenum>,
    fail_map: bool,
    fail_unmap: bool,
    compile_log: Option<String>,
    link_log: Option<String>,
    uniform_locations: HashMap<String, GLint>,
    uniform_blocks: HashMap<String, (GLuint, GLint)>,
    error: GLenum,
}

impl State {
    // Ids are never handed out twice
    fn next_id(&mut self) -> GLuint {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Clone, Default)]
pub struct RecordingGl {
    state: Rc<RefCell<State>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> RefMut<'_, State> {
        self.state.borrow_mut()
    }

    fn record(&self, call: Call) {
        self.state().calls.push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn buffer_contents(&self, id: GLuint) -> Option<Vec<u8>> {
        self.state.borrow().buffers.get(&id).cloned()
    }

    pub fn set_framebuffer_status(&self, status: GLenum) {
        self.state().framebuffer_status = Some(status);
    }

    pub fn fail_next_map(&self) {
        self.state().fail_map = true;
    }

    pub fn fail_next_unmap(&self) {
        self.state().fail_unmap = true;
    }

    pub fn fail_compilation(&self, log: &str) {
        self.state().compile_log = Some(log.to_string());
    }

    pub fn fail_link(&self, log: &str) {
        self.state().link_log = Some(log.to_string());
    }

    pub fn set_uniform_location(&self, name: &str, location: GLint) {
        self.state()
            .uniform_locations
            .insert(name.to_string(), location);
    }

    pub fn add_uniform_block(&self, name: &str, index: GLuint, size: GLint) {
        self.state()
            .uniform_blocks
            .insert(name.to_string(), (index, size));
    }

    pub fn set_error(&self, error: GLenum) {
        self.state().error = error;
    }

    /// A linked program made of two empty shaders
    pub fn program(&self) -> Program<Self> {
        let vs = VertexShader::from_source(self, "").unwrap();
        let fs = FragmentShader::from_source(self, "").unwrap();
        Program::new(self, &vs, &fs).unwrap()
    }

    fn gen(&self, call: fn(GLuint) -> Call) -> GLuint {
        let id = self.state().next_id();
        self.record(call(id));
        id
    }
}

impl GlApi for RecordingGl {
    fn gen_framebuffer(&self) -> GLuint {
        self.gen(Call::GenFramebuffer)
    }

    fn bind_framebuffer(&self, target: GLenum, id: GLuint) {
        self.record(Call::BindFramebuffer(target, id));
    }

    fn check_framebuffer_status(&self, _target: GLenum) -> GLenum {
        self.record(Call::CheckFramebufferStatus);
        self.state
            .borrow()
            .framebuffer_status
            .unwrap_or(gl::FRAMEBUFFER_COMPLETE)
    }

    fn framebuffer_texture_2d(&self, attachment: GLenum, texture: GLuint) {
        self.record(Call::FramebufferTexture(attachment, texture));
    }

    fn framebuffer_renderbuffer(&self, attachment: GLenum, renderbuffer: GLuint) {
        self.record(Call::FramebufferRenderbuffer(attachment, renderbuffer));
    }

    fn draw_buffers(&self, buffers: &[GLenum]) {
        self.record(Call::DrawBuffers(buffers.to_vec()));
    }

    fn blit_framebuffer(&self, src: [GLint; 4], dst: [GLint; 4], _mask: GLbitfield, _filter: GLenum) {
        self.record(Call::BlitFramebuffer(src, dst));
    }

    fn delete_framebuffer(&self, id: GLuint) {
        self.record(Call::DeleteFramebuffer(id));
    }

    fn gen_texture(&self) -> GLuint {
        self.gen(Call::GenTexture)
    }

    fn bind_texture(&self, id: GLuint) {
        self.record(Call::BindTexture(id));
    }

    fn tex_image_rgba(&self, width: GLsizei, height: GLsizei, data: Option<&[u8]>) {
        if let Some(data) = data {
            assert!(data.len() >= super::rgba_len(width, height));
        }
        self.record(Call::TexImage(width, height));
    }

    fn tex_parameter(&self, _pname: GLenum, _param: GLint) {
        self.record(Call::Other("glTexParameteri"));
    }

    fn delete_texture(&self, id: GLuint) {
        self.record(Call::DeleteTexture(id));
    }

    fn gen_renderbuffer(&self) -> GLuint {
        self.gen(Call::GenRenderbuffer)
    }

    fn bind_renderbuffer(&self, id: GLuint) {
        self.record(Call::BindRenderbuffer(id));
    }

    fn renderbuffer_storage(&self, _format: GLenum, width: GLsizei, height: GLsizei) {
        self.record(Call::RenderbufferStorage(width, height));
    }

    fn delete_renderbuffer(&self, id: GLuint) {
        self.record(Call::DeleteRenderbuffer(id));
    }

    fn gen_buffer(&self) -> GLuint {
        let id = self.gen(Call::GenBuffer);
        self.state().buffers.insert(id, Vec::new());
        id
    }

    fn bind_buffer(&self, target: GLenum, id: GLuint) {
        self.record(Call::BindBuffer(target, id));
        self.state().bound_buffers.insert(target, id);
    }

    fn buffer_data(&self, target: GLenum, data: &[u8], _usage: GLenum) {
        self.record(Call::BufferData(target, data.len()));
        let mut state = self.state();
        if let Some(&id) = state.bound_buffers.get(&target) {
            state.buffers.insert(id, data.to_vec());
        }
    }

    fn map_buffer(&self, target: GLenum, _access: GLenum) -> *mut c_void {
        self.record(Call::MapBuffer(target));
        let mut state = self.state();
        if std::mem::take(&mut state.fail_map) {
            return ptr::null_mut();
        }
        let id = state.bound_buffers.get(&target).copied().unwrap_or(0);
        match state.buffers.get_mut(&id) {
            // The vector isn't resized while mapped, the pointer stays valid
            Some(contents) => contents.as_mut_ptr() as *mut c_void,
            None => ptr::null_mut(),
        }
    }

    fn unmap_buffer(&self, target: GLenum) -> bool {
        self.record(Call::UnmapBuffer(target));
        !std::mem::take(&mut self.state().fail_unmap)
    }

    fn bind_buffer_base(&self, target: GLenum, index: GLuint, id: GLuint) {
        self.record(Call::BindBufferBase(target, index, id));
    }

    fn delete_buffer(&self, id: GLuint) {
        self.record(Call::DeleteBuffer(id));
        self.state().buffers.remove(&id);
    }

    fn create_shader(&self, _kind: GLenum) -> GLuint {
        self.state().next_id()
    }

    fn shader_source(&self, _id: GLuint, _source: &str) {}

    fn compile_shader(&self, _id: GLuint) {}

    fn get_shader_iv(&self, _id: GLuint, _pname: GLenum) -> GLint {
        self.state.borrow().compile_log.is_none() as GLint
    }

    fn shader_info_log(&self, _id: GLuint) -> String {
        self.state.borrow().compile_log.clone().unwrap_or_default()
    }

    fn delete_shader(&self, _id: GLuint) {}

    fn create_program(&self) -> GLuint {
        self.state().next_id()
    }

    fn attach_shader(&self, _program: GLuint, _shader: GLuint) {}

    fn link_program(&self, _program: GLuint) {}

    fn get_program_iv(&self, _program: GLuint, _pname: GLenum) -> GLint {
        self.state.borrow().link_log.is_none() as GLint
    }

    fn program_info_log(&self, _program: GLuint) -> String {
        self.state.borrow().link_log.clone().unwrap_or_default()
    }

    fn use_program(&self, program: GLuint) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, _program: GLuint) {}

    fn get_uniform_location(&self, _program: GLuint, name: &str) -> GLint {
        self.record(Call::GetUniformLocation(name.to_string()));
        self.state
            .borrow()
            .uniform_locations
            .get(name)
            .copied()
            .unwrap_or(-1)
    }

    fn uniform_1f(&self, location: GLint, x: f32) {
        self.record(Call::Uniform1f(location, x));
    }

    fn uniform_2f(&self, location: GLint, x: f32, y: f32) {
        self.record(Call::Uniform2f(location, [x, y]));
    }

    fn uniform_3f(&self, location: GLint, x: f32, y: f32, z: f32) {
        self.record(Call::Uniform3f(location, [x, y, z]));
    }

    fn uniform_4f(&self, location: GLint, x: f32, y: f32, z: f32, w: f32) {
        self.record(Call::Uniform4f(location, [x, y, z, w]));
    }

    fn uniform_1i(&self, location: GLint, x: i32) {
        self.record(Call::Uniform1i(location, x));
    }

    fn uniform_2i(&self, location: GLint, x: i32, y: i32) {
        self.record(Call::UniformInts(location, vec![x, y]));
    }

    fn uniform_3i(&self, location: GLint, x: i32, y: i32, z: i32) {
        self.record(Call::UniformInts(location, vec![x, y, z]));
    }

    fn uniform_4i(&self, location: GLint, x: i32, y: i32, z: i32, w: i32) {
        self.record(Call::UniformInts(location, vec![x, y, z, w]));
    }

    fn uniform_1ui(&self, location: GLint, x: u32) {
        self.record(Call::Uniform1ui(location, x));
    }

    fn uniform_matrix_3fv(&self, location: GLint, value: &[f32; 9]) {
        self.record(Call::UniformMatrix3(location, *value));
    }

    fn uniform_matrix_4fv(&self, location: GLint, value: &[f32; 16]) {
        self.record(Call::UniformMatrix4(location, *value));
    }

    fn get_uniform_block_index(&self, _program: GLuint, name: &str) -> GLuint {
        self.record(Call::GetUniformBlockIndex(name.to_string()));
        self.state
            .borrow()
            .uniform_blocks
            .get(name)
            .map_or(gl::INVALID_INDEX, |&(index, _)| index)
    }

    fn get_active_uniform_block_iv(&self, _program: GLuint, index: GLuint, _pname: GLenum) -> GLint {
        self.state
            .borrow()
            .uniform_blocks
            .values()
            .find(|&&(i, _)| i == index)
            .map_or(0, |&(_, size)| size)
    }

    fn uniform_block_binding(&self, program: GLuint, index: GLuint, binding: GLuint) {
        self.record(Call::UniformBlockBinding(program, index, binding));
    }

    fn matrix_mode(&self, mode: GLenum) {
        self.record(Call::MatrixMode(mode));
    }

    fn load_matrix(&self, matrix: &[f32; 16]) {
        self.record(Call::LoadMatrix(*matrix));
    }

    fn begin(&self, mode: GLenum) {
        self.record(Call::Begin(mode));
    }

    fn end(&self) {
        self.record(Call::End);
    }

    fn color_3f(&self, r: f32, g: f32, b: f32) {
        self.record(Call::Color3f([r, g, b]));
    }

    fn vertex_3f(&self, x: f32, y: f32, z: f32) {
        self.record(Call::Vertex3f([x, y, z]));
    }

    fn viewport(&self, _x: GLint, _y: GLint, _width: GLsizei, _height: GLsizei) {
        self.record(Call::Other("glViewport"));
    }

    fn clear_color(&self, _r: f32, _g: f32, _b: f32, _a: f32) {
        self.record(Call::Other("glClearColor"));
    }

    fn clear(&self, _mask: GLbitfield) {
        self.record(Call::Other("glClear"));
    }

    fn enable(&self, _cap: GLenum) {
        self.record(Call::Other("glEnable"));
    }

    fn disable(&self, _cap: GLenum) {
        self.record(Call::Other("glDisable"));
    }

    fn get_error(&self) -> GLenum {
        std::mem::replace(&mut self.state().error, gl::NO_ERROR)
    }
}

#[test]
fn pending_error_is_reported_once() {
    let gl = RecordingGl::new();
    gl.set_error(gl::INVALID_OPERATION);
    assert!(matches!(
        super::check_error(&gl),
        Err(crate::Error::Gl(gl::INVALID_OPERATION))
    ));
    assert!(super::check_error(&gl).is_ok());
}

#[test]
fn legacy_constants_match_the_registry() {
    assert_eq!(legacy::QUADS, 0x0007);
    assert_eq!(legacy::MODELVIEW, 0x1700);
    assert_eq!(legacy::PROJECTION, 0x1701);
}
