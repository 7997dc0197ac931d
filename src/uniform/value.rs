use crate::graphics::GlApi;
use gl::types::GLint;
use glam::{IVec2, IVec3, IVec4, Mat3, Mat4, Vec2, Vec3, Vec4};
use std::fmt;

/// A host value that can be uploaded to a single uniform location
pub trait UniformValue: Copy + PartialEq + Default + fmt::Debug + 'static {
    /// Name of the matching GLSL type
    const GLSL_TYPE: &'static str;

    /// Uploads the value to `location` of the program in use
    fn push<G: GlApi>(&self, gl: &G, location: GLint);
}

macro_rules! uniform_value {
    ($($ty:ty => $glsl:literal, |$v:ident, $gl:ident, $loc:ident| $push:expr;)+) => {
        $(
            impl UniformValue for $ty {
                const GLSL_TYPE: &'static str = $glsl;

                fn push<G: GlApi>(&self, $gl: &G, $loc: GLint) {
                    let $v = self;
                    $push
                }
            }
        )+
    };
}

uniform_value! {
    f32 => "float", |v, gl, loc| gl.uniform_1f(loc, *v);
    i32 => "int", |v, gl, loc| gl.uniform_1i(loc, *v);
    u32 => "uint", |v, gl, loc| gl.uniform_1ui(loc, *v);
    bool => "bool", |v, gl, loc| gl.uniform_1i(loc, *v as i32);
    Vec2 => "vec2", |v, gl, loc| gl.uniform_2f(loc, v.x, v.y);
    Vec3 => "vec3", |v, gl, loc| gl.uniform_3f(loc, v.x, v.y, v.z);
    Vec4 => "vec4", |v, gl, loc| gl.uniform_4f(loc, v.x, v.y, v.z, v.w);
    IVec2 => "ivec2", |v, gl, loc| gl.uniform_2i(loc, v.x, v.y);
    IVec3 => "ivec3", |v, gl, loc| gl.uniform_3i(loc, v.x, v.y, v.z);
    IVec4 => "ivec4", |v, gl, loc| gl.uniform_4i(loc, v.x, v.y, v.z, v.w);
    Mat3 => "mat3", |v, gl, loc| gl.uniform_matrix_3fv(loc, &v.to_cols_array());
    Mat4 => "mat4", |v, gl, loc| gl.uniform_matrix_4fv(loc, &v.to_cols_array());
}
