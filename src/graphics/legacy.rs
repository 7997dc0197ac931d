//! Compatibility profile entry points (immediate mode and the fixed function
//! matrix stack) that the core-only `gl` crate leaves out, generated by the
//! build script.
#![allow(
    clippy::all,
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    unused
)]

include!(concat!(env!("OUT_DIR"), "/legacy_gl_bindings.rs"));
