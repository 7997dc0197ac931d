//! Process wide resolution of the OpenGL entry points.

use super::legacy;
use std::ffi::c_void;
use std::sync::Once;

static LOAD: Once = Once::new();

/// Resolves every entry point through `loadfn`, usually the windowing
/// library's `get_proc_address`.
///
/// Only the first call does anything, later calls (from any thread) return
/// once the first one has finished. Extension fallbacks (`glGenFramebuffersEXT`
/// and friends) are tried when the core name is missing.
pub fn load_with<F>(mut loadfn: F)
where
    F: FnMut(&'static str) -> *const c_void,
{
    LOAD.call_once(|| {
        gl::load_with(&mut loadfn);
        legacy::load_with(&mut loadfn);
        log::debug!(
            "OpenGL entry points loaded (framebuffers: {}, uniform blocks: {}, immediate mode: {})",
            gl::GenFramebuffers::is_loaded(),
            gl::GetUniformBlockIndex::is_loaded(),
            legacy::Begin::is_loaded(),
        );
    });
}

/// Whether [`load_with`] already ran
pub fn is_loaded() -> bool {
    LOAD.is_completed()
}
