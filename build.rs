use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use std::env;
use std::fs::File;
use std::path::Path;

// The `gl` crate only ships core profile bindings, the propeller is drawn with
// the compatibility profile's immediate mode and matrix stack
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let mut file = File::create(Path::new(&out_dir).join("legacy_gl_bindings.rs")).unwrap();
    Registry::new(Api::Gl, (2, 1), Profile::Compatibility, Fallbacks::All, [])
        .write_bindings(GlobalGenerator, &mut file)
        .unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}
