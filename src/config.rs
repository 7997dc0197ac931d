use clap::Parser;
use std::path::PathBuf;

/// A spinning propeller, drawn off-screen and stretched over the window
#[derive(Debug, Parser)]
#[command(name = "propeller", version)]
pub struct Config {
    /// Initial window width
    #[arg(long, default_value_t = 500)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// Degrees the propeller turns every frame
    #[arg(long, default_value_t = 3.0, allow_hyphen_values = true)]
    pub rotation_step: f32,

    /// The off-screen image is this many times smaller than the window
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub downscale: u32,

    /// Scales the final color
    #[arg(long, default_value_t = 1.0)]
    pub brightness: f32,

    /// Directory containing propeller.vert and propeller.frag
    #[arg(long, default_value = "shaders")]
    pub shader_dir: PathBuf,

    /// Don't wait for the vertical blank when swapping buffers
    #[arg(long)]
    pub no_vsync: bool,
}
