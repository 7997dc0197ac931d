use clap::Parser;
use glutin::dpi::LogicalSize;
use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{ContextBuilder, GlProfile, GlRequest};
use propeller_gl::graphics::{loader, NativeGl};

mod config;
mod stage;

use config::Config;
use stage::Stage;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    // Create the event loop
    let el = EventLoop::new();
    // Create the window builder
    let wb = WindowBuilder::new()
        .with_title("Propeller")
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));
    // The propeller is drawn in immediate mode, which needs the compatibility profile
    let wc = ContextBuilder::new()
        .with_gl(GlRequest::Latest)
        .with_gl_profile(GlProfile::Compatibility)
        .with_vsync(!config.no_vsync)
        .build_windowed(wb, &el)?;
    // Set the window context as the current context
    let window = unsafe { wc.make_current().map_err(|(_, e)| e)? };
    // Load the opengl functions
    loader::load_with(|symbol| window.context().get_proc_address(symbol) as *const _);
    // The context stays current on this thread for the whole event loop
    let gl = unsafe { NativeGl::current()? };

    let mut stage = Stage::new(&gl, &config, window.window().inner_size())?;
    log::info!("rendering at 1/{} of the window resolution", config.downscale);

    // Run the event loop
    el.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    window.resize(size);
                    stage.resize(size);
                }
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => {}
            },
            Event::MainEventsCleared => {
                let frame = stage
                    .draw()
                    .and_then(|_| window.swap_buffers().map_err(anyhow::Error::from));
                if let Err(e) = frame {
                    log::error!("{:#}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
