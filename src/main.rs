use std::path::Path;

use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod config;
mod gpu;
mod model;
mod plots;

use app::App;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting curvature debt laboratory...");
    log::info!("Drag velocity up to watch debt reallocate under the Lorentz boost,");
    log::info!("deepen curvature to raise the whole landscape, and cycle the");
    log::info!("Newton/Interval/Ghost presets to jump between regimes.");
    log::info!("Red cells are high-debt territory, green cells are safe.");

    // The two-panel comparison figure is independent of the interactive
    // session; write it up front so it exists even if the window is
    // closed immediately. A failure here must not block the lab.
    let figure_path = Path::new(config::FIGURE_PATH);
    match plots::write_comparison_figure(figure_path) {
        Ok(()) => log::info!("Wrote comparison figure to {}", figure_path.display()),
        Err(e) => log::error!("Could not write comparison figure: {}", e),
    }

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    // Redraws only happen on input, so wait for events instead of polling
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop
        .run_app(&mut app)
        .expect("Event loop terminated abnormally");
}
