use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{DISCRETENESS_STEP, KAPPA_STEP, VELOCITY_STEP};
use crate::gpu::{GpuContext, HeatmapPipeline, LandscapeBuffers};
use crate::model::{ParamKind, Session, Summary};

/// Application state: the session plus the window/GPU plumbing that
/// displays it. All recomputation happens synchronously inside the
/// event callbacks; a keypress returns only after the new landscape is
/// on its way to the screen.
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    buffers: Option<LandscapeBuffers>,
    pipeline: Option<HeatmapPipeline>,
    session: Session,
    landscape_dirty: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            buffers: None,
            pipeline: None,
            session: Session::new(),
            landscape_dirty: false,
        }
    }

    fn render(&mut self) {
        let gpu = self.gpu.as_ref().unwrap();
        let buffers = self.buffers.as_ref().unwrap();
        let pipeline = self.pipeline.as_ref().unwrap();

        if self.landscape_dirty {
            buffers.upload_landscape(&gpu.queue, self.session.landscape());
            self.landscape_dirty = false;
        }

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        let bind_group = pipeline.create_bind_group(
            &gpu.device,
            &buffers.grid_buffer,
            &buffers.display_params_buffer,
        );
        pipeline.draw(&mut encoder, &view, &bind_group);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        match key_code {
            // Velocity
            KeyCode::ArrowUp => {
                self.session.adjust_parameter(ParamKind::Velocity, VELOCITY_STEP);
            }
            KeyCode::ArrowDown => {
                self.session.adjust_parameter(ParamKind::Velocity, -VELOCITY_STEP);
            }

            // Curvature (left = deeper, right = toward zero)
            KeyCode::ArrowLeft => {
                self.session.adjust_parameter(ParamKind::Curvature, -KAPPA_STEP);
            }
            KeyCode::ArrowRight => {
                self.session.adjust_parameter(ParamKind::Curvature, KAPPA_STEP);
            }

            // Base discreteness
            KeyCode::BracketLeft => {
                self.session
                    .adjust_parameter(ParamKind::Discreteness, -DISCRETENESS_STEP);
            }
            KeyCode::BracketRight => {
                self.session
                    .adjust_parameter(ParamKind::Discreteness, DISCRETENESS_STEP);
            }

            // Mode cycle
            KeyCode::KeyM | KeyCode::Space => {
                let mode = self.session.toggle_mode();
                log::info!("Mode: {}", mode.label());
            }

            // Reset to documented defaults
            KeyCode::KeyR => {
                self.session.reset();
                log::info!("Parameters reset");
            }

            _ => return,
        }

        self.landscape_dirty = true;
        self.report_state();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Log the multi-line summary and mirror a condensed form in the
    /// window title.
    fn report_state(&self) {
        let summary = self.session.summary();

        log::info!("gamma (Lorentz factor): {:.3}", summary.gamma);
        log::info!("f' = f/gamma = {:.3} Hz", summary.rate_boosted);
        log::info!("n' = n*gamma = {:.1}", summary.discreteness_boosted);
        log::info!("D = |kappa| f'^2 n'^2 = {:.4}", summary.debt);
        log::info!(
            "{}: {}",
            summary.regime.label(),
            summary.regime.description()
        );

        if let Some(window) = &self.window {
            window.set_title(&title_line(&self.session, &summary));
        }
    }
}

fn title_line(session: &Session, summary: &Summary) -> String {
    format!(
        "RSS Debt Lab [{}] - v={:.2} kappa={:.3} n={:.0} - gamma={:.3} D={:.2} - {}",
        session.mode().label(),
        session.params().velocity,
        session.params().kappa,
        session.params().discreteness,
        summary.gamma,
        summary.debt,
        summary.regime.label()
    )
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing RSS debt landscape laboratory...");

        let window_attrs = Window::default_attributes()
            .with_title("RSS Debt Lab - Initializing...")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 800));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()));

        log::info!("Uploading initial landscape...");
        let buffers = LandscapeBuffers::new(&gpu.device, &gpu.queue, self.session.landscape());

        log::info!("Creating heat-map pipeline...");
        let pipeline = HeatmapPipeline::new(&gpu.device, gpu.format());

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Up/Down: velocity +/- (watch debt reallocate under boost)");
        log::info!("  Left/Right: curvature deeper / toward zero");
        log::info!("  [/]: base discreteness -/+");
        log::info!("  M or Space: cycle Newton/Interval/Ghost mode");
        log::info!("  R: reset parameters");
        log::info!("  Escape: quit");

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.buffers = Some(buffers);
        self.pipeline = Some(pipeline);

        self.report_state();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            _ => {}
        }
    }
}
