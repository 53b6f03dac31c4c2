//! Desktop host: a winit window running the simulator.
//!
//! The app owns the [`Simulator`], the [`TickClock`] that paces it, and the
//! emoji button grid. Each redraw converts elapsed time into physics ticks,
//! builds the egui UI over the current particles, and renders the frame.
//! While no particles are live the clock is stopped and the event loop
//! sleeps until the next input.

mod ui;

pub use ui::UiEvent;

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::clock::TickClock;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::gpu::{BackdropStyle, EguiFrame, EguiIntegration, GpuState};
use crate::palette::{EmojiPalette, PaletteAction};
use crate::simulator::Simulator;
use crate::viewport::ViewportBounds;

pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    egui: Option<EguiIntegration>,
    simulator: Simulator,
    clock: TickClock,
    palette: EmojiPalette,
    /// Slot the picker is configuring, if open.
    picking: Option<usize>,
    /// Most recently fired emoji, for the Space shortcut.
    last_emoji: Option<String>,
    /// First fatal error raised inside an event callback.
    error: Option<AppError>,
}

impl App {
    pub fn new(config: AppConfig, simulator: Simulator) -> Self {
        let clock = TickClock::from_config(&config);
        let palette = EmojiPalette::with_emojis(config.palette.iter().cloned());
        Self {
            config,
            window: None,
            gpu: None,
            egui: None,
            simulator,
            clock,
            palette,
            picking: None,
            last_emoji: None,
            error: None,
        }
    }

    /// Open the window and block until it is closed.
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{}", err);
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    /// Current play area in logical pixels.
    fn bounds(&self) -> Option<ViewportBounds> {
        let window = self.window.as_ref()?;
        let size = window.inner_size().to_logical::<f32>(window.scale_factor());
        match ViewportBounds::from_logical(size) {
            Ok(bounds) => Some(bounds),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }

    fn explode(&mut self, emoji: &str) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        match self.simulator.spawn_burst(bounds, emoji) {
            Ok(_) => {
                self.last_emoji = Some(emoji.to_owned());
                self.clock.start(Instant::now());
                self.request_redraw();
            }
            Err(err) => log::warn!("burst rejected: {}", err),
        }
    }

    fn clear(&mut self) {
        self.simulator.clear();
        self.clock.stop();
    }

    fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Pressed(index) => match self.palette.press(index) {
                PaletteAction::Explode(emoji) => self.explode(&emoji),
                PaletteAction::Configure(index) => self.picking = Some(index),
                PaletteAction::None => {}
            },
            UiEvent::Picked(emoji) => {
                if let Some(index) = self.picking.take() {
                    match self.palette.assign(index, &emoji) {
                        Ok(true) => log::debug!("slot {} set to {}", index, emoji),
                        Ok(false) => log::warn!("slot {} no longer exists", index),
                        Err(err) => log::warn!("{}", err),
                    }
                }
            }
            UiEvent::CancelPick => self.picking = None,
            UiEvent::Clear => self.clear(),
            UiEvent::ToggleGravity => {
                self.simulator.toggle_gravity();
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Space => {
                if let Some(emoji) = self.last_emoji.clone() {
                    self.explode(&emoji);
                }
            }
            KeyCode::KeyG => {
                self.simulator.toggle_gravity();
                self.request_redraw();
            }
            KeyCode::KeyC => {
                self.clear();
                self.request_redraw();
            }
            _ => {}
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Run every physics tick that is due.
    fn step_simulation(&mut self) {
        let due = self.clock.advance(Instant::now());
        if due > 0 {
            if let Some(bounds) = self.bounds() {
                for _ in 0..due {
                    if self.simulator.tick(bounds).is_empty() {
                        break;
                    }
                }
            }
        }
        if self.simulator.is_idle() && self.clock.is_running() {
            log::debug!("all particles faded after {} ticks", self.clock.tick_count());
            self.clock.stop();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.step_simulation();

        let (Some(window), Some(gpu), Some(egui)) =
            (self.window.as_ref(), self.gpu.as_mut(), self.egui.as_mut())
        else {
            return;
        };

        egui.begin_frame(window);
        let events = ui::draw(
            &egui.ctx,
            ui::UiView {
                palette: &self.palette,
                picking: self.picking,
                picker: &self.config.picker,
                gravity_enabled: self.simulator.gravity_enabled(),
                particles: self.simulator.render_list(),
            },
        );
        let output = egui.end_frame(window);

        let result = gpu.render(&mut EguiFrame::new(egui, &output));
        egui.cleanup(&output);

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }

        let ui_changed = !events.is_empty();
        for event in events {
            self.apply(event);
        }
        if ui_changed {
            self.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };

        let gpu = match pollster::block_on(GpuState::new(window.clone(), BackdropStyle::default())) {
            Ok(gpu) => gpu,
            Err(err) => return self.fail(event_loop, err.into()),
        };

        let size = window.inner_size();
        log::info!("window {}x{} @ {:.2}x", size.width, size.height, window.scale_factor());

        self.egui = Some(EguiIntegration::new(gpu.device(), gpu.format(), &window));
        self.gpu = Some(gpu);
        self.window = Some(window);
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let consumed = match (&mut self.egui, &self.window) {
            (Some(egui), Some(window)) => {
                let response = egui.on_window_event(window, &event);
                if response.repaint {
                    window.request_redraw();
                }
                response.consumed
            }
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.set_scale_factor(scale_factor as f32);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } if !consumed => self.handle_key(code),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.simulator.is_idle() {
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::Poll);
            self.request_redraw();
        }
    }
}
