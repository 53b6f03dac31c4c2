//! Egui integration for the desktop host.
//!
//! Egui draws the whole interactive surface: the title, the button grid,
//! the picker, and every particle glyph. This module owns the egui context,
//! the winit input state, and the wgpu renderer.

use std::sync::Arc;
use winit::window::Window;

use super::Overlay;

/// Egui integration state.
pub struct EguiIntegration {
    pub ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Tessellated output of one egui pass.
pub struct EguiFrameOutput {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl EguiIntegration {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();

        // Light page with flat popups
        let mut style = egui::Style::default();
        style.visuals = egui::Visuals::light();
        style.visuals.window_shadow = egui::Shadow::NONE;
        style.visuals.popup_shadow = egui::Shadow::NONE;
        ctx.set_style(style);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self { ctx, state, renderer }
    }

    /// Feed a winit event to egui.
    ///
    /// `consumed` is set when egui wants the event for itself (e.g. a
    /// keystroke while a widget has focus); `repaint` when the UI changed.
    pub fn on_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> egui_winit::EventResponse {
        self.state.on_window_event(window, event)
    }

    /// Begin a new pass. Call before building the UI.
    pub fn begin_frame(&mut self, window: &Window) {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_pass(raw_input);
    }

    /// End the pass and tessellate it for rendering.
    pub fn end_frame(&mut self, window: &Window) -> EguiFrameOutput {
        let full_output = self.ctx.end_pass();

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        EguiFrameOutput {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        }
    }

    /// Free textures egui no longer needs. Call after the frame is submitted.
    pub fn cleanup(&mut self, output: &EguiFrameOutput) {
        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

/// One finished egui pass, ready to be drawn over the backdrop.
pub struct EguiFrame<'a> {
    integration: &'a mut EguiIntegration,
    output: &'a EguiFrameOutput,
    /// Surface size recorded by `prepare`, used to clip at paint time.
    size_in_pixels: [u32; 2],
}

impl<'a> EguiFrame<'a> {
    pub fn new(integration: &'a mut EguiIntegration, output: &'a EguiFrameOutput) -> Self {
        Self {
            integration,
            output,
            size_in_pixels: [0, 0],
        }
    }

    fn screen_descriptor(&self) -> egui_wgpu::ScreenDescriptor {
        egui_wgpu::ScreenDescriptor {
            size_in_pixels: self.size_in_pixels,
            pixels_per_point: self.output.pixels_per_point,
        }
    }
}

impl Overlay for EguiFrame<'_> {
    fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        size_in_pixels: [u32; 2],
    ) -> Vec<wgpu::CommandBuffer> {
        self.size_in_pixels = size_in_pixels;
        let screen_descriptor = self.screen_descriptor();
        let renderer = &mut self.integration.renderer;

        for (id, image_delta) in &self.output.textures_delta.set {
            renderer.update_texture(device, queue, *id, image_delta);
        }

        renderer.update_buffers(
            device,
            queue,
            encoder,
            &self.output.paint_jobs,
            &screen_descriptor,
        )
    }

    fn paint(&self, pass: &mut wgpu::RenderPass<'static>) {
        let screen_descriptor = self.screen_descriptor();
        self.integration
            .renderer
            .render(pass, &self.output.paint_jobs, &screen_descriptor);
    }
}
