//! Backdrop pass: the grey frame around the play area.
//!
//! A single fullscreen triangle. The fragment shader measures the distance
//! to the nearest window edge and paints a solid border that fades out
//! towards the interior.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// WGSL source of the backdrop shader.
pub const BACKDROP_SHADER: &str = r#"
struct Uniforms {
    border_color: vec4<f32>,
    viewport: vec2<f32>,
    border: f32,
    fade: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> @builtin(position) vec4<f32> {
    var corners = array<vec2<f32>, 3>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 3.0, -1.0),
        vec2<f32>(-1.0,  3.0),
    );
    return vec4<f32>(corners[vertex_index], 0.0, 1.0);
}

@fragment
fn fs_main(@builtin(position) frag: vec4<f32>) -> @location(0) vec4<f32> {
    let p = frag.xy;
    let edge = min(min(p.x, p.y), min(uniforms.viewport.x - p.x, uniforms.viewport.y - p.y));
    let inside = clamp((edge - uniforms.border) / max(uniforms.fade, 0.0001), 0.0, 1.0);
    let alpha = uniforms.border_color.a * (1.0 - inside);
    if alpha <= 0.0 {
        discard;
    }
    return vec4<f32>(uniforms.border_color.rgb, alpha);
}
"#;

/// Colors and widths of the frame, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropStyle {
    /// Clear color behind everything (linear RGBA).
    pub background: wgpu::Color,
    /// Border color (linear RGBA).
    pub border_color: [f32; 4],
    /// Solid border width.
    pub border: f32,
    /// Width of the gradient from the border into the play area.
    pub fade: f32,
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self {
            background: wgpu::Color {
                r: 0.96,
                g: 0.96,
                b: 0.97,
                a: 1.0,
            },
            // #d1d5db
            border_color: [0.637, 0.665, 0.716, 1.0],
            border: 40.0,
            fade: 20.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct BackdropUniforms {
    border_color: [f32; 4],
    viewport: [f32; 2],
    border: f32,
    fade: f32,
}

impl BackdropUniforms {
    /// Uniforms for a surface of `size_in_pixels` at `scale_factor` physical pixels per logical pixel.
    pub(crate) fn new(style: &BackdropStyle, size_in_pixels: [u32; 2], scale_factor: f32) -> Self {
        Self {
            border_color: style.border_color,
            viewport: [size_in_pixels[0] as f32, size_in_pixels[1] as f32],
            border: style.border * scale_factor,
            fade: style.fade * scale_factor,
        }
    }
}

pub(crate) struct Backdrop {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    style: BackdropStyle,
}

impl Backdrop {
    pub(crate) fn new(device: &wgpu::Device, format: wgpu::TextureFormat, style: BackdropStyle) -> Self {
        let uniforms = BackdropUniforms::new(&style, [1, 1], 1.0);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Backdrop Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Backdrop Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Backdrop Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Backdrop Shader"),
            source: wgpu::ShaderSource::Wgsl(BACKDROP_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Backdrop Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Backdrop Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            style,
        }
    }

    pub(crate) fn background(&self) -> wgpu::Color {
        self.style.background
    }

    pub(crate) fn update(&self, queue: &wgpu::Queue, size_in_pixels: [u32; 2], scale_factor: f32) {
        let uniforms = BackdropUniforms::new(&self.style, size_in_pixels, scale_factor);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
