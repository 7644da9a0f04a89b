use std::sync::Arc;
use wgpu::{BindGroup, Device, RenderPipeline, Surface, SurfaceConfiguration, Texture, TextureView};
use winit::event::WindowEvent;
use winit::window::Window;

use super::canvas::Canvas;
use super::gpu_context::GpuContext;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Check that an RGBA8 buffer holds exactly `width * height` pixels
pub fn validate_frame(pixels: &[u8], width: u32, height: u32) -> Result<()> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(format!(
            "Invalid pixel buffer size: expected {} bytes for {}x{}, got {}",
            expected,
            width,
            height,
            pixels.len()
        )
        .into());
    }
    Ok(())
}

/// egui state for the page content drawn over the scenes
struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Presents the composed page frame on the window surface
///
/// The frame is uploaded to a texture and drawn with a fullscreen triangle;
/// the optional egui overlay is painted on top in a second pass.
pub struct SurfaceRenderer {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    render_pipeline: RenderPipeline,
    texture: Texture,
    bind_group: BindGroup,
    texture_size: (u32, u32),
    overlay: Option<Overlay>,
}

impl SurfaceRenderer {
    /// Create the presenter for `window`, with or without the page overlay
    pub async fn new(window: Arc<Window>, with_overlay: bool) -> Result<Self> {
        let size = window.inner_size();
        let (gpu, surface) = GpuContext::for_window(window.clone()).await?;

        let surface_config = gpu.surface_config(&surface, size.width, size.height)?;
        surface.configure(gpu.device(), &surface_config);

        let width = surface_config.width;
        let height = surface_config.height;
        let texture = Self::create_frame_texture(gpu.device(), width, height);
        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let (render_pipeline, bind_group) =
            Self::create_render_pipeline(gpu.device(), &texture_view, surface_config.format);

        let overlay = with_overlay.then(|| {
            let ctx = egui::Context::default();
            let state = egui_winit::State::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            let renderer = egui_wgpu::Renderer::new(
                gpu.device(),
                surface_config.format,
                egui_wgpu::RendererOptions::default(),
            );
            Overlay { ctx, state, renderer }
        });

        log::info!(
            "surface configured: {}x{} {:?} (overlay: {})",
            width,
            height,
            surface_config.format,
            with_overlay
        );

        Ok(Self {
            gpu,
            surface,
            surface_config,
            render_pipeline,
            texture,
            bind_group,
            texture_size: (width, height),
            overlay,
        })
    }

    /// Feed a window event to the overlay; true when egui consumed it
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        match &mut self.overlay {
            Some(overlay) => overlay.state.on_window_event(window, event).consumed,
            None => false,
        }
    }

    /// True while an overlay text field holds keyboard focus
    pub fn wants_keyboard(&self) -> bool {
        self.overlay
            .as_ref()
            .is_some_and(|overlay| overlay.ctx.wants_keyboard_input())
    }

    /// Upload `frame`, draw it, run `build_ui` for the overlay and present
    pub fn render<F>(&mut self, frame: &Canvas, window: &Window, build_ui: F) -> std::result::Result<(), wgpu::SurfaceError>
    where
        F: FnMut(&egui::Context),
    {
        let (width, height) = (frame.width(), frame.height());
        if width == 0 || height == 0 || validate_frame(frame.pixels(), width, height).is_err() {
            log::debug!("skipping present of empty or malformed frame");
            return Ok(());
        }
        if (width, height) != self.texture_size {
            self.recreate_frame_texture(width, height);
        }

        self.gpu.queue().write_texture(
            self.texture.as_image_copy(),
            frame.pixels(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let surface_texture = self.surface.get_current_texture()?;
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Page Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Page Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }

        if let Some(overlay) = &mut self.overlay {
            Self::paint_overlay(
                overlay,
                &self.gpu,
                &mut encoder,
                &surface_view,
                window,
                [self.surface_config.width, self.surface_config.height],
                build_ui,
            );
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        surface_texture.present();

        Ok(())
    }

    /// Reconfigure the surface after a window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    /// Re-apply the current configuration, used after a lost surface
    pub fn reconfigure(&mut self) {
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    fn paint_overlay<F>(
        overlay: &mut Overlay,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &TextureView,
        window: &Window,
        size_in_pixels: [u32; 2],
        mut build_ui: F,
    ) where
        F: FnMut(&egui::Context),
    {
        let raw_input = overlay.state.take_egui_input(window);
        let full_output = overlay.ctx.run(raw_input, |ctx| build_ui(ctx));

        overlay
            .state
            .handle_platform_output(window, full_output.platform_output);

        let tris = overlay
            .ctx
            .tessellate(full_output.shapes, overlay.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            overlay
                .renderer
                .update_texture(gpu.device(), gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: window.scale_factor() as f32,
        };

        overlay
            .renderer
            .update_buffers(gpu.device(), gpu.queue(), encoder, &tris, &screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Page Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            overlay
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            overlay.renderer.free_texture(id);
        }
    }

    fn recreate_frame_texture(&mut self, width: u32, height: u32) {
        self.texture = Self::create_frame_texture(self.gpu.device(), width, height);
        let texture_view = self.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group_layout = self.render_pipeline.get_bind_group_layout(0);
        self.bind_group = Self::create_bind_group(self.gpu.device(), &bind_group_layout, &texture_view);
        self.texture_size = (width, height);
    }

    /// Frame texture; sRGB so the canvas colours survive the sRGB surface
    fn create_frame_texture(device: &Device, width: u32, height: u32) -> Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Page Frame Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        })
    }

    fn create_render_pipeline(
        device: &Device,
        texture_view: &TextureView,
        surface_format: wgpu::TextureFormat,
    ) -> (RenderPipeline, BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Page Display Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../display.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Page Frame Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = Self::create_bind_group(device, &bind_group_layout, texture_view);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Page Frame Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Page Frame Pipeline"),
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
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group)
    }

    fn create_bind_group(device: &Device, layout: &wgpu::BindGroupLayout, texture_view: &TextureView) -> BindGroup {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Page Frame Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Page Frame Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        })
    }
}
