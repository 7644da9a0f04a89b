use std::sync::Arc;
use wgpu::{Adapter, Device, DeviceDescriptor, Instance, Queue, Surface, SurfaceConfiguration};
use winit::window::Window;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Device, queue and adapter shared by the presenter and the page overlay
///
/// Cloning is cheap; the device and queue sit behind `Arc`s.
#[derive(Clone)]
pub struct GpuContext {
    adapter: Arc<Adapter>,
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a context and the window's surface from one instance
    ///
    /// The adapter is chosen for compatibility with that surface.
    pub async fn for_window(window: Arc<Window>) -> Result<(Self, Surface<'static>)> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        log::info!("using GPU adapter: {}", adapter.get_info().name);

        let context = Self {
            adapter: Arc::new(adapter),
            device: Arc::new(device),
            queue: Arc::new(queue),
        };
        Ok((context, surface))
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Surface configuration preferring an sRGB format
    pub fn surface_config(&self, surface: &Surface<'_>, width: u32, height: u32) -> Result<SurfaceConfiguration> {
        let caps = surface.get_capabilities(&self.adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or("surface reports no supported formats")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        Ok(SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    async fn request_adapter(instance: &Instance, surface: &Surface<'_>) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| format!("Failed to find appropriate adapter: {:?}", e).into())
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&DeviceDescriptor {
                label: Some("Portfolio Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| format!("Failed to create device: {:?}", e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_semantics() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GpuContext>();
    }
}
