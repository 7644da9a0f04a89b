use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use portfolio3d::cli::Cli;
use portfolio3d::config::PortfolioConfig;
use portfolio3d::core::{Clock, FpsCounter, InputAdapter, PageEvent, SurfaceRenderer, SurfaceSize, TimeSource};
use portfolio3d::portfolio::Portfolio;
use portfolio3d::ui;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    config: PortfolioConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
    portfolio: Option<Portfolio>,
    input: InputAdapter,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli, config: PortfolioConfig) -> Self {
        Self {
            cli,
            config,
            window: None,
            renderer: None,
            portfolio: None,
            input: InputAdapter::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer), Some(portfolio)) =
            (&self.window, &mut self.renderer, &mut self.portfolio)
        else {
            return;
        };

        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            if !self.cli.no_ui {
                log::info!("FPS: {fps:.1}");
            }
        }

        portfolio.tick(&self.clock);
        portfolio.compose();

        let now = self.clock.now();
        let fps = (!self.cli.no_ui).then(|| self.fps.fps());
        let (frame, page) = portfolio.frame_and_page();

        match renderer.render(frame, window, |ctx| ui::draw_page(ctx, page, now, fps)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost or outdated; reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e}"),
        }
    }

    fn handle_page_event(&mut self, event: PageEvent) {
        let now = self.clock.now();
        let Some(portfolio) = &mut self.portfolio else {
            return;
        };

        match event {
            PageEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                let resized = portfolio.resize(size, now);
                log::debug!("window resized to {}x{}; {resized} scenes updated", size.width, size.height);
            }
            PageEvent::PointerMoved(point) => {
                portfolio.pointer_moved(point);
            }
            PageEvent::Scrolled(delta) => portfolio.scroll_by(delta, now),
            PageEvent::PointerLeft => portfolio.pointer_left(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SurfaceRenderer::new(window.clone(), !self.cli.no_ui)) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        log::info!("window created: {}x{}", size.width, size.height);

        let mut portfolio = Portfolio::new(
            &self.config,
            SurfaceSize::new(size.width, size.height),
            &self.cli.without,
        );
        portfolio.page_mut().load(self.clock.now());

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.portfolio = Some(portfolio);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let typing = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) => {
                renderer.handle_event(window, &event);
                renderer.wants_keyboard()
            }
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } if !typing => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let Some(page_event) = self.input.process_event(&other) {
                    self.handle_page_event(page_event);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PortfolioConfig::resolve(&cli)?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(cli, config);

    log::info!("Portfolio - scroll to explore, Escape to quit");
    event_loop.run_app(&mut app).context("event loop exited with an error")?;

    Ok(())
}
