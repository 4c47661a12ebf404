use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scroll_showcase::cli::Cli;
use scroll_showcase::config::ShowcaseConfig;
use scroll_showcase::core::{Clock, ScrollInput};
use scroll_showcase::loaders::load_model_or_empty;
use scroll_showcase::renderer::ShowcaseRenderer;
use scroll_showcase::scene::ShowcaseScene;
use scroll_showcase::showcase::{CaptionOverlay, ShowcasePage};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 800;

// === Application ===

struct App {
    config: ShowcaseConfig,
    window: Option<Arc<Window>>,
    renderer: Option<ShowcaseRenderer>,
    page: Option<ShowcasePage>,
    overlay: Option<CaptionOverlay>,
    scene: ShowcaseScene,
    input: ScrollInput,
    clock: Clock,
}

impl App {
    fn new(config: ShowcaseConfig) -> Self {
        let scene = ShowcaseScene::new(config.model_scale);
        let overlay = config.show_ui.then(|| CaptionOverlay::new(&config));

        Self {
            config,
            window: None,
            renderer: None,
            page: None,
            overlay,
            scene,
            input: ScrollInput::new(INITIAL_WINDOW_HEIGHT as f32),
            clock: Clock::new(),
        }
    }

    fn mount(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(self.config.title.as_str())
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            )?,
        );

        let mesh = load_model_or_empty(&self.config.model_path);
        let renderer = pollster::block_on(ShowcaseRenderer::new(window.clone(), &mesh))?;

        let height = window.inner_size().height as f32;
        let mut page = ShowcasePage::mount(&self.config);
        page.resize(height);
        self.input.set_viewport_height(height);

        log::info!(
            "Showcase mounted: {} steps, page height {} viewports",
            page.showcase().keyframes().len(),
            self.config.page_height
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.page = Some(page);
        self.clock = Clock::new();
        Ok(())
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(size);
        }
        if let Some(page) = &mut self.page {
            page.resize(size.height as f32);
        }
        self.input.set_viewport_height(size.height as f32);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();

        let (Some(window), Some(renderer), Some(page)) =
            (&self.window, &mut self.renderer, &mut self.page)
        else {
            return;
        };

        let frame = page.update(delta);
        match renderer.render(window, &self.scene, &frame, self.overlay.as_ref()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.size();
                renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.mount(event_loop) {
                log::error!("Failed to start showcase: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui sees every event first
        let ui_consumed = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) => renderer.handle_event(window, &event),
            _ => false,
        };

        if let Some(command) = self.input.route_event(&event, ui_consumed) {
            if let Some(page) = &mut self.page {
                page.apply(command);
            }
            return;
        }
        if ui_consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
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
    let config = ShowcaseConfig::from_cli(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("Scroll Showcase - Controls: wheel, arrows, PageUp/PageDown, Home/End, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
