//! Bootstrap application
//!
//! Opens a window, brings up the Vulkan instance (with validation layers
//! and the debug messenger when enabled), runs a poll-only event loop,
//! and tears everything down in reverse order. Frame submission does not
//! exist yet; the loop only watches for the window closing.

use glfw::{Action, Key, WindowEvent};
use render_core::{logging, AppConfig, BootstrapError, VulkanContext, Window};

struct App {
    // Field order is teardown order: the Vulkan context (messenger, then
    // instance) must drop before the window releases GLFW.
    #[allow(dead_code)]
    vulkan: VulkanContext,
    window: Window,
}

impl App {
    fn new(config: &AppConfig) -> Result<Self, BootstrapError> {
        log::info!("Creating window...");
        let window = Window::new(
            config.window_width,
            config.window_height,
            &config.window_title,
        )?;

        log::info!("Creating Vulkan instance...");
        let vulkan = VulkanContext::new(config, &window)?;
        log::info!("Vulkan instance created");

        Ok(Self { vulkan, window })
    }

    fn run(&mut self) {
        while !self.window.should_close() {
            self.window.poll_events();

            // Collect events to avoid borrow checker issues
            let events: Vec<_> = self.window.flush_events().collect();
            for (_, event) in events {
                if let WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                    self.window.set_should_close(true);
                }
            }

            // Frame submission goes here once the renderer exists.
        }
    }
}

fn main() {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    match App::new(&config) {
        Ok(mut app) => app.run(),
        Err(e) => {
            log::error!("Bootstrap failed: {}", e);
            std::process::exit(1);
        }
    }
}
