//! Polygon Bounce entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement, Window};

    use polygon_bounce::renderer::{RenderState, build_frame};
    use polygon_bounce::sim::{SimEvent, World, tick};
    use polygon_bounce::{FrameLoop, Layout, SetupError, Settings};

    const CANVAS_ID: &str = "simulationCanvas";
    const TOGGLE_ID: &str = "pauseToggle";
    const RESET_ID: &str = "resetBtn";
    const LABEL_ID: &str = "scoreBoard";

    /// Everything the frame callback and input handlers share
    struct App {
        world: World,
        frame_loop: FrameLoop,
        render_state: RenderState,
        canvas: HtmlCanvasElement,
        toggle: HtmlInputElement,
        label: Option<Element>,
        /// Pending requestAnimationFrame handle
        animation_id: Option<i32>,
    }

    impl App {
        /// Simulate one frame
        fn advance(&mut self) {
            tick(&mut self.world);
            let grew = self
                .world
                .drain_events()
                .any(|e| matches!(e, SimEvent::Grew { .. }));
            if grew {
                self.update_label();
            }
        }

        /// Clear and draw the current state
        fn render(&mut self) {
            let vertices = build_frame(&self.world);
            match self.render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn update_label(&self) {
            if let Some(label) = &self.label {
                label.set_text_content(Some(&self.world.polygon.label()));
            }
        }

        /// Match canvas and geometry to the window
        fn resize(&mut self, window: &Window) {
            let (width, height) = viewport_size(window);
            let physical = physical_size(window, width, height);
            self.canvas.set_width(physical.0);
            self.canvas.set_height(physical.1);
            self.render_state.resize(physical, (width, height));
            self.world.resize(Layout::from_viewport(width, height));
            log::info!("Resized to {}x{}", width, height);

            // Running frames redraw on their own
            if !self.frame_loop.is_running() {
                self.render();
            }
        }

        fn stop(&mut self) {
            if self.frame_loop.stop() {
                log::info!("Stopped at {} sides", self.world.polygon.sides());
            }
            if let Some(id) = self.animation_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        }

        fn reset(&mut self) {
            self.stop();
            self.toggle.set_checked(false);

            let seed = js_sys::Date::now() as u64;
            self.world.reset(seed);
            self.update_label();
            self.render();
            log::info!("Reset with seed: {}", seed);
        }
    }

    fn viewport_size(window: &Window) -> (f32, f32) {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    fn physical_size(window: &Window, width: f32, height: f32) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        ((width as f64 * dpr) as u32, (height as f64 * dpr) as u32)
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn element_by_id<T: JsCast>(
        document: &Document,
        id: &'static str,
        expected: &'static str,
    ) -> Result<T, SetupError> {
        document
            .get_element_by_id(id)
            .ok_or(SetupError::MissingElement { id })?
            .dyn_into::<T>()
            .map_err(|_| SetupError::WrongElementType { id, expected })
    }

    pub async fn run() -> Result<(), SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoWindow)?;

        let canvas: HtmlCanvasElement = element_by_id(&document, CANVAS_ID, "canvas")?;
        let toggle: HtmlInputElement = element_by_id(&document, TOGGLE_ID, "checkbox input")?;
        let reset_btn = document
            .get_element_by_id(RESET_ID)
            .ok_or(SetupError::MissingElement { id: RESET_ID })?;
        let label = document.get_element_by_id(LABEL_ID);
        if label.is_none() {
            log::warn!("No #{} element, side count will not be shown", LABEL_ID);
        }

        let settings = Settings::load(&canvas);

        let (width, height) = viewport_size(&window);
        let physical = physical_size(&window, width, height);
        canvas.set_width(physical.0);
        canvas.set_height(physical.1);

        // Initialize WebGPU (falls back to WebGL2)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| SetupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| SetupError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, physical, (width, height)).await?;

        let seed = js_sys::Date::now() as u64;
        let world = World::new(settings, Layout::from_viewport(width, height), seed);
        log::info!("World initialized with seed: {}", seed);

        // Always start stopped, whatever the browser restored
        toggle.set_checked(false);

        let app = Rc::new(RefCell::new(App {
            world,
            frame_loop: FrameLoop::default(),
            render_state,
            canvas,
            toggle: toggle.clone(),
            label,
            animation_id: None,
        }));

        {
            let mut a = app.borrow_mut();
            a.update_label();
            a.render();
        }

        setup_toggle(&toggle, app.clone());
        setup_reset_button(&reset_btn, app.clone());
        setup_resize(&window, app);

        log::info!("Polygon Bounce ready");
        Ok(())
    }

    fn start(app: &Rc<RefCell<App>>) {
        let now = now_ms();
        {
            let mut a = app.borrow_mut();
            if !a.frame_loop.start(now) {
                return;
            }
            log::info!("Started at {} sides", a.world.polygon.sides());
        }
        on_animation_frame(app.clone(), now);
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = app.clone();
        let closure = Closure::once(move |time: f64| {
            on_animation_frame(handle, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().animation_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn on_animation_frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.animation_id = None;
            if !a.frame_loop.is_running() {
                return;
            }

            if a.frame_loop.frame_due(time) {
                a.advance();
                a.render();
            }
        }

        request_animation_frame(app);
    }

    fn setup_toggle(toggle: &HtmlInputElement, app: Rc<RefCell<App>>) {
        let input = toggle.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if input.checked() {
                start(&app);
            } else {
                app.borrow_mut().stop();
            }
        });
        let _ = toggle.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_reset_button(btn: &Element, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().reset();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(window: &Window, app: Rc<RefCell<App>>) {
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize(&win);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Polygon Bounce starting...");

    if let Err(e) = wasm_app::run().await {
        log::error!("Setup failed: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Polygon Bounce (native) starting...");
    log::info!("Rendering needs the browser build - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    run_headless(seed, 60 * 60);
}

/// Simulate `frames` frames without rendering and report how the polygon grew
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, frames: u64) {
    use polygon_bounce::sim::{SimEvent, World, tick};
    use polygon_bounce::{Layout, Settings};

    let mut world = World::new(
        Settings::default(),
        Layout::from_viewport(1280.0, 720.0),
        seed,
    );
    log::info!("Headless run with seed {} for {} frames", seed, frames);

    for _ in 0..frames {
        tick(&mut world);
        let events: Vec<SimEvent> = world.drain_events().collect();
        for event in events {
            match event {
                SimEvent::Grew { sides } => log::info!("frame {}: {} sides", world.frame, sides),
                SimEvent::Recentered => log::warn!("frame {}: ball recentered", world.frame),
                SimEvent::WallHit { .. } => {}
            }
        }
    }

    println!(
        "{} after {} frames ({} wall hits, final speed {:.2})",
        world.polygon.label(),
        world.frame,
        world.collisions,
        world.ball.speed()
    );
}
