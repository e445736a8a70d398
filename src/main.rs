//! Flappy Clone entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use flappy_clone::Settings;
    use flappy_clone::consts::WINDOW_TITLE;
    use flappy_clone::platform::{FixedStep, InputSource, KeyState};
    use flappy_clone::renderer::{DrawList, RenderState, TextItem, draw_scene};
    use flappy_clone::sim::{GameState, SeededGaps, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        gaps: SeededGaps,
        keys: KeyState,
        clock: FixedStep,
        frame: DrawList,
        render_state: Option<RenderState>,
        show_fps: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        /// Set once rendering failed for good
        stopped: bool,
    }

    impl Game {
        fn new(settings: &Settings, seed: u64) -> Self {
            let tuning = settings.tuning;
            Self {
                state: GameState::new(tuning),
                gaps: SeededGaps::new(seed),
                keys: KeyState::new(settings.bindings.clone()),
                clock: FixedStep::default(),
                frame: DrawList::new(tuning.field_width, tuning.field_height),
                render_state: None,
                show_fps: settings.show_fps,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                stopped: false,
            }
        }

        /// Run simulation ticks owed for this display frame
        fn update(&mut self, time: f64) {
            let ticks = self.clock.ticks_at(time);
            for _ in 0..ticks {
                let input = self.keys.sample();
                let phase = self.state.phase;
                tick(&mut self.state, &input, &mut self.gaps);
                if self.state.phase != phase {
                    log::debug!("Phase {:?} -> {:?}", phase, self.state.phase);
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            self.frame.clear_commands();
            draw_scene(&self.state, &mut self.frame);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory, stopping");
                        self.stopped = true;
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Mirror the frame's text items into the DOM overlay
        fn update_text_layer(&self, document: &Document) {
            let Some(layer) = document.get_element_by_id("text-layer") else {
                return;
            };
            let Some(ref render_state) = self.render_state else {
                return;
            };

            // Canvas backing pixels vs CSS pixels
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0) as f32;
            let letterbox = render_state.letterbox();

            let mut items: Vec<TextItem> = self.frame.texts().cloned().collect();
            if self.show_fps {
                items.push(TextItem {
                    text: format!("{} FPS", self.fps),
                    pos: glam::Vec2::new(self.state.tuning.field_width - 70.0, 10.0),
                });
            }

            // Grow the pool of line elements as needed, hide the spares
            while (layer.child_element_count() as usize) < items.len() {
                match document.create_element("div") {
                    Ok(el) => {
                        let _ = el.set_attribute("class", "text-line");
                        let _ = layer.append_child(&el);
                    }
                    Err(_) => return,
                }
            }

            let children = layer.children();
            for i in 0..children.length() {
                let Some(el) = children
                    .item(i)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    continue;
                };
                let style = el.style();
                match items.get(i as usize) {
                    Some(item) => {
                        let (x, y) = letterbox.to_physical(item.pos.x, item.pos.y);
                        let _ = style.set_property("display", "block");
                        let _ = style.set_property("left", &format!("{}px", x / dpr));
                        let _ = style.set_property("top", &format!("{}px", y / dpr));
                        let _ = style
                            .set_property("font-size", &format!("{}px", 12.0 * letterbox.scale / dpr));
                        if el.text_content().as_deref() != Some(item.text.as_str()) {
                            el.set_text_content(Some(&item.text));
                        }
                    }
                    None => {
                        let _ = style.set_property("display", "none");
                    }
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Clone starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title(WINDOW_TITLE);

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let settings = Settings::load();
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(&settings, seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let field_size = (settings.tuning.field_width, settings.tuning.field_height);
        let render_state = RenderState::new(surface, &adapter, width, height, field_size)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Keep the surface matched to the canvas
        setup_resize_handler(canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Clone running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down marks the key held
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if g.keys.is_bound(&code) {
                    // Keep Space from scrolling the page
                    event.prevent_default();
                }
                g.keys.press(&code);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up releases it
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events will not arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.keys.release_all();
                g.clock.resync();
                log::info!("Focus lost, released held keys");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(ref mut render_state) = game.borrow_mut().render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Update strictly before render
            g.update(time);
            g.render();

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_text_layer(&document);
            }

            if g.stopped {
                log::error!("Game loop stopped");
                return;
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_clone::Settings;
    use flappy_clone::headless::{HeadlessConfig, run_headless};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy Clone (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let config = HeadlessConfig {
        seed: settings.seed_or(0),
        tuning: settings.tuning,
        ..Default::default()
    };
    let summary = run_headless(&config);

    println!(
        "Autopilot flew {} frames: score {}, best {}, deaths {}",
        summary.frames, summary.final_score, summary.max_score, summary.deaths
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
