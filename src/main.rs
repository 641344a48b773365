//! Life hero entry point
//!
//! On the web this wires the simulation to `#life-canvas` and drives it from
//! `requestAnimationFrame`. Natively it runs a short headless session into a
//! pixel buffer and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_hero {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, PointerEvent, Window};

    use life_hero::renderer::{Canvas2dSurface, Renderer};
    use life_hero::{FrameOutcome, HostError, LifeConfig, LoopController, RunPhase, Settings, Theme};

    const CANVAS_ID: &str = "life-canvas";
    const CONFIG_ATTR: &str = "data-life-config";

    /// Everything the page callbacks share
    struct Hero {
        controller: LoopController,
        renderer: Renderer<Canvas2dSurface>,
        screen: Canvas2dSurface,
        settings: Settings,
        stats_el: Option<Element>,
        play_btn: Option<Element>,
    }

    impl Hero {
        fn draw(&mut self) {
            self.renderer.render(
                &mut self.screen,
                self.controller.life(),
                self.controller.theme(),
            );
            self.update_stats();
            self.update_play_label();
        }

        fn update_stats(&self) {
            if let Some(el) = &self.stats_el {
                let text = if self.settings.show_stats {
                    self.controller.stats().to_string()
                } else {
                    String::new()
                };
                el.set_text_content(Some(&text));
            }
        }

        fn update_play_label(&self) {
            if let Some(btn) = &self.play_btn {
                let label = match self.controller.phase() {
                    RunPhase::Idle => "Play",
                    RunPhase::Running => "Pause",
                };
                btn.set_text_content(Some(label));
            }
        }
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    /// CSS size of the canvas as laid out by the page
    fn viewport_of(canvas: &HtmlCanvasElement) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(rect.width() as f32, rect.height() as f32)
    }

    fn read_config(canvas: &HtmlCanvasElement) -> LifeConfig {
        let Some(json) = canvas.get_attribute(CONFIG_ATTR) else {
            return LifeConfig::default();
        };
        LifeConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("Ignoring invalid {CONFIG_ATTR}: {err}");
            LifeConfig::default()
        })
    }

    fn apply_theme(document: &Document, theme: Theme) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }

    pub fn run() -> Result<(), HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| HostError::MissingCanvas(CANVAS_ID.into()))?
            .dyn_into()
            .map_err(|_| HostError::NotACanvas(CANVAS_ID.into()))?;

        let config = read_config(&canvas);
        let seed = config
            .rng_seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let settings = Settings::load();
        apply_theme(&document, settings.theme);

        let mut controller = LoopController::new(config, seed, settings.theme);
        controller.on_resize(viewport_of(&canvas));

        let hero = Rc::new(RefCell::new(Hero {
            controller,
            renderer: Renderer::new(Canvas2dSurface::offscreen(&document)?),
            screen: Canvas2dSurface::new(canvas.clone())?,
            settings,
            stats_el: document.get_element_by_id("life-stats"),
            play_btn: document.get_element_by_id("life-play"),
        }));
        hero.borrow_mut().draw();

        setup_pointer_handlers(&canvas, hero.clone());
        setup_resize_handler(&window, canvas, hero.clone());
        setup_buttons(&document, hero.clone());

        log::info!("Life hero started (seed {seed})");
        request_animation_frame(hero);
        Ok(())
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, hero: Rc<RefCell<Hero>>) {
        // Entering the hero starts the show
        {
            let hero = hero.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                hero.borrow_mut().controller.on_pointer_enter(now());
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let hero = hero.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                hero.borrow_mut().controller.on_pointer_leave();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drawing with the cursor
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                hero.borrow_mut().controller.on_pointer_move(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(window: &Window, canvas: HtmlCanvasElement, hero: Rc<RefCell<Hero>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            hero.borrow_mut().controller.on_resize(viewport_of(&canvas));
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, hero: Rc<RefCell<Hero>>) {
        if let Some(btn) = document.get_element_by_id("life-play") {
            let hero = hero.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut h = hero.borrow_mut();
                h.controller.toggle_play(now());
                h.update_play_label();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("life-reset") {
            let hero = hero.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut h = hero.borrow_mut();
                h.controller.reset();
                h.update_play_label();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("theme-toggle") {
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut h = hero.borrow_mut();
                h.controller.toggle_theme();
                let theme = h.controller.theme();
                h.settings.theme = theme;
                h.settings.save();
                apply_theme(&document, theme);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(hero: Rc<RefCell<Hero>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(hero, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(hero: Rc<RefCell<Hero>>, time: f64) {
        {
            let mut h = hero.borrow_mut();
            match h.controller.frame(time) {
                FrameOutcome::Stepped | FrameOutcome::Redraw => h.draw(),
                FrameOutcome::Idle => {}
            }
        }
        request_animation_frame(hero);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(err) = wasm_hero::run() {
        log::error!("Life hero failed to start: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use life_hero::renderer::{PixelBuffer, Renderer};
    use life_hero::{FrameOutcome, LifeConfig, LoopController, Settings};

    /// Simulated display refresh (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const SESSION_SECONDS: u32 = 20;

    env_logger::init();
    log::info!("Life hero (native) starting a headless session");

    let config = LifeConfig::default();
    let seed = config.rng_seed.unwrap_or(7);
    let settings = Settings::load();
    let mut controller = LoopController::new(config, seed, settings.theme);
    controller.on_resize(Vec2::new(1280.0, 720.0));

    let mut renderer = Renderer::new(PixelBuffer::default());
    let mut frame = PixelBuffer::default();
    controller.play(0.0);

    let mut draws = 0u32;
    for i in 0..=(SESSION_SECONDS * 60) {
        match controller.frame(i as f64 * FRAME_MS) {
            FrameOutcome::Stepped | FrameOutcome::Redraw => {
                renderer.render(&mut frame, controller.life(), controller.theme());
                draws += 1;
            }
            FrameOutcome::Idle => {}
        }
    }

    log::info!(
        "{} generations at {} fps, {} draws, {} background builds, {}",
        controller.life().generation(),
        controller.fps(),
        draws,
        renderer.background_redraws(),
        controller.stats()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
