//! Folio FX entry point
//!
//! Wires the pure effect modules to the page: event handlers feed input
//! state, an animation-frame loop drives the particle field, and navigation
//! outcomes are mirrored to slide/dot classes and the track transform.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, Document, Element, HtmlCanvasElement, HtmlElement,
        IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
        MouseEvent, ScrollBehavior, ScrollIntoViewOptions, TouchEvent, WheelEvent,
    };

    use folio_fx::carousel::{Carousel, HandOff, NavOutcome};
    use folio_fx::dom::{self, FrameLoop, SetupError};
    use folio_fx::effects::{CursorTrail, Typewriter, tilt_for, TiltTransform};
    use folio_fx::field::ParticleField;
    use folio_fx::render::CanvasSurface;
    use folio_fx::reveal::RevealSet;
    use folio_fx::tuning::Tuning;
    use folio_fx::PointerState;

    /// Hero tagline, typed out on first view
    const TAGLINE: &str = "I build exceptional digital experiences that live on the web.";

    /// Everything the page-lifetime app owns
    struct App {
        tuning: Tuning,
        pointer: PointerState,
        field: ParticleField,
        surface: Option<CanvasSurface>,
        canvas: HtmlCanvasElement,
        carousel: Carousel,
        cursor: CursorTrail,
        typewriter: Typewriter,
        typed_done: bool,
        last_frame_ms: f64,
        frame_loop: Option<FrameLoop>,

        // DOM collaborators
        cursor_dot: HtmlElement,
        cursor_outline: HtmlElement,
        track: HtmlElement,
        slides: Vec<Element>,
        dots: Vec<Element>,
        scroll_hint: Option<Element>,
        tagline: Option<Element>,
        sections: Vec<Element>,
        carousel_section: Option<Element>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        match setup() {
            Ok(app) => {
                wire_pointer(app.clone());
                wire_resize(app.clone());
                wire_carousel_input(app.clone());
                wire_hover_class(app.clone());
                wire_nav_links();
                wire_active_nav();
                wire_reveals(app.clone());
                wire_typewriter_trigger(app.clone());
                wire_visibility(app.clone());
                start_frame_loop(app);
                log::info!("folio-fx running");
            }
            Err(err) => {
                // Fatal configuration problem; report once and do nothing
                log::error!("folio-fx setup failed: {err}");
            }
        }
    }

    fn setup() -> Result<Rc<RefCell<App>>, SetupError> {
        let window = dom::window()?;
        let document = dom::document()?;

        let tuning = Tuning::from_attr(
            document
                .body()
                .and_then(|b| b.get_attribute("data-fx-tuning"))
                .as_deref(),
        );

        // Required collaborators
        let canvas = dom::require_canvas(&document, "#particle-canvas")?;
        let track = dom::require_html(&document, ".project-track")?;
        let slides = dom::query_all(&document, ".project-slide");
        if slides.is_empty() {
            return Err(SetupError::MissingElement(".project-slide"));
        }

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let surface = CanvasSurface::new(&canvas);
        if surface.is_none() {
            log::warn!("2d context unavailable; particle background disabled");
        }

        let seed = js_sys::Date::now() as u64;
        let field = ParticleField::new(width, height, seed, tuning.field.clone());
        log::info!(
            "particle field: {}x{}, {} particles, seed {seed}",
            width,
            height,
            field.len()
        );

        let carousel = Carousel::new(slides.len(), tuning.carousel.clone());
        let carousel_section = track.closest("section").ok().flatten();

        // Optional collaborators degrade silently
        let dots = dom::query_all(&document, ".pagination-dot");
        let scroll_hint = dom::optional(&document, ".scroll-hint");
        let tagline = dom::optional(&document, ".tagline");
        if let Some(el) = &tagline {
            el.set_text_content(Some(""));
        }
        let sections = dom::query_all(&document, "section[id]");

        let (cursor_dot, cursor_outline) = spawn_cursor_elements(&document)?;

        let cursor = CursorTrail::new(tuning.effects.cursor_ease_ms);
        let typewriter = Typewriter::new(TAGLINE, tuning.effects.type_interval_ms);

        let app = Rc::new(RefCell::new(App {
            tuning,
            pointer: PointerState::new(),
            field,
            surface,
            canvas,
            carousel,
            cursor,
            typewriter,
            typed_done: false,
            last_frame_ms: 0.0,
            frame_loop: None,
            cursor_dot,
            cursor_outline,
            track,
            slides,
            dots,
            scroll_hint,
            tagline,
            sections,
            carousel_section,
        }));

        // Slide 0 starts active
        sync_active(&app.borrow());
        Ok(app)
    }

    fn viewport_size(window: &web_sys::Window) -> (f32, f32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (w as f32, h as f32)
    }

    /// The custom cursor is two injected divs styled by the page CSS.
    fn spawn_cursor_elements(document: &Document) -> Result<(HtmlElement, HtmlElement), SetupError> {
        let body = document.body().ok_or(SetupError::NoDocument)?;
        let make = |class: &'static str| -> Result<HtmlElement, SetupError> {
            let el: HtmlElement = document
                .create_element("div")
                .map_err(|_| SetupError::WrongElementKind(class))?
                .dyn_into()
                .map_err(|_| SetupError::WrongElementKind(class))?;
            let _ = el.class_list().add_1(class);
            let _ = body.append_child(&el);
            Ok(el)
        };
        Ok((make("cursor-dot")?, make("cursor-outline")?))
    }

    // === Frame loop ===

    fn start_frame_loop(app: Rc<RefCell<App>>) {
        let loop_app = app.clone();
        let frame_loop = FrameLoop::start(move |time| {
            let mut guard = loop_app.borrow_mut();
            tick(&mut guard, time);
        });
        app.borrow_mut().frame_loop = Some(frame_loop);
    }

    fn tick(app: &mut App, time: f64) {
        let dt = (time - app.last_frame_ms).max(0.0) as f32;
        app.last_frame_ms = time;

        // Particle background
        app.field.step(app.pointer.get());
        if let Some(surface) = app.surface.as_mut() {
            app.field.draw(surface);
        }

        // Trailing cursor outline
        if let Some(target) = app.pointer.get() {
            let pos = app.cursor.follow(target, dt);
            place(&app.cursor_outline, pos.x, pos.y);
        }

        // Typewriter
        if app.typewriter.started() && !app.typed_done {
            if let Some(el) = &app.tagline {
                el.set_text_content(Some(app.typewriter.visible(time)));
            }
            app.typed_done = app.typewriter.is_done(time);
        }

        // Wheel windows and the settle lock are both timestamp-driven
        if let Some(outcome) = app.carousel.poll(time) {
            apply_outcome(app, outcome);
        }
    }

    fn place(el: &HtmlElement, x: f32, y: f32) {
        let style = el.style();
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
    }

    // === Carousel DOM sync ===

    fn apply_outcome(app: &App, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Moved { offset_percent, .. } => {
                let _ = app
                    .track
                    .style()
                    .set_property("transform", &format!("translateX({offset_percent}%)"));
                sync_active(app);
                if app.carousel.hint_dismissed() {
                    if let Some(hint) = &app.scroll_hint {
                        let _ = hint.class_list().add_1("hidden");
                    }
                }
            }
            NavOutcome::HandOff(direction) => hand_off_scroll(app, direction),
            NavOutcome::Locked | NavOutcome::Rejected => {}
        }
    }

    /// Exactly one slide and one dot carry the active marker.
    fn sync_active(app: &App) {
        let index = app.carousel.current_index();
        for (i, slide) in app.slides.iter().enumerate() {
            let _ = slide.class_list().toggle_with_force("active", i == index);
        }
        for (i, dot) in app.dots.iter().enumerate() {
            let _ = dot.class_list().toggle_with_force("active", i == index);
        }
    }

    /// Boundary navigation hands control to the neighboring page section.
    fn hand_off_scroll(app: &App, direction: HandOff) {
        let Some(section) = &app.carousel_section else {
            return;
        };
        let Some(pos) = app.sections.iter().position(|s| s == section) else {
            return;
        };
        let neighbor = match direction {
            HandOff::Before => pos.checked_sub(1).and_then(|i| app.sections.get(i)),
            HandOff::After => app.sections.get(pos + 1),
        };
        if let Some(target) = neighbor {
            smooth_scroll_to(target);
        }
    }

    fn smooth_scroll_to(el: &Element) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    // === Input wiring ===

    fn wire_pointer(app: Rc<RefCell<App>>) {
        let Ok(window) = dom::window() else { return };
        let Ok(document) = dom::document() else { return };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = app.borrow_mut();
                let (x, y) = (event.client_x() as f32, event.client_y() as f32);
                g.pointer.set(x, y);
                // The dot rides the pointer directly; the outline eases in tick()
                place(&g.cursor_dot, x, y);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().pointer.clear();
            });
            let _ = document
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn wire_resize(app: Rc<RefCell<App>>) {
        let Ok(window) = dom::window() else { return };
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = viewport_size(&win);
            let mut g = app.borrow_mut();
            g.canvas.set_width(width as u32);
            g.canvas.set_height(height as u32);
            // Resize is a fresh epoch: the whole particle set is rebuilt
            g.field.resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn wire_carousel_input(app: Rc<RefCell<App>>) {
        let Ok(window) = dom::window() else { return };
        let target: Element = {
            let g = app.borrow();
            match &g.carousel_section {
                Some(section) => section.clone(),
                None => g.track.clone().into(),
            }
        };

        // Wheel: coalesced into a window, flushed by the frame loop
        {
            let app = app.clone();
            let win = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
                event.prevent_default();
                let now = dom::now_ms(&win);
                app.borrow_mut()
                    .carousel
                    .on_wheel(event.delta_x(), event.delta_y(), now);
            });
            let opts = AddEventListenerOptions::new();
            opts.set_passive(false);
            let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &opts,
            );
            closure.forget();
        }

        // Touch swipe
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut().carousel.touch_start(touch.client_x() as f32);
                }
            });
            let _ = target
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let win = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let now = dom::now_ms(&win);
                    let mut g = app.borrow_mut();
                    if let Some(outcome) = g.carousel.touch_move(touch.client_x() as f32, now) {
                        apply_outcome(&g, outcome);
                    }
                }
            });
            let opts = AddEventListenerOptions::new();
            opts.set_passive(false);
            let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &opts,
            );
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().carousel.touch_end();
            });
            let _ = target
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Arrow keys, only while the carousel region is on screen
        {
            let win = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = app.borrow_mut();
                let visible = g
                    .carousel_section
                    .as_ref()
                    .is_some_and(|s| section_in_view(&win, s));
                if !visible {
                    return;
                }
                let now = dom::now_ms(&win);
                let outcome = match event.key().as_str() {
                    "ArrowRight" => g.carousel.advance(now),
                    "ArrowLeft" => g.carousel.retreat(now),
                    _ => return,
                };
                event.prevent_default();
                apply_outcome(&g, outcome);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn section_in_view(window: &web_sys::Window, section: &Element) -> bool {
        let rect = section.get_bounding_client_rect();
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        rect.top() < height && rect.bottom() > 0.0
    }

    // === Hover, tilt, nav glue ===

    /// Interactive elements switch the body into the `hovering` cursor state;
    /// cards also get the perspective tilt.
    fn wire_hover_class(app: Rc<RefCell<App>>) {
        let Ok(document) = dom::document() else { return };
        let Some(body) = document.body() else { return };

        for el in dom::query_all(
            &document,
            "a, button, .project-card, .skill-category, input, textarea",
        ) {
            {
                let body = body.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let _ = body.class_list().add_1("hovering");
                });
                let _ = el.add_event_listener_with_callback(
                    "mouseenter",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let body = body.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let _ = body.class_list().remove_1("hovering");
                });
                let _ = el.add_event_listener_with_callback(
                    "mouseleave",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }

        let (max_deg, scale) = {
            let g = app.borrow();
            (g.tuning.effects.tilt_max_deg, g.tuning.effects.tilt_scale)
        };
        wire_tilt(&document, max_deg, scale);
    }

    fn wire_tilt(document: &Document, max_deg: f32, scale: f32) {
        for el in dom::query_all(document, ".project-card, .skill-category") {
            let html = match el.clone().dyn_into::<HtmlElement>() {
                Ok(html) => html,
                Err(_) => continue,
            };
            {
                let html = html.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    let rect = html.get_bounding_client_rect();
                    let local = glam::Vec2::new(
                        event.client_x() as f32 - rect.left() as f32,
                        event.client_y() as f32 - rect.top() as f32,
                    );
                    let size = glam::Vec2::new(rect.width() as f32, rect.height() as f32);
                    let t = tilt_for(local, size, max_deg, scale);
                    let style = html.style();
                    let _ = style.set_property("transform", &t.css());
                    let _ = style.set_property("z-index", "10");
                });
                let _ = el.add_event_listener_with_callback(
                    "mousemove",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let html = html.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let style = html.style();
                    let _ = style.set_property("transform", &TiltTransform::RESET.css());
                    let _ = style.set_property("z-index", "1");
                });
                let _ = el.add_event_listener_with_callback(
                    "mouseleave",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    /// Nav links smooth-scroll to their target section.
    fn wire_nav_links() {
        let Ok(document) = dom::document() else { return };
        for link in dom::query_all(&document, "nav a") {
            let doc = document.clone();
            let href = link.get_attribute("href").unwrap_or_default();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if !href.starts_with('#') {
                    return;
                }
                event.prevent_default();
                if let Ok(Some(target)) = doc.query_selector(&href) {
                    smooth_scroll_to(&target);
                }
            });
            let _ =
                link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Highlight the nav link of the section nearest the top of the viewport.
    fn wire_active_nav() {
        let Ok(window) = dom::window() else { return };
        let Ok(document) = dom::document() else { return };
        let sections = dom::query_all(&document, "section[id]");
        let links = dom::query_all(&document, "nav a");
        if sections.is_empty() || links.is_empty() {
            return;
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut active_id = None;
            for section in &sections {
                if section.get_bounding_client_rect().top() <= 160.0 {
                    active_id = Some(section.id());
                }
            }
            let Some(id) = active_id else { return };
            let target_href = format!("#{id}");
            for link in &links {
                let is_active = link.get_attribute("href").as_deref() == Some(&target_href);
                let _ = link.class_list().toggle_with_force("active", is_active);
            }
        });
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // === Observers ===

    /// One-shot reveals for timeline items, skill cards, and project cards.
    fn wire_reveals(app: Rc<RefCell<App>>) {
        let Ok(document) = dom::document() else { return };
        let stagger = app.borrow().tuning.effects.reveal_stagger_ms;

        // Timeline entries reveal individually; card grids stagger per batch
        observe_reveal_group(&document, ".timeline-item", 0.0);
        observe_reveal_group(&document, ".skill-category", stagger);
        observe_reveal_group(&document, ".project-card", stagger);
    }

    fn observe_reveal_group(document: &Document, selector: &str, stagger_ms: f64) {
        let elements = dom::query_all(document, selector);
        if elements.is_empty() {
            return;
        }
        let set = Rc::new(RefCell::new(RevealSet::new(elements.len(), stagger_ms)));

        let els = elements.clone();
        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut visible = Vec::new();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(index) = els.iter().position(|e| *e == target) {
                        visible.push(index);
                    }
                    observer.unobserve(&target);
                }
                for reveal in set.borrow_mut().reveal_batch(visible) {
                    let el = &els[reveal.index];
                    if let Ok(html) = el.clone().dyn_into::<HtmlElement>() {
                        let _ = html
                            .style()
                            .set_property("transition-delay", &format!("{}ms", reveal.delay_ms));
                    }
                    let _ = el.class_list().add_1("visible");
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from(0.2));
        let Ok(observer) =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        else {
            return;
        };
        for el in &elements {
            observer.observe(el);
        }
        closure.forget();
    }

    /// Hidden tabs get no frames; stop the loop and restart on return.
    fn wire_visibility(app: Rc<RefCell<App>>) {
        let Ok(document) = dom::document() else { return };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if doc.hidden() {
                if let Some(frame_loop) = app.borrow_mut().frame_loop.take() {
                    frame_loop.stop();
                    log::info!("background paused (tab hidden)");
                }
            } else if app.borrow().frame_loop.is_none() {
                start_frame_loop(app.clone());
                log::info!("background resumed");
            }
        });
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }

    /// Start the typewriter the first time the hero section is on screen.
    fn wire_typewriter_trigger(app: Rc<RefCell<App>>) {
        let Ok(window) = dom::window() else { return };
        let Ok(document) = dom::document() else { return };
        let Some(home) = dom::optional(&document, "#home") else {
            return;
        };

        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    app.borrow_mut().typewriter.start(dom::now_ms(&window));
                    observer.disconnect();
                }
            },
        );
        let Ok(observer) = IntersectionObserver::new(closure.as_ref().unchecked_ref()) else {
            return;
        };
        observer.observe(&home);
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Folio FX (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    println!("\nRunning particle field demo...");
    demo_particle_field();
    println!("\nRunning carousel demo...");
    demo_carousel();
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_particle_field() {
    use folio_fx::field::ParticleField;
    use folio_fx::render::RecordingSurface;
    use folio_fx::tuning::FieldTuning;
    use glam::Vec2;

    let mut field = ParticleField::new(900.0, 900.0, 42, FieldTuning::default());
    assert_eq!(field.len(), 90);

    // Sweep a pointer across while the field runs
    for tick in 0..240 {
        let mouse = Vec2::new(tick as f32 * 3.5, 450.0);
        field.step(Some(mouse));
    }
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 900.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 900.0);
    }

    let mut surface = RecordingSurface::new();
    field.draw(&mut surface);
    println!(
        "✓ 90 particles in bounds after 240 ticks, {} connective lines",
        surface.lines().count()
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_carousel() {
    use folio_fx::carousel::{Carousel, NavOutcome};
    use folio_fx::tuning::CarouselTuning;

    let mut carousel = Carousel::new(4, CarouselTuning::default());

    // A burst of wheel events collapses into one transition
    for t in [0.0, 8.0, 16.0, 24.0, 40.0] {
        carousel.on_wheel(0.0, 30.0, t);
    }
    assert_eq!(carousel.poll(49.0), None);
    let moved = carousel.poll(55.0);
    assert!(matches!(
        moved,
        Some(NavOutcome::Moved { index: 1, .. })
    ));

    // Locked during the settle delay, free afterwards
    assert_eq!(carousel.advance(100.0), NavOutcome::Locked);
    assert!(matches!(
        carousel.advance(1000.0),
        NavOutcome::Moved { index: 2, .. }
    ));

    println!("✓ carousel: wheel burst -> 1 transition, settle lock honored");
}
