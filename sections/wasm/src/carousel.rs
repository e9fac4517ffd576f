//! DOM side of the carousel.
//!
//! The markup contract (root, track, items, dots, arrows) is written by
//! the `Carousel` component; this module finds it, mounts a [`Slider`]
//! over a [`DomViewport`] and forwards clicks, pointer hover, timer
//! ticks and settled track scrolls to it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, PageTransitionEvent};

use renu_sections::slider::{Direction, Slider, SliderOptions, Viewport};

/// How often the autoplay clock is fed, in milliseconds.
const TICK_MS: i32 = 100;

/// Quiet time after the last `scroll` event before the position counts
/// as settled, for browsers without `scrollend`.
const SETTLE_MS: i32 = 150;

/// Read `data-infinite` / `data-interval-ms` back into slider options.
///
/// Missing or malformed values mean "finite" and "no autoplay".
pub fn parse_options(
    root_id: &str,
    infinite: Option<&str>,
    interval_ms: Option<&str>,
) -> SliderOptions {
    let interval = interval_ms
        .and_then(|ms| ms.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis);
    SliderOptions {
        infinite: infinite.map(str::trim) == Some("true"),
        interval,
        root_id: root_id.to_string(),
    }
}

/// Scrolls the track element and keeps dots and arrows in sync.
pub(crate) struct DomViewport {
    track: HtmlElement,
    items: Vec<HtmlElement>,
    dots: Vec<Element>,
    prev: Option<Element>,
    next: Option<Element>,
    infinite: bool,
}

impl DomViewport {
    /// Slide whose left edge is closest to the track's scroll offset.
    fn nearest_index(&self) -> Option<usize> {
        let base = self.track.offset_left();
        let offsets: Vec<i32> = self
            .items
            .iter()
            .map(|item| item.offset_left() - base)
            .collect();
        nearest_offset(&offsets, self.track.scroll_left())
    }

    fn sync_controls(&self, index: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            let active = i == index;
            let _ = dot.set_attribute("aria-current", if active { "true" } else { "false" });
            toggle_disabled(dot, active);
        }
        let last = self.items.len().saturating_sub(1);
        if let Some(prev) = &self.prev {
            toggle_disabled(prev, !self.infinite && index == 0);
        }
        if let Some(next) = &self.next {
            toggle_disabled(next, !self.infinite && index >= last);
        }
    }
}

impl Viewport for DomViewport {
    fn scroll_to(&mut self, index: usize, _direction: Direction) {
        if let Some(item) = self.items.get(index) {
            // CSS scroll-behavior on the track animates the jump
            self.track
                .set_scroll_left(item.offset_left() - self.track.offset_left());
        }
        self.sync_controls(index);
    }

    fn cancel(&mut self) {
        // Re-assigning the current offset stops a smooth scroll in flight
        let left = self.track.scroll_left();
        self.track.set_scroll_left(left);
    }

    fn settled(&mut self, index: usize) {
        self.sync_controls(index);
    }
}

/// Index of the offset nearest to `scroll_left`; ties go to the first.
pub fn nearest_offset(offsets: &[i32], scroll_left: i32) -> Option<usize> {
    offsets
        .iter()
        .enumerate()
        .min_by_key(|(_, offset)| (i64::from(**offset) - i64::from(scroll_left)).abs())
        .map(|(index, _)| index)
}

fn toggle_disabled(element: &Element, disabled: bool) {
    let _ = if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    };
}

type SharedSlider = Rc<RefCell<Slider<DomViewport>>>;

/// Listener and timer handles that must outlive the mount call.
pub(crate) struct Mounted {
    pub(crate) slider: SharedSlider,
    interval_handle: Option<i32>,
    _listeners: Vec<Closure<dyn FnMut()>>,
}

thread_local! {
    static MOUNTED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
}

/// Mount every carousel on the page; returns how many were found.
pub(crate) fn mount_all() -> Result<usize, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let roots = document.query_selector_all("[data-slider-root]")?;

    let mut count = 0;
    for i in 0..roots.length() {
        let Some(root) = roots.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let mounted = mount(&window, &root)?;
        MOUNTED.with(|m| m.borrow_mut().push(mounted));
        count += 1;
    }

    // A page going into the back/forward cache comes back with live
    // carousels; only a real unload tears them down.
    let on_pagehide = Closure::wrap(Box::new(|event: PageTransitionEvent| {
        if !event.persisted() {
            unmount_carousels();
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())?;
    on_pagehide.forget();

    Ok(count)
}

pub(crate) fn mount(window: &web_sys::Window, root: &Element) -> Result<Mounted, JsValue> {
    let options = parse_options(
        &root.id(),
        root.get_attribute("data-infinite").as_deref(),
        root.get_attribute("data-interval-ms").as_deref(),
    );
    let track: HtmlElement = root
        .query_selector("[data-slider-track]")?
        .ok_or("carousel without track")?
        .dyn_into()?;
    let items = html_elements(root, "[data-slider-item]")?;
    let dots = elements(root, "[data-dot]")?;
    let prev = root.query_selector("[data-slide=\"prev\"]")?;
    let next = root.query_selector("[data-slide=\"next\"]")?;

    let viewport = DomViewport {
        track: track.clone(),
        items,
        dots: dots.clone(),
        prev: prev.clone(),
        next: next.clone(),
        infinite: options.infinite,
    };
    let slide_count = viewport.items.len();
    let slider: SharedSlider =
        Rc::new(RefCell::new(Slider::mount(viewport, slide_count, options)));

    let mut listeners = Vec::new();
    let mut listen =
        |target: &Element, event: &str, f: Box<dyn FnMut()>| -> Result<(), JsValue> {
            let closure = Closure::wrap(f);
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
            Ok(())
        };

    if let Some(prev) = &prev {
        let s = slider.clone();
        listen(prev, "click", Box::new(move || {
            s.borrow_mut().prev();
        }))?;
    }
    if let Some(next) = &next {
        let s = slider.clone();
        listen(next, "click", Box::new(move || {
            s.borrow_mut().next();
        }))?;
    }
    for (index, dot) in dots.iter().enumerate() {
        let s = slider.clone();
        let index = index as isize;
        listen(dot, "click", Box::new(move || {
            s.borrow_mut().go_to(index);
        }))?;
    }

    // Swipes and trackpad scrolls move the track without any click;
    // once it settles the slider follows the snapped slide.
    let settle = {
        let s = slider.clone();
        Closure::wrap(Box::new(move || {
            let nearest = s.borrow().viewport().nearest_index();
            if let Some(index) = nearest {
                s.borrow_mut().sync_to(index);
            }
        }) as Box<dyn FnMut()>)
    };
    let settle_fn: js_sys::Function = settle.as_ref().unchecked_ref::<js_sys::Function>().clone();
    {
        let window = window.clone();
        let settle_fn = settle_fn.clone();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        listen(&track, "scroll", Box::new(move || {
            if let Some(handle) = pending.take() {
                window.clear_timeout_with_handle(handle);
            }
            pending.set(
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&settle_fn, SETTLE_MS)
                    .ok(),
            );
        }))?;
    }
    listen(&track, "scrollend", Box::new(move || {
        let _ = settle_fn.call0(&JsValue::NULL);
    }))?;

    // Hover and keyboard focus hold autoplay
    for event in ["pointerenter", "focusin"] {
        let s = slider.clone();
        listen(root, event, Box::new(move || s.borrow_mut().pause()))?;
    }
    for event in ["pointerleave", "focusout"] {
        let s = slider.clone();
        listen(root, event, Box::new(move || s.borrow_mut().resume()))?;
    }

    listeners.push(settle);

    let interval_handle = if slider.borrow().autoplay().interval().is_some() {
        let s = slider.clone();
        let last = Cell::new(js_sys::Date::now());
        let tick = Closure::wrap(Box::new(move || {
            let now = js_sys::Date::now();
            let elapsed = (now - last.replace(now)).max(0.0);
            s.borrow_mut().tick(Duration::from_millis(elapsed as u64));
        }) as Box<dyn FnMut()>);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            TICK_MS,
        )?;
        listeners.push(tick);
        Some(handle)
    } else {
        None
    };

    Ok(Mounted {
        slider,
        interval_handle,
        _listeners: listeners,
    })
}

/// Clear every autoplay timer and unmount every carousel.
///
/// Listeners stay registered; they hit an unmounted slider and do nothing.
#[wasm_bindgen]
pub fn unmount_carousels() {
    let window = web_sys::window();
    MOUNTED.with(|m| {
        for carousel in m.borrow_mut().iter_mut() {
            if let (Some(window), Some(handle)) = (&window, carousel.interval_handle.take()) {
                window.clear_interval_with_handle(handle);
            }
            carousel.slider.borrow_mut().unmount();
        }
    });
}

/// Mounted flag of every registered carousel, in mount order.
#[cfg(test)]
pub(crate) fn mounted_flags() -> Vec<bool> {
    MOUNTED.with(|m| {
        m.borrow()
            .iter()
            .map(|c| c.slider.borrow().is_mounted())
            .collect()
    })
}

fn elements(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn html_elements(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(elements(root, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}
