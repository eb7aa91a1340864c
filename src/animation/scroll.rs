use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window};
use yew::prelude::*;

pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

pub fn is_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Collapses any number of scroll events into one evaluation per frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    /// True when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn settle(&mut self) {
        self.ticking = false;
    }
}

/// A passive window scroll listener that reports `scroll_y` at most once per
/// animation frame. Dropping it removes the listener and any pending frame.
pub struct ScrollListener {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl ScrollListener {
    pub fn attach<F>(window: Window, mut on_offset: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        // Initial evaluation so state matches a restored scroll position.
        on_offset(window.scroll_y().unwrap_or(0.0));

        let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
        let pending = Rc::new(Cell::new(None));

        let on_frame = {
            let window = window.clone();
            let throttle = throttle.clone();
            let pending = pending.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                pending.set(None);
                throttle.borrow_mut().settle();
                on_offset(window.scroll_y().unwrap_or(0.0));
            }) as Box<dyn FnMut()>))
        };

        let on_scroll = {
            let window = window.clone();
            let on_frame = on_frame.clone();
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                if !throttle.borrow_mut().request() {
                    return;
                }
                match window.request_animation_frame(on_frame.as_ref().as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(_) => throttle.borrow_mut().settle(),
                }
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            window,
            on_scroll,
            _on_frame: on_frame,
            pending,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Tracks whether the page is scrolled beyond `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state_eq(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let threshold = *threshold;
                let listener = web_sys::window().and_then(|window| {
                    ScrollListener::attach(window, move |offset| past.set(is_past(offset, threshold)))
                        .map_err(|err| log::warn!("could not attach scroll listener: {:?}", err))
                        .ok()
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *past
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls so the section's top aligns with the viewport top.
/// Returns false when no element carries `id`.
pub fn scroll_to_section(id: &str) -> bool {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("no section with id {}", id);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_is_strictly_above_threshold() {
        assert!(!is_past(0.0, SCROLL_TOP_THRESHOLD));
        assert!(!is_past(300.0, SCROLL_TOP_THRESHOLD));
        assert!(is_past(300.5, SCROLL_TOP_THRESHOLD));
        assert!(is_past(4_000.0, SCROLL_TOP_THRESHOLD));
    }

    #[test]
    fn crossing_the_threshold_repeatedly_toggles_without_drift() {
        let offsets = [0.0, 310.0, 299.0, 301.0, 300.0, 1200.0, 0.0];
        let visible: Vec<bool> = offsets.iter().map(|&o| is_past(o, SCROLL_TOP_THRESHOLD)).collect();
        assert_eq!(visible, vec![false, true, false, true, false, true, false]);
    }

    #[test]
    fn scrolling_back_to_origin_hides_the_control() {
        // after a click on the control the viewport settles at offset 0
        assert!(is_past(850.0, SCROLL_TOP_THRESHOLD));
        assert!(!is_past(0.0, SCROLL_TOP_THRESHOLD));
    }

    #[test]
    fn throttle_allows_one_frame_until_settled() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        for _ in 0..20 {
            assert!(!throttle.request());
        }
        throttle.settle();
        assert!(throttle.request());
    }
}
