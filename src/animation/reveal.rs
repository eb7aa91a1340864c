use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::easing::Ease;
use super::tween::{self, Pose, TweenHandle, TweenSpec};

/// "top N%": the reveal fires once the element's top edge reaches N% of the
/// viewport height, measured from the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerBand {
    pub start_pct: u8,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self { start_pct: 85 }
    }
}

impl TriggerBand {
    pub const fn top(start_pct: u8) -> Self {
        Self { start_pct }
    }

    /// Shrinks the observer root from the bottom so that crossing into the
    /// root is crossing the band line.
    pub fn root_margin(&self) -> String {
        let pct = self.start_pct.min(100);
        format!("0px 0px -{}% 0px", 100 - pct)
    }
}

/// Decides whether an observer notification should reveal the element.
/// An element already scrolled above the viewport counts as revealed too.
pub fn should_reveal(intersecting: bool, top: f64) -> bool {
    intersecting || top < 0.0
}

/// One-shot gate: passes the first qualifying notification, nothing after.
#[derive(Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn offer(&mut self, qualifies: bool) -> bool {
        if self.fired || !qualifies {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Owns one viewport observer for one trigger element. Dropping it
/// disconnects exactly that observer. `root_margin` uses CSS margin syntax
/// and grows or shrinks the viewport box the element has to enter.
pub struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatcher {
    pub fn watch<F>(target: &Element, root_margin: &str, on_enter: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let latch = Rc::new(RefCell::new(RevealLatch::default()));
        let mut on_enter = Some(on_enter);

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let qualifies = should_reveal(entry.is_intersecting(), entry.bounding_client_rect().top());
                if latch.borrow_mut().offer(qualifies) {
                    observer.disconnect();
                    if let Some(reveal) = on_enter.take() {
                        reveal();
                    }
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(0.0));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub hidden: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub stagger_ms: f64,
    pub ease: Ease,
    pub band: TriggerBand,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            hidden: Pose::REST.opacity(0.0).y(50.0),
            duration_ms: 800.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            ease: Ease::Power3Out,
            band: TriggerBand::default(),
        }
    }
}

impl RevealOptions {
    pub fn rising(offset: f64) -> Self {
        Self {
            hidden: Pose::REST.opacity(0.0).y(offset),
            ..Self::default()
        }
    }

    pub fn hidden(mut self, hidden: Pose) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn band(mut self, start_pct: u8) -> Self {
        self.band = TriggerBand::top(start_pct);
        self
    }

    pub fn spec(&self) -> TweenSpec {
        TweenSpec::new(self.hidden, Pose::REST, self.duration_ms, self.ease).delay(self.delay_ms)
    }
}

/// Hides `targets` on mount and reveals them once `trigger` crosses the band.
/// The observer and any running tween are released on unmount.
#[hook]
pub fn use_reveal(trigger: NodeRef, targets: Vec<NodeRef>, options: RevealOptions) {
    use_effect_with_deps(
        move |options: &RevealOptions| {
            let options = options.clone();
            let elements: Vec<HtmlElement> = targets.iter().filter_map(|r| r.cast::<HtmlElement>()).collect();
            let running: Rc<RefCell<Option<TweenHandle>>> = Rc::new(RefCell::new(None));

            for element in &elements {
                options.hidden.apply(element);
            }

            let watcher = trigger.cast::<Element>().and_then(|anchor| {
                let running = running.clone();
                let revealed = elements.clone();
                let reveal_options = options.clone();
                let watched = RevealWatcher::watch(&anchor, &options.band.root_margin(), move || {
                    let handle = tween::play(
                        revealed,
                        reveal_options.spec(),
                        reveal_options.stagger_ms,
                        |_| {},
                        || {},
                    );
                    *running.borrow_mut() = Some(handle);
                });
                match watched {
                    Ok(watcher) => Some(watcher),
                    Err(err) => {
                        log::warn!("viewport observer unavailable, showing content: {:?}", err);
                        for element in &elements {
                            Pose::REST.apply(element);
                        }
                        None
                    }
                }
            });

            move || {
                drop(watcher);
                running.borrow_mut().take();
            }
        },
        options,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_matches_band_line() {
        assert_eq!(TriggerBand::default().root_margin(), "0px 0px -15% 0px");
        assert_eq!(TriggerBand::top(75).root_margin(), "0px 0px -25% 0px");
        assert_eq!(TriggerBand::top(90).root_margin(), "0px 0px -10% 0px");
        assert_eq!(TriggerBand::top(100).root_margin(), "0px 0px -0% 0px");
    }

    #[test]
    fn latch_fires_at_most_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.offer(false));
        assert!(latch.offer(true));
        assert!(latch.has_fired());
        // re-entering and leaving the band never fires again
        for qualifies in [false, true, false, true, true] {
            assert!(!latch.offer(qualifies));
        }
    }

    #[test]
    fn elements_scrolled_past_count_as_revealed() {
        assert!(should_reveal(true, 400.0));
        assert!(should_reveal(false, -20.0));
        assert!(!should_reveal(false, 900.0));
    }

    #[test]
    fn options_build_the_reveal_tween() {
        let options = RevealOptions::rising(30.0).delay(200.0).band(90);
        let spec = options.spec();
        assert_eq!(spec.from, Pose::REST.opacity(0.0).y(30.0));
        assert_eq!(spec.to, Pose::REST);
        assert_eq!(spec.delay_ms, 200.0);
        assert_eq!(options.band, TriggerBand::top(90));
    }
}
