use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use super::easing::Ease;

/// The visual properties the animation layer owns on an element.
/// Everything else (classes, layout, content) belongs to the component markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub rotation: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        rotation: 0.0,
    };

    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = scale_x;
        self
    }

    pub const fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            scale_x: mix(self.scale_x, to.scale_x),
            rotation: mix(self.rotation, to.rotation),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}) scaleX({:.4}) rotate({:.2}deg)",
            self.x, self.y, self.scale, self.scale_x, self.rotation
        )
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }

    /// Any transform other than `none` makes the element a containing block
    /// for fixed descendants, so a settled element drops it entirely.
    pub fn css_transform(&self) -> String {
        if self.transform_is_identity() {
            "none".to_string()
        } else {
            self.transform()
        }
    }

    fn transform_is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 && self.scale_x == 1.0 && self.rotation == 0.0
    }

    pub fn apply(&self, element: &HtmlElement) {
        let style = element.style();
        let _ = style.set_property("transform", &self.css_transform());
        let _ = style.set_property("opacity", &self.css_opacity());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
    pub origin: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub pose: Pose,
    /// Eased progress, 0..=1 (may overshoot for back eases).
    pub progress: f64,
    pub done: bool,
}

impl TweenSpec {
    pub fn new(from: Pose, to: Pose, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            ease,
            origin: None,
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn origin(mut self, origin: &'static str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn sample(&self, elapsed_ms: f64) -> Sample {
        let active = elapsed_ms - self.delay_ms;
        let linear = if self.duration_ms <= 0.0 {
            if active >= 0.0 { 1.0 } else { 0.0 }
        } else {
            (active / self.duration_ms).clamp(0.0, 1.0)
        };
        let progress = self.ease.apply(linear);
        let done = linear >= 1.0;
        Sample {
            // Land exactly on the target so a settled transform reads as identity.
            pose: if done { self.to } else { self.from.lerp(&self.to, progress) },
            progress,
            done,
        }
    }

    /// Total run time for `count` targets started `stagger_ms` apart.
    pub fn total_ms(&self, count: usize, stagger_ms: f64) -> f64 {
        let extra = count.saturating_sub(1) as f64 * stagger_ms;
        self.delay_ms + extra + self.duration_ms
    }

    /// Target-less tweens (pure progress drivers) still run their full length.
    pub fn settled_at(&self, elapsed_ms: f64, count: usize, stagger_ms: f64) -> bool {
        elapsed_ms >= self.total_ms(count, stagger_ms)
    }
}

/// A self-rescheduling requestAnimationFrame loop. The callback holds an
/// `Rc` back to its loop; `stop` breaks that cycle.
struct FrameLoop {
    window: Option<Window>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    fn request(&self) -> bool {
        let callback = self.callback.borrow();
        match (self.window.as_ref(), callback.as_ref()) {
            (Some(window), Some(on_frame)) => match window.request_animation_frame(on_frame.as_ref().unchecked_ref()) {
                Ok(id) => {
                    self.pending.set(Some(id));
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }

    fn stop(&self) {
        if let (Some(window), Some(id)) = (self.window.as_ref(), self.pending.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        let released = self.callback.borrow_mut().take();
        drop(released);
    }

    fn is_live(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

/// Owns a running tween. Dropping or cancelling it stops the frame loop, so
/// no callback runs after the owning component is gone.
pub struct TweenHandle {
    frames: Rc<FrameLoop>,
}

impl TweenHandle {
    pub fn cancel(&self) {
        self.frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_live()
    }
}

impl Drop for TweenHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as f64)
}

/// Plays `spec` on every target, each one `stagger_ms` after the previous.
/// `on_update` receives the eased progress of the first target on every tick,
/// `on_complete` fires once after the last target settles.
pub fn play<U, C>(
    targets: Vec<HtmlElement>,
    spec: TweenSpec,
    stagger_ms: f64,
    mut on_update: U,
    on_complete: C,
) -> TweenHandle
where
    U: FnMut(f64) + 'static,
    C: FnOnce() + 'static,
{
    for element in &targets {
        if let Some(origin) = spec.origin {
            let _ = element.style().set_property("transform-origin", origin);
        }
        spec.from.apply(element);
    }

    let frames = Rc::new(FrameLoop {
        window: web_sys::window(),
        pending: Cell::new(None),
        callback: RefCell::new(None),
    });
    if frames.window.is_none() {
        // No frame loop available: land on the end state right away.
        for element in &targets {
            spec.to.apply(element);
        }
        on_update(spec.sample(spec.total_ms(targets.len(), stagger_ms)).progress);
        on_complete();
        return TweenHandle { frames };
    }

    let own_frames = frames.clone();
    let started = now_ms();
    let mut on_complete = Some(on_complete);
    let count = targets.len();

    let on_frame = Closure::wrap(Box::new(move || {
        own_frames.pending.set(None);
        let elapsed = now_ms() - started;
        for (index, element) in targets.iter().enumerate() {
            spec.sample(elapsed - index as f64 * stagger_ms).pose.apply(element);
        }
        on_update(spec.sample(elapsed).progress);

        if spec.settled_at(elapsed, count, stagger_ms) {
            own_frames.stop();
            if let Some(done) = on_complete.take() {
                done();
            }
        } else if own_frames.is_live() && !own_frames.request() {
            log::warn!("animation frame request failed, tween stopped early");
            own_frames.stop();
        }
    }) as Box<dyn FnMut()>);
    *frames.callback.borrow_mut() = Some(on_frame);

    if !frames.request() {
        log::warn!("animation frame request failed, tween not started");
        frames.stop();
    }

    TweenHandle { frames }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_holds_from_pose_during_delay() {
        let spec = TweenSpec::new(Pose::REST.opacity(0.0).y(50.0), Pose::REST, 1000.0, Ease::Power3Out)
            .delay(200.0);
        let sample = spec.sample(150.0);
        assert_eq!(sample.pose.opacity, 0.0);
        assert_eq!(sample.pose.y, 50.0);
        assert!(!sample.done);
    }

    #[test]
    fn sample_reaches_target_after_duration() {
        let spec = TweenSpec::new(Pose::REST.opacity(0.0).y(50.0), Pose::REST, 800.0, Ease::Power3Out);
        let sample = spec.sample(800.0);
        assert!(sample.done);
        assert_eq!(sample.pose, Pose::REST);

        let later = spec.sample(5_000.0);
        assert_eq!(later.pose, Pose::REST);
    }

    #[test]
    fn zero_duration_jumps_once_started() {
        let spec = TweenSpec::new(Pose::REST.scale_x(0.0), Pose::REST, 0.0, Ease::Linear).delay(10.0);
        assert_eq!(spec.sample(5.0).pose.scale_x, 0.0);
        assert_eq!(spec.sample(10.0).pose.scale_x, 1.0);
    }

    #[test]
    fn total_time_accounts_for_stagger() {
        let spec = TweenSpec::new(Pose::REST.opacity(0.0), Pose::REST, 800.0, Ease::Power3Out).delay(100.0);
        assert_eq!(spec.total_ms(1, 150.0), 900.0);
        assert_eq!(spec.total_ms(4, 150.0), 1350.0);
        assert_eq!(spec.total_ms(0, 150.0), 900.0);
    }

    #[test]
    fn frame_loop_settles_after_the_last_staggered_target() {
        let spec = TweenSpec::new(Pose::REST.opacity(0.0), Pose::REST, 800.0, Ease::Power3Out).delay(100.0);
        assert!(!spec.settled_at(1349.0, 4, 150.0));
        assert!(spec.settled_at(1350.0, 4, 150.0));
        // a progress driver with no targets still runs delay + duration
        assert!(!spec.settled_at(899.0, 0, 150.0));
        assert!(spec.settled_at(900.0, 0, 150.0));
    }

    #[test]
    fn transform_string_lists_every_component() {
        let pose = Pose::REST.x(-50.0).y(10.0).scale(0.5).rotation(-180.0);
        assert_eq!(
            pose.transform(),
            "translate(-50.00px, 10.00px) scale(0.5000) scaleX(1.0000) rotate(-180.00deg)"
        );
    }

    #[test]
    fn settled_pose_clears_the_transform() {
        assert_eq!(Pose::REST.css_transform(), "none");
        assert_eq!(Pose::REST.opacity(0.0).css_transform(), "none");
        assert_ne!(Pose::REST.y(-10.0).css_transform(), "none");
    }

    #[test]
    fn opacity_is_clamped_for_css() {
        assert_eq!(Pose::REST.opacity(1.2).css_opacity(), "1.0000");
        assert_eq!(Pose::REST.opacity(-0.1).css_opacity(), "0.0000");
    }
}
