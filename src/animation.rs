//! Browser-driven spring animation.
//!
//! [`SpringAnimator`] advances a [`SpringValue`] on every animation frame until it comes to
//! rest, reporting each position through a callback. [`use_spring`] wraps it as a hook that
//! returns the current animated value for a target.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use yew::prelude::*;

use crate::spring::{SpringSpec, SpringValue};

/// Longest frame gap fed into the simulation, so a throttled tab resumes without a jump.
const MAX_FRAME_MS: f64 = 50.0;

/// Seconds to advance for a frame at `now_ms`. The first frame of a run only records its
/// timestamp; clock skew going backwards counts as no time.
fn frame_dt_secs(prev_ms: Option<f64>, now_ms: f64) -> f64 {
    prev_ms.map_or(0.0, |prev| (now_ms - prev).clamp(0.0, MAX_FRAME_MS) / 1000.0)
}

struct AnimatorInner {
    spring: SpringValue,
    last_frame_ms: Option<f64>,
    frame: Option<AnimationFrame>,
    on_value: Callback<f64>,
}

/// Cloning shares the underlying animation.
#[derive(Clone)]
pub struct SpringAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

impl SpringAnimator {
    pub fn new(initial: f64, spec: SpringSpec, on_value: Callback<f64>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AnimatorInner {
                spring: SpringValue::new(initial, spec),
                last_frame_ms: None,
                frame: None,
                on_value,
            })),
        }
    }

    /// Retargets the spring, keeping any in-flight velocity, and starts frames if needed.
    pub fn animate_to(&self, target: f64) {
        let needs_frame = {
            let mut inner = self.inner.borrow_mut();
            inner.spring.set_target(target);
            !inner.spring.is_settled()
        };
        if needs_frame {
            Self::ensure_frame(&self.inner);
        }
    }

    /// Cancels the pending frame. The value stays wherever it was.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.frame.take();
        inner.last_frame_ms = None;
    }

    fn ensure_frame(this: &Rc<RefCell<AnimatorInner>>) {
        if this.borrow().frame.is_some() {
            return;
        }
        let weak = Rc::downgrade(this);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, timestamp);
            }
        });
        this.borrow_mut().frame = Some(handle);
    }

    fn on_frame(this: &Rc<RefCell<AnimatorInner>>, timestamp: f64) {
        let (value, settled, on_value) = {
            let mut inner = this.borrow_mut();
            inner.frame.take();
            let dt = frame_dt_secs(inner.last_frame_ms, timestamp);
            let settled = inner.spring.step(dt);
            inner.last_frame_ms = if settled { None } else { Some(timestamp) };
            (inner.spring.position(), settled, inner.on_value.clone())
        };
        on_value.emit(value);
        if !settled {
            Self::ensure_frame(this);
        }
    }
}

/// Current value of a spring chasing `target`. The first render returns `target` as-is;
/// later target changes animate from wherever the spring currently is.
#[hook]
pub fn use_spring(target: f64, spec: SpringSpec) -> f64 {
    let value = use_state_eq(|| target);
    let animator = {
        let value = value.clone();
        use_mut_ref(move || {
            SpringAnimator::new(target, spec, Callback::from(move |v| value.set(v)))
        })
    };
    {
        let animator = animator.clone();
        use_effect_with(target, move |target| {
            animator.borrow().animate_to(*target);
            || ()
        });
    }
    {
        let animator = animator.clone();
        use_effect_with((), move |_| move || animator.borrow().stop());
    }
    *value
}
