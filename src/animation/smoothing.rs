use crate::{animation::ease::Ease, foundation::math::lerp};

/// Inertial smoothed-scroll driver.
///
/// Rendered scroll position lags the raw input through an exponential lerp,
/// giving visible deceleration instead of tracking the wheel 1:1. The lerp
/// factor is expressed per 60 Hz frame and corrected for the actual host
/// frame delta, so the feel is frame-rate independent.
///
/// Programmed scrolls (anchor navigation) bypass the lerp: [`animate_to`]
/// runs a fixed-duration eased tween instead, and any new raw input cancels
/// it.
///
/// [`animate_to`]: SmoothScroll::animate_to
#[derive(Clone, Copy, Debug)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    /// Fraction of the remaining distance covered per 60 Hz frame.
    lerp_per_frame: f64,
    tween: Option<Tween>,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

const REFERENCE_HZ: f64 = 60.0;
// Below this remaining distance the driver snaps and reports settled.
const SNAP_EPSILON: f64 = 0.05;

impl SmoothScroll {
    /// A driver at rest at 0 with the given per-frame lerp factor,
    /// clamped to `(0.01, 1.0]`.
    pub fn new(lerp_per_frame: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            lerp_per_frame: lerp_per_frame.clamp(0.01, 1.0),
            tween: None,
        }
    }

    /// Feed the raw scroll offset from the host. Cancels any programmed
    /// scroll in flight.
    pub fn set_target(&mut self, raw_scroll: f64) {
        if raw_scroll.is_finite() {
            self.target = raw_scroll;
            self.tween = None;
        }
    }

    /// Jump straight to `position` with no easing (initial placement).
    pub fn jump_to(&mut self, position: f64) {
        self.current = position;
        self.target = position;
        self.tween = None;
    }

    /// Start a programmed scroll: ease from the current position to
    /// `target` over `duration_secs`. Degenerate durations jump.
    pub fn animate_to(&mut self, target: f64, duration_secs: f64, ease: Ease) {
        if !target.is_finite() {
            return;
        }
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            self.jump_to(target);
            return;
        }
        self.tween = Some(Tween {
            from: self.current,
            to: target,
            elapsed: 0.0,
            duration: duration_secs,
            ease,
        });
        self.target = target;
    }

    /// Current rendered scroll position.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Position the driver is heading toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance one host frame and return the eased position.
    pub fn tick(&mut self, dt_secs: f64) -> f64 {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self.current;
        }

        if let Some(mut tween) = self.tween.take() {
            tween.elapsed += dt_secs;
            let t = (tween.elapsed / tween.duration).min(1.0);
            self.current = lerp(tween.from, tween.to, tween.ease.apply(t));
            if t < 1.0 {
                self.tween = Some(tween);
            } else {
                self.current = tween.to;
            }
            return self.current;
        }

        let frames = dt_secs * REFERENCE_HZ;
        let keep = (1.0 - self.lerp_per_frame).powf(frames);
        self.current = self.target + (self.current - self.target) * keep;
        if (self.current - self.target).abs() < SNAP_EPSILON {
            self.current = self.target;
        }
        self.current
    }

    /// Landed on the target with no tween in flight.
    pub fn is_settled(&self) -> bool {
        self.tween.is_none() && self.current == self.target
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        // The classic "lerp: 0.1" smooth-scroll feel.
        Self::new(0.1)
    }
}
