use crate::foundation::error::{FlourishError, FlourishResult};

/// Physical constants of a damped spring.
///
/// Defaults are the dock magnification feel: light mass, stiff spring,
/// enough damping to settle without visible ringing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringParams {
    /// Oscillator mass.
    pub mass: f64,
    /// Restoring force per unit displacement.
    pub stiffness: f64,
    /// Velocity-proportional friction.
    pub damping: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: 0.1,
            stiffness: 150.0,
            damping: 12.0,
        }
    }
}

impl SpringParams {
    /// Reject non-finite or non-positive constants.
    pub fn validate(&self) -> FlourishResult<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(FlourishError::validation("spring mass must be > 0"));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(FlourishError::validation("spring stiffness must be > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(FlourishError::validation("spring damping must be >= 0"));
        }
        Ok(())
    }
}

/// A target-seeking damped oscillator.
///
/// Integrated with semi-implicit Euler at a fixed internal substep so a
/// stiff spring stays stable across irregular host frame deltas.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    params: SpringParams,
    value: f64,
    velocity: f64,
    target: f64,
}

// Substep ceiling; stiffness 150 / mass 0.1 is stable well below this.
const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;

impl Spring {
    /// A spring at rest at `initial` with validated params.
    pub fn new(params: SpringParams, initial: f64) -> FlourishResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            value: initial,
            velocity: 0.0,
            target: initial,
        })
    }

    /// Current position.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position the spring is seeking.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget without disturbing the current position or velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` with zero velocity, abandoning any in-flight motion.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Advance by `dt_secs` and return the new value. Negative or
    /// non-finite deltas are ignored.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self.value;
        }
        let mut remaining = dt_secs;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let accel = (-self.params.stiffness * (self.value - self.target)
                - self.params.damping * self.velocity)
                / self.params.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }

    /// Within `epsilon` of the target in both position and velocity.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.value - self.target).abs() <= epsilon && self.velocity.abs() <= epsilon
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
