//! Damped spring physics for animated scalar values.
//!
//! The simulation is independent of any frame clock: callers feed elapsed time into
//! [`SpringValue::step`] and read back the position. See [`crate::animation`] for the
//! browser-driven animator.

use serde::{Deserialize, Serialize};

/// Longest integration step. Frames are split into equal sub-steps no longer than this so the
/// result does not depend on the display's refresh rate.
const SUBSTEP_SECS: f64 = 0.004;

/// Upper bound on sub-steps per call, whatever the spring constants ask for.
const MAX_SUBSTEPS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSpec {
    pub stiffness: f64,
    /// Viscous damping coefficient (not a ratio).
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    pub rest_displacement_threshold: f64,
    /// Speed (units per second) under which the spring may come to rest.
    pub rest_speed_threshold: f64,
}

impl Default for SpringSpec {
    /// Under-damped spring (damping ratio 0.5): a visible overshoot that settles in about
    /// two seconds.
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 2.0,
        }
    }
}

impl SpringSpec {
    /// Unit-mass spring with the damping coefficient derived from a damping ratio.
    /// 1.0 is critically damped, below 1.0 bounces.
    pub fn from_damping_ratio(ratio: f64, stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * ratio * stiffness.sqrt(),
            mass: 1.0,
            ..Self::default()
        }
    }

    /// Fast, no bounce.
    pub fn stiff() -> Self {
        Self::from_damping_ratio(1.0, 1500.0)
    }

    #[cfg(test)]
    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.effective_mass()).sqrt())
    }

    /// All constants finite, positive and non-zero. Zero damping never comes to rest.
    pub fn is_valid(&self) -> bool {
        [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_displacement_threshold,
            self.rest_speed_threshold,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }

    fn effective_mass(&self) -> f64 {
        if self.mass > 0.0 { self.mass } else { 1.0 }
    }

    /// Sub-step length that keeps the explicit integration stable: a tenth of `1/omega`,
    /// and at most half of `m/c`.
    fn max_substep(&self) -> f64 {
        let m = self.effective_mass();
        let mut limit = SUBSTEP_SECS;
        let inv_omega = (m / self.stiffness).sqrt();
        if inv_omega.is_finite() && inv_omega > 0.0 {
            limit = limit.min(0.1 * inv_omega);
        }
        let damping_time = m / self.damping;
        if damping_time.is_finite() && damping_time > 0.0 {
            limit = limit.min(0.5 * damping_time);
        }
        limit
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpringValue {
    position: f64,
    velocity: f64,
    target: f64,
    spec: SpringSpec,
}

impl SpringValue {
    /// A spring at rest on `initial`.
    pub fn new(initial: f64, spec: SpringSpec) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            spec,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Redirects the spring. Position and velocity carry over, so an in-flight animation
    /// bends toward the new target instead of restarting.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.position == self.target
    }

    /// Advances the simulation by `dt_secs`. Returns true once the spring is at rest on its
    /// target; a resting spring snaps exactly onto the target value. So does a spring whose
    /// state stops being finite.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if self.is_settled() {
            return true;
        }
        let k = self.spec.stiffness;
        let c = self.spec.damping;
        let m = self.spec.effective_mass();

        // Semi-implicit Euler: velocity first, then position from the new velocity.
        let dt = dt_secs.max(0.0);
        if dt > 0.0 {
            let steps = (dt / self.spec.max_substep()).ceil().clamp(1.0, MAX_SUBSTEPS);
            let h = dt / steps;
            for _ in 0..steps as u32 {
                let displacement = self.position - self.target;
                let accel = (-k * displacement - c * self.velocity) / m;
                self.velocity += accel * h;
                self.position += self.velocity * h;
            }
        }

        if !self.position.is_finite() || !self.velocity.is_finite() {
            self.position = self.target;
            self.velocity = 0.0;
        } else if self.velocity.abs() < self.spec.rest_speed_threshold
            && (self.position - self.target).abs() < self.spec.rest_displacement_threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.is_settled()
    }
}
