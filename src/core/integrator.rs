/// One multiplicative damping step. `damping` must lie in `(0, 1)` for the
/// velocity to decay to rest.
#[inline]
pub fn damp(velocity: f32, damping: f32) -> f32 {
    velocity * damping
}

/// A scalar position driven by a damped velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DampedAxis {
    pub position: f32,
    pub velocity: f32,
}

impl DampedAxis {
    pub fn new(position: f32, velocity: f32) -> Self {
        Self { position, velocity }
    }

    /// `v' = v * d`, `p' = p + v'`.
    #[inline]
    pub fn step(&mut self, damping: f32) {
        self.velocity = damp(self.velocity, damping);
        self.position += self.velocity;
    }

    pub fn is_at_rest(&self, epsilon: f32) -> bool {
        self.velocity.abs() < epsilon
    }
}

/// Wrap `position` into `[-width, width)` by whole periods of `width`.
///
/// Content is duplicated ahead of time, so shifting by one period is visually
/// seamless. A non-positive or non-finite width leaves the position untouched
/// (layout not measured yet).
pub fn wrap_toroidal(position: f32, width: f32) -> f32 {
    if !(width > 0.0) || !width.is_finite() || !position.is_finite() {
        return position;
    }
    if position >= width || position < -width {
        // `%` keeps the sign, so the result lands in (-width, width) even when
        // the width shrank by several periods on resize.
        position % width
    } else {
        position
    }
}
