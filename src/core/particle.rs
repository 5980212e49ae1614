use crate::core::Vec3;
use crate::error::{Error, Result};

/// A point mass moving in 3D space.
///
/// Fields:
/// - `pos`: current position
/// - `vel`: current velocity
/// - `acc`: current acceleration (set by the caller each step, not integrated
///   from a jerk term)
///
/// Position and velocity are mutated in place by the kinematic operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    /// Position.
    pub pos: Vec3,
    /// Velocity.
    pub vel: Vec3,
    /// Acceleration.
    pub acc: Vec3,
}

impl Particle {
    /// Create a new particle after validating that every component is finite.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if any component is NaN or infinite.
    pub fn new(pos: Vec3, vel: Vec3, acc: Vec3) -> Result<Self> {
        if !pos.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !vel.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        if !acc.is_finite() {
            return Err(Error::InvalidParam("acceleration must be finite".into()));
        }
        Ok(Self { pos, vel, acc })
    }

    /// Advance the position by `dt` seconds of linear motion: pos += vel * dt.
    #[inline]
    pub fn drift(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Advance the position by a fixed `distance` along the current velocity
    /// direction: pos += unit(vel) * distance.
    ///
    /// Errors:
    /// - `Error::UndefinedDirection` if the velocity has zero magnitude.
    pub fn drift_distance(&mut self, distance: f64) -> Result<()> {
        let dir = self
            .vel
            .unit()
            .map_err(|_| Error::UndefinedDirection("velocity has zero magnitude"))?;
        self.pos += dir * distance;
        Ok(())
    }

    /// Advance the velocity by `dt` seconds of constant acceleration:
    /// vel += acc * dt.
    #[inline]
    pub fn accelerate(&mut self, dt: f64) {
        self.vel += self.acc * dt;
    }

    /// Change the speed by a fixed `delta` along the current acceleration
    /// direction: vel += unit(acc) * delta.
    ///
    /// Errors:
    /// - `Error::UndefinedDirection` if the acceleration has zero magnitude.
    pub fn accelerate_speed(&mut self, delta: f64) -> Result<()> {
        let dir = self
            .acc
            .unit()
            .map_err(|_| Error::UndefinedDirection("acceleration has zero magnitude"))?;
        self.vel += dir * delta;
        Ok(())
    }

    /// One semi-implicit Euler step: set the acceleration, fold it into the
    /// velocity, then move with the updated velocity.
    ///
    /// The ordering matters: the position update sees the velocity that
    /// already includes this step's acceleration contribution.
    pub fn update(&mut self, acc: Vec3, dt: f64) {
        self.acc = acc;
        self.accelerate(dt);
        self.drift(dt);
    }

    /// Current speed: |vel|.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.magnitude()
    }

    /// Set position (validated as finite).
    pub fn set_position(&mut self, pos: Vec3) -> Result<()> {
        if !pos.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        self.pos = pos;
        Ok(())
    }

    /// Set velocity (validated as finite).
    pub fn set_velocity(&mut self, vel: Vec3) -> Result<()> {
        if !vel.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        self.vel = vel;
        Ok(())
    }
}
