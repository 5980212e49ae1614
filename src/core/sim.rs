use crate::core::{Particle, Vec3};
use crate::error::{Error, Result};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Gravitational acceleration magnitude, applied along -z.
pub const GRAVITY: f64 = 9.81;

/// A fixed-step simulation that can be driven one step at a time.
///
/// Each `step` call is an atomic transition advancing exactly one interval of
/// simulated time. Callers must invoke `step` strictly sequentially on an
/// exclusively owned simulator; `&mut self` encodes that discipline.
pub trait Simulator {
    /// Advance one step and return the resulting position.
    fn step(&mut self) -> Vec3;

    /// Current simulated time.
    fn time(&self) -> f64;

    /// Current position, readable before any step (the trajectory's first
    /// sample).
    fn position(&self) -> Vec3;
}

/// Cubic room bounds: the same [min, max] extent on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    min: f64,
    max: f64,
}

impl Room {
    /// Create room bounds after validating `min < max` and finiteness.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if either bound is non-finite or min >= max.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidParam("room bounds must be finite".into()));
        }
        if min >= max {
            return Err(Error::InvalidParam(
                "room min bound must be strictly below the max bound".into(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Lower bound on every axis.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound on every axis.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Edge length.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// The historical 20 x 20 x 20 room.
impl Default for Room {
    fn default() -> Self {
        Self { min: 0.0, max: 20.0 }
    }
}

/// One ball under gravity inside a cubic room with reflecting walls.
///
/// Integration is semi-implicit Euler at a fixed interval. Wall handling is
/// reflection-only: whenever a post-move coordinate sits on or beyond a
/// bound, that axis's velocity is flipped and scaled by the coefficient of
/// restitution. There is no positional correction, so a fast enough ball can
/// tunnel past a wall within one step; that is an accepted property of the
/// fixed-step model, not a bug.
#[derive(Debug, Clone)]
pub struct RoomSimulator {
    time_now: f64,
    interval: f64,
    /// Reserved for future derivative-based computations; not consulted by
    /// the stepping path.
    epsilon: f64,
    cor: f64,
    room: Room,
    /// The simulated ball. Exposed for direct state inspection; use the
    /// validated setters to mutate between steps.
    pub ball: Particle,
}

impl RoomSimulator {
    /// Create a simulator for one ball starting at the origin.
    ///
    /// Parameters:
    /// - `velocity`: initial ball velocity; `None` samples each component
    ///   uniformly from [-1, 1]
    /// - `cor`: coefficient of restitution (>= 0; 1 = perfectly elastic)
    /// - `start_time`: initial clock value
    /// - `interval`: simulated seconds per step (> 0)
    /// - `epsilon`: numeric tolerance reserved for derivative estimates
    /// - `room`: cubic bounds the ball is confined to
    /// - `seed`: RNG seed for the sampled velocity; `None` for entropy
    ///
    /// Errors:
    /// - `Error::InvalidParam` on non-finite or out-of-range parameters.
    pub fn new(
        velocity: Option<Vec3>,
        cor: f64,
        start_time: f64,
        interval: f64,
        epsilon: f64,
        room: Room,
        seed: Option<u64>,
    ) -> Result<Self> {
        if !start_time.is_finite() {
            return Err(Error::InvalidParam("start_time must be finite".into()));
        }
        if !interval.is_finite() || interval <= 0.0 {
            return Err(Error::InvalidParam(
                "interval must be finite and > 0".into(),
            ));
        }
        if !epsilon.is_finite() {
            return Err(Error::InvalidParam("epsilon must be finite".into()));
        }
        if !cor.is_finite() || cor < 0.0 {
            return Err(Error::InvalidParam(
                "cor must be finite and >= 0".into(),
            ));
        }

        let vel = match velocity {
            Some(v) => v,
            None => {
                let mut rng: StdRng = match seed {
                    Some(s) => SeedableRng::seed_from_u64(s),
                    None => SeedableRng::seed_from_u64(rng().random()),
                };
                Vec3::new(
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                )
            }
        };

        let ball = Particle::new(Vec3::zero(), vel, Vec3::zero())?;

        Ok(Self {
            time_now: start_time,
            interval,
            epsilon,
            cor,
            room,
            ball,
        })
    }

    /// Step interval in simulated seconds.
    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Coefficient of restitution.
    #[inline]
    pub fn cor(&self) -> f64 {
        self.cor
    }

    /// Reserved numeric tolerance.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Room bounds.
    #[inline]
    pub fn room(&self) -> Room {
        self.room
    }

    /// Current ball velocity.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.ball.vel
    }

    /// Move the ball to `pos` (validated as finite).
    pub fn set_position(&mut self, pos: Vec3) -> Result<()> {
        self.ball.set_position(pos)
    }

    /// Replace the ball's velocity (validated as finite).
    pub fn set_velocity(&mut self, vel: Vec3) -> Result<()> {
        self.ball.set_velocity(vel)
    }

    // ============ Internal helpers ============

    /// Flip and damp every velocity component whose post-move coordinate sits
    /// on or beyond a wall. Axes are checked independently against the same
    /// post-move position; a reflection on one axis never re-triggers a
    /// sibling check.
    fn reflect_at_walls(&mut self) {
        let (lo, hi) = (self.room.min, self.room.max);
        let pos = self.ball.pos;
        if pos.x <= lo || pos.x >= hi {
            self.ball.vel.x = -self.ball.vel.x * self.cor;
        }
        if pos.y <= lo || pos.y >= hi {
            self.ball.vel.y = -self.ball.vel.y * self.cor;
        }
        if pos.z <= lo || pos.z >= hi {
            self.ball.vel.z = -self.ball.vel.z * self.cor;
        }
    }
}

impl Simulator for RoomSimulator {
    fn step(&mut self) -> Vec3 {
        let acc = Vec3::new(0.0, 0.0, -GRAVITY);
        self.ball.update(acc, self.interval);
        self.reflect_at_walls();
        self.time_now += self.interval;
        self.ball.pos
    }

    fn time(&self) -> f64 {
        self.time_now
    }

    fn position(&self) -> Vec3 {
        self.ball.pos
    }
}

/// Sample `steps` positions from a simulator for plotting.
///
/// Each sample records the position *before* the corresponding step, so the
/// first sample is the initial position and the final step's result is not
/// recorded — the sampling contract the plotting driver expects.
pub fn sample_positions<S: Simulator>(sim: &mut S, steps: usize) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(steps);
    for _ in 0..steps {
        out.push(sim.position());
        sim.step();
    }
    out
}
