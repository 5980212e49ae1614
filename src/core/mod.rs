//! Core state-advancement machinery: vector arithmetic, point-mass
//! kinematics, and the fixed-step room simulator.
//!
//! Everything here is pure, single-threaded computation; the Python-facing
//! wrapper in the crate root is the only layer that talks to the outside.

pub mod particle;
pub mod sim;
pub mod vector;

pub use particle::Particle;
pub use sim::{sample_positions, Room, RoomSimulator, Simulator, GRAVITY};
pub use vector::Vec3;
