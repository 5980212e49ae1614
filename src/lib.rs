use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub mod core;
pub mod error;

use crate::core::{sample_positions, Room, RoomSimulator, Simulator, Vec3};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn vec3_from_seq(name: &str, seq: &[f64]) -> PyResult<Vec3> {
    if seq.len() != 3 {
        return Err(py_err(format!(
            "{name} must have length 3, got {}",
            seq.len()
        )));
    }
    Ok(Vec3::new(seq[0], seq[1], seq[2]))
}

/// RoomSim Python-facing wrapper around the Rust RoomSimulator core.
///
/// API:
/// - __new__(velocity=None, cor=1.0, start_time=0.0, interval=0.01,
///   epsilon=1e-5, room=(0.0, 20.0), seed=None)
/// - step() -> (x, y, z)
/// - run(steps) -> np.ndarray, shape (steps, 3)
/// - get_position() / get_velocity() -> (x, y, z)
/// - set_position(seq) / set_velocity(seq)
#[pyclass]
pub struct RoomSim {
    sim: RoomSimulator,
}

#[pymethods]
impl RoomSim {
    /// Initialize a gravity-and-bounce simulation of one ball in a cubic room.
    ///
    /// Parameters
    /// - velocity: iterable of 3 floats, the initial ball velocity; None
    ///   samples each component uniformly from [-1, 1]
    /// - cor: coefficient of restitution between ball and wall (float >= 0)
    /// - start_time: initial simulated time (float)
    /// - interval: simulated seconds advanced per step (float > 0)
    /// - epsilon: numeric tolerance reserved for derivative estimates
    /// - room: (min, max) cubic bounds applied to every axis
    /// - seed: RNG seed (int) for the sampled velocity; None for
    ///   nondeterministic
    ///
    /// Errors: raises ValueError on invalid parameters.
    #[new]
    #[pyo3(signature = (velocity=None, cor=1.0, start_time=0.0, interval=0.01, epsilon=1e-5, room=(0.0, 20.0), seed=None))]
    fn new(
        velocity: Option<Vec<f64>>,
        cor: f64,
        start_time: f64,
        interval: f64,
        epsilon: f64,
        room: (f64, f64),
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let vel = match velocity {
            Some(seq) => Some(vec3_from_seq("velocity", &seq)?),
            None => None,
        };
        let room = Room::new(room.0, room.1).map_err(py_err)?;
        let sim = RoomSimulator::new(vel, cor, start_time, interval, epsilon, room, seed)
            .map_err(py_err)?;
        Ok(Self { sim })
    }

    /// Advance one step and return the resulting position as (x, y, z).
    fn step(&mut self) -> (f64, f64, f64) {
        let pos = self.sim.step();
        (pos.x, pos.y, pos.z)
    }

    /// Run `steps` steps and return the sampled trajectory as a NumPy array
    /// of shape (steps, 3), dtype=float64 (releases the GIL during
    /// computation).
    ///
    /// Row i holds the position before step i, so row 0 is the initial
    /// position — the layout the plotting driver expects.
    fn run<'py>(&mut self, py: Python<'py>, steps: usize) -> PyResult<Py<PyArray2<f64>>> {
        let samples = py.detach(|| sample_positions(&mut self.sim, steps));
        let mut arr = Array2::<f64>::zeros((samples.len(), 3));
        for (i, pos) in samples.into_iter().enumerate() {
            let row = pos.to_array();
            for (k, val) in row.into_iter().enumerate() {
                arr[[i, k]] = val;
            }
        }
        let pyarr = arr.into_pyarray(py);
        Ok(pyarr.to_owned().into())
    }

    /// Return the ball's current position as (x, y, z).
    fn get_position(&self) -> (f64, f64, f64) {
        let pos = self.sim.position();
        (pos.x, pos.y, pos.z)
    }

    /// Return the ball's current velocity as (x, y, z).
    fn get_velocity(&self) -> (f64, f64, f64) {
        let vel = self.sim.velocity();
        (vel.x, vel.y, vel.z)
    }

    /// Move the ball. Values must be finite; the caller is responsible for
    /// placing it inside the room.
    fn set_position(&mut self, position: Vec<f64>) -> PyResult<()> {
        let pos = vec3_from_seq("position", &position)?;
        self.sim.set_position(pos).map_err(py_err)
    }

    /// Replace the ball's velocity. Values must be finite.
    fn set_velocity(&mut self, velocity: Vec<f64>) -> PyResult<()> {
        let vel = vec3_from_seq("velocity", &velocity)?;
        self.sim.set_velocity(vel).map_err(py_err)
    }

    /// Current simulated time.
    fn time(&self) -> f64 {
        self.sim.time()
    }

    /// Simulated seconds per step.
    fn interval(&self) -> f64 {
        self.sim.interval()
    }

    /// Coefficient of restitution.
    fn cor(&self) -> f64 {
        self.sim.cor()
    }
}

/// The roomsim Python module entry point.
#[pymodule]
fn roomsim(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RoomSim>()?;
    Ok(())
}
