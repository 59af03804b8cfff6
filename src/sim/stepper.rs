use nalgebra::Vector3;

use crate::error::Result;
use crate::system::OrbitalSystem;

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub duration: f64,   // years
    pub timestep: f64,   // years
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            timestep: 0.00273973 * 7.0,   // one week
        }
    }
}

/// Endpoint-inclusive uniform sample vector with `n` points.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Per-entry trajectory
// ---------------------------------------------------------------------------

/// Trajectory of one orbiting entry over the simulation time vector.
#[derive(Debug, Clone)]
pub struct OrbitTrace {
    pub name: String,
    pub angular_velocity: f64,            // rad/year
    pub orbit_radius: f64,                // AU
    pub positions: Vec<Vector3<f64>>,     // AU, one sample per time step
    pub velocities: Vec<Vector3<f64>>,    // AU/year, only index 0 populated
}

/// Completed (or established) simulation: the time vector plus one trace
/// per orbiting entry, in the system's insertion order.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub time: Vec<f64>,                   // years
    pub traces: Vec<OrbitTrace>,
}

impl SimulationRun {
    /// Look up a trace by entry name.
    pub fn trace(&self, name: &str) -> Option<&OrbitTrace> {
        self.traces.iter().find(|t| t.name == name)
    }

    pub fn num_steps(&self) -> usize {
        self.time.len()
    }
}

// ---------------------------------------------------------------------------
// Stepper
// ---------------------------------------------------------------------------

/// Set up trajectory storage for every orbiting entry of `system`.
///
/// Resolves each entry's angular velocity (2π over its orbital period) and
/// orbit radius, seeds `positions[0]` with the entry's starting position
/// and `velocities[0]` with zero, and preallocates the remaining samples.
pub fn establish_simulation(system: &OrbitalSystem, time: Vec<f64>) -> Result<SimulationRun> {
    let num_steps = time.len();
    let mut traces = Vec::with_capacity(system.len());

    for entry in system.entries() {
        let period = system.get_orbital_period(entry.name())?;
        let orbit_radius = system.get_orbit_object_distance(entry.name())?;

        let mut positions = vec![Vector3::zeros(); num_steps];
        let velocities = vec![Vector3::zeros(); num_steps];
        if num_steps > 0 {
            positions[0] = entry.start_position();
        }

        traces.push(OrbitTrace {
            name: entry.name().to_string(),
            angular_velocity: 2.0 * std::f64::consts::PI / period,
            orbit_radius,
            positions,
            velocities,
        });
    }

    Ok(SimulationRun { time, traces })
}

/// Run the circular-motion simulation over `config.duration` years.
///
/// Builds the time vector, establishes per-entry storage, then fills every
/// step `i >= 1` with the planar circular position
/// `(r·cos(ωt), r·sin(ωt), z0)`. The z component stays at its initial
/// value. Does not mutate the system.
pub fn run_simulation(system: &OrbitalSystem, config: &SimConfig) -> Result<SimulationRun> {
    let num_steps = (config.duration / config.timestep).round() as usize;
    let time = linspace(0.0, config.duration, num_steps);
    let mut run = establish_simulation(system, time)?;

    for trace in &mut run.traces {
        let omega = trace.angular_velocity;
        let r = trace.orbit_radius;
        let z0 = trace.positions.first().map_or(0.0, |p| p.z);
        for (i, &t) in run.time.iter().enumerate().skip(1) {
            trace.positions[i] = Vector3::new(r * (omega * t).cos(), r * (omega * t).sin(), z0);
        }
    }

    Ok(run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
