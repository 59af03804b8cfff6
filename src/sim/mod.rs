pub mod stepper;

pub use stepper::{
    establish_simulation, linspace, run_simulation, OrbitTrace, SimConfig, SimulationRun,
};
