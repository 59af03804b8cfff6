//! Preset system assemblies used by the demo binaries and tests.

use nalgebra::Vector3;

use crate::bodies::{Planet, PlanetKind, Satellite, Star};
use super::hierarchy::{OrbitEntry, OrbitalSystem};

/// Sun, Earth, Mars, and Mars's moons as a nested planetary system.
///
/// Bodies start on the +x axis at their orbit radius so trajectories begin
/// on the circle they trace.
pub fn inner_solar_system() -> OrbitalSystem {
    let sun = Star::new(
        "Sun",
        695_700.0,
        1.989e30,
        Vector3::zeros(),
        3.828e26,
        "G2V",
    );
    let earth = Planet::new(
        "Earth",
        6_371.0,
        5.972e24,
        Vector3::new(1.0, 0.0, 0.0),
        1.0,
        PlanetKind::Rocky,
    );
    let mars = Planet::new(
        "Mars",
        3_390.0,
        6.4191e23,
        Vector3::new(1.5, 0.0, 0.0),
        1.5,
        PlanetKind::Rocky,
    );
    let phobos = Satellite::new(
        "Phobos",
        11.0,
        1.0659e16,
        Vector3::new(4.011e-5, 0.0, 0.0),
        4.011e-5,
        100.0,
        "asteroid",
    );
    let deimos = Satellite::new(
        "Deimos",
        6.2,
        1.4762e15,
        Vector3::new(1.568e-4, 0.0, 0.0),
        1.568e-4,
        100.0,
        "asteroid",
    );

    let mut mars_system = OrbitalSystem::planetary("Mars system", mars);
    mars_system
        .add_orbiting_object(phobos)
        .expect("preset moons are valid");
    mars_system
        .add_orbiting_object(deimos)
        .expect("preset moons are valid");

    let mut system = OrbitalSystem::stellar("Inner solar system", sun);
    system
        .add_orbiting_object(earth)
        .expect("preset planets are valid");
    system
        .add_orbiting_object(OrbitEntry::System(mars_system))
        .expect("preset planets are valid");
    system
}
