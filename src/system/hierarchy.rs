use nalgebra::Vector3;

use crate::bodies::{Body, BodyKind, Planet, Satellite, Star};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Gravitational constant in AU^3/(kg s^2).
/// 6.67408e-11 m^3/(kg s^2) divided by (149_597_870_691 m/AU)^3.
pub const GRAVITATIONAL_CONSTANT: f64 = 1.993_495_097_842_790_9e-44;

/// Seconds per Julian year.
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

// ---------------------------------------------------------------------------
// Orbit entries: a body, or a whole nested system
// ---------------------------------------------------------------------------

/// One orbiting entry of a system. A nested system is treated as a point
/// mass located at its own central body's orbit for period and distance
/// queries at the outer level.
#[derive(Debug, Clone, PartialEq)]
pub enum OrbitEntry {
    Object(Body),
    System(OrbitalSystem),
}

impl OrbitEntry {
    pub fn name(&self) -> &str {
        match self {
            OrbitEntry::Object(body) => body.name(),
            OrbitEntry::System(sys) => &sys.name,
        }
    }

    /// Category used by the containment rules: a nested system counts as
    /// its own central body's kind.
    pub fn kind(&self) -> BodyKind {
        match self {
            OrbitEntry::Object(body) => body.kind(),
            OrbitEntry::System(sys) => sys.central.kind(),
        }
    }

    /// Mass of the entry for orbital mechanics (kg). Point-mass rule for
    /// nested systems.
    pub fn mass(&self) -> f64 {
        match self {
            OrbitEntry::Object(body) => body.mass(),
            OrbitEntry::System(sys) => sys.central.mass(),
        }
    }

    /// Semi-major axis relative to the enclosing system's center (AU).
    /// A star with no assigned orbit resolves to 0.0 and is then rejected
    /// by the clearance check on insertion.
    pub fn distance_from_center(&self) -> f64 {
        match self {
            OrbitEntry::Object(body) => body.distance_from_center().unwrap_or(0.0),
            OrbitEntry::System(sys) => sys.central.distance_from_center().unwrap_or(0.0),
        }
    }

    /// Starting position sample for the simulation stepper (AU).
    pub fn start_position(&self) -> Vector3<f64> {
        match self {
            OrbitEntry::Object(body) => body.start_position(),
            OrbitEntry::System(sys) => sys.central.start_position(),
        }
    }
}

impl From<Body> for OrbitEntry {
    fn from(body: Body) -> Self {
        OrbitEntry::Object(body)
    }
}

impl From<Star> for OrbitEntry {
    fn from(star: Star) -> Self {
        OrbitEntry::Object(Body::Star(star))
    }
}

impl From<Planet> for OrbitEntry {
    fn from(planet: Planet) -> Self {
        OrbitEntry::Object(Body::Planet(planet))
    }
}

impl From<Satellite> for OrbitEntry {
    fn from(satellite: Satellite) -> Self {
        OrbitEntry::Object(Body::Satellite(satellite))
    }
}

impl From<OrbitalSystem> for OrbitEntry {
    fn from(system: OrbitalSystem) -> Self {
        OrbitEntry::System(system)
    }
}

// ---------------------------------------------------------------------------
// Name-conflict policy
// ---------------------------------------------------------------------------

/// What to do when an inserted entry's name already exists in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Overwrite the existing entry in place.
    Replace,
    /// Keep the existing entry, drop the incoming one.
    Cancel,
    /// Hand both entries back to the caller; the system is not mutated
    /// until the caller re-inserts with an explicit `Replace`.
    #[default]
    CallerDecides,
}

/// Both sides of a name collision, handed back under
/// [`ConflictPolicy::CallerDecides`].
#[derive(Debug, Clone, PartialEq)]
pub struct NameConflict {
    pub existing: OrbitEntry,
    pub incoming: OrbitEntry,
}

/// Result of a successful `add_orbiting_object` call.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Appended as a new entry.
    Added,
    /// An existing entry with the same name was overwritten in place.
    Replaced,
    /// Duplicate name; the existing entry was kept.
    Cancelled,
    /// Duplicate name; caller must decide. Nothing was mutated.
    Conflict(NameConflict),
}

// ---------------------------------------------------------------------------
// Orbital system
// ---------------------------------------------------------------------------

/// Specialization of a system, constraining which entries it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemKind {
    /// Any central body; entries follow the general compatibility table.
    General,
    /// Central body is a planet; entries must be satellites.
    Planetary,
    /// Central body is a star; entries follow the general table.
    Stellar,
}

/// A named orbital system: one central body plus an ordered collection of
/// orbiting entries (bodies or nested systems), unique by name.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalSystem {
    pub name: String,
    central: Body,
    entries: Vec<OrbitEntry>,
    kind: SystemKind,
}

impl OrbitalSystem {
    /// General system around any central body.
    pub fn new(name: impl Into<String>, central: impl Into<Body>) -> Self {
        Self {
            name: name.into(),
            central: central.into(),
            entries: Vec::new(),
            kind: SystemKind::General,
        }
    }

    /// Planetary system: central body is a planet, entries must be
    /// satellites.
    pub fn planetary(name: impl Into<String>, central: Planet) -> Self {
        Self {
            name: name.into(),
            central: Body::Planet(central),
            entries: Vec::new(),
            kind: SystemKind::Planetary,
        }
    }

    /// Stellar system: central body is a star.
    pub fn stellar(name: impl Into<String>, central: Star) -> Self {
        Self {
            name: name.into(),
            central: Body::Star(central),
            entries: Vec::new(),
            kind: SystemKind::Stellar,
        }
    }

    pub fn kind(&self) -> SystemKind {
        self.kind
    }

    /// The body at the origin of this system's orbital reference frame.
    pub fn get_central_object(&self) -> &Body {
        &self.central
    }

    /// Immediate orbiting entries, in insertion order.
    pub fn entries(&self) -> &[OrbitEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Immediate-level lookup by name. Does not descend into nested
    /// systems.
    pub fn entry(&self, name: &str) -> Option<&OrbitEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Insert an orbiting entry with the default conflict policy
    /// ([`ConflictPolicy::CallerDecides`]): on a duplicate name nothing is
    /// mutated and both entries come back in [`AddOutcome::Conflict`].
    pub fn add_orbiting_object(&mut self, entry: impl Into<OrbitEntry>) -> Result<AddOutcome> {
        self.add_orbiting_object_with(entry, ConflictPolicy::default())
    }

    /// Insert an orbiting entry with an explicit conflict policy.
    ///
    /// Containment and clearance invariants are checked before any
    /// mutation; a failed call leaves the system untouched.
    pub fn add_orbiting_object_with(
        &mut self,
        entry: impl Into<OrbitEntry>,
        policy: ConflictPolicy,
    ) -> Result<AddOutcome> {
        let entry = entry.into();
        self.check_containment(&entry)?;
        self.check_clearance(&entry)?;

        let existing = self.entries.iter().position(|e| e.name() == entry.name());
        match (existing, policy) {
            (None, _) => {
                self.entries.push(entry);
                Ok(AddOutcome::Added)
            }
            (Some(idx), ConflictPolicy::Replace) => {
                self.entries[idx] = entry;
                Ok(AddOutcome::Replaced)
            }
            (Some(_), ConflictPolicy::Cancel) => Ok(AddOutcome::Cancelled),
            (Some(idx), ConflictPolicy::CallerDecides) => Ok(AddOutcome::Conflict(NameConflict {
                existing: self.entries[idx].clone(),
                incoming: entry,
            })),
        }
    }

    /// Type-compatibility table. Forbidden (central, orbiter) pairs:
    /// a star may not orbit a planet or a satellite, and a planet may not
    /// orbit a satellite. Planetary systems additionally accept satellites
    /// only.
    fn check_containment(&self, entry: &OrbitEntry) -> Result<()> {
        if self.kind == SystemKind::Planetary {
            match entry {
                OrbitEntry::Object(Body::Satellite(_)) => return Ok(()),
                _ => return Err(Error::PlanetaryContainment),
            }
        }

        let central = self.central.kind();
        let orbiter = entry.kind();
        let forbidden = matches!(
            (central, orbiter),
            (BodyKind::Planet, BodyKind::Star)
                | (BodyKind::Satellite, BodyKind::Star)
                | (BodyKind::Satellite, BodyKind::Planet)
        );
        if forbidden {
            Err(Error::Containment { orbiter, central })
        } else {
            Ok(())
        }
    }

    /// The orbit must clear the central body's surface: distance (AU) must
    /// strictly exceed the central radius after km -> AU normalization.
    fn check_clearance(&self, entry: &OrbitEntry) -> Result<()> {
        if entry.distance_from_center() > self.central.radius_au() {
            Ok(())
        } else {
            Err(Error::Clearance)
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Human-readable enumeration of orbiting entry names, in insertion
    /// order.
    pub fn orbiting_objects_list(&self) -> String {
        if self.entries.is_empty() {
            return "There are no orbiting objects in the system.".to_string();
        }
        let names: Vec<&str> = self.entries.iter().map(|e| e.name()).collect();
        format!("Orbiting objects in {}: {}", self.name, names.join(", "))
    }

    /// Orbital period of the named entry in years, by Kepler's third law.
    pub fn get_orbital_period(&self, name: &str) -> Result<f64> {
        self.get_orbital_period_with_g(name, GRAVITATIONAL_CONSTANT)
    }

    /// Orbital period with an explicit gravitational constant
    /// (AU^3/(kg s^2)), for alternate unit systems.
    pub fn get_orbital_period_with_g(&self, name: &str, g: f64) -> Result<f64> {
        let entry = self
            .entry(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        let d = entry.distance_from_center();
        let m = entry.mass();
        let period_s =
            (d.powi(3) * 4.0 * std::f64::consts::PI.powi(2) / (g * (m + self.central.mass())))
                .sqrt();
        Ok(period_s / SECONDS_PER_YEAR)
    }

    /// Resolved semi-major axis of the named entry in AU.
    ///
    /// Resolution is one level deep: a name that only exists inside a
    /// nested system is not found here.
    pub fn get_orbit_object_distance(&self, name: &str) -> Result<f64> {
        if self.entries.is_empty() {
            return Err(Error::Empty);
        }
        self.entry(name)
            .map(OrbitEntry::distance_from_center)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{PlanetKind, Satellite};

    fn sun() -> Star {
        Star::new("Sun", 695_700.0, 1.989e30, Vector3::zeros(), 3.828e26, "G2V")
    }

    fn earth() -> Planet {
        Planet::new("Earth", 6_371.0, 5.972e24, Vector3::zeros(), 1.0, PlanetKind::Rocky)
    }

    fn mars() -> Planet {
        Planet::new("Mars", 3_390.0, 6.4191e23, Vector3::zeros(), 1.5, PlanetKind::Rocky)
    }

    fn phobos() -> Satellite {
        Satellite::new("Phobos", 11.0, 1.0659e16, Vector3::zeros(), 4.011e-5, 100.0, "asteroid")
    }

    fn deimos() -> Satellite {
        Satellite::new("Deimos", 6.2, 1.4762e15, Vector3::zeros(), 1.568e-4, 100.0, "asteroid")
    }

    // --- compatibility table: permitted pairs --------------------------------

    #[test]
    fn planet_orbits_planet() {
        let mut system = OrbitalSystem::new("Test system", mars());
        system.add_orbiting_object(earth()).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Earth"
        );
    }

    #[test]
    fn satellite_orbits_planet() {
        let mut system = OrbitalSystem::new("Test system", mars());
        system.add_orbiting_object(deimos()).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Deimos"
        );
    }

    #[test]
    fn satellite_orbits_satellite() {
        let mut system = OrbitalSystem::new("Test system", phobos());
        system.add_orbiting_object(deimos()).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Deimos"
        );
    }

    #[test]
    fn star_orbits_star() {
        let proxima = Star::new(
            "Proxima Centauri",
            107_292.36,
            1.989e30 * 0.1221,
            Vector3::zeros(),
            3.828e26 * 0.0017,
            "M5.5Ve",
        )
        .with_distance(8700.0);
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(proxima).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Proxima Centauri"
        );
    }

    #[test]
    fn planet_orbits_star() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(mars()).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Mars"
        );
    }

    #[test]
    fn satellite_orbits_star() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(phobos()).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Phobos"
        );
    }

    // --- compatibility table: forbidden pairs --------------------------------

    #[test]
    fn star_cannot_orbit_planet() {
        let mut system = OrbitalSystem::new("Test system", mars());
        let err = system
            .add_orbiting_object(sun().with_distance(1.0))
            .unwrap_err();
        assert_eq!(err.to_string(), "A star cannot orbit a planet.");
        assert!(system.is_empty(), "failed insert must not mutate");
    }

    #[test]
    fn star_cannot_orbit_satellite() {
        let mut system = OrbitalSystem::new("Test system", phobos());
        let err = system
            .add_orbiting_object(sun().with_distance(1.0))
            .unwrap_err();
        assert_eq!(err.to_string(), "A star cannot orbit a satellite.");
        assert!(system.is_empty());
    }

    #[test]
    fn planet_cannot_orbit_satellite() {
        let mut system = OrbitalSystem::new("Test system", phobos());
        let err = system.add_orbiting_object(mars()).unwrap_err();
        assert_eq!(err.to_string(), "A planet cannot orbit a satellite.");
        assert!(system.is_empty());
    }

    #[test]
    fn star_without_assigned_orbit_is_rejected_by_clearance() {
        let mut system = OrbitalSystem::new("Test system", sun());
        let companion = Star::new("Companion", 100_000.0, 1e30, Vector3::zeros(), 1e26, "K1V");
        let err = system.add_orbiting_object(companion).unwrap_err();
        assert_eq!(err, Error::Clearance);
    }

    // --- clearance -----------------------------------------------------------

    #[test]
    fn orbit_inside_central_radius_is_rejected() {
        let mut system = OrbitalSystem::new("Test system", sun());
        // Sun radius is ~0.00465 AU; 0.0004 AU sits inside it.
        let close = Planet::new("Icarus", 6_371.0, 5.972e24, Vector3::zeros(), 0.0004, PlanetKind::Rocky);
        let err = system.add_orbiting_object(close).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The distance between the orbiting object and the central object must be greater than the radius of the central object."
        );
        assert!(system.is_empty());
    }

    #[test]
    fn orbit_clearing_central_radius_is_accepted() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Earth"
        );
    }

    // --- period and distance -------------------------------------------------

    #[test]
    fn earth_period_matches_kepler_reference() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();
        let period = system.get_orbital_period("Earth").unwrap();
        assert!(
            (period - 1.0005703560107866).abs() < 1e-12,
            "Earth period should be ~1.00057 yr, got {period}"
        );
    }

    #[test]
    fn period_scales_with_explicit_g() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();
        let half_g = system
            .get_orbital_period_with_g("Earth", GRAVITATIONAL_CONSTANT * 2.0)
            .unwrap();
        let reference = system.get_orbital_period("Earth").unwrap();
        assert!(
            (half_g * 2.0_f64.sqrt() - reference).abs() < 1e-12,
            "doubling G should shrink the period by sqrt(2)"
        );
    }

    #[test]
    fn period_of_missing_object_is_not_found() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();
        let err = system.get_orbital_period("Mars").unwrap_err();
        assert_eq!(err.to_string(), "Object Mars not found in system.");
    }

    #[test]
    fn period_on_empty_system_is_not_found() {
        let system = OrbitalSystem::new("Test system", sun());
        let err = system.get_orbital_period("Mars").unwrap_err();
        assert_eq!(err, Error::NotFound("Mars".into()));
    }

    #[test]
    fn distance_of_direct_entry() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(mars()).unwrap();
        assert_eq!(system.get_orbit_object_distance("Mars").unwrap(), 1.5);
    }

    #[test]
    fn distance_on_empty_system_reports_empty() {
        let system = OrbitalSystem::new("Test system", sun());
        let err = system.get_orbit_object_distance("Mars").unwrap_err();
        assert_eq!(err, Error::Empty);
        assert_eq!(
            err.to_string(),
            "There are no orbiting objects in the system."
        );
    }

    // --- nested systems ------------------------------------------------------

    fn mars_with_moons() -> OrbitalSystem {
        let mut mars_system = OrbitalSystem::planetary("Mars system", mars());
        mars_system.add_orbiting_object(phobos()).unwrap();
        mars_system.add_orbiting_object(deimos()).unwrap();
        mars_system
    }

    #[test]
    fn nested_system_lists_under_its_own_name() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();
        system
            .add_orbiting_object(OrbitEntry::System(mars_with_moons()))
            .unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Earth, Mars system"
        );
    }

    #[test]
    fn nested_system_resolves_as_point_mass_at_its_central_orbit() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system
            .add_orbiting_object(OrbitEntry::System(mars_with_moons()))
            .unwrap();
        // Distance and period come from Mars itself, not its moons.
        assert_eq!(system.get_orbit_object_distance("Mars system").unwrap(), 1.5);

        let direct = {
            let mut s = OrbitalSystem::new("Flat", sun());
            s.add_orbiting_object(mars()).unwrap();
            s.get_orbital_period("Mars").unwrap()
        };
        let nested = system.get_orbital_period("Mars system").unwrap();
        assert!(
            (nested - direct).abs() < 1e-15,
            "nested system period should equal its central planet's"
        );
    }

    #[test]
    fn queries_do_not_descend_into_nested_systems() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system
            .add_orbiting_object(OrbitEntry::System(mars_with_moons()))
            .unwrap();
        // Phobos is reachable by deeper traversal but lives one level down.
        assert_eq!(
            system.get_orbital_period("Phobos").unwrap_err(),
            Error::NotFound("Phobos".into())
        );
        assert_eq!(
            system.get_orbit_object_distance("Phobos").unwrap_err(),
            Error::NotFound("Phobos".into())
        );
    }

    #[test]
    fn nested_system_containment_uses_central_body_kind() {
        // A planetary system (central planet) cannot orbit a satellite.
        let mut system = OrbitalSystem::new("Test system", phobos());
        let err = system
            .add_orbiting_object(OrbitEntry::System(mars_with_moons()))
            .unwrap_err();
        assert_eq!(err.to_string(), "A planet cannot orbit a satellite.");
    }

    // --- specializations -----------------------------------------------------

    #[test]
    fn planetary_system_accepts_satellites_only() {
        let mut system = OrbitalSystem::planetary("Mars system", mars());
        system.add_orbiting_object(phobos()).unwrap();
        let err = system.add_orbiting_object(earth()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only a satellite may orbit in a planetary system."
        );
        assert_eq!(system.len(), 1);
    }

    #[test]
    fn planetary_system_rejects_nested_systems() {
        let mut outer = OrbitalSystem::planetary("Mars system", mars());
        let mut inner = OrbitalSystem::new("Moon pair", phobos());
        inner.add_orbiting_object(deimos()).unwrap();
        let err = outer
            .add_orbiting_object(OrbitEntry::System(inner))
            .unwrap_err();
        assert_eq!(err, Error::PlanetaryContainment);
    }

    #[test]
    fn stellar_system_follows_the_general_table() {
        let mut system = OrbitalSystem::stellar("Sol", sun());
        system.add_orbiting_object(earth()).unwrap();
        system.add_orbiting_object(phobos()).unwrap();
        assert_eq!(system.kind(), SystemKind::Stellar);
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Sol: Earth, Phobos"
        );
    }

    // --- listing -------------------------------------------------------------

    #[test]
    fn empty_system_reports_sentinel_message() {
        let system = OrbitalSystem::new("Test system", sun());
        assert_eq!(
            system.orbiting_objects_list(),
            "There are no orbiting objects in the system."
        );
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();
        system.add_orbiting_object(mars()).unwrap();
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Earth, Mars"
        );
    }

    #[test]
    fn central_object_is_always_available() {
        let system = OrbitalSystem::new("Test system", sun());
        assert_eq!(system.get_central_object().name(), "Sun");
    }

    // --- name conflicts ------------------------------------------------------

    #[test]
    fn duplicate_name_surfaces_both_entries_and_keeps_the_original() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();

        let twin = Planet::new("Earth", 3_390.0, 6.4191e23, Vector3::zeros(), 1.5, PlanetKind::Rocky);
        let outcome = system.add_orbiting_object(twin.clone()).unwrap();

        match outcome {
            AddOutcome::Conflict(conflict) => {
                assert_eq!(conflict.existing.name(), "Earth");
                assert_eq!(conflict.incoming, OrbitEntry::from(twin));
            }
            other => panic!("expected a conflict, got {other:?}"),
        }
        // Original survives untouched.
        assert_eq!(system.len(), 1);
        assert_eq!(system.get_orbit_object_distance("Earth").unwrap(), 1.0);
    }

    #[test]
    fn replace_policy_overwrites_in_place() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();
        system.add_orbiting_object(mars()).unwrap();

        let twin = Planet::new("Earth", 3_390.0, 6.4191e23, Vector3::zeros(), 1.2, PlanetKind::Rocky);
        let outcome = system
            .add_orbiting_object_with(twin, ConflictPolicy::Replace)
            .unwrap();
        assert_eq!(outcome, AddOutcome::Replaced);
        assert_eq!(system.get_orbit_object_distance("Earth").unwrap(), 1.2);
        // Slot position is preserved.
        assert_eq!(
            system.orbiting_objects_list(),
            "Orbiting objects in Test system: Earth, Mars"
        );
    }

    #[test]
    fn cancel_policy_is_a_no_op_on_duplicates() {
        let mut system = OrbitalSystem::new("Test system", sun());
        system.add_orbiting_object(earth()).unwrap();

        let twin = Planet::new("Earth", 3_390.0, 6.4191e23, Vector3::zeros(), 1.2, PlanetKind::Rocky);
        let outcome = system
            .add_orbiting_object_with(twin, ConflictPolicy::Cancel)
            .unwrap();
        assert_eq!(outcome, AddOutcome::Cancelled);
        assert_eq!(system.get_orbit_object_distance("Earth").unwrap(), 1.0);
    }

    #[test]
    fn invalid_entries_fail_before_conflict_handling() {
        let mut system = OrbitalSystem::new("Test system", mars());
        system.add_orbiting_object(earth()).unwrap();
        // Same name, but containment is violated first.
        let err = system
            .add_orbiting_object_with(
                Star::new("Earth", 695_700.0, 1.989e30, Vector3::zeros(), 3.828e26, "G2V")
                    .with_distance(1.0),
                ConflictPolicy::Replace,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "A star cannot orbit a planet.");
        assert_eq!(system.get_orbit_object_distance("Earth").unwrap(), 1.0);
    }
}
