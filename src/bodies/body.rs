use std::fmt;

use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Unit conversions
// ---------------------------------------------------------------------------

/// Kilometers per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.691;

// ---------------------------------------------------------------------------
// Body categories
// ---------------------------------------------------------------------------

/// Category of a celestial body, used by the containment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    Satellite,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Star => write!(f, "star"),
            BodyKind::Planet => write!(f, "planet"),
            BodyKind::Satellite => write!(f, "satellite"),
        }
    }
}

/// Broad compositional class of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetKind {
    Rocky,
    Gaseous,
}

// ---------------------------------------------------------------------------
// Star: central point of a stellar system
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: String,
    pub radius: f64,                     // km
    pub mass: f64,                       // kg
    pub start_position: Vector3<f64>,    // AU
    pub luminosity: f64,                 // W
    pub spectral_type: String,
    /// Orbit radius when this star itself orbits another star (AU).
    /// A star without one can never pass the clearance check, so it can
    /// only ever serve as a central body.
    pub distance_from_center: Option<f64>,
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        mass: f64,
        start_position: Vector3<f64>,
        luminosity: f64,
        spectral_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            mass,
            start_position,
            luminosity,
            spectral_type: spectral_type.into(),
            distance_from_center: None,
        }
    }

    /// Assign an orbit radius, making this star usable as an orbiter
    /// around another star.
    pub fn with_distance(mut self, distance_au: f64) -> Self {
        self.distance_from_center = Some(distance_au);
        self
    }
}

// ---------------------------------------------------------------------------
// Planet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    pub radius: f64,                     // km
    pub mass: f64,                       // kg
    pub start_position: Vector3<f64>,    // AU
    pub distance_from_center: f64,       // semi-major axis, AU
    pub kind: PlanetKind,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        mass: f64,
        start_position: Vector3<f64>,
        distance_from_center: f64,
        kind: PlanetKind,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            mass,
            start_position,
            distance_from_center,
            kind,
        }
    }
}

// ---------------------------------------------------------------------------
// Satellite
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub name: String,
    pub radius: f64,                     // km
    pub mass: f64,                       // kg
    pub start_position: Vector3<f64>,    // AU
    pub distance_from_center: f64,       // semi-major axis, AU
    pub lifetime: f64,                   // expected lifetime, years
    pub material: String,
}

impl Satellite {
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        mass: f64,
        start_position: Vector3<f64>,
        distance_from_center: f64,
        lifetime: f64,
        material: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            mass,
            start_position,
            distance_from_center,
            lifetime,
            material: material.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Body: closed sum over the three kinds
// ---------------------------------------------------------------------------

/// Any celestial body. Carries the shared physical attributes; the orbiter
/// capability (a distance from whatever it orbits) is total for planets and
/// satellites and conditional for stars.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Star(Star),
    Planet(Planet),
    Satellite(Satellite),
}

impl Body {
    pub fn name(&self) -> &str {
        match self {
            Body::Star(s) => &s.name,
            Body::Planet(p) => &p.name,
            Body::Satellite(s) => &s.name,
        }
    }

    /// Body radius in km.
    pub fn radius(&self) -> f64 {
        match self {
            Body::Star(s) => s.radius,
            Body::Planet(p) => p.radius,
            Body::Satellite(s) => s.radius,
        }
    }

    /// Body radius converted to AU, for comparison against orbit radii.
    pub fn radius_au(&self) -> f64 {
        self.radius() / KM_PER_AU
    }

    pub fn mass(&self) -> f64 {
        match self {
            Body::Star(s) => s.mass,
            Body::Planet(p) => p.mass,
            Body::Satellite(s) => s.mass,
        }
    }

    pub fn start_position(&self) -> Vector3<f64> {
        match self {
            Body::Star(s) => s.start_position,
            Body::Planet(p) => p.start_position,
            Body::Satellite(s) => s.start_position,
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Star(_) => BodyKind::Star,
            Body::Planet(_) => BodyKind::Planet,
            Body::Satellite(_) => BodyKind::Satellite,
        }
    }

    /// Semi-major axis in AU. `None` for a star with no assigned orbit.
    pub fn distance_from_center(&self) -> Option<f64> {
        match self {
            Body::Star(s) => s.distance_from_center,
            Body::Planet(p) => Some(p.distance_from_center),
            Body::Satellite(s) => Some(s.distance_from_center),
        }
    }
}

impl From<Star> for Body {
    fn from(s: Star) -> Self {
        Body::Star(s)
    }
}

impl From<Planet> for Body {
    fn from(p: Planet) -> Self {
        Body::Planet(p)
    }
}

impl From<Satellite> for Body {
    fn from(s: Satellite) -> Self {
        Body::Satellite(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
