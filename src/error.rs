//! Error types for orbital system construction and queries

use thiserror::Error;

use crate::bodies::BodyKind;

/// Result type for orbital system operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the orbital system API.
///
/// Every variant propagates to the immediate caller; nothing is retried
/// internally. A failed mutating call leaves the system unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The type-compatibility table forbids this (central, orbiter) pair.
    #[error("A {orbiter} cannot orbit a {central}.")]
    Containment { orbiter: BodyKind, central: BodyKind },

    /// Planetary systems accept satellite entries only.
    #[error("Only a satellite may orbit in a planetary system.")]
    PlanetaryContainment,

    /// The entry's orbit would sit inside the central body.
    #[error("The distance between the orbiting object and the central object must be greater than the radius of the central object.")]
    Clearance,

    /// Named object is not among this system's immediate orbiting entries.
    #[error("Object {0} not found in system.")]
    NotFound(String),

    /// Distance query against a system with no orbiting entries.
    #[error("There are no orbiting objects in the system.")]
    Empty,
}
