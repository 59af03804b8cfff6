pub mod body;

pub use body::{Body, BodyKind, Planet, PlanetKind, Satellite, Star, KM_PER_AU};
