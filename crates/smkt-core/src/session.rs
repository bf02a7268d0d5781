//! Client-side search context.
//!
//! Holds the state a front end keeps between requests: the geocoded location,
//! the chosen radius and the supermarkets last found in range. The server is
//! stateless and never stores one of these; each request carries its own
//! coordinates and radius, built from [`SearchSession::request_params`].

use crate::geo::Coordinates;
use crate::types::{Location, Supermarket};
use crate::validation::RadiusKm;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    location: Location,
    radius: RadiusKm,
    supermarkets: Vec<Supermarket>,
}

impl SearchSession {
    /// Starts a session after a successful geocode.
    #[must_use]
    pub fn start(location: Location, radius: RadiusKm) -> Self {
        Self {
            location,
            radius,
            supermarkets: Vec::new(),
        }
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn radius(&self) -> RadiusKm {
        self.radius
    }

    #[must_use]
    pub fn supermarkets(&self) -> &[Supermarket] {
        &self.supermarkets
    }

    pub fn set_supermarkets(&mut self, supermarkets: Vec<Supermarket>) {
        self.supermarkets = supermarkets;
    }

    /// Changes the radius. The in-range list belonged to the old radius and
    /// is dropped.
    pub fn set_radius(&mut self, radius: RadiusKm) {
        if radius != self.radius {
            self.radius = radius;
            self.supermarkets.clear();
        }
    }

    /// Center and radius to send with a proximity or search request.
    #[must_use]
    pub fn request_params(&self) -> (Coordinates, RadiusKm) {
        (self.location.coordinates(), self.radius)
    }

    /// Ends the session ("change location"), handing back the old location.
    #[must_use]
    pub fn into_location(self) -> Location {
        self.location
    }
}
