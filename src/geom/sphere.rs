use serde::{Deserialize, Serialize};

use super::core::{Point3, Tolerance};

/// Solid ball. A radius of zero is a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    #[must_use]
    pub const fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Negative or non-finite radius.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.radius.is_finite() && self.radius >= 0.0)
    }

    /// Radius with a degenerate value replaced by zero.
    #[must_use]
    pub fn effective_radius(self) -> f64 {
        if self.is_degenerate() { 0.0 } else { self.radius }
    }

    #[must_use]
    pub fn contains_point(self, p: Point3, tol: Tolerance) -> bool {
        !tol.is_greater_than(p.distance_to(self.center), self.effective_radius())
    }

    /// Strictly inside, farther than the tolerance from the surface.
    #[must_use]
    pub fn is_interior_point(self, p: Point3, tol: Tolerance) -> bool {
        tol.is_less_than(p.distance_to(self.center), self.effective_radius())
    }
}
