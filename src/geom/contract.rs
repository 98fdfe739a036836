//! Contract policy for degenerate inputs.
//!
//! Every operation with a precondition takes a [`GeomContext`]. Under
//! [`ContractMode::Strict`] a violated precondition is returned as a [`GeometryError`] before any
//! computation happens. Under [`ContractMode::Permissive`] the operation never fails: it logs a
//! warning and produces the documented fallback result for that operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::core::Tolerance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContractMode {
    /// Contract violations are reported as errors.
    #[default]
    Strict,
    /// Contract violations degrade to a deterministic fallback result.
    Permissive,
}

/// Which primitive failed its non-degeneracy precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Plane,
    Triangle,
    Hexahedron,
    Sphere,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plane => "plane",
            Self::Triangle => "triangle",
            Self::Hexahedron => "hexahedron",
            Self::Sphere => "sphere",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("degenerate segment: endpoints coincide")]
    DegenerateSegment,
    #[error("degenerate {0}")]
    DegenerateShape(ShapeKind),
}

/// Tolerance and contract policy shared by every query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeomContext {
    pub tolerance: Tolerance,
    pub mode: ContractMode,
}

impl GeomContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerance: Tolerance::default_geom(),
            mode: ContractMode::Strict,
        }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new()
    }

    #[must_use]
    pub const fn permissive() -> Self {
        Self::new().with_mode(ContractMode::Permissive)
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ContractMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self.mode, ContractMode::Strict)
    }

    /// Resolve a detected violation: `Err` in strict mode, `Ok(())` after a warning otherwise.
    ///
    /// Callers return the error with `?` and continue into their fallback on `Ok`.
    pub(crate) fn violation(self, op: &str, error: GeometryError) -> Result<(), GeometryError> {
        if self.is_strict() {
            log::debug!("{op}: {error}");
            Err(error)
        } else {
            log::warn!("{op}: {error}; using permissive fallback");
            Ok(())
        }
    }
}

impl Default for GeomContext {
    fn default() -> Self {
        Self::new()
    }
}
