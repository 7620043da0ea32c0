//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK works on the **Minkowski difference** (also called Configuration Space Obstacle or CSO)
//! of two convex shapes: the shapes intersect if and only if their CSO contains the origin.
//! Instead of building the CSO, the algorithm grows a simplex of CSO support points toward the
//! origin, one point per iteration:
//!
//! 1. A support point of the CSO is queried in the direction opposite to the current closest
//!    point. If it does not reach past the origin, a separating hyperplane has been found.
//! 2. Otherwise it is appended to the simplex. If the simplex now contains the origin, the
//!    shapes intersect.
//! 3. Otherwise the simplex is reduced to its face closest to the origin, and we loop.

use crate::math::{Real, Vector, DEFAULT_TOLERANCE};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::query::GjkError;
use crate::shape::SupportMap;

/// Parameters of the GJK intersection test.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// The tolerance used by every geometric decision.
    ///
    /// It biases the support point selection, bounds the distance under which the origin is
    /// considered reached, and widens the barycentric coordinates accepted inside a simplex to
    /// `[-tolerance, 1 + tolerance]`. Scale it with the magnitude of the coordinates.
    pub tolerance: Real,
    /// If the algorithm has not terminated after this number of iterations, the query fails
    /// with [`GjkError::MaxIterationsReached`].
    pub max_iterations: usize,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: 128,
        }
    }
}

impl GjkOptions {
    /// Options with the given tolerance and the default iteration limit.
    pub fn with_tolerance(tolerance: Real) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Checks that these options can be used for a query.
    pub fn validate(&self) -> Result<(), GjkError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(GjkError::InvalidTolerance(self.tolerance));
        }

        if self.max_iterations == 0 {
            return Err(GjkError::InvalidIterationLimit);
        }

        Ok(())
    }
}

/// Tests whether the convex hulls of `g1` and `g2` intersect, using the default options.
///
/// Touching shapes are considered intersecting.
pub fn intersection_test<G1, G2>(g1: &G1, g2: &G2) -> Result<bool, GjkError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersection_test_with_options(g1, g2, &GjkOptions::default())
}

/// Tests whether the convex hulls of `g1` and `g2` intersect.
///
/// Touching shapes, i.e., shapes closer than `options.tolerance`, are considered intersecting.
///
/// Fails if the options are invalid, if both shapes do not have the same ambient dimension, if
/// no verdict is reached within `options.max_iterations`, or if the simplex solver reaches an
/// inconsistent state.
pub fn intersection_test_with_options<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &GjkOptions,
) -> Result<bool, GjkError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    options.validate()?;

    let dim = g1.ambient_dim();
    if g2.ambient_dim() != dim {
        return Err(GjkError::DimensionMismatch {
            dim1: dim,
            dim2: g2.ambient_dim(),
        });
    }

    let tol = options.tolerance;
    let sqtol = tol * tol;

    let initial = CSOPoint::from_shapes(g1, g2, &Vector::from_element(dim, 1.0), tol);
    let mut proj = initial.point.clone();
    let mut simplex = Simplex::point(initial);

    if proj.norm_squared() < sqtol {
        return Ok(true);
    }

    for _ in 0..options.max_iterations {
        let support = CSOPoint::from_shapes(g1, g2, &-&proj, tol);
        let proj_norm = proj.norm();
        let support_dot = support.point.dot(&proj);

        if support_dot > tol * proj_norm {
            // The hyperplane orthogonal to `proj` passing through `support` separates the
            // CSO from the origin.
            return Ok(false);
        }

        let dp = proj.norm_squared() - support_dot;

        if dp <= tol * proj_norm {
            // No progress: the CSO is within tolerance of the origin.
            return Ok(true);
        }

        simplex.try_push(support)?;

        if simplex.contains_origin(tol)? {
            return Ok(true);
        }

        let (closest, face) = simplex.closest_point(tol)?;
        proj = closest;
        simplex = face;

        if proj.norm_squared() < sqtol {
            return Ok(true);
        }
    }

    log::debug!(
        "GJK did not converge after {} iterations.",
        options.max_iterations
    );
    Err(GjkError::MaxIterationsReached(options.max_iterations))
}
