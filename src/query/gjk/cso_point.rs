use crate::math::{Real, Vector};
use crate::shape::SupportMap;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[derive(Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Vector,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Vector,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Vector,
}

impl CSOPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Vector, orig2: Vector) -> Self {
        let point = &orig1 - &orig2;
        Self::new_with_point(point, orig1, orig2)
    }

    /// Initializes a CSO point with all information provided.
    ///
    /// It is assumed, but not checked, that `point == orig1 - orig2`.
    pub fn new_with_point(point: Vector, orig1: Vector, orig2: Vector) -> Self {
        CSOPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// Initializes a CSO point where the first original point is `point` and the second
    /// is the origin.
    pub fn single_point(point: Vector) -> Self {
        let origin = Vector::zeros(point.len());
        Self::new_with_point(point.clone(), point, origin)
    }

    /// The dimension of the space this point lives in.
    #[inline]
    pub fn dim(&self) -> usize {
        self.point.len()
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the direction `dir`.
    ///
    /// This is the support point of `g1` along `dir` minus the support point of `g2`
    /// along `-dir`. Both support queries use the same `bias`.
    pub fn from_shapes<G1, G2>(g1: &G1, g2: &G2, dir: &Vector, bias: Real) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let sp1 = g1.support_point(dir, bias).clone();
        let sp2 = g2.support_point(&-dir, bias).clone();

        CSOPoint::new(sp1, sp2)
    }
}
