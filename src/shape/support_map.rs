//! Traits for support mapping based shapes.

use crate::math::{Real, Vector};

/// Trait implemented by convex vertex sets that can be queried with a support function.
///
/// A support function associates a direction to the vertex of the shape which maximizes
/// their dot product. The vertex is identified by its index so callers can tell which
/// original vertex produced a point of a Minkowski difference.
pub trait SupportMap {
    /// The dimension of the space this shape lives in.
    fn ambient_dim(&self) -> usize;

    /// The `id`-th vertex of this shape.
    fn vertex(&self, id: usize) -> &Vector;

    /// Index of the vertex farthest along `dir`.
    ///
    /// `bias` is the relative weight given to the vertex norms so that, among vertices
    /// with (nearly) tied projections, the one closest to the origin wins.
    fn support_point_id(&self, dir: &Vector, bias: Real) -> usize;

    /// The vertex farthest along `dir`.
    fn support_point(&self, dir: &Vector, bias: Real) -> &Vector {
        self.vertex(self.support_point_id(dir, bias))
    }
}

impl<S: SupportMap + ?Sized> SupportMap for &S {
    fn ambient_dim(&self) -> usize {
        (**self).ambient_dim()
    }

    fn vertex(&self, id: usize) -> &Vector {
        (**self).vertex(id)
    }

    fn support_point_id(&self, dir: &Vector, bias: Real) -> usize {
        (**self).support_point_id(dir, bias)
    }
}
