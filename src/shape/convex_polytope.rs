use crate::math::{Real, Vector, MAX_DIM};
use crate::shape::SupportMap;
use crate::utils;

/// Errors raised while building a [`ConvexPolytope`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolytopeError {
    /// No vertex was given.
    #[error("a convex polytope must contain at least one vertex.")]
    Empty,
    /// The vertices have no component.
    #[error("the vertices of a convex polytope must have at least one component.")]
    ZeroDimension,
    /// The vertices live in a space with too many dimensions.
    #[error("the dimension {dim} exceeds the maximum supported dimension {max}.")]
    DimensionTooLarge {
        /// The dimension of the vertices.
        dim: usize,
        /// The maximum supported dimension.
        max: usize,
    },
    /// A vertex does not have the same dimension as the first one.
    #[error("the vertex {index} has dimension {found} instead of {expected}.")]
    DimensionMismatch {
        /// Index of the offending vertex.
        index: usize,
        /// Dimension of the first vertex.
        expected: usize,
        /// Dimension of the offending vertex.
        found: usize,
    },
    /// A vertex has a NaN or infinite component.
    #[error("the vertex {index} has a non-finite component.")]
    NonFinite {
        /// Index of the offending vertex.
        index: usize,
    },
}

/// A convex polytope of any dimension, described by a set of vertices.
///
/// The polytope is the convex hull of its vertices. The vertices do not have to be
/// extremal: interior points are allowed and simply never returned by the support function.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "RawConvexPolytope")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolytope {
    points: Vec<Vector>,
}

/// The serialized form of a [`ConvexPolytope`], validated by [`ConvexPolytope::try_new`].
#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct RawConvexPolytope {
    points: Vec<Vector>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<RawConvexPolytope> for ConvexPolytope {
    type Error = PolytopeError;

    fn try_from(raw: RawConvexPolytope) -> Result<Self, PolytopeError> {
        Self::try_new(raw.points)
    }
}

impl ConvexPolytope {
    /// Creates a polytope from its vertices.
    ///
    /// Fails if `points` is empty, if the points do not all share the same dimension,
    /// if that dimension is zero or larger than [`MAX_DIM`], or if a component is not finite.
    pub fn try_new(points: Vec<Vector>) -> Result<Self, PolytopeError> {
        let dim = points.first().ok_or(PolytopeError::Empty)?.len();

        if dim == 0 {
            return Err(PolytopeError::ZeroDimension);
        }

        if dim > MAX_DIM {
            return Err(PolytopeError::DimensionTooLarge { dim, max: MAX_DIM });
        }

        for (index, pt) in points.iter().enumerate() {
            if pt.len() != dim {
                return Err(PolytopeError::DimensionMismatch {
                    index,
                    expected: dim,
                    found: pt.len(),
                });
            }

            if pt.iter().any(|x| !x.is_finite()) {
                return Err(PolytopeError::NonFinite { index });
            }
        }

        Ok(Self { points })
    }

    /// Creates a polytope from vertices given as slices of coordinates.
    pub fn from_slices<P: AsRef<[Real]>>(points: &[P]) -> Result<Self, PolytopeError> {
        Self::try_new(
            points
                .iter()
                .map(|pt| Vector::from_column_slice(pt.as_ref()))
                .collect(),
        )
    }

    /// Creates a polytope from statically-sized points, e.g., `Point2` or `Point3`.
    pub fn from_points<const D: usize>(
        points: &[na::Point<Real, D>],
    ) -> Result<Self, PolytopeError> {
        Self::try_new(
            points
                .iter()
                .map(|pt| Vector::from_column_slice(pt.coords.as_slice()))
                .collect(),
        )
    }

    /// The vertices of this polytope.
    #[inline]
    pub fn points(&self) -> &[Vector] {
        &self.points[..]
    }

    /// The number of vertices of this polytope.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: every constructor, deserialization included, rejects empty vertex sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The dimension of the space this polytope lives in.
    #[inline]
    pub fn dim(&self) -> usize {
        self.points[0].len()
    }

    /// The same polytope with every vertex shifted by `shift`.
    ///
    /// # Panics
    ///
    /// Panics if `shift` does not have the dimension of this polytope.
    pub fn translated(&self, shift: &Vector) -> Self {
        assert_eq!(shift.len(), self.dim(), "Translation dimension mismatch.");
        Self {
            points: self.points.iter().map(|pt| pt + shift).collect(),
        }
    }
}

impl SupportMap for ConvexPolytope {
    #[inline]
    fn ambient_dim(&self) -> usize {
        self.dim()
    }

    #[inline]
    fn vertex(&self, id: usize) -> &Vector {
        &self.points[id]
    }

    /// # Panics
    ///
    /// Panics if `dir` does not have the dimension of this polytope.
    #[inline]
    fn support_point_id(&self, dir: &Vector, bias: Real) -> usize {
        assert_eq!(dir.len(), self.dim(), "Direction dimension mismatch.");
        utils::point_cloud_support_point_id(dir, &self.points, bias)
    }
}
