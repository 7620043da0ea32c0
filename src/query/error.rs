use crate::math::Real;

/// Error indicating that an intersection query could not produce a verdict.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GjkError {
    /// The two shapes do not live in the same space.
    #[error("cannot test shapes of dimensions {dim1} and {dim2} for intersection.")]
    DimensionMismatch {
        /// Ambient dimension of the first shape.
        dim1: usize,
        /// Ambient dimension of the second shape.
        dim2: usize,
    },
    /// The tolerance is not a strictly positive finite number.
    #[error("the tolerance must be strictly positive and finite, got {0}.")]
    InvalidTolerance(Real),
    /// The iteration limit is zero.
    #[error("the iteration limit must be at least 1.")]
    InvalidIterationLimit,
    /// The algorithm did not reach a verdict within the allowed number of iterations.
    #[error("no verdict reached after {0} iterations.")]
    MaxIterationsReached(usize),
    /// The geometric solver reached an inconsistent state.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// A numerical identity the simplex solver relies on did not hold.
///
/// This indicates a bug in the solver rather than invalid input, and aborts the query
/// instead of returning a possibly wrong verdict.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum InternalError {
    /// The squared norm of a projection differs from the one implied by its coefficients.
    #[error("Internal error: the projection has a squared norm of {computed} but its coefficients imply {implied}.")]
    InconsistentProjection {
        /// Squared norm of the computed point.
        computed: Real,
        /// Squared norm implied by the solved coefficients.
        implied: Real,
    },
    /// Solving for the origin inside a full simplex produced a point away from the origin.
    #[error("Internal error: the solved point is at squared distance {sqdist} from the origin.")]
    OriginNotReached {
        /// Squared norm of the solved point.
        sqdist: Real,
    },
    /// A full simplex classified as degenerate actually touches the origin.
    #[error("Internal error: a degenerate simplex lies at squared distance {sqdist} from the origin.")]
    WrongSingularClassification {
        /// Squared distance between the simplex and the origin.
        sqdist: Real,
    },
    /// No face of a simplex contains the projection of the origin.
    #[error("Internal error: no face of the simplex contains the projection of the origin.")]
    NoFaceContainsProjection,
    /// A point was added to a simplex that already has `dim + 1` vertices.
    #[error("Internal error: a simplex of dimension {dim} cannot have more than {} vertices.", .dim + 1)]
    SimplexOverflow {
        /// Ambient dimension of the simplex.
        dim: usize,
    },
}
