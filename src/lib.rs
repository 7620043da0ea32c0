/*!
gjknd
========

**gjknd** is an n-dimensional intersection test between convex polytopes,
based on the Gilbert-Johnson-Keerthi algorithm, written with the rust
programming language.

The two polytopes are given as finite vertex sets sharing the same ambient
dimension. The query answers whether their convex hulls intersect (touching
counts as intersecting) without ever building their Minkowski difference.

```
use gjknd::shape::ConvexPolytope;

let a = ConvexPolytope::from_slices(&[[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]]).unwrap();
let b = ConvexPolytope::from_slices(&[[1.0, 1.0], [3.0, 1.0], [1.0, 3.0]]).unwrap();
assert!(gjknd::query::intersection_test(&a, &b).unwrap());
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used by this crate.
pub mod math {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// A point, or a vector, of runtime dimension.
    pub type Vector = na::DVector<Real>;

    /// A matrix of runtime dimensions.
    pub type Matrix = na::DMatrix<Real>;

    /// The default tolerance used by every geometric decision.
    pub const DEFAULT_TOLERANCE: Real = 1.0e-6;

    /// The largest ambient dimension supported.
    ///
    /// Closest-point computations enumerate every subset of a simplex of at most `MAX_DIM + 1`
    /// points with a 64-bits mask.
    pub const MAX_DIM: usize = 62;
}
