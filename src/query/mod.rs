//! Non-persistent geometric queries.
//!
//! * [`query::intersection_test()`](intersection_test) determines if two convex polytopes are
//!   intersecting or not.
//!
//! The building blocks of the test (Minkowski difference support points, simplex projections)
//! are exposed by the [`gjk`] submodule.

pub use self::error::{GjkError, InternalError};
pub use self::gjk::{intersection_test, intersection_test_with_options, GjkOptions};

mod error;
pub mod gjk;
