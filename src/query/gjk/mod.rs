//! The GJK algorithm for intersection tests.

pub use self::cso_point::CSOPoint;
pub use self::simplex::{FaceProjection, Simplex};
pub use gjk::*;

mod cso_point;
mod gjk;
mod simplex;
