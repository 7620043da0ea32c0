//! Shapes supported by gjknd.

pub use self::convex_polytope::{ConvexPolytope, PolytopeError};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod convex_polytope;
mod support_map;
