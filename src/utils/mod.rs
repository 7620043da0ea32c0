//! Various unsorted geometrical and numerical operators.

pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::solve::try_solve;

mod point_cloud_support_point;
mod solve;
