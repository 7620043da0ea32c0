use crate::math::{Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// Every point `p` is ranked by `p·dir - bias * |dir| * |p|`. With `bias = 0` this is the
/// exact support point. A positive `bias` favors points closer to the origin among points
/// with (nearly) tied projections, which keeps GJK from cycling between tied vertices.
///
/// Exact ties are resolved in favor of the smallest index.
///
/// # Panics
///
/// Panics if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector, points: &[Vector], bias: Real) -> usize {
    let weight = bias * dir.norm();
    let score = |p: &Vector| p.dot(dir) - weight * p.norm();

    let mut best_pt = 0;
    let mut best_score = score(&points[0]);

    for i in 1..points.len() {
        let s = score(&points[i]);

        if s > best_score {
            best_score = s;
            best_pt = i;
        }
    }

    best_pt
}

/// Computes the support point of a cloud of points.
#[inline]
pub fn point_cloud_support_point<'a>(dir: &Vector, points: &'a [Vector], bias: Real) -> &'a Vector {
    &points[point_cloud_support_point_id(dir, points, bias)]
}

#[cfg(test)]
mod test {
    use super::*;

    fn cloud(pts: &[[Real; 2]]) -> Vec<Vector> {
        pts.iter().map(|p| Vector::from_column_slice(p)).collect()
    }

    #[test]
    fn unbiased_support_is_the_max_dot_product() {
        let pts = cloud(&[[0.0, 0.0], [3.0, 1.0], [1.0, 2.0], [-4.0, 0.0]]);

        assert_eq!(
            point_cloud_support_point_id(&Vector::from_column_slice(&[1.0, 0.0]), &pts, 0.0),
            1
        );
        assert_eq!(
            point_cloud_support_point_id(&Vector::from_column_slice(&[-1.0, 0.0]), &pts, 0.0),
            3
        );
        assert_eq!(
            point_cloud_support_point(&Vector::from_column_slice(&[0.0, 1.0]), &pts, 0.0),
            &pts[2]
        );
    }

    #[test]
    fn bias_breaks_ties_toward_the_origin() {
        // Both points project to 5 along +x.
        let pts = cloud(&[[5.0, 4.0], [5.0, 0.0]]);
        let dir = Vector::from_column_slice(&[1.0, 0.0]);

        assert_eq!(point_cloud_support_point_id(&dir, &pts, 0.0), 0);
        assert_eq!(point_cloud_support_point_id(&dir, &pts, 1.0e-6), 1);
    }

    #[test]
    fn bias_does_not_override_a_clear_winner() {
        let pts = cloud(&[[0.1, 0.0], [10.0, 0.0]]);
        let dir = Vector::from_column_slice(&[1.0, 0.0]);

        assert_eq!(point_cloud_support_point_id(&dir, &pts, 1.0e-6), 1);
    }

    #[test]
    fn zero_direction_picks_the_first_point() {
        let pts = cloud(&[[1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(point_cloud_support_point_id(&Vector::zeros(2), &pts, 1.0e-6), 0);
    }
}
