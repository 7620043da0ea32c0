use crate::math::{Matrix, Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::query::InternalError;
use crate::utils;
use smallvec::SmallVec;

type FaceIds = SmallVec<[usize; 4]>;

/// The projection of the origin on the affine hull of a simplex.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceProjection {
    /// Whether the projection lies inside the simplex, up to the tolerance.
    ///
    /// This is `false` when the simplex is degenerate, in which case `point` is just its
    /// first vertex.
    pub in_face: bool,
    /// The projected point.
    pub point: Vector,
}

/// A simplex of up to `dim + 1` points of a Minkowski difference, in a space of dimension `dim`.
///
/// The points are not required to be affinely independent: every geometric query handles
/// degenerate simplices by falling back to the enumeration of their faces.
#[derive(Clone, Debug, PartialEq)]
pub struct Simplex {
    dim: usize,
    vertices: Vec<CSOPoint>,
}

impl Simplex {
    /// Creates an empty simplex living in a space of dimension `dim`.
    pub fn new(dim: usize) -> Self {
        Simplex {
            dim,
            vertices: Vec::with_capacity(dim + 1),
        }
    }

    /// Creates a simplex with a single vertex.
    pub fn point(pt: CSOPoint) -> Self {
        let mut result = Self::new(pt.dim());
        result.push(pt);
        result
    }

    /// Creates a simplex from plain points, each considered as a CSO point of its own.
    ///
    /// # Panics
    ///
    /// Panics if the points do not all have the dimension `dim` or if there are more than
    /// `dim + 1` of them.
    pub fn from_points(dim: usize, points: impl IntoIterator<Item = Vector>) -> Self {
        let mut result = Self::new(dim);
        for pt in points {
            result.push(CSOPoint::single_point(pt));
        }
        result
    }

    /// The dimension of the space this simplex lives in.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Does this simplex have the maximum number of vertices, `dim + 1`?
    #[inline]
    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.dim + 1
    }

    /// The vertices of this simplex.
    #[inline]
    pub fn vertices(&self) -> &[CSOPoint] {
        &self.vertices[..]
    }

    /// The i-th point of this simplex.
    #[inline]
    pub fn point_at(&self, i: usize) -> &Vector {
        &self.vertices[i].point
    }

    /// Adds a vertex to this simplex.
    ///
    /// Returns an error, and leaves the simplex unchanged, if it already has `dim + 1` vertices.
    ///
    /// # Panics
    ///
    /// Panics if the point does not have the dimension of this simplex.
    pub fn try_push(&mut self, pt: CSOPoint) -> Result<(), InternalError> {
        if self.is_full() {
            return Err(InternalError::SimplexOverflow { dim: self.dim });
        }

        self.push(pt);
        Ok(())
    }

    fn push(&mut self, pt: CSOPoint) {
        assert_eq!(pt.dim(), self.dim, "Simplex vertex dimension mismatch.");
        assert!(!self.is_full(), "Simplex overflow.");
        self.vertices.push(pt);
    }

    /// The sub-simplex made of the vertices with the given indices.
    fn face(&self, ids: &[usize]) -> Simplex {
        Simplex {
            dim: self.dim,
            vertices: ids.iter().map(|&i| self.vertices[i].clone()).collect(),
        }
    }

    /// Projects the origin on the affine hull of this simplex and checks whether the projection
    /// lies inside the simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is empty.
    pub fn face_closest_point(&self, tol: Real) -> Result<FaceProjection, InternalError> {
        let ids: FaceIds = (0..self.len()).collect();
        self.project_origin_on_face(&ids, tol)
    }

    /// Computes the point of this simplex closest to the origin, along with the smallest face
    /// of this simplex containing it.
    ///
    /// Every face is tested, from single vertices to the whole simplex, so the result is
    /// well-defined even for degenerate simplices (collinear or coplanar points).
    pub fn closest_point(&self, tol: Real) -> Result<(Vector, Simplex), InternalError> {
        let nverts = self.len();
        let mut best: Option<(Real, Vector, FaceIds)> = None;

        for mask in face_masks(nverts) {
            let ids: FaceIds = (0..nverts).filter(|&i| mask & (1u64 << i) != 0).collect();
            let proj = self.project_origin_on_face(&ids, tol)?;

            if proj.in_face {
                let sqdist = proj.point.norm_squared();

                if best.as_ref().map_or(true, |(best_sqdist, ..)| sqdist < *best_sqdist) {
                    best = Some((sqdist, proj.point, ids));
                }
            }
        }

        let (_, point, ids) = best.ok_or(InternalError::NoFaceContainsProjection)?;
        Ok((point, self.face(&ids)))
    }

    /// Tests whether the origin lies inside this simplex, up to the tolerance `tol`.
    ///
    /// A simplex with less than `dim + 1` vertices contains the origin only if the origin
    /// lies on it.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is empty.
    pub fn contains_origin(&self, tol: Real) -> Result<bool, InternalError> {
        if !self.is_full() {
            let proj = self.face_closest_point(tol)?;
            return Ok(proj.in_face && proj.point.norm_squared() < tol * tol);
        }

        let x0 = self.point_at(0);
        let edges = Matrix::from_fn(self.dim, self.dim, |r, c| self.point_at(c + 1)[r] - x0[r]);

        let Some(coords) = utils::try_solve(edges.clone(), &-x0, tol) else {
            log::debug!("Degenerate full simplex, falling back to the face enumeration.");
            let (point, _) = self.closest_point(tol)?;
            let sqdist = point.norm_squared();

            if sqdist > tol * tol {
                return Ok(false);
            } else {
                return Err(InternalError::WrongSingularClassification { sqdist });
            }
        };

        let point = x0 + &edges * &coords;
        let sqdist = point.norm_squared();

        if sqdist >= tol * tol {
            return Err(InternalError::OriginNotReached { sqdist });
        }

        Ok(coords.min() > -tol && coords.sum() < 1.0 + tol)
    }

    /// Projects the origin on the affine hull of the vertices `ids` of this simplex.
    fn project_origin_on_face(
        &self,
        ids: &[usize],
        tol: Real,
    ) -> Result<FaceProjection, InternalError> {
        let x0 = self.point_at(ids[0]);

        if ids.len() == 1 {
            return Ok(FaceProjection {
                in_face: true,
                point: x0.clone(),
            });
        }

        // One edge per row.
        let nedges = ids.len() - 1;
        let edges = Matrix::from_fn(nedges, self.dim, |r, c| {
            self.point_at(ids[r + 1])[c] - x0[c]
        });
        let gram = &edges * edges.transpose();
        let rhs = -(&edges * x0);

        // The Gram matrix squares the condition number of the edges.
        let Some(coords) = utils::try_solve(gram, &rhs, tol * tol) else {
            return Ok(FaceProjection {
                in_face: false,
                point: x0.clone(),
            });
        };

        let in_face = coords.min() > -tol && coords.sum() < 1.0 + tol;
        let point = x0 + edges.tr_mul(&coords);

        // |x0 + edges^t a|² = |x0|² - a·rhs whenever gram * a = rhs.
        let x0_sqnorm = x0.norm_squared();
        let computed = point.norm_squared();
        let implied = x0_sqnorm - coords.dot(&rhs);

        if !abs_diff_eq!(computed, implied, epsilon = tol * (1.0 + x0_sqnorm)) {
            return Err(InternalError::InconsistentProjection { computed, implied });
        }

        Ok(FaceProjection { in_face, point })
    }
}

/// The non-empty subsets of `nverts` vertices as bit masks, sorted by increasing size, then by
/// increasing mask.
fn face_masks(nverts: usize) -> impl Iterator<Item = u64> {
    let end = 1u64 << nverts;

    (1..=nverts as u32).flat_map(move |face_len| {
        core::iter::successors(Some((1u64 << face_len) - 1), |&mask| {
            // Next larger mask with the same number of set bits.
            let low = mask & mask.wrapping_neg();
            let ripple = mask + low;
            Some((((ripple ^ mask) >> 2) / low) | ripple)
        })
        .take_while(move |&mask| mask < end)
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn simplex(dim: usize, pts: &[&[Real]]) -> Simplex {
        Simplex::from_points(dim, pts.iter().map(|p| Vector::from_column_slice(p)))
    }

    fn vector(coords: &[Real]) -> Vector {
        Vector::from_column_slice(coords)
    }

    #[test]
    fn single_vertex_is_its_own_face() {
        let s = simplex(2, &[&[3.0, 4.0]]);
        let proj = s.face_closest_point(1.0e-6).unwrap();

        assert!(proj.in_face);
        assert_eq!(proj.point, vector(&[3.0, 4.0]));
    }

    #[test]
    fn segment_projection_inside_and_outside() {
        let s = simplex(2, &[&[-1.0, 1.0], &[1.0, 1.0]]);
        let proj = s.face_closest_point(1.0e-6).unwrap();
        assert!(proj.in_face);
        assert_relative_eq!(proj.point, vector(&[0.0, 1.0]), epsilon = 1.0e-12);

        let s = simplex(2, &[&[1.0, 1.0], &[3.0, 1.0]]);
        let proj = s.face_closest_point(1.0e-6).unwrap();
        assert!(!proj.in_face);
        assert_relative_eq!(proj.point, vector(&[0.0, 1.0]), epsilon = 1.0e-12);
    }

    #[test]
    fn degenerate_face_is_not_in_face() {
        let s = simplex(2, &[&[1.0, 1.0], &[1.0, 1.0]]);
        let proj = s.face_closest_point(1.0e-6).unwrap();

        assert!(!proj.in_face);
        assert_eq!(proj.point, vector(&[1.0, 1.0]));
    }

    #[test]
    fn closest_point_on_triangle_edge() {
        let s = simplex(2, &[&[-1.0, 1.0], &[1.0, 1.0], &[0.0, 3.0]]);
        let (pt, face) = s.closest_point(1.0e-6).unwrap();

        assert_relative_eq!(pt, vector(&[0.0, 1.0]), epsilon = 1.0e-12);
        assert_eq!(face.len(), 2);
        assert_eq!(face.point_at(0), &vector(&[-1.0, 1.0]));
        assert_eq!(face.point_at(1), &vector(&[1.0, 1.0]));
    }

    #[test]
    fn closest_point_on_vertex() {
        let s = simplex(3, &[&[1.0, 1.0, 1.0], &[2.0, 1.0, 1.0], &[1.0, 2.0, 1.0], &[1.0, 1.0, 2.0]]);
        let (pt, face) = s.closest_point(1.0e-6).unwrap();

        assert_eq!(pt, vector(&[1.0, 1.0, 1.0]));
        assert_eq!(face.len(), 1);
    }

    #[test]
    fn closest_point_on_collinear_points() {
        let s = simplex(2, &[&[-2.0, 1.0], &[1.0, 1.0], &[3.0, 1.0]]);
        let (pt, face) = s.closest_point(1.0e-6).unwrap();

        assert!(pt.iter().all(|x| x.is_finite()));
        assert_relative_eq!(pt, vector(&[0.0, 1.0]), epsilon = 1.0e-12);
        assert_eq!(face.len(), 2);
        assert!(!face.contains_origin(1.0e-6).unwrap());
    }

    #[test]
    fn closest_point_on_coplanar_points_in_3d() {
        let s = simplex(
            3,
            &[&[-1.0, -1.0, 2.0], &[1.0, -1.0, 2.0], &[0.0, 1.0, 2.0], &[0.0, 0.0, 2.0]],
        );
        let (pt, face) = s.closest_point(1.0e-6).unwrap();

        assert_relative_eq!(pt, vector(&[0.0, 0.0, 2.0]), epsilon = 1.0e-12);
        assert_eq!(face.len(), 1);
        assert!(!s.contains_origin(1.0e-6).unwrap());
    }

    #[test]
    fn full_simplex_containment() {
        let s = simplex(2, &[&[-1.0, -1.0], &[1.0, -1.0], &[0.0, 1.0]]);
        assert!(s.contains_origin(1.0e-6).unwrap());

        let s = simplex(2, &[&[1.0, 1.0], &[2.0, 1.0], &[1.0, 2.0]]);
        assert!(!s.contains_origin(1.0e-6).unwrap());

        // The origin lies on the edge between the first two vertices.
        let s = simplex(2, &[&[-1.0, 0.0], &[1.0, 0.0], &[0.0, 1.0]]);
        assert!(s.contains_origin(1.0e-6).unwrap());

        let s = simplex(
            3,
            &[&[-1.0, -1.0, -1.0], &[3.0, -1.0, -1.0], &[-1.0, 3.0, -1.0], &[-1.0, -1.0, 3.0]],
        );
        assert!(s.contains_origin(1.0e-6).unwrap());
    }

    #[test]
    fn partial_simplex_containment() {
        let s = simplex(3, &[&[-1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]]);
        assert!(s.contains_origin(1.0e-6).unwrap());

        let s = simplex(3, &[&[-1.0, 1.0, 0.0], &[1.0, 1.0, 0.0]]);
        assert!(!s.contains_origin(1.0e-6).unwrap());

        let s = simplex(3, &[&[0.0, 0.0, 0.0]]);
        assert!(s.contains_origin(1.0e-6).unwrap());
    }

    #[test]
    fn face_masks_are_sorted_by_size() {
        for nverts in 0..=6 {
            let mut expected: Vec<u64> = (1u64..(1u64 << nverts)).collect();
            expected.sort_by_key(|mask| mask.count_ones());

            assert_eq!(face_masks(nverts).collect::<Vec<_>>(), expected);
        }

        assert_eq!(face_masks(63).next(), Some(1));
    }

    #[test]
    fn empty_simplex_has_no_closest_point() {
        let s = Simplex::new(2);

        assert_eq!(
            s.closest_point(1.0e-6),
            Err(InternalError::NoFaceContainsProjection)
        );
    }

    #[test]
    fn singular_full_simplex_through_the_origin_is_an_error() {
        // Collinear points cannot span the plane, but one of them is the origin.
        let s = simplex(2, &[&[0.0, 0.0], &[1.0, 0.0], &[2.0, 0.0]]);

        assert_eq!(
            s.contains_origin(1.0e-6),
            Err(InternalError::WrongSingularClassification { sqdist: 0.0 })
        );

        let s = simplex(2, &[&[0.0, 1.0], &[1.0, 1.0], &[2.0, 1.0]]);
        assert_eq!(s.contains_origin(1.0e-6), Ok(false));
    }

    #[test]
    fn push_past_full_simplex_fails() {
        let mut s = simplex(1, &[&[-1.0], &[1.0]]);
        assert!(s.is_full());

        let err = s.try_push(CSOPoint::single_point(vector(&[0.0]))).unwrap_err();
        assert_eq!(err, InternalError::SimplexOverflow { dim: 1 });
        assert_eq!(s.len(), 2);
    }
}
