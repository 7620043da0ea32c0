use gjknd::math::Vector;
use gjknd::query::{self, gjk::GjkOptions};
use gjknd::shape::ConvexPolytope;

fn main() {
    let tetrahedron = ConvexPolytope::from_slices(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ])
    .expect("Invalid polytope.");

    // Slide a copy of the tetrahedron along the diagonal until it stops touching the original.
    let options = GjkOptions::with_tolerance(1.0e-6);
    let diagonal = Vector::from_element(3, 1.0);

    for i in 0..=10 {
        let shift = &diagonal * (i as f64 * 0.1);
        let moved = tetrahedron.translated(&shift);
        let intersects = query::intersection_test_with_options(&tetrahedron, &moved, &options)
            .expect("Query failed.");
        println!("shift {:.1}: intersecting = {}", i as f64 * 0.1, intersects);
    }
}
