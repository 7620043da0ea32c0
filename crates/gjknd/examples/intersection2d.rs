use gjknd::na::Point2;
use gjknd::query;
use gjknd::shape::ConvexPolytope;

fn main() {
    let triangle = ConvexPolytope::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(0.0, 2.0),
    ])
    .expect("Invalid polytope.");
    let overlapping = ConvexPolytope::from_points(&[
        Point2::new(1.0, 1.0),
        Point2::new(3.0, 1.0),
        Point2::new(1.0, 3.0),
    ])
    .expect("Invalid polytope.");
    let far = ConvexPolytope::from_points(&[
        Point2::new(5.0, 0.0),
        Point2::new(6.0, 0.0),
        Point2::new(5.0, 1.0),
    ])
    .expect("Invalid polytope.");

    let hit = query::intersection_test(&triangle, &overlapping).expect("Query failed.");
    let miss = query::intersection_test(&triangle, &far).expect("Query failed.");

    assert!(hit);
    assert!(!miss);
    println!("overlapping: {}, far: {}", hit, miss);
}
