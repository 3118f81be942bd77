use plotkit_designer::{tree, TreeGenerator, TreeParameters};
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_tree_shape_counts() {
    let strokes = tree(1.0, 1.0, 5, 0.0, 0.0, 0.0);
    assert_eq!(strokes.len(), 5 + 2);
    assert!(strokes.iter().take(5).all(|branch| branch.len() == 3));
}

#[test]
fn test_consecutive_branches_chain() {
    // Each branch ends on the side where the next one starts.
    let strokes = tree(10.0, 10.0, 8, 0.0, 0.0, 0.0);
    let lines = strokes.polylines();
    for pair in lines[..8].windows(2) {
        let end = pair[0].last().unwrap();
        let start = pair[1].first().unwrap();
        assert_eq!(end.x.signum(), start.x.signum());
    }
}

#[test]
fn test_default_parameters() {
    let params = TreeParameters::default();
    assert_eq!(params.n_steps, 20);
    let strokes = TreeGenerator::new(params).generate();
    assert_eq!(strokes.len(), 22);
    let b = strokes.bounds().unwrap();
    assert!((b.width() - 1.0).abs() < 1e-9);
    assert!((b.min_y - -0.1).abs() < 1e-9);
}

#[test]
fn test_rotated_tree_points_left() {
    let params = TreeParameters::new(8.0, 8.0, 8, 12.0, 6.0).with_rotation(FRAC_PI_2);
    let strokes = TreeGenerator::new(params).generate();
    let b = strokes.bounds().unwrap();
    // Height now runs along -X from the base.
    assert!((b.min_x - (12.0 - 8.0)).abs() < 1e-9);
    assert!((b.height() - 8.0).abs() < 1e-9);
}
