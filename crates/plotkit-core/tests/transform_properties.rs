use plotkit_core::{Point, StrokeCollection, Transform};
use proptest::prelude::*;

fn strokes_strategy() -> impl Strategy<Value = StrokeCollection> {
    let point = (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| Point::new(x, y));
    let polyline = prop::collection::vec(point, 1..8);
    prop::collection::vec(polyline, 0..6).prop_map(StrokeCollection::from)
}

proptest! {
    #[test]
    fn identity_round_trip(strokes in strokes_strategy()) {
        let out = Transform::identity().apply(&strokes);
        prop_assert_eq!(out.len(), strokes.len());
        for (a, b) in out.points().zip(strokes.points()) {
            prop_assert!((a.x - b.x).abs() < 1e-9);
            prop_assert!((a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn shape_is_preserved(
        strokes in strokes_strategy(),
        sx in -10.0f64..10.0,
        sy in -10.0f64..10.0,
        rot in -6.3f64..6.3,
        bx in -100.0f64..100.0,
        by in -100.0f64..100.0,
    ) {
        let out = Transform::new(sx, sy, rot, bx, by).apply(&strokes);
        prop_assert_eq!(out.len(), strokes.len());
        for (a, b) in out.iter().zip(strokes.iter()) {
            prop_assert_eq!(a.len(), b.len());
        }
    }

    #[test]
    fn rotation_preserves_distance_from_base(
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        rot in -6.3f64..6.3,
    ) {
        let t = Transform::new(1.0, 1.0, rot, 7.0, -3.0);
        let out = t.apply_point(Point::new(x, y));
        let r_in = x.hypot(y);
        let r_out = (out.x - 7.0).hypot(out.y + 3.0);
        prop_assert!((r_in - r_out).abs() < 1e-9);
    }
}

#[test]
fn test_quarter_turn_example() {
    let t = Transform::new(2.0, 1.0, std::f64::consts::FRAC_PI_2, 5.0, 5.0);
    let strokes = StrokeCollection::from(vec![vec![Point::new(1.0, 0.0)]]);
    let out = t.apply(&strokes);
    let p = out.polylines()[0][0];
    assert!((p.x - 5.0).abs() < 1e-9);
    assert!((p.y - 7.0).abs() < 1e-9);
}

#[test]
fn test_transform_serializes() {
    let t = Transform::uniform(15.0, 171.0, 30.0, 0.0);
    let json = serde_json::to_string(&t).unwrap();
    let back: Transform = serde_json::from_str(&json).unwrap();
    assert_eq!(t, back);
}
