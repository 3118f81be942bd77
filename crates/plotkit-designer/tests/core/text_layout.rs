use crate::support::block_font;
use plotkit_core::LayoutError;
use plotkit_designer::{
    cross_out, layout_bboxes, layout_message, message_width, place_message,
};

const EPS: f64 = 1e-9;

#[test]
fn test_advance_uses_right_then_negated_left() {
    // A.right = 5, B.left = -3 in raw units; raw span is 9.
    let f = block_font();
    let strokes = layout_message("AB", &f, false).unwrap();
    assert_eq!(strokes.len(), 2);

    let a_origin = strokes.polylines()[0][1].x; // apex of 'A' sits on its origin
    let b_origin = strokes.polylines()[1][0].x;
    assert!(((b_origin - a_origin) * 9.0 - 8.0).abs() < EPS);
}

#[test]
fn test_first_glyph_starts_after_its_left_bearing() {
    let f = block_font();
    let strokes = layout_message("A", &f, false).unwrap();
    let apex = strokes.polylines()[0][1];
    assert!((apex.x * 9.0 - 5.0).abs() < EPS);
}

#[test]
fn test_centered_symmetric_message() {
    let f = block_font();
    let strokes = layout_message("AA", &f, true).unwrap();
    let b = strokes.bounds().unwrap();
    assert!(((b.min_x + b.max_x) / 2.0).abs() < EPS);

    // Y is never touched by centering.
    let plain = layout_message("AA", &f, false).unwrap();
    for (c, p) in strokes.points().zip(plain.points()) {
        assert_eq!(c.y, p.y);
    }
}

#[test]
fn test_bboxes_line_up_with_text() {
    let f = block_font();
    let boxes = layout_bboxes("AB", &f, true).unwrap();
    assert_eq!(boxes.len(), 2);
    assert!(boxes.iter().all(|b| b.len() == 4));

    // Boxes tile the full advance: first starts at -width/2, last ends at +width/2.
    let width = message_width("AB", &f).unwrap();
    assert!((boxes.polylines()[0][0].x + width / 2.0).abs() < EPS);
    assert!((boxes.polylines()[1][1].x - width / 2.0).abs() < EPS);
    assert!((boxes.polylines()[0][1].x - boxes.polylines()[1][0].x).abs() < EPS);
}

#[test]
fn test_unknown_character_aborts_layout() {
    let f = block_font();
    let err = layout_bboxes("ABC", &f, false).unwrap_err();
    assert_eq!(
        err,
        LayoutError::UnknownCharacter {
            character: 'C',
            position: 2
        }
    );
    assert!(layout_message("\t", &f, false).is_err());
}

#[test]
fn test_place_message_scales_uniformly() {
    let f = block_font();
    let strokes = layout_message("A", &f, true).unwrap();
    let placed = place_message(&strokes, 15.0, 171.0, 30.0, 0.0);
    let b = placed.bounds().unwrap();
    assert!((b.height() - 15.0).abs() < EPS);
    assert!(((b.min_x + b.max_x) / 2.0 - 171.0).abs() < EPS);
}

#[test]
fn test_cross_out_selected_characters() {
    let f = block_font();
    let boxes = layout_bboxes("ABA", &f, true).unwrap();
    let bbox = &boxes.polylines()[1];
    let squiggle = cross_out(bbox, 3.0);
    assert_eq!(squiggle.len(), 1);
    assert_eq!(squiggle.point_count(), 90);

    let first = squiggle.polylines()[0][0];
    let last = *squiggle.polylines()[0].last().unwrap();
    let mid_x = (bbox[0].x + bbox[1].x) / 2.0;
    assert!((first.x - mid_x).abs() < EPS);
    assert!((first.y - bbox[0].y).abs() < EPS);
    assert!((last.y - bbox[2].y).abs() < EPS);
}
