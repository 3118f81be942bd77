use crate::support::block_font;
use plotkit_core::{Point, StrokeCollection};
use plotkit_designer::{layout_message, place_message, tree, StrokesToGcode};

#[test]
fn test_gcode_generation() {
    let strokes = StrokeCollection::from(vec![vec![
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 5.0),
    ]]);
    let gcode = StrokesToGcode::new(-5.0, -3.0).generate(&strokes);

    assert!(gcode.contains("G90"));
    assert!(gcode.contains("G21"));
    assert_eq!(gcode.matches("G0 Z-5.000").count(), 1);
    assert_eq!(gcode.lines().filter(|l| l.starts_with("G1 ")).count(), 2);
    assert!(gcode.trim_end().ends_with("G0 X230.000 Y180.000 Z0.000"));
}

#[test]
fn test_gcode_header() {
    let gcode = StrokesToGcode::default().generate(&tree(10.0, 10.0, 4, 0.0, 0.0, 0.0));
    assert!(gcode.contains("Generated G-code from PlotKit"));
    assert!(gcode.contains("; Strokes: 6"));
    assert!(gcode.contains("Drawn length"));
}

#[test]
fn test_one_pen_down_per_stroke() {
    let text = layout_message("ABA", &block_font(), false).unwrap();
    let placed = place_message(&text, 10.0, 20.0, 20.0, 0.0);
    let gen = StrokesToGcode::default();
    let gcode = gen.generate(&placed);
    let pen_downs = gcode.matches(&format!("G0 Z{:.3}\n", gen.draw_depth)).count();
    assert_eq!(pen_downs, placed.len());
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.gcode");
    let strokes = tree(20.0, 18.0, 9, 140.0, 114.0, 0.0);
    let gen = StrokesToGcode::default();
    gen.write_file(&strokes, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, gen.generate(&strokes));
}
