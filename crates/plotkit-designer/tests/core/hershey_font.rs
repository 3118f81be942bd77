use crate::support::{block_font, description, font};
use plotkit_core::FormatError;
use plotkit_designer::HersheyFont;

#[test]
fn test_normalized_span_is_one() {
    let f = block_font();
    let top = f.iter().map(|g| g.top).fold(f64::MIN, f64::max);
    let bottom = f.iter().map(|g| g.bottom).fold(f64::MAX, f64::min);
    assert!((top - bottom - 1.0).abs() < 1e-12);
    assert!((f.top() - f.bottom() - 1.0).abs() < 1e-12);
}

#[test]
fn test_single_scale_for_whole_font() {
    // 'B' only spans 5 units but shares the scale set by the 9-unit font span.
    let f = font(&[('A', "MWRMRV"), ('B', "MWRMRR")]);
    let b = f.get('B').unwrap();
    assert!((b.top - 5.0 / 9.0).abs() < 1e-12);
    assert_eq!(b.bottom, 0.0);
    assert!((b.left - -5.0 / 9.0).abs() < 1e-12);
}

#[test]
fn test_characters_follow_load_order() {
    let f = block_font();
    assert_eq!(f.len(), 35);
    assert_eq!(f.first_char(), ' ');
    assert_eq!(f.last_char(), 'B');
    for (i, glyph) in f.iter().enumerate() {
        assert_eq!(glyph.character as u32, 32 + i as u32);
    }
    // Blank filler records took their load index as number.
    assert_eq!(f.get('!').unwrap().number, 1);
    assert_eq!(f.get('A').unwrap().number, 533);
}

#[test]
fn test_blank_glyphs_have_no_strokes() {
    let f = block_font();
    let space = f.get(' ').unwrap();
    assert!(space.strokes.is_empty());
    assert_eq!(space.width(), 0.0);
}

#[test]
fn test_truncated_final_record() {
    let mut text = description(&[('A', "MWPVRMTV")]);
    text.push_str("  600 12MWRM\n");
    let err = HersheyFont::parse(&text).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Truncated {
            index: 34,
            expected: 12,
            found: 2
        }
    ));
}

#[test]
fn test_font_is_shareable_across_threads() {
    let f = block_font();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| plotkit_designer::layout_message("AB", &f, true).unwrap()))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    });
}
