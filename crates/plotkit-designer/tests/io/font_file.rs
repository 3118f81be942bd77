use crate::support::description;
use plotkit_core::FontLoadError;
use plotkit_designer::HersheyFont;
use std::io::Write;

#[test]
fn test_load_font_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(description(&[('A', "MWPVRMTV")]).as_bytes())
        .unwrap();

    let font = HersheyFont::load(file.path()).unwrap();
    assert_eq!(font.last_char(), 'A');
    assert_eq!(font.get('A').unwrap().strokes.point_count(), 3);
}

#[test]
fn test_missing_font_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.jhf");
    let err = HersheyFont::load(&path).unwrap_err();
    assert!(matches!(err, FontLoadError::Io { .. }));
    assert!(err.to_string().contains("missing.jhf"));
}

#[test]
fn test_malformed_font_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"    1 xxMWRM\n").unwrap();
    let err = HersheyFont::load(file.path()).unwrap_err();
    assert!(matches!(err, FontLoadError::Format { .. }));
}
