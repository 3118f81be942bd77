#![allow(dead_code)]

use plotkit_designer::HersheyFont;

/// Builds a font description covering ' ' up to the highest listed character.
///
/// Listed glyphs use the given coding (metrics pair first); every other slot
/// gets a zero-width blank record using the renumbering sentinel.
pub fn description(glyphs: &[(char, &str)]) -> String {
    let last = glyphs.iter().map(|(c, _)| *c).max().unwrap_or(' ');
    let mut out = String::new();
    for (index, c) in (' '..=last).enumerate() {
        match glyphs.iter().find(|(g, _)| *g == c) {
            Some((_, coding)) => {
                out.push_str(&format!("{:>5}{:>3}{}\n", 500 + index, coding.len() / 2, coding));
            }
            None => out.push_str("12345  1RR\n"),
        }
    }
    out
}

pub fn font(glyphs: &[(char, &str)]) -> HersheyFont {
    HersheyFont::parse(&description(glyphs)).expect("test font should parse")
}

/// 'A' is symmetric about its origin, 'B' is a vertical bar with left = -3.
pub fn block_font() -> HersheyFont {
    font(&[('A', "MWPVRMTV"), ('B', "OWRMRV")])
}
