//! # Hershey Font Loader
//!
//! Parses stroke fonts in the James Hurt encoding of the Hershey fonts
//! (`.jhf` files) into a table of normalized polyline glyphs.
//!
//! Each record is laid out as:
//!
//! ```text
//!     8  9MWOMOV RUMUV ROQUQ
//! └─┬─┘└┬┘└┬┘└──────┬──────┘
//! number│ metrics   coordinate pairs
//!     pairs
//! ```
//!
//! - columns 0..5: glyph number (metadata; `12345` means "use the load index")
//! - columns 5..8: coordinate pair count, including the metrics pair
//! - then two characters per pair, continuing onto following lines until the
//!   declared count is reached
//!
//! All values are offsets from `'R'`. The first pair holds the left and right
//! advance metrics. `" R"` lifts the pen. Y is stored in a left-handed system,
//! so it is decoded as `'R' - c` to get a right-handed one without mirroring X.
//!
//! Glyphs are assigned to characters by load order starting at space. After
//! loading, every coordinate and metric is multiplied by one font-wide factor
//! so the tallest extent (highest top to lowest bottom) spans exactly 1.0.

use plotkit_core::{FontLoadError, FormatError, Point, Polyline, StrokeCollection};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

const ORIGIN: u8 = b'R';
const PEN_UP: [u8; 2] = [b' ', b'R'];
const RENUMBER_SENTINEL: u32 = 12345;
const NUMBER_WIDTH: usize = 5;
const PAIRS_WIDTH: usize = 3;
const HEADER_WIDTH: usize = NUMBER_WIDTH + PAIRS_WIDTH;

/// A single character of a stroke font.
///
/// Metrics and coordinates are in normalized font units once the glyph is part
/// of a [`HersheyFont`].
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Character this glyph renders
    pub character: char,
    /// Number from the record header; informational only
    pub number: u32,
    /// Left edge offset from the glyph origin (usually negative)
    pub left: f64,
    /// Right edge offset from the glyph origin
    pub right: f64,
    /// Highest Y of any point, never below 0
    pub top: f64,
    /// Lowest Y of any point, never above 0
    pub bottom: f64,
    pub strokes: StrokeCollection,
}

impl Glyph {
    /// Horizontal advance contributed by this glyph alone.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    fn scale(&mut self, factor: f64) {
        self.left *= factor;
        self.right *= factor;
        self.top *= factor;
        self.bottom *= factor;
        self.strokes = self
            .strokes
            .map_points(|p| Point::new(p.x * factor, p.y * factor));
    }
}

/// Immutable table of glyphs covering a contiguous character run from space.
#[derive(Debug, Clone)]
pub struct HersheyFont {
    glyphs: Vec<Glyph>,
    top: f64,
    bottom: f64,
}

impl HersheyFont {
    /// Parses a font description held in memory.
    pub fn parse(description: &str) -> Result<Self, FormatError> {
        let mut lines = description.lines().enumerate().map(|(i, l)| (i + 1, l));
        let mut glyphs = Vec::new();

        while let Some((line_no, line)) = lines.next() {
            if line.trim().is_empty() {
                continue;
            }
            let index = glyphs.len();
            let record = read_record(index, line_no, line, &mut lines)?;
            glyphs.push(record.decode()?);
        }

        if glyphs.is_empty() {
            return Err(FormatError::Empty);
        }

        let top = glyphs.iter().map(|g| g.top).fold(f64::MIN, f64::max);
        let bottom = glyphs.iter().map(|g| g.bottom).fold(f64::MAX, f64::min);
        let span = top - bottom;
        if span == 0.0 {
            return Err(FormatError::ZeroSpan { value: top });
        }

        let scale = 1.0 / span;
        for glyph in &mut glyphs {
            glyph.scale(scale);
        }
        debug!(
            glyphs = glyphs.len(),
            top, bottom, scale, "Normalized Hershey font"
        );

        Ok(Self {
            glyphs,
            top: top * scale,
            bottom: bottom * scale,
        })
    }

    /// Reads and parses a `.jhf` font file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let description = std::fs::read_to_string(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::parse(&description).map_err(|source| FontLoadError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Loaded font {} ({} glyphs, '{}'..='{}')",
            path.display(),
            font.len(),
            font.first_char(),
            font.last_char()
        );
        Ok(font)
    }

    /// Looks up the glyph for a character.
    pub fn get(&self, character: char) -> Option<&Glyph> {
        let index = (character as u32).checked_sub(' ' as u32)?;
        self.glyphs.get(index as usize)
    }

    pub fn contains(&self, character: char) -> bool {
        self.get(character).is_some()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    pub fn first_char(&self) -> char {
        ' '
    }

    pub fn last_char(&self) -> char {
        self.glyphs.last().map_or(' ', |g| g.character)
    }

    /// Highest glyph top after normalization.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Lowest glyph bottom after normalization; `top - bottom == 1`.
    pub fn bottom(&self) -> f64 {
        self.bottom
    }
}

impl FromStr for HersheyFont {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Raw text of one glyph record, reassembled across physical lines.
struct RawRecord {
    index: usize,
    number: u32,
    pairs: usize,
    coding: String,
}

fn read_record<'a>(
    index: usize,
    line_no: usize,
    line: &'a str,
    rest: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Result<RawRecord, FormatError> {
    if !line.is_ascii() {
        return Err(FormatError::NonAscii {
            index,
            line: line_no,
        });
    }

    let field = |range: std::ops::Range<usize>, name: &'static str| {
        let raw = line
            .get(range.start.min(line.len())..range.end.min(line.len()))
            .unwrap_or("");
        raw.trim().parse::<u32>().map_err(|_| FormatError::InvalidField {
            index,
            line: line_no,
            field: name,
            value: raw.to_string(),
        })
    };

    let number = match field(0..NUMBER_WIDTH, "number")? {
        RENUMBER_SENTINEL => index as u32,
        n => n,
    };
    let pairs = field(NUMBER_WIDTH..HEADER_WIDTH, "pairs")? as usize;
    if pairs == 0 {
        return Err(FormatError::MissingMetrics { index });
    }

    let mut coding = line.get(HEADER_WIDTH..).unwrap_or("").to_string();
    let mut last_line = line_no;
    while coding.len() / 2 < pairs {
        let (next_no, next) = rest.next().ok_or(FormatError::Truncated {
            index,
            expected: pairs,
            found: coding.len() / 2,
        })?;
        if !next.is_ascii() {
            return Err(FormatError::NonAscii {
                index,
                line: next_no,
            });
        }
        coding.push_str(next);
        last_line = next_no;
    }

    let trailing = &coding[pairs * 2..];
    if !trailing.trim().is_empty() {
        return Err(FormatError::TrailingData {
            index,
            line: last_line,
            data: trailing.to_string(),
        });
    }
    coding.truncate(pairs * 2);

    Ok(RawRecord {
        index,
        number,
        pairs,
        coding,
    })
}

fn offset(c: u8) -> f64 {
    f64::from(i32::from(c) - i32::from(ORIGIN))
}

impl RawRecord {
    fn decode(self) -> Result<Glyph, FormatError> {
        let character = char::from_u32(' ' as u32 + self.index as u32)
            .ok_or(FormatError::CharacterOverflow { index: self.index })?;

        let bytes = self.coding.as_bytes();
        let left = offset(bytes[0]);
        let right = offset(bytes[1]);

        let mut top = 0.0f64;
        let mut bottom = 0.0f64;
        let mut strokes = StrokeCollection::new();
        let mut current: Polyline = Vec::new();

        for pair in bytes[2..].chunks_exact(2) {
            if pair == &PEN_UP[..] {
                if !current.is_empty() {
                    strokes.push(std::mem::take(&mut current));
                }
                continue;
            }
            let x = offset(pair[0]);
            let y = -offset(pair[1]);
            top = top.max(y);
            bottom = bottom.min(y);
            current.push(Point::new(x, y));
        }
        strokes.push(current);

        debug!(
            index = self.index,
            number = self.number,
            pairs = self.pairs,
            strokes = strokes.len(),
            "Decoded glyph {:?}",
            character
        );

        Ok(Glyph {
            character,
            number: self.number,
            left,
            right,
            top,
            bottom,
            strokes,
        })
    }
}
