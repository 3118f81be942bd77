//! G-code generation from stroke collections.
//!
//! Pen plotter convention: every polyline is reached with a rapid move at the
//! safe depth, drawn at the draw depth, and finished by lifting back to the
//! safe depth. The program ends with a rapid move to the park position.
//!
//! The plotter is assumed to be homed with (0, 0) at the lower left of its
//! envelope and Z = 0 above the paper.

use plotkit_core::{Point, StrokeCollection};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// G-code generator for pen plotter strokes.
#[derive(Debug, Clone)]
pub struct StrokesToGcode {
    /// Z position with the pen on the paper
    pub draw_depth: f64,
    /// Z position for travel moves
    pub safe_depth: f64,
    /// Feed rate for drawing moves in mm/min
    pub feed_rate: f64,
    /// Final resting position of the pen
    pub park: (f64, f64, f64),
    line_numbers_enabled: bool,
}

impl StrokesToGcode {
    /// Creates a new G-code generator parked at the default position.
    pub fn new(draw_depth: f64, safe_depth: f64) -> Self {
        Self {
            draw_depth,
            safe_depth,
            ..Self::default()
        }
    }

    pub fn with_feed_rate(mut self, feed_rate: f64) -> Self {
        self.feed_rate = feed_rate;
        self
    }

    pub fn with_park(mut self, x: f64, y: f64, z: f64) -> Self {
        self.park = (x, y, z);
        self
    }

    /// Enables N-word line numbers (in steps of 10).
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers_enabled = enabled;
        self
    }

    /// Generates a complete program.
    pub fn generate(&self, strokes: &StrokeCollection) -> String {
        let mut gcode = self.generate_header(strokes);
        let (body, next_line) = self.generate_body(strokes, 10);
        gcode.push_str(&body);
        gcode.push_str(&self.generate_footer(next_line));
        gcode
    }

    /// Comment block plus modal setup.
    pub fn generate_header(&self, strokes: &StrokeCollection) -> String {
        let mut gcode = String::new();
        gcode.push_str("; Generated G-code from PlotKit\n");
        let _ = writeln!(gcode, "; Strokes: {}", strokes.len());
        let _ = writeln!(gcode, "; Drawn length: {:.3}mm", strokes.drawn_length());
        let _ = writeln!(gcode, "; Draw depth: {:.3}mm", self.draw_depth);
        let _ = writeln!(gcode, "; Safe depth: {:.3}mm", self.safe_depth);
        gcode.push('\n');
        gcode.push_str("G90         ; Absolute positioning\n");
        gcode.push_str("G21         ; Millimeter units\n");
        gcode.push('\n');
        gcode
    }

    /// Moves for every polyline. Returns the body and the next line number.
    pub fn generate_body(&self, strokes: &StrokeCollection, start_line_number: u32) -> (String, u32) {
        let mut gcode = String::new();
        let mut line_number = start_line_number;

        for polyline in strokes {
            let Some((start, rest)) = polyline.split_first() else {
                continue;
            };
            self.emit(
                &mut gcode,
                &mut line_number,
                format_args!(
                    "G0 X{:.3} Y{:.3} Z{:.3}",
                    start.x, start.y, self.safe_depth
                ),
            );
            self.emit(
                &mut gcode,
                &mut line_number,
                format_args!("G0 Z{:.3}", self.draw_depth),
            );
            for Point { x, y } in rest {
                self.emit(
                    &mut gcode,
                    &mut line_number,
                    format_args!("G1 X{:.3} Y{:.3} F{:.0}", x, y, self.feed_rate),
                );
            }
            self.emit(
                &mut gcode,
                &mut line_number,
                format_args!("G0 Z{:.3}", self.safe_depth),
            );
        }
        (gcode, line_number)
    }

    /// Park move that ends the program.
    pub fn generate_footer(&self, line_number: u32) -> String {
        let mut gcode = String::new();
        let mut line_number = line_number;
        let (x, y, z) = self.park;
        self.emit(
            &mut gcode,
            &mut line_number,
            format_args!("G0 X{:.3} Y{:.3} Z{:.3}", x, y, z),
        );
        gcode
    }

    /// Streams a complete program into `dest`.
    pub fn write_to<W: Write>(&self, strokes: &StrokeCollection, dest: &mut W) -> io::Result<()> {
        dest.write_all(self.generate(strokes).as_bytes())?;
        dest.flush()
    }

    /// Writes a complete program to `path`, replacing any existing file.
    pub fn write_file(&self, strokes: &StrokeCollection, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let mut file = io::BufWriter::new(std::fs::File::create(path)?);
        self.write_to(strokes, &mut file)?;
        info!(
            "Wrote {} strokes ({} points) to {}",
            strokes.len(),
            strokes.point_count(),
            path.display()
        );
        Ok(())
    }

    fn emit(&self, gcode: &mut String, line_number: &mut u32, args: std::fmt::Arguments<'_>) {
        if self.line_numbers_enabled {
            let _ = write!(gcode, "N{} ", line_number);
        }
        let _ = writeln!(gcode, "{}", args);
        *line_number += 10;
    }
}

impl Default for StrokesToGcode {
    fn default() -> Self {
        Self {
            draw_depth: -5.0,
            safe_depth: -3.0,
            feed_rate: 1000.0,
            park: (230.0, 180.0, 0.0),
            line_numbers_enabled: false,
        }
    }
}
