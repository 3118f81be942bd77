//! Holiday card and envelope composition.
//!
//! Places text and trees on the card faces and the envelope. All positions are
//! in millimeters with (0, 0) at the lower left of the plotter bed. Every
//! position comes from a layout value so different card stock only needs a
//! different [`CardLayout`] or [`EnvelopeLayout`].

use plotkit_core::{Error, Result, StrokeCollection};
use plotkit_designer::{
    cross_out, layout_bboxes, layout_message, place_message, HersheyFont, TreeGenerator,
    TreeParameters,
};
use tracing::{debug, warn};

/// One line of text and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub text: String,
    /// Cap-to-descender height in mm
    pub height: f64,
    pub base_x: f64,
    pub base_y: f64,
    /// Counter-clockwise rotation in radians
    pub rotation: f64,
}

impl TextPlacement {
    pub fn new(text: impl Into<String>, height: f64, base_x: f64, base_y: f64) -> Self {
        Self {
            text: text.into(),
            height,
            base_x,
            base_y,
            rotation: 0.0,
        }
    }

    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    fn render(&self, font: &HersheyFont, center: bool) -> Result<StrokeCollection> {
        let strokes = layout_message(&self.text, font, center)?;
        Ok(self.place(&strokes))
    }

    fn place(&self, strokes: &StrokeCollection) -> StrokeCollection {
        place_message(strokes, self.height, self.base_x, self.base_y, self.rotation)
    }
}

/// Positions of everything drawn on the card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    /// Trees on the front face
    pub front_trees: Vec<TreeParameters>,
    /// Centered greeting in the script font
    pub greeting: TextPlacement,
    /// Centered year line in the script font
    pub year: TextPlacement,
    /// Characters of the year line that get struck through
    pub year_cross_outs: Vec<usize>,
    pub cross_out_cycles: f64,
    /// Back face link in the block font
    pub url: TextPlacement,
    /// Left-aligned block-font lines inside the card, top line first
    pub inside_lines: Vec<String>,
    pub inside_x: f64,
    pub inside_top: f64,
    pub inside_line_height: f64,
    /// Baseline of the script-font closing
    pub closing_y: f64,
    /// Small tree repeated along the bottom of the inside face
    pub border_tree: TreeParameters,
    pub border_xs: Vec<f64>,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            front_trees: vec![
                TreeParameters::new(100.0, 90.0, 45, 171.0, 46.0),
                TreeParameters::new(20.0, 18.0, 9, 140.0, 114.0),
                TreeParameters::new(10.0, 12.0, 5, 210.0, 95.0),
                TreeParameters::new(10.0, 25.0, 13, 130.0, 58.0),
            ],
            greeting: TextPlacement::new("Happy Holidays", 15.0, 171.0, 30.0),
            year: TextPlacement::new("202012", 15.0, 171.0, 15.0),
            year_cross_outs: vec![3, 4],
            cross_out_cycles: 3.0,
            url: TextPlacement::new("github.com/palbee/holiday_card_2022", 6.0, 105.0, 76.0)
                .rotated(90f64.to_radians()),
            inside_lines: vec![
                "Best wishes for a".to_string(),
                "wonderful holiday".to_string(),
                "season and a".to_string(),
                "happy New Year!".to_string(),
            ],
            inside_x: 124.0,
            inside_top: 120.0,
            inside_line_height: 10.0,
            closing_y: 40.0,
            border_tree: TreeParameters::new(8.0, 8.0, 8, 0.0, 6.0),
            border_xs: (12..110).step_by(10).map(f64::from).collect(),
        }
    }
}

/// Positions of the address blocks on the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeLayout {
    pub sender_x: f64,
    /// Top edge of the return address block
    pub sender_top: f64,
    pub sender_line_height: f64,
    pub recipient_x: f64,
    /// Baseline of the first recipient line
    pub recipient_y: f64,
    pub recipient_line_height: f64,
    /// Rightmost X the recipient block may reach before it is shifted left
    pub recipient_max_x: f64,
    /// Gap kept from `recipient_max_x` after shifting
    pub recipient_clearance: f64,
}

impl Default for EnvelopeLayout {
    fn default() -> Self {
        Self {
            sender_x: 5.0,
            sender_top: 109.0,
            sender_line_height: 4.0,
            recipient_x: 60.0,
            recipient_y: 50.0,
            recipient_line_height: 5.0,
            recipient_max_x: 146.0,
            recipient_clearance: 1.0,
        }
    }
}

/// Front and back of the card.
pub fn outside_of_card(
    script: &HersheyFont,
    block: &HersheyFont,
    layout: &CardLayout,
) -> Result<StrokeCollection> {
    let mut strokes = StrokeCollection::new();

    for params in &layout.front_trees {
        strokes.append(TreeGenerator::new(*params).generate());
    }

    strokes.append(layout.greeting.render(script, true)?);

    // Squiggles are built in font units so they share the year's placement.
    let mut year = layout_message(&layout.year.text, script, true)?;
    let boxes = layout_bboxes(&layout.year.text, script, true)?;
    for &index in &layout.year_cross_outs {
        let bbox = boxes.polylines().get(index).ok_or_else(|| {
            Error::other(format!(
                "Cross-out index {} is past the end of {:?}",
                index, layout.year.text
            ))
        })?;
        year.append(cross_out(bbox, layout.cross_out_cycles));
    }
    strokes.append(layout.year.place(&year));

    strokes.append(layout.url.render(block, true)?);

    debug!(
        "Outside of card: {} strokes, {} points",
        strokes.len(),
        strokes.point_count()
    );
    Ok(strokes)
}

/// Greeting, closing, and tree border inside the card.
pub fn inside_of_card(
    script: &HersheyFont,
    block: &HersheyFont,
    closing: &str,
    layout: &CardLayout,
) -> Result<StrokeCollection> {
    let mut strokes = StrokeCollection::new();
    let height = layout.inside_line_height;

    for (index, line) in layout.inside_lines.iter().enumerate() {
        let base_y = layout.inside_top - index as f64 * height;
        let placement = TextPlacement::new(line.as_str(), height, layout.inside_x, base_y);
        strokes.append(placement.render(block, false)?);
    }

    let placement = TextPlacement::new(closing, height, layout.inside_x, layout.closing_y);
    strokes.append(placement.render(script, false)?);

    for &x in &layout.border_xs {
        let params = TreeParameters {
            base_x: x,
            ..layout.border_tree
        };
        strokes.append(TreeGenerator::new(params).generate());
    }

    debug!(
        "Inside of card: {} strokes, {} points",
        strokes.len(),
        strokes.point_count()
    );
    Ok(strokes)
}

/// Return and recipient addresses.
///
/// Returns the strokes together with a file-name stem built from the first
/// recipient line.
pub fn envelope(
    sender: &[String],
    recipient: &[String],
    block: &HersheyFont,
    layout: &EnvelopeLayout,
) -> Result<(StrokeCollection, String)> {
    let who = recipient
        .first()
        .map(|name| name.replace(' ', "_"))
        .ok_or_else(|| Error::other("Envelope needs at least one recipient line"))?;

    let mut strokes = StrokeCollection::new();

    let height = layout.sender_line_height;
    for (index, line) in sender.iter().enumerate() {
        let base_y = layout.sender_top - height - index as f64 * height;
        let placement = TextPlacement::new(line.as_str(), height, layout.sender_x, base_y);
        strokes.append(placement.render(block, false)?);
    }

    let height = layout.recipient_line_height;
    let mut address = StrokeCollection::new();
    for (index, line) in recipient.iter().enumerate() {
        let base_y = layout.recipient_y - index as f64 * height;
        let placement = TextPlacement::new(line.as_str(), height, layout.recipient_x, base_y);
        address.append(placement.render(block, false)?);
    }

    // Long names would run off the envelope; slide the block left instead.
    if let Some(bounds) = address.bounds() {
        if bounds.max_x > layout.recipient_max_x {
            let dx = layout.recipient_max_x - layout.recipient_clearance - bounds.max_x;
            warn!("Recipient address too wide, shifting {:.2}mm left", -dx);
            address.translate(dx, 0.0);
        }
    }
    strokes.append(address);

    Ok((strokes, who))
}
