//! Diagram renderer: draws one fingering as a self-contained SVG.
//!
//! The drawing is a fixed template: the instrument body, one circle per
//! hole (filled when closed, outlined when open, right half filled when
//! half-open) and the note label centered underneath.

mod constants;
mod svg_builder;

use crate::model::{FingeringEntry, HoleState, HOLE_COUNT};
use constants::*;
use svg_builder::{num, SvgBuilder};

/// Render a hole pattern to SVG. `title` goes into `<title>`, `label` is the
/// caption drawn under the body.
pub fn render_fingering_svg(holes: &[HoleState; HOLE_COUNT], title: &str, label: &str) -> String {
    let mut svg = SvgBuilder::new(DIAGRAM_SIZE, DIAGRAM_SIZE);
    svg.title(title);

    svg.stroked_circle(BODY_CX, BODY_CY, BODY_RADIUS, BODY_COLOR, INK_COLOR, BODY_STROKE_WIDTH);

    for (idx, (&(x, y), &state)) in HOLE_CENTERS.iter().zip(holes.iter()).enumerate() {
        render_hole(&mut svg, x, y, hole_radius(idx), state);
    }

    svg.text(LABEL_X, LABEL_Y, label, LABEL_FONT_SIZE, "middle");
    svg.build()
}

/// Render a table entry, titled with its canonical key.
pub fn render_entry_svg(entry: &FingeringEntry) -> String {
    render_fingering_svg(&entry.holes, &entry.key.to_string(), &entry.label)
}

fn hole_radius(idx: usize) -> f64 {
    let base = if idx < 4 { UPPER_HOLE_RADIUS } else { LOWER_HOLE_RADIUS };
    base * HOLE_SCALE[idx]
}

fn render_hole(svg: &mut SvgBuilder, x: f64, y: f64, r: f64, state: HoleState) {
    match state {
        HoleState::Closed => svg.circle(x, y, r, INK_COLOR),
        HoleState::Open => {
            svg.stroked_circle(x, y, r, PAPER_COLOR, INK_COLOR, HOLE_STROKE_WIDTH);
        }
        HoleState::Half => {
            // Right half black, left half white
            let id = format!("half-{}-{}", num(x), num(y));
            let clip = svg.clip_rect(&id, x, y - r, r, 2.0 * r);
            svg.stroked_circle(x, y, r, PAPER_COLOR, INK_COLOR, HOLE_STROKE_WIDTH);
            svg.clipped_circle(x, y, r, INK_COLOR, &clip);
        }
    }
}
