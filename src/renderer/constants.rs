//! Shared constants for the fingering diagram (all in SVG user units).

use crate::model::HOLE_COUNT;

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const DIAGRAM_SIZE: f64 = 90.0;

// ── Instrument body ─────────────────────────────────────────────────
pub(super) const BODY_CX: f64 = 45.0;
pub(super) const BODY_CY: f64 = 40.0;
pub(super) const BODY_RADIUS: f64 = 28.0;
pub(super) const BODY_STROKE_WIDTH: f64 = 2.0;

// ── Holes ───────────────────────────────────────────────────────────
/// Four upper holes inside the body (square), then two lower holes below it.
pub(super) const HOLE_CENTERS: [(f64, f64); HOLE_COUNT] = [
    (35.0, 28.0), // upper left
    (55.0, 28.0), // upper right
    (35.0, 48.0), // lower left
    (55.0, 48.0), // lower right
    (30.0, 70.0),
    (60.0, 70.0),
];
pub(super) const UPPER_HOLE_RADIUS: f64 = 6.0;
pub(super) const LOWER_HOLE_RADIUS: f64 = 6.0;
/// Per-hole scale: the upper-right hole is 20% smaller, the one below it 10%.
pub(super) const HOLE_SCALE: [f64; HOLE_COUNT] = [1.0, 0.8, 1.0, 0.9, 1.0, 1.0];
pub(super) const HOLE_STROKE_WIDTH: f64 = 1.5;

// ── Label ───────────────────────────────────────────────────────────
pub(super) const LABEL_X: f64 = 45.0;
pub(super) const LABEL_Y: f64 = 85.0;
pub(super) const LABEL_FONT_SIZE: f64 = 12.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BODY_COLOR: &str = "#f26522";
pub(super) const INK_COLOR: &str = "black";
pub(super) const PAPER_COLOR: &str = "white";
