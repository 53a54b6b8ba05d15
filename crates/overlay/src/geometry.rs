// Chunk: docs/chunks/zone_geometry - Zone, frame, arrow, and field layout

//! Pixel layout for the anchored zone.
//!
//! # Design
//!
//! Pure functions from font metrics and options to rectangles; the host
//! owns the compositor and draws whatever these return. All coordinates
//! are relative to the zone's top-left corner. The host places the zone
//! itself directly below the anchor line, spanning the view width.

use unicode_width::UnicodeWidthStr;

use crate::config::OverlayOptions;

/// Horizontal inset of the input field from the zone edges.
const FIELD_PADDING_X: f32 = 8.0;
/// Vertical padding inside the input field, above and below the text row.
const FIELD_PADDING_Y: f32 = 2.0;

/// Font measurements the layout needs from the host's text renderer.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pub advance_width: f32,
    pub line_height: f32,
    pub ascent: f32,
    pub descent: f32,
}

/// Computed layout of the zone's parts, in pixels relative to the zone's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneGeometry {
    pub zone_width: f32,
    pub zone_height: f32,
    /// Thickness of the frame strips along the zone's top and bottom edges.
    pub frame_thickness: f32,
    /// Horizontal center of the arrow notch, when the arrow is enabled.
    pub arrow_tip_x: Option<f32>,
    pub arrow_half_width: f32,
    pub field_x: f32,
    pub field_y: f32,
    pub field_width: f32,
    pub field_height: f32,
    /// Baseline of the field's text row, for the host's glyph renderer.
    pub text_baseline_y: f32,
}

/// Lays out the zone for an anchor sitting `anchor_cells` display cells
/// into its line, in a view `view_width` pixels wide.
pub fn calculate_zone_geometry(
    anchor_cells: usize,
    view_width: f32,
    metrics: FontMetrics,
    options: &OverlayOptions,
) -> ZoneGeometry {
    let frame_thickness = options.frame_width.max(0.0);
    // A hand-edited options file may hold a zero height; keep one row.
    let content_height = options.height_in_lines.max(1) as f32 * metrics.line_height;
    let zone_height = content_height + 2.0 * frame_thickness;

    let arrow_half_width = metrics.advance_width / 2.0;
    let arrow_tip_x = if options.show_arrow {
        // Center the tip under the anchor's cell, clamped so the notch
        // stays inside the zone at the extreme columns.
        let tip = (anchor_cells as f32 + 0.5) * metrics.advance_width;
        let max_tip = (view_width - arrow_half_width).max(arrow_half_width);
        Some(tip.clamp(arrow_half_width, max_tip))
    } else {
        None
    };

    let field_height = (metrics.line_height + 2.0 * FIELD_PADDING_Y).min(content_height);
    let field_width = (view_width - 2.0 * FIELD_PADDING_X).max(0.0);
    let field_x = FIELD_PADDING_X;
    let field_y = frame_thickness + (content_height - field_height) / 2.0;
    let text_baseline_y = field_y + FIELD_PADDING_Y + metrics.ascent;

    ZoneGeometry {
        zone_width: view_width.max(0.0),
        zone_height,
        frame_thickness,
        arrow_tip_x,
        arrow_half_width,
        field_x,
        field_y,
        field_width,
        field_height,
        text_baseline_y,
    }
}

/// Display-cell offset of a caret sitting after `line_prefix`.
///
/// Wide glyphs (CJK, many emoji) occupy two cells, so a character column
/// is not a display column. Control characters count as zero cells.
pub fn anchor_cell_offset(line_prefix: &str) -> usize {
    line_prefix.width()
}
