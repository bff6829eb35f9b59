use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::ZiplineGeometry;
use crate::slope::{GroundProfile, SlopeError};

/// Scale and framing parameters for the side-view drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingOptions {
    pub pixels_per_foot: f64,
    pub margin_px: f64,
    pub svg_height_px: f64,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            pixels_per_foot: 10.0,
            margin_px: 50.0,
            svg_height_px: 300.0,
        }
    }
}

/// Pixel coordinates for every feature of the side-view drawing.
///
/// The x axis runs left to right from the start anchor to the end anchor;
/// y grows downward as in SVG, with `axis_y_px` at ground baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schematic {
    pub svg_width_px: f64,
    pub svg_height_px: f64,
    pub margin_px: f64,
    pub pixels_per_foot: f64,
    pub axis_y_px: f64,

    pub start_ground_x_px: f64,
    pub start_ground_y_px: f64,
    pub transition_ground_x_px: f64,
    pub transition_ground_y_px: f64,
    pub end_ground_x_px: f64,
    pub end_ground_y_px: f64,

    pub start_anchor_x_px: f64,
    pub start_anchor_y_px: f64,
    pub end_anchor_x_px: f64,
    pub end_anchor_y_px: f64,

    pub sag_point_x_px: f64,
    pub sag_point_y_px: f64,
    pub clearance_bottom_y_px: f64,

    pub midline_x_px: f64,
    pub midline_y_px: f64,
}

/// Projects resolved geometry into drawing coordinates.
pub fn layout(geo: &ZiplineGeometry, opts: &DrawingOptions) -> Result<Schematic, SlopeError> {
    let axis_y_px = opts.svg_height_px - opts.margin_px;
    let x_px = |x_ft: f64| opts.margin_px + x_ft * opts.pixels_per_foot;
    let y_px = |elev_ft: f64| axis_y_px - elev_ft * opts.pixels_per_foot;

    let profile = GroundProfile::from_geometry(geo);
    let transition_x_ft = profile.transition_x_ft();
    let transition_elev_ft = profile.elevation_at(transition_x_ft)?;

    let sag_point_x_px = x_px(geo.sag_x_ft);
    let line_y_px = y_px(geo.line_elev_at_sag_ft);
    let sag_point_y_px = line_y_px + geo.sag_ft * opts.pixels_per_foot;

    Ok(Schematic {
        svg_width_px: opts.margin_px * 2.0 + geo.run_ft * opts.pixels_per_foot,
        svg_height_px: opts.svg_height_px,
        margin_px: opts.margin_px,
        pixels_per_foot: opts.pixels_per_foot,
        axis_y_px,
        start_ground_x_px: x_px(0.0),
        start_ground_y_px: y_px(geo.start_ground_elev_ft),
        transition_ground_x_px: x_px(transition_x_ft),
        transition_ground_y_px: y_px(transition_elev_ft),
        end_ground_x_px: x_px(geo.run_ft),
        end_ground_y_px: y_px(geo.end_ground_elev_ft),
        start_anchor_x_px: x_px(0.0),
        start_anchor_y_px: y_px(geo.start_anchor_elev_ft),
        end_anchor_x_px: x_px(geo.run_ft),
        end_anchor_y_px: y_px(geo.end_anchor_elev_ft),
        sag_point_x_px,
        sag_point_y_px,
        clearance_bottom_y_px: y_px(geo.clearance_elev_ft),
        midline_x_px: x_px(geo.run_ft / 2.0),
        midline_y_px: y_px(geo.start_anchor_elev_ft) - 10.0,
    })
}

/// Renders the side-view drawing as a standalone SVG document.
pub fn render_svg(geo: &ZiplineGeometry, s: &Schematic) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\">\n",
        s.svg_width_px, s.svg_height_px, s.svg_width_px, s.svg_height_px
    ));

    // Ground, as two straight segments meeting at the transition point.
    svg.push_str(&format!(
        "  <polyline points=\"{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\" fill=\"none\" stroke=\"green\" stroke-width=\"2\"/>\n",
        s.start_ground_x_px,
        s.start_ground_y_px,
        s.transition_ground_x_px,
        s.transition_ground_y_px,
        s.end_ground_x_px,
        s.end_ground_y_px
    ));

    // Anchor trunks from ground up to each cable end.
    svg.push_str(&format!(
        "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"saddlebrown\" stroke-width=\"4\"/>\n",
        s.start_anchor_x_px, s.start_ground_y_px, s.start_anchor_x_px, s.start_anchor_y_px
    ));
    svg.push_str(&format!(
        "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"saddlebrown\" stroke-width=\"4\"/>\n",
        s.end_anchor_x_px, s.end_ground_y_px, s.end_anchor_x_px, s.end_anchor_y_px
    ));

    // Straight chord between the anchors, for reference.
    svg.push_str(&format!(
        "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"gray\" stroke-width=\"1\" stroke-dasharray=\"6,4\"/>\n",
        s.start_anchor_x_px, s.start_anchor_y_px, s.end_anchor_x_px, s.end_anchor_y_px
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">sag {:.1} ft at {:.0}% from end</text>\n",
        s.midline_x_px, s.midline_y_px, geo.sag_ft, geo.sag_point_percent_from_end
    ));

    // Loaded cable, drawn through the sag point. Red flags an unsafe design.
    let cable_color = if geo.is_safe { "black" } else { "red" };
    svg.push_str(&format!(
        "  <polyline points=\"{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        s.start_anchor_x_px,
        s.start_anchor_y_px,
        s.sag_point_x_px,
        s.sag_point_y_px,
        s.end_anchor_x_px,
        s.end_anchor_y_px,
        cable_color
    ));
    if !geo.is_safe {
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"16\" fill=\"red\">WARNING: rider contacts ground</text>\n",
            s.margin_px,
            s.margin_px / 2.0
        ));
    }

    svg.push_str(&format!(
        "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"/>\n",
        s.sag_point_x_px, s.sag_point_y_px, cable_color
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">Cable Sag Point</text>\n",
        s.sag_point_x_px + 8.0,
        s.sag_point_y_px
    ));

    // Rider seat and clearance envelope below the sag point.
    svg.push_str(&format!(
        "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"blue\" stroke-width=\"1\" stroke-dasharray=\"2,2\"/>\n",
        s.sag_point_x_px, s.sag_point_y_px, s.sag_point_x_px, s.clearance_bottom_y_px
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">clearance bottom {:.1} ft</text>\n",
        s.sag_point_x_px + 8.0,
        s.clearance_bottom_y_px,
        geo.clearance_elev_ft
    ));

    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">start ground +{:.1} ft</text>\n",
        s.start_ground_x_px,
        s.start_ground_y_px - 6.0,
        geo.slope_delta_ft
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Lays out and writes the drawing for a geometry to an SVG file.
pub fn write_svg(
    path: &Path,
    geo: &ZiplineGeometry,
    opts: &DrawingOptions,
) -> io::Result<()> {
    let schematic =
        layout(geo, opts).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, render_svg(geo, &schematic))
}
