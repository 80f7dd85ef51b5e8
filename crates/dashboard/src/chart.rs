//! Minimal SVG line chart styled by a [`StyleConfig`].
//!
//! Draws the axes face, one polyline per curve in cycle order, the spines
//! the style enables, and a legend. Tick labels are not drawn: the chart is
//! only there to compare colours.

use std::fmt::Write;

use cvd_core::StyleConfig;

use crate::curves::Curve;

/// Pixels per inch of figure size.
const DPI: f64 = 100.0;
const MARGIN: f64 = 20.0;
const SERIES_WIDTH: f64 = 1.5;
const LEGEND_ROW: f64 = 14.0;
const LEGEND_SWATCH: f64 = 16.0;
const LEGEND_WIDTH: f64 = 86.0;
const FONT_SIZE: f64 = 10.0;

/// Escapes text for inclusion in SVG or HTML.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Data extent over all curves, padded by 5% and never degenerate.
fn bounds(curves: &[Curve]) -> ((f64, f64), (f64, f64)) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for &(px, py) in curves.iter().flat_map(|c| c.points.iter()) {
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }
    let fix = |(lo, hi): (f64, f64)| {
        if !lo.is_finite() || !hi.is_finite() {
            (0.0, 1.0)
        } else if hi - lo < 1e-12 {
            (lo - 0.5, hi + 0.5)
        } else {
            (lo, hi)
        }
    };
    let x = fix(x);
    let (lo, hi) = fix(y);
    let pad = (hi - lo) * 0.05;
    (x, (lo - pad, hi + pad))
}

/// Renders `curves` as an SVG sized from the style's figure size.
pub fn line_chart_svg(style: &StyleConfig, curves: &[Curve]) -> String {
    let (fig_w, fig_h) = style.figure_size;
    let (width, height) = (fig_w * DPI, fig_h * DPI);
    let (left, top) = (MARGIN, MARGIN);
    let (right, bottom) = (width - MARGIN, height - MARGIN);
    let ((x0, x1), (y0, y1)) = bounds(curves);
    let to_px = |x: f64, y: f64| {
        (
            left + (x - x0) / (x1 - x0) * (right - left),
            bottom - (y - y0) / (y1 - y0) * (bottom - top),
        )
    };
    let font = escape_xml(&style.font_family);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\">\n"
    );
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{width:.0}\" height=\"{height:.0}\" fill=\"{}\"/>",
        style.figure_face_colour
    );
    let _ = writeln!(
        svg,
        "<rect x=\"{left}\" y=\"{top}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>",
        right - left,
        bottom - top,
        style.axes_face_colour
    );

    for (i, curve) in curves.iter().enumerate() {
        let points = curve
            .points
            .iter()
            .map(|&(x, y)| {
                let (px, py) = to_px(x, y);
                format!("{px:.2},{py:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            svg,
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"{SERIES_WIDTH}\" points=\"{points}\"/>",
            style.cycle_colour(i)
        );
    }

    let mut spines = vec![(left, top, left, bottom), (left, bottom, right, bottom)];
    if style.spines_top {
        spines.push((left, top, right, top));
    }
    if style.spines_right {
        spines.push((right, top, right, bottom));
    }
    for (ax, ay, bx, by) in spines {
        let _ = writeln!(
            svg,
            "<line x1=\"{ax:.1}\" y1=\"{ay:.1}\" x2=\"{bx:.1}\" y2=\"{by:.1}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            style.axes_edge_colour, style.axes_line_width
        );
    }

    if !curves.is_empty() {
        let legend_x = right - LEGEND_WIDTH - 6.0;
        let legend_y = top + 6.0;
        let _ = writeln!(
            svg,
            "<rect x=\"{legend_x:.1}\" y=\"{legend_y:.1}\" width=\"{LEGEND_WIDTH}\" height=\"{:.1}\" rx=\"3\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.6\"/>",
            LEGEND_ROW * curves.len() as f64 + 6.0,
            style.legend_face_colour,
            style.legend_edge_colour
        );
        for (i, curve) in curves.iter().enumerate() {
            let row_y = legend_y + 3.0 + LEGEND_ROW * (i as f64 + 0.5);
            let _ = writeln!(
                svg,
                "<line x1=\"{:.1}\" y1=\"{row_y:.1}\" x2=\"{:.1}\" y2=\"{row_y:.1}\" stroke=\"{}\" stroke-width=\"{SERIES_WIDTH}\"/>",
                legend_x + 6.0,
                legend_x + 6.0 + LEGEND_SWATCH,
                style.cycle_colour(i)
            );
            let _ = writeln!(
                svg,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"{font}\" font-size=\"{FONT_SIZE}\" fill=\"{}\">{}</text>",
                legend_x + 12.0 + LEGEND_SWATCH,
                row_y + FONT_SIZE / 3.0,
                style.text_colour,
                escape_xml(&curve.label)
            );
        }
    }

    svg.push_str("</svg>");
    svg
}
