//! SVG swatch rendering of a colour scheme.
//!
//! The swatch is a 250×130 rounded card filled with the background colour,
//! carrying up to eight 50×50 rounded tiles in a 4×2 grid. Each tile is
//! outlined in the foreground colour. The two hyperlink slots at the end of
//! a scheme are not drawn.

use std::fmt::Write;

use crate::colour::Rgb;
use crate::error::ColourError;
use crate::scheme::ColourScheme;

pub const CANVAS_WIDTH: u32 = 250;
pub const CANVAS_HEIGHT: u32 = 130;
const CORNER_RADIUS: u32 = 10;
const TILE_SIZE: u32 = 50;
const TILE_GAP: u32 = 10;
const TILE_COLUMNS: usize = 4;
const MAX_TILES: usize = 8;
const OUTLINE_WIDTH: u32 = 2;

/// Renders a scheme given as colours in slot order.
///
/// Slot 1 fills the card, slot 0 outlines the tiles, and slots
/// `0..len - 2` become tiles. Returns `ColourError::InvalidScheme` when
/// fewer than two colours are given.
pub fn theme_to_svg(colours: &[Rgb]) -> Result<String, ColourError> {
    if colours.len() < 2 {
        return Err(ColourError::InvalidScheme(format!(
            "a swatch needs at least 2 colours, got {}",
            colours.len()
        )));
    }
    let outline = colours[0].to_css();
    let background = colours[1].to_css();

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" viewBox=\"0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}\">\n"
    );
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" rx=\"{CORNER_RADIUS}\" style=\"fill: {background}\"/>"
    );

    let tiles = colours.len() - 2;
    for (i, colour) in colours.iter().take(tiles.min(MAX_TILES)).enumerate() {
        let step = TILE_SIZE + TILE_GAP;
        let x = step * (i % TILE_COLUMNS) as u32 + TILE_GAP;
        let y = (if i >= TILE_COLUMNS { step } else { 0 }) + TILE_GAP;
        let _ = writeln!(
            svg,
            "<rect x=\"{x}\" y=\"{y}\" width=\"{TILE_SIZE}\" height=\"{TILE_SIZE}\" rx=\"{CORNER_RADIUS}\" style=\"fill: {}; stroke-width: {OUTLINE_WIDTH}; stroke: {outline}\"/>",
            colour.to_css()
        );
    }
    svg.push_str("</svg>");
    Ok(svg)
}

/// Renders a full ten-slot scheme.
pub fn scheme_to_svg(scheme: &ColourScheme) -> String {
    // Ten colours always satisfy the two-colour minimum.
    theme_to_svg(scheme.colours()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dichromat::Deficiency;
    use crate::scheme::Catalog;
    use crate::shift::Severity;

    fn rect_count(svg: &str) -> usize {
        svg.matches("<rect").count()
    }

    fn grey_ramp(n: usize) -> Vec<Rgb> {
        (0..n)
            .map(|i| {
                let v = i as f64 / n.max(1) as f64;
                Rgb::new(v, v, v)
            })
            .collect()
    }

    #[test]
    fn full_scheme_has_background_and_eight_tiles() {
        let scheme = Catalog::builtin().get("twilight").unwrap().clone();
        let svg = scheme_to_svg(&scheme);
        assert_eq!(rect_count(&svg), 1 + 8);
        assert_eq!(svg.matches("width=\"250\" height=\"130\" rx=\"10\"").count(), 1);
        assert_eq!(svg.matches("width=\"50\" height=\"50\"").count(), 8);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn background_uses_slot_one() {
        let colours = vec![Rgb::BLACK, Rgb::new(1.0, 0.0, 0.5), Rgb::WHITE];
        let svg = theme_to_svg(&colours).unwrap();
        assert!(svg.contains("rx=\"10\" style=\"fill: rgb(255, 0, 128)\"/>"), "{svg}");
    }

    #[test]
    fn tiles_are_outlined_in_slot_zero() {
        let colours = vec![Rgb::new(0.0, 0.0, 1.0), Rgb::WHITE, Rgb::BLACK, Rgb::BLACK];
        let svg = theme_to_svg(&colours).unwrap();
        assert_eq!(svg.matches("stroke: rgb(0, 0, 255)").count(), 2);
    }

    #[test]
    fn tile_grid_positions() {
        let svg = theme_to_svg(&grey_ramp(10)).unwrap();
        assert!(svg.contains("<rect x=\"10\" y=\"10\""));
        assert!(svg.contains("<rect x=\"190\" y=\"10\""));
        assert!(svg.contains("<rect x=\"10\" y=\"70\""));
        assert!(svg.contains("<rect x=\"190\" y=\"70\""));
    }

    #[test]
    fn tile_count_is_length_minus_two() {
        for n in 2..=10 {
            let svg = theme_to_svg(&grey_ramp(n)).unwrap();
            assert_eq!(rect_count(&svg), 1 + (n - 2), "n = {n}");
        }
    }

    #[test]
    fn long_input_is_capped_at_eight_tiles() {
        let svg = theme_to_svg(&grey_ramp(14)).unwrap();
        assert_eq!(rect_count(&svg), 9);
    }

    #[test]
    fn too_few_colours_is_an_error() {
        assert!(matches!(
            theme_to_svg(&[Rgb::BLACK]),
            Err(ColourError::InvalidScheme(_))
        ));
        assert!(theme_to_svg(&[]).is_err());
    }

    #[test]
    fn shifted_scheme_renders() {
        let scheme = Catalog::builtin().get("traffic").unwrap().clone();
        let shifted = scheme.shifted(Deficiency::Protanopia, Severity::FULL);
        let svg = theme_to_svg(shifted.colours()).unwrap();
        assert_eq!(rect_count(&svg), 9);
        assert_ne!(svg, scheme_to_svg(&scheme));
    }
}
