#![deny(unsafe_code)]
//! Colour-vision-deficiency simulation over plotting colour schemes.
//!
//! Provides colour-space conversions (`Rgb`, `Hsl`, `Xyz`, chromaticity),
//! the dichromat simulation for protanopia, deuteranopia and tritanopia,
//! severity-weighted shifting of whole schemes, SVG swatches, and plot
//! styling derived from a named scheme.

pub mod colour;
pub mod dichromat;
pub mod error;
pub mod scheme;
pub mod shift;
pub mod style;
pub mod swatch;

pub use colour::{Colour, ColourSample, Hsl, InputRange, Rgb, Xyz};
pub use dichromat::{simulate, Deficiency, DeficiencyProfile};
pub use error::ColourError;
pub use scheme::{Catalog, ColourScheme, SchemeRecord, Slot, DEFAULT_SCHEME};
pub use shift::{colour_shift, shift_scheme, Severity};
pub use style::{darken, lighten, DocumentType, StyleConfig, StyleSession};
pub use swatch::{scheme_to_svg, theme_to_svg};
