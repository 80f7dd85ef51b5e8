//! Plot styling derived from a colour scheme.
//!
//! [`StyleConfig`] is the record a plotting layer consumes: fore/background
//! colours, axis and tick colours, a 12-colour cycle, line widths, marker
//! size and figure size. [`StyleSession`] holds the active scheme for a
//! caller; it must be initialised before any style lookup.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::colour::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Rgb};
use crate::error::ColourError;
use crate::scheme::{Catalog, ColourScheme, DEFAULT_SCHEME};

/// Lightness shift applied to the second half of the colour cycle.
pub const CYCLE_SHADE: f64 = 0.3;

/// Target document, which fixes line weights, figure size and framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Report,
    Presentation,
}

impl DocumentType {
    /// Presentations default to dark mode, reports to light.
    pub fn default_dark(self) -> bool {
        matches!(self, DocumentType::Presentation)
    }

    pub fn line_width(self) -> f64 {
        match self {
            DocumentType::Report => 0.8,
            DocumentType::Presentation => 1.4,
        }
    }

    pub fn marker_size(self) -> f64 {
        match self {
            DocumentType::Report => 6.0,
            DocumentType::Presentation => 4.0,
        }
    }

    /// Figure size in inches, (width, height).
    pub fn figure_size(self) -> (f64, f64) {
        match self {
            DocumentType::Report => (5.0, 3.5),
            DocumentType::Presentation => (6.4, 3.6),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Report => f.write_str("report"),
            DocumentType::Presentation => f.write_str("presentation"),
        }
    }
}

impl FromStr for DocumentType {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(DocumentType::Report),
            "presentation" => Ok(DocumentType::Presentation),
            _ => Err(ColourError::InvalidDocumentType(s.to_string())),
        }
    }
}

/// Values above 1 are percentages.
fn shade_amount(p: f64) -> f64 {
    let p = if p > 1.0 { p / 100.0 } else { p };
    p.clamp(0.0, 1.0)
}

/// Moves lightness towards white: `l' = 1 - (1 - l)(1 - p)`.
pub fn lighten_rgb(rgb: Rgb, p: f64) -> Rgb {
    let p = shade_amount(p);
    let mut hsl = rgb_to_hsl(rgb);
    hsl.l = 1.0 - (1.0 - hsl.l) * (1.0 - p);
    hsl_to_rgb(hsl)
}

/// Moves lightness towards black: `l' = l(1 - p)`.
pub fn darken_rgb(rgb: Rgb, p: f64) -> Rgb {
    let p = shade_amount(p);
    let mut hsl = rgb_to_hsl(rgb);
    hsl.l *= 1.0 - p;
    hsl_to_rgb(hsl)
}

/// Lightens a hex colour by `p` (fraction, or percentage when above 1).
pub fn lighten(hex: &str, p: f64) -> Result<String, ColourError> {
    Ok(rgb_to_hex(lighten_rgb(hex_to_rgb(hex)?, p)))
}

/// Darkens a hex colour by `p` (fraction, or percentage when above 1).
pub fn darken(hex: &str, p: f64) -> Result<String, ColourError> {
    Ok(rgb_to_hex(darken_rgb(hex_to_rgb(hex)?, p)))
}

/// Plot styling for one scheme, document type and mode. Colours are hex strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleConfig {
    pub document_type: DocumentType,
    pub dark: bool,
    pub text_colour: String,
    pub axes_label_colour: String,
    pub axes_edge_colour: String,
    pub tick_colour: String,
    pub axes_face_colour: String,
    pub figure_face_colour: String,
    pub legend_edge_colour: String,
    pub legend_face_colour: String,
    pub savefig_face_colour: String,
    pub spines_top: bool,
    pub spines_right: bool,
    /// Six accents followed by their lightened (light mode) or darkened
    /// (dark mode) variants.
    pub colour_cycle: Vec<String>,
    pub axes_line_width: f64,
    pub tick_major_width: f64,
    pub marker_size: f64,
    pub figure_size: (f64, f64),
    pub font_family: String,
}

impl StyleConfig {
    /// Builds the style for a scheme already in the requested mode.
    ///
    /// `dark` only selects darkened rather than lightened cycle variants;
    /// the foreground/background swap is the caller's (see [`ColourScheme::dark`]).
    pub fn from_scheme(scheme: &ColourScheme, document_type: DocumentType, dark: bool) -> Self {
        let foreground = rgb_to_hex(scheme.foreground());
        let background = rgb_to_hex(scheme.background());
        let accent1 = rgb_to_hex(scheme.accents()[0]);
        let white = rgb_to_hex(Rgb::WHITE);

        let shade = |c: Rgb| {
            if dark {
                darken_rgb(c, CYCLE_SHADE)
            } else {
                lighten_rgb(c, CYCLE_SHADE)
            }
        };
        let colour_cycle = scheme
            .accents()
            .iter()
            .map(|&c| rgb_to_hex(c))
            .chain(scheme.accents().iter().map(|&c| rgb_to_hex(shade(c))))
            .collect();

        let presentation = document_type == DocumentType::Presentation;
        let (edge, figure_face) = if presentation {
            (accent1, background.clone())
        } else {
            (foreground.clone(), white)
        };
        let width = document_type.line_width();

        Self {
            document_type,
            dark,
            text_colour: foreground.clone(),
            axes_label_colour: foreground.clone(),
            axes_edge_colour: edge.clone(),
            tick_colour: edge,
            axes_face_colour: background.clone(),
            savefig_face_colour: figure_face.clone(),
            figure_face_colour: figure_face,
            legend_edge_colour: foreground,
            legend_face_colour: background,
            spines_top: !presentation,
            spines_right: !presentation,
            colour_cycle,
            axes_line_width: width,
            tick_major_width: width,
            marker_size: document_type.marker_size(),
            figure_size: document_type.figure_size(),
            font_family: "serif".to_string(),
        }
    }

    /// Cycle colour for series `i`, wrapping around.
    pub fn cycle_colour(&self, i: usize) -> &str {
        &self.colour_cycle[i % self.colour_cycle.len()]
    }
}

/// The scheme and style chosen by the last successful [`StyleSession::init`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveStyle {
    pub scheme: ColourScheme,
    pub document_type: DocumentType,
    pub dark: bool,
    pub config: StyleConfig,
}

/// Owns a catalog and the currently active scheme.
///
/// Re-initialising replaces the active scheme; a failed initialisation
/// leaves the previous one in place.
#[derive(Debug, Clone)]
pub struct StyleSession {
    catalog: Catalog,
    active: Option<ActiveStyle>,
}

impl StyleSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Activates `scheme` for `document_type`.
    ///
    /// `dark` defaults to [`DocumentType::default_dark`]. In dark mode the
    /// scheme's foreground and background are swapped.
    pub fn init(
        &mut self,
        scheme: &str,
        document_type: DocumentType,
        dark: Option<bool>,
    ) -> Result<&ActiveStyle, ColourError> {
        let dark = dark.unwrap_or_else(|| document_type.default_dark());
        let base = self.catalog.get(scheme)?;
        let scheme = if dark { base.dark() } else { base.clone() };
        let config = StyleConfig::from_scheme(&scheme, document_type, dark);
        tracing::debug!(scheme = scheme.name(), %document_type, dark, "activated style");
        Ok(&*self.active.insert(ActiveStyle {
            scheme,
            document_type,
            dark,
            config,
        }))
    }

    /// [`init`](Self::init) with the document type given by name.
    ///
    /// The document type is validated before the scheme name.
    pub fn init_named(
        &mut self,
        scheme: &str,
        document_type: &str,
        dark: Option<bool>,
    ) -> Result<&ActiveStyle, ColourError> {
        let document_type = document_type.parse()?;
        self.init(scheme, document_type, dark)
    }

    /// Activates the default scheme as a light report.
    pub fn init_default(&mut self) -> Result<&ActiveStyle, ColourError> {
        self.init(DEFAULT_SCHEME, DocumentType::Report, None)
    }

    pub fn active(&self) -> Result<&ActiveStyle, ColourError> {
        self.active.as_ref().ok_or(ColourError::SchemeNotInitialized)
    }

    pub fn scheme(&self) -> Result<&ColourScheme, ColourError> {
        self.active().map(|a| &a.scheme)
    }

    pub fn style(&self) -> Result<&StyleConfig, ColourError> {
        self.active().map(|a| &a.config)
    }
}

impl Default for StyleSession {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
