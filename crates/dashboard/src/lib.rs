#![deny(unsafe_code)]
//! Side-by-side comparison dashboard for colour-vision-deficiency previews.
//!
//! This crate sits between `cvd-core` (colour science, schemes, styling) and
//! the CLI. It names the vision modes a dashboard can show, generates the
//! demo curves, draws styled charts and assembles the HTML page.

pub mod chart;
pub mod curves;
pub mod page;

use std::fmt;

use cvd_core::{ColourError, ColourScheme, Deficiency, Severity};

pub use page::{Dashboard, DashboardOptions, Panel};

/// All vision mode names, in dashboard column order.
const MODE_NAMES: &[&str] = &["normal", "protanopia", "deuteranopia", "tritanopia"];

/// One dashboard column: unaffected vision or a simulated dichromacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisionMode {
    Normal,
    Dichromat(Deficiency),
}

impl VisionMode {
    /// Looks up a mode by name; deficiency short forms (`prot`, ...) are accepted.
    ///
    /// Returns `ColourError::UnknownDeficiencyType` if the name is not recognised.
    pub fn from_name(name: &str) -> Result<Self, ColourError> {
        if name.trim().eq_ignore_ascii_case("normal") {
            return Ok(VisionMode::Normal);
        }
        name.parse().map(VisionMode::Dichromat)
    }

    pub fn list_modes() -> &'static [&'static str] {
        MODE_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            VisionMode::Normal => "normal",
            VisionMode::Dichromat(d) => d.name(),
        }
    }

    /// The scheme as seen in this mode.
    pub fn apply(self, scheme: &ColourScheme, severity: Severity) -> ColourScheme {
        match self {
            VisionMode::Normal => scheme.clone(),
            VisionMode::Dichromat(d) => scheme.shifted(d, severity),
        }
    }
}

impl fmt::Display for VisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisionMode::Normal => f.write_str("Normal"),
            VisionMode::Dichromat(d) => write!(f, "{d}"),
        }
    }
}
