//! Severity-weighted colour shifting.
//!
//! A shifted colour is the linear blend `(1 - s) * original + s * simulated`
//! where `simulated` is the full dichromat simulation.

use crate::colour::{Colour, Rgb};
use crate::dichromat::{simulate, Deficiency};
use crate::error::ColourError;

/// Blend weight between the original colour (0) and full simulation (1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Severity(f64);

impl Severity {
    pub const NONE: Severity = Severity(0.0);
    pub const FULL: Severity = Severity(1.0);

    /// Creates a severity from a fraction, clamped to [0, 1]. NaN maps to 0.
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            Severity(0.0)
        } else {
            Severity(fraction.clamp(0.0, 1.0))
        }
    }

    /// Creates a severity from a percentage in [0, 100].
    pub fn from_percent(percent: f64) -> Self {
        Self::new(percent / 100.0)
    }

    /// Interprets a raw value as a fraction when it is at most 1 and as a
    /// percentage otherwise, so both `0.4` and `40` mean 40%.
    pub fn normalize(raw: f64) -> Self {
        if raw > 1.0 {
            Self::from_percent(raw)
        } else {
            Self::new(raw)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::FULL
    }
}

/// Shifts one colour towards its dichromat appearance.
pub fn colour_shift(rgb: Rgb, deficiency: Deficiency, severity: Severity) -> Rgb {
    let s = severity.value();
    if s == 0.0 {
        return rgb;
    }
    rgb.lerp(simulate(rgb, deficiency), s)
}

/// [`colour_shift`] with the deficiency given by name and a raw severity.
///
/// Returns `ColourError::UnknownDeficiencyType` for unrecognised names.
pub fn colour_shift_named(rgb: Rgb, deficiency: &str, severity: f64) -> Result<Rgb, ColourError> {
    Ok(colour_shift(
        rgb,
        deficiency.parse()?,
        Severity::normalize(severity),
    ))
}

/// Shifts every colour of a scheme, preserving order and count.
///
/// Hex entries are decoded first; any undecodable entry aborts the whole shift.
pub fn shift_scheme(
    scheme: &[Colour],
    deficiency: Deficiency,
    severity: Severity,
) -> Result<Vec<Rgb>, ColourError> {
    scheme
        .iter()
        .map(|c| c.decode().map(|rgb| colour_shift(rgb, deficiency, severity)))
        .collect()
}
