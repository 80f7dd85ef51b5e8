//! Dichromat simulation.
//!
//! Projects a colour's chromaticity along its confusion line onto the anchor
//! line of the missing cone type, rebuilds the colour at the original
//! luminance, then pulls it back towards the display gamut along the
//! direction of the neutral (white point) colour of equal luminance.

use std::fmt;
use std::str::FromStr;

use crate::colour::{xyz_to_rgb, ColourSample, Rgb, Xyz};
use crate::error::ColourError;

/// Display gamma used to move between encoded and quasi-linear channels.
const GAMMA: f64 = 2.2;

/// White point chromaticity.
const WHITE_X: f64 = 0.312713;
const WHITE_Y: f64 = 0.329016;
const WHITE_Z: f64 = 0.358271;

/// The three dichromacies, one per missing cone type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Long-wavelength (red) cones absent.
    Protanopia,
    /// Medium-wavelength (green) cones absent.
    Deuteranopia,
    /// Short-wavelength (blue) cones absent.
    Tritanopia,
}

/// Calibration constants for one deficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeficiencyProfile {
    /// Confusion point, u coordinate.
    pub confusion_u: f64,
    /// Confusion point, v coordinate.
    pub confusion_v: f64,
    /// Slope of the anchor line in (u, v).
    pub anchor_slope: f64,
    /// v-intercept of the anchor line.
    pub anchor_intercept: f64,
}

const PROTANOPIA: DeficiencyProfile = DeficiencyProfile {
    confusion_u: 0.735,
    confusion_v: 0.265,
    anchor_slope: 1.273463,
    anchor_intercept: -0.073894,
};

const DEUTERANOPIA: DeficiencyProfile = DeficiencyProfile {
    confusion_u: 1.14,
    confusion_v: -0.14,
    anchor_slope: 0.968437,
    anchor_intercept: 0.003331,
};

const TRITANOPIA: DeficiencyProfile = DeficiencyProfile {
    confusion_u: 0.171,
    confusion_v: -0.003,
    anchor_slope: 0.062921,
    anchor_intercept: 0.292119,
};

impl Deficiency {
    pub const ALL: [Deficiency; 3] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
    ];

    pub fn profile(self) -> &'static DeficiencyProfile {
        match self {
            Deficiency::Protanopia => &PROTANOPIA,
            Deficiency::Deuteranopia => &DEUTERANOPIA,
            Deficiency::Tritanopia => &TRITANOPIA,
        }
    }

    /// Lowercase full name, e.g. `"protanopia"`.
    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
        }
    }

    /// Short description of which cones are missing.
    pub fn description(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "red cones absent; a form of red-green colour blindness",
            Deficiency::Deuteranopia => {
                "green cones absent; another form of red-green colour blindness"
            }
            Deficiency::Tritanopia => {
                "short wavelength cones absent; a form of blue-yellow colour blindness"
            }
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Deficiency::Protanopia => "Protanopia",
            Deficiency::Deuteranopia => "Deuteranopia",
            Deficiency::Tritanopia => "Tritanopia",
        };
        f.write_str(name)
    }
}

impl FromStr for Deficiency {
    type Err = ColourError;

    /// Accepts full names and the four-letter short forms, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protanopia" | "prot" => Ok(Deficiency::Protanopia),
            "deuteranopia" | "deut" => Ok(Deficiency::Deuteranopia),
            "tritanopia" | "trit" => Ok(Deficiency::Tritanopia),
            _ => Err(ColourError::UnknownDeficiencyType(s.to_string())),
        }
    }
}

/// Maps an encoded channel back through the display gamma, clamped to [0, 1].
fn encode(v: f64) -> f64 {
    if v <= 0.0 {
        0.0
    } else if v >= 1.0 {
        1.0
    } else {
        v.powf(1.0 / GAMMA)
    }
}

/// Step needed along `delta` to bring `value` onto the nearest gamut face.
///
/// Zero when the delta is zero or the step would leave [0, 1].
fn gamut_adjustment(value: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let target = if value < 0.0 { 0.0 } else { 1.0 };
    let adj = (target - value) / delta;
    if (0.0..=1.0).contains(&adj) {
        adj
    } else {
        0.0
    }
}

/// Simulates how `rgb` appears to a dichromat with the given deficiency.
///
/// Input channels are expected in [0, 1]; the result is always in [0, 1].
pub fn simulate(rgb: Rgb, deficiency: Deficiency) -> Rgb {
    let p = deficiency.profile();
    let c = ColourSample::new(rgb.map(|v| v.powf(GAMMA)));
    let (u, v) = (c.chromaticity.u, c.chromaticity.v);
    let luminance = c.xyz.y;

    let neutral_x = WHITE_X * luminance / WHITE_Y;
    let neutral_z = WHITE_Z * luminance / WHITE_Y;

    // Confusion line through the colour and the confusion point.
    let slope = if u < p.confusion_u {
        (p.confusion_v - v) / (p.confusion_u - u)
    } else {
        (v - p.confusion_v) / (u - p.confusion_u)
    };
    let intercept = v - u * slope;

    // Where it meets the anchor line.
    let du = (p.anchor_intercept - intercept) / (slope - p.anchor_slope);
    let dv = slope * du + intercept;

    let simulated_xyz = Xyz {
        x: du * luminance / dv,
        y: luminance,
        z: (1.0 - (du + dv)) * luminance / dv,
    };
    let simulated = xyz_to_rgb(simulated_xyz);

    let correction = xyz_to_rgb(Xyz {
        x: neutral_x - simulated_xyz.x,
        y: 0.0,
        z: neutral_z - simulated_xyz.z,
    });

    let adjust = [
        gamut_adjustment(simulated.r, correction.r),
        gamut_adjustment(simulated.g, correction.g),
        gamut_adjustment(simulated.b, correction.b),
    ]
    .into_iter()
    .fold(0.0, f64::max);

    Rgb::new(
        encode(simulated.r + adjust * correction.r),
        encode(simulated.g + adjust * correction.g),
        encode(simulated.b + adjust * correction.b),
    )
}

/// [`simulate`] with the deficiency given by name.
///
/// Returns `ColourError::UnknownDeficiencyType` for unrecognised names.
pub fn simulate_named(rgb: Rgb, deficiency: &str) -> Result<Rgb, ColourError> {
    Ok(simulate(rgb, deficiency.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_TOL: f64 = 1e-5;

    fn assert_rgb_near(actual: Rgb, expected: (f64, f64, f64), label: &str) {
        let (r, g, b) = expected;
        assert!(
            (actual.r - r).abs() < FIXTURE_TOL
                && (actual.g - g).abs() < FIXTURE_TOL
                && (actual.b - b).abs() < FIXTURE_TOL,
            "{label}: expected ({r}, {g}, {b}), got {actual:?}"
        );
    }

    // -- Parsing --

    #[test]
    fn parses_full_and_short_names() {
        assert_eq!("protanopia".parse::<Deficiency>().unwrap(), Deficiency::Protanopia);
        assert_eq!("deut".parse::<Deficiency>().unwrap(), Deficiency::Deuteranopia);
        assert_eq!("Tritanopia".parse::<Deficiency>().unwrap(), Deficiency::Tritanopia);
        assert_eq!(" PROT ".parse::<Deficiency>().unwrap(), Deficiency::Protanopia);
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "achromatopsia".parse::<Deficiency>().unwrap_err();
        assert_eq!(err, ColourError::UnknownDeficiencyType("achromatopsia".into()));
        assert!(simulate_named(Rgb::WHITE, "mono").is_err());
    }

    #[test]
    fn display_and_name_round_trip_through_parse() {
        for d in Deficiency::ALL {
            assert_eq!(d.name().parse::<Deficiency>().unwrap(), d);
            assert_eq!(d.to_string().parse::<Deficiency>().unwrap(), d);
        }
    }

    #[test]
    fn profiles_hold_calibration_constants() {
        let p = Deficiency::Tritanopia.profile();
        assert_eq!(p.confusion_u, 0.171);
        assert_eq!(p.confusion_v, -0.003);
        assert_eq!(p.anchor_slope, 0.062921);
        assert_eq!(p.anchor_intercept, 0.292119);
    }

    // -- Reference outputs --

    #[test]
    fn protanopia_red_collapses_towards_olive() {
        let out = simulate(Rgb::new(1.0, 0.0, 0.0), Deficiency::Protanopia);
        assert_rgb_near(out, (0.566578, 0.505595, 0.129501), "protanopia red");
        assert!((out.r - out.g).abs() < 0.1, "red and green should converge: {out:?}");
        assert!(out.b < 0.15, "blue should stay low: {out:?}");
    }

    #[test]
    fn reference_primaries() {
        let cases = [
            (Deficiency::Protanopia, (0.0, 1.0, 0.0), (0.963426, 0.856136, 0.0)),
            (Deficiency::Protanopia, (0.0, 0.0, 1.0), (0.0, 0.292011, 0.612066)),
            (Deficiency::Deuteranopia, (1.0, 0.0, 0.0), (0.635489, 0.479289, 0.0)),
            (Deficiency::Deuteranopia, (0.0, 1.0, 0.0), (1.0, 0.826507, 0.560566)),
            (Deficiency::Tritanopia, (1.0, 0.0, 0.0), (0.992235, 0.092715, 0.0)),
            (Deficiency::Tritanopia, (0.0, 0.0, 1.0), (0.0, 0.336161, 0.350799)),
        ];
        for (d, (r, g, b), expected) in cases {
            assert_rgb_near(simulate(Rgb::new(r, g, b), d), expected, &format!("{d} ({r}, {g}, {b})"));
        }
    }

    #[test]
    fn reference_mixed_colours() {
        let sky = Rgb::new(0.2, 0.6, 0.9);
        assert_rgb_near(simulate(sky, Deficiency::Protanopia), (0.465599, 0.562414, 0.867485), "prot sky");
        assert_rgb_near(simulate(sky, Deficiency::Deuteranopia), (0.387254, 0.573160, 0.906447), "deut sky");
        assert_rgb_near(simulate(sky, Deficiency::Tritanopia), (0.0, 0.636540, 0.685754), "trit sky");

        let grey = Rgb::new(0.5, 0.5, 0.5);
        assert_rgb_near(simulate(grey, Deficiency::Protanopia), (0.508615, 0.497407, 0.498513), "prot grey");
    }

    #[test]
    fn black_and_white_are_fixed_points() {
        for d in Deficiency::ALL {
            assert_rgb_near(simulate(Rgb::BLACK, d), (0.0, 0.0, 0.0), &format!("{d} black"));
            assert_rgb_near(simulate(Rgb::WHITE, d), (1.0, 1.0, 1.0), &format!("{d} white"));
        }
    }

    // -- Helpers --

    #[test]
    fn gamut_adjustment_ignores_zero_delta_and_out_of_range_steps() {
        assert_eq!(gamut_adjustment(1.5, 0.0), 0.0);
        // Needs -0.5 / 1.0: negative step is rejected.
        assert_eq!(gamut_adjustment(1.5, 1.0), 0.0);
        // Needs -0.5 / -1.0 = 0.5.
        assert_eq!(gamut_adjustment(1.5, -1.0), 0.5);
        // Below zero pulls towards 0: (0 - -0.2) / 0.4 = 0.5.
        assert!((gamut_adjustment(-0.2, 0.4) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn encode_clamps_and_applies_inverse_gamma() {
        assert_eq!(encode(-0.1), 0.0);
        assert_eq!(encode(1.3), 1.0);
        assert!((encode(0.25) - 0.25_f64.powf(1.0 / 2.2)).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn deficiency() -> impl Strategy<Value = Deficiency> {
            prop_oneof![
                Just(Deficiency::Protanopia),
                Just(Deficiency::Deuteranopia),
                Just(Deficiency::Tritanopia),
            ]
        }

        proptest! {
            #[test]
            fn output_stays_in_unit_cube(
                r in 0.0_f64..=1.0,
                g in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
                d in deficiency(),
            ) {
                let out = simulate(Rgb::new(r, g, b), d);
                for c in [out.r, out.g, out.b] {
                    prop_assert!((0.0..=1.0).contains(&c), "{d} ({r}, {g}, {b}) -> {out:?}");
                }
            }

            #[test]
            fn simulation_is_deterministic(
                r in 0.0_f64..=1.0,
                g in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
                d in deficiency(),
            ) {
                let a = simulate(Rgb::new(r, g, b), d);
                let b2 = simulate(Rgb::new(r, g, b), d);
                prop_assert_eq!(a.r.to_bits(), b2.r.to_bits());
                prop_assert_eq!(a.g.to_bits(), b2.g.to_bits());
                prop_assert_eq!(a.b.to_bits(), b2.b.to_bits());
            }
        }
    }
}
