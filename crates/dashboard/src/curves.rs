//! Demo data for the comparison charts.
//!
//! Each curve samples a row of 2D OpenSimplex noise, so neighbouring curves
//! look related but distinct. The same seed always produces the same curves.

use noise::{NoiseFn, OpenSimplex};
use serde::Serialize;

/// One curve per accent colour.
pub const DEFAULT_CURVES: usize = 6;
/// Points per curve.
pub const DEFAULT_SAMPLES: usize = 200;
/// Curves span x in [0, X_MAX].
pub const X_MAX: f64 = 5.0;

/// A labelled polyline in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    /// Smallest and largest y value, or `None` for an empty curve.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, &(_, y)| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

/// Evenly spaced x values over [0, X_MAX], inclusive at both ends.
fn linspace(samples: usize) -> impl Iterator<Item = f64> {
    (0..samples).map(move |i| {
        if samples <= 1 {
            0.0
        } else {
            X_MAX * i as f64 / (samples - 1) as f64
        }
    })
}

/// Generates `count` noise curves of `samples` points each, labelled
/// `Accent1`, `Accent2`, ...
pub fn demo_curves(seed: u32, count: usize, samples: usize) -> Vec<Curve> {
    let noise = OpenSimplex::new(seed);
    (0..count)
        .map(|j| Curve {
            label: format!("Accent{}", j + 1),
            points: linspace(samples)
                .map(|x| (x, noise.get([x, j as f64])))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape() {
        let curves = demo_curves(0, DEFAULT_CURVES, DEFAULT_SAMPLES);
        assert_eq!(curves.len(), 6);
        for (j, curve) in curves.iter().enumerate() {
            assert_eq!(curve.label, format!("Accent{}", j + 1));
            assert_eq!(curve.points.len(), 200);
            assert_eq!(curve.points[0].0, 0.0);
            assert!((curve.points[199].0 - X_MAX).abs() < 1e-12);
        }
    }

    #[test]
    fn same_seed_same_curves() {
        assert_eq!(demo_curves(42, 3, 50), demo_curves(42, 3, 50));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(demo_curves(1, 2, 50), demo_curves(2, 2, 50));
    }

    #[test]
    fn single_sample_sits_at_origin() {
        let curves = demo_curves(7, 1, 1);
        assert_eq!(curves[0].points.len(), 1);
        assert_eq!(curves[0].points[0].0, 0.0);
    }

    #[test]
    fn y_bounds_of_empty_and_filled_curves() {
        let empty = Curve {
            label: "x".into(),
            points: vec![],
        };
        assert_eq!(empty.y_bounds(), None);
        let curve = Curve {
            label: "x".into(),
            points: vec![(0.0, 0.5), (1.0, -0.25), (2.0, 0.1)],
        };
        assert_eq!(curve.y_bounds(), Some((-0.25, 0.5)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn noise_values_are_finite_and_bounded(seed in any::<u32>(), count in 1usize..8) {
                for curve in demo_curves(seed, count, 64) {
                    for &(x, y) in &curve.points {
                        prop_assert!(y.is_finite(), "non-finite y at x={x}");
                        prop_assert!(y.abs() <= 1.5, "y={y} at x={x}");
                    }
                }
            }
        }
    }
}
