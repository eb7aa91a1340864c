use std::f64::consts::PI;

/// Easing curves, named after the GSAP eases the animations were designed with.
/// `Power2` is cubic, `Power3` is quartic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    Power3Out,
    Power3InOut,
    SineInOut,
    BackOut(f64),
}

impl Ease {
    /// Maps linear progress `t` in 0..=1 to eased progress. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t.powi(3),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power3InOut,
        Ease::SineInOut,
        Ease::BackOut(1.7),
    ];

    #[test]
    fn every_curve_is_anchored_at_both_ends() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", ease);
        }
    }

    #[test]
    fn out_curves_decelerate() {
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power2Out.apply(0.5));
        assert!(Ease::Power2In.apply(0.5) < 0.5);
    }

    #[test]
    fn in_out_curves_are_symmetric() {
        assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
    }
}
