use super::easing::Ease;
use super::tween::{Pose, TweenSpec};

/// Stages of the preloader. Each stage starts from the completion of the
/// previous stage's gating tween, so the sequence is strictly linear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderStage {
    Loading,
    PulseUp,
    PulseDown,
    FadeOut,
    Wipe,
    Done,
}

/// Elements the preloader animates. `Progress` is a virtual target that only
/// feeds the percentage readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Overlay,
    Logo,
    Readout,
    Progress,
    Content,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub parts: &'static [Part],
    pub spec: TweenSpec,
    /// The stage advances when this step completes.
    pub gates: bool,
}

pub const LOGO_RESTING: Pose = Pose::REST;
pub const LOGO_PULSED: Pose = Pose::REST.scale(1.3);
pub const FADED: Pose = Pose::REST.opacity(0.0).scale(0.8);
pub const OVERLAY_COLLAPSED: Pose = Pose::REST.scale_x(0.0);

pub const PROGRESS_DURATION_MS: f64 = 1800.0;

impl PreloaderStage {
    pub fn next(self) -> Self {
        match self {
            PreloaderStage::Loading => PreloaderStage::PulseUp,
            PreloaderStage::PulseUp => PreloaderStage::PulseDown,
            PreloaderStage::PulseDown => PreloaderStage::FadeOut,
            PreloaderStage::FadeOut => PreloaderStage::Wipe,
            PreloaderStage::Wipe | PreloaderStage::Done => PreloaderStage::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == PreloaderStage::Done
    }

    /// Whether the overlay still intercepts pointer input.
    pub fn blocks_input(self) -> bool {
        !self.is_done()
    }

    pub fn steps(self) -> Vec<Step> {
        match self {
            PreloaderStage::Loading => vec![
                Step {
                    parts: &[Part::Overlay],
                    spec: TweenSpec::new(OVERLAY_COLLAPSED, Pose::REST, 200.0, Ease::Power3InOut)
                        .origin("left center"),
                    gates: false,
                },
                Step {
                    parts: &[Part::Logo],
                    spec: TweenSpec::new(
                        Pose::REST.opacity(0.0).scale(0.5).y(-20.0),
                        LOGO_RESTING,
                        800.0,
                        Ease::Power3Out,
                    ),
                    gates: false,
                },
                Step {
                    parts: &[Part::Readout],
                    spec: TweenSpec::new(Pose::REST.opacity(0.0).y(10.0), Pose::REST, 600.0, Ease::Power3Out)
                        .delay(300.0),
                    gates: false,
                },
                Step {
                    parts: &[Part::Progress],
                    spec: TweenSpec::new(Pose::REST, Pose::REST, PROGRESS_DURATION_MS, Ease::Power2Out),
                    gates: true,
                },
            ],
            PreloaderStage::PulseUp => vec![Step {
                parts: &[Part::Logo],
                spec: TweenSpec::new(LOGO_RESTING, LOGO_PULSED, 400.0, Ease::Power2Out),
                gates: true,
            }],
            PreloaderStage::PulseDown => vec![Step {
                parts: &[Part::Logo],
                spec: TweenSpec::new(LOGO_PULSED, LOGO_RESTING, 300.0, Ease::Power2In),
                gates: true,
            }],
            PreloaderStage::FadeOut => vec![Step {
                parts: &[Part::Logo, Part::Readout],
                spec: TweenSpec::new(Pose::REST, FADED, 400.0, Ease::Power2In),
                gates: true,
            }],
            PreloaderStage::Wipe => vec![
                Step {
                    parts: &[Part::Overlay],
                    spec: TweenSpec::new(Pose::REST, OVERLAY_COLLAPSED, 800.0, Ease::Power3InOut)
                        .origin("right center"),
                    gates: true,
                },
                Step {
                    parts: &[Part::Content],
                    spec: TweenSpec::new(Pose::REST.opacity(0.0).y(30.0), Pose::REST, 1000.0, Ease::Power3Out),
                    gates: false,
                },
            ],
            PreloaderStage::Done => Vec::new(),
        }
    }
}

/// Readout value for an eased progress fraction.
pub fn percentage(progress: f64) -> u8 {
    (progress * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_chain_linearly_to_done() {
        let mut stage = PreloaderStage::Loading;
        let mut seen = vec![stage];
        while !stage.is_done() {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                PreloaderStage::Loading,
                PreloaderStage::PulseUp,
                PreloaderStage::PulseDown,
                PreloaderStage::FadeOut,
                PreloaderStage::Wipe,
                PreloaderStage::Done,
            ]
        );
        assert_eq!(PreloaderStage::Done.next(), PreloaderStage::Done);
    }

    #[test]
    fn every_running_stage_has_exactly_one_gate() {
        for stage in [
            PreloaderStage::Loading,
            PreloaderStage::PulseUp,
            PreloaderStage::PulseDown,
            PreloaderStage::FadeOut,
            PreloaderStage::Wipe,
        ] {
            let gates = stage.steps().iter().filter(|s| s.gates).count();
            assert_eq!(gates, 1, "{:?}", stage);
        }
        assert!(PreloaderStage::Done.steps().is_empty());
    }

    #[test]
    fn content_enters_alongside_the_wipe() {
        let steps = PreloaderStage::Wipe.steps();
        let content = steps.iter().find(|s| s.parts == [Part::Content]).unwrap();
        assert!(!content.gates);
        assert_eq!(content.spec.from.opacity, 0.0);
        assert_eq!(content.spec.to, Pose::REST);
    }

    #[test]
    fn overlay_only_blocks_input_until_done() {
        assert!(PreloaderStage::Wipe.blocks_input());
        assert!(!PreloaderStage::Done.blocks_input());
    }

    #[test]
    fn percentage_rounds_and_caps() {
        assert_eq!(percentage(0.0), 0);
        assert_eq!(percentage(0.004), 0);
        assert_eq!(percentage(0.506), 51);
        assert_eq!(percentage(1.0), 100);
        assert_eq!(percentage(1.2), 100);
    }

    #[test]
    fn readout_follows_decelerating_curve() {
        let progress = PreloaderStage::Loading
            .steps()
            .into_iter()
            .find(|s| s.parts == [Part::Progress])
            .unwrap();
        let halfway = percentage(progress.spec.sample(PROGRESS_DURATION_MS / 2.0).progress);
        assert!(halfway > 50);
        assert_eq!(percentage(progress.spec.sample(PROGRESS_DURATION_MS).progress), 100);
    }
}
