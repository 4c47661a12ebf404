pub mod interpolate;
pub mod keyframe;
pub mod overlay;
pub mod page;
pub mod tween;

pub use interpolate::{
    caption_opacities, hero_opacity, lerp, lerp_vec3, step_data, Segment, StepData,
    DEFAULT_CROSSFADE_GAP,
};
pub use keyframe::{default_keyframes, Align, Caption, CaptionBody, Keyframe};
pub use overlay::CaptionOverlay;
pub use page::{PageFrame, ShowcasePage};
pub use tween::{Tween, DEFAULT_TWEEN_DURATION};

use anyhow::{ensure, Result};

/// Validated keyframe sequence with its crossfade policy
#[derive(Debug, Clone)]
pub struct Showcase {
    keyframes: Vec<Keyframe>,
    gap: f32,
}

/// Everything derived from one progress value
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseFrame {
    pub progress: f32,
    pub step: StepData,
    pub caption_opacities: Vec<f32>,
    pub hero_opacity: f32,
}

impl Showcase {
    pub fn new(keyframes: Vec<Keyframe>, gap: f32) -> Result<Self> {
        ensure!(
            keyframes.len() >= 2,
            "showcase needs at least two keyframes, got {}",
            keyframes.len()
        );
        ensure!(
            (0.0..1.0).contains(&gap),
            "crossfade gap must be in [0, 1), got {gap}"
        );
        Ok(Self { keyframes, gap })
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Pose, caption opacities and hero fade for `progress`
    pub fn frame(&self, progress: f32) -> ShowcaseFrame {
        ShowcaseFrame {
            progress,
            step: step_data(progress, &self.keyframes),
            caption_opacities: caption_opacities(progress, self.keyframes.len(), self.gap),
            hero_opacity: hero_opacity(progress),
        }
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            keyframes: default_keyframes(),
            gap: DEFAULT_CROSSFADE_GAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_single_keyframe() {
        let mut keyframes = default_keyframes();
        keyframes.truncate(1);
        assert!(Showcase::new(keyframes, 0.3).is_err());
    }

    #[test]
    fn rejects_gap_that_breaks_crossfade() {
        assert!(Showcase::new(default_keyframes(), 1.0).is_err());
        assert!(Showcase::new(default_keyframes(), -0.1).is_err());
    }

    #[test]
    fn frame_at_start_shows_first_caption() {
        let frame = Showcase::default().frame(0.0);
        assert_eq!(frame.caption_opacities, vec![1.0, 0.0, 0.0]);
        assert_eq!(frame.hero_opacity, 1.0);
        assert_eq!(frame.step.step_index, 0);
    }
}
