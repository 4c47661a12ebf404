use std::cell::Cell;
use std::rc::Rc;

use super::interpolate::StepData;
use super::tween::Tween;
use super::Showcase;
use crate::config::ShowcaseConfig;
use crate::core::{ListenerGuard, ScrollCommand, ScrollTracker};

/// What the renderer and the overlay draw for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    pub progress: f32,
    pub step: StepData,
    /// Displayed caption opacities, after tweening
    pub caption_opacities: Vec<f32>,
    /// Displayed hero title opacity, after tweening
    pub hero_opacity: f32,
    pub captions_visible: bool,
}

/// Mounted showcase view: scroll tracking feeding the interpolator.
///
/// Mounting registers a scroll listener; dropping the page deregisters it.
pub struct ShowcasePage {
    showcase: Showcase,
    tracker: ScrollTracker,
    progress: Rc<Cell<f32>>,
    _listener: ListenerGuard,
    caption_tweens: Vec<Tween>,
    hero_tween: Tween,
    caption_reveal: f32,
    active_step: usize,
}

impl ShowcasePage {
    pub fn mount(config: &ShowcaseConfig) -> Self {
        let showcase = config.showcase.clone();
        let mut tracker = ScrollTracker::new(config.page_height);

        let progress = Rc::new(Cell::new(0.0));
        let listener = {
            let progress = progress.clone();
            tracker.subscribe(move |p| progress.set(p))
        };

        // Start at rest on the values for the top of the page
        let initial = showcase.frame(0.0);
        let caption_tweens = initial
            .caption_opacities
            .iter()
            .map(|&opacity| Tween::new(opacity, config.tween_duration))
            .collect();
        let hero_tween = Tween::new(initial.hero_opacity, config.tween_duration);

        Self {
            showcase,
            tracker,
            progress,
            _listener: listener,
            caption_tweens,
            hero_tween,
            caption_reveal: config.caption_reveal,
            active_step: initial.step.step_index,
        }
    }

    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    /// Latest progress reported by the scroll listener
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    pub fn resize(&mut self, viewport_height: f32) {
        self.tracker.resize(viewport_height);
    }

    pub fn apply(&mut self, command: ScrollCommand) -> f32 {
        match command {
            ScrollCommand::By(delta) => self.tracker.scroll_by(delta),
            ScrollCommand::ToTop => self.tracker.scroll_to(0.0),
            ScrollCommand::ToBottom => self.tracker.scroll_to_end(),
        }
    }

    /// Advance caption fades by `delta` seconds and build the frame
    pub fn update(&mut self, delta: f32) -> PageFrame {
        let progress = self.progress.get();
        let target = self.showcase.frame(progress);

        if target.step.step_index != self.active_step {
            log::debug!(
                "Segment {} -> {} at progress {:.3}",
                self.active_step,
                target.step.step_index,
                progress
            );
            self.active_step = target.step.step_index;
        }

        let caption_opacities = self
            .caption_tweens
            .iter_mut()
            .zip(&target.caption_opacities)
            .map(|(tween, &opacity)| {
                tween.retarget(opacity);
                tween.advance(delta)
            })
            .collect();

        self.hero_tween.retarget(target.hero_opacity);
        let hero_opacity = self.hero_tween.advance(delta);

        PageFrame {
            progress,
            step: target.step,
            caption_opacities,
            hero_opacity,
            captions_visible: progress > self.caption_reveal,
        }
    }
}
