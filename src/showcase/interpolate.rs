use glam::Vec3;

use super::keyframe::Keyframe;

/// Fraction of a segment over which two captions overlap
pub const DEFAULT_CROSSFADE_GAP: f32 = 0.3;

/// Linear interpolation, exact at both endpoints
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Componentwise lerp
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Active keyframe pair for a progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Outgoing keyframe, always in [0, count - 2]
    pub index: usize,
    /// Incoming keyframe (`index + 1`)
    pub next: usize,
    /// Position inside the segment in [0, 1]
    pub local: f32,
}

impl Segment {
    /// Locate the segment for `progress` among `count` keyframes.
    ///
    /// Every segment has width `1 / (count - 1)`. The index is clamped to
    /// `count - 2`, so the final keyframe is reached only at `progress == 1`
    /// with `local == 1`.
    ///
    /// # Panics
    /// Panics if `count < 2`.
    pub fn locate(progress: f32, count: usize) -> Self {
        assert!(count >= 2, "at least two keyframes are required");

        let progress = progress.clamp(0.0, 1.0);
        let width = 1.0 / (count - 1) as f32;
        let index = ((progress / width).floor() as usize).min(count - 2);
        let local = ((progress - index as f32 * width) / width).clamp(0.0, 1.0);

        Self {
            index,
            next: index + 1,
            local,
        }
    }

    /// Caption opacity of keyframe `i` during this segment.
    ///
    /// The outgoing caption fades out over `[0, 1 - gap)`, the incoming one
    /// fades in over `(gap, 1]`. All other keyframes stay hidden.
    pub fn opacity(&self, i: usize, gap: f32) -> f32 {
        let t = self.local;
        let span = 1.0 - gap;

        if i == self.index {
            if t < span {
                1.0 - t / span
            } else {
                0.0
            }
        } else if i == self.next {
            if t > gap {
                (t - gap) / span
            } else {
                0.0
            }
        } else {
            0.0
        }
    }
}

/// Interpolated pose for one progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepData {
    pub rotation: Vec3,
    pub position: Vec3,
    pub step_index: usize,
    pub next_index: usize,
    pub local_progress: f32,
}

/// Interpolate rotation and position between the active keyframe pair.
///
/// # Panics
/// Panics if `keyframes` has fewer than two entries.
pub fn step_data(progress: f32, keyframes: &[Keyframe]) -> StepData {
    let segment = Segment::locate(progress, keyframes.len());
    let from = &keyframes[segment.index];
    let to = &keyframes[segment.next];

    StepData {
        rotation: lerp_vec3(from.rotation, to.rotation, segment.local),
        position: lerp_vec3(from.position, to.position, segment.local),
        step_index: segment.index,
        next_index: segment.next,
        local_progress: segment.local,
    }
}

/// One caption opacity per keyframe; at most two are non-zero
pub fn caption_opacities(progress: f32, count: usize, gap: f32) -> Vec<f32> {
    let segment = Segment::locate(progress, count);
    (0..count).map(|i| segment.opacity(i, gap)).collect()
}

/// Hero title fades out linearly over the whole page
pub fn hero_opacity(progress: f32) -> f32 {
    (1.0 - progress).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.24, 0.62, 0.0), 0.24);
        assert_eq!(lerp(0.24, 0.62, 1.0), 0.62);
        assert_eq!(lerp(-1.01, -0.1, 1.0), -0.1);
    }

    #[test]
    fn lerp_midpoint() {
        assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn segment_start() {
        let seg = Segment::locate(0.0, 3);
        assert_eq!(seg.index, 0);
        assert_eq!(seg.next, 1);
        assert_eq!(seg.local, 0.0);
    }

    #[test]
    fn segment_end_clamped() {
        let seg = Segment::locate(1.0, 3);
        assert_eq!(seg.index, 1);
        assert_eq!(seg.next, 2);
        assert_eq!(seg.local, 1.0);
    }

    #[test]
    fn segment_boundary_moves_to_next() {
        let seg = Segment::locate(0.5, 3);
        assert_eq!(seg.index, 1);
        assert_eq!(seg.local, 0.0);
    }

    #[test]
    fn two_keyframes_single_segment() {
        let seg = Segment::locate(0.4, 2);
        assert_eq!(seg.index, 0);
        assert!((seg.local - 0.4).abs() < 1e-6);
    }

    #[test]
    #[should_panic]
    fn single_keyframe_rejected() {
        Segment::locate(0.5, 1);
    }

    #[test]
    fn opacity_fade_out_and_in() {
        let seg = Segment { index: 0, next: 1, local: 0.35 };
        assert!((seg.opacity(0, 0.3) - 0.5).abs() < 1e-6);
        assert!((seg.opacity(1, 0.3) - 0.05 / 0.7).abs() < 1e-6);
        assert_eq!(seg.opacity(2, 0.3), 0.0);
    }

    #[test]
    fn opacity_outside_window() {
        let early = Segment { index: 0, next: 1, local: 0.2 };
        assert_eq!(early.opacity(1, 0.3), 0.0);

        let late = Segment { index: 0, next: 1, local: 0.75 };
        assert_eq!(late.opacity(0, 0.3), 0.0);
    }

    #[test]
    fn hero_fades_with_progress() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(hero_opacity(1.0), 0.0);
        assert!((hero_opacity(0.25) - 0.75).abs() < 1e-6);
    }
}
