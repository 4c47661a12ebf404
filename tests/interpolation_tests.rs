use glam::Vec3;
use scroll_showcase::showcase::{
    caption_opacities, default_keyframes, lerp, lerp_vec3, step_data, Align, Caption, Keyframe,
    Segment, DEFAULT_CROSSFADE_GAP,
};

fn sample_progress() -> impl Iterator<Item = f32> {
    (0..=1000).map(|i| i as f32 / 1000.0)
}

fn numbered_keyframes(count: usize) -> Vec<Keyframe> {
    (0..count)
        .map(|i| {
            Keyframe::new(
                Vec3::splat(i as f32),
                Vec3::new(i as f32 * 0.1, 0.0, -(i as f32)),
                Caption::text(format!("Step {i}"), "body"),
                Align::Center,
            )
        })
        .collect()
}

// ============================================================================
// Segment selection
// ============================================================================

#[test]
fn test_segment_index_in_range_for_all_progress() {
    for count in 2..=6 {
        for p in sample_progress() {
            let seg = Segment::locate(p, count);
            assert!(seg.index <= count - 2, "count {count}, p {p}: index {}", seg.index);
            assert_eq!(seg.next, seg.index + 1);
            assert!((0.0..=1.0).contains(&seg.local), "p {p}: local {}", seg.local);
        }
    }
}

#[test]
fn test_last_keyframe_reached_only_at_end() {
    let seg = Segment::locate(1.0, 3);
    assert_eq!((seg.index, seg.next, seg.local), (1, 2, 1.0));

    let before = Segment::locate(0.999, 3);
    assert_eq!(before.index, 1);
    assert!(before.local < 1.0);
}

// ============================================================================
// Pose interpolation
// ============================================================================

#[test]
fn test_pose_at_start_matches_first_keyframe() {
    let keyframes = default_keyframes();
    let step = step_data(0.0, &keyframes);

    assert_eq!(step.rotation, keyframes[0].rotation);
    assert_eq!(step.position, keyframes[0].position);
    assert_eq!(step.step_index, 0);
}

#[test]
fn test_pose_at_end_matches_last_keyframe() {
    let keyframes = default_keyframes();
    let step = step_data(1.0, &keyframes);

    assert_eq!(step.rotation, keyframes[2].rotation);
    assert_eq!(step.position, keyframes[2].position);
    assert_eq!(step.step_index, 1);
    assert_eq!(step.next_index, 2);
    assert_eq!(step.local_progress, 1.0);
}

#[test]
fn test_pose_endpoints_for_many_keyframes() {
    let keyframes = numbered_keyframes(5);
    assert_eq!(step_data(0.0, &keyframes).rotation, keyframes[0].rotation);
    assert_eq!(step_data(1.0, &keyframes).rotation, keyframes[4].rotation);
    assert_eq!(step_data(1.0, &keyframes).position, keyframes[4].position);
}

#[test]
fn test_lerp_identities() {
    let pairs = [(0.0, 1.0), (-1.01, -0.1), (0.24, 0.62), (0.365_398_17, 0.145_398_16)];
    for (a, b) in pairs {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    let a = Vec3::new(0.24, 0.12, -0.07);
    let b = Vec3::new(0.62, 0.04, 0.34);
    assert_eq!(lerp_vec3(a, b, 0.0), a);
    assert_eq!(lerp_vec3(a, b, 1.0), b);
}

#[test]
fn test_quarter_progress_is_first_midpoint() {
    let keyframes = default_keyframes();
    let step = step_data(0.25, &keyframes);

    assert_eq!(step.step_index, 0);
    assert!((step.local_progress - 0.5).abs() < 1e-6);

    let midpoint = (keyframes[0].rotation + keyframes[1].rotation) * 0.5;
    assert!(step.rotation.abs_diff_eq(midpoint, 1e-6));

    let mid_position = (keyframes[0].position + keyframes[1].position) * 0.5;
    assert!(step.position.abs_diff_eq(mid_position, 1e-6));
}

#[test]
fn test_pose_is_continuous_across_segment_boundary() {
    let keyframes = default_keyframes();
    let left = step_data(0.5 - 1e-4, &keyframes);
    let right = step_data(0.5, &keyframes);

    assert_eq!(left.step_index, 0);
    assert_eq!(right.step_index, 1);
    assert!(left.rotation.abs_diff_eq(right.rotation, 1e-3));
    assert!(right.rotation.abs_diff_eq(keyframes[1].rotation, 1e-6));
}

// ============================================================================
// Caption opacities
// ============================================================================

#[test]
fn test_opacities_zero_for_non_adjacent_keyframes() {
    for count in 3..=5 {
        for p in sample_progress() {
            let seg = Segment::locate(p, count);
            let opacities = caption_opacities(p, count, DEFAULT_CROSSFADE_GAP);

            assert_eq!(opacities.len(), count);
            for (i, opacity) in opacities.iter().enumerate() {
                if i != seg.index && i != seg.next {
                    assert_eq!(*opacity, 0.0, "p {p}: keyframe {i}");
                }
            }
            assert!(opacities.iter().filter(|o| **o > 0.0).count() <= 2);
        }
    }
}

#[test]
fn test_opacities_stay_in_unit_range_and_sum_bounded() {
    for p in sample_progress() {
        let opacities = caption_opacities(p, 3, DEFAULT_CROSSFADE_GAP);
        for opacity in &opacities {
            assert!((0.0..=1.0).contains(opacity), "p {p}: {opacity}");
        }
        let sum: f32 = opacities.iter().sum();
        assert!(sum <= 1.0 + 1e-6, "p {p}: sum {sum}");
    }
}

#[test]
fn test_late_segment_crossfade_scenario() {
    let opacities = caption_opacities(0.9, 3, 0.3);
    let seg = Segment::locate(0.9, 3);

    assert_eq!(seg.index, 1);
    assert!((seg.local - 0.8).abs() < 1e-5);
    assert_eq!(opacities[0], 0.0);
    assert_eq!(opacities[1], 0.0);
    assert!((opacities[2] - 0.5 / 0.7).abs() < 1e-4);
}

#[test]
fn test_crossfade_overlap_window() {
    // Inside (gap, 1 - gap) both captions are partially visible
    let seg = Segment { index: 0, next: 1, local: 0.5 };
    assert!(seg.opacity(0, 0.3) > 0.0);
    assert!(seg.opacity(1, 0.3) > 0.0);

    // At the ends of the segment only one caption shows
    let start = Segment::locate(0.0, 3);
    assert_eq!(start.opacity(0, 0.3), 1.0);
    assert_eq!(start.opacity(1, 0.3), 0.0);

    let end = Segment::locate(1.0, 3);
    assert_eq!(end.opacity(1, 0.3), 0.0);
    assert_eq!(end.opacity(2, 0.3), 1.0);
}

#[test]
fn test_zero_gap_is_plain_crossfade() {
    let seg = Segment { index: 0, next: 1, local: 0.25 };
    assert!((seg.opacity(0, 0.0) - 0.75).abs() < 1e-6);
    assert!((seg.opacity(1, 0.0) - 0.25).abs() < 1e-6);
}
