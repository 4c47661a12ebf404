use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal anchor of a caption box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    #[default]
    Center,
}

impl Align {
    /// Horizontal center of the caption box as a fraction of viewport width
    pub fn anchor_fraction(self) -> f32 {
        match self {
            Align::Left => 0.28,
            Align::Right => 0.80,
            Align::Center => 0.50,
        }
    }
}

/// Caption body - a paragraph or a bullet list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptionBody {
    Text(String),
    Bullets(Vec<String>),
}

/// Caption shown while a keyframe is in view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub title: String,
    pub body: CaptionBody,
}

impl Caption {
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: CaptionBody::Text(body.into()),
        }
    }

    pub fn bullets<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            body: CaptionBody::Bullets(items.into_iter().map(Into::into).collect()),
        }
    }
}

/// Model pose anchoring one scroll segment, plus its caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Euler angles (XYZ order) in radians
    pub rotation: Vec3,
    /// Model offset in world units
    pub position: Vec3,
    pub caption: Caption,
    #[serde(default)]
    pub align: Align,
}

impl Keyframe {
    pub fn new(rotation: Vec3, position: Vec3, caption: Caption, align: Align) -> Self {
        Self {
            rotation,
            position,
            caption,
            align,
        }
    }
}

/// Built-in product tour: three poses of the edge processor
pub fn default_keyframes() -> Vec<Keyframe> {
    vec![
        Keyframe::new(
            Vec3::new(0.025_398_163, -0.654_601_84, -1.01),
            Vec3::new(0.24, 0.12, -0.07),
            Caption::text(
                "MandlacX Edge Processor",
                "A multi-domain, first-generation AI-powered device designed for real-time threat detection.",
            ),
            Align::Left,
        ),
        Keyframe::new(
            Vec3::new(0.365_398_17, -0.464_601_84, -0.1),
            Vec3::new(0.17, 0.08, -0.07),
            Caption::bullets(
                "Key Specifications",
                [
                    "USB 3.0 Support",
                    "16 GB RAM",
                    "A7 Cortex Processor",
                    "Three multi-axis surveillance lenses",
                ],
            ),
            Align::Right,
        ),
        Keyframe::new(
            Vec3::new(0.145_398_16, -1.804_601_8, -0.42),
            Vec3::new(0.62, 0.04, 0.34),
            Caption::text(
                "On-Device Intelligence",
                "Engineered to deliver intelligent surveillance without relying on the cloud, it gives you control, speed, and reliability right where you need it.",
            ),
            Align::Right,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tour_has_three_steps() {
        let steps = default_keyframes();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].align, Align::Left);
        assert_eq!(steps[1].align, Align::Right);
        assert_eq!(steps[2].align, Align::Right);
    }

    #[test]
    fn anchors_match_layout() {
        assert_eq!(Align::Left.anchor_fraction(), 0.28);
        assert_eq!(Align::Right.anchor_fraction(), 0.80);
        assert_eq!(Align::Center.anchor_fraction(), 0.50);
    }

    #[test]
    fn keyframe_parses_from_json() {
        let json = r#"{
            "rotation": [0.1, 0.2, 0.3],
            "position": [1.0, 2.0, 3.0],
            "caption": { "title": "Specs", "body": { "bullets": ["a", "b"] } },
            "align": "right"
        }"#;

        let keyframe: Keyframe = serde_json::from_str(json).unwrap();
        assert_eq!(keyframe.rotation, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(keyframe.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(keyframe.align, Align::Right);
        assert_eq!(keyframe.caption, Caption::bullets("Specs", ["a", "b"]));
    }

    #[test]
    fn missing_align_defaults_to_center() {
        let json = r#"{
            "rotation": [0.0, 0.0, 0.0],
            "position": [0.0, 0.0, 0.0],
            "caption": { "title": "Hi", "body": { "text": "there" } }
        }"#;

        let keyframe: Keyframe = serde_json::from_str(json).unwrap();
        assert_eq!(keyframe.align, Align::Center);
    }
}
