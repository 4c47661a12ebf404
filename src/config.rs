use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::showcase::{default_keyframes, Keyframe, Showcase, DEFAULT_TWEEN_DURATION};

pub const DEFAULT_MODEL_PATH: &str = "assets/product.glb";
/// Page is five viewports tall
pub const DEFAULT_PAGE_HEIGHT: f32 = 5.0;
pub const DEFAULT_MODEL_SCALE: f32 = 3.2;
/// Captions stay hidden until the page has scrolled this far
pub const CAPTION_REVEAL_PROGRESS: f32 = 0.08;

const DEFAULT_TITLE: &str = "MandlacX Edge Processor";
const DEFAULT_SUBTITLE: &str = "The Future of On-Site AI Surveillance";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_string()
}

/// Page copy and keyframes, as stored in a steps file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    pub steps: Vec<Keyframe>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            steps: default_keyframes(),
        }
    }
}

impl PageContent {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid page content")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read steps file: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse steps file: {:?}", path))
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    pub showcase: Showcase,
    pub title: String,
    pub subtitle: String,
    pub page_height: f32,
    pub model_path: PathBuf,
    pub model_scale: f32,
    pub caption_reveal: f32,
    pub tween_duration: f32,
    pub show_ui: bool,
}

impl ShowcaseConfig {
    pub fn new(content: PageContent, gap: f32, page_height: f32) -> Result<Self> {
        ensure!(
            page_height >= 1.0,
            "page height must be at least one viewport, got {page_height}"
        );

        Ok(Self {
            showcase: Showcase::new(content.steps, gap)?,
            title: content.title,
            subtitle: content.subtitle,
            page_height,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_scale: DEFAULT_MODEL_SCALE,
            caption_reveal: CAPTION_REVEAL_PROGRESS,
            tween_duration: DEFAULT_TWEEN_DURATION,
            show_ui: true,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let content = match &cli.steps {
            Some(path) => PageContent::load(path)?,
            None => PageContent::default(),
        };

        let mut config = Self::new(content, cli.gap, cli.page_height)?;
        config.model_path = cli.model.clone();
        config.show_ui = !cli.no_ui;
        Ok(config)
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let content = PageContent::default();
        Self {
            showcase: Showcase::default(),
            title: content.title,
            subtitle: content.subtitle,
            page_height: DEFAULT_PAGE_HEIGHT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_scale: DEFAULT_MODEL_SCALE,
            caption_reveal: CAPTION_REVEAL_PROGRESS,
            tween_duration: DEFAULT_TWEEN_DURATION,
            show_ui: true,
        }
    }
}
