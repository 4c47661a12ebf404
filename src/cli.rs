// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_MODEL_PATH, DEFAULT_PAGE_HEIGHT};
use crate::showcase::DEFAULT_CROSSFADE_GAP;

#[derive(Parser, Debug, Clone)]
#[command(name = "scroll-showcase")]
#[command(about = "Scroll-driven 3D product showcase", long_about = None)]
pub struct Cli {
    /// glTF or GLB model to display
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// JSON file with the page title and keyframes
    #[arg(long)]
    pub steps: Option<PathBuf>,

    /// Fraction of each segment where two captions overlap
    #[arg(long, default_value_t = DEFAULT_CROSSFADE_GAP)]
    pub gap: f32,

    /// Page height in viewport heights
    #[arg(long = "page-height", default_value_t = DEFAULT_PAGE_HEIGHT)]
    pub page_height: f32,

    /// Disable the caption overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
