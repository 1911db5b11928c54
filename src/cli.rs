// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "Smoothed free-fly camera", long_about = None)]
pub struct Cli {
    /// JSON camera config; defaults are used when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the default config as JSON and exit
    #[arg(long = "print-default-config", default_value = "false")]
    pub print_default_config: bool,

    /// Pointer motion to axis units, per pixel
    #[arg(long = "mouse-scale", default_value_t = crate::core::input_adapter::DEFAULT_MOUSE_SCALE)]
    pub mouse_scale: f32,
}
