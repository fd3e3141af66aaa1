// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "desk-scene")]
#[command(about = "Fixed-scene 3D demo with a free-fly camera", long_about = None)]
pub struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Leave the cursor visible and ungrabbed
    #[arg(long = "release-cursor", default_value = "false")]
    pub release_cursor: bool,
}
