use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Frames per second of the simulated capture (overrides config)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Camera facing: front or back (overrides config)
    #[arg(long)]
    pub facing: Option<String>,

    /// Profile data directory (overrides config)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Number of simulated frames to run
    #[arg(long)]
    pub frames: Option<u32>,

    /// Force a fresh calibration even if a profile exists
    #[arg(long, default_value_t = false)]
    pub recalibrate: bool,
}
