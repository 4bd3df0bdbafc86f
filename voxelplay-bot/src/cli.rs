use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "voxelplay-bot",
    about = "VoxelPlay Bot - hourly daily-progress and mission claims for many accounts",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(short, long, env = "VOXELPLAY_CONFIG", help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        env = "VOXELPLAY_DATA_FILE",
        help = "Token file, one account per line [default: data.txt]"
    )]
    pub data_file: Option<PathBuf>,

    #[arg(long, env = "VOXELPLAY_BASE_URL", help = "Game API base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Seconds to wait between batches [default: 3600]")]
    pub interval_secs: Option<u64>,

    #[arg(long, help = "Run a single batch and exit")]
    pub once: bool,

    #[arg(long, help = "Skip the startup banner")]
    pub no_banner: bool,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Values from the command line that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub base_url: Option<String>,
    pub interval_secs: Option<u64>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            data_file: self.data_file.clone(),
            base_url: self.base_url.clone(),
            interval_secs: self.interval_secs,
        }
    }
}
