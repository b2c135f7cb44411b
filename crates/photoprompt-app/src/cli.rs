use clap::Parser;

/// photoprompt: turn a photo into a conversation starter.
#[derive(Parser, Debug)]
#[command(name = "photoprompt", version, about)]
pub struct Args {
    /// Photo to start with, picked as if from the gallery.
    #[arg(short = 'i', long, conflicts_with = "camera")]
    pub image: Option<String>,

    /// Start with a camera capture instead of a gallery photo.
    #[arg(long)]
    pub camera: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override, as a tracing directive (e.g. photoprompt=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
