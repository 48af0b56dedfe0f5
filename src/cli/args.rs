use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "texpad",
    version,
    about = "Pad PNG files in a directory to even width/height and save them to a subfolder"
)]
pub struct CliArgs {
    /// Target directory to scan for PNG files
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Name of the output subfolder created inside the target directory
    #[arg(long, default_value = "Texture")]
    pub subdir: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
