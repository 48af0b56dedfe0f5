use tracing::info;

use texpad::{PadParams, pad_directory};

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = PadParams {
        subdir: args.subdir,
    };

    info!("Scanning directory: {:?}", args.directory);
    let report = pad_directory(&args.directory, &params)?;

    println!(
        "Done: {} PNG files saved to subfolder '{}'.",
        report.saved, params.subdir
    );
    Ok(())
}
