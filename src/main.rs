use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use atlas::core::config;
use atlas::core::filter::Region;
use atlas::core::theme::Theme;
use atlas::tui;

#[derive(Parser)]
#[command(name = "atlas", about = "Terminal browser for the world country directory")]
struct Args {
    /// Country code to open directly in the detail view (e.g. DEU)
    code: Option<String>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Initial region filter
    #[arg(short, long, value_enum)]
    region: Option<Region>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A broken optional config file should not brick the app.
    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring malformed config: {}", e);
        config::AtlasConfig::default()
    });
    let resolved = config::resolve(&file_config, args.theme, args.region);

    log::info!(
        "Atlas starting up (directory: {}, theme: {:?})",
        resolved.directory_base_url,
        resolved.theme
    );

    tui::run(resolved, args.code)
}
