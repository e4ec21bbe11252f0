use clap::Parser;
use rentdesk::core::config;
use rentdesk::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "rentdesk", about = "Terminal front desk for a car rental backend")]
struct Args {
    /// Base URL of the rental backend (overrides RENTDESK_BACKEND_URL and the config file)
    #[arg(short, long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::RentdeskConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config, args.backend_url.as_deref());

    // Initialize file logger - writes to rentdesk.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("rentdesk.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Rentdesk starting up against backend: {}", resolved.backend_url);

    tui::run(resolved)
}
