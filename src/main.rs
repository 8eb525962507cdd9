use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use transito::View;
use transito::core::config;
use transito::tui;

#[derive(Parser)]
#[command(name = "transito", about = "Terminal bus tracking and booking demo")]
struct Args {
    /// View to open at startup
    #[arg(short, long, value_enum)]
    view: Option<View>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to transito.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("transito.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };
    let resolved = config::resolve(&file_config, args.view.map(Into::into));

    log::info!("Transito starting on view: {:?}", resolved.start_view);

    tui::run(resolved)
}
