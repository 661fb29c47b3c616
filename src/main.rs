use clap::Parser;
use log::warn;
use quill::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "quill", about = "Single-screen message composer for the terminal")]
struct Args {
    /// Placeholder text shown while the draft is empty
    #[arg(short, long)]
    placeholder: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to quill.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("quill.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Quill starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("Config unusable, falling back to defaults: {}", e);
            config::QuillConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.placeholder.as_deref());

    quill::tui::run(resolved)
}
