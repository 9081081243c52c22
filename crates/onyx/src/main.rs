use clap::Parser;
use std::path::PathBuf;

use onyx::{App, Skin, SkinName, init_logging};

#[derive(Parser, Debug)]
#[command(name = "onyx")]
#[command(about = "A themed terminal appliance-control demo")]
struct Args {
    /// Path to the data directory (default: ~/.onyx/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Skin to start with
    #[arg(short, long, value_enum, default_value_t = SkinName::Carbon)]
    skin: SkinName,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".onyx")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let skin = Skin::load(args.skin, &data_dir)?;
    let mut app = App::new(skin);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
