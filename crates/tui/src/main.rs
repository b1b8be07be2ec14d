mod app;

use std::fs::{self, OpenOptions};

use anyhow::Result;
use tracing_subscriber::{prelude::*, EnvFilter};
use wc2launch_core::launch::BatchWriter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let writer = BatchWriter::new(std::env::current_dir()?);
    let mut app = app::LauncherApp::new(writer);
    let farewell = app.run().await?;

    // The batch confirmation is the only output after the screen is restored.
    if let Some(message) = farewell {
        println!("{message}");
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("wc2launch.log");

    let env_filter = EnvFilter::from_default_env();

    // No stdout layer: the TUI owns the terminal until exit.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
