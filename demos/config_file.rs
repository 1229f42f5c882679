//! Loading and saving a file-backed document.
//!
//! Run with: cargo run --example config_file -- path/to/settings.ini

use inifile::{IniFile, IniOptions};
use std::error::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "settings.ini".to_string());

    let mut file = IniFile::load(&path, IniOptions::default())?;
    println!("{} section(s) in {}", file.len(), path);

    let runs = file
        .section("stats")
        .and_then(|s| s.get("runs"))
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    file.section_mut("stats")?.insert("runs", (runs + 1).to_string())?;
    file.write()?;

    println!("{}", file.document());
    Ok(())
}
