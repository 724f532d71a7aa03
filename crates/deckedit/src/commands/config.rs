use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{Config, VALID_KEYS};

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    println!("  defaults.theme        {}", config.theme_name().cyan());
    println!(
        "  defaults.export_dir   {}",
        config
            .export_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(last used directory)".to_string())
            .cyan()
    );
    println!(
        "  defaults.start_slide  {}",
        config
            .start_slide()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "1".to_string())
            .cyan()
    );
    println!();
    println!("{} {VALID_KEYS}", "Keys:".dimmed());
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
