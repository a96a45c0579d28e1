use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!(
                "{} {} = {}",
                "Set".green().bold(),
                key.bold(),
                value.cyan()
            );
            println!("  {}", path.display().to_string().dimmed());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let [width, height] = config.window_size();

    println!("{}", "pathsketch configuration".bold());
    if path.exists() {
        println!("  {}", path.display().to_string().dimmed());
    } else {
        println!(
            "  {} {}",
            path.display().to_string().dimmed(),
            "(not created yet, showing defaults)".yellow()
        );
    }
    println!();
    println!("  {:<24} {}", "defaults.node_color", config.node_color().name().cyan());
    println!("  {:<24} {}", "defaults.theme", config.theme().cyan());
    println!("  {:<24} {}", "defaults.window_width", width.to_string().cyan());
    println!("  {:<24} {}", "defaults.window_height", height.to_string().cyan());
    Ok(())
}
