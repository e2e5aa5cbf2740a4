use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rainbowboard::{Config, Session, script::Script};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rainbowboard")]
#[command(version, about = "Drawing board with pen, shape and text tools")]
struct Cli {
    /// Drawing script to replay (TOML with [[step]] tables)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Export the final board to this image (.png, .jpg or .bmp)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/rainbowboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Answer yes to clear confirmations that the script leaves open
    #[arg(long, short = 'y', action = ArgAction::SetTrue)]
    yes: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.script.is_none() && cli.output.is_none() {
        println!("rainbowboard: Drawing board with pen, shape and text tools");
        println!();
        println!("Usage:");
        println!("  rainbowboard --script board.toml --output board.png");
        println!("  rainbowboard --output blank.png      Export an empty canvas");
        println!("  rainbowboard --help                  Show help");
        println!();
        println!("Script steps (action = ...):");
        println!("  tool, color, hue, width, eraser, text,");
        println!("  press, move, release, click, undo, clear, export");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let mut session = Session::new(&config);

    if let Some(script_path) = &cli.script {
        let script = Script::load(script_path)?;
        let report = script
            .run(&mut session, cli.yes)
            .with_context(|| format!("Script {} failed", script_path.display()))?;
        log::info!(
            "Replayed {} step(s), {} shape(s) on the board",
            report.steps,
            session.history_len()
        );
        for path in &report.exported {
            println!("{}", path.display());
        }
    }

    if let Some(output) = &cli.output {
        match session.export_to_image(output)? {
            Some(path) => println!("{}", path.display()),
            None => log::warn!("Empty output path, nothing exported"),
        }
    }

    log::info!("{}", session.status());
    Ok(())
}
