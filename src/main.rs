mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cleantime::{Calculator, generate_svg};
use config::Cli;
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    // Calculate cleantime
    let calculator = Calculator::new(cli.calculator_options());
    let now = cli.now();
    let report = calculator
        .calculate(cli.date, now)
        .context("failed to build result text")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{}", report.days_blurb);
        if let Some(main) = &report.main_blurb {
            println!("{main}");
        }
        if !report.keytags.is_empty() {
            let tokens: Vec<String> = report.keytags.iter().map(ToString::to_string).collect();
            println!("Keytags: {}", tokens.join(", "));
        }
    }

    // Generate SVG
    if let Some(path) = &cli.svg {
        let svg = generate_svg(&calculator, &report, cli.theme);
        fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote svg");
    }

    Ok(())
}
