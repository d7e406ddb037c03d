mod cli;
mod config;
mod report;
mod solve;

use clap::Parser;

use cli::Args;
use config::{load_arm_config, resolve_arm_config};
use report::{render_json, render_summary};
use solve::{ensure_success, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(log::LevelFilter::Off);
    log_config.set_thread_level(log::LevelFilter::Off);
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Logs go to stderr so `--json` output on stdout stays machine readable.
    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let file = match &args.config {
        Some(path) => {
            log::debug!("Reading arm configuration from {}", path.display());
            Some(load_arm_config(path)?)
        }
        None => None,
    };
    let arm = resolve_arm_config(file, args.length1, args.length2)?;
    log::debug!(
        "Arm segments: length1 = {:.2}, length2 = {:.2}",
        arm.length1(),
        arm.length2()
    );

    let summary = run(&arm, args.command);

    if args.json {
        println!("{}", render_json(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
    }

    ensure_success(&summary)
}
