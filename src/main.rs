//! ToF zone logger - main entry point
//!
//! Runs the acquisition pipeline against the live sensor by default, or
//! against a captured device-monitor log with `--replay`. Replay mode runs
//! in the foreground and exits nonzero when the log or the record store
//! cannot be opened; sensor mode spawns the pipeline the way firmware
//! spawns a task and only logs its failures.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use toflog_rs::{acquisition, config::AppConfig, ReplayLogSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Multi-zone time-of-flight frame logger
#[derive(Debug, Parser)]
#[command(name = "toflog", version, about)]
struct Cli {
    /// Replay frames from a captured device-monitor log instead of the sensor
    #[arg(long, value_name = "LOG")]
    replay: Option<PathBuf>,

    /// Persistence target for zone records (overrides the config file)
    #[arg(long, value_name = "CSV")]
    output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Wait between acquisition attempts in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("toflog: {e}");
            std::process::exit(1);
        }
    };

    // The guard keeps the non-blocking file writer alive for the process.
    let _guard = init_tracing(&config);
    tracing::info!("Starting ToF zone logger");

    if let Err(e) = run(&cli, config) {
        tracing::error!("Pipeline failed to start: {e:#}");
        std::process::exit(1);
    }
}

/// Merge the config file (or defaults) with command-line overrides
fn build_config(cli: &Cli) -> toflog_rs::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(output) = &cli.output {
        config.storage.csv_path = output.clone();
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.acquisition.poll_interval_ms = interval_ms;
    }

    Ok(config)
}

/// Initialize console logging, plus daily-rolled file logging when configured
fn init_tracing(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,toflog_rs=debug"));
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    match &config.logging.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "toflog.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}

fn run(cli: &Cli, config: AppConfig) -> anyhow::Result<()> {
    if let Some(log) = &cli.replay {
        let source = ReplayLogSource::open(log)
            .with_context(|| format!("cannot replay {}", log.display()))?;
        let mut scheduler = acquisition::build_scheduler(&config, Box::new(source));
        scheduler.run().context("replay pipeline aborted")?;
    } else {
        let task = acquisition::spawn_sensor_task(config);
        // Sensor mode runs for the lifetime of the process.
        let _ = task.join();
    }

    Ok(())
}
