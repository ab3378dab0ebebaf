//! Command-line interface
//!
//! Argument definitions and the command dispatcher behind the `hrm` binary.
//! Output goes to the writer handed to [`execute`]; logs go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use hrm_domain::value_objects::{MemoryUsage, StorageUsage};
use hrm_infrastructure::config::{AppConfig, ConfigLoader, CpuMode};
use hrm_infrastructure::constants::WATCH_DEFAULT_INTERVAL_MS;
use hrm_infrastructure::logging::init_logging;
use hrm_infrastructure::{HostMetrics, HostSnapshot, Reading};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Result type of CLI commands
pub type CliResult<T> = std::result::Result<T, Box<dyn Error>>;

/// Command line interface for hrm
#[derive(Parser, Debug)]
#[command(name = "hrm")]
#[command(about = "Host resource metrics - memory, CPU, disk and battery")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Metric to report
    #[command(subcommand)]
    pub command: Command,
}

/// Metric commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Memory usage from meminfo
    Memory,

    /// Usage of the filesystem holding PATH
    Disk {
        /// Mount path (defaults to `disk.default_path`)
        path: Option<PathBuf>,
    },

    /// Battery state of charge or state of health
    Battery {
        /// Which reading
        #[arg(value_enum)]
        reading: BatteryReading,
        /// Battery name under the power-supply directory (defaults to `battery.default_name`)
        name: Option<String>,
    },

    /// CPU load
    ///
    /// The rolling sampler warms up for one full window before reading.
    Cpu {
        /// Take one sample instead of averaging a window
        #[arg(long)]
        instant: bool,
    },

    /// Print all metrics periodically until interrupted
    Watch {
        /// Delay between snapshots in milliseconds
        #[arg(long, default_value_t = WATCH_DEFAULT_INTERVAL_MS)]
        interval_ms: u64,
        /// Stop after this many snapshots
        #[arg(long)]
        count: Option<u64>,
    },
}

/// Battery reading selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryReading {
    /// State of charge
    Soc,
    /// State of health
    Soh,
}

/// Load configuration, install logging and run the command
pub async fn run(cli: Cli) -> CliResult<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, config, &mut out).await
}

/// Run one command against the given configuration
pub async fn execute(cli: &Cli, mut config: AppConfig, out: &mut dyn Write) -> CliResult<()> {
    if let Command::Cpu { instant: true } = cli.command {
        config.cpu.mode = CpuMode::Instant;
    }
    let metrics = HostMetrics::from_config(&config);

    match &cli.command {
        Command::Memory => {
            let usage = metrics.memory()?;
            emit(out, cli.json, &usage, &format_memory(&usage))?;
        }
        Command::Disk { path } => {
            let path = path.as_ref().unwrap_or(&config.disk.default_path);
            let usage = metrics.disk(path)?;
            let text = format!("Disk {}: {}", path.display(), format_storage(&usage));
            emit(out, cli.json, &usage, &text)?;
        }
        Command::Battery { reading, name } => {
            let name = name.as_deref().unwrap_or(&config.battery.default_name);
            let (label, key, value) = match reading {
                BatteryReading::Soc => ("charge", "soc", metrics.battery_soc(name)?),
                BatteryReading::Soh => ("health", "soh", metrics.battery_soh(name)?),
            };
            let doc = json!({ "battery": name, key: value });
            emit(out, cli.json, &doc, &format!("{name} {label}: {value}%"))?;
        }
        Command::Cpu { .. } => {
            if metrics.start() {
                let warmup = config.cpu.warmup() + config.cpu.sample_interval();
                info!(warmup = ?warmup, "Waiting for a full CPU load window");
                tokio::time::sleep(warmup).await;
            }
            let load = metrics.cpu_load().await;
            metrics.stop().await?;
            let load = load?;
            let doc = json!({ "cpu_load_percent": load });
            emit(out, cli.json, &doc, &format!("CPU load: {load:.1}%"))?;
        }
        Command::Watch { interval_ms, count } => {
            watch(&metrics, &config, cli.json, *interval_ms, *count, out).await?;
        }
    }
    Ok(())
}

async fn watch(
    metrics: &HostMetrics,
    config: &AppConfig,
    json: bool,
    interval_ms: u64,
    count: Option<u64>,
    out: &mut dyn Write,
) -> CliResult<()> {
    metrics.start();
    let interval = Duration::from_millis(interval_ms);
    let mut printed = 0u64;

    while count.is_none_or(|limit| printed < limit) {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            () = tokio::time::sleep(interval) => {}
        }
        let snapshot = metrics
            .snapshot(&config.disk.default_path, &config.battery.default_name)
            .await;
        emit(out, json, &snapshot, &format_snapshot(&snapshot))?;
        printed += 1;
    }

    metrics.stop().await?;
    Ok(())
}

fn emit<T: Serialize>(out: &mut dyn Write, json: bool, value: &T, text: &str) -> CliResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(value)?)?;
    } else {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// One-line text rendering of memory usage
pub fn format_memory(usage: &MemoryUsage) -> String {
    format!(
        "Memory: {:.2} GB used of {:.2} GB ({:.1}%), {:.2} GB available",
        usage.used_gb, usage.total_gb, usage.used_percent, usage.available_gb
    )
}

/// One-line text rendering of filesystem usage
pub fn format_storage(usage: &StorageUsage) -> String {
    format!(
        "{:.2} GB used of {:.2} GB ({:.1}%), {:.2} GB free",
        usage.used_gb, usage.total_gb, usage.used_percent, usage.free_gb
    )
}

/// Multi-line text rendering of a snapshot
pub fn format_snapshot(snapshot: &HostSnapshot) -> String {
    fn line<T>(label: &str, reading: &Reading<T>, render: impl Fn(&T) -> String) -> String {
        match reading {
            Reading::Value(value) => format!("{label:<12}{}", render(value)),
            Reading::Error(message) => format!("{label:<12}error: {message}"),
        }
    }

    [
        line("memory", &snapshot.memory, |m| {
            format!("{:.1}% of {:.2} GB", m.used_percent, m.total_gb)
        }),
        line("disk", &snapshot.disk, |d| {
            format!("{:.1}% of {:.2} GB", d.used_percent, d.total_gb)
        }),
        line("cpu", &snapshot.cpu_load, |load| format!("{load:.1}%")),
        line("battery soc", &snapshot.battery_soc, |soc| format!("{soc}%")),
        line("battery soh", &snapshot.battery_soh, |soh| format!("{soh}%")),
    ]
    .join("\n")
}
