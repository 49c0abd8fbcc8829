//! Forest energetics calculator CLI
//!
//! Estimates daily energy flow (kJ/day) of animal groups from body size,
//! metabolic strategy and ambient temperature.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use forest_energetics::config::EnergeticsConfig;
use forest_energetics::report::{ReportStyle, render_results, render_summary};
use forest_energetics::scenario::Scenario;
use forest_energetics::{AnimalGroup, EnvironmentContext, aggregate_statistics, calculate_groups};

#[derive(Parser)]
#[command(name = "forest-energetics")]
#[command(about = "Back of the napkin energetics calculator for forest animal groups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate daily energy expenditure of one or more animal groups
    Calculate {
        /// Ambient temperature in °C (overrides the scenario and configured default)
        #[arg(long, short = 't', allow_negative_numbers = true)]
        temperature: Option<f64>,

        /// Group as category:kind:value:count:strategy, e.g. mammal:mass:0.02:100:endothermic
        #[arg(long = "group", short = 'g')]
        groups: Vec<AnimalGroup>,

        /// Scenario file (JSON); its groups are evaluated before any --group
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Also print mean, median and standard deviation across groups
        #[arg(long)]
        stats: bool,
    },
    /// Print an example scenario file to stdout
    ExampleScenario,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn calculate(
    config: &EnergeticsConfig,
    temperature: Option<f64>,
    flag_groups: Vec<AnimalGroup>,
    scenario: Option<PathBuf>,
    stats: bool,
) -> Result<()> {
    let mut env = config.environment();
    let mut groups = Vec::new();

    if let Some(path) = scenario {
        let loaded = Scenario::load_json(&path)
            .with_context(|| format!("loading scenario {}", path.display()))?;
        env = loaded.environment_or(env);
        groups.extend(loaded.groups);
    }
    let offset = groups.len();
    for (i, group) in flag_groups.into_iter().enumerate() {
        group
            .validate()
            .with_context(|| format!("group {} ({})", offset + i, group.category))?;
        groups.push(group);
    }
    if let Some(t) = temperature {
        env = EnvironmentContext::new(t);
    }

    if groups.is_empty() {
        anyhow::bail!("no animal groups given; pass --group or --scenario");
    }

    info!(
        groups = groups.len(),
        ambient_temperature_c = env.ambient_temperature_c,
        "calculating energy flow"
    );

    let results = calculate_groups(&groups, &env)?;
    let style = ReportStyle {
        precision: config.precision,
        color: config.color,
    };
    print!("{}", render_results(&results, style));

    if stats {
        let summary = aggregate_statistics(&results)?;
        print!("{}", render_summary(&summary, style));
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = EnergeticsConfig::load();
    info!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::Calculate {
            temperature,
            groups,
            scenario,
            stats,
        } => calculate(&config, temperature, groups, scenario, stats),
        Commands::ExampleScenario => {
            println!("{}", Scenario::example().to_json_pretty()?);
            Ok(())
        }
    }
}
