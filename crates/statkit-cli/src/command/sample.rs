use std::path::PathBuf;

use statkit_sampling::{Distribution, seeded_rng};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SampleArg {
    /// Number of values to generate
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// Seed for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    distribution: DistributionArg,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum DistributionArg {
    /// Normal distribution
    Normal {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mean: f64,
        #[arg(long, default_value_t = 1.0)]
        std_dev: f64,
    },
    /// Log-normal distribution; `mu` and `sigma` describe `ln(x)`
    LogNormal {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,
        #[arg(long, default_value_t = 1.0)]
        sigma: f64,
    },
    /// Exponential distribution
    Exponential {
        #[arg(long, default_value_t = 1.0)]
        rate: f64,
    },
    /// Continuous uniform distribution on `[min, max)`
    Uniform {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        max: f64,
    },
    /// Poisson distribution
    Poisson {
        #[arg(long, default_value_t = 1.0)]
        lambda: f64,
    },
    /// Beta distribution
    Beta {
        #[arg(long, default_value_t = 2.0)]
        alpha: f64,
        #[arg(long, default_value_t = 2.0)]
        beta: f64,
    },
}

impl From<DistributionArg> for Distribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::Normal { mean, std_dev } => Self::Normal { mean, std_dev },
            DistributionArg::LogNormal { mu, sigma } => Self::LogNormal { mu, sigma },
            DistributionArg::Exponential { rate } => Self::Exponential { rate },
            DistributionArg::Uniform { min, max } => Self::Uniform { min, max },
            DistributionArg::Poisson { lambda } => Self::Poisson { lambda },
            DistributionArg::Beta { alpha, beta } => Self::Beta { alpha, beta },
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SampleFromArg {
    /// JSON file such as `{"distribution": {"kind": "normal", "mean": 0, "std_dev": 1}, "count": 100}`
    config: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct SampleConfig {
    distribution: Distribution,
    #[serde(default = "SampleConfig::default_count")]
    count: usize,
    #[serde(default)]
    seed: Option<u64>,
}

impl SampleConfig {
    fn default_count() -> usize {
        1000
    }
}

pub(crate) fn run(arg: &SampleArg) -> anyhow::Result<()> {
    let SampleArg {
        count,
        seed,
        output,
        distribution,
    } = arg;
    let distribution = Distribution::from(distribution.clone());
    let values = generate(&distribution, *count, *seed)?;
    Output::save_json(&values, output.clone())
}

pub(crate) fn run_from(arg: &SampleFromArg) -> anyhow::Result<()> {
    let SampleFromArg { config, output } = arg;
    let config: SampleConfig = util::read_json_file("sample config", config)?;
    let values = generate(&config.distribution, config.count, config.seed)?;
    Output::save_json(&values, output.clone())
}

fn generate(
    distribution: &Distribution,
    count: usize,
    seed: Option<u64>,
) -> anyhow::Result<Vec<f64>> {
    log::info!("Generating {count} values from {distribution}");
    let values = match seed {
        Some(seed) => distribution.sample(&mut seeded_rng(seed), count)?,
        None => distribution.sample(&mut rand::rng(), count)?,
    };
    Ok(values)
}
