use std::path::PathBuf;

use anyhow::Context as _;
use serde::Serialize;
use statkit_stats::normal;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct NormalArg {
    /// Evaluate the PDF and CDF at this z-score
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "p",
        conflicts_with = "p"
    )]
    z: Option<f64>,
    /// Find the z-score whose CDF equals this probability
    #[arg(long)]
    p: Option<f64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct NormalPoint {
    z: f64,
    pdf: f64,
    cdf: f64,
}

impl NormalPoint {
    fn at(z: f64) -> Self {
        Self {
            z,
            pdf: normal::standard_normal_pdf(z),
            cdf: normal::standard_normal_cdf(z),
        }
    }

    fn from_probability(p: f64) -> anyhow::Result<Self> {
        let z = normal::inverse_standard_normal_cdf(p)
            .with_context(|| format!("Probability must lie strictly between 0 and 1, got {p}"))?;
        Ok(Self::at(z))
    }
}

pub(crate) fn run(arg: &NormalArg) -> anyhow::Result<()> {
    let point = match (arg.z, arg.p) {
        (Some(z), _) => NormalPoint::at(z),
        (None, Some(p)) => NormalPoint::from_probability(p)?,
        (None, None) => anyhow::bail!("Either --z or --p is required"),
    };
    Output::save_json(&point, arg.output.clone())
}
