use std::path::PathBuf;

use serde::Serialize;
use statkit_stats::regression::LinearRegression;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RegressArg {
    /// JSON array of `[x, y]` pairs; reads stdin when omitted or `-`
    input: Option<PathBuf>,
    /// Also predict `y` at these `x` values, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    predict: Vec<f64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RegressionReport {
    #[serde(flatten)]
    fit: LinearRegression,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    predictions: Vec<(f64, f64)>,
}

impl RegressionReport {
    fn new(points: &[(f64, f64)], predict_at: &[f64]) -> anyhow::Result<Self> {
        let fit = LinearRegression::fit(points)?;
        let predictions = predict_at.iter().map(|&x| (x, fit.predict(x))).collect();
        Ok(Self { fit, predictions })
    }
}

pub(crate) fn run(arg: &RegressArg) -> anyhow::Result<()> {
    let RegressArg {
        input,
        predict,
        output,
    } = arg;
    let points: Vec<(f64, f64)> = util::read_json_input("points", input.as_deref())?;
    log::debug!("Read {} points", points.len());
    let report = RegressionReport::new(&points, predict)?;
    Output::save_json(&report, output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let points: Vec<(f64, f64)> = serde_json::from_str("[[0, 1], [1, 3], [2, 5]]").unwrap();
        let report = RegressionReport::new(&points, &[10.0]).unwrap();
        assert_eq!(report.fit.slope, 2.0);
        assert_eq!(report.fit.intercept, 1.0);
        assert_eq!(report.predictions, [(10.0, 21.0)]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["slope"], 2.0);
        assert_eq!(json["predictions"][0][1], 21.0);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(RegressionReport::new(&[], &[]).is_err());
        assert!(RegressionReport::new(&[(1.0, 1.0), (1.0, 2.0)], &[]).is_err());
    }
}
