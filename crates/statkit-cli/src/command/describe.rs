use std::path::PathBuf;

use statkit_stats::report::SampleReport;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// JSON array of numbers; reads stdin when omitted or `-`
    input: Option<PathBuf>,
    /// Number of histogram bins
    #[arg(long, default_value_t = 20)]
    bins: usize,
    /// Percentile points to report, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [5.0, 25.0, 50.0, 75.0, 95.0]
    )]
    percentiles: Vec<f64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let DescribeArg {
        input,
        bins,
        percentiles,
        output,
    } = arg;
    let samples = util::read_samples(input.as_deref())?;
    let report = SampleReport::new(&samples, percentiles, *bins)?;
    log::info!(
        "Described {} samples: mean={}, std_dev={}",
        report.summary.count,
        report.summary.mean,
        report.summary.std_dev
    );
    Output::save_json(&report, output.clone())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::command::{CommandArgs, Mode};

    fn parse_describe(args: &[&str]) -> DescribeArg {
        match CommandArgs::try_parse_from(args).unwrap().mode {
            Mode::Describe(arg) => arg,
            mode => panic!("unexpected mode: {mode:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let arg = parse_describe(&["statkit", "describe"]);
        assert_eq!(arg.input, None);
        assert_eq!(arg.bins, 20);
        assert_eq!(arg.percentiles, [5.0, 25.0, 50.0, 75.0, 95.0]);
    }

    #[test]
    fn test_custom_percentiles() {
        let arg = parse_describe(&[
            "statkit",
            "describe",
            "-",
            "--bins",
            "4",
            "--percentiles",
            "10,90",
        ]);
        assert_eq!(arg.input, Some(PathBuf::from("-")));
        assert_eq!(arg.bins, 4);
        assert_eq!(arg.percentiles, [10.0, 90.0]);
    }
}
