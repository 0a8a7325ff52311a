use clap::{Parser, Subcommand};

use self::{
    describe::DescribeArg,
    matrix::MatrixArg,
    normal::NormalArg,
    regress::RegressArg,
    sample::{SampleArg, SampleFromArg},
    z_test::ZTestArg,
};

mod describe;
mod matrix;
mod normal;
mod regress;
mod sample;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a random sample from a distribution
    Sample(SampleArg),
    /// Generate a random sample described by a JSON config file
    SampleFrom(#[clap(flatten)] SampleFromArg),
    /// Summary statistics, percentiles and histogram of a JSON sample
    Describe(#[clap(flatten)] DescribeArg),
    /// Standard normal PDF, CDF or inverse CDF
    Normal(#[clap(flatten)] NormalArg),
    /// One-sample z-test against a known population
    ZTest(#[clap(flatten)] ZTestArg),
    /// Least-squares line through `[x, y]` points
    Regress(#[clap(flatten)] RegressArg),
    /// Analyze a 2x2 matrix
    Matrix(#[clap(flatten)] MatrixArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Sample(arg) => sample::run(&arg)?,
        Mode::SampleFrom(arg) => sample::run_from(&arg)?,
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Normal(arg) => normal::run(&arg)?,
        Mode::ZTest(arg) => z_test::run(&arg)?,
        Mode::Regress(arg) => regress::run(&arg)?,
        Mode::Matrix(arg) => matrix::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let args =
            CommandArgs::try_parse_from(["statkit", "describe", "data.json", "--bins", "5"])
                .unwrap();
        assert!(matches!(args.mode, Mode::Describe(_)));

        let args =
            CommandArgs::try_parse_from(["statkit", "sample-from", "config.json"]).unwrap();
        assert!(matches!(args.mode, Mode::SampleFrom(_)));

        let args = CommandArgs::try_parse_from([
            "statkit",
            "z-test",
            "--population-mean",
            "0",
            "--population-std-dev",
            "1",
            "--input",
            "s.json",
        ])
        .unwrap();
        assert!(matches!(args.mode, Mode::ZTest(_)));

        assert!(CommandArgs::try_parse_from(["statkit"]).is_err());
        assert!(CommandArgs::try_parse_from(["statkit", "unknown"]).is_err());
    }
}
