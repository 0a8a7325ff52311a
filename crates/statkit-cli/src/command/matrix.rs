use std::path::PathBuf;

use serde::Serialize;
use statkit_linalg::{Eigen2, Matrix2, Svd2, Vector2, solve_2x2};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MatrixArg {
    /// Entries of `[[a, b], [c, d]]` in row order
    #[arg(
        num_args = 4,
        value_names = ["A", "B", "C", "D"],
        required = true,
        allow_negative_numbers = true
    )]
    entries: Vec<f64>,
    /// Right-hand side `x y` of the system `M v = (x, y)` to solve
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true
    )]
    solve: Option<Vec<f64>>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Everything the visualizers show for a matrix. Missing decompositions are
/// `null` in the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct MatrixReport {
    matrix: Matrix2,
    determinant: f64,
    trace: f64,
    inverse: Option<Matrix2>,
    eigen: Option<Eigen2>,
    symmetric_eigen: Option<Eigen2>,
    svd: Option<Svd2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<SystemSolution>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct SystemSolution {
    rhs: Vector2,
    x: Option<Vector2>,
}

impl MatrixReport {
    fn new(matrix: Matrix2, rhs: Option<Vector2>) -> Self {
        let eigen = matrix.eigen();
        if eigen.is_none() {
            log::info!("{matrix} has complex eigenvalues");
        }
        Self {
            matrix,
            determinant: matrix.determinant(),
            trace: matrix.trace(),
            inverse: matrix.inverse(),
            eigen,
            symmetric_eigen: matrix.symmetric_eigen(),
            svd: matrix.svd(),
            solution: rhs.map(|rhs| SystemSolution {
                rhs,
                x: solve_2x2(&matrix, rhs),
            }),
        }
    }
}

pub(crate) fn run(arg: &MatrixArg) -> anyhow::Result<()> {
    let MatrixArg {
        entries,
        solve,
        output,
    } = arg;
    let &[a, b, c, d] = entries.as_slice() else {
        anyhow::bail!("Expected 4 matrix entries, got {}", entries.len());
    };
    let rhs = match solve.as_deref() {
        None => None,
        Some(&[x, y]) => Some(Vector2::new(x, y)),
        Some(values) => anyhow::bail!("Expected 2 values for --solve, got {}", values.len()),
    };
    let report = MatrixReport::new(Matrix2::new(a, b, c, d), rhs);
    Output::save_json(&report, output.clone())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use clap::Parser as _;

    use super::*;
    use crate::command::{CommandArgs, Mode};

    fn parse_matrix(args: &[&str]) -> MatrixArg {
        match CommandArgs::try_parse_from(args).unwrap().mode {
            Mode::Matrix(arg) => arg,
            mode => panic!("unexpected mode: {mode:?}"),
        }
    }

    #[test]
    fn test_parse_entries() {
        let arg = parse_matrix(&["statkit", "matrix", "1", "-2", "3", "4"]);
        assert_eq!(arg.entries, [1.0, -2.0, 3.0, 4.0]);
        assert_eq!(arg.solve, None);

        let arg = parse_matrix(&[
            "statkit", "matrix", "1", "0", "0", "1", "--solve", "-1", "2",
        ]);
        assert_eq!(arg.solve, Some(vec![-1.0, 2.0]));

        assert!(CommandArgs::try_parse_from(["statkit", "matrix", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_report_for_rotation() {
        let report = MatrixReport::new(Matrix2::rotation(FRAC_PI_2), None);
        assert!((report.determinant - 1.0).abs() < 1e-12);
        assert_eq!(report.eigen, None);
        assert!(report.svd.is_some());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["eigen"].is_null());
        assert!(json.get("solution").is_none());
    }

    #[test]
    fn test_report_with_solution() {
        let m = Matrix2::new(2.0, 1.0, 1.0, 3.0);
        let report = MatrixReport::new(m, Some(Vector2::new(3.0, 5.0)));
        let x = report.solution.and_then(|s| s.x).unwrap();
        assert!(m.apply(x).approx_eq(Vector2::new(3.0, 5.0), 1e-12));
        assert!(report.symmetric_eigen.is_some());

        let singular = MatrixReport::new(Matrix2::new(1.0, 2.0, 2.0, 4.0), Some(Vector2::X));
        assert_eq!(singular.inverse, None);
        assert_eq!(singular.solution.unwrap().x, None);
    }
}
