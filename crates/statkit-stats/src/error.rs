/// Errors reported by the statistics functions.
///
/// All variants describe problems with the caller's input; none of them are
/// transient.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The sample contains no values.
    #[display("sample is empty")]
    EmptySample,
    /// The sample is too small for the requested statistic.
    #[display("at least {required} samples are required, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },
    /// A numeric parameter is outside its valid domain.
    #[display("invalid value for parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// The input has no variation where variation is required.
    #[display("degenerate input: {reason}")]
    DegenerateInput { reason: &'static str },
}

impl StatsError {
    pub(crate) fn require_len(samples: &[f64], required: usize) -> Result<(), Self> {
        match samples.len() {
            0 => Err(Self::EmptySample),
            actual if actual < required => Err(Self::InsufficientSamples { required, actual }),
            _ => Ok(()),
        }
    }
}
